use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::content::{self, Project};

use super::reveal::{Reveal, RevealConfig};
use super::SectionBoundary;

/// Image preview selection. Holds at most one image at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<String>,
}

impl Lightbox {
    /// Opening while another preview is showing replaces it.
    pub fn open(&mut self, src: &str) {
        self.selected = Some(src.to_string());
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::default());

    view! {
        <Title text="Projects" />
        <section class="p-12 max-w-6xl mx-auto">
            <h1 class="text-5xl font-extrabold text-blue-500 mb-8">"Projects"</h1>
            <SectionBoundary>
                {move || {
                    content::projects()
                        .map(|projects| {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                                    {projects
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, project)| {
                                            view! { <ProjectCard project=project index=index lightbox=lightbox /> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </SectionBoundary>
            <ImageOverlay lightbox=lightbox />
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let thumbnail = match project.image.clone() {
        Some(image) => {
            let alt = format!("{} screenshot", project.title);
            let src = image.clone();
            Either::Left(view! {
                <img
                    src=image
                    alt=alt
                    class="h-full w-full object-cover rounded cursor-pointer"
                    loading="lazy"
                    on:click=move |_| lightbox.update(|l| l.open(&src))
                />
            })
        }
        None => Either::Right(view! {
            <p class="text-center text-gray-800">"No image available"</p>
        }),
    };

    view! {
        <Reveal
            config=RevealConfig::default().stagger_ms(150)
            index=index
            class="bg-gray-100 p-6 rounded-lg shadow-md"
        >
            <h3 class="text-2xl font-semibold text-[#B22222] mb-2">{project.title.clone()}</h3>
            <p class="text-gray-700 mb-4">{project.description.clone()}</p>
            <div class="h-32 bg-gray-200 rounded">{thumbnail}</div>
        </Reveal>
    }
}

/// Full-screen dimmed overlay for the selected project image. Clicking the
/// background or the dismiss button closes it; clicks on the image itself
/// are swallowed.
#[component]
fn ImageOverlay(lightbox: RwSignal<Lightbox>) -> impl IntoView {
    view! {
        {move || {
            lightbox
                .with(|l| l.selected().map(str::to_owned))
                .map(|src| {
                    view! {
                        <div
                            class="fixed inset-0 bg-black/75 flex items-center justify-center z-50"
                            on:click=move |_| lightbox.update(Lightbox::dismiss)
                        >
                            <div class="relative max-w-4xl w-full">
                                <img
                                    src=src
                                    alt="Project screenshot preview"
                                    class="w-full h-auto max-h-[80vh] object-contain rounded"
                                    on:click=|ev| ev.stop_propagation()
                                />
                                <button
                                    class="absolute top-2 right-2 text-white bg-red-600 rounded-full w-8 h-8 flex items-center justify-center text-xl font-bold"
                                    aria-label="Close preview"
                                    on:click=move |_| lightbox.update(Lightbox::dismiss)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
