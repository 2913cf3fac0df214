use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{self, ContactMethod};

use super::reveal::{Reveal, RevealConfig};
use super::SectionBoundary;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <section class="py-16 px-8 max-w-6xl mx-auto bg-blue-500 text-white rounded-lg shadow-lg">
            <h1 class="text-5xl font-extrabold mb-12 text-center">"Contact"</h1>
            <SectionBoundary>
                {|| {
                    content::contact_methods()
                        .map(|methods| {
                            view! {
                                <div class="space-y-8 max-w-2xl mx-auto">
                                    {methods
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, method)| {
                                            view! {
                                                <Reveal
                                                    config=RevealConfig::default().stagger_ms(100)
                                                    index=index
                                                >
                                                    <ContactLink method=method />
                                                </Reveal>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </SectionBoundary>
        </section>
    }
}

#[component]
fn ContactLink(method: ContactMethod) -> impl IntoView {
    let icon = method
        .icon
        .clone()
        .map(|icon| view! { <i class=icon aria-hidden="true"></i> });
    view! {
        <p class="text-xl flex items-center gap-4">
            <span class="font-semibold">{method.label.clone()} ":"</span>
            <a
                href=method.href.clone()
                target=method.kind.target()
                rel=method.kind.rel()
                class="underline hover:text-gray-200 transition-colors duration-300 flex items-center gap-2"
            >
                {icon}
                {method.value.clone()}
            </a>
        </p>
    }
}
