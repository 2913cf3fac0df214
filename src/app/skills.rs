use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{self, SkillCategory};

use super::reveal::{Reveal, RevealConfig};
use super::SectionBoundary;

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Title text="Skills" />
        <section class="py-20 px-4 sm:px-6 lg:px-8 max-w-7xl mx-auto bg-gradient-to-b from-gray-50 to-white">
            <h1 class="text-5xl md:text-6xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-indigo-600 mb-12 text-center tracking-tight">
                "Skills"
            </h1>
            <SectionBoundary>
                {|| {
                    content::skill_categories()
                        .map(|categories| {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 lg:gap-8">
                                    {categories
                                        .into_iter()
                                        .map(|category| view! { <SkillCard category=category /> })
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
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
        <Reveal
            config=RevealConfig::default().threshold(0.2)
            class="bg-white p-6 rounded-xl shadow-lg hover:shadow-xl border border-gray-100"
        >
            <h3 class="text-2xl font-bold text-gray-800 mb-5 tracking-tight">
                {category.title.clone()}
            </h3>
            <ul class="space-y-4">
                {category
                    .skills
                    .into_iter()
                    .map(|skill| {
                        let logo = skill
                            .logo
                            .clone()
                            .map(|logo| {
                                let alt = format!("{} Logo", skill.name);
                                view! {
                                    <img
                                        src=logo
                                        alt=alt
                                        class="h-7 w-7 object-contain transition-transform duration-300 group-hover:scale-110"
                                        loading="lazy"
                                    />
                                }
                            });
                        view! {
                            <li class="flex items-center space-x-3 group">
                                {logo}
                                <span class="text-gray-700 font-medium group-hover:text-blue-600 transition-colors duration-300">
                                    {skill.name}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Reveal>
    }
}
