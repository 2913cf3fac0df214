use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/about", "About"),
    ("/skills", "Skills"),
    ("/projects", "Projects"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-blue-500 p-6 fixed w-full top-0 z-10 shadow-lg transition-all duration-300 hover:shadow-xl">
            <nav class="max-w-6xl mx-auto flex justify-between items-center">
                <A href="/" attr:class="text-3xl font-bold text-white hover:text-gray-200">
                    "Susan Rimal"
                </A>
                <ul class="flex space-x-8">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <A href=*href attr:class="text-white hover:text-gray-200">
                                        {*label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
