mod about;
mod contact;
mod header;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use header::Header;
use projects::ProjectsPage;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-gray-50 text-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Susan Rimal - {title}") />
        <Meta
            name="description"
            content="Portfolio of Susan Rimal, frontend developer at Kritimmind Technology."
        />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-7xl pt-28 px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=|| view! { <AboutPage /> } />
                    <Route path=path!("/about") view=|| view! { <AboutPage /> } />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <footer class="text-center text-sm text-gray-500 py-8">
                "© Susan Rimal · built " {env!("BUILD_TIME")}
            </footer>
        </Router>
    }
}

/// Wraps a section's content so a malformed content file blanks only that
/// section, not the whole page.
#[component]
pub(crate) fn SectionBoundary(children: ChildrenFn) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|_| {
            view! { <div class="text-red-500 text-center p-4">"Something went wrong."</div> }
        }>{children()}</ErrorBoundary>
    }
}
