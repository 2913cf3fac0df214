use leptos::prelude::*;
use leptos_meta::{Meta, Script, Title};

use crate::content::{self, Achievement, Site};

use super::reveal::{Reveal, RevealConfig};
use super::SectionBoundary;

/// JSON-LD `Person` block describing the site owner.
fn structured_data(site: &Site) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": site.name,
        "jobTitle": site.job_title,
        "worksFor": {
            "@type": "Organization",
            "name": site.organization,
        },
        "description": site.description,
    })
    .to_string()
}

fn resolve_profile_image(override_path: Option<String>, default_path: &str) -> String {
    override_path.unwrap_or_else(|| default_path.to_string())
}

#[component]
pub fn AboutPage(
    #[prop(optional)] profile_image: Option<String>,
    #[prop(optional)] achievements: Option<Vec<Achievement>>,
) -> impl IntoView {
    let profile_image = StoredValue::new(profile_image);
    let achievements = StoredValue::new(achievements);
    view! {
        <Title text="About Me" />
        <Meta
            name="description"
            content="Learn about my expertise in frontend development, React, and SEO."
        />
        <section
            class="py-12 px-4 sm:px-6 max-w-4xl mx-auto bg-gradient-to-br from-blue-800 to-blue-500 rounded-xl shadow-2xl border border-blue-400/10"
            aria-labelledby="about-heading"
        >
            <h1
                id="about-heading"
                class="text-3xl sm:text-4xl font-extrabold text-center text-white mb-8 tracking-tight"
            >
                "About Me"
            </h1>
            <SectionBoundary>
                {move || {
                    content::site()
                        .map(|site| {
                            let image = resolve_profile_image(
                                profile_image.get_value(),
                                &site.profile_image,
                            );
                            let shown = content::display_achievements(
                                achievements.get_value(),
                                site.achievements.clone(),
                            );
                            let json_ld = structured_data(&site);
                            let bio = site.bio.clone();
                            view! {
                                <Script type_="application/ld+json">{json_ld}</Script>
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                    <Reveal class="p-4 bg-blue-100/10 rounded-lg border border-blue-400/20">
                                        <div role="region" aria-label="Professional Bio">
                                            {bio
                                                .into_iter()
                                                .map(|para| {
                                                    view! {
                                                        <p class="text-base sm:text-lg text-white leading-relaxed justify-text mb-3">
                                                            {para}
                                                        </p>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Reveal>
                                    <Reveal class="p-4 bg-blue-100/10 rounded-lg border border-blue-400/20">
                                        <div role="region" aria-label="Achievements and Profile">
                                            <div class="relative bg-blue-200/10 rounded-lg overflow-hidden h-48 sm:h-56 mb-4">
                                                <img
                                                    src=image
                                                    alt="Profile picture"
                                                    class="object-cover w-full h-full rounded-lg"
                                                    loading="lazy"
                                                />
                                            </div>
                                            <h3 class="text-xl font-semibold text-blue-300 mb-3">
                                                "Key Achievements"
                                            </h3>
                                            <ul class="list-none space-y-2 text-base text-white">
                                                {shown
                                                    .into_iter()
                                                    .enumerate()
                                                    .map(|(index, achievement)| {
                                                        view! {
                                                            <li>
                                                                <Reveal
                                                                    config=RevealConfig::default().stagger_ms(100)
                                                                    index=index
                                                                    class="flex items-start gap-2"
                                                                >
                                                                    <svg
                                                                        class="w-5 h-5 text-blue-300 flex-shrink-0"
                                                                        fill="currentColor"
                                                                        viewBox="0 0 24 24"
                                                                        aria-hidden="true"
                                                                    >
                                                                        <path d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z" />
                                                                    </svg>
                                                                    <span>{achievement.description}</span>
                                                                </Reveal>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </Reveal>
                                </div>
                            }
                        })
                }}
            </SectionBoundary>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_site() -> Site {
        Site {
            name: "Susan Rimal".to_string(),
            job_title: "Frontend Developer".to_string(),
            organization: "Kritimmind Technology".to_string(),
            description: "Frontend developer.".to_string(),
            profile_image: "/Profile.jpeg".to_string(),
            bio: vec!["Hello.".to_string()],
            achievements: Vec::new(),
        }
    }

    #[test]
    fn structured_data_is_well_formed() {
        let data: serde_json::Value =
            serde_json::from_str(&structured_data(&test_site())).unwrap();
        assert_eq!(data["@type"], "Person");
        assert_eq!(data["name"], "Susan Rimal");
        assert_eq!(data["worksFor"]["@type"], "Organization");
        assert_eq!(data["worksFor"]["name"], "Kritimmind Technology");
    }

    #[test]
    fn profile_image_prefers_the_override() {
        assert_eq!(
            resolve_profile_image(None, "/Profile.jpeg"),
            "/Profile.jpeg"
        );
        assert_eq!(
            resolve_profile_image(Some("/other.png".to_string()), "/Profile.jpeg"),
            "/other.png"
        );
    }
}
