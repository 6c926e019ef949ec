use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use crate::portfolio::{
    Section, SectionBounds, ViewState, CONTACT_LINKS, GRADIENT_TEXT, PROFILE, PROJECTS, SKILLS,
};

use super::{
    avatar::{Avatar, Biography},
    cards::{ProjectCard, SkillCard},
    header::Header,
    icons::Icon,
    motion::{Motion, Reveal, Trigger},
    ui::{Button, ButtonSize, ButtonVariant},
};

/// Viewport-relative bounds of a section's element, if it is in the DOM.
fn measure_section(section: Section) -> Option<SectionBounds> {
    let rect = document()
        .get_element_by_id(section.id())?
        .get_bounding_client_rect();
    Some(SectionBounds::new(rect.top(), rect.bottom()))
}

fn heading_class(extra: &str) -> String {
    format!("text-3xl font-bold mb-8 {extra} {GRADIENT_TEXT}")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());

    // Only scroll events recompute the active section; the initial value
    // stands until the first one. The listener is removed when this
    // component's owner is disposed.
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        state.maybe_update(|s| {
            let changed = s.apply_scroll(measure_section);
            if changed {
                log::debug!("active section: {}", s.active_section);
            }
            changed
        });
    });

    view! {
        <Title text="Portfolio" />
        <div class=move || state.with(|s| s.theme_class())>
            <div class="bg-background text-foreground transition-colors duration-300">
                <Header state />
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Contact />
                <footer class="bg-background py-6">
                    <div class="container mx-auto px-4 text-center">
                        <p>{PROFILE.copyright()}</p>
                    </div>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="py-20 bg-muted">
            <Reveal motion=Motion::Rise trigger=Trigger::Mount>
                <div class="container mx-auto px-4 text-center">
                    <h2 class=format!(
                        "text-4xl font-bold mb-4 {GRADIENT_TEXT}",
                    )>{PROFILE.greeting()}</h2>
                    <p class="text-xl mb-8">{PROFILE.tagline}</p>
                    <Button>"Download CV"</Button>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20">
            <Reveal>
                <div class="container mx-auto px-4">
                    <h2 class=heading_class("text-center")>"About Me"</h2>
                    <div class="flex flex-col md:flex-row items-center gap-8">
                        <div class="w-full md:w-1/3">
                            <Avatar />
                        </div>
                        <div class="w-full md:w-2/3">
                            <Biography />
                        </div>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-muted">
            <div class="container mx-auto px-4">
                <h2 class=heading_class("text-center")>"My Skills"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS.into_iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20">
            <div class="container mx-auto px-4">
                <h2 class=heading_class("text-center")>"Featured Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 bg-muted">
            <Reveal>
                <div class="container mx-auto px-4 text-center">
                    <h2 class=heading_class("")>"Get in Touch"</h2>
                    <div class="flex justify-center space-x-4">
                        {CONTACT_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::Outline
                                        size=ButtonSize::Icon
                                        label=link.label
                                    >
                                        <Icon glyph=link.icon class="h-5 w-5" />
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos_meta::provide_meta_context;

    #[test]
    fn test_page_renders_sections_in_order() {
        let owner = Owner::new();
        owner.set();
        provide_meta_context();

        let html = view! { <HomePage /> }.to_html();
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| {
                html.find(&format!("id=\"{}\"", s.id()))
                    .unwrap_or_else(|| panic!("missing section {s}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        // light theme until toggled
        assert!(html.contains("class=\"min-h-screen\""));
        assert!(!html.contains("View Project"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn test_initial_highlight_is_about() {
        let owner = Owner::new();
        owner.set();
        provide_meta_context();

        let html = view! { <HomePage /> }.to_html();
        let about_link = html
            .find("href=\"#about\"")
            .expect("about link should render");
        let highlighted = html
            .find("text-primary font-semibold")
            .expect("one link should be highlighted");
        // the highlighted class sits on the about anchor's own tag
        let tag_start = html[..about_link].rfind('<').expect("anchor opens a tag");
        let tag_end = about_link + html[about_link..].find('>').expect("anchor closes");
        assert!(highlighted > tag_start && highlighted < tag_end);
    }
}
