use std::time::Duration;

use leptos::prelude::*;

use crate::portfolio::{CardHover, Project, Skill, GRADIENT_TEXT};

use super::{
    icons::Icon,
    motion::{Motion, Reveal},
    ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle},
};

/// Matches the `fade-out` keyframes in input.css.
const ACTION_FADE: Duration = Duration::from_millis(200);

#[component]
pub fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <Reveal motion=Motion::Rise class="h-full">
            <Card class="h-full">
                <CardHeader>
                    <CardTitle class="flex items-center">
                        <Icon glyph=skill.icon class="h-8 w-8" />
                        <span class=format!("ml-2 {GRADIENT_TEXT}")>{skill.title}</span>
                    </CardTitle>
                </CardHeader>
                <CardContent>
                    <p>{skill.description}</p>
                </CardContent>
            </Card>
        </Reveal>
    }
}

/// The "View Project" action is only mounted while the pointer is over the
/// card. There is no keyboard equivalent.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let hover = RwSignal::new(CardHover::default());
    let shows_action = Signal::derive(move || hover.with(|h| h.shows_action()));

    view! {
        <Reveal motion=Motion::Grow class="h-full">
            <div
                class="h-full"
                on:mouseenter=move |_| hover.update(|h| h.enter())
                on:mouseleave=move |_| hover.update(|h| h.leave())
            >
                <Card class="h-full transition-transform duration-300 transform hover:scale-105">
                    <CardHeader>
                        <CardTitle class=GRADIENT_TEXT>{project.title}</CardTitle>
                        <CardDescription>{project.description}</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="bg-primary text-primary-foreground text-sm px-2 py-1 rounded">
                                            {*tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </CardContent>
                    <CardFooter>
                        <ViewProjectAction when=shows_action />
                    </CardFooter>
                </Card>
            </div>
        </Reveal>
    }
}

/// Mounted while `when` holds, unmounted after a short fade once it drops.
#[component]
fn ViewProjectAction(#[prop(into)] when: Signal<bool>) -> impl IntoView {
    view! {
        <AnimatedShow
            when
            show_class="animate-fade-in"
            hide_class="animate-fade-out"
            hide_delay=ACTION_FADE
        >
            <Button variant=ButtonVariant::Outline>"View Project"</Button>
        </AnimatedShow>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::portfolio::{PROJECTS, SKILLS};

    #[test]
    fn test_project_card_without_hover_has_no_action() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <ProjectCard project=PROJECTS[0] /> }.to_html();
        assert!(html.contains("Project 1"));
        assert!(html.contains("A brief description of project 1"));
        for tag in PROJECTS[0].tags {
            assert!(html.contains(tag));
        }
        assert!(!html.contains("View Project"));
    }

    #[test]
    fn test_view_project_action_follows_hover() {
        let owner = Owner::new();
        owner.set();

        let hover = RwSignal::new(CardHover::default());
        let shows_action = Signal::derive(move || hover.with(|h| h.shows_action()));
        let idle = view! { <ViewProjectAction when=shows_action /> }.to_html();
        assert!(!idle.contains("View Project"));

        hover.update(|h| h.enter());
        let hovered = view! { <ViewProjectAction when=shows_action /> }.to_html();
        assert!(hovered.contains("View Project"));

        hover.update(|h| h.leave());
        let left = view! { <ViewProjectAction when=shows_action /> }.to_html();
        assert!(!left.contains("View Project"));
    }

    #[test]
    fn test_skill_card_renders_copy() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <SkillCard skill=SKILLS[1] /> }.to_html();
        assert!(html.contains("Graphic Design"));
        assert!(html.contains("Creating visually appealing designs and user interfaces"));
        assert!(html.contains("<svg"));
    }
}
