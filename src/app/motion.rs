use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Starting pose of a reveal; every variant settles at full opacity, no
/// offset and full scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Fade,
    Rise,
    Grow,
}

impl Motion {
    fn hidden_class(self) -> &'static str {
        match self {
            Motion::Fade => "opacity-0",
            Motion::Rise => "opacity-0 translate-y-5",
            Motion::Grow => "opacity-0 scale-90",
        }
    }

    fn shown_class(self) -> &'static str {
        "opacity-100 translate-y-0 scale-100"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    #[default]
    InView,
}

/// Plays `motion` once, either as soon as the client mounts or the first time
/// the wrapper scrolls into view.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(optional)] trigger: Trigger,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if trigger == Trigger::Mount || visible.get() {
            set_revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=node
            class=move || {
                let pose = if revealed.get() { motion.shown_class() } else { motion.hidden_class() };
                format!("transform transition-all duration-500 ease-out {class} {pose}")
            }
        >
            {children()}
        </div>
    }
}
