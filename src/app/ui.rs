use std::time::Duration;

use leptos::{ev::KeyboardEvent, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::portfolio::Glyph;

use super::icons::Icon;

const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Regular,
    Icon,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Regular => "h-10 px-4 py-2",
            ButtonSize::Icon => "h-10 w-10",
        }
    }
}

/// Click handlers are attached at the call site with `on:click`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = format!("{BUTTON_BASE} {} {} {class}", variant.class(), size.class());
    view! {
        <button type="button" class=class aria-label=label>
            {children()}
        </button>
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-lg border bg-card text-card-foreground shadow-sm {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col space-y-1.5 p-6">{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <h3 class=format!(
            "text-2xl font-semibold leading-none tracking-tight {class}",
        )>{children()}</h3>
    }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="text-sm text-muted-foreground">{children()}</p> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="p-6 pt-0">{children()}</div> }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <div class="flex items-center p-6 pt-0">{children()}</div> }
}

/// Matches the `sheet-out` timing in tailwind.config.js.
const SHEET_EXIT: Duration = Duration::from_millis(300);

/// Right-hand slide-in panel. Backdrop and panel are only mounted while open
/// (plus the exit fade), so closed content is never in the tab order. Every
/// close request (close button, backdrop click, Escape) goes through
/// `on_open_change(false)`.
#[component]
pub fn Sheet(
    #[prop(into)] open: Signal<bool>,
    on_open_change: Callback<bool>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let _ = use_event_listener(use_document(), leptos::ev::keydown, move |ev: KeyboardEvent| {
        if open.get_untracked() && ev.key() == "Escape" {
            on_open_change.run(false);
        }
    });

    view! {
        <AnimatedShow
            when=open
            show_class="animate-fade-in"
            hide_class="animate-sheet-out"
            hide_delay=SHEET_EXIT
        >
            <div
                class="fixed inset-0 z-50 bg-black/80"
                on:click=move |_| on_open_change.run(false)
            ></div>
            <div
                role="dialog"
                aria-modal="true"
                class=format!(
                    "fixed inset-y-0 right-0 z-50 h-full border-l bg-background p-6 shadow-lg animate-sheet-in {class}",
                )
            >
                <button
                    type="button"
                    class="absolute right-4 top-4 rounded-sm opacity-70 transition-opacity hover:opacity-100"
                    aria-label="Close"
                    on:click=move |_| on_open_change.run(false)
                >
                    <Icon glyph=Glyph::X class="h-4 w-4" />
                </button>
                {children()}
            </div>
        </AnimatedShow>
    }
}
