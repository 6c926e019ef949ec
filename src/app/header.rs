use leptos::prelude::*;

use crate::portfolio::{Glyph, Section, ViewState, PROFILE};

use super::{
    icons::Icon,
    ui::{Button, ButtonSize, ButtonVariant, Sheet},
};

fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "hover:text-primary transition-colors duration-300 text-primary font-semibold"
    } else {
        "hover:text-primary transition-colors duration-300"
    }
}

/// Sheet open/close requests, from the menu trigger or the sheet itself.
fn menu_open_handler(state: RwSignal<ViewState>) -> Callback<bool> {
    Callback::new(move |open: bool| {
        log::debug!("mobile menu open: {open}");
        state.update(|s| s.set_menu_open(open));
    })
}

fn close_menu_handler(state: RwSignal<ViewState>) -> Callback<()> {
    Callback::new(move |_: ()| {
        log::debug!("mobile menu closed by navigation");
        state.update(|s| s.close_menu());
    })
}

fn toggle_dark_mode(state: RwSignal<ViewState>) {
    state.update(|s| s.toggle_dark_mode());
    log::debug!("dark mode: {}", state.with_untracked(|s| s.dark_mode));
}

#[component]
pub fn Header(state: RwSignal<ViewState>) -> impl IntoView {
    let dark_mode = move || state.with(|s| s.dark_mode);
    let active = Signal::derive(move || state.with(|s| s.active_section));
    let menu_open = Signal::derive(move || state.with(|s| s.menu_open));

    let on_open_change = menu_open_handler(state);
    let close_menu = close_menu_handler(state);

    view! {
        <header class="sticky top-0 z-10 bg-background border-b">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold">{PROFILE.name}</h1>
                <nav class="hidden md:flex space-x-4">
                    <DesktopNav active />
                </nav>
                <div class="flex items-center space-x-4">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        label="Toggle dark mode"
                        on:click=move |_| toggle_dark_mode(state)
                    >
                        {move || {
                            let glyph = if dark_mode() { Glyph::Sun } else { Glyph::Moon };
                            view! { <Icon glyph class="h-5 w-5" /> }
                        }}
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="md:hidden"
                        label="Open menu"
                        on:click=move |_| on_open_change.run(true)
                    >
                        <Icon glyph=Glyph::Menu class="h-6 w-6" />
                    </Button>
                    <Sheet open=menu_open on_open_change class="w-[300px] sm:w-[400px]">
                        <nav class="flex flex-col space-y-4 mt-8">
                            <MobileNav on_navigate=close_menu />
                        </nav>
                    </Sheet>
                </div>
            </div>
        </header>
    }
}

/// Horizontal bar for wide viewports; the active section is highlighted.
#[component]
pub fn DesktopNav(#[prop(into)] active: Signal<Section>) -> impl IntoView {
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    class=move || desktop_link_class(active.get() == section)
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view()
}

/// Links inside the slide-in sheet. Following one closes the sheet.
#[component]
pub fn MobileNav(on_navigate: Callback<()>) -> impl IntoView {
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    class="text-lg hover:text-primary transition-colors duration-300"
                    on:click=move |_| on_navigate.run(())
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_nav_links_and_labels() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <DesktopNav active=Signal::stored(Section::About) /> }.to_html();
        for section in Section::ALL {
            assert!(html.contains(&format!("href=\"#{}\"", section.id())));
            assert!(html.contains(&format!(">{}<", section.label())));
        }
        assert_eq!(html.matches("font-semibold").count(), 1);
    }

    #[test]
    fn test_mobile_nav_matches_desktop_targets() {
        let owner = Owner::new();
        owner.set();

        let desktop = view! { <DesktopNav active=Signal::stored(Section::Hero) /> }.to_html();
        let mobile = view! { <MobileNav on_navigate=Callback::new(|_: ()| {}) /> }.to_html();
        for section in Section::ALL {
            let href = format!("href=\"{}\"", section.href());
            assert!(desktop.contains(&href));
            assert!(mobile.contains(&href));
        }
        assert!(mobile.contains(">Home<"));
        assert!(!mobile.contains("font-semibold"));
    }

    #[test]
    fn test_header_starts_closed_and_light() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(ViewState::default());
        let html = view! { <Header state /> }.to_html();
        assert!(html.contains("Abdi Koodhaa"));
        assert!(html.contains("aria-label=\"Toggle dark mode\""));
    }

    #[test]
    fn test_closed_sheet_is_not_mounted() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(ViewState::default());
        let html = view! { <Header state /> }.to_html();
        // only the desktop bar carries section links
        for section in Section::ALL {
            let href = format!("href=\"{}\"", section.href());
            assert_eq!(html.matches(&href).count(), 1);
        }
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("aria-modal"));
        assert!(!html.contains("aria-label=\"Close\""));
    }

    #[test]
    fn test_open_sheet_renders_links() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(ViewState {
            menu_open: true,
            ..ViewState::default()
        });
        let html = view! { <Header state /> }.to_html();
        for section in Section::ALL {
            let href = format!("href=\"{}\"", section.href());
            assert_eq!(html.matches(&href).count(), 2);
        }
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-label=\"Close\""));
    }

    #[test]
    fn test_menu_trigger_and_link_handlers() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(ViewState::default());
        let on_open_change = menu_open_handler(state);
        let close_menu = close_menu_handler(state);

        on_open_change.run(true);
        assert!(state.get_untracked().menu_open);
        close_menu.run(());
        assert!(!state.get_untracked().menu_open);

        // sheet-initiated close goes through the same callback
        on_open_change.run(true);
        on_open_change.run(false);
        assert!(!state.get_untracked().menu_open);
    }

    #[test]
    fn test_dark_mode_handler_leaves_menu_alone() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(ViewState::default());
        menu_open_handler(state).run(true);
        toggle_dark_mode(state);
        assert!(state.get_untracked().dark_mode);
        assert!(state.get_untracked().menu_open);
        toggle_dark_mode(state);
        assert!(!state.get_untracked().dark_mode);
    }
}
