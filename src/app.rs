mod avatar;
mod cards;
mod header;
mod homepage;
mod icons;
mod motion;
mod ui;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <DocumentMeta />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Browser chrome starts light like the page; the `.dark` container switches
/// `color-scheme` in input.css.
#[component]
fn DocumentMeta() -> impl IntoView {
    view! {
        <meta name="color-scheme" content="light" />
        <meta name="description" content=PROFILE.tagline />
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme_does_not_follow_os() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <DocumentMeta /> }.to_html();
        assert!(html.contains("name=\"color-scheme\" content=\"light\""));
        assert!(!html.contains("light dark"));
    }
}
