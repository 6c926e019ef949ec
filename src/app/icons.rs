use leptos::prelude::*;

use crate::portfolio::Glyph;

// Stroke paths from the Lucide icon set (ISC), 24x24 grid.
fn glyph_markup(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
        Glyph::Figma => concat!(
            r#"<path d="M5 5.5A3.5 3.5 0 0 1 8.5 2H12v7H8.5A3.5 3.5 0 0 1 5 5.5z"/>"#,
            r#"<path d="M12 2h3.5a3.5 3.5 0 1 1 0 7H12V2z"/>"#,
            r#"<path d="M12 12.5a3.5 3.5 0 1 1 7 0 3.5 3.5 0 1 1-7 0z"/>"#,
            r#"<path d="M5 19.5A3.5 3.5 0 0 1 8.5 16H12v3.5a3.5 3.5 0 1 1-7 0z"/>"#,
            r#"<path d="M5 12.5A3.5 3.5 0 0 1 8.5 9H12v7H8.5A3.5 3.5 0 0 1 5 12.5z"/>"#,
        ),
        Glyph::Github => concat!(
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
            r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
        ),
        Glyph::Linkedin => concat!(
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
            r#"<rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
        ),
        Glyph::Mail => concat!(
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
            r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        ),
        Glyph::Menu => concat!(
            r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
            r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
            r#"<line x1="4" x2="20" y1="18" y2="18"/>"#,
        ),
        Glyph::Monitor => concat!(
            r#"<rect width="20" height="14" x="2" y="3" rx="2"/>"#,
            r#"<line x1="8" x2="16" y1="21" y2="21"/><line x1="12" x2="12" y1="17" y2="21"/>"#,
        ),
        Glyph::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        Glyph::Sun => concat!(
            r#"<circle cx="12" cy="12" r="4"/>"#,
            r#"<path d="M12 2v2"/><path d="M12 20v2"/>"#,
            r#"<path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/>"#,
            r#"<path d="M2 12h2"/><path d="M20 12h2"/>"#,
            r#"<path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
        ),
        Glyph::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
    }
}

/// Inline stroke icon. Size comes from `class` (e.g. `h-5 w-5`).
#[component]
pub fn Icon(glyph: Glyph, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            inner_html=glyph_markup(glyph)
        ></svg>
    }
}
