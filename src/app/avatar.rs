use leptos::prelude::*;

use crate::portfolio::PROFILE;

#[component]
pub fn Avatar() -> impl IntoView {
    let size = PROFILE.avatar_size.to_string();
    view! {
        <img
            src=PROFILE.avatar_src
            alt=PROFILE.name
            width=size.clone()
            height=size
            class="rounded-full mx-auto"
        />
    }
}

#[component]
pub fn Biography() -> impl IntoView {
    let last = PROFILE.bio.len().saturating_sub(1);
    PROFILE
        .bio
        .iter()
        .enumerate()
        .map(|(i, paragraph)| {
            view! { <p class=if i == last { "text-lg" } else { "text-lg mb-4" }>{*paragraph}</p> }
        })
        .collect_view()
}
