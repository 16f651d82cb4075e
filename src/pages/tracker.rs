//! Tracker Page
//!
//! The single dashboard view: header with search, the deduplicated infection
//! list, the "not infected" search fallback card, and the Archivist overlay.

use leptos::*;

use crate::api;
use crate::components::{
    Archivist, CharacterInfo, FallbackImage, InfectionCard, Loading, TauntOverlay,
};
use crate::links;
use crate::state::global::GlobalState;

/// Tracker page component
#[component]
pub fn Tracker() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One-shot list fetch on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::graph::fetch_infections().await {
                Ok(infections) => {
                    state.infections.set(infections);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch infections: {}", e).into(),
                    );
                }
            }

            state.loading.set(false);
        });
    });

    view! {
        {move || {
            if state.loading.get() {
                view! { <Loading /> }.into_view()
            } else {
                view! { <TrackerContent /> }.into_view()
            }
        }}
    }
}

/// Page body once the list query has settled
#[component]
fn TrackerContent() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_miss = state.clone();
    let state_for_list = state.clone();
    let state_for_width = state.clone();
    let state_for_footer = state.clone();

    view! {
        <div class="tracker">
            <TauntOverlay />
            <Archivist />
            <Header />

            // Search fallback card for a token with no infection record
            {move || {
                if state_for_miss.search_missed() {
                    let token_id = state_for_miss.search.get().trim().to_string();
                    Some(view! { <NotInfectedCard token_id=token_id /> })
                } else {
                    None
                }
            }}

            <div
                class="infection-stack"
                style=move || {
                    if state_for_width.small_screen.get() { "width: 400px;" } else { "" }
                }
            >
                {move || {
                    state_for_list
                        .displayed()
                        .into_iter()
                        .map(|event| view! { <InfectionCard event=event /> })
                        .collect_view()
                }}
            </div>

            // Way back to the full list once a search has been made
            {move || {
                let state = state_for_footer.clone();
                state.searched.get().then(|| {
                    let state = state.clone();
                    view! {
                        <div class="show-all">
                            <a on:click=move |_| state.reset_search()>"Show all infections"</a>
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// Title and search box
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_title = state.clone();
    let state_for_input = state.clone();
    let state_for_value = state.clone();

    view! {
        <header class="header">
            <a class="title" on:click=move |_| state_for_title.reset_search()>
                <h1>"Chronicle of The Spread"</h1>
            </a>
            <input
                class="search-input"
                placeholder="Search ID"
                prop:value=move || state_for_value.search.get()
                on:input=move |ev| {
                    state_for_input.search.set(event_target_value(&ev));
                    state_for_input.searched.set(true);
                }
            />
        </header>
    }
}

/// Card shown when a searched token has no infection record
#[component]
fn NotInfectedCard(
    #[prop(into)]
    token_id: String,
) -> impl IntoView {
    let page = links::character_page_url(&token_id);

    view! {
        <div class="databox">
            <div class="characters stack-on-small">
                <a href=page.clone()>
                    <FallbackImage token_id=token_id.clone() />
                </a>
                <div class="card-body">
                    <b>"Token ID: "</b>
                    <a href=page>{token_id.clone()}</a>
                    <br />
                    <CharacterInfo token_id=token_id.clone() />
                </div>
            </div>
        </div>
    }
}
