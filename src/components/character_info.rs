//! Character Info Component
//!
//! Per-row lazy detail block: the subgraph character record and the REST
//! character sheet are fetched independently on mount. Either fetch failing
//! degrades to "Unknown" text; neither is retried.

use leptos::*;

use crate::api;
use crate::api::characters::CharacterSheet;
use crate::api::graph::CharacterDetail;
use crate::components::OwnerLink;
use crate::links;

/// Name, health, location, and owner lines for one token
#[component]
pub fn CharacterInfo(
    #[prop(into)]
    token_id: String,
) -> impl IntoView {
    // None while the detail query is in flight; Some(None) once the subgraph
    // answers that no character exists under this ID.
    let detail = create_rw_signal(None::<Option<CharacterDetail>>);
    let sheet = create_rw_signal(None::<CharacterSheet>);

    let id_for_detail = token_id.clone();
    create_effect(move |_| {
        let token_id = id_for_detail.clone();
        spawn_local(async move {
            match api::graph::fetch_character(&token_id).await {
                Ok(character) => detail.set(Some(character)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch character {}: {}", token_id, e).into(),
                    );
                    detail.set(Some(None));
                }
            }
        });
    });

    let id_for_sheet = token_id.clone();
    create_effect(move |_| {
        let token_id = id_for_sheet.clone();
        spawn_local(async move {
            match api::characters::fetch_character_sheet(&token_id).await {
                Ok(result) => sheet.set(Some(result)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch character sheet {}: {}", token_id, e).into(),
                    );
                }
            }
        });
    });

    let health_line = move || {
        sheet.get().and_then(|s| s.health).map(|health| {
            view! {
                <br />
                <b>"Health: "</b>
                {health.label()}
            }
        })
    };

    view! {
        {move || match detail.get() {
            None => view! { <span>"Loading..."</span> }.into_view(),
            Some(None) => view! {
                <b>"Name: "</b>
                "Not Found"
                <br />
                <b>"Current Location: "</b>
                "Unknown"
                <br />
                <b>"Owner: "</b>
                "Unknown"
                {health_line}
            }
            .into_view(),
            Some(Some(character)) => view! {
                <b>"Name: "</b>
                <a href=links::marketplace_url(&character.owner.id)>
                    {move || sheet.get().map(|s| s.name).unwrap_or_else(|| "Unknown".to_string())}
                </a>
                {health_line}
                <br />
                <b>"Current Location: "</b>
                {character
                    .location
                    .as_ref()
                    .and_then(|l| l.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string())}
                <br />
                <b>"Owner: "</b>
                <OwnerLink address=character.owner.id.clone() />
            }
            .into_view(),
        }}
    }
}
