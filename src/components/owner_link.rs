//! Owner Link Component
//!
//! Marketplace link for a wallet address. Kicks off an alias lookup on mount
//! and shows the resolved name once it lands; until then (or when resolution
//! fails) the raw address is shown, abbreviated on small screens.

use leptos::*;

use crate::api;
use crate::format;
use crate::links;
use crate::state::global::GlobalState;

/// Wallet address link with optional alias resolution
#[component]
pub fn OwnerLink(
    #[prop(into)]
    address: String,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let alias = create_rw_signal(None::<String>);

    let address_for_lookup = address.clone();
    create_effect(move |_| {
        let address = address_for_lookup.clone();
        spawn_local(async move {
            match api::alias::resolve_alias(&address).await {
                Ok(name) => alias.set(name),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to resolve alias for {}: {}", address, e).into(),
                    );
                }
            }
        });
    });

    let href = links::marketplace_url(&address);
    view! {
        <a href=href>
            {move || {
                alias.get().unwrap_or_else(|| {
                    if state.small_screen.get() {
                        format::abbreviate_address(&address)
                    } else {
                        address.clone()
                    }
                })
            }}
        </a>
    }
}
