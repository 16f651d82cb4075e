//! Infection Card Component
//!
//! One row of the infection list: portrait, token link, lazy character info,
//! infector, and the formatted infection date and time.

use leptos::*;

use crate::api::graph::InfectionEvent;
use crate::components::{CharacterInfo, OwnerLink};
use crate::format;
use crate::links;

/// Card for a single infection event
#[component]
pub fn InfectionCard(event: InfectionEvent) -> impl IntoView {
    // Offset taken at the event's own date so DST transitions format correctly
    let offset_minutes = viewer_offset_minutes(event.timestamp);
    let page = links::character_page_url(&event.infected_token);

    view! {
        <div class="databox">
            <div class="characters stack-on-small">
                <a href=page.clone()>
                    <img
                        src=links::infected_image_url(&event.infected_token)
                        alt="Infected"
                        class="character-image"
                    />
                </a>
                <div class="card-body">
                    <b>"Token ID: "</b>
                    <a href=page>{event.infected_token.clone()}</a>
                    <br />
                    <CharacterInfo token_id=event.infected_token.clone() />
                    <br />
                    <br />
                    <b>"Infector: "</b>
                    <OwnerLink address=event.sender.id.clone() />
                    <br />
                    <b>"Infection Date: "</b>
                    {format::format_date(event.timestamp, offset_minutes)}
                    <br />
                    <b>"Infection Time: "</b>
                    {format::format_time(event.timestamp, offset_minutes)}
                    <br />
                </div>
            </div>
        </div>
    }
}

/// Viewer's zone at the given unix timestamp, in minutes east of UTC
fn viewer_offset_minutes(timestamp: i64) -> i32 {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64 * 1000.0));
    -(date.get_timezone_offset() as i32)
}
