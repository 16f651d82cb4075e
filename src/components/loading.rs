//! Loading Component
//!
//! Full-page loading state shown while the infection list query is in flight.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <span class="loading-title">"LOADING"</span>
            <div class="loading-spinner" />
        </div>
    }
}
