//! Spore Tracker
//!
//! Chronicle of The Spread - a dashboard tracking infection events for
//! NFT-held game characters, built with Leptos (WASM).
//!
//! # Features
//!
//! - Infection list sourced from the indexing subgraph
//! - Per-character detail lookups (location, owner, sheet name, health)
//! - Exact token ID search with a "not infected" fallback card
//! - Wallet alias resolution for owner and infector addresses
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is fetched read-only over HTTP: a GraphQL subgraph
//! for infection events and character records, plus a REST metadata API for
//! character sheets. Nothing is persisted and no fetch is retried; failures
//! degrade to placeholder text.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod links;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
