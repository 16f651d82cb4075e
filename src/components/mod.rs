//! UI Components
//!
//! Reusable Leptos components for the tracker.

pub mod archivist;
pub mod character_info;
pub mod fallback_image;
pub mod infection_card;
pub mod loading;
pub mod owner_link;

pub use archivist::{Archivist, TauntOverlay};
pub use character_info::CharacterInfo;
pub use fallback_image::FallbackImage;
pub use infection_card::InfectionCard;
pub use loading::Loading;
pub use owner_link::OwnerLink;
