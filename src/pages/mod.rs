//! Pages
//!
//! Top-level page components.

pub mod tracker;

pub use tracker::Tracker;
