//! State Management
//!
//! Global application state shared across the component tree.

pub mod global;
