//! API Clients
//!
//! Functions for communicating with the indexing subgraph, the character
//! metadata API, and the wallet naming service. Every function returns
//! `Result<T, String>`; callers log failures to the browser console and fall
//! back to placeholder text.

pub mod alias;
pub mod characters;
pub mod graph;
