// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod api_client;
pub mod cache;
pub mod controller;
pub mod page;
pub mod render;
pub mod selector;

#[cfg(test)]
pub mod testing;

pub use api_client::*;
pub use cache::*;
pub use controller::*;
pub use page::*;
pub use selector::*;
