// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod hbnb;

pub use hbnb::config as hbnb_config;
pub use health::config as health_config;
