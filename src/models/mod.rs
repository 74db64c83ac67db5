// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod amenity;
pub mod place;
pub mod search;
pub mod status;

pub use amenity::*;
pub use place::*;
pub use search::*;
pub use status::*;
