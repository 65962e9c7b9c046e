// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod geolocator;
pub mod places_client;
pub mod session;

pub use geolocator::*;
pub use places_client::*;
pub use session::*;
