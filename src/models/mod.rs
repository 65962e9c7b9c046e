// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod map;
pub mod place;

pub use map::*;
pub use place::*;
