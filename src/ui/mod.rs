// src/ui/mod.rs
// DOCUMENTATION: Display surface organization
// PURPOSE: Re-export terminal rendering components

pub mod panels;

pub use panels::*;
