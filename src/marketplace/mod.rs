// src/marketplace/mod.rs
//! Domain state for the four managed entities (products, stores, services,
//! users) and the systems that talk to the remote API on their behalf.

pub mod events;
pub mod plugin;
pub mod resources;
pub mod wizard;

pub(crate) mod systems;

pub use plugin::MarketplacePlugin;
