// src/marketplace/systems/mod.rs
//! Request handlers spawn background API tasks; apply handlers fold the
//! delivered results into the directories and surface feedback.

pub mod products;
pub mod reference;
pub mod services;
pub mod stores;
pub mod upload;
pub mod users;
