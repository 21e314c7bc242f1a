//! Typed client for the ParkAll backend. Every call is a thin proxy to one
//! REST endpoint; the UI crate owns rendering and user-facing messages.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ParkAllClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    ImageUpload, Listing, ListingDraft, LoginRequest, Publisher, RegisterRequest, User,
};
