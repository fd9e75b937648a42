//! Dealflow CRM client library
//!
//! Typed rows, field formatters and declarative table columns for the
//! dealflow back office, plus an async client for its REST API.
//!
//! - [`model`]: entity rows as the API delivers them
//! - [`format`]: value-to-text conversions with placeholders
//! - [`column`]: column descriptors, fragments and the reusable factories
//! - [`columns`]: the column set of every entity
//! - [`render`]: a plain-text table surface
//! - [`CrmClient`]: fetches and staff actions

pub mod api;
pub mod auth;
pub mod column;
pub mod columns;
pub mod error;
pub mod format;
pub mod model;
pub mod render;

mod client;

pub use client::*;
