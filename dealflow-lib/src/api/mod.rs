//! REST API operations
//!
//! Both submodules extend [`CrmClient`](crate::CrmClient): `fetch` with one
//! method per collection, `actions` with the mutating staff actions.

mod actions;
mod fetch;

pub use actions::FavoriteState;
pub use fetch::Envelope;
