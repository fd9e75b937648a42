//! Entity column sets
//!
//! One ordered [`ColumnSet`](crate::column::ColumnSet) per entity, assembled
//! from the factories in [`crate::column::factory`]. Sets that contain
//! interactive columns take the callbacks they wire as parameters.

mod company;
mod contact;
mod deal;
mod family_office;
mod integration;
mod investor;
mod order;
mod person;
mod user;

pub use company::company_columns;
pub use contact::family_office_contact_columns;
pub use deal::deal_columns;
pub use family_office::family_office_columns;
pub use integration::integration_columns;
pub use investor::investor_columns;
pub use order::order_columns;
pub use person::person_columns;
pub use user::user_columns;

/// Width of name columns that truncate long firm names.
const NAME_WIDTH: u16 = 32;
