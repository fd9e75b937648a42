//! Typed row models

mod company;
mod deal;
mod entity;
mod family_office;
mod integration;
mod investor;
mod person;
mod subscription;
mod value;

pub use company::*;
pub use deal::*;
pub use entity::*;
pub use family_office::*;
pub use integration::*;
pub use investor::*;
pub use person::*;
pub use subscription::*;
pub use value::RawValue;
pub(crate) use value::deserialize_id;
pub(crate) use value::deserialize_lax_text;
pub(crate) use value::is_sentinel;
