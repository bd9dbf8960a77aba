//! The inventory store: validation and mutation rules over the product list.

mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use entity::*;
pub use error::*;
