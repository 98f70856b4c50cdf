//! Pricing aggregate: the feed snapshot entity, derived-value objects and
//! the calculator service.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
