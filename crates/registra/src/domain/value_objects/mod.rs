//! Value Objects
//!
//! Immutable value types shared across entities.

mod degree;
mod gender;
mod ids;
mod mark_value;

pub use degree::Degree;
pub use gender::Gender;
pub use ids::*;
pub use mark_value::MarkValue;
