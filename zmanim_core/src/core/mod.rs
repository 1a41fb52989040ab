//! Core domain model for zman definitions.
//!
//! This module defines the immutable value types the rest of the crate
//! composes and renders: named time-points, authorities, calculation
//! methods with their sign algebra, definitions, and computed zmanim.

pub mod authority;
pub mod definition;
pub mod method;
pub mod zman;
pub mod zman_type;

pub use authority::ZmanAuthority;
pub use definition::{UsesElevation, ZmanDefinition};
pub use method::CalculationMethod;
pub use zman::Zman;
pub use zman_type::ZmanType;
