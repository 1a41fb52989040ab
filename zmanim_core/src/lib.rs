//! Zmanim description core.
//!
//! Declarative definitions of how halachic times are calculated, the sign
//! algebra for composing one zman relative to another, and renderers that
//! turn a definition into short and long English descriptions.

pub mod core;
pub mod formatting;
pub mod occurrence;
pub mod parsing;

pub use crate::core::{
    CalculationMethod, UsesElevation, Zman, ZmanAuthority, ZmanDefinition, ZmanType,
};
pub use crate::formatting::{format_long, format_short, DescriptionStyle, ZmanDescriptionFormatter};
pub use crate::occurrence::{Occurrence, RelativeTo, ZmanRelationship};
