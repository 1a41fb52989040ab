//! Human-readable descriptions of zman definitions.
//!
//! - [`formatter`]: the short and long description renderers
//! - [`style`]: legacy versus corrected wording, loadable from TOML
//!
//! # Example
//!
//! ```
//! use chrono::Duration;
//! use zmanim_core::core::{CalculationMethod, UsesElevation, Zman, ZmanDefinition, ZmanType};
//! use zmanim_core::formatting::format_short;
//!
//! let definition = ZmanDefinition::new(CalculationMethod::ZMANIYOS_72)
//!     .with_elevation(UsesElevation::Never);
//! let zman = Zman::value_based(ZmanType::ShaahZmanis, Duration::minutes(61), definition);
//!
//! assert_eq!(format_short(&zman, true), "72 minutes zmaniyos - unaffected by elevation");
//! ```

mod fragments;
pub mod formatter;
pub mod style;

pub use formatter::{short_description_ateret_torah, ZmanDescriptionFormatter};
pub use style::{DescriptionStyle, StyleConfig, StyleConfigError};

use crate::core::Zman;

/// Short description in the legacy style.
pub fn format_short(zman: &Zman, include_elevation: bool) -> String {
    ZmanDescriptionFormatter::default().format_short(zman, include_elevation)
}

/// Long description in the legacy style.
pub fn format_long(zman: &Zman) -> String {
    ZmanDescriptionFormatter::default().format_long(zman)
}
