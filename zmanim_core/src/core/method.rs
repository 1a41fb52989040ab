//! Calculation methods and their sign algebra.
//!
//! A [`CalculationMethod`] describes how an offset from a reference event is
//! computed. Numeric payloads are signed: a negative value places the zman
//! before its reference, a non-negative value after it. The only way to
//! change that direction is through [`CalculationMethod::force_before`] and
//! [`CalculationMethod::force_after`], which normalize toward a target sign
//! instead of flipping it.

use serde::{Deserialize, Serialize};

use super::authority::ZmanAuthority;
use super::definition::ZmanDefinition;

/// How the offset of a zman from its reference point is derived.
///
/// # Examples
///
/// ```
/// use zmanim_core::core::CalculationMethod;
///
/// let before = CalculationMethod::Degrees(16.1).force_before();
/// assert_eq!(before, CalculationMethod::Degrees(-16.1));
/// // already negative, stays negative
/// assert_eq!(before.force_before(), CalculationMethod::Degrees(-16.1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// Solar depression angle in degrees.
    Degrees(f64),
    /// Constant clock offset in whole minutes.
    FixedDuration(i64),
    /// Offset in proportional (zmaniyos) minutes.
    ZmaniyosDuration(i64),
    /// Constant clock offset in fractional minutes.
    FixedMinutesFloat(f64),
    /// Anchored to local solar midday.
    FixedLocalChatzos,
    /// Defined by a named authority rather than a formula.
    Authority(ZmanAuthority),
    /// No method was supplied.
    #[default]
    Unspecified,
    /// The day is delimited by two other fully specified zmanim.
    DayDefinition {
        #[serde(default)]
        day_start: Option<Box<ZmanDefinition>>,
        #[serde(default)]
        day_end: Option<Box<ZmanDefinition>>,
    },
}

impl CalculationMethod {
    pub const DEGREES_3_7: Self = Self::Degrees(3.7);
    pub const DEGREES_3_8: Self = Self::Degrees(3.8);
    pub const DEGREES_5_95: Self = Self::Degrees(5.95);
    pub const DEGREES_7_083: Self = Self::Degrees(7.083);
    pub const DEGREES_8_5: Self = Self::Degrees(8.5);
    pub const DEGREES_11_5: Self = Self::Degrees(11.5);
    pub const DEGREES_16_1: Self = Self::Degrees(16.1);
    pub const DEGREES_18: Self = Self::Degrees(18.0);
    pub const DEGREES_19_8: Self = Self::Degrees(19.8);
    pub const DEGREES_26: Self = Self::Degrees(26.0);

    pub const MINUTES_18: Self = Self::FixedDuration(18);
    pub const MINUTES_40: Self = Self::FixedDuration(40);
    pub const MINUTES_50: Self = Self::FixedDuration(50);
    pub const MINUTES_60: Self = Self::FixedDuration(60);
    pub const MINUTES_72: Self = Self::FixedDuration(72);
    pub const MINUTES_90: Self = Self::FixedDuration(90);
    pub const MINUTES_96: Self = Self::FixedDuration(96);
    pub const MINUTES_120: Self = Self::FixedDuration(120);

    pub const ZMANIYOS_72: Self = Self::ZmaniyosDuration(72);
    pub const ZMANIYOS_90: Self = Self::ZmaniyosDuration(90);
    pub const ZMANIYOS_96: Self = Self::ZmaniyosDuration(96);
    pub const ZMANIYOS_120: Self = Self::ZmaniyosDuration(120);

    /// Builds a day definition from its two bounding definitions.
    pub fn day_definition(day_start: ZmanDefinition, day_end: ZmanDefinition) -> Self {
        Self::DayDefinition {
            day_start: Some(Box::new(day_start)),
            day_end: Some(Box::new(day_end)),
        }
    }

    /// Returns a copy whose numeric payload is `|p|`.
    ///
    /// Variants without a payload are returned unchanged.
    pub fn force_after(&self) -> Self {
        match self {
            Self::Degrees(degrees) => Self::Degrees(degrees.abs()),
            Self::FixedDuration(minutes) => Self::FixedDuration(minutes.saturating_abs()),
            Self::ZmaniyosDuration(minutes) => Self::ZmaniyosDuration(minutes.saturating_abs()),
            Self::FixedMinutesFloat(minutes) => Self::FixedMinutesFloat(minutes.abs()),
            Self::FixedLocalChatzos
            | Self::Authority(_)
            | Self::Unspecified
            | Self::DayDefinition { .. } => self.clone(),
        }
    }

    /// Returns a copy whose numeric payload is `-|p|`.
    ///
    /// Unlike negation, an already negative payload stays negative.
    /// Variants without a payload are returned unchanged.
    pub fn force_before(&self) -> Self {
        match self {
            Self::Degrees(degrees) => Self::Degrees(-degrees.abs()),
            Self::FixedDuration(minutes) => Self::FixedDuration(-minutes.saturating_abs()),
            Self::ZmaniyosDuration(minutes) => Self::ZmaniyosDuration(-minutes.saturating_abs()),
            Self::FixedMinutesFloat(minutes) => Self::FixedMinutesFloat(-minutes.abs()),
            Self::FixedLocalChatzos
            | Self::Authority(_)
            | Self::Unspecified
            | Self::DayDefinition { .. } => self.clone(),
        }
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, Self::Unspecified)
    }

    /// Compact rendering used by the short description, e.g. `19.8˚`.
    ///
    /// Empty for [`Unspecified`](Self::Unspecified) and for day definitions,
    /// which the formatter renders from their bounding zmanim instead.
    pub fn value_text(&self) -> String {
        match self {
            Self::Degrees(degrees) => format!("{}˚", format_number(*degrees)),
            Self::FixedDuration(minutes) => format!("{} minutes", minutes),
            Self::ZmaniyosDuration(minutes) => format!("{} minutes zmaniyos", minutes),
            Self::FixedMinutesFloat(minutes) => format!("{} minutes", format_number(*minutes)),
            Self::FixedLocalChatzos => "fixed local chatzos".to_string(),
            Self::Authority(authority) => authority.name().to_string(),
            Self::Unspecified | Self::DayDefinition { .. } => String::new(),
        }
    }

    /// Sentence fragment used by the long description.
    pub fn prose_text(&self) -> String {
        match self {
            Self::Degrees(degrees) => format!(
                "when the sun is {}˚ below the geometric horizon",
                format_number(degrees.abs())
            ),
            Self::FixedDuration(minutes) => format!(
                "{} minutes {} the reference time",
                minutes.unsigned_abs(),
                direction(*minutes < 0)
            ),
            Self::ZmaniyosDuration(minutes) => format!(
                "{} zmaniyos minutes {} the reference time",
                minutes.unsigned_abs(),
                direction(*minutes < 0)
            ),
            Self::FixedMinutesFloat(minutes) => format!(
                "{} minutes {} the reference time",
                format_number(minutes.abs()),
                direction(*minutes < 0.0)
            ),
            Self::FixedLocalChatzos => {
                "fixed local chatzos, midday at the center of the time zone".to_string()
            }
            Self::Authority(authority) => format!("as defined by {}", authority.name()),
            Self::Unspecified | Self::DayDefinition { .. } => String::new(),
        }
    }

    /// Generic prose for a day definition, given its bounding display names.
    pub fn day_prose(start_name: &str, end_name: &str) -> String {
        format!("the time between {} and {}", start_name, end_name)
    }
}

fn direction(before: bool) -> &'static str {
    if before {
        "before"
    } else {
        "after"
    }
}

/// Shortest round-trip form of `value`; whole numbers drop the fraction.
pub(crate) fn format_number(value: f64) -> String {
    // -0.0 comes out of force_before(0.0)
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}
