//! Definitions explaining how a zman was derived.

use serde::{Deserialize, Serialize};

use super::authority::ZmanAuthority;
use super::method::CalculationMethod;
use super::zman_type::ZmanType;

/// Whether a calculation takes the observer's elevation into account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsesElevation {
    Always,
    Never,
    /// Only when the caller configured an elevation.
    IfSet,
    #[default]
    Unspecified,
}

/// The complete explanation of one computed value.
///
/// A definition is built once, bottom-up, and never edited afterwards. When
/// the main method is a [`CalculationMethod::DayDefinition`] the two sides are
/// themselves complete definitions, so the structure is a finite tree.
///
/// # Examples
///
/// ```
/// use zmanim_core::core::{CalculationMethod, UsesElevation, ZmanDefinition, ZmanType};
///
/// let definition = ZmanDefinition::new(CalculationMethod::day_definition(
///     ZmanDefinition::for_type(ZmanType::Alos, CalculationMethod::DEGREES_19_8),
///     ZmanDefinition::for_type(ZmanType::Tzais, CalculationMethod::DEGREES_19_8),
/// ))
/// .with_elevation(UsesElevation::Always);
///
/// assert!(definition.day_bounds().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZmanDefinition {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub zman_type: Option<ZmanType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_calculation_method_used: Option<CalculationMethod>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_authorities: Vec<ZmanAuthority>,
    #[serde(default)]
    pub is_elevation_used: UsesElevation,
}

impl ZmanDefinition {
    pub fn new(main_calculation_method_used: CalculationMethod) -> Self {
        Self {
            main_calculation_method_used: Some(main_calculation_method_used),
            ..Self::default()
        }
    }

    /// Definition of a single named zman, as used for the sides of a day.
    pub fn for_type(zman_type: ZmanType, method: CalculationMethod) -> Self {
        Self {
            zman_type: Some(zman_type),
            main_calculation_method_used: Some(method),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, zman_type: ZmanType) -> Self {
        self.zman_type = Some(zman_type);
        self
    }

    pub fn with_authorities<I>(mut self, authorities: I) -> Self
    where
        I: IntoIterator<Item = ZmanAuthority>,
    {
        self.supporting_authorities = authorities.into_iter().collect();
        self
    }

    pub fn with_elevation(mut self, is_elevation_used: UsesElevation) -> Self {
        self.is_elevation_used = is_elevation_used;
        self
    }

    /// The main method, unless it is missing or explicitly unspecified.
    pub fn specified_method(&self) -> Option<&CalculationMethod> {
        self.main_calculation_method_used
            .as_ref()
            .filter(|method| method.is_specified())
    }

    /// The `(start, end)` sides when the main method is a day definition.
    ///
    /// Either side may be missing in a malformed definition.
    pub fn day_bounds(&self) -> Option<(Option<&ZmanDefinition>, Option<&ZmanDefinition>)> {
        match &self.main_calculation_method_used {
            Some(CalculationMethod::DayDefinition { day_start, day_end }) => {
                Some((day_start.as_deref(), day_end.as_deref()))
            }
            _ => None,
        }
    }

    /// Number of nested day-definition levels below this definition.
    pub fn depth(&self) -> usize {
        match self.day_bounds() {
            Some((start, end)) => {
                1 + start
                    .map(ZmanDefinition::depth)
                    .max(end.map(ZmanDefinition::depth))
                    .unwrap_or(0)
            }
            None => 0,
        }
    }
}
