//! Composition of zmanim relative to one another.
//!
//! An [`Occurrence`] pairs a subject with a method whose direction is not yet
//! known. Binding it to a reference with [`Occurrence::before`] or
//! [`Occurrence::after`] normalizes the method's sign and yields a
//! [`ZmanRelationship`].
//!
//! # Example
//!
//! ```
//! use zmanim_core::core::{CalculationMethod, ZmanType};
//! use zmanim_core::occurrence::{Occurrence, RelativeTo};
//!
//! let alos = Occurrence::new(ZmanType::Alos, CalculationMethod::Degrees(16.1));
//! let relationship = alos.before(ZmanType::Hanaitz);
//!
//! assert_eq!(relationship.signed_method, CalculationMethod::Degrees(-16.1));
//! assert_eq!(relationship.relative_to, RelativeTo::Zman(ZmanType::Hanaitz));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{CalculationMethod, ZmanDefinition, ZmanType};

/// A subject and its method, not yet bound to a reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub subject: ZmanType,
    pub calculation_method: CalculationMethod,
}

/// The reference point a relationship is measured from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeTo {
    /// A single named zman.
    Zman(ZmanType),
    /// A full definition, typically a composite day boundary.
    Definition(ZmanDefinition),
}

/// A subject bound to a reference with a sign-normalized method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZmanRelationship {
    pub subject: ZmanType,
    pub signed_method: CalculationMethod,
    pub relative_to: RelativeTo,
}

impl Occurrence {
    pub fn new(subject: ZmanType, calculation_method: CalculationMethod) -> Self {
        Self {
            subject,
            calculation_method,
        }
    }

    /// Binds this occurrence after `reference`; the payload becomes non-negative.
    pub fn after(&self, reference: ZmanType) -> ZmanRelationship {
        ZmanRelationship {
            subject: self.subject,
            signed_method: self.calculation_method.force_after(),
            relative_to: RelativeTo::Zman(reference),
        }
    }

    /// Binds this occurrence before `reference`; the payload becomes non-positive.
    pub fn before(&self, reference: ZmanType) -> ZmanRelationship {
        ZmanRelationship {
            subject: self.subject,
            signed_method: self.calculation_method.force_before(),
            relative_to: RelativeTo::Zman(reference),
        }
    }

    /// Binds this occurrence before a complete definition.
    ///
    /// There is no `after` counterpart: callers only ever measure backwards
    /// from a composite day boundary.
    pub fn before_definition(&self, reference: ZmanDefinition) -> ZmanRelationship {
        ZmanRelationship {
            subject: self.subject,
            signed_method: self.calculation_method.force_before(),
            relative_to: RelativeTo::Definition(reference),
        }
    }
}

impl ZmanRelationship {
    /// The reference zman, when bound to a single named zman.
    pub fn reference_type(&self) -> Option<ZmanType> {
        match &self.relative_to {
            RelativeTo::Zman(zman_type) => Some(*zman_type),
            RelativeTo::Definition(definition) => definition.zman_type,
        }
    }

    /// Whether the subject falls before its reference.
    pub fn is_before(&self) -> bool {
        match self.signed_method {
            CalculationMethod::Degrees(v) | CalculationMethod::FixedMinutesFloat(v) => v < 0.0,
            CalculationMethod::FixedDuration(v) | CalculationMethod::ZmaniyosDuration(v) => v < 0,
            CalculationMethod::FixedLocalChatzos
            | CalculationMethod::Authority(_)
            | CalculationMethod::Unspecified
            | CalculationMethod::DayDefinition { .. } => false,
        }
    }
}
