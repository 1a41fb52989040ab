//! Computed zmanim paired with their definitions.

use chrono::{DateTime, Duration, Utc};

use super::definition::ZmanDefinition;
use super::zman_type::ZmanType;

/// A value produced by the astronomical engine, together with the
/// definition that explains how it was derived.
///
/// This crate never computes the value itself; it only describes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Zman {
    /// A quantity, such as the length of a proportional hour.
    ValueBased {
        zman_type: ZmanType,
        value: Duration,
        definition: ZmanDefinition,
    },
    /// An absolute instant.
    DateBased {
        zman_type: ZmanType,
        moment: DateTime<Utc>,
        definition: ZmanDefinition,
    },
}

impl Zman {
    pub fn value_based(zman_type: ZmanType, value: Duration, definition: ZmanDefinition) -> Self {
        Self::ValueBased {
            zman_type,
            value,
            definition,
        }
    }

    pub fn date_based(
        zman_type: ZmanType,
        moment: DateTime<Utc>,
        definition: ZmanDefinition,
    ) -> Self {
        Self::DateBased {
            zman_type,
            moment,
            definition,
        }
    }

    pub fn zman_type(&self) -> ZmanType {
        match self {
            Self::ValueBased { zman_type, .. } | Self::DateBased { zman_type, .. } => *zman_type,
        }
    }

    pub fn definition(&self) -> &ZmanDefinition {
        match self {
            Self::ValueBased { definition, .. } | Self::DateBased { definition, .. } => definition,
        }
    }

    pub fn is_date_based(&self) -> bool {
        matches!(self, Self::DateBased { .. })
    }
}
