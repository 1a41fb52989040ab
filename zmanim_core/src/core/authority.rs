//! Named halachic authorities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An authority whose opinion defines or supports a calculation.
///
/// Used both as a calculation method in its own right (the method is
/// whatever that authority rules) and as a supporting source listed on a
/// [`ZmanDefinition`](crate::core::ZmanDefinition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZmanAuthority {
    Gra,
    Mga,
    BaalHatanya,
    AteretTorah,
    AhavatShalom,
    RabbeinuTam,
    Geonim,
    Yereim,
    ChazonIsh,
    MinchasCohen,
}

impl ZmanAuthority {
    pub fn name(&self) -> &'static str {
        match self {
            ZmanAuthority::Gra => "GRA",
            ZmanAuthority::Mga => "MGA",
            ZmanAuthority::BaalHatanya => "Baal Hatanya",
            ZmanAuthority::AteretTorah => "Ateret Torah",
            ZmanAuthority::AhavatShalom => "Ahavat Shalom",
            ZmanAuthority::RabbeinuTam => "Rabbeinu Tam",
            ZmanAuthority::Geonim => "Geonim",
            ZmanAuthority::Yereim => "Yereim",
            ZmanAuthority::ChazonIsh => "Chazon Ish",
            ZmanAuthority::MinchasCohen => "Minchas Cohen",
        }
    }
}

impl fmt::Display for ZmanAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
