//! Named halachic time-points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named time-point of the halachic day.
///
/// The set is closed; each variant carries a fixed English display name
/// that the description formatter writes verbatim.
///
/// # Examples
///
/// ```
/// use zmanim_core::core::ZmanType;
///
/// assert_eq!(ZmanType::Alos.display_name(), "Dawn");
/// assert_eq!(ZmanType::Tzais.to_string(), "Nightfall");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZmanType {
    Alos,
    Misheyakir,
    Hanaitz,
    SofZmanShma,
    SofZmanTefila,
    ChatzosHayom,
    MinchaGedola,
    MinchaKetana,
    PlagHamincha,
    CandleLighting,
    Shkiah,
    Tzais,
    ChatzosLayla,
    ShaahZmanis,
}

impl ZmanType {
    /// Every time-point, in order of occurrence through the day.
    pub const ALL: [ZmanType; 14] = [
        ZmanType::Alos,
        ZmanType::Misheyakir,
        ZmanType::Hanaitz,
        ZmanType::SofZmanShma,
        ZmanType::SofZmanTefila,
        ZmanType::ChatzosHayom,
        ZmanType::MinchaGedola,
        ZmanType::MinchaKetana,
        ZmanType::PlagHamincha,
        ZmanType::CandleLighting,
        ZmanType::Shkiah,
        ZmanType::Tzais,
        ZmanType::ChatzosLayla,
        ZmanType::ShaahZmanis,
    ];

    /// English name used in rendered descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            ZmanType::Alos => "Dawn",
            ZmanType::Misheyakir => "Earliest Tallis",
            ZmanType::Hanaitz => "Sunrise",
            ZmanType::SofZmanShma => "Latest Shema",
            ZmanType::SofZmanTefila => "Latest Shacharis",
            ZmanType::ChatzosHayom => "Midday",
            ZmanType::MinchaGedola => "Earliest Mincha",
            ZmanType::MinchaKetana => "Mincha Ketana",
            ZmanType::PlagHamincha => "Plag Hamincha",
            ZmanType::CandleLighting => "Candle Lighting",
            ZmanType::Shkiah => "Sunset",
            ZmanType::Tzais => "Nightfall",
            ZmanType::ChatzosLayla => "Midnight",
            ZmanType::ShaahZmanis => "Proportional Hour",
        }
    }
}

impl fmt::Display for ZmanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
