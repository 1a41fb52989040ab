//! Short and long descriptions of a zman definition.
//!
//! Both descriptions are built as ordered [`Fragments`]: each piece is
//! rendered by its own function, guarded by an explicit presence check,
//! and only then joined. A missing method or a missing day side therefore
//! drops its piece instead of leaving a placeholder behind.

use crate::core::{CalculationMethod, UsesElevation, Zman, ZmanAuthority, ZmanDefinition};

use super::fragments::Fragments;
use super::style::DescriptionStyle;

const SHORT_SEPARATOR: &str = " - ";
const AUTHORITY_SEPARATOR: &str = ", ";

/// Renders [`Zman`] definitions as text.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use zmanim_core::core::{CalculationMethod, UsesElevation, Zman, ZmanDefinition, ZmanType};
/// use zmanim_core::formatting::ZmanDescriptionFormatter;
///
/// let definition = ZmanDefinition::new(CalculationMethod::day_definition(
///     ZmanDefinition::for_type(ZmanType::Alos, CalculationMethod::DEGREES_19_8),
///     ZmanDefinition::for_type(ZmanType::Tzais, CalculationMethod::DEGREES_19_8),
/// ))
/// .with_elevation(UsesElevation::Always);
/// let moment = Utc.with_ymd_and_hms(2024, 3, 1, 4, 30, 0).unwrap();
/// let zman = Zman::date_based(ZmanType::Alos, moment, definition);
///
/// let formatter = ZmanDescriptionFormatter::default();
/// assert_eq!(
///     formatter.format_short(&zman, true),
///     "Dawn(19.8˚)-Nightfall(19.8˚) - affected by elevation"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ZmanDescriptionFormatter {
    style: DescriptionStyle,
}

impl ZmanDescriptionFormatter {
    pub fn new(style: DescriptionStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> DescriptionStyle {
        self.style
    }

    /// Compact summary, e.g. `Dawn(19.8˚)-Nightfall(19.8˚) - affected by elevation`.
    ///
    /// Fragments, in order: the day definition, the main method and, when
    /// `include_elevation` is set, the elevation policy. Present fragments
    /// are joined with `" - "`.
    pub fn format_short(&self, zman: &Zman, include_elevation: bool) -> String {
        let definition = zman.definition();
        let mut fragments = Fragments::new();

        if let Some((start, end)) = definition.day_bounds() {
            fragments.push(short_day_definition(start, end));
        }
        fragments.push_opt(
            definition
                .main_calculation_method_used
                .as_ref()
                .map(CalculationMethod::value_text),
        );
        if include_elevation {
            fragments.push(self.short_elevation_text(definition.is_elevation_used));
        }

        let description = fragments.join(SHORT_SEPARATOR);
        log::trace!("Short description for {}: {:?}", zman.zman_type(), description);
        description
    }

    /// Prose explanation of the definition.
    ///
    /// Day-boundary prose is only written for date-based zmanim; value-based
    /// zmanim get the authority and elevation sentences alone.
    pub fn format_long(&self, zman: &Zman) -> String {
        let definition = zman.definition();
        let mut fragments = Fragments::new();

        if zman.is_date_based() {
            if let Some((start, end)) = definition.day_bounds() {
                fragments.push(long_day_definition(start, end));
            }
        }
        fragments.push_opt(self.authorities_text(&definition.supporting_authorities));
        fragments.push_opt(long_elevation_text(definition.is_elevation_used));

        let description = fragments.concat();
        log::trace!("Long description for {}: {:?}", zman.zman_type(), description);
        description
    }

    fn short_elevation_text(&self, uses_elevation: UsesElevation) -> &'static str {
        match uses_elevation {
            UsesElevation::Always => "affected by elevation",
            UsesElevation::Never => "unaffected by elevation",
            UsesElevation::IfSet => "affected by elevation if set",
            UsesElevation::Unspecified if self.style.legacy_unspecified_elevation => {
                "affect by elevation unspecified"
            }
            UsesElevation::Unspecified => "elevation usage unspecified",
        }
    }

    fn authorities_text(&self, authorities: &[ZmanAuthority]) -> Option<String> {
        if authorities.is_empty() {
            return None;
        }

        let names: Vec<&str> = authorities.iter().map(ZmanAuthority::name).collect();
        let mut text = format!("Supporting authorities: {}", names.join(AUTHORITY_SEPARATOR));
        if self.style.trailing_authority_separator {
            text.push_str(AUTHORITY_SEPARATOR);
        }
        Some(text)
    }
}

/// Legacy helper for the Ateret Torah nightfall, e.g. `Ateret Torah (40 minutes)`.
pub fn short_description_ateret_torah(minute_offset: f64) -> String {
    format!(
        "{} ({} minutes)",
        ZmanAuthority::AteretTorah.name(),
        crate::core::method::format_number(minute_offset)
    )
}

fn display_name(side: Option<&ZmanDefinition>) -> Option<&'static str> {
    side.and_then(|definition| definition.zman_type)
        .map(|zman_type| zman_type.display_name())
}

/// `Start(sub)-End(sub)`, rendering only the sides that name a zman.
fn short_day_definition(start: Option<&ZmanDefinition>, end: Option<&ZmanDefinition>) -> String {
    let mut sides = Fragments::new();
    sides.push_opt(start.and_then(short_day_side));
    sides.push_opt(end.and_then(short_day_side));

    if start.is_none() || end.is_none() {
        log::debug!("Day definition is missing a side; rendering what is present");
    }
    sides.join("-")
}

fn short_day_side(side: &ZmanDefinition) -> Option<String> {
    let name = side.zman_type?.display_name();
    Some(match side_short_text(side) {
        Some(text) => format!("{}({})", name, text),
        None => name.to_string(),
    })
}

/// Parenthesized detail for one side of a day; nested days recurse.
fn side_short_text(side: &ZmanDefinition) -> Option<String> {
    let text = match side.specified_method()? {
        CalculationMethod::DayDefinition { day_start, day_end } => {
            short_day_definition(day_start.as_deref(), day_end.as_deref())
        }
        method => method.value_text(),
    };
    Some(text).filter(|text| !text.is_empty())
}

fn long_day_definition(start: Option<&ZmanDefinition>, end: Option<&ZmanDefinition>) -> String {
    let start_name = display_name(start);
    let end_name = display_name(end);

    let mut text = match (start_name, end_name) {
        (Some(start_name), Some(end_name)) => {
            format!("Day starts at {} and ends at {}\n", start_name, end_name)
        }
        (Some(start_name), None) => format!("Day starts at {}\n", start_name),
        (None, Some(end_name)) => format!("Day ends at {}\n", end_name),
        (None, None) => {
            log::debug!("Day definition names neither side; skipping day prose");
            return String::new();
        }
    };

    if let (Some(start), Some(start_name)) = (start, start_name) {
        let fallback = end_name.map(|end_name| CalculationMethod::day_prose(start_name, end_name));
        match side_prose(start).or(fallback) {
            Some(prose) => text.push_str(&format!("{} is defined as\n{}", start_name, prose)),
            None => log::debug!("No prose for {}; omitting its definition", start_name),
        }
    }
    text
}

/// Prose for one side of a day; nested days recurse to their bounds.
fn side_prose(side: &ZmanDefinition) -> Option<String> {
    let text = match side.specified_method()? {
        CalculationMethod::DayDefinition { day_start, day_end } => {
            let start_name = display_name(day_start.as_deref())?;
            let end_name = display_name(day_end.as_deref())?;
            CalculationMethod::day_prose(start_name, end_name)
        }
        method => method.prose_text(),
    };
    Some(text).filter(|text| !text.is_empty())
}

fn long_elevation_text(uses_elevation: UsesElevation) -> Option<String> {
    let text = match uses_elevation {
        UsesElevation::Always => "- affected by elevation",
        UsesElevation::Never => "- unaffected by elevation",
        UsesElevation::IfSet => "- affected by elevation if set",
        UsesElevation::Unspecified => return None,
    };
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZmanType;
    use chrono::{Duration, TimeZone, Utc};

    fn date_based(definition: ZmanDefinition) -> Zman {
        let moment = Utc.with_ymd_and_hms(2024, 3, 1, 4, 30, 0).unwrap();
        Zman::date_based(ZmanType::Alos, moment, definition)
    }

    fn value_based(definition: ZmanDefinition) -> Zman {
        Zman::value_based(ZmanType::ShaahZmanis, Duration::minutes(62), definition)
    }

    fn alos_to_tzais(start: CalculationMethod, end: CalculationMethod) -> ZmanDefinition {
        ZmanDefinition::new(CalculationMethod::day_definition(
            ZmanDefinition::for_type(ZmanType::Alos, start),
            ZmanDefinition::for_type(ZmanType::Tzais, end),
        ))
    }

    #[test]
    fn test_short_day_definition_with_elevation() {
        let zman = date_based(
            alos_to_tzais(CalculationMethod::DEGREES_19_8, CalculationMethod::DEGREES_19_8)
                .with_elevation(UsesElevation::Always),
        );

        let formatter = ZmanDescriptionFormatter::default();
        assert_eq!(
            formatter.format_short(&zman, true),
            "Dawn(19.8˚)-Nightfall(19.8˚) - affected by elevation"
        );
        assert_eq!(formatter.format_short(&zman, false), "Dawn(19.8˚)-Nightfall(19.8˚)");
    }

    #[test]
    fn test_short_omits_parentheses_for_unspecified_side() {
        let zman = date_based(alos_to_tzais(
            CalculationMethod::Unspecified,
            CalculationMethod::Authority(ZmanAuthority::AteretTorah),
        ));

        let text = ZmanDescriptionFormatter::default().format_short(&zman, false);
        assert_eq!(text, "Dawn-Nightfall(Ateret Torah)");
        assert!(!text.contains("()"));
    }

    #[test]
    fn test_short_renders_present_side_of_malformed_day() {
        let definition = ZmanDefinition::new(CalculationMethod::DayDefinition {
            day_start: Some(Box::new(ZmanDefinition::for_type(
                ZmanType::Hanaitz,
                CalculationMethod::Unspecified,
            ))),
            day_end: None,
        })
        .with_elevation(UsesElevation::Never);

        let text = ZmanDescriptionFormatter::default().format_short(&date_based(definition), true);
        assert_eq!(text, "Sunrise - unaffected by elevation");
    }

    #[test]
    fn test_short_plain_method() {
        let zman = date_based(
            ZmanDefinition::new(CalculationMethod::MINUTES_72).with_elevation(UsesElevation::IfSet),
        );

        assert_eq!(
            ZmanDescriptionFormatter::default().format_short(&zman, true),
            "72 minutes - affected by elevation if set"
        );
    }

    #[test]
    fn test_short_without_method_has_no_leading_separator() {
        let formatter = ZmanDescriptionFormatter::default();

        let zman = date_based(ZmanDefinition::default());
        assert_eq!(formatter.format_short(&zman, true), "affect by elevation unspecified");
        assert_eq!(formatter.format_short(&zman, false), "");

        let zman = date_based(ZmanDefinition::new(CalculationMethod::Unspecified));
        assert_eq!(formatter.format_short(&zman, false), "");
    }

    #[test]
    fn test_short_elevation_mapping_is_complete() {
        let formatter = ZmanDescriptionFormatter::default();
        let cases = [
            (UsesElevation::Always, "affected by elevation"),
            (UsesElevation::Never, "unaffected by elevation"),
            (UsesElevation::IfSet, "affected by elevation if set"),
            (UsesElevation::Unspecified, "affect by elevation unspecified"),
        ];

        for (policy, expected) in cases {
            let zman = date_based(ZmanDefinition::default().with_elevation(policy));
            assert_eq!(formatter.format_short(&zman, true), expected);
        }
    }

    #[test]
    fn test_short_corrected_unspecified_elevation() {
        let formatter = ZmanDescriptionFormatter::new(DescriptionStyle::corrected());
        let zman = date_based(ZmanDefinition::new(CalculationMethod::DEGREES_8_5));

        assert_eq!(formatter.format_short(&zman, true), "8.5˚ - elevation usage unspecified");
    }

    #[test]
    fn test_short_nested_day_definition_recurses() {
        let inner = alos_to_tzais(CalculationMethod::DEGREES_16_1, CalculationMethod::DEGREES_8_5)
            .with_type(ZmanType::PlagHamincha);
        let outer = ZmanDefinition::new(CalculationMethod::day_definition(
            inner,
            ZmanDefinition::for_type(ZmanType::Shkiah, CalculationMethod::Unspecified),
        ));

        assert_eq!(
            ZmanDescriptionFormatter::default().format_short(&date_based(outer), false),
            "Plag Hamincha(Dawn(16.1˚)-Nightfall(8.5˚))-Sunset"
        );
    }

    #[test]
    fn test_long_day_definition_with_start_method() {
        let zman = date_based(
            alos_to_tzais(CalculationMethod::DEGREES_19_8, CalculationMethod::DEGREES_19_8)
                .with_elevation(UsesElevation::Always),
        );

        assert_eq!(
            ZmanDescriptionFormatter::default().format_long(&zman),
            "Day starts at Dawn and ends at Nightfall\n\
             Dawn is defined as\n\
             when the sun is 19.8˚ below the geometric horizon\
             - affected by elevation"
        );
    }

    #[test]
    fn test_long_day_definition_falls_back_to_day_prose() {
        let zman = date_based(alos_to_tzais(
            CalculationMethod::Unspecified,
            CalculationMethod::DEGREES_8_5,
        ));

        assert_eq!(
            ZmanDescriptionFormatter::default().format_long(&zman),
            "Day starts at Dawn and ends at Nightfall\n\
             Dawn is defined as\n\
             the time between Dawn and Nightfall"
        );
    }

    #[test]
    fn test_long_missing_start_side() {
        let definition = ZmanDefinition::new(CalculationMethod::DayDefinition {
            day_start: None,
            day_end: Some(Box::new(ZmanDefinition::for_type(
                ZmanType::Shkiah,
                CalculationMethod::Unspecified,
            ))),
        });

        assert_eq!(
            ZmanDescriptionFormatter::default().format_long(&date_based(definition)),
            "Day ends at Sunset\n"
        );
    }

    #[test]
    fn test_long_missing_end_side_keeps_start_prose() {
        let definition = ZmanDefinition::new(CalculationMethod::DayDefinition {
            day_start: Some(Box::new(ZmanDefinition::for_type(
                ZmanType::Alos,
                CalculationMethod::DEGREES_16_1,
            ))),
            day_end: None,
        });

        assert_eq!(
            ZmanDescriptionFormatter::default().format_long(&date_based(definition)),
            "Day starts at Dawn\n\
             Dawn is defined as\n\
             when the sun is 16.1˚ below the geometric horizon"
        );
    }

    #[test]
    fn test_long_missing_end_side_without_start_method_has_no_heading() {
        let definition = ZmanDefinition::new(CalculationMethod::DayDefinition {
            day_start: Some(Box::new(ZmanDefinition::for_type(
                ZmanType::Hanaitz,
                CalculationMethod::Unspecified,
            ))),
            day_end: None,
        })
        .with_elevation(UsesElevation::Always);

        let text = ZmanDescriptionFormatter::default().format_long(&date_based(definition));
        assert_eq!(text, "Day starts at Sunrise\n- affected by elevation");
        assert!(!text.contains("is defined as"));
    }

    #[test]
    fn test_long_nested_start_side_uses_day_prose() {
        let inner = alos_to_tzais(CalculationMethod::DEGREES_16_1, CalculationMethod::DEGREES_8_5)
            .with_type(ZmanType::PlagHamincha);
        let outer = ZmanDefinition::new(CalculationMethod::day_definition(
            inner,
            ZmanDefinition::for_type(ZmanType::Shkiah, CalculationMethod::Unspecified),
        ));

        assert_eq!(
            ZmanDescriptionFormatter::default().format_long(&date_based(outer)),
            "Day starts at Plag Hamincha and ends at Sunset\n\
             Plag Hamincha is defined as\n\
             the time between Dawn and Nightfall"
        );
    }

    #[test]
    fn test_long_supporting_authorities_keep_trailing_separator() {
        let zman = date_based(
            ZmanDefinition::default().with_authorities([ZmanAuthority::Gra, ZmanAuthority::Mga]),
        );

        assert_eq!(
            ZmanDescriptionFormatter::default().format_long(&zman),
            "Supporting authorities: GRA, MGA, "
        );
    }

    #[test]
    fn test_long_corrected_authorities() {
        let zman = date_based(
            ZmanDefinition::default()
                .with_authorities([ZmanAuthority::Gra, ZmanAuthority::Mga])
                .with_elevation(UsesElevation::Never),
        );

        assert_eq!(
            ZmanDescriptionFormatter::new(DescriptionStyle::corrected()).format_long(&zman),
            "Supporting authorities: GRA, MGA- unaffected by elevation"
        );
    }

    #[test]
    fn test_long_omits_unspecified_elevation() {
        let formatter = ZmanDescriptionFormatter::default();
        let cases = [
            (UsesElevation::Always, "- affected by elevation"),
            (UsesElevation::Never, "- unaffected by elevation"),
            (UsesElevation::IfSet, "- affected by elevation if set"),
            (UsesElevation::Unspecified, ""),
        ];

        for (policy, expected) in cases {
            let zman = date_based(ZmanDefinition::default().with_elevation(policy));
            assert_eq!(formatter.format_long(&zman), expected);
        }
    }

    #[test]
    fn test_long_value_based_skips_day_prose() {
        let definition = alos_to_tzais(
            CalculationMethod::ZMANIYOS_72,
            CalculationMethod::Authority(ZmanAuthority::AteretTorah),
        )
        .with_authorities([ZmanAuthority::AteretTorah])
        .with_elevation(UsesElevation::IfSet);
        let zman = value_based(definition);

        assert_eq!(
            ZmanDescriptionFormatter::default().format_long(&zman),
            "Supporting authorities: Ateret Torah, - affected by elevation if set"
        );
    }

    #[test]
    fn test_ateret_torah_short_description() {
        assert_eq!(short_description_ateret_torah(40.0), "Ateret Torah (40 minutes)");
        assert_eq!(short_description_ateret_torah(40.5), "Ateret Torah (40.5 minutes)");
    }
}
