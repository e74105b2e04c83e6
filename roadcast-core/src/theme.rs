//! Lookup table from sky condition to display theme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Condition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// 24-bit background color.
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS-style `#RRGGBB` notation.
    #[must_use]
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Animated decoration drawn behind the dashboard.
pub enum BackgroundEffect {
    /// Pulsing sun rays.
    SunRays,
    /// Slowly drifting clouds.
    DriftingClouds,
    /// Falling rain drops.
    Rain,
    /// Horizontal wind streaks.
    WindStreaks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Background styling derived from a condition.
pub struct Theme {
    /// Short name of the theme.
    pub name: &'static str,
    /// Background fill.
    pub background: Rgb,
    /// Optional animated decoration.
    pub effect: Option<BackgroundEffect>,
}

/// Neutral theme used for conditions without an entry in [`THEMES`].
pub const DEFAULT_THEME: Theme = Theme {
    name: "neutral",
    background: Rgb(0xF0, 0xF0, 0xF0),
    effect: None,
};

/// Themes for the conditions that have dedicated styling.
pub const THEMES: [(Condition, Theme); 4] = [
    (
        Condition::Sunny,
        Theme {
            name: "sunny",
            background: Rgb(0xFF, 0xA5, 0x00),
            effect: Some(BackgroundEffect::SunRays),
        },
    ),
    (
        Condition::Cloudy,
        Theme {
            name: "cloudy",
            background: Rgb(0xA9, 0xA9, 0xA9),
            effect: Some(BackgroundEffect::DriftingClouds),
        },
    ),
    (
        Condition::Rainy,
        Theme {
            name: "rainy",
            background: Rgb(0x1E, 0x90, 0xFF),
            effect: Some(BackgroundEffect::Rain),
        },
    ),
    (
        Condition::Windy,
        Theme {
            name: "windy",
            background: Rgb(0x87, 0xCE, 0xFA),
            effect: Some(BackgroundEffect::WindStreaks),
        },
    ),
];

/// Resolve the theme for a condition, falling back to [`DEFAULT_THEME`].
#[must_use]
pub fn resolve_theme(condition: Condition) -> Theme {
    THEMES
        .iter()
        .find(|(mapped, _)| *mapped == condition)
        .map_or(DEFAULT_THEME, |(_, theme)| *theme)
}

/// Resolve the theme for a raw condition label.
///
/// Labels that do not parse as a [`Condition`] get [`DEFAULT_THEME`].
#[must_use]
pub fn resolve_theme_label(label: &str) -> Theme {
    label
        .parse::<Condition>()
        .map_or(DEFAULT_THEME, resolve_theme)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Condition::Sunny, "#FFA500", Some(BackgroundEffect::SunRays))]
    #[case(Condition::Cloudy, "#A9A9A9", Some(BackgroundEffect::DriftingClouds))]
    #[case(Condition::Rainy, "#1E90FF", Some(BackgroundEffect::Rain))]
    #[case(Condition::Windy, "#87CEFA", Some(BackgroundEffect::WindStreaks))]
    #[case(Condition::Snow, "#F0F0F0", None)]
    fn maps_condition_to_background(
        #[case] condition: Condition,
        #[case] hex: &str,
        #[case] effect: Option<BackgroundEffect>,
    ) {
        let theme = resolve_theme(condition);
        assert_eq!(theme.background.hex(), hex, "{condition}");
        assert_eq!(theme.effect, effect, "{condition}");
    }

    #[test]
    fn snow_falls_back_to_neutral() {
        assert_eq!(resolve_theme(Condition::Snow), DEFAULT_THEME);
    }

    #[rstest]
    #[case("Hail")]
    #[case("")]
    #[case("sunny-ish")]
    fn unknown_labels_fall_back_to_neutral(#[case] label: &str) {
        assert_eq!(resolve_theme_label(label), DEFAULT_THEME, "label {label:?}");
    }

    #[test]
    fn known_labels_match_enum_lookup() {
        for condition in Condition::ALL {
            assert_eq!(
                resolve_theme_label(condition.label()),
                resolve_theme(condition),
                "{condition}"
            );
        }
    }

    #[test]
    fn resolution_is_repeatable() {
        for condition in Condition::ALL {
            let first = resolve_theme(condition);
            let again: Vec<_> = (0..5).map(|_| resolve_theme(condition)).collect();
            assert!(again.iter().all(|theme| *theme == first), "{condition}");
        }
    }

    #[test]
    fn table_has_no_duplicate_conditions() {
        for (index, (condition, _)) in THEMES.iter().enumerate() {
            let duplicates = THEMES
                .iter()
                .skip(index + 1)
                .filter(|(other, _)| other == condition)
                .count();
            assert_eq!(duplicates, 0, "{condition} mapped twice");
        }
    }
}
