//! Highlight Rules Module
//! Assigns each country one color category by an ordered rule list.

use serde::{Deserialize, Serialize};

/// The home country, always drawn in red.
pub const HOME_COUNTRY: &str = "Denmark";

const SCANDINAVIA: [&str; 2] = ["Sweden", "Norway"];
const OECD_EU_TOTALS: [&str; 2] = ["OECD total", "EU25 total"];

/// Highlight category of a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Home,
    Scandinavia,
    OecdEu,
    Default,
}

impl Highlight {
    /// Category label stored in the `Color` column.
    pub fn label(self) -> &'static str {
        match self {
            Highlight::Home => "red",
            Highlight::Scandinavia => "orange",
            Highlight::OecdEu => "green",
            Highlight::Default => "gray",
        }
    }

    /// Marker color for the category, same name as the label.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Highlight::Home => (255, 0, 0),
            Highlight::Scandinavia => (255, 165, 0),
            Highlight::OecdEu => (0, 128, 0),
            Highlight::Default => (128, 128, 128),
        }
    }

    /// Parse a `Color` label back into its category.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "red" => Some(Highlight::Home),
            "orange" => Some(Highlight::Scandinavia),
            "green" => Some(Highlight::OecdEu),
            "gray" => Some(Highlight::Default),
            _ => None,
        }
    }
}

/// Highlight checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightToggles {
    pub scandinavia: bool,
    pub oecd_eu: bool,
}

impl Default for HighlightToggles {
    fn default() -> Self {
        Self {
            scandinavia: true,
            oecd_eu: false,
        }
    }
}

/// One entry of the priority list. `Default` is the fallback, not a rule.
struct Rule {
    highlight: Highlight,
    applies: fn(&str, HighlightToggles) -> bool,
}

fn is_home(country: &str, _: HighlightToggles) -> bool {
    country == HOME_COUNTRY
}

fn is_scandinavian(country: &str, toggles: HighlightToggles) -> bool {
    toggles.scandinavia && SCANDINAVIA.contains(&country)
}

fn is_oecd_eu_total(country: &str, toggles: HighlightToggles) -> bool {
    toggles.oecd_eu && OECD_EU_TOTALS.contains(&country)
}

/// Evaluated top to bottom, first match wins.
const RULES: [Rule; 3] = [
    Rule {
        highlight: Highlight::Home,
        applies: is_home,
    },
    Rule {
        highlight: Highlight::Scandinavia,
        applies: is_scandinavian,
    },
    Rule {
        highlight: Highlight::OecdEu,
        applies: is_oecd_eu_total,
    },
];

/// Classify a country under the current toggles.
pub fn classify(country: &str, toggles: HighlightToggles) -> Highlight {
    RULES
        .iter()
        .find(|rule| (rule.applies)(country, toggles))
        .map(|rule| rule.highlight)
        .unwrap_or(Highlight::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TOGGLES: [HighlightToggles; 4] = [
        HighlightToggles { scandinavia: false, oecd_eu: false },
        HighlightToggles { scandinavia: true, oecd_eu: false },
        HighlightToggles { scandinavia: false, oecd_eu: true },
        HighlightToggles { scandinavia: true, oecd_eu: true },
    ];

    #[test]
    fn denmark_is_red_under_every_toggle() {
        for toggles in ALL_TOGGLES {
            assert_eq!(classify("Denmark", toggles).label(), "red");
        }
    }

    #[test]
    fn norway_follows_scandinavia_toggle() {
        let on = HighlightToggles { scandinavia: true, oecd_eu: false };
        let off = HighlightToggles { scandinavia: false, oecd_eu: true };
        assert_eq!(classify("Norway", on).label(), "orange");
        assert_eq!(classify("Norway", off).label(), "gray");
        assert_eq!(classify("Sweden", on), Highlight::Scandinavia);
    }

    #[test]
    fn totals_need_oecd_eu_toggle() {
        let on = HighlightToggles { scandinavia: true, oecd_eu: true };
        assert_eq!(classify("OECD total", on).label(), "green");
        assert_eq!(classify("EU25 total", on).label(), "green");
        assert_eq!(classify("EU25 total", HighlightToggles::default()).label(), "gray");
    }

    #[test]
    fn other_countries_are_gray() {
        for toggles in ALL_TOGGLES {
            assert_eq!(classify("Finland", toggles), Highlight::Default);
            assert_eq!(classify("Japan", toggles), Highlight::Default);
        }
    }

    #[test]
    fn labels_parse_back() {
        for h in [
            Highlight::Home,
            Highlight::Scandinavia,
            Highlight::OecdEu,
            Highlight::Default,
        ] {
            assert_eq!(Highlight::from_label(h.label()), Some(h));
        }
        assert_eq!(Highlight::from_label("blue"), None);
    }
}
