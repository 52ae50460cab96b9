//! Region Selection Module
//! Maps the region checkboxes to the set of countries shown on the charts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Region checkboxes. `show_nordic` is locked on in the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionToggles {
    pub show_nordic: bool,
    pub show_western: bool,
    pub show_oecd: bool,
    pub show_all: bool,
}

impl Default for RegionToggles {
    fn default() -> Self {
        Self {
            show_nordic: true,
            show_western: false,
            show_oecd: false,
            show_all: false,
        }
    }
}

impl RegionToggles {
    pub fn any(&self) -> bool {
        self.show_nordic || self.show_western || self.show_oecd || self.show_all
    }
}

/// Fixed comparison groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryGroups {
    pub nordic: Vec<String>,
    pub western: Vec<String>,
    pub oecd: Vec<String>,
}

impl Default for CountryGroups {
    fn default() -> Self {
        let owned = |names: &[&str]| -> Vec<String> { names.iter().map(|s| s.to_string()).collect() };
        Self {
            nordic: owned(&["Denmark", "Sweden", "Norway", "Finland", "Iceland"]),
            western: owned(&[
                "Germany",
                "France",
                "Netherlands",
                "Belgium",
                "Austria",
                "Switzerland",
                "Ireland",
            ]),
            oecd: owned(&[
                "United Kingdom",
                "Ireland",
                "United States",
                "Canada",
                "Australia",
                "New Zealand",
                "Japan",
                "South Korea",
                "OECD total",
                "EU25 total",
            ]),
        }
    }
}

/// Result of resolving the region checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Countries to keep. May still be empty if none of them are in the table.
    Countries(BTreeSet<String>),
    /// Every checkbox is off; the caller shows a warning instead of charts.
    Nothing,
}

pub struct RegionSelector;

impl RegionSelector {
    /// Resolve the toggles against the fixed groups.
    ///
    /// `table_countries` is only consulted when `show_all` is set.
    pub fn select<'a, I>(toggles: RegionToggles, groups: &CountryGroups, table_countries: I) -> Selection
    where
        I: IntoIterator<Item = &'a str>,
    {
        if toggles.show_all {
            return Selection::Countries(table_countries.into_iter().map(str::to_string).collect());
        }

        if !toggles.any() {
            return Selection::Nothing;
        }

        let mut selected = BTreeSet::new();
        for (enabled, group) in [
            (toggles.show_nordic, &groups.nordic),
            (toggles.show_western, &groups.western),
            (toggles.show_oecd, &groups.oecd),
        ] {
            if enabled {
                selected.extend(group.iter().cloned());
            }
        }

        Selection::Countries(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [&str; 4] = ["Denmark", "Chile", "Mexico", "Sweden"];

    fn countries(selection: Selection) -> BTreeSet<String> {
        match selection {
            Selection::Countries(set) => set,
            Selection::Nothing => panic!("expected a country selection"),
        }
    }

    #[test]
    fn show_all_returns_every_table_country() {
        let groups = CountryGroups::default();
        for (nordic, western, oecd) in [(false, false, false), (true, true, true), (true, false, true)] {
            let toggles = RegionToggles {
                show_nordic: nordic,
                show_western: western,
                show_oecd: oecd,
                show_all: true,
            };
            let selection = RegionSelector::select(toggles, &groups, TABLE);
            let expected: BTreeSet<String> = TABLE.iter().map(|s| s.to_string()).collect();
            assert_eq!(selection, Selection::Countries(expected));
        }
    }

    #[test]
    fn no_toggles_selects_nothing() {
        let toggles = RegionToggles {
            show_nordic: false,
            show_western: false,
            show_oecd: false,
            show_all: false,
        };
        let selection = RegionSelector::select(toggles, &CountryGroups::default(), TABLE);
        assert_eq!(selection, Selection::Nothing);
    }

    #[test]
    fn default_selects_nordic_only() {
        let selection =
            RegionSelector::select(RegionToggles::default(), &CountryGroups::default(), TABLE);
        let countries = countries(selection);
        assert_eq!(countries.len(), 5);
        assert!(countries.contains("Iceland"));
        assert!(!countries.contains("Chile"));
    }

    #[test]
    fn overlapping_groups_collapse() {
        let toggles = RegionToggles {
            show_nordic: false,
            show_western: true,
            show_oecd: true,
            show_all: false,
        };
        let selection = RegionSelector::select(toggles, &CountryGroups::default(), TABLE);
        // Ireland is in both groups: 7 + 10 - 1
        assert_eq!(countries(selection).len(), 16);
    }
}
