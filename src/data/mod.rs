//! Data module - spreadsheet loading, region selection and table processing

mod highlight;
mod loader;
mod processor;
mod regions;

pub use highlight::{Highlight, HighlightToggles};
pub use loader::DataLoader;
pub use processor::{DataProcessor, ProcessorError};
pub use regions::{CountryGroups, RegionSelector, RegionToggles, Selection};

/// Column names of the Education at a Glance B4 extract.
pub mod columns {
    pub const COUNTRY: &str = "Country";
    pub const COLOR: &str = "Color";

    pub const BA_2013: &str = "BA_or_eq_2013";
    pub const BA_2022: &str = "BA_or_eq_2022";
    pub const MA_2013: &str = "MA_or_eq_2013";
    pub const MA_2022: &str = "MA_or_eq_2022";
    pub const DOC_2013: &str = "DOC_or_eq_2013";
    pub const DOC_2022: &str = "DOC_or_eq_2022";
    pub const ALL_TER_2013: &str = "ALL_TER_2013";
    pub const ALL_TER_2022: &str = "ALL_TER_2022";

    pub const CHANGE_MA: &str = "Change_MA";
    pub const CHANGE_BA: &str = "Change_BA";
    pub const CHANGE_ALL_TER: &str = "Change_ALL_TER";

    /// Numeric source columns, coerced to Float64 on load.
    pub const NUMERIC: [&str; 8] = [
        BA_2013,
        BA_2022,
        MA_2013,
        MA_2022,
        DOC_2013,
        DOC_2022,
        ALL_TER_2013,
        ALL_TER_2022,
    ];

    /// Derived column and its (2013, 2022) inputs.
    pub const CHANGES: [(&str, &str, &str); 3] = [
        (CHANGE_MA, MA_2013, MA_2022),
        (CHANGE_BA, BA_2013, BA_2022),
        (CHANGE_ALL_TER, ALL_TER_2013, ALL_TER_2022),
    ];
}
