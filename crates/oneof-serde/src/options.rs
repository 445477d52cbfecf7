//! Decode-time configuration.
//!
//! The serde trait impls always decode with [`DecodeOptions::default`]; the
//! `*_with` functions in [`crate::inferred`] and [`crate::category`] take an
//! explicit value. Options are plain data and can be loaded from a config
//! file alongside the rest of an application's settings:
//!
//! ```
//! use oneof_serde::{DateStrings, DecodeOptions};
//!
//! let options: DecodeOptions = serde_json::from_str(r#"{"date_strings":"text"}"#).unwrap();
//! assert_eq!(options.date_strings, DateStrings::Text);
//! ```

use serde::{Deserialize, Serialize};

/// How string nodes that look like ISO 8601 date-times are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStrings {
    /// Date-time strings classify as [`Category::Date`](crate::Category::Date).
    #[default]
    Detect,
    /// Every string classifies as [`Category::StringOrEnum`](crate::Category::StringOrEnum).
    Text,
}

/// Options consulted while classifying and decoding nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub date_strings: DateStrings,
}

impl DecodeOptions {
    /// Options with date detection turned off: date-looking text stays text.
    pub fn text_dates() -> Self {
        Self {
            date_strings: DateStrings::Text,
        }
    }

    pub fn with_date_strings(mut self, date_strings: DateStrings) -> Self {
        self.date_strings = date_strings;
        self
    }

    pub(crate) fn detects_dates(&self) -> bool {
        self.date_strings == DateStrings::Detect
    }
}
