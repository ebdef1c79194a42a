//! Normalization of recognition result fields into display strings.
//!
//! Engines report text in several script variants and duplicate many values between the
//! visual zone, the MRZ, and barcodes. Display code picks the first usable value from a fixed
//! priority list.

/// Placeholder shown for a field with no usable value.
pub const NOT_AVAILABLE: &str = "N/A";

/// First candidate that is present and not blank.
pub fn first_non_empty<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

/// The value, or [`NOT_AVAILABLE`].
pub fn display_or_na(value: Option<&str>) -> String {
    first_non_empty([value])
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Text field reported in several scripts.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    /// Latin script value.
    pub latin: Option<String>,
    /// Cyrillic script value.
    pub cyrillic: Option<String>,
    /// Arabic script value.
    pub arabic: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

impl LocalizedText {
    /// Latin-only text.
    pub fn latin(value: impl Into<String>) -> Self {
        Self {
            latin: Some(value.into()),
            ..Self::default()
        }
    }

    /// Best available value: latin, cyrillic, arabic, then description.
    pub fn value(&self) -> Option<&str> {
        first_non_empty([
            self.latin.as_deref(),
            self.cyrillic.as_deref(),
            self.arabic.as_deref(),
            self.description.as_deref(),
        ])
    }
}

/// Calendar date as reported by the engine; unknown parts are zero or absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DateParts {
    /// Day of month.
    pub day: u32,
    /// Month, 1-based.
    pub month: u32,
    /// Full year; 0 means unknown.
    pub year: u32,
}

impl DateParts {
    /// `M/D/YYYY`, or `None` when the year is unknown.
    pub fn display(&self) -> Option<String> {
        (self.year != 0).then(|| format!("{}/{}/{}", self.month, self.day, self.year))
    }
}

/// Display a date, falling back to [`NOT_AVAILABLE`].
pub fn format_date(date: Option<&DateParts>) -> String {
    date.and_then(DateParts::display)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Named prioritized lookup with a fixed fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLookup {
    /// Field name, for diagnostics.
    pub name: &'static str,
    /// Value used when no candidate is usable.
    pub fallback: &'static str,
}

impl FieldLookup {
    /// Lookup named `name` falling back to [`NOT_AVAILABLE`].
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            fallback: NOT_AVAILABLE,
        }
    }

    /// Resolve `candidates` in order.
    pub fn resolve(&self, candidates: &[Option<&str>]) -> String {
        match first_non_empty(candidates.iter().copied()) {
            Some(v) => v.to_string(),
            None => {
                tracing::trace!(field = self.name, "no value, using fallback");
                self.fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/fields/fields.rs"]
mod tests;
