//! Positional field layout.

/// Where the designated fields sit in a record and how they are checked.
///
/// The default layout reads followers from field 1 and popularity from
/// field 4 of a comma-separated record, and requires at least five
/// fields. Header names are never consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Zero-based index of the followers field
    pub followers: usize,
    /// Zero-based index of the popularity field
    pub popularity: usize,
    /// Records with fewer fields are skipped
    pub min_fields: usize,
    /// Marker compared case-insensitively against trimmed field values
    pub null_marker: String,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            delimiter: b',',
            followers: 1,
            popularity: 4,
            min_fields: 5,
            null_marker: "null".into(),
        }
    }
}

impl FieldLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the followers index, growing `min_fields` to cover it.
    pub fn with_followers(mut self, index: usize) -> Self {
        self.followers = index;
        self.min_fields = self.min_fields.max(index + 1);
        self
    }

    /// Set the popularity index, growing `min_fields` to cover it.
    pub fn with_popularity(mut self, index: usize) -> Self {
        self.popularity = index;
        self.min_fields = self.min_fields.max(index + 1);
        self
    }

    /// Set the minimum field count.
    ///
    /// Never drops below what the designated indices need.
    pub fn with_min_fields(mut self, min_fields: usize) -> Self {
        self.min_fields = min_fields.max(self.required_fields());
        self
    }

    pub fn with_null_marker(mut self, marker: impl Into<String>) -> Self {
        self.null_marker = marker.into();
        self
    }

    /// Smallest field count that contains both designated fields.
    pub fn required_fields(&self) -> usize {
        self.followers.max(self.popularity) + 1
    }

    pub(crate) fn is_null_marker(&self, value: &str) -> bool {
        value.eq_ignore_ascii_case(&self.null_marker)
    }
}
