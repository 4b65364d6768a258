use super::row::ImportRow;
use super::RowError;

/// Which table an import file targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Whisky,
    Distillery,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whisky => "whisky",
            Self::Distillery => "distillery",
        }
    }

    /// Columns that must be present and non-blank, in reporting order.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Whisky => &["name", "distillery_name", "country"],
            Self::Distillery => &["name", "country"],
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Required columns of `kind` that are absent or blank in `row`.
pub fn missing_required_fields(row: &ImportRow, kind: RecordKind) -> Vec<&'static str> {
    kind.required_fields()
        .iter()
        .copied()
        .filter(|field| row.value(field).is_none())
        .collect()
}

pub(crate) fn check_required(row: &ImportRow, kind: RecordKind) -> Result<(), RowError> {
    let missing = missing_required_fields(row, kind);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RowError::MissingFields(missing))
    }
}
