use std::fmt::Display;

use super::validate::RecordKind;

/// Outcome of one import call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: u32,
    pub updated: u32,
    pub skipped: u32,
    /// One entry per skipped row, in file order, each prefixed with `Line <n>: `.
    pub errors: Vec<String>,
}

impl ImportReport {
    pub fn record_imported(&mut self) {
        self.imported += 1;
    }

    pub fn record_updated(&mut self) {
        self.updated += 1;
    }

    pub fn record_skipped(&mut self, line: u64, reason: impl Display) {
        self.skipped += 1;
        self.errors.push(format!("Line {line}: {reason}"));
    }

    /// Total number of data rows seen.
    pub fn processed(&self) -> u32 {
        self.imported + self.updated + self.skipped
    }

    /// Human-readable summary shown to the admin after an import.
    pub fn summary(&self, kind: RecordKind) -> String {
        match kind {
            RecordKind::Whisky => format!(
                "Import terminé: {} importés, {} ignorés",
                self.imported, self.skipped
            ),
            RecordKind::Distillery => format!(
                "Import terminé: {} importés, {} mis à jour, {} ignorés",
                self.imported, self.updated, self.skipped
            ),
        }
    }
}
