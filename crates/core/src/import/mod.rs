//! Bulk CSV importer for whiskies and distilleries.
//!
//! An import call reads one uploaded CSV file row by row and upserts each row
//! through a [`CatalogStore`]:
//!
//! - [`RowReader`] turns the byte stream into [`ImportRow`]s (header excluded,
//!   lines numbered from 1).
//! - Records are validated and converted by [`WhiskyRecord::from_row`] /
//!   [`DistilleryRecord::from_row`].
//! - [`import_whiskies`] resolves the distillery by name (creating it when
//!   missing) and skips `(name, distillery)` duplicates.
//! - [`import_distilleries`] inserts new distilleries and overwrites the
//!   optional details of existing ones.
//!
//! Row-level failures never abort a batch; they are counted as skipped and
//! described in the returned [`ImportReport`]. Only a fatal [`ImportError`]
//! (unreadable header or malformed record) stops the loop. There is no
//! transaction around the batch: rows processed before a fatal error stay
//! committed.

mod engine;
mod record;
mod report;
mod row;
mod store;
mod validate;

pub use engine::{import_distilleries, import_whiskies};
pub use record::{AffiliateOffer, DistilleryRecord, WhiskyRecord, AFFILIATE_SLOTS, DEFAULT_WHISKY_TYPE};
pub use report::ImportReport;
pub use row::{ImportRow, RowReader};
pub use store::{CatalogStore, StoreError};
pub use validate::{missing_required_fields, RecordKind};

/// Fatal import failure. Aborts the remainder of the batch.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The header row could not be read (I/O error, bad UTF-8).
    #[error("unable to read CSV header: {0}")]
    Header(#[source] csv::Error),

    /// The stream is empty or its first line names no column.
    #[error("CSV file has no header row")]
    MissingHeader,

    /// A data record could not be decoded.
    #[error("malformed CSV record at line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Reason a single row was skipped. Rendered after the `Line <n>: ` prefix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("missing required fields ({})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid value for {column} (\"{raw}\")")]
    InvalidValue { column: String, raw: String },

    #[error("whisky \"{0}\" already exists")]
    AlreadyExists(String),

    #[error("distillery \"{0}\" disappeared during import")]
    Vanished(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
