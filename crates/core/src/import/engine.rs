use std::io::Read;

use tracing::Instrument;

use super::record::{DistilleryRecord, WhiskyRecord};
use super::report::ImportReport;
use super::row::{ImportRow, RowReader};
use super::store::{CatalogStore, StoreError};
use super::validate::RecordKind;
use super::{ImportError, RowError};
use crate::types::DbId;

enum Upserted {
    Inserted,
    Updated,
}

/// Import whiskies from a CSV stream.
///
/// Each row's distillery is looked up by name and created when missing.
/// Rows whose `(name, distillery)` pair already exists are skipped.
pub async fn import_whiskies<S, R>(store: &S, source: R) -> Result<ImportReport, ImportError>
where
    S: CatalogStore + ?Sized,
    R: Read,
{
    run(store, source, RecordKind::Whisky).await
}

/// Import distilleries from a CSV stream.
///
/// Existing distilleries (same name) get their optional details overwritten;
/// new names are inserted.
pub async fn import_distilleries<S, R>(store: &S, source: R) -> Result<ImportReport, ImportError>
where
    S: CatalogStore + ?Sized,
    R: Read,
{
    run(store, source, RecordKind::Distillery).await
}

async fn run<S, R>(store: &S, source: R, kind: RecordKind) -> Result<ImportReport, ImportError>
where
    S: CatalogStore + ?Sized,
    R: Read,
{
    let rows = RowReader::new(source)?;
    let span = tracing::info_span!("catalog_import", %kind);

    async move {
        tracing::debug!(columns = ?rows.headers(), "Reading import file");
        let mut report = ImportReport::default();

        for row in rows {
            let row = row?;
            let line = row.line_number;

            let outcome = match kind {
                RecordKind::Whisky => import_whisky_row(store, &row).await,
                RecordKind::Distillery => import_distillery_row(store, &row).await,
            };

            match outcome {
                Ok(Upserted::Inserted) => report.record_imported(),
                Ok(Upserted::Updated) => report.record_updated(),
                Err(err) => {
                    tracing::debug!(line, error = %err, "Skipping import row");
                    report.record_skipped(line, err);
                }
            }
        }

        tracing::info!(
            processed = report.processed(),
            imported = report.imported,
            updated = report.updated,
            skipped = report.skipped,
            "Import finished"
        );
        Ok(report)
    }
    .instrument(span)
    .await
}

async fn import_whisky_row<S>(store: &S, row: &ImportRow) -> Result<Upserted, RowError>
where
    S: CatalogStore + ?Sized,
{
    let record = WhiskyRecord::from_row(row)?;
    let distillery_id = resolve_distillery(store, &record.distillery_name, &record.country).await?;

    if store.whisky_exists(&record.name, distillery_id).await? {
        return Err(RowError::AlreadyExists(record.name));
    }

    match store.insert_whisky(&record, distillery_id).await {
        Ok(_) => Ok(Upserted::Inserted),
        Err(StoreError::UniqueViolation { .. }) => Err(RowError::AlreadyExists(record.name)),
        Err(err) => Err(err.into()),
    }
}

async fn import_distillery_row<S>(store: &S, row: &ImportRow) -> Result<Upserted, RowError>
where
    S: CatalogStore + ?Sized,
{
    let record = DistilleryRecord::from_row(row)?;

    match store.find_distillery_id(&record.name).await? {
        Some(id) => {
            let affected = store.update_distillery_details(id, &record).await?;
            if affected == 0 {
                return Err(RowError::Vanished(record.name));
            }
            Ok(Upserted::Updated)
        }
        None => {
            store.insert_distillery(&record).await?;
            Ok(Upserted::Inserted)
        }
    }
}

/// Find a distillery by name, creating it with `country` when absent.
///
/// An existing distillery keeps its country. A unique violation on create
/// means a concurrent import inserted the same name; the lookup is retried.
async fn resolve_distillery<S>(store: &S, name: &str, country: &str) -> Result<DbId, RowError>
where
    S: CatalogStore + ?Sized,
{
    if let Some(id) = store.find_distillery_id(name).await? {
        return Ok(id);
    }

    match store.insert_distillery(&DistilleryRecord::named(name, country)).await {
        Ok(id) => {
            tracing::info!(distillery = name, id, "Created distillery from whisky import");
            Ok(id)
        }
        Err(StoreError::UniqueViolation { .. }) => store
            .find_distillery_id(name)
            .await?
            .ok_or_else(|| RowError::Vanished(name.to_string())),
        Err(err) => Err(err.into()),
    }
}
