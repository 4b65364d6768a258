use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;

use super::ImportError;

/// One data row of an import file, keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    /// 1-based position among data rows (the header is not counted).
    pub line_number: u64,
    fields: IndexMap<String, String>,
}

impl ImportRow {
    pub fn new(line_number: u64, fields: IndexMap<String, String>) -> Self {
        Self {
            line_number,
            fields,
        }
    }

    /// Build a row from `(column, value)` pairs. Mostly useful in tests.
    pub fn from_pairs<'a>(
        line_number: u64,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::new(line_number, fields)
    }

    /// The untouched cell value, if the column exists.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// The trimmed cell value. Blank cells and absent columns both yield `None`.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.raw(column).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Owned variant of [`value`](Self::value).
    pub fn owned(&self, column: &str) -> Option<String> {
        self.value(column).map(str::to_string)
    }

}

/// Lazy reader over a CSV stream with a header row.
///
/// The header is read eagerly by [`RowReader::new`], so an unreadable or
/// empty stream fails before any row is produced. Iteration stops for good
/// after the first malformed record.
#[derive(Debug)]
pub struct RowReader<R> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: StringRecord,
    next_line: u64,
    done: bool,
}

impl<R: Read> RowReader<R> {
    pub fn new(source: R) -> Result<Self, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader
            .headers()
            .map_err(ImportError::Header)?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(ImportError::MissingHeader);
        }

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            next_line: 1,
            done: false,
        })
    }

    /// Trimmed header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn build_row(&self, line_number: u64) -> ImportRow {
        let mut fields = IndexMap::with_capacity(self.headers.len());
        for (idx, header) in self.headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            // Short rows are padded; first occurrence of a repeated header wins.
            let value = self.record.get(idx).unwrap_or_default();
            fields
                .entry(header.clone())
                .or_insert_with(|| value.to_string());
        }
        ImportRow::new(line_number, fields)
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<ImportRow, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                let line = self.next_line;
                self.next_line += 1;
                Some(Ok(self.build_row(line)))
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(source) => {
                self.done = true;
                Some(Err(ImportError::Record {
                    line: self.next_line,
                    source,
                }))
            }
        }
    }
}
