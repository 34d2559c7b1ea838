//! Persistence for job application records.
//!
//! The [`Store`] trait is the only way handlers touch storage. [`CsvStore`]
//! keeps records in a comma separated file with a header row, [`MemoryStore`]
//! keeps them in memory so the same logic can run without a file.
//!
//! Every call does whole-file I/O. Nothing is cached between calls and the
//! file is not locked.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, info};

use crate::config::FIELD_NAMES;
use crate::error::{Error, Result};
use crate::record::Record;

const FILE_DESCRIPTION: &str = "job applications";

/// Ordered storage of every tracked record.
pub trait Store {
    /// Reads all records in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreNotFound`] when nothing has been stored yet, or an
    /// error if a row is malformed.
    fn load(&self) -> Result<Vec<Record>>;

    /// Adds one record after the existing ones without rewriting them.
    fn append(&mut self, record: &Record) -> Result<()>;

    /// Replaces the stored records with `records`.
    fn rewrite(&mut self, records: &[Record]) -> Result<()>;

    /// Like [`Store::load`], but a store that does not exist yet is empty.
    fn load_or_empty(&self) -> Result<Vec<Record>> {
        match self.load() {
            Err(Error::StoreNotFound { path }) => {
                debug!("No store at `{path}` yet, treating as empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

/// Records kept in a CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: String,
}

impl CsvStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    fn io_error(&self, original: std::io::Error) -> Error {
        Error::io_error(FILE_DESCRIPTION.to_string(), self.path.clone(), original)
    }

    fn get_reader(&self) -> Result<File> {
        match File::open(&self.path) {
            Ok(reader) => Ok(reader),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::StoreNotFound {
                path: self.path.clone(),
            }),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn ensure_parent_directory(&self) -> Result<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating directory `{}`", parent.display());
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        Ok(())
    }

    /// Opens the file for appending and makes sure the next write starts on a
    /// fresh line. Returns whether the file is still empty and needs a header.
    fn open_for_append(&self) -> Result<(File, bool)> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        let len = file.metadata().map_err(|e| self.io_error(e))?.len();
        if len == 0 {
            return Ok((file, true));
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|e| self.io_error(e))?;
        if last[0] != b'\n' {
            debug!("`{}` does not end with a newline, terminating last row", self.path);
            file.write_all(b"\n").map_err(|e| self.io_error(e))?;
        }

        Ok((file, false))
    }

    fn write_records<'a>(
        &self,
        file: File,
        write_header: bool,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer
                .write_record(FIELD_NAMES)
                .map_err(|e| Error::csv_error("writing", &self.path, e))?;
        }

        for record in records {
            writer
                .serialize(record)
                .map_err(|e| Error::csv_error("writing", &self.path, e))?;
        }

        writer.flush().map_err(|e| self.io_error(e))
    }
}

impl Store for CsvStore {
    fn load(&self) -> Result<Vec<Record>> {
        let reader = self.get_reader()?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<Record>() {
            records.push(row.map_err(|e| Error::csv_error("reading", &self.path, e))?);
        }

        debug!("Loaded {} records from `{}`", records.len(), self.path);
        Ok(records)
    }

    fn append(&mut self, record: &Record) -> Result<()> {
        self.ensure_parent_directory()?;
        let (file, write_header) = self.open_for_append()?;

        debug!("Appending to `{}` (header: {write_header})", self.path);
        self.write_records(file, write_header, [record])
    }

    fn rewrite(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_directory()?;
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;

        info!("Rewriting `{}` with {} records", self.path, records.len());
        self.write_records(file, true, records)
    }
}

/// Records kept in memory. Starts out as "nothing stored yet".
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Option<Vec<Record>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Some(records),
        }
    }

    /// The stored records, or `None` if nothing was ever written.
    #[must_use]
    pub fn records(&self) -> Option<&[Record]> {
        self.records.as_deref()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        self.records.clone().ok_or_else(|| Error::StoreNotFound {
            path: "<memory>".to_string(),
        })
    }

    fn append(&mut self, record: &Record) -> Result<()> {
        self.records
            .get_or_insert_with(Vec::new)
            .push(record.clone());
        Ok(())
    }

    fn rewrite(&mut self, records: &[Record]) -> Result<()> {
        self.records = Some(records.to_vec());
        Ok(())
    }
}

/// Puts `record` at `position`, keeping every other record where it was.
///
/// # Errors
///
/// Returns [`Error::PositionOutOfRange`] if `position` is not a stored position.
pub fn replace_at(records: &mut [Record], position: usize, record: Record) -> Result<()> {
    let len = records.len();
    let slot = records
        .get_mut(position)
        .ok_or(Error::PositionOutOfRange { position, len })?;
    *slot = record;
    Ok(())
}

/// Removes the record at `position`, keeping the relative order of the rest.
///
/// # Errors
///
/// Returns [`Error::PositionOutOfRange`] if `position` is not a stored position.
pub fn remove_at(records: &mut Vec<Record>, position: usize) -> Result<Record> {
    if position >= records.len() {
        return Err(Error::PositionOutOfRange {
            position,
            len: records.len(),
        });
    }

    Ok(records.remove(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Status;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_records() -> Vec<Record> {
        vec![
            Record::with_date("2024-01-01 10:00:00", "Acme", "Engineer", Status::Pending, ""),
            Record::with_date(
                "2024-01-02 10:00:00",
                "Acme Rockets",
                "Pilot",
                Status::Hired,
                "signed",
            ),
            Record::with_date("2024-01-03 10:00:00", "Zeta", "Analyst", Status::Rejected, "ghosted"),
        ]
    }

    fn store_in(dir: &TempDir) -> CsvStore {
        CsvStore::new(dir.path().join("jobs.csv").to_str().unwrap())
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(store.load(), Err(Error::StoreNotFound { .. })));
        assert!(store.load_or_empty().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_file_with_header() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let records = create_test_records();

        store.append(&records[0]).unwrap();
        store.append(&records[1]).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("date_added,company,title,status,notes"));
        assert_eq!(contents.matches("date_added").count(), 1);

        assert_eq!(store.load().unwrap(), records[..2].to_vec());
    }

    #[test]
    fn test_append_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("jobs.csv");
        let mut store = CsvStore::new(path.to_str().unwrap());

        store.append(&create_test_records()[0]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_fields_with_delimiters_survive() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let record = Record::with_date(
            "2024-01-01 10:00:00",
            "Acme, Inc.",
            "Engineer \"II\"",
            Status::InProgress,
            "line one\nline two",
        );

        store.append(&record).unwrap();
        assert_eq!(store.load().unwrap(), vec![record]);
    }

    #[test]
    fn test_rewrite_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let records = create_test_records();

        store.rewrite(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);

        store.rewrite(&records[2..]).unwrap();
        assert_eq!(store.load().unwrap(), records[2..].to_vec());
    }

    #[test]
    fn test_rewrite_empty_keeps_header() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.rewrite(&[]).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim_end(), "date_added,company,title,status,notes");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = CsvStore::new(temp_file.path().to_str().unwrap());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_unknown_status_is_an_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "date_added,company,title,status,notes\n2024-01-01 10:00:00,Acme,Engineer,MAYBE,\n"
        )
        .unwrap();
        let store = CsvStore::new(temp_file.path().to_str().unwrap());

        match store.load() {
            Err(Error::Csv { original, .. }) => {
                assert!(original
                    .to_string()
                    .contains(&Error::UnknownStatus("MAYBE".to_string()).to_string()));
            }
            other => panic!("expected a CSV error, got {other:?}"),
        }
    }

    #[test]
    fn test_append_after_row_without_trailing_newline() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "date_added,company,title,status,notes\n2024-01-01 10:00:00,Acme,Engineer,PENDING,hi"
        )
        .unwrap();
        let mut store = CsvStore::new(temp_file.path().to_str().unwrap());
        assert_eq!(store.load().unwrap().len(), 1);

        let added =
            Record::with_date("2024-01-02 10:00:00", "Globex", "Analyst", Status::Hired, "");
        store.append(&added).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].notes, "hi");
        assert_eq!(records[1], added);

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.matches("date_added").count(), 1);
    }

    #[test]
    fn test_load_short_row_is_an_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "date_added,company,title,status,notes\n2024-01-01 10:00:00,Acme,Engineer\n"
        )
        .unwrap();
        let store = CsvStore::new(temp_file.path().to_str().unwrap());

        assert!(matches!(store.load(), Err(Error::Csv { .. })));
    }

    #[test]
    fn test_load_legacy_spreadsheet() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "DATE ADDED,COMPANY,JOB TITLE,STATUS,NOTES\r\n\
             05-15-20 22:15:23,Apple,Engineer,IN PROGRESS,phone screen\r\n\
             05-16-20 08:00:00,Stack Overflow,Writer,OFFER RECEIVED,\r\n"
        )
        .unwrap();
        let store = CsvStore::new(temp_file.path().to_str().unwrap());

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, Status::InProgress);
        assert_eq!(records[0].title, "Engineer");
        assert_eq!(records[1].status, Status::OfferReceived);
        assert_eq!(records[1].notes, "");
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(matches!(store.load(), Err(Error::StoreNotFound { .. })));
        assert!(store.records().is_none());

        let records = create_test_records();
        store.append(&records[0]).unwrap();
        assert_eq!(store.load().unwrap(), records[..1].to_vec());

        store.rewrite(&records).unwrap();
        assert_eq!(store.records().unwrap(), records.as_slice());
    }

    #[test]
    fn test_replace_at_keeps_positions() {
        let mut records = create_test_records();
        let original = records.clone();
        let mut replacement = records[1].clone();
        replacement.notes = "start monday".to_string();

        replace_at(&mut records, 1, replacement.clone()).unwrap();

        assert_eq!(records[0], original[0]);
        assert_eq!(records[1], replacement);
        assert_eq!(records[2], original[2]);
        assert!(matches!(
            replace_at(&mut records, 3, replacement),
            Err(Error::PositionOutOfRange { position: 3, len: 3 })
        ));
    }

    #[test]
    fn test_remove_at_keeps_relative_order() {
        let mut records = create_test_records();
        let original = records.clone();

        let removed = remove_at(&mut records, 1).unwrap();

        assert_eq!(removed, original[1]);
        assert_eq!(records, vec![original[0].clone(), original[2].clone()]);
        assert!(remove_at(&mut records, 2).is_err());
    }
}
