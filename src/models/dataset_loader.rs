use crate::models::raw_post::EXPECTED_COLUMNS;
use crate::models::RawPost;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// The raw rows of one dataset load. Read-only once produced.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Where the rows came from, if they were read from disk.
    pub source: Option<PathBuf>,
    pub rows: Vec<RawPost>,
    /// Rows the CSV reader could not decode at all. These never reach the normalizer.
    pub unreadable_rows: usize,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct DatasetLoader {}

/// Reads post datasets from delimited text, optionally Gzip compressed.
impl DatasetLoader {
    /// Load a dataset from disk.
    ///
    /// Paths ending in `.gz` are decompressed on the fly.
    ///
    /// # Errors
    ///
    /// Returns `Error::DatasetUnavailable` if the path cannot be opened,
    /// `Error::ParserError` if the header row cannot be read, and
    /// `Error::IoError` if the stream fails partway through. Individual rows
    /// that fail to decode are counted in `Dataset::unreadable_rows` instead.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, Error> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| Error::DatasetUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loading dataset from {}...", path.display());

        let mut dataset = if is_gzip_path(path) {
            Self::read_from_reader(GzDecoder::new(file))?
        } else {
            Self::read_from_reader(BufReader::new(file))?
        };
        dataset.source = Some(path.to_path_buf());

        info!(
            "Loaded {} rows ({} unreadable) from {}",
            dataset.len(),
            dataset.unreadable_rows,
            path.display()
        );

        Ok(dataset)
    }

    /// Parse a dataset from a CSV-formatted string.
    pub fn read_from_string(csv_str: &str) -> Result<Dataset, Error> {
        // Use a cursor to simulate a file reader from the string
        Self::read_from_reader(Cursor::new(csv_str))
    }

    /// Parse a dataset from any reader producing CSV text with a header row.
    pub fn read_from_reader<R: Read>(reader: R) -> Result<Dataset, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        // Exports of the election dataset carry stray '\r' (and sometimes a BOM)
        // in the header names
        let headers: StringRecord = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim())
            .collect();

        for column in EXPECTED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                warn!("Dataset is missing expected column '{}'", column);
            }
        }

        reader.set_headers(headers);

        let mut dataset = Dataset::default();

        for (row_idx, result) in reader.deserialize::<RawPost>().enumerate() {
            match result {
                Ok(raw_post) => dataset.rows.push(raw_post),
                // A failing underlying stream (truncated or corrupt Gzip) fails the whole load
                Err(err) if err.is_io_error() => return Err(Error::from(err)),
                Err(err) => {
                    warn!("Skipping unreadable row {}: {}", row_idx + 1, err);
                    dataset.unreadable_rows += 1;
                }
            }
        }

        Ok(dataset)
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}
