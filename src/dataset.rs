// dataset.rs
//
// The CSV is read exactly once at startup and the rows are immutable for the
// life of the process. Every request filters this Vec from scratch.

use std::path::Path;

use crate::domain::listing::Listing;
use crate::errors::ServerError;

#[derive(Debug)]
pub struct Dataset {
    rows: Vec<Listing>,
    max_price: f64,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Listing>) -> Self {
        let max_price = rows.iter().map(|r| r.price).fold(0.0_f64, f64::max);
        Self { rows, max_price }
    }

    /// Load the 2024 sale records from `path`. A missing or malformed file
    /// is the one fatal condition in the app; the caller exits on Err.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            ServerError::DataError(format!("Failed to open {}: {e}", path.display()))
        })?;

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let listing: Listing = record.map_err(|e| {
                ServerError::DataError(format!("Bad row in {}: {e}", path.display()))
            })?;
            rows.push(listing);
        }

        Ok(Self::from_rows(rows))
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest 물건금액 in the dataset; the budget form's default ceiling.
    pub fn max_price(&self) -> f64 {
        self.max_price
    }
}
