//! Seams to the systems the ordering flow talks to.
//!
//! The production backend sits behind these traits; the file-backed
//! implementations here keep the workspace usable offline and in tests.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::catalog::{load_catalog, Catalog};
use crate::products::Order;
use crate::CollaboratorError;

/// Supplies the product catalog.
pub trait CatalogSource {
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the catalog cannot be obtained.
    fn catalog(&self) -> Result<Catalog, CollaboratorError>;
}

/// Accepts a finished order.
pub trait OrderSubmitter {
    /// Returns whether the order was accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the order could not be delivered.
    fn submit(&self, order: &Order) -> Result<bool, CollaboratorError>;
}

/// Lists a user's past orders.
pub trait OrderHistory {
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if history cannot be read.
    fn orders_for(&self, user_id: &str) -> Result<Vec<Order>, CollaboratorError>;
}

/// Catalog read from a YAML or JSON file on every call.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn catalog(&self) -> Result<Catalog, CollaboratorError> {
        Ok(load_catalog(&self.path)?)
    }
}

/// Orders stored one JSON document per line.
///
/// Submitting appends; history reads the whole file. Orders without an id
/// are given a UUID on submission.
#[derive(Debug, Clone)]
pub struct JsonlOutbox {
    path: PathBuf,
}

impl JsonlOutbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CollaboratorError {
        CollaboratorError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl OrderSubmitter for JsonlOutbox {
    fn submit(&self, order: &Order) -> Result<bool, CollaboratorError> {
        let mut order = order.clone();
        let id = order
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        let line = serde_json::to_string(&order)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "{line}").map_err(|e| self.io_error(e))?;

        tracing::info!(order = %id, path = %self.path.display(), "order written to outbox");
        Ok(true)
    }
}

impl OrderHistory for JsonlOutbox {
    fn orders_for(&self, user_id: &str) -> Result<Vec<Order>, CollaboratorError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut orders = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error(e))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Order>(&line) {
                Ok(order) if order.user_id == user_id => orders.push(order),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = idx + 1,
                        error = %e,
                        "skipping unreadable outbox line"
                    );
                }
            }
        }
        Ok(orders)
    }
}
