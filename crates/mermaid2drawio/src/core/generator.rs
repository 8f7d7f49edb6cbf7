//! Core generator trait for draw.io cell output
//!
//! A generator lays out one dialect's database and turns it into the flat
//! list of cells the document serializer writes.

use anyhow::Result;

use super::{Cell, Database};

/// Core trait for cell generators
pub trait Generator<D: Database>: Send + Sync {
    /// Lay out the database and produce its cells (structural cells excluded)
    fn generate(&self, database: &D) -> Result<Vec<Cell>>;

    /// Get the name of this generator
    fn name(&self) -> &'static str;

    /// Get the version of this generator
    fn version(&self) -> &'static str;
}

/// Hands out sequential cell ids with a role prefix, such as `participant_2`
///
/// Ids `0` and `1` belong to the structural cells, so counting starts at 2.
#[derive(Debug)]
pub struct CellIds {
    next: usize,
}

impl CellIds {
    pub fn new() -> Self {
        Self { next: 2 }
    }

    /// Take the next id for the given role
    pub fn take(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}_{}", self.next);
        self.next += 1;
        id
    }
}

impl Default for CellIds {
    fn default() -> Self {
        Self::new()
    }
}
