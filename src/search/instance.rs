//! Problem-instance input. An instance is the raw, untyped description of a
//! problem: the map as rows of cell symbols, a taxi table and a passenger
//! table. [`crate::search::TaxiProblem::new`] validates an instance and turns
//! it into the typed problem the search operates on.
//!
//! The tables are [`BTreeMap`]s so that taxis and passengers get their dense
//! indices in a deterministic (sorted-by-name) order, independent of the
//! order in the input file.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A raw problem instance, deserialized from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Instance {
    /// Rows of cell symbols: 'P' free, 'I' wall, 'G' gas station.
    pub map: Vec<Vec<char>>,
    pub taxis: BTreeMap<String, TaxiSpec>,
    pub passengers: BTreeMap<String, PassengerSpec>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TaxiSpec {
    /// Starting cell, in (row, column) order.
    pub location: (usize, usize),
    /// Starting fuel; also the tank size a refuel fills back up to.
    pub fuel: u32,
    /// Maximum number of simultaneous passengers.
    pub capacity: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PassengerSpec {
    /// Origin cell the passenger waits at.
    pub location: (usize, usize),
    pub destination: (usize, usize),
}

impl Instance {
    pub fn from_text(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_path(path: &Path) -> Result<Self, serde_json::Error> {
        let contents = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read instance file {}: {}", path.display(), e));
        Self::from_text(&contents)
    }
}
