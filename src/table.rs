//! Dimension Table
//!
//! Fixed dictionary mapping canonical quantity names to their dimension
//! vectors. Built once, immutable for the process lifetime; lookup misses are
//! normal outcomes (`None`), never errors.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::vector::DimensionVector;

/// One named quantity with its dimensional formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityEntry {
    /// Lowercase canonical name, unique within a table
    pub name: String,
    /// Dimensional formula as exponents over {M, L, T}
    pub vector: DimensionVector,
}

/// The canonical quantities known locally.
static STANDARD_ENTRIES: Lazy<Vec<(&'static str, DimensionVector)>> = Lazy::new(|| {
    vec![
        ("length", DimensionVector::new(0, 1, 0)),
        ("mass", DimensionVector::new(1, 0, 0)),
        ("time", DimensionVector::new(0, 0, 1)),
        ("speed", DimensionVector::new(0, 1, -1)),
        ("velocity", DimensionVector::new(0, 1, -1)),
        ("acceleration", DimensionVector::new(0, 1, -2)),
        ("force", DimensionVector::new(1, 1, -2)),
        ("momentum", DimensionVector::new(1, 1, -1)),
        ("energy", DimensionVector::new(1, 2, -2)),
        ("power", DimensionVector::new(1, 2, -3)),
        ("pressure", DimensionVector::new(1, -1, -2)),
        ("density", DimensionVector::new(1, -3, 0)),
    ]
});

/// Immutable name -> vector dictionary.
///
/// Names are stored lowercase; `lookup` is case-insensitive. Multiple names
/// may share one vector ("speed" and "velocity" are both `LT^-1`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DimensionTable {
    entries: BTreeMap<String, DimensionVector>,
}

impl DimensionTable {
    /// The canonical dictionary of well-known mechanical quantities.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_ENTRIES.iter().map(|(n, v)| (*n, *v)))
    }

    /// Build a table from arbitrary entries.
    ///
    /// Names are lowercased on insert; a duplicate name keeps the last
    /// vector given, preserving name uniqueness.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, DimensionVector)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, vector)| (name.as_ref().to_lowercase(), vector))
            .collect();
        Self { entries }
    }

    /// Look up a quantity by name, case-insensitively.
    ///
    /// Absence is an expected outcome, not a failure.
    pub fn lookup(&self, name: &str) -> Option<DimensionVector> {
        self.entries.get(&name.to_lowercase()).copied()
    }

    /// Iterate all entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = QuantityEntry> + '_ {
        self.entries.iter().map(|(name, vector)| QuantityEntry {
            name: name.clone(),
            vector: *vector,
        })
    }

    /// Number of known quantities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for a table with no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
