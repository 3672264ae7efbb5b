//! Equivalence Index
//!
//! Groups table entries by identical dimension vector so a resolved quantity
//! can report every other name sharing its formula. Built once from a
//! [`DimensionTable`] and queried immutably; grouping is on the structured
//! exponent vector, never on the formatted string.

use std::collections::{BTreeSet, HashMap};

use crate::table::DimensionTable;
use crate::vector::DimensionVector;

/// Vector -> set-of-names buckets derived from one table.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceIndex {
    by_vector: HashMap<DimensionVector, BTreeSet<String>>,
}

impl EquivalenceIndex {
    /// Group all entries of `table` by vector equality.
    pub fn build(table: &DimensionTable) -> Self {
        let mut by_vector: HashMap<DimensionVector, BTreeSet<String>> = HashMap::new();
        for entry in table.entries() {
            by_vector.entry(entry.vector).or_default().insert(entry.name);
        }
        Self { by_vector }
    }

    /// Every other name sharing `vector`, excluding `name` itself.
    ///
    /// Empty set when no sibling exists; never an error.
    pub fn equivalents_of(&self, name: &str, vector: DimensionVector) -> BTreeSet<String> {
        match self.by_vector.get(&vector) {
            Some(names) => names.iter().filter(|n| *n != name).cloned().collect(),
            None => BTreeSet::new(),
        }
    }

    /// Number of distinct equivalence classes.
    pub fn class_count(&self) -> usize {
        self.by_vector.len()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn standard_index() -> (DimensionTable, EquivalenceIndex) {
        let table = DimensionTable::standard();
        let index = EquivalenceIndex::build(&table);
        (table, index)
    }

    #[test]
    fn test_speed_velocity_are_siblings() {
        let (table, index) = standard_index();
        let vector = table.lookup("speed").unwrap();
        let siblings = index.equivalents_of("speed", vector);
        assert_eq!(siblings, BTreeSet::from(["velocity".to_string()]));
    }

    #[test]
    fn test_standard_table_class_count() {
        // 12 entries, speed/velocity collapse into one class
        let (_, index) = standard_index();
        assert_eq!(index.class_count(), 11);
    }

    #[test]
    fn test_energy_has_no_siblings() {
        // power is ML^2T^-3, not ML^2T^-2, so energy stands alone
        let (table, index) = standard_index();
        let vector = table.lookup("energy").unwrap();
        assert!(index.equivalents_of("energy", vector).is_empty());
    }

    #[test]
    fn test_queried_name_is_excluded() {
        let (table, index) = standard_index();
        for entry in table.entries() {
            let siblings = index.equivalents_of(&entry.name, entry.vector);
            assert!(!siblings.contains(&entry.name), "{} listed itself", entry.name);
        }
    }

    #[test]
    fn test_unknown_vector_yields_empty_set() {
        let (_, index) = standard_index();
        let absent = DimensionVector::new(7, 7, 7);
        assert!(index.equivalents_of("anything", absent).is_empty());
    }

    #[test]
    fn test_grouping_uses_vector_not_formatted_string() {
        // Two entries whose vectors are equal must group together regardless
        // of how any caller might have formatted them.
        let table = DimensionTable::from_entries([
            ("speed", DimensionVector::new(0, 1, -1)),
            ("velocity", DimensionVector::new(0, 1, -1)),
            ("pace", DimensionVector::new(0, 1, -1)),
        ]);
        let index = EquivalenceIndex::build(&table);
        let siblings = index.equivalents_of("pace", DimensionVector::new(0, 1, -1));
        assert_eq!(
            siblings,
            BTreeSet::from(["speed".to_string(), "velocity".to_string()])
        );
    }

    fn arb_vector() -> impl Strategy<Value = DimensionVector> {
        (-3i32..=3, -3i32..=3, -3i32..=3).prop_map(|(m, l, t)| DimensionVector::new(m, l, t))
    }

    proptest! {
        /// Equivalence classes partition the table: every entry lands in
        /// exactly one bucket, and bucket sizes sum to the table size.
        #[test]
        fn prop_classes_partition_table(vectors in proptest::collection::vec(arb_vector(), 1..20)) {
            let entries: Vec<(String, DimensionVector)> = vectors
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("q{}", i), *v))
                .collect();
            let table = DimensionTable::from_entries(entries);
            let index = EquivalenceIndex::build(&table);

            let mut counted = 0;
            for entry in table.entries() {
                counted += index.equivalents_of(&entry.name, entry.vector).len() + 1;
            }
            // Each entry counts itself once plus its siblings; summing over a
            // class of size k gives k^2, so equality with a direct recount
            // checks membership consistency.
            let mut class_sizes: HashMap<DimensionVector, usize> = HashMap::new();
            for entry in table.entries() {
                *class_sizes.entry(entry.vector).or_default() += 1;
            }
            let expected: usize = class_sizes.values().map(|k| k * k).sum();
            prop_assert_eq!(counted, expected);
        }

        /// Shared-vector grouping is symmetric: if A lists B, B lists A.
        #[test]
        fn prop_sibling_relation_symmetric(vectors in proptest::collection::vec(arb_vector(), 1..20)) {
            let entries: Vec<(String, DimensionVector)> = vectors
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("q{}", i), *v))
                .collect();
            let table = DimensionTable::from_entries(entries);
            let index = EquivalenceIndex::build(&table);

            for a in table.entries() {
                for b_name in index.equivalents_of(&a.name, a.vector) {
                    let b_vector = table.lookup(&b_name).unwrap();
                    prop_assert_eq!(a.vector, b_vector);
                    prop_assert!(index.equivalents_of(&b_name, b_vector).contains(&a.name));
                }
            }
        }
    }
}
