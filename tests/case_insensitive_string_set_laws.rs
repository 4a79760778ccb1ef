//! Property-based tests for CaseInsensitiveStringSet.
//!
//! These tests verify the invariants the set keeps across arbitrary
//! sequences of operations: case-insensitive membership, the load-factor
//! bound, content preservation across rehashing, size accounting and copy
//! independence.

use caseless_set::{CaseInsensitiveStringSet, SetConfig};
use proptest::prelude::*;

fn toggle_case(string: &str) -> String {
    string
        .chars()
        .map(|character| {
            if character.is_ascii_lowercase() {
                character.to_ascii_uppercase()
            } else {
                character.to_ascii_lowercase()
            }
        })
        .collect()
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{0,12}"
}

fn load_factor_bound() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.1), Just(0.75), Just(1.0), Just(3.0), Just(25.0), 0.05f64..50.0]
}

#[derive(Clone, Debug)]
enum Operation {
    Insert(String),
    Remove(String),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => word().prop_map(Operation::Insert),
        1 => word().prop_map(Operation::Remove),
    ]
}

// =============================================================================
// Case-Insensitivity Law
// Description: A toggled-case variant of an inserted string is contained,
// and inserting it again fails
// =============================================================================

proptest! {
    #[test]
    fn prop_case_insensitivity_law(
        elements in prop::collection::vec(word(), 0..50),
        element in word()
    ) {
        let mut set: CaseInsensitiveStringSet = elements.into_iter().collect();
        set.insert(element.as_str());
        let toggled = toggle_case(&element);

        prop_assert!(set.contains(&toggled));
        prop_assert!(!set.insert(toggled));
        prop_assert!(!set.insert(element.to_uppercase()));
    }
}

// =============================================================================
// Load-Factor Bound Law
// Description: After every successful insertion, size / bucket_count <= max
// =============================================================================

proptest! {
    #[test]
    fn prop_load_factor_bound_law(
        elements in prop::collection::vec(word(), 0..200),
        max_load_factor in load_factor_bound()
    ) {
        let mut set = CaseInsensitiveStringSet::with_max_load_factor(max_load_factor).unwrap();
        for element in elements {
            if set.insert(element) {
                prop_assert!(set.load_factor() <= max_load_factor);
                prop_assert!(set.bucket_count().is_power_of_two());
            }
        }
    }
}

// =============================================================================
// Rehash Preservation Law
// Description: Every element inserted before a resize is still found after it
// =============================================================================

proptest! {
    #[test]
    fn prop_rehash_preserves_contents_law(
        elements in prop::collection::vec(word(), 1..200),
        max_load_factor in load_factor_bound()
    ) {
        let mut set = CaseInsensitiveStringSet::with_max_load_factor(max_load_factor).unwrap();
        let mut inserted: Vec<String> = Vec::new();
        for element in elements {
            let bucket_count = set.bucket_count();
            if set.insert(element.as_str()) {
                inserted.push(element);
            }
            if set.bucket_count() != bucket_count {
                for previous in &inserted {
                    prop_assert!(set.contains(previous));
                }
            }
        }
        for previous in &inserted {
            prop_assert!(set.contains(&toggle_case(previous)));
        }
    }
}

// =============================================================================
// Size Accounting Law
// Description: len == successful inserts - successful removes
// =============================================================================

proptest! {
    #[test]
    fn prop_size_accounting_law(operations in prop::collection::vec(operation(), 0..200)) {
        let mut set = CaseInsensitiveStringSet::new();
        let mut expected: usize = 0;
        for operation in operations {
            match operation {
                Operation::Insert(element) => {
                    if set.insert(element) {
                        expected += 1;
                    }
                }
                Operation::Remove(element) => {
                    if set.remove(&element) {
                        expected -= 1;
                    }
                }
            }
            prop_assert_eq!(set.len(), expected);
            prop_assert_eq!(set.is_empty(), expected == 0);
        }
    }
}

// =============================================================================
// Remove-Contains Law
// Description: A removed string (in any case) is never contained afterwards
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(
        elements in prop::collection::vec(word(), 0..50),
        element in word()
    ) {
        let mut set: CaseInsensitiveStringSet = elements.into_iter().collect();
        set.remove(&toggle_case(&element));

        prop_assert!(!set.contains(&element));
    }
}

// =============================================================================
// Copy Independence Law
// Description: Mutating a clone never changes the original
// =============================================================================

proptest! {
    #[test]
    fn prop_copy_independence_law(
        elements in prop::collection::vec(word(), 0..50),
        operations in prop::collection::vec(operation(), 0..50),
        clear_copy: bool
    ) {
        let original: CaseInsensitiveStringSet = elements.iter().map(String::as_str).collect();
        let snapshot: Vec<bool> = elements.iter().map(|element| original.contains(element)).collect();
        let original_len = original.len();

        let mut copy = original.clone();
        for operation in operations {
            match operation {
                Operation::Insert(element) => {
                    copy.insert(element);
                }
                Operation::Remove(element) => {
                    copy.remove(&element);
                }
            }
        }
        if clear_copy {
            copy.clear();
        }

        prop_assert_eq!(original.len(), original_len);
        for (element, was_contained) in elements.iter().zip(snapshot) {
            prop_assert_eq!(original.contains(element), was_contained);
        }
    }
}

// =============================================================================
// Construction Validation Law
// Description: Non-positive thresholds are rejected, positive ones accepted
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_validation_law(value in -100.0f64..100.0) {
        let result = SetConfig::new(value);
        prop_assert_eq!(result.is_ok(), value > 0.0);
    }
}

// =============================================================================
// Clear Law
// Description: Clear empties the set and keeps its bucket count
// =============================================================================

proptest! {
    #[test]
    fn prop_clear_law(elements in prop::collection::vec(word(), 0..200)) {
        let mut set: CaseInsensitiveStringSet = elements.iter().map(String::as_str).collect();
        let bucket_count = set.bucket_count();

        set.clear();

        prop_assert!(set.is_empty());
        prop_assert_eq!(set.bucket_count(), bucket_count);
        for element in &elements {
            prop_assert!(!set.contains(element));
        }
    }
}
