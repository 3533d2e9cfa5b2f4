//! Fuzz target comparing [`ContactDirectory`] against the reference model
//!
//! # Invariants
//!
//! - Every operation returns the same result in model and directory
//! - Listing and tally are identical after every operation
//! - Listing is sorted by name with duplicates in insertion order

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolodex_core::ContactDirectory;
use rolodex_harness::{ModelDirectory, Operation, phone};

fuzz_target!(|ops: Vec<Operation>| {
    let mut model = ModelDirectory::new();
    let mut directory = ContactDirectory::new();

    for op in &ops {
        let model_ok = model.apply(op).is_ok();

        let real_ok = match op {
            Operation::Add { name, phone1, phone2 } => {
                directory.add(name.to_name(), phone(*phone1), phone(*phone2));
                true
            },
            Operation::Edit { name, phone1, phone2 } => {
                directory.edit(&name.to_name(), phone(*phone1), phone(*phone2)).is_ok()
            },
            Operation::Delete { name } => directory.delete(&name.to_name()).is_ok(),
            Operation::Search { name } => directory.search(&name.to_name()).is_some(),
        };

        assert_eq!(model_ok, real_ok, "result divergence at {op:?}");

        let state = model.observable_state();
        let listed: Vec<_> = directory.list_ordered().collect();
        assert_eq!(state.listing.len(), listed.len());
        for (expected, actual) in state.listing.iter().zip(&listed) {
            assert_eq!(expected.name, actual.name);
            assert_eq!(expected.phone1, actual.phone1);
            assert_eq!(expected.phone2, actual.phone2);
        }

        let tally: Vec<_> = directory.count_per_initial_letter().iter().collect();
        assert_eq!(state.tally, tally);
    }
});
