//! RNG seed derivation utilities for deterministic table behavior.
//!
//! One base seed (from a test, the simulator, or a registry) yields a distinct
//! but reproducible seed for every table.

/// Derive the shuffle seed for a table.
///
/// Same base + table id = same seed; different tables get different seeds.
pub fn derive_table_seed(base_seed: u64, table_id: u64) -> u64 {
    // SplitMix64 finalizer over the combined input
    let mut z = base_seed
        .wrapping_add(table_id.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(1);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
