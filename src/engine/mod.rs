// ============================================================================
// Engine Module
// Contains the allocation algorithm over money values
// ============================================================================

mod allocation;

pub use allocation::{allocate, allocate_evenly};
