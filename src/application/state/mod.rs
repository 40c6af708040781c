//! Explicit, caller-owned UI state and the user actions that mutate it
mod benchmark_editor;
mod comparator_state;

pub use benchmark_editor::{parse_benchmark_input, BenchmarkEditor};
pub use comparator_state::ComparatorState;
