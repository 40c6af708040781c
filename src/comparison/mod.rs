//! Comparison domain: the appliance catalog, the custom-benchmark overlay and
//! the filter/sort engine that derives the visible sequence from them.
pub mod domain;
pub mod policies;
pub mod services;
