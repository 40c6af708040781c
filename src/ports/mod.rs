/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports only: the comparison core is driven directly
/// through `ComparatorState` and the use cases.
pub mod outbound;
