/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the CLI calls the use cases directly.
pub mod outbound;
