/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the file system, the console and
/// the external git/ORT/ScanCode processes.
pub mod outbound;
