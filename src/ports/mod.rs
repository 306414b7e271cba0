/// Ports module defining interfaces for hexagonal architecture
///
/// Detection is driven directly through the use case, so only outbound
/// (driven) ports are defined: the infrastructure the core talks to.
pub mod outbound;
