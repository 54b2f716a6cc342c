/// Domain layer - Pure pipeline logic with no I/O
///
/// Contains the repository and result models, the dependency counting
/// service and the skip-existing policy.
pub mod domain;
pub mod policies;
pub mod services;
