/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod batch_request;
mod batch_response;
mod run_mode;

pub use batch_request::{BatchRequest, GlobalBatchRequest};
pub use batch_response::{BatchResponse, GlobalBatchResponse};
pub use run_mode::RunMode;
