/// Use cases module containing application business logic orchestration
mod run_global_batch;
mod run_individual_batch;
mod stages;

pub use run_global_batch::RunGlobalBatchUseCase;
pub use run_individual_batch::RunIndividualBatchUseCase;
