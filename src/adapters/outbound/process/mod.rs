/// Process adapters wrapping the external command-line tools
mod command_runner;
mod git_fetcher;
mod ort_cli;
mod scancode_cli;

pub use command_runner::ToolInvocation;
pub use git_fetcher::GitFetcher;
pub use ort_cli::OrtCli;
pub use scancode_cli::{ScanCodeCli, DEFAULT_SCANCODE_PROCESSES};
