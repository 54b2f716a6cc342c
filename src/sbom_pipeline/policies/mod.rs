mod skip_existing;

pub use skip_existing::SkipExistingPolicy;
