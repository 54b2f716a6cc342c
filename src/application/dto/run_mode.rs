/// How a batch lays out its work, selected by name on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// One scratch checkout and one result directory per repository (default)
    #[default]
    Individual,
    /// All repositories cloned into one workspace, analyzed and scanned once
    Global,
}

impl std::str::FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "individual" | "per-repo" => Ok(RunMode::Individual),
            "global" => Ok(RunMode::Global),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'individual' or 'global'",
                s
            )),
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Individual => write!(f, "individual"),
            RunMode::Global => write!(f, "global"),
        }
    }
}
