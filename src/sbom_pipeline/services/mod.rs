mod dependency_counter;

pub use dependency_counter::DependencyCounter;
