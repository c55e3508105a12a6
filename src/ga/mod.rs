pub mod partition;
pub mod recommend;
pub mod runner;

pub use partition::Assignment;
pub use recommend::TeamChromosome;
pub use runner::ProgressCallback;
