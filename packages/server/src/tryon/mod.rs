pub mod catalog;
pub mod mock;
pub mod orchestrator;
pub mod prompt;
pub mod style;

pub use orchestrator::{GenerationSource, Generators, Orchestrator, TryOnError, TryOnOutcome};
