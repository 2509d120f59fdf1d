pub mod bpm;
pub mod catalog;
pub mod coherence;
pub mod config;
pub mod formatter;
pub mod generator;
pub mod genre;
pub mod instruments;
pub mod matching;
pub mod remix;
pub mod rng;
pub mod style;
pub mod trace;
pub mod types;

pub use catalog::GenreCatalog;
pub use generator::{GeneratedPrompt, PromptGenerator, PromptRequest};
pub use remix::{FieldName, RemixOutcome};
pub use rng::{RandomStream, ScriptedStream, SeededStream};
pub use trace::{LogTrace, NullTrace, TraceEvent, TraceSink};
