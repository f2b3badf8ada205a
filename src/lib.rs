//! mali - artificial grammatical error generation for Filipino
//!
//! Synthesizes (incorrect, correct) sentence pairs for training
//! grammatical-error-correction models, by injecting structural edits and
//! linguistically motivated substitutions into clean sentences.

pub mod config;
pub mod errors;
pub mod generator;
pub mod injection;
pub mod tokenizer;

pub use config::Config;
pub use generator::{Generator, SentencePair};
pub use injection::{ErrorType, InjectionResult, Injector, Operation, Registry, SentenceBuffer};
