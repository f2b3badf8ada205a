//! Error-injection engine
//!
//! The core of the generator: a no-repeat pool of structural operations, a
//! weighted registry of substitution rules, and a sentence buffer that keeps
//! the modified-index bookkeeping consistent while the token sequence
//! mutates underneath it.

pub mod buffer;
pub mod injector;
pub mod operation;
pub mod registry;

pub use buffer::SentenceBuffer;
pub use injector::{InjectionResult, Injector};
pub use operation::{Operation, OperationPool};
pub use registry::{ErrorType, Registry};
