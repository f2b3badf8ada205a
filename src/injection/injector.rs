//! Error injector: the orchestration loop over structural operations

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::injection::{ErrorType, Operation, OperationPool, Registry, SentenceBuffer};

/// Outcome of one injection call: the mutated tokens plus a structured trace
/// of what was done. The trace is the artifact tests assert on; nothing is
/// printed.
#[derive(Debug, Clone)]
pub struct InjectionResult {
    pub tokens: Vec<String>,
    pub operations: Vec<Operation>,
    pub error_types: Vec<ErrorType>,
}

impl InjectionResult {
    /// Human-readable trace, e.g. `operations: insert, substitute; errors:
    /// ng_nang`. An empty error list renders as `-`.
    pub fn trace(&self) -> String {
        let operations: Vec<&str> = self.operations.iter().map(|op| op.name()).collect();
        let error_types: Vec<&str> = self.error_types.iter().map(|t| t.name()).collect();
        let error_part = if error_types.is_empty() {
            "-".to_string()
        } else {
            error_types.join(", ")
        };
        format!(
            "operations: {}; errors: {}",
            operations.join(", "),
            error_part
        )
    }
}

/// Applies a random number of distinct structural operations to a sentence.
///
/// Each call draws a budget `k` in `[1, max_errors]`, then runs `k`
/// iterations, each consuming one operation kind from a no-repeat pool. An
/// operation that finds nothing to edit (substitution with no eligible
/// target, swap on an all-identical sequence) still consumes its slot and is
/// still logged.
pub struct Injector {
    registry: Registry,
    function_words: Vec<String>,
    max_errors: usize,
}

impl Injector {
    pub fn new(config: &Config) -> Result<Self, String> {
        if config.max_errors < 1 || config.max_errors > Operation::ALL.len() {
            return Err(format!(
                "max_errors must be between 1 and {}, got {}",
                Operation::ALL.len(),
                config.max_errors
            ));
        }
        if config.function_words.is_empty() {
            return Err("function-word vocabulary is empty".to_string());
        }
        let registry =
            Registry::with_named_weights(&config.weights)?.with_affixes(&config.affixes)?;
        Ok(Self {
            registry,
            function_words: config.function_words.clone(),
            max_errors: config.max_errors,
        })
    }

    /// Builds an injector with an explicit registry, for callers that
    /// assemble the weight table themselves.
    pub fn with_registry(config: &Config, registry: Registry) -> Result<Self, String> {
        let mut injector = Self::new(config)?;
        injector.registry = registry;
        Ok(injector)
    }

    /// Corrupts a private copy of `tokens`, drawing the error budget in
    /// `[1, max_errors]`. The caller's slice is never mutated.
    pub fn inject<R: Rng>(&self, rng: &mut R, tokens: &[String]) -> InjectionResult {
        let budget = rng.gen_range(1..=self.max_errors);
        self.inject_with_budget(rng, tokens, budget)
    }

    /// Same as [`inject`](Self::inject) with an explicit budget. A budget
    /// beyond the pool size stops early when the pool runs out.
    pub fn inject_with_budget<R: Rng>(
        &self,
        rng: &mut R,
        tokens: &[String],
        budget: usize,
    ) -> InjectionResult {
        let mut buffer = SentenceBuffer::new(tokens.to_vec());
        let mut pool = OperationPool::new();
        let mut operations = Vec::new();
        let mut error_types = Vec::new();

        for _ in 0..budget {
            // Exhaustion is an early stop, not an error; unreachable while
            // max_errors is validated against the pool size.
            let Some(operation) = pool.draw(rng) else {
                break;
            };
            match operation {
                Operation::Insert => self.insert(&mut buffer, rng),
                Operation::Delete => Self::delete(&mut buffer, rng),
                Operation::Swap => Self::swap(&mut buffer, rng),
                Operation::Substitute => {
                    if let Some(error_type) = self.registry.dispatch(&mut buffer, rng) {
                        error_types.push(error_type);
                    }
                }
            }
            operations.push(operation);
        }

        InjectionResult {
            tokens: buffer.into_tokens(),
            operations,
            error_types,
        }
    }

    /// Inserts a random function word at a random position (possibly the
    /// end).
    fn insert<R: Rng>(&self, buffer: &mut SentenceBuffer, rng: &mut R) {
        let Some(word) = self.function_words.choose(rng) else {
            return;
        };
        let index = rng.gen_range(0..=buffer.len());
        buffer.insert_at(index, word.clone());
    }

    fn delete<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) {
        if buffer.is_empty() {
            return;
        }
        let index = rng.gen_range(0..buffer.len());
        buffer.delete_at(index);
    }

    /// Exchanges one adjacent pair of differing tokens. Enumerating the
    /// candidate pairs up front keeps this bounded even on an all-identical
    /// sequence, where the operation degenerates to a no-op.
    fn swap<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) {
        if buffer.len() < 2 {
            return;
        }
        let candidates: Vec<usize> = (0..buffer.len() - 1)
            .filter(|&i| buffer.token(i) != buffer.token(i + 1))
            .collect();
        if let Some(&index) = candidates.choose(rng) {
            buffer.swap_adjacent(index);
        }
    }
}
