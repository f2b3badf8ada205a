//! Structural operations and the no-repeat operation pool

use rand::seq::SliceRandom;
use rand::Rng;

/// Structural edit applied to a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Delete,
    Substitute,
    Swap,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Insert,
        Operation::Delete,
        Operation::Substitute,
        Operation::Swap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Delete => "delete",
            Operation::Substitute => "substitute",
            Operation::Swap => "swap",
        }
    }
}

/// Samples operation kinds without replacement. Within one injection call
/// each kind is used at most once; `draw` returns `None` once all four kinds
/// have been consumed.
#[derive(Debug)]
pub struct OperationPool {
    remaining: Vec<Operation>,
}

impl OperationPool {
    pub fn new() -> Self {
        Self {
            remaining: Operation::ALL.to_vec(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Removes and returns one of the unused kinds, uniformly at random.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Operation> {
        let choice = self.remaining.choose(rng).copied()?;
        self.remaining.retain(|op| *op != choice);
        Some(choice)
    }
}

impl Default for OperationPool {
    fn default() -> Self {
        Self::new()
    }
}
