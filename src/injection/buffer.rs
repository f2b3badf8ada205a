//! Sentence buffer: token sequence plus modified-index bookkeeping
//!
//! Every structural edit during error injection goes through this type so
//! that the modified-index set is rebased in exactly one place. Handlers and
//! the injector never shift indices themselves.

use std::collections::BTreeSet;

/// Token sequence under mutation, together with the set of positions already
/// altered by a substitution rule in the current injection call.
///
/// Invariant: every index in the modified set is `< self.len()` and refers to
/// a token no substitution rule may target again.
///
/// Index rebasing convention: an insertion at position `i` shifts every
/// recorded index **at or after** `i` by +1. Deletions shift indices strictly
/// greater than the removed position by -1.
#[derive(Debug, Clone)]
pub struct SentenceBuffer {
    tokens: Vec<String>,
    modified: BTreeSet<usize>,
}

impl SentenceBuffer {
    /// Takes ownership of a private copy of the caller's tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            modified: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    pub fn token(&self, index: usize) -> &str {
        &self.tokens[index]
    }

    pub fn is_modified(&self, index: usize) -> bool {
        self.modified.contains(&index)
    }

    /// Positions still available to substitution rules, in order.
    pub fn unmodified_indices(&self) -> Vec<usize> {
        (0..self.tokens.len())
            .filter(|i| !self.modified.contains(i))
            .collect()
    }

    #[cfg(test)]
    pub fn modified_indices(&self) -> Vec<usize> {
        self.modified.iter().copied().collect()
    }

    /// Replaces the token at `index` with `text` and marks the position as
    /// modified. 1-for-1 edit: sequence length and other indices untouched.
    pub fn replace(&mut self, index: usize, text: String) {
        self.tokens[index] = text;
        self.modified.insert(index);
    }

    /// Inserts `token` at `index` (which may equal `len()` to append).
    /// Recorded indices at or after `index` shift by +1.
    pub fn insert_at(&mut self, index: usize, token: String) {
        self.tokens.insert(index, token);
        self.modified = self
            .modified
            .iter()
            .map(|&i| if i >= index { i + 1 } else { i })
            .collect();
    }

    /// Removes and returns the token at `index`. The position itself is
    /// dropped from the modified set; recorded indices greater than `index`
    /// shift by -1.
    pub fn delete_at(&mut self, index: usize) -> String {
        let removed = self.tokens.remove(index);
        self.modified = self
            .modified
            .iter()
            .filter(|&&i| i != index)
            .map(|&i| if i > index { i - 1 } else { i })
            .collect();
        removed
    }

    /// Exchanges the tokens at `index` and `index + 1`. Membership of the two
    /// positions in the modified set swaps with them; all other recorded
    /// indices are untouched.
    pub fn swap_adjacent(&mut self, index: usize) {
        self.tokens.swap(index, index + 1);
        let left = self.modified.contains(&index);
        let right = self.modified.contains(&(index + 1));
        if left != right {
            if left {
                self.modified.remove(&index);
                self.modified.insert(index + 1);
            } else {
                self.modified.remove(&(index + 1));
                self.modified.insert(index);
            }
        }
    }

    /// Inserts a copy of the token at `index` immediately before it and marks
    /// both the copy and the original (now at `index + 1`) as modified.
    /// Previously recorded indices at or after `index` shift by +1 first.
    pub fn duplicate_at(&mut self, index: usize) {
        let copy = self.tokens[index].clone();
        self.insert_at(index, copy);
        self.modified.insert(index);
        self.modified.insert(index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(words: &[&str]) -> SentenceBuffer {
        SentenceBuffer::new(words.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_replace_marks_position() {
        let mut buf = buffer(&["ang", "bata"]);
        buf.replace(1, "mga".to_string());

        assert_eq!(buf.token(1), "mga");
        assert!(buf.is_modified(1));
        assert!(!buf.is_modified(0));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_insert_shifts_at_or_after() {
        let mut buf = buffer(&["a", "b", "c"]);
        buf.replace(1, "B".to_string());
        buf.replace(2, "C".to_string());

        // Insertion at index 1: both recorded indices (1 and 2) are at or
        // after the insertion point and must shift.
        buf.insert_at(1, "x".to_string());

        assert_eq!(buf.tokens(), &["a", "x", "B", "C"]);
        assert_eq!(buf.modified_indices(), vec![2, 3]);
    }

    #[test]
    fn test_insert_before_recorded_index_leaves_it() {
        let mut buf = buffer(&["a", "b"]);
        buf.replace(0, "A".to_string());
        buf.insert_at(1, "x".to_string());

        assert_eq!(buf.modified_indices(), vec![0]);
    }

    #[test]
    fn test_delete_drops_and_shifts_down() {
        let mut buf = buffer(&["a", "b", "c", "d"]);
        buf.replace(1, "B".to_string());
        buf.replace(3, "D".to_string());

        let removed = buf.delete_at(1);

        assert_eq!(removed, "B");
        assert_eq!(buf.tokens(), &["a", "c", "D"]);
        assert_eq!(buf.modified_indices(), vec![2]);
    }

    #[test]
    fn test_swap_relabels_membership() {
        let mut buf = buffer(&["a", "b", "c"]);
        buf.replace(1, "B".to_string());

        buf.swap_adjacent(1);
        assert_eq!(buf.tokens(), &["a", "c", "B"]);
        assert_eq!(buf.modified_indices(), vec![2]);

        // Swapping a pair where both sides are modified changes nothing.
        buf.replace(1, "C".to_string());
        buf.swap_adjacent(1);
        assert_eq!(buf.modified_indices(), vec![1, 2]);
    }

    #[test]
    fn test_duplicate_lengthens_and_marks_both() {
        let mut buf = buffer(&["a", "b", "c"]);
        buf.replace(2, "C".to_string());

        buf.duplicate_at(1);

        assert_eq!(buf.tokens(), &["a", "b", "b", "C"]);
        assert_eq!(buf.modified_indices(), vec![1, 2, 3]);
    }

    #[test]
    fn test_unmodified_indices() {
        let mut buf = buffer(&["a", "b", "c"]);
        assert_eq!(buf.unmodified_indices(), vec![0, 1, 2]);

        buf.replace(1, "B".to_string());
        assert_eq!(buf.unmodified_indices(), vec![0, 2]);
    }
}
