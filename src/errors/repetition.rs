//! Accidental word repetition
//!
//! Duplicates one token in place ("ang ang bata"). Any unmodified token is
//! eligible; this is the one rule that lengthens the sequence.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::injection::SentenceBuffer;

pub fn apply<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) -> bool {
    let candidates = buffer.unmodified_indices();
    match candidates.choose(rng) {
        Some(&index) => {
            buffer.duplicate_at(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn buffer(words: &[&str]) -> SentenceBuffer {
        SentenceBuffer::new(words.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_lengthens_by_one_with_identical_copy() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut buf = buffer(&["ang", "bata", "ay", "tumakbo"]);

            assert!(apply(&mut buf, &mut rng));
            assert_eq!(buf.len(), 5);

            let duplicated = (0..4).find(|&i| buf.token(i) == buf.token(i + 1));
            let index = duplicated.expect("one adjacent pair must be identical");
            assert!(buf.is_modified(index));
            assert!(buf.is_modified(index + 1));
        }
    }

    #[test]
    fn test_fails_when_everything_is_modified() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut buf = buffer(&["isa", "dalawa"]);
        buf.replace(0, "isa".to_string());
        buf.replace(1, "dalawa".to_string());

        assert!(!apply(&mut buf, &mut rng));
        assert_eq!(buf.len(), 2);
    }
}
