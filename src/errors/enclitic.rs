//! Enclitic d/r alternation (din/rin, daw/raw, doon/roon)
//!
//! The d-forms follow consonant-final hosts and the r-forms vowel-final
//! hosts; picking the wrong initial is a classic learner error. The rule
//! flips the leading consonant of an eligible particle.

use rand::Rng;

use crate::errors::pick_target;
use crate::injection::SentenceBuffer;

const PARTICLES: [&str; 6] = ["din", "rin", "daw", "raw", "doon", "roon"];

fn is_eligible(token: &str) -> bool {
    PARTICLES.iter().any(|p| token.eq_ignore_ascii_case(p))
}

fn flipped(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let flipped_first = match first {
                'd' => 'r',
                'D' => 'R',
                'r' => 'd',
                'R' => 'D',
                other => other,
            };
            std::iter::once(flipped_first).chain(chars).collect()
        }
        None => String::new(),
    }
}

pub fn apply<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) -> bool {
    match pick_target(buffer, rng, is_eligible) {
        Some(index) => {
            let new_token = flipped(buffer.token(index));
            buffer.replace(index, new_token);
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
    fn test_flips_leading_consonant() {
        assert_eq!(flipped("din"), "rin");
        assert_eq!(flipped("rin"), "din");
        assert_eq!(flipped("Daw"), "Raw");
        assert_eq!(flipped("roon"), "doon");
    }

    #[test]
    fn test_applies_to_particle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut buf = buffer(&["pupunta", "din", "ako"]);

        assert!(apply(&mut buf, &mut rng));
        assert_eq!(buf.tokens(), &["pupunta", "rin", "ako"]);
    }

    #[test]
    fn test_ignores_non_particles() {
        let mut rng = StdRng::seed_from_u64(3);
        // "dinig" starts with "din" but is not the bare particle.
        let mut buf = buffer(&["dinig", "ako"]);

        assert!(!apply(&mut buf, &mut rng));
        assert_eq!(buf.tokens(), &["dinig", "ako"]);
    }
}
