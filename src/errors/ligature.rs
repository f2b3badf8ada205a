//! Ligature confusion (na/ng)
//!
//! The linker "na" follows consonant-final words while "ng" attaches to
//! vowel-final ones; learners routinely mix the two forms. The rule swaps an
//! isolated "na" for "ng" and vice versa.

use rand::Rng;

use crate::errors::pick_target;
use crate::injection::SentenceBuffer;

fn is_eligible(token: &str) -> bool {
    token.eq_ignore_ascii_case("na") || token.eq_ignore_ascii_case("ng")
}

fn swapped(token: &str) -> String {
    let lower = token.to_lowercase();
    let replacement = if lower == "na" { "ng" } else { "na" };
    match_capitalization(token, replacement)
}

/// Copies an upper-case first letter from `original` onto `replacement`.
fn match_capitalization(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(|c| c.is_uppercase()) {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}

pub fn apply<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) -> bool {
    match pick_target(buffer, rng, is_eligible) {
        Some(index) => {
            let new_token = swapped(buffer.token(index));
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
    fn test_swaps_na_for_ng() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut buf = buffer(&["maganda", "na", "bahay"]);

        assert!(apply(&mut buf, &mut rng));
        assert_eq!(buf.tokens(), &["maganda", "ng", "bahay"]);
        assert!(buf.is_modified(1));
    }

    #[test]
    fn test_preserves_capitalization() {
        assert_eq!(swapped("Na"), "Ng");
        assert_eq!(swapped("Ng"), "Na");
        assert_eq!(swapped("ng"), "na");
    }

    #[test]
    fn test_fails_without_target() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut buf = buffer(&["maganda", "bahay"]);

        assert!(!apply(&mut buf, &mut rng));
        assert_eq!(buf.tokens(), &["maganda", "bahay"]);
    }

    #[test]
    fn test_skips_already_modified_token() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut buf = buffer(&["maganda", "na", "bahay"]);
        buf.replace(1, "na".to_string());

        assert!(!apply(&mut buf, &mut rng));
    }
}
