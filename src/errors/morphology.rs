//! Instrumental prefix confusion (pang-/pam-/pan-)
//!
//! The prefix assimilates to the first sound of the root (pang+bahay →
//! pambahay, pang+sulat → pansulat); using the wrong variant is a frequent
//! morphological error. The rule rewrites a matching prefix as one of the
//! other two variants, keeping the rest of the word.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::pick_target;
use crate::injection::SentenceBuffer;

/// Longest form first so "pang..." is never read as "pan" + "g...".
const PREFIXES: [&str; 3] = ["pang", "pam", "pan"];

fn matched_prefix(token: &str) -> Option<&'static str> {
    PREFIXES.iter().copied().find(|p| {
        token
            .get(..p.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(p))
    })
}

pub fn apply<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) -> bool {
    match pick_target(buffer, rng, |t| matched_prefix(t).is_some()) {
        Some(index) => {
            let token = buffer.token(index);
            // Eligibility guaranteed a match.
            let Some(prefix) = matched_prefix(token) else {
                return false;
            };
            let alternatives: Vec<&str> =
                PREFIXES.iter().copied().filter(|p| *p != prefix).collect();
            let Some(replacement) = alternatives.choose(rng) else {
                return false;
            };
            let new_token = format!("{}{}", replacement, &token[prefix.len()..]);
            buffer.replace(index, new_token);
            true
        }
        None => false,
    }
}
