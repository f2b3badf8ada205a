//! Dropped hyphens (pang-araw-araw → pangaraw araw-less form)
//!
//! Reduplicated and affixed compounds carry hyphens that learners often
//! omit. The rule strips every hyphen from one hyphenated token.

use rand::Rng;

use crate::errors::pick_target;
use crate::injection::SentenceBuffer;

fn is_eligible(token: &str) -> bool {
    token.contains('-')
}

pub fn apply<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) -> bool {
    match pick_target(buffer, rng, is_eligible) {
        Some(index) => {
            let new_token = buffer.token(index).replace('-', "");
            buffer.replace(index, new_token);
            true
        }
        None => false,
    }
}
