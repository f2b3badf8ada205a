//! ng/nang confusion
//!
//! The most famous Filipino spelling error: the genitive marker "ng" versus
//! the adverbial linker "nang". Unlike the ligature rule this one matches
//! the exact lowercase forms only.

use rand::Rng;

use crate::errors::pick_target;
use crate::injection::SentenceBuffer;

fn is_eligible(token: &str) -> bool {
    token == "ng" || token == "nang"
}

pub fn apply<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) -> bool {
    match pick_target(buffer, rng, is_eligible) {
        Some(index) => {
            let new_token = if buffer.token(index) == "ng" {
                "nang".to_string()
            } else {
                "ng".to_string()
            };
            buffer.replace(index, new_token);
            true
        }
        None => false,
    }
}
