//! Legacy affix-based substitution
//!
//! First-generation rule kept as a fallback: it mangles a verbal affix
//! rather than modeling one specific confusion. Given a token carrying a
//! known affix, it either drops the affix, reduplicates the root, swaps in
//! a wrong "na-" prefix, or over-extends the word with "-an". Not part of
//! the default weight table.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::pick_target;
use crate::injection::SentenceBuffer;

/// Generator vocabulary from the original corpus tooling, longest first so
/// "mag..." is not read as "ma" + "g...".
pub const DEFAULT_AFFIXES: [&str; 7] = ["nag", "mag", "um", "in", "ka", "pa", "ma"];

fn matched_affix<'a>(token: &str, affixes: &'a [String]) -> Option<&'a str> {
    affixes.iter().map(String::as_str).find(|a| {
        token
            .get(..a.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(a))
    })
}

/// A bare affix ("pa", "ma" as standalone words) has an empty root and no
/// usable transform.
fn is_eligible(token: &str, affixes: &[String]) -> bool {
    matched_affix(token, affixes).is_some_and(|a| token.len() > a.len())
}

pub fn apply_with<R: Rng>(
    buffer: &mut SentenceBuffer,
    rng: &mut R,
    affixes: &[String],
) -> bool {
    match pick_target(buffer, rng, |t| is_eligible(t, affixes)) {
        Some(index) => {
            let token = buffer.token(index);
            let Some(affix) = matched_affix(token, affixes) else {
                return false;
            };
            let root = &token[affix.len()..];
            let options = [
                root.to_string(),
                format!("{}{}", root, root),
                format!("na{}", root),
                format!("{}{}an", affix, root),
            ];
            let Some(new_token) = options.choose(rng) else {
                return false;
            };
            buffer.replace(index, new_token.clone());
            true
        }
        None => false,
    }
}

pub fn apply<R: Rng>(buffer: &mut SentenceBuffer, rng: &mut R) -> bool {
    let defaults: Vec<String> = DEFAULT_AFFIXES.iter().map(|s| s.to_string()).collect();
    apply_with(buffer, rng, &defaults)
}
