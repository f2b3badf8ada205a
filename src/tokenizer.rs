//! Tokenize / detokenize
//!
//! Thin collaborator around the injection engine: splits a sentence into the
//! token sequence the engine consumes and reassembles the surface string
//! from the engine's output. Word characters plus internal hyphens and
//! apostrophes form one token; any other non-whitespace character stands
//! alone.

/// Punctuation that attaches to the preceding word when detokenizing.
const ATTACHING_PUNCTUATION: [&str; 7] = [".", ",", "!", "?", "\"", ";", ":"];

/// Splits a line into word and punctuation tokens. Whitespace separates
/// tokens and is not kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        if ch.is_alphanumeric() {
            let mut word = String::from(ch);
            while let Some(&next_ch) = chars.peek() {
                if next_ch.is_alphanumeric() || next_ch == '-' || next_ch == '\'' {
                    word.push(next_ch);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(word);
        } else {
            tokens.push(ch.to_string());
        }
    }

    tokens
}

/// Joins tokens with single spaces, then closes the gap before attaching
/// punctuation (`Kumain ako .` → `Kumain ako.`).
pub fn detokenize(tokens: &[String]) -> String {
    let mut sentence = String::new();
    for token in tokens {
        if !sentence.is_empty() && !ATTACHING_PUNCTUATION.contains(&token.as_str()) {
            sentence.push(' ');
        }
        sentence.push_str(token);
    }
    sentence
}
