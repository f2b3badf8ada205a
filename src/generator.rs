//! Corpus generator: sentences in, (incorrect, correct) CSV rows out

use std::fmt::Write as _;

use rand::Rng;

use crate::config::Config;
use crate::injection::Injector;
use crate::tokenizer;

/// One training pair plus its injection trace.
#[derive(Debug, Clone)]
pub struct SentencePair {
    pub incorrect: String,
    pub correct: String,
    pub trace: String,
}

/// Drives the full pipeline: tokenize each input sentence, run the error
/// injector over it, detokenize, and accumulate CSV rows.
pub struct Generator {
    injector: Injector,
    trace: bool,
}

impl Generator {
    pub fn new(config: &Config) -> Result<Self, String> {
        config.validate()?;
        let injector = Injector::new(config)?;
        Ok(Self {
            injector,
            trace: config.trace,
        })
    }

    /// Corrupts every non-blank line of `text`. A sentence the injector left
    /// visibly unchanged still yields a pair; the trace records what was
    /// attempted.
    pub fn generate_pairs<R: Rng>(&self, rng: &mut R, text: &str) -> Vec<SentencePair> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.corrupt_sentence(rng, line))
            .collect()
    }

    /// One sentence through the pipeline.
    pub fn corrupt_sentence<R: Rng>(&self, rng: &mut R, sentence: &str) -> SentencePair {
        let tokens = tokenizer::tokenize(sentence);
        let result = self.injector.inject(rng, &tokens);
        SentencePair {
            incorrect: tokenizer::detokenize(&result.tokens),
            correct: tokenizer::detokenize(&tokens),
            trace: result.trace(),
        }
    }

    /// Renders the pairs as a CSV table, header included.
    pub fn run<R: Rng>(&self, rng: &mut R, text: &str) -> String {
        let mut output = String::new();
        if self.trace {
            output.push_str("incorrect,correct,errors\n");
        } else {
            output.push_str("incorrect,correct\n");
        }

        for pair in self.generate_pairs(rng, text) {
            let _ = write!(output, "{},{}", csv_field(&pair.incorrect), csv_field(&pair.correct));
            if self.trace {
                let _ = write!(output, ",{}", csv_field(&pair.trace));
            }
            output.push('\n');
        }
        output
    }
}

/// Quotes a field when it contains a comma, quote, or newline; inner quotes
/// are doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_plain() {
        assert_eq!(csv_field("walang kuwit"), "walang kuwit");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("isa, dalawa"), "\"isa, dalawa\"");
        assert_eq!(csv_field("sabi \"oo\""), "\"sabi \"\"oo\"\"\"");
    }
}
