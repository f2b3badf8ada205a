//! Error-type registry: rule weights and weighted substitution dispatch

use std::collections::HashSet;

use rand::Rng;

use crate::errors;
use crate::injection::SentenceBuffer;

/// Named substitution rule. The enumeration is closed; dispatch matches it
/// exhaustively so a new rule cannot be added without a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    Ligature,
    Enclitic,
    Hyphenation,
    NgNang,
    Morphological,
    Repetition,
    /// Legacy affix-based substitution. Not part of the default weight
    /// table; reachable through a caller-supplied table.
    Affix,
}

impl ErrorType {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorType::Ligature => "ligature",
            ErrorType::Enclitic => "enclitic",
            ErrorType::Hyphenation => "hyphenation",
            ErrorType::NgNang => "ng_nang",
            ErrorType::Morphological => "morphological",
            ErrorType::Repetition => "repetition",
            ErrorType::Affix => "affix",
        }
    }

    pub fn from_name(name: &str) -> Option<ErrorType> {
        match name {
            "ligature" => Some(ErrorType::Ligature),
            "enclitic" => Some(ErrorType::Enclitic),
            "hyphenation" => Some(ErrorType::Hyphenation),
            "ng_nang" => Some(ErrorType::NgNang),
            "morphological" => Some(ErrorType::Morphological),
            "repetition" => Some(ErrorType::Repetition),
            "affix" => Some(ErrorType::Affix),
            _ => None,
        }
    }
}

/// Relative frequencies of the error types in real learner text. Treated as
/// relative weights, not probabilities: sampling divides by the live total,
/// so a table summing to ~1 and one summing to ~100 behave the same.
const DEFAULT_WEIGHTS: [(ErrorType, f64); 6] = [
    (ErrorType::Ligature, 0.28),
    (ErrorType::NgNang, 0.22),
    (ErrorType::Enclitic, 0.14),
    (ErrorType::Morphological, 0.14),
    (ErrorType::Hyphenation, 0.12),
    (ErrorType::Repetition, 0.10),
];

/// Fixed table binding each error type to its relative weight, plus the
/// affix vocabulary consumed by the legacy `affix` rule.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<(ErrorType, f64)>,
    affixes: Vec<String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            entries: DEFAULT_WEIGHTS.to_vec(),
            affixes: errors::affix::DEFAULT_AFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Registry {
    /// Builds a registry from an explicit weight table. Weights must be
    /// finite and strictly positive; duplicates of a type are rejected.
    pub fn from_weights(entries: &[(ErrorType, f64)]) -> Result<Self, String> {
        if entries.is_empty() {
            return Err("weight table is empty".to_string());
        }
        let mut seen = HashSet::new();
        for &(error_type, weight) in entries {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(format!(
                    "weight for '{}' must be a positive number, got {}",
                    error_type.name(),
                    weight
                ));
            }
            if !seen.insert(error_type) {
                return Err(format!("duplicate weight for '{}'", error_type.name()));
            }
        }
        Ok(Self {
            entries: entries.to_vec(),
            ..Self::default()
        })
    }

    /// Overrides the affix vocabulary used by the legacy `affix` rule.
    pub fn with_affixes(mut self, affixes: &[String]) -> Result<Self, String> {
        if affixes.is_empty() {
            return Err("affix vocabulary is empty".to_string());
        }
        self.affixes = affixes.to_vec();
        Ok(self)
    }

    /// Replaces default entries by rule name. Unknown names are an error;
    /// names absent from the default table (`affix`) are appended.
    pub fn with_named_weights(overrides: &[(String, f64)]) -> Result<Self, String> {
        let mut entries = DEFAULT_WEIGHTS.to_vec();
        for (name, weight) in overrides {
            let error_type = ErrorType::from_name(name)
                .ok_or_else(|| format!("unknown error type: '{}'", name))?;
            match entries.iter_mut().find(|(t, _)| *t == error_type) {
                Some(entry) => entry.1 = *weight,
                None => entries.push((error_type, *weight)),
            }
        }
        Self::from_weights(&entries)
    }

    pub fn entries(&self) -> &[(ErrorType, f64)] {
        &self.entries
    }

    /// One substitution attempt: draws error types by relative weight,
    /// skipping types that already failed, until a handler succeeds or every
    /// type has been tried. Returns the type that mutated the buffer, or
    /// `None` if no rule found an eligible target (an expected no-op, not an
    /// error).
    pub fn dispatch<R: Rng>(
        &self,
        buffer: &mut SentenceBuffer,
        rng: &mut R,
    ) -> Option<ErrorType> {
        let mut tried: HashSet<ErrorType> = HashSet::new();

        while tried.len() < self.entries.len() {
            let error_type = self.draw(rng, &tried)?;
            if self.apply_rule(error_type, buffer, rng) {
                return Some(error_type);
            }
            tried.insert(error_type);
        }
        None
    }

    /// Binds each error type to its handler.
    fn apply_rule<R: Rng>(
        &self,
        error_type: ErrorType,
        buffer: &mut SentenceBuffer,
        rng: &mut R,
    ) -> bool {
        match error_type {
            ErrorType::Ligature => errors::ligature::apply(buffer, rng),
            ErrorType::Enclitic => errors::enclitic::apply(buffer, rng),
            ErrorType::Hyphenation => errors::hyphenation::apply(buffer, rng),
            ErrorType::NgNang => errors::ng_nang::apply(buffer, rng),
            ErrorType::Morphological => errors::morphology::apply(buffer, rng),
            ErrorType::Repetition => errors::repetition::apply(buffer, rng),
            ErrorType::Affix => errors::affix::apply_with(buffer, rng, &self.affixes),
        }
    }

    /// Weighted draw over the entries not yet tried.
    fn draw<R: Rng>(&self, rng: &mut R, tried: &HashSet<ErrorType>) -> Option<ErrorType> {
        let candidates: Vec<(ErrorType, f64)> = self
            .entries
            .iter()
            .filter(|(t, _)| !tried.contains(t))
            .copied()
            .collect();
        let total: f64 = candidates.iter().map(|(_, w)| w).sum();
        if candidates.is_empty() || total <= 0.0 {
            return None;
        }

        let mut target = rng.gen_range(0.0..total);
        for (error_type, weight) in &candidates {
            if target < *weight {
                return Some(*error_type);
            }
            target -= weight;
        }
        // Floating-point drift can leave target a hair past the last band.
        candidates.last().map(|(t, _)| *t)
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
    fn test_rejects_non_positive_weight() {
        let result = Registry::from_weights(&[(ErrorType::Ligature, 0.0)]);
        assert!(result.is_err());

        let result = Registry::from_weights(&[(ErrorType::Ligature, -3.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_type() {
        let result =
            Registry::from_weights(&[(ErrorType::NgNang, 1.0), (ErrorType::NgNang, 2.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_named_overrides() {
        let registry =
            Registry::with_named_weights(&[("ligature".to_string(), 50.0)]).unwrap();
        let ligature = registry
            .entries()
            .iter()
            .find(|(t, _)| *t == ErrorType::Ligature)
            .unwrap();
        assert_eq!(ligature.1, 50.0);

        assert!(Registry::with_named_weights(&[("typo".to_string(), 1.0)]).is_err());
    }

    #[test]
    fn test_named_override_can_add_affix() {
        let registry = Registry::with_named_weights(&[("affix".to_string(), 5.0)]).unwrap();
        assert!(registry
            .entries()
            .iter()
            .any(|(t, _)| *t == ErrorType::Affix));
    }

    #[test]
    fn test_relative_weights_are_scale_invariant() {
        // Same ratios at probability scale and percentage scale must yield
        // the same decision sequence under the same seed.
        let fractions = Registry::from_weights(&[
            (ErrorType::NgNang, 0.5),
            (ErrorType::Repetition, 0.5),
        ])
        .unwrap();
        let percentages = Registry::from_weights(&[
            (ErrorType::NgNang, 50.0),
            (ErrorType::Repetition, 50.0),
        ])
        .unwrap();

        for seed in 0..20 {
            let mut rng_a = StdRng::seed_from_u64(seed);
            let mut rng_b = StdRng::seed_from_u64(seed);
            let mut buf_a = buffer(&["kumain", "ng", "isda", "si", "Ana"]);
            let mut buf_b = buffer(&["kumain", "ng", "isda", "si", "Ana"]);

            assert_eq!(
                fractions.dispatch(&mut buf_a, &mut rng_a),
                percentages.dispatch(&mut buf_b, &mut rng_b)
            );
            assert_eq!(buf_a.tokens(), buf_b.tokens());
        }
    }

    #[test]
    fn test_dispatch_exhausts_to_none() {
        // No token is eligible for ng_nang, so dispatch must fail cleanly
        // and leave the buffer untouched.
        let registry = Registry::from_weights(&[(ErrorType::NgNang, 1.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut buf = buffer(&["Naglakad", "siya", "."]);

        assert_eq!(registry.dispatch(&mut buf, &mut rng), None);
        assert_eq!(buf.tokens(), &["Naglakad", "siya", "."]);
    }

    #[test]
    fn test_dispatch_falls_through_failed_types() {
        // Hyphenation cannot fire (no hyphen), so the only possible success
        // is ng_nang on "ng".
        let registry = Registry::from_weights(&[
            (ErrorType::Hyphenation, 10.0),
            (ErrorType::NgNang, 1.0),
        ])
        .unwrap();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut buf = buffer(&["Magluto", "ka", "ng", "manok", "."]);
            assert_eq!(registry.dispatch(&mut buf, &mut rng), Some(ErrorType::NgNang));
            assert_eq!(buf.token(2), "nang");
        }
    }
}
