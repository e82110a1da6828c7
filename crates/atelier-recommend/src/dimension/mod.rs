//! Keyword-driven dimension classification.
//!
//! Assigns a `Dimension` to rule text that arrives without one (typically
//! model-sourced candidates). Classification priority: an explicit dimension
//! wins outright, then keyword hits against the vocabulary, then a coarse
//! scope mapping, and finally the `General` fallback. The vocabulary starts
//! from a fixed base table and can be extended from observed rule text, with
//! learned keywords pruned when their measured accuracy drops.

pub mod keywords;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::score::Score;

use keywords::{BASE_KEYWORDS, STOP_WORDS};

/// How a classification was reached, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationMethod {
    Explicit,
    Keywords,
    Scope,
    Fallback,
}

/// Outcome of classifying one rule description.
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    pub dimension: Dimension,
    pub confidence: Score,
    pub method: ClassificationMethod,
    pub matched_keywords: Vec<String>,
}

/// Running accuracy for one learned keyword.
#[derive(Debug, Clone, Copy, Default)]
struct KeywordRecord {
    hits: u32,
    correct: u32,
}

impl KeywordRecord {
    fn accuracy(self) -> Option<f64> {
        (self.hits > 0).then(|| f64::from(self.correct) / f64::from(self.hits))
    }
}

/// Minimum measured accuracy a learned keyword must sustain to stay
/// in the vocabulary.
const MIN_KEYWORD_ACCURACY: f64 = 0.6;

/// Keyword hits needed for full keyword-method confidence.
const KEYWORD_SATURATION: f64 = 3.0;

/// Classifies rule descriptions into design dimensions.
pub struct KeywordClassifier {
    /// Base vocabulary plus anything learned from rule text.
    vocabulary: HashMap<Dimension, HashSet<String>>,
    /// Accuracy tracking for learned keywords only; base keywords are
    /// never pruned.
    learned: HashMap<(Dimension, String), KeywordRecord>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        let vocabulary = BASE_KEYWORDS
            .iter()
            .map(|(dim, words)| {
                (*dim, words.iter().map(|w| (*w).to_string()).collect())
            })
            .collect();
        Self {
            vocabulary,
            learned: HashMap::new(),
        }
    }

    /// Classify a rule description. An explicit dimension short-circuits
    /// everything else.
    pub fn classify(
        &self,
        description: &str,
        scope: Option<RuleScope>,
        explicit: Option<Dimension>,
    ) -> ClassificationResult {
        if let Some(dimension) = explicit {
            return ClassificationResult {
                dimension,
                confidence: Score::new(1.0),
                method: ClassificationMethod::Explicit,
                matched_keywords: Vec::new(),
            };
        }

        let text = description.to_lowercase();
        let mut best: Option<(Dimension, Vec<String>)> = None;
        for (dim, _) in BASE_KEYWORDS {
            let vocab = &self.vocabulary[dim];
            let matched: Vec<String> = vocab.iter().filter(|w| text.contains(*w)).cloned().collect();
            let better = match &best {
                Some((_, prev)) => matched.len() > prev.len(),
                None => !matched.is_empty(),
            };
            if better {
                best = Some((*dim, matched));
            }
        }

        if let Some((dimension, mut matched)) = best {
            matched.sort();
            let confidence = (matched.len() as f64 / KEYWORD_SATURATION).min(1.0);
            return ClassificationResult {
                dimension,
                confidence: Score::new(confidence),
                method: ClassificationMethod::Keywords,
                matched_keywords: matched,
            };
        }

        if let Some(scope) = scope {
            let dimension = match scope {
                RuleScope::Structural | RuleScope::Compositional => Dimension::Layout,
                RuleScope::Relational => Dimension::Interaction,
                RuleScope::ArtifactProperty => Dimension::VisualElements,
            };
            return ClassificationResult {
                dimension,
                confidence: Score::new(0.5),
                method: ClassificationMethod::Scope,
                matched_keywords: Vec::new(),
            };
        }

        ClassificationResult {
            dimension: Dimension::General,
            confidence: Score::new(0.3),
            method: ClassificationMethod::Fallback,
            matched_keywords: Vec::new(),
        }
    }

    /// Grow the vocabulary from rule descriptions whose dimension is known.
    /// Every content word (3+ characters, not a stop word) becomes a learned
    /// keyword for that dimension.
    pub fn learn_from_rules<'a, I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (&'a str, Dimension)>,
    {
        let mut added = 0usize;
        for (description, dimension) in rules {
            for word in description.to_lowercase().split(|c: char| !c.is_alphanumeric()) {
                if word.len() < 3 || STOP_WORDS.contains(&word) {
                    continue;
                }
                let vocab = self.vocabulary.entry(dimension).or_default();
                if vocab.insert(word.to_string()) {
                    self.learned
                        .entry((dimension, word.to_string()))
                        .or_default();
                    added += 1;
                }
            }
        }
        if added > 0 {
            debug!(added, "learned new dimension keywords");
        }
    }

    /// Record whether a keyword-based classification turned out correct,
    /// crediting every learned keyword that matched.
    pub fn record_outcome(&mut self, result: &ClassificationResult, correct: bool) {
        if result.method != ClassificationMethod::Keywords {
            return;
        }
        for word in &result.matched_keywords {
            if let Some(record) = self.learned.get_mut(&(result.dimension, word.clone())) {
                record.hits += 1;
                if correct {
                    record.correct += 1;
                }
            }
        }
    }

    /// Prune learned keywords whose measured accuracy fell below the gate.
    /// Base keywords are untouched.
    pub fn update_rewards(&mut self) {
        let stale: Vec<(Dimension, String)> = self
            .learned
            .iter()
            .filter(|(_, record)| {
                record.accuracy().is_some_and(|a| a < MIN_KEYWORD_ACCURACY)
            })
            .map(|(key, _)| key.clone())
            .collect();
        for (dimension, word) in stale {
            if let Some(vocab) = self.vocabulary.get_mut(&dimension) {
                vocab.remove(&word);
            }
            self.learned.remove(&(dimension, word.clone()));
            debug!(%dimension, word, "pruned low-accuracy keyword");
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dimension_wins_with_full_confidence() {
        let c = KeywordClassifier::new();
        let r = c.classify(
            "use consistent spacing",
            Some(RuleScope::Structural),
            Some(Dimension::Color),
        );
        assert_eq!(r.dimension, Dimension::Color);
        assert_eq!(r.method, ClassificationMethod::Explicit);
        assert_eq!(r.confidence.value(), 1.0);
    }

    #[test]
    fn keyword_hits_pick_the_densest_dimension() {
        let c = KeywordClassifier::new();
        let r = c.classify(
            "tighten margin and padding for a consistent gap rhythm",
            None,
            None,
        );
        assert_eq!(r.dimension, Dimension::Spacing);
        assert_eq!(r.method, ClassificationMethod::Keywords);
        // Four hits saturate at confidence 1.0.
        assert_eq!(r.confidence.value(), 1.0);
        assert_eq!(r.matched_keywords.len(), 4);
    }

    #[test]
    fn partial_keyword_hits_scale_confidence() {
        let c = KeywordClassifier::new();
        let r = c.classify("increase contrast on headings", None, None);
        assert_eq!(r.dimension, Dimension::Color);
        assert!((r.confidence.value() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn scope_mapping_applies_when_no_keywords_match() {
        let c = KeywordClassifier::new();
        let r = c.classify("keep siblings together", Some(RuleScope::Relational), None);
        assert_eq!(r.dimension, Dimension::Interaction);
        assert_eq!(r.method, ClassificationMethod::Scope);
        assert_eq!(r.confidence.value(), 0.5);
    }

    #[test]
    fn fallback_is_general_at_low_confidence() {
        let c = KeywordClassifier::new();
        let r = c.classify("do good things", None, None);
        assert_eq!(r.dimension, Dimension::General);
        assert_eq!(r.method, ClassificationMethod::Fallback);
        assert_eq!(r.confidence.value(), 0.3);
    }

    #[test]
    fn learned_keywords_take_effect_and_can_be_pruned() {
        let mut c = KeywordClassifier::new();
        let before = c.classify("apply breathingroom everywhere", None, None);
        assert_eq!(before.method, ClassificationMethod::Fallback);

        c.learn_from_rules([("use breathingroom generously", Dimension::Spacing)]);
        let after = c.classify("apply breathingroom everywhere", None, None);
        assert_eq!(after.dimension, Dimension::Spacing);
        assert_eq!(after.method, ClassificationMethod::Keywords);

        // Two wrong outcomes out of two drops accuracy below the gate.
        c.record_outcome(&after, false);
        c.record_outcome(&after, false);
        c.update_rewards();
        let pruned = c.classify("apply breathingroom everywhere", None, None);
        assert_eq!(pruned.method, ClassificationMethod::Fallback);
    }

    #[test]
    fn stop_words_and_short_words_are_not_learned() {
        let mut c = KeywordClassifier::new();
        c.learn_from_rules([("the ui and it", Dimension::Layout)]);
        let r = c.classify("the it and", None, None);
        assert_eq!(r.method, ClassificationMethod::Fallback);
    }
}
