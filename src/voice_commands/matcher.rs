// Trigger matcher - exact, substring and fuzzy matching of text against descriptors

use crate::voice_commands::descriptor::CommandDescriptor;
use serde::Serialize;
use strsim::normalized_levenshtein;

/// Default similarity threshold for fuzzy matching (0.0 to 1.0)
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.75;

/// Characters stripped from both ends of the input
const QUOTE_CHARS: &[char] = &['"', '\'', '“', '”', '‘', '’', '`'];

/// Trailing punctuation dropped from transcriptions
const TRAILING_PUNCTUATION: &[char] = &['.', '!', '?'];

/// Word separators used when comparing multi-word phrases
const WORD_SEPARATORS: &[char] = &[' ', '-', '_', '.', ','];

/// Spellings treated as the same word ("e-posta" == "e posta" == "eposta")
const SPELLING_GROUPS: &[&[&str]] = &[&["e-posta", "e posta", "eposta"]];

/// How a descriptor matched
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Substring,
    Fuzzy,
}

/// Result of matching text against one descriptor
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub descriptor: &'a CommandDescriptor,
    pub kind: MatchKind,
    /// Confidence (0.0 to 1.0)
    pub score: f64,
    /// The trigger phrase that matched
    pub trigger: String,
}

/// Configuration for the matcher
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Minimum per-word similarity for a fuzzy match (0.0 to 1.0)
    pub fuzzy_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// Normalize input text: lowercase, strip quoting and trailing punctuation,
/// collapse whitespace.
pub fn normalize(input: &str) -> String {
    // 'İ'.to_lowercase() yields "i\u{307}", map it directly instead
    let lowered: String = input
        .chars()
        .map(|c| if c == 'İ' { 'i' } else { c })
        .collect::<String>()
        .to_lowercase();

    let trimmed = lowered
        .trim()
        .trim_matches(|c| QUOTE_CHARS.contains(&c))
        .trim_end_matches(|c| TRAILING_PUNCTUATION.contains(&c))
        .trim_matches(|c| QUOTE_CHARS.contains(&c))
        .trim();

    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fold Turkish diacritics to their ASCII base letters
pub fn fold_diacritics(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'ı' | 'İ' => 'i',
            'ğ' | 'Ğ' => 'g',
            'ü' | 'Ü' => 'u',
            'ş' | 'Ş' => 's',
            'ö' | 'Ö' => 'o',
            'ç' | 'Ç' => 'c',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Equivalent spellings of already-normalized text, the original first
pub fn spelling_variants(normalized: &str) -> Vec<String> {
    let mut variants = vec![normalized.to_string()];
    for group in SPELLING_GROUPS {
        for spelling in group.iter() {
            if !normalized.contains(spelling) {
                continue;
            }
            for replacement in group.iter().filter(|r| *r != spelling) {
                let variant = normalized.replace(spelling, replacement);
                if !variants.contains(&variant) {
                    variants.push(variant);
                }
            }
        }
    }
    variants
}

/// Normalized edit-distance similarity over diacritic-folded strings.
///
/// Symmetric, and 1.0 for strings that are equal after folding.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = fold_diacritics(a);
    let b = fold_diacritics(b);
    if a == b {
        return 1.0;
    }
    normalized_levenshtein(&a, &b)
}

fn split_words(text: &str) -> Vec<String> {
    text.split(|c| WORD_SEPARATORS.contains(&c))
        .filter(|w| !w.is_empty())
        .map(fold_diacritics)
        .collect()
}

/// Per-word fuzzy score of `input` against `target`.
///
/// Every target word needs an input word at or above `threshold`, and every
/// input word needs a target word, so extra spoken words never ride along on
/// a short trigger. Returns the mean of the best per-target-word scores, or
/// None if any word falls short.
pub fn fuzzy_word_score(input: &str, target: &str, threshold: f64) -> Option<f64> {
    let input_words = split_words(input);
    let target_words = split_words(target);
    if input_words.is_empty() || target_words.is_empty() {
        return None;
    }

    let input_covered = input_words.iter().all(|input_word| {
        target_words
            .iter()
            .any(|w| normalized_levenshtein(input_word, w) >= threshold)
    });
    if !input_covered {
        return None;
    }

    let mut total = 0.0;
    for target_word in &target_words {
        let best = input_words
            .iter()
            .map(|w| normalized_levenshtein(w, target_word))
            .fold(0.0_f64, f64::max);
        if best < threshold {
            return None;
        }
        total += best;
    }
    Some(total / target_words.len() as f64)
}

fn equivalent(a: &str, b: &str) -> bool {
    a == b || fold_diacritics(a) == fold_diacritics(b)
}

/// Matches text against command descriptors
pub struct TriggerMatcher {
    config: MatcherConfig,
}

impl Default for TriggerMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerMatcher {
    /// Create a new matcher with default configuration
    pub fn new() -> Self {
        Self {
            config: MatcherConfig::default(),
        }
    }

    /// Create a matcher with custom configuration
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn threshold(&self) -> f64 {
        self.config.fuzzy_threshold
    }

    /// Match input against a single descriptor.
    ///
    /// Tries exact, then substring, then (only when `allow_fuzzy`) fuzzy.
    pub fn match_descriptor<'a>(
        &self,
        input: &str,
        descriptor: &'a CommandDescriptor,
        allow_fuzzy: bool,
    ) -> Option<MatchResult<'a>> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return None;
        }
        let variants = spelling_variants(&normalized);

        Self::exact(&variants, descriptor)
            .or_else(|| Self::substring(&variants, descriptor))
            .or_else(|| {
                if allow_fuzzy {
                    self.fuzzy(&variants, descriptor)
                } else {
                    None
                }
            })
    }

    /// First descriptor whose trigger equals an input variant
    pub fn find_exact<'a>(
        &self,
        input: &str,
        descriptors: &'a [CommandDescriptor],
    ) -> Option<MatchResult<'a>> {
        let variants = Self::variants_for(input)?;
        descriptors.iter().find_map(|d| Self::exact(&variants, d))
    }

    /// First descriptor whose trigger contains, or is contained in, an input variant
    pub fn find_substring<'a>(
        &self,
        input: &str,
        descriptors: &'a [CommandDescriptor],
    ) -> Option<MatchResult<'a>> {
        let variants = Self::variants_for(input)?;
        descriptors.iter().find_map(|d| Self::substring(&variants, d))
    }

    /// Best fuzzy match across descriptors; ties go to the earliest registered
    pub fn find_fuzzy<'a>(
        &self,
        input: &str,
        descriptors: &'a [CommandDescriptor],
    ) -> Option<MatchResult<'a>> {
        let variants = Self::variants_for(input)?;
        let mut best: Option<MatchResult<'a>> = None;
        for descriptor in descriptors {
            if let Some(candidate) = self.fuzzy(&variants, descriptor) {
                let better = match &best {
                    Some(current) => candidate.score.total_cmp(&current.score).is_gt(),
                    None => true,
                };
                if better {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    fn variants_for(input: &str) -> Option<Vec<String>> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            None
        } else {
            Some(spelling_variants(&normalized))
        }
    }

    fn exact<'a>(variants: &[String], descriptor: &'a CommandDescriptor) -> Option<MatchResult<'a>> {
        for variant in variants {
            for trigger in &descriptor.triggers {
                let trigger_norm = normalize(trigger);
                if !trigger_norm.is_empty() && equivalent(variant, &trigger_norm) {
                    return Some(MatchResult {
                        descriptor,
                        kind: MatchKind::Exact,
                        score: 1.0,
                        trigger: trigger.clone(),
                    });
                }
            }
        }
        None
    }

    fn substring<'a>(variants: &[String], descriptor: &'a CommandDescriptor) -> Option<MatchResult<'a>> {
        for variant in variants {
            for trigger in &descriptor.triggers {
                let trigger_norm = normalize(trigger);
                if trigger_norm.is_empty() {
                    continue;
                }
                if variant.contains(&trigger_norm) || trigger_norm.contains(variant.as_str()) {
                    return Some(MatchResult {
                        descriptor,
                        kind: MatchKind::Substring,
                        score: 1.0,
                        trigger: trigger.clone(),
                    });
                }
            }
        }
        None
    }

    fn fuzzy<'a>(&self, variants: &[String], descriptor: &'a CommandDescriptor) -> Option<MatchResult<'a>> {
        let mut best: Option<(f64, &String)> = None;
        for variant in variants {
            for trigger in &descriptor.triggers {
                let trigger_norm = normalize(trigger);
                if let Some(score) =
                    fuzzy_word_score(variant, &trigger_norm, self.config.fuzzy_threshold)
                {
                    if best.map_or(true, |(s, _)| score > s) {
                        best = Some((score, trigger));
                    }
                }
            }
        }

        best.filter(|(score, _)| score.is_finite())
            .map(|(score, trigger)| MatchResult {
                descriptor,
                kind: MatchKind::Fuzzy,
                score,
                trigger: trigger.clone(),
            })
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
