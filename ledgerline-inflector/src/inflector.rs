use crate::rules::{IRREGULAR, PLURALS, SINGULARS, UNCOUNTABLE};
use crate::{InflectorError, InflectorResult};
use regex::Regex;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    fn new(pattern: &str, replacement: &str) -> InflectorResult<Self> {
        let pattern =
            Regex::new(&format!("(?i){pattern}")).map_err(|source| InflectorError::InvalidRule {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }
}

/// Pluralization and singularization rules.
///
/// Lookup order for a word:
/// 1. blank words are returned as-is
/// 2. uncountable words (whole word or last word) are returned as-is
/// 3. irregular forms (whole word, then last word) are substituted
/// 4. otherwise the most recently added matching rule is applied
///
/// The "last word" of `transaction_event` is `event`, of `superUser` is `User`.
#[derive(Debug, Clone)]
pub struct Inflector {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    irregular: HashMap<String, String>,
    irregular_inverse: HashMap<String, String>,
    uncountable: HashSet<String>,
}

impl Default for Inflector {
    /// An inflector loaded with the default English tables.
    fn default() -> Self {
        let mut inflector = Self::empty();
        for (pattern, replacement) in PLURALS {
            inflector
                .plural(pattern, replacement)
                .expect("built-in plural rule must compile");
        }
        for (pattern, replacement) in SINGULARS {
            inflector
                .singular(pattern, replacement)
                .expect("built-in singular rule must compile");
        }
        for (singular, plural) in IRREGULAR {
            inflector.irregular(singular, plural);
        }
        for word in UNCOUNTABLE {
            inflector.uncountable(word);
        }
        inflector
    }
}

impl Inflector {
    /// An inflector with no rules; every word inflects to itself.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            plurals: Vec::new(),
            singulars: Vec::new(),
            irregular: HashMap::new(),
            irregular_inverse: HashMap::new(),
            uncountable: HashSet::new(),
        }
    }

    /// Adds a pluralization rule. It takes precedence over all earlier rules.
    pub fn plural(&mut self, pattern: &str, replacement: &str) -> InflectorResult<()> {
        self.plurals.push(Rule::new(pattern, replacement)?);
        Ok(())
    }

    /// Adds a singularization rule. It takes precedence over all earlier rules.
    pub fn singular(&mut self, pattern: &str, replacement: &str) -> InflectorResult<()> {
        self.singulars.push(Rule::new(pattern, replacement)?);
        Ok(())
    }

    /// Registers an irregular pair. Both forms pluralize to `plural` and
    /// singularize to `singular`, so inflection stays idempotent.
    pub fn irregular(&mut self, singular: &str, plural: &str) {
        let (singular_key, plural_key) = (singular.to_lowercase(), plural.to_lowercase());
        self.irregular.insert(singular_key.clone(), plural.to_string());
        self.irregular.insert(plural_key.clone(), plural.to_string());
        self.irregular_inverse
            .insert(plural_key, singular.to_string());
        self.irregular_inverse
            .insert(singular_key, singular.to_string());
    }

    /// Marks a word as having no distinct plural.
    pub fn uncountable(&mut self, word: &str) {
        self.uncountable.insert(word.to_lowercase());
    }

    pub fn pluralize(&self, word: &str) -> String {
        self.inflect(word, &self.plurals, &self.irregular)
    }

    pub fn singularize(&self, word: &str) -> String {
        self.inflect(word, &self.singulars, &self.irregular_inverse)
    }

    fn inflect(&self, word: &str, rules: &[Rule], irregular: &HashMap<String, String>) -> String {
        if word.trim().is_empty() {
            return word.to_string();
        }

        let lowercase = word.to_lowercase();
        let (first_phrase, last_word) = split_last_word(word);
        let last_lowercase = last_word.to_lowercase();

        if self.uncountable.contains(&lowercase) || self.uncountable.contains(&last_lowercase) {
            return word.to_string();
        }

        if let Some(substitution) = irregular.get(&lowercase) {
            return match_leading_case(word, substitution);
        }
        if let Some(substitution) = irregular.get(&last_lowercase) {
            return format!("{first_phrase}{}", match_leading_case(last_word, substitution));
        }

        rules
            .iter()
            .rev()
            .find(|rule| rule.pattern.is_match(word))
            .map(|rule| {
                rule.pattern
                    .replace(word, rule.replacement.as_str())
                    .into_owned()
            })
            .unwrap_or_else(|| word.to_string())
    }
}

/// Splits `word` into everything before its last word and the last word.
///
/// The last word is either the lowercase run after the final `_`, `-`, `/` or
/// whitespace separator, or the final capitalized run of a camelCase word.
fn split_last_word(word: &str) -> (&str, &str) {
    let is_tail = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    };

    if let Some(idx) = word.rfind(|c: char| matches!(c, '_' | '-' | '/') || c.is_whitespace()) {
        let sep_len = word[idx..].chars().next().map_or(1, char::len_utf8);
        let (head, tail) = word.split_at(idx + sep_len);
        if idx > 0 && is_tail(tail) {
            return (head, tail);
        }
    }

    if let Some(idx) = word.rfind(|c: char| c.is_ascii_uppercase()) {
        let tail = &word[idx + 1..];
        if idx > 0 && (tail.is_empty() || is_tail(tail)) {
            return word.split_at(idx);
        }
    }

    ("", word)
}

fn match_leading_case(source: &str, substitution: &str) -> String {
    let source_capitalized = source.chars().next().is_some_and(char::is_uppercase);
    if !source_capitalized {
        return substitution.to_string();
    }
    let mut chars = substitution.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
