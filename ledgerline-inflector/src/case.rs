//! Casing conversions between camelCase, snake_case, dasherized and class names.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static DECAMELIZE: LazyLock<Regex> = LazyLock::new(|| compile(r"([a-z\d])([A-Z])"));
static UNDERSCORE_CAPS: LazyLock<Regex> = LazyLock::new(|| compile(r"([a-z\d])([A-Z]+)"));
static UNDERSCORE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| compile(r"-|\s+"));
static CAMELIZE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| compile(r"(-|_|\.|\s)+(.)?"));
static CAMELIZE_SEGMENT_START: LazyLock<Regex> = LazyLock::new(|| compile(r"(^|/)([A-Z])"));
static CLASSIFY_LEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"^(-|_)+(.)?"));
static CLASSIFY_INNER: LazyLock<Regex> = LazyLock::new(|| compile(r"(.)(-|_|\.|\s)+(.)?"));
static CLASSIFY_SEGMENT_START: LazyLock<Regex> = LazyLock::new(|| compile(r"(^|/|\.)([a-z])"));
static CAPITALIZE_SEGMENT_START: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(^|/)([a-z\x{00C0}-\x{024F}])"));
static DASHERIZE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| compile(r"[ _]"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in casing pattern must compile")
}

fn upper(m: Option<regex::Match<'_>>) -> String {
    m.map(|m| m.as_str().to_uppercase()).unwrap_or_default()
}

/// Splits camelCase words with `_` and lowercases the result.
///
/// ```
/// assert_eq!(ledgerline_inflector::decamelize("cardNumber"), "card_number");
/// assert_eq!(ledgerline_inflector::decamelize("transaction-event"), "transaction-event");
/// ```
pub fn decamelize(s: &str) -> String {
    DECAMELIZE.replace_all(s, "${1}_${2}").to_lowercase()
}

/// Lowercases and joins words with `_`, treating dashes, whitespace and case
/// boundaries (including runs of capitals) as separators.
///
/// ```
/// assert_eq!(ledgerline_inflector::underscore("transaction-event"), "transaction_event");
/// assert_eq!(ledgerline_inflector::underscore("innerHTML"), "inner_html");
/// ```
pub fn underscore(s: &str) -> String {
    let split = UNDERSCORE_CAPS.replace_all(s, "${1}_${2}");
    UNDERSCORE_SEPARATORS
        .replace_all(&split, "_")
        .to_lowercase()
}

/// Converts separated words to lowerCamelCase.
///
/// ```
/// assert_eq!(ledgerline_inflector::camelize("flagged_comments"), "flaggedComments");
/// assert_eq!(ledgerline_inflector::camelize("admin/Super_user"), "admin/superUser");
/// ```
pub fn camelize(s: &str) -> String {
    let joined = CAMELIZE_SEPARATORS.replace_all(s, |caps: &Captures<'_>| upper(caps.get(2)));
    CAMELIZE_SEGMENT_START
        .replace_all(&joined, |caps: &Captures<'_>| caps[0].to_lowercase())
        .into_owned()
}

/// Converts a model name to its class form, one UpperCamel segment per `/`.
///
/// ```
/// assert_eq!(ledgerline_inflector::classify("transaction-event"), "TransactionEvent");
/// assert_eq!(ledgerline_inflector::classify("admin/super-user"), "Admin/SuperUser");
/// ```
pub fn classify(s: &str) -> String {
    let parts: Vec<String> = s
        .split('/')
        .map(|part| {
            let leading = CLASSIFY_LEADING.replace(part, |caps: &Captures<'_>| {
                caps.get(2)
                    .map(|chr| format!("_{}", chr.as_str().to_uppercase()))
                    .unwrap_or_default()
            });
            CLASSIFY_INNER
                .replace_all(&leading, |caps: &Captures<'_>| {
                    format!("{}{}", &caps[1], upper(caps.get(3)))
                })
                .into_owned()
        })
        .collect();

    CLASSIFY_SEGMENT_START
        .replace_all(&parts.join("/"), |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

/// Upper-cases the first letter of every `/`-separated segment.
pub fn capitalize(s: &str) -> String {
    CAPITALIZE_SEGMENT_START
        .replace_all(s, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

/// Decamelizes, then replaces underscores and spaces with dashes.
///
/// ```
/// assert_eq!(ledgerline_inflector::dasherize("transactionEvent"), "transaction-event");
/// ```
pub fn dasherize(s: &str) -> String {
    DASHERIZE_SEPARATORS
        .replace_all(&decamelize(s), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_patterns_compile() {
        LazyLock::force(&DECAMELIZE);
        LazyLock::force(&UNDERSCORE_CAPS);
        LazyLock::force(&UNDERSCORE_SEPARATORS);
        LazyLock::force(&CAMELIZE_SEPARATORS);
        LazyLock::force(&CAMELIZE_SEGMENT_START);
        LazyLock::force(&CLASSIFY_LEADING);
        LazyLock::force(&CLASSIFY_INNER);
        LazyLock::force(&CLASSIFY_SEGMENT_START);
        LazyLock::force(&CAPITALIZE_SEGMENT_START);
        LazyLock::force(&DASHERIZE_SEPARATORS);
    }

    #[test]
    fn classify_drops_leading_separator_into_underscore() {
        assert_eq!(classify("_private-thing"), "_PrivateThing");
    }
}
