//! Heading anchor ids.
//!
//! Slugs follow the rules the published site uses for its anchors, so
//! existing deep links keep working: camel case is split into words, `&`
//! reads as `and`, and every run of other characters becomes one dash.

use std::collections::{HashMap, HashSet};

/// Id used when a heading has no sluggable characters.
const EMPTY_SLUG: &str = "section";

/// Convert text to URL-safe slug.
///
/// Splits camel case (`GetUtcDate` becomes `get-utc-date`), replaces `&`
/// with `and`, drops the apostrophe of `'s`/`'t` endings, lowercases, and
/// collapses every run of non-alphanumeric characters into a single dash.
/// Non-ASCII characters are dropped.
#[must_use]
pub fn slugify(text: &str) -> String {
    let words = drop_apostrophes(&decamelize(&text.replace('&', " and ")));

    let mut result = String::new();
    let mut pending_dash = false;

    for c in words.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !result.is_empty() {
                result.push('-');
            }
            pending_dash = false;
            result.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    result
}

/// Insert spaces at camel-case word boundaries.
///
/// A boundary falls between a lowercase letter or digit and an uppercase
/// letter (`dbExpression`), between an acronym of two or more capitals and a
/// digit (`UTF8`), and before the last capital of an acronym that starts a
/// new word (`HTMLParser`). Plural acronyms such as `APIs` stay whole.
fn decamelize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_word_boundary(&chars, i) {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

fn is_word_boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let cur = chars[i];

    if cur.is_ascii_uppercase() && (prev.is_ascii_lowercase() || prev.is_ascii_digit()) {
        return true;
    }

    let acronym_before = i >= 2 && prev.is_ascii_uppercase() && chars[i - 2].is_ascii_uppercase();
    if cur.is_ascii_digit() && acronym_before {
        return true;
    }

    cur.is_ascii_uppercase()
        && prev.is_ascii_uppercase()
        && chars
            .get(i + 1)
            .is_some_and(|&next| (next.is_ascii_lowercase() && next != 's') || next.is_ascii_digit())
}

/// Remove the apostrophe in word endings like `it's` and `don't`.
fn drop_apostrophes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let contraction = c == '\''
            && i > 0
            && chars[i - 1].is_ascii_alphanumeric()
            && matches!(chars.get(i + 1), Some('t' | 's'))
            && chars.get(i + 2).is_none_or(|next| next.is_whitespace());
        if !contraction {
            result.push(c);
        }
    }

    result
}

/// Slug generator that keeps ids unique within one page.
///
/// The first occurrence of a slug is used as is; later occurrences get a
/// `-2`, `-3`, ... suffix. A suffixed id never repeats an id already handed
/// out, including one that came from a different heading text.
#[derive(Debug, Default)]
pub struct SlugCounter {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl SlugCounter {
    /// Create an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text` and make the result unique.
    pub fn slug(&mut self, text: &str) -> String {
        self.claim(slugify(text))
    }

    /// Register an id and make it unique.
    ///
    /// An empty id is replaced with `section`.
    pub fn claim(&mut self, base: String) -> String {
        let base = if base.is_empty() {
            EMPTY_SLUG.to_owned()
        } else {
            base
        };

        let count = self.counts.entry(base.clone()).or_default();
        *count += 1;
        let mut id = match *count {
            1 => base.clone(),
            n => format!("{base}-{n}"),
        };
        while self.used.contains(&id) {
            *count += 1;
            id = format!("{base}-{count}");
        }

        self.used.insert(id.clone());
        id
    }
}
