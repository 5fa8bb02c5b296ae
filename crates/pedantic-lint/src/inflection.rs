//! English inflection used by the naming conventions.
//!
//! Case transforms ([`camelize`], [`underscore`], [`dasherize`]) are plain
//! functions. Singularization goes through an [`Inflector`], which checks
//! uncountable words, then irregular plurals (most recently added first),
//! then the regular suffix rules below.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "fish",
    "information",
    "jeans",
    "money",
    "rice",
    "series",
    "sheep",
    "species",
];

/// `(singular, plural)` pairs, in registration order.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("human", "humans"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("cow", "kine"),
    ("zombie", "zombies"),
];

/// Regular singular rules, highest priority first.
const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(database)s$", "${1}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)(passer)sby$", "${1}by"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(us|i)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(is|es)$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)(es)?$", "${1}"),
    (r"(?i)(m|l)ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    (r"(?i)(t)he(sis|ses)$", "${1}hesis"),
    (r"(?i)(s)ynop(sis|ses)$", "${1}ynopsis"),
    (r"(?i)(p)rogno(sis|ses)$", "${1}rognosis"),
    (r"(?i)(p)arenthe(sis|ses)$", "${1}arenthesis"),
    (r"(?i)(d)iagno(sis|ses)$", "${1}iagnosis"),
    (r"(?i)(b)a(sis|ses)$", "${1}asis"),
    (r"(?i)(a)naly(sis|ses)$", "${1}nalysis"),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)(ss)$", "${1}"),
    (r"(?i)s$", ""),
];

static SINGULARS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    SINGULAR_RULES
        .iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, *replacement))
        })
        .collect()
});

static CAMEL_HUMP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?:^|_)(.)").ok());
static ACRONYM_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").ok());
static WORD_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").ok());

static ENGLISH: LazyLock<Inflector> = LazyLock::new(Inflector::default);

/// Uppercases the first character and every character following `_`,
/// dropping the underscores: `"camel_case"` becomes `"CamelCase"`.
#[must_use]
pub fn camelize(word: &str) -> String {
    match CAMEL_HUMP.as_ref() {
        Some(re) => re
            .replace_all(word, |caps: &Captures<'_>| caps[1].to_uppercase())
            .into_owned(),
        None => word.to_string(),
    }
}

/// Splits camel humps and acronyms with `_`, turns `-` into `_`, and
/// lowercases: `"HTTPRequest-id"` becomes `"http_request_id"`.
#[must_use]
pub fn underscore(word: &str) -> String {
    let mut word = word.to_string();
    for re in [ACRONYM_BOUNDARY.as_ref(), WORD_BOUNDARY.as_ref()]
        .into_iter()
        .flatten()
    {
        word = re.replace_all(&word, "${1}_${2}").into_owned();
    }
    word.replace('-', "_").to_lowercase()
}

/// Replaces underscores with dashes.
#[must_use]
pub fn dasherize(word: &str) -> String {
    word.replace('_', "-")
}

/// Singularizes with the built-in English tables.
#[must_use]
pub fn singularize(word: &str) -> String {
    Inflector::english().singularize(word)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Irregular {
    singular: String,
    plural: String,
}

impl Irregular {
    /// Rewrites a trailing, case-insensitive occurrence of the plural.
    ///
    /// When both forms start with the same letter the matched first
    /// character is kept as written; otherwise its case selects the case
    /// of the singular's first letter.
    fn singularize(&self, word: &str) -> Option<String> {
        let start = word.len().checked_sub(self.plural.len())?;
        if !word.is_char_boundary(start) {
            return None;
        }
        let (prefix, tail) = word.split_at(start);

        let mut tail_chars = tail.chars();
        let first = tail_chars.next()?;
        let mut plural_chars = self.plural.chars();
        let plural_first = plural_chars.next()?;
        let mut singular_chars = self.singular.chars();
        let singular_first = singular_chars.next()?;

        if !tail_chars.as_str().eq_ignore_ascii_case(plural_chars.as_str()) {
            return None;
        }

        let lead = if singular_first.eq_ignore_ascii_case(&plural_first) {
            if !first.eq_ignore_ascii_case(&plural_first) {
                return None;
            }
            first
        } else if first == plural_first.to_ascii_uppercase() {
            singular_first.to_ascii_uppercase()
        } else if first == plural_first.to_ascii_lowercase() {
            singular_first.to_ascii_lowercase()
        } else {
            return None;
        };

        Some(format!("{prefix}{lead}{}", singular_chars.as_str()))
    }
}

/// Table-driven singularizer.
///
/// [`Inflector::default`] carries the English tables; extra uncountable
/// words and irregular pairs can be layered on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflector {
    uncountables: Vec<String>,
    /// Most recently registered first.
    irregulars: Vec<Irregular>,
}

impl Default for Inflector {
    fn default() -> Self {
        let mut inflector = Self {
            uncountables: Vec::new(),
            irregulars: Vec::new(),
        };
        for word in UNCOUNTABLES {
            inflector.add_uncountable(word);
        }
        for (singular, plural) in IRREGULARS {
            inflector.add_irregular(singular, plural);
        }
        inflector
    }
}

impl Inflector {
    /// Shared instance with the built-in English tables.
    #[must_use]
    pub fn english() -> &'static Self {
        &ENGLISH
    }

    pub fn add_uncountable(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if !word.is_empty() && !self.uncountables.contains(&word) {
            self.uncountables.push(word);
        }
    }

    pub fn add_irregular(&mut self, singular: &str, plural: &str) {
        let singular = singular.trim();
        let plural = plural.trim();
        if singular.is_empty() || plural.is_empty() {
            return;
        }
        self.irregulars.insert(
            0,
            Irregular {
                singular: singular.to_string(),
                plural: plural.to_string(),
            },
        );
    }

    #[must_use]
    pub fn with_uncountable(mut self, word: &str) -> Self {
        self.add_uncountable(word);
        self
    }

    #[must_use]
    pub fn with_irregular(mut self, singular: &str, plural: &str) -> Self {
        self.add_irregular(singular, plural);
        self
    }

    #[must_use]
    pub fn singularize(&self, word: &str) -> String {
        if self.is_uncountable(word) {
            return word.to_string();
        }

        if let Some(singular) = self.irregulars.iter().find_map(|i| i.singularize(word)) {
            return singular;
        }

        SINGULARS
            .iter()
            .find(|(re, _)| re.is_match(word))
            .map_or_else(
                || word.to_string(),
                |(re, replacement)| re.replace(word, *replacement).into_owned(),
            )
    }

    /// True when `word` ends with an uncountable noun that starts at a
    /// word boundary (`"black sheep"` does, `"blacksheep"` does not).
    fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.iter().any(|uncountable| {
            let Some(start) = word.len().checked_sub(uncountable.len()) else {
                return false;
            };
            if !word.is_char_boundary(start) || !word[start..].eq_ignore_ascii_case(uncountable) {
                return false;
            }
            word[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !is_word_char(c))
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
