//! Content-level rewrites. Nothing in here touches the filesystem.

pub mod brand;
pub mod cards;
pub mod contrast;
pub mod inject;
pub mod theme;
pub mod video;

use regex::Regex;
use std::borrow::Cow;

pub use video::{SectionTarget, VideoInjector, SECTION_TARGETS};

/// A single rewrite rule
#[derive(Debug, Clone)]
pub enum Rule {
    /// Exact-case substring replacement
    Literal { needle: String, replacement: String },
    /// Regex replacement; `replacement` may reference groups as `${1}`
    Pattern { regex: Regex, replacement: String },
}

impl Rule {
    pub fn literal(needle: impl Into<String>, replacement: impl Into<String>) -> Self {
        Rule::Literal {
            needle: needle.into(),
            replacement: replacement.into(),
        }
    }

    pub fn pattern(regex: Regex, replacement: impl Into<String>) -> Self {
        Rule::Pattern {
            regex,
            replacement: replacement.into(),
        }
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Rule::Literal { needle, replacement } => {
                if text.contains(needle.as_str()) {
                    Cow::Owned(text.replace(needle.as_str(), replacement))
                } else {
                    Cow::Borrowed(text)
                }
            }
            Rule::Pattern { regex, replacement } => regex.replace_all(text, replacement.as_str()),
        }
    }
}

/// Apply `rules` in order, each one seeing the output of the previous.
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    let mut current = text.to_string();
    for rule in rules {
        let next = match rule.apply(&current) {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => continue,
        };
        current = next;
    }
    current
}
