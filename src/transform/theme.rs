use once_cell::sync::Lazy;

use super::{apply_rules, Rule};

/// Slate palette → theme token renames.
///
/// Compound patterns come before the single tokens they contain, otherwise
/// the single-token rule would consume part of the compound first.
pub const THEME_RULES: &[(&str, &str)] = &[
    // page background
    (
        "bg-gradient-to-b from-slate-50 to-white dark:from-slate-900 dark:to-slate-800",
        "bg-background text-foreground",
    ),
    // text colors
    ("text-slate-900 dark:text-white", "text-foreground"),
    ("text-slate-600 dark:text-slate-300", "text-gray-text"),
    ("text-slate-500 dark:text-slate-400", "text-gray-text"),
    ("text-slate-700 dark:text-slate-300", "text-gray-text"),
    // card backgrounds
    ("bg-white dark:bg-slate-800", "bg-secondary/30"),
    ("bg-white dark:bg-slate-900", "bg-secondary/50"),
    ("bg-slate-100/50 dark:bg-slate-800/50", "bg-secondary/30"),
    // borders
    ("border-slate-200 dark:border-slate-700", "border-border"),
    ("border-slate-300", "border-border"),
    // remaining text tokens
    ("text-slate-900", "text-foreground"),
    ("text-slate-600", "text-gray-text"),
    ("text-slate-500", "text-gray-text"),
    ("text-slate-400", "text-gray-text"),
    ("text-slate-300", "text-gray-text"),
    ("text-slate-700", "text-gray-text"),
    // remaining backgrounds
    ("bg-slate-50", "bg-secondary/30"),
    ("bg-slate-100", "bg-secondary/30"),
    ("bg-slate-200", "bg-secondary/50"),
    ("bg-slate-800", "bg-navy-800"),
];

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    THEME_RULES
        .iter()
        .map(|(needle, replacement)| Rule::literal(*needle, *replacement))
        .collect()
});

/// Rewrite slate color utilities to the theme tokens
pub fn normalize(content: &str) -> String {
    apply_rules(content, &RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gradient_before_single_tokens() {
        let content = r#"<div className="min-h-screen bg-gradient-to-b from-slate-50 to-white dark:from-slate-900 dark:to-slate-800">"#;
        let result = normalize(content);

        assert_eq!(
            result,
            r#"<div className="min-h-screen bg-background text-foreground">"#
        );
        assert!(!result.contains("bg-secondary/30"));
        assert!(!result.contains("bg-navy-800"));
    }

    #[test]
    fn test_dark_variant_pairs() {
        let content = r#"<h2 className="text-slate-900 dark:text-white">Title</h2>
<div className="bg-white dark:bg-slate-800 border-slate-200 dark:border-slate-700">"#;

        assert_eq!(
            normalize(content),
            r#"<h2 className="text-foreground">Title</h2>
<div className="bg-secondary/30 border-border">"#
        );
    }

    #[test]
    fn test_single_tokens() {
        let content = "text-slate-600 bg-slate-100 bg-slate-200 bg-slate-800 border-slate-300";
        assert_eq!(
            normalize(content),
            "text-gray-text bg-secondary/30 bg-secondary/50 bg-navy-800 border-border"
        );
    }

    #[test]
    fn test_translucent_background_pair() {
        assert_eq!(
            normalize("bg-slate-100/50 dark:bg-slate-800/50"),
            "bg-secondary/30"
        );
    }

    #[test]
    fn test_no_match_is_identity() {
        let content = r#"<div className="bg-background text-foreground">"#;
        assert_eq!(normalize(content), content);
    }

    #[test]
    fn test_idempotent() {
        let content = "bg-slate-50 text-slate-900 dark:text-white bg-white dark:bg-slate-900";
        let once = normalize(content);
        assert_eq!(normalize(&once), once);
    }
}
