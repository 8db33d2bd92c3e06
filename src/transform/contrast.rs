use once_cell::sync::Lazy;
use regex::Regex;

use super::{apply_rules, Rule};

static MUTED_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"className="([^"]*)text-gray-text([^"]*)""#)
        .expect("Failed to compile muted text pattern")
});

static SUBHEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(<h3[^>]*className="[^"]*)text-foreground([^"]*")"#)
        .expect("Failed to compile sub-heading pattern")
});

static PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(<p[^>]*className="[^"]*)text-gray-text([^"]*")"#)
        .expect("Failed to compile paragraph pattern")
});

/// Text color swaps that keep a section readable over a video background
#[derive(Debug, Clone)]
pub struct ContrastRetune {
    rules: Vec<Rule>,
}

impl ContrastRetune {
    /// Build the rule set for the section titled `heading`.
    ///
    /// Only the `<h2>` whose text is exactly `heading` gets the title swap;
    /// the remaining swaps apply to the whole block.
    pub fn new(heading: &str) -> Result<Self, regex::Error> {
        let title = Regex::new(&format!(
            r#"(?i)(<h2[^>]*className="[^"]*)text-foreground([^"]*"[^>]*>\s*{}\s*</h2>)"#,
            regex::escape(heading)
        ))?;

        let rules = vec![
            Rule::pattern(title, "${1}text-white${2}"),
            Rule::pattern(Regex::clone(&MUTED_CLASS), r#"className="${1}text-white/80${2}""#),
            Rule::pattern(Regex::clone(&SUBHEADING), "${1}text-white${2}"),
            Rule::pattern(Regex::clone(&PARAGRAPH), "${1}text-white/80${2}"),
        ];

        Ok(Self { rules })
    }

    pub fn apply(&self, block: &str) -> String {
        apply_rules(block, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn retune(block: &str, heading: &str) -> String {
        ContrastRetune::new(heading).unwrap().apply(block)
    }

    #[test]
    fn test_matching_heading_turns_white() {
        let block = r#"<h2 className="text-3xl font-bold text-foreground mb-4">Program Objectives</h2>"#;
        assert_eq!(
            retune(block, "Program Objectives"),
            r#"<h2 className="text-3xl font-bold text-white mb-4">Program Objectives</h2>"#
        );
    }

    #[test]
    fn test_other_headings_untouched() {
        let block = r#"<h2 className="font-bold text-foreground">Learning Modules</h2>"#;
        assert_eq!(retune(block, "Program Objectives"), block);
    }

    #[test]
    fn test_heading_with_surrounding_whitespace() {
        let block = "<h2 className=\"text-foreground\">\n  Delivery Model\n</h2>";
        assert_eq!(
            retune(block, "Delivery Model"),
            "<h2 className=\"text-white\">\n  Delivery Model\n</h2>"
        );
    }

    #[test]
    fn test_muted_text_everywhere() {
        let block = r#"<p className="text-lg text-gray-text max-w-2xl">a</p>
<ul className="space-y-3 text-gray-text text-sm"><li>b</li></ul>"#;
        assert_eq!(
            retune(block, "Program Objectives"),
            r#"<p className="text-lg text-white/80 max-w-2xl">a</p>
<ul className="space-y-3 text-white/80 text-sm"><li>b</li></ul>"#
        );
    }

    #[test]
    fn test_card_headings_and_paragraphs() {
        let block = r#"<h3 className="text-lg font-bold text-foreground mb-2">Title</h3>
<p className="text-gray-text dark:text-gray-text text-sm">Body</p>"#;
        let result = retune(block, "Program Objectives");

        assert!(result.contains(r#"<h3 className="text-lg font-bold text-white mb-2">"#));
        assert!(!result.contains("text-foreground"));
        // one swap per attribute in the general pass, the paragraph pass takes the other
        assert!(result.contains(r#"<p className="text-white/80 dark:text-white/80 text-sm">"#));
    }

    #[test]
    fn test_idempotent() {
        let block = r#"<h2 className="text-foreground">Program Objectives</h2><p className="text-gray-text">x</p>"#;
        let once = retune(block, "Program Objectives");
        assert_eq!(retune(&once, "Program Objectives"), once);
    }
}
