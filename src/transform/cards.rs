use once_cell::sync::Lazy;

use super::{apply_rules, Rule};

/// Known card class lists and their video-background variants. Matches are
/// exact; a card with any extra or reordered class is left alone.
pub const CARD_RULES: &[(&str, &str)] = &[
    // objective cards
    (
        r#"className="bg-secondary/30 rounded-xl p-6 shadow-lg hover:shadow-xl transition-shadow border border-border""#,
        r#"className="bg-black/35 backdrop-blur-sm rounded-xl p-6 shadow-lg hover:shadow-xl transition-shadow border border-white/10""#,
    ),
    // delivery cards
    (
        r#"className="bg-secondary/30 rounded-2xl p-8 shadow-lg border border-border""#,
        r#"className="bg-black/35 backdrop-blur-sm rounded-2xl p-8 shadow-lg border border-white/10""#,
    ),
];

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    CARD_RULES
        .iter()
        .map(|(needle, replacement)| Rule::literal(*needle, *replacement))
        .collect()
});

/// Swap known card containers to translucent dark, blurred backgrounds
pub fn retune_cards(block: &str) -> String {
    apply_rules(block, &RULES)
}
