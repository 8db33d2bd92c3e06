pub const OLD_BRAND: &str = "IFFAI";
pub const NEW_BRAND: &str = "IAISO";

/// Result of renaming the brand token in one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRename {
    pub content: String,
    pub occurrences: usize,
}

/// Replace every exact-case occurrence of [`OLD_BRAND`].
///
/// Returns `None` when the token does not occur.
pub fn rename(content: &str) -> Option<BrandRename> {
    rename_token(content, OLD_BRAND, NEW_BRAND)
}

pub fn rename_token(content: &str, from: &str, to: &str) -> Option<BrandRename> {
    let occurrences = content.matches(from).count();
    if occurrences == 0 {
        return None;
    }

    Some(BrandRename {
        content: content.replace(from, to),
        occurrences,
    })
}
