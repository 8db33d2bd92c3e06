/// Textual signatures used by the balanced container scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerMarkers {
    /// Opening of a top-level page section container
    pub section_start: &'static str,
    /// Opening of any nestable container
    pub open: &'static str,
    /// Closing of any nestable container
    pub close: &'static str,
}

/// Markers for the page templates this tool rewrites
pub const TEMPLATE_MARKERS: ContainerMarkers = ContainerMarkers {
    section_start: "<div ref={addToRefs}",
    open: "<div",
    close: "</div>",
};

impl Default for ContainerMarkers {
    fn default() -> Self {
        TEMPLATE_MARKERS
    }
}

/// Half-open byte range `[start, end)` of a section container within a file.
///
/// Offsets only hold for the content they were located in; after a splice
/// the section must be located again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBlock {
    pub start: usize,
    pub end: usize,
}

impl SectionBlock {
    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }

    /// Replace this block's range in `content` with `replacement`
    pub fn splice(&self, content: &str, replacement: &str) -> String {
        let mut result = String::with_capacity(
            content.len() - (self.end - self.start) + replacement.len(),
        );
        result.push_str(&content[..self.start]);
        result.push_str(replacement);
        result.push_str(&content[self.end..]);
        result
    }
}
