use tracing::debug;

use super::{ContainerMarkers, SectionBlock};

/// Locates section containers by heading text using a depth-counting scan
/// over container markers.
pub struct SectionLocator {
    markers: ContainerMarkers,
}

impl Default for SectionLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionLocator {
    pub fn new() -> Self {
        Self::with_markers(ContainerMarkers::default())
    }

    pub fn with_markers(markers: ContainerMarkers) -> Self {
        Self { markers }
    }

    /// Find the section container enclosing the first occurrence of `heading`.
    ///
    /// Returns `None` when the heading is absent, when no section start
    /// precedes it, or when the container never closes.
    pub fn locate(&self, content: &str, heading: &str) -> Option<SectionBlock> {
        let heading_pos = content.find(heading)?;

        let Some(start) = content[..heading_pos].rfind(self.markers.section_start) else {
            debug!(heading, "no section start before heading");
            return None;
        };

        let end = self.find_block_end(content, start)?;
        debug!(heading, start, end, "located section block");

        Some(SectionBlock { start, end })
    }

    /// Scan forward from `start` until container depth returns to zero.
    ///
    /// Returns the offset just past the closing marker, or `None` if the
    /// text runs out first.
    pub fn find_block_end(&self, content: &str, start: usize) -> Option<usize> {
        let open = self.markers.open;
        let close = self.markers.close;

        let mut depth: i64 = 0;
        let mut pos = start;

        while pos < content.len() {
            let rest = &content[pos..];
            let next_close = rest.find(close)?;
            let next_open = rest.find(open);

            match next_open {
                Some(next_open) if next_open < next_close => {
                    depth += 1;
                    pos += next_open + open.len();
                }
                _ => {
                    depth -= 1;
                    pos += next_close + close.len();
                    if depth <= 0 {
                        return Some(pos);
                    }
                }
            }
        }

        None
    }
}
