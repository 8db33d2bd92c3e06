use tracing::debug;

use super::cards::retune_cards;
use super::contrast::ContrastRetune;
use super::inject::inject_video;
use crate::parser::SectionLocator;

/// A page section that receives a background video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTarget {
    pub heading: &'static str,
    pub video_src: &'static str,
}

/// Sections are processed in this order
pub const SECTION_TARGETS: [SectionTarget; 2] = [
    SectionTarget {
        heading: "Program Objectives",
        video_src: "/video 1.mp4",
    },
    SectionTarget {
        heading: "Delivery Model",
        video_src: "/video 2.mp4",
    },
];

struct PreparedTarget {
    target: SectionTarget,
    contrast: ContrastRetune,
}

/// Injects background videos into the known page sections of a file
pub struct VideoInjector {
    locator: SectionLocator,
    targets: Vec<PreparedTarget>,
}

impl VideoInjector {
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_targets(&SECTION_TARGETS)
    }

    pub fn with_targets(targets: &[SectionTarget]) -> Result<Self, regex::Error> {
        let targets = targets
            .iter()
            .map(|target| {
                Ok(PreparedTarget {
                    target: *target,
                    contrast: ContrastRetune::new(target.heading)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            locator: SectionLocator::new(),
            targets,
        })
    }

    /// True if the content already carries any of the target videos
    pub fn already_applied(&self, content: &str) -> bool {
        self.targets
            .iter()
            .any(|prepared| content.contains(prepared.target.video_src))
    }

    /// Transform every target section found in `content`.
    ///
    /// Returns `None` when the file already has a video or no section
    /// changed. Each section is located again in the spliced text, so earlier
    /// splices never leave stale offsets behind.
    pub fn process(&self, content: &str) -> Option<String> {
        if self.already_applied(content) {
            debug!("video already present, skipping");
            return None;
        }

        let mut text = content.to_string();
        let mut changed = false;

        for prepared in &self.targets {
            let SectionTarget { heading, video_src } = prepared.target;

            let Some(section) = self.locator.locate(&text, heading) else {
                debug!(heading, "section not found");
                continue;
            };

            let block = section.text(&text);
            let transformed = inject_video(block, video_src);
            let transformed = retune_cards(&transformed);
            let transformed = prepared.contrast.apply(&transformed);

            if transformed != block {
                text = section.splice(&text, &transformed);
                changed = true;
            }
        }

        changed.then_some(text)
    }
}
