pub mod section;
pub mod types;

pub use section::SectionLocator;
pub use types::{ContainerMarkers, SectionBlock, TEMPLATE_MARKERS};
