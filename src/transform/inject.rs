use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static OPENING_DIV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<div[^>]*>").expect("Failed to compile opening div pattern"));

static CLASS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"className="([^"]*)""#).expect("Failed to compile class pattern"));

static CLASS_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\s*)(\S+)").expect("Failed to compile class token pattern"));

static CONTENT_WRAPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(<div\s+className=")(max-w-[^"]*mx-auto[^"]*)(")"#)
        .expect("Failed to compile content wrapper pattern")
});

/// Classes the container needs so the absolutely positioned video stays inside it
const POSITIONING_CLASSES: [&str; 2] = ["relative", "overflow-hidden"];

/// Default card fill; it would hide the video
const CARD_BACKGROUND_CLASS: &str = "bg-secondary/30";

const STACKING_CLASS: &str = "z-10";

/// Insert a background video and dark overlay right after the block's first
/// opening container tag.
///
/// The block is returned unchanged if it has no opening container or
/// already references `video_src`.
pub fn inject_video(block: &str, video_src: &str) -> String {
    let Some(opening) = OPENING_DIV.find(block) else {
        return block.to_string();
    };

    if block.contains(video_src) {
        return block.to_string();
    }

    let opening_tag = position_container(opening.as_str());
    let rest = lift_content_wrapper(&block[opening.end()..]);
    let media = video_markup(video_src);

    let mut result = String::with_capacity(block.len() + media.len() + 32);
    result.push_str(&block[..opening.start()]);
    result.push_str(&opening_tag);
    result.push_str(&media);
    result.push_str(&rest);
    result
}

/// Make the container a clipping positioning context and drop its card fill
fn position_container(tag: &str) -> String {
    let Some(classes) = CLASS_ATTR.captures(tag).and_then(|caps| caps.get(1)) else {
        // no className at all: add one before the closing '>'
        let body = tag.strip_suffix('>').unwrap_or(tag);
        return format!(r#"{} className="{}">"#, body, POSITIONING_CLASSES.join(" "));
    };

    let existing: Vec<&str> = classes.as_str().split_whitespace().collect();
    let missing: Vec<&str> = POSITIONING_CLASSES
        .iter()
        .copied()
        .filter(|class| !existing.contains(class))
        .collect();

    // drop the card fill together with its leading whitespace, keep all other spacing
    let mut kept = String::with_capacity(classes.len());
    for caps in CLASS_TOKEN.captures_iter(classes.as_str()) {
        if &caps[2] != CARD_BACKGROUND_CLASS {
            kept.push_str(&caps[0]);
        }
    }
    let kept = kept.trim();

    let merged = match (missing.is_empty(), kept.is_empty()) {
        (true, _) => kept.to_string(),
        (false, true) => missing.join(" "),
        (false, false) => format!("{} {}", missing.join(" "), kept),
    };

    format!(
        "{}{}{}",
        &tag[..classes.start()],
        merged,
        &tag[classes.end()..]
    )
}

/// Lift the first centered max-width wrapper above the video layers
fn lift_content_wrapper(rest: &str) -> String {
    CONTENT_WRAPPER
        .replacen(rest, 1, |caps: &Captures| {
            let classes = &caps[2];
            if classes.contains(STACKING_CLASS) {
                format!("{}{}{}", &caps[1], classes, &caps[3])
            } else {
                format!("{}relative {} {}{}", &caps[1], STACKING_CLASS, classes, &caps[3])
            }
        })
        .into_owned()
}

fn video_markup(video_src: &str) -> String {
    format!(
        concat!(
            "\n        <video\n",
            "          className=\"absolute inset-0 w-full h-full object-cover pointer-events-none\"\n",
            "          src=\"{}\"\n",
            "          autoPlay\n",
            "          muted\n",
            "          loop\n",
            "          playsInline\n",
            "        />\n",
            "        <div className=\"absolute inset-0 bg-black/55\" />\n",
        ),
        video_src
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTION: &str = r#"<div ref={addToRefs} className="py-16 lg:py-24 bg-secondary/30">
        <div className="max-w-5xl mx-auto px-4">
          <h2 className="text-foreground">Program Objectives</h2>
        </div>
      </div>"#;

    fn opening_tag(block: &str) -> &str {
        OPENING_DIV.find(block).unwrap().as_str()
    }

    #[test]
    fn test_container_classes() {
        let result = inject_video(SECTION, "/video 1.mp4");
        let opening = opening_tag(&result);

        assert_eq!(
            opening,
            r#"<div ref={addToRefs} className="relative overflow-hidden py-16 lg:py-24">"#
        );
        assert!(!result.contains("bg-secondary/30"));
    }

    #[test]
    fn test_media_and_overlay_inserted_once() {
        let result = inject_video(SECTION, "/video 1.mp4");

        assert_eq!(result.matches("<video").count(), 1);
        assert_eq!(result.matches(r#"src="/video 1.mp4""#).count(), 1);
        assert_eq!(result.matches("bg-black/55").count(), 1);
        for attribute in ["autoPlay", "muted", "loop", "playsInline", "pointer-events-none"] {
            assert!(result.contains(attribute), "missing {}", attribute);
        }
    }

    #[test]
    fn test_media_follows_opening_tag() {
        let result = inject_video(SECTION, "/video 1.mp4");
        let opening = opening_tag(&result);
        assert!(result[opening.len()..].starts_with("\n        <video\n"));
    }

    #[test]
    fn test_wrapper_lifted() {
        let result = inject_video(SECTION, "/video 1.mp4");
        assert!(result.contains(r#"<div className="relative z-10 max-w-5xl mx-auto px-4">"#));
    }

    #[test]
    fn test_wrapper_with_stacking_untouched() {
        let block = r#"<div ref={addToRefs}><div className="max-w-5xl mx-auto z-10"></div></div>"#;
        let result = inject_video(block, "/v.mp4");
        assert!(result.contains(r#"<div className="max-w-5xl mx-auto z-10">"#));
        assert!(!result.contains("relative z-10 max-w"));
    }

    #[test]
    fn test_only_first_wrapper_lifted() {
        let block = r#"<div ref={addToRefs}><div className="max-w-5xl mx-auto"></div><div className="max-w-3xl mx-auto"></div></div>"#;
        let result = inject_video(block, "/v.mp4");
        assert_eq!(result.matches("relative z-10").count(), 1);
        assert!(result.contains(r#"<div className="max-w-3xl mx-auto">"#));
    }

    #[test]
    fn test_existing_positioning_not_duplicated() {
        let block = r#"<div ref={addToRefs} className="relative py-16"><p>x</p></div>"#;
        let result = inject_video(block, "/v.mp4");
        let opening = opening_tag(&result);

        assert_eq!(opening, r#"<div ref={addToRefs} className="overflow-hidden relative py-16">"#);
        assert_eq!(opening.matches("relative").count(), 1);
    }

    #[test]
    fn test_class_spacing_preserved() {
        let block = "<div ref={addToRefs} className=\"py-16  lg:py-24\n   bg-secondary/30\"><p>x</p></div>";
        let result = inject_video(block, "/v.mp4");
        let opening = opening_tag(&result);

        assert_eq!(
            opening,
            "<div ref={addToRefs} className=\"relative overflow-hidden py-16  lg:py-24\">"
        );
    }

    #[test]
    fn test_card_fill_variants_kept() {
        let block = r#"<div ref={addToRefs} className="bg-secondary/30 hover:bg-secondary/30 py-8"><p>x</p></div>"#;
        let result = inject_video(block, "/v.mp4");
        let opening = opening_tag(&result);

        assert_eq!(
            opening,
            r#"<div ref={addToRefs} className="relative overflow-hidden hover:bg-secondary/30 py-8">"#
        );
    }

    #[test]
    fn test_missing_class_attribute() {
        let block = "<div ref={addToRefs}><p>x</p></div>";
        let result = inject_video(block, "/v.mp4");
        assert!(result.starts_with(r#"<div ref={addToRefs} className="relative overflow-hidden">"#));
    }

    #[test]
    fn test_already_injected_is_unchanged() {
        let once = inject_video(SECTION, "/video 1.mp4");
        assert_eq!(inject_video(&once, "/video 1.mp4"), once);
    }

    #[test]
    fn test_no_container_is_unchanged() {
        let block = "<section><p>no containers</p></section>";
        assert_eq!(inject_video(block, "/v.mp4"), block);
    }
}
