//! Human-readable stage text
//!
//! Times of a minute or more render as `M:SS`, shorter times as bare seconds.

use std::fmt;

use super::parser::{RangeMatch, is_digits};
use super::{Stage, StageKind};

/// Format seconds for display: `65` → `1:05`, `45` → `45`.
pub fn format_time(seconds: u32) -> String {
    if seconds >= 60 {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    } else {
        seconds.to_string()
    }
}

/// Reformat a stage's original text with minute-aware times.
///
/// Ranges keep the separator glyph they were written with. Text that is not a
/// stage part is returned unchanged.
pub fn format_stage_text(original_text: &str) -> String {
    if let Some(range) = RangeMatch::find(original_text)
        && let (Ok(min), Ok(max)) = (range.min.parse::<u32>(), range.max.parse::<u32>())
    {
        return format!("{}{}{}", format_time(min), range.separator, format_time(max));
    }

    if is_digits(original_text)
        && let Ok(secs) = original_text.parse::<u32>()
    {
        return format_time(secs);
    }

    original_text.to_string()
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_stage_text(&self.original_text))
    }
}

/// Heading for the current stage target
pub fn target_label(stage: Option<&Stage>) -> String {
    match stage.map(|s| s.kind) {
        Some(StageKind::Range { min, max }) => format!("Target: {min}s - {max}s"),
        Some(StageKind::Fixed { duration }) => format!("Target: {duration}s"),
        None => "Target: --".to_string(),
    }
}

/// Render the stage bar, bracketing the current stage.
///
/// The end of a rinse group is marked with `|` instead of an arrow.
pub fn stage_strip(stages: &[Stage], current: Option<usize>) -> String {
    let mut out = String::new();

    for (index, stage) in stages.iter().enumerate() {
        if Some(index) == current {
            out.push_str(&format!("[{stage}]"));
        } else {
            out.push_str(&stage.to_string());
        }

        if let Some(next) = stages.get(index + 1) {
            if stage.is_rinse && !next.is_rinse {
                out.push_str(" | ");
            } else {
                out.push_str(" → ");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::parse_config;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0");
        assert_eq!(format_time(59), "59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(180), "3:00");
    }

    #[test]
    fn test_format_stage_text() {
        assert_eq!(format_stage_text("60-90"), "1:00-1:30");
        assert_eq!(format_stage_text("25 – 30"), "25–30");
        assert_eq!(format_stage_text("120"), "2:00");
        assert_eq!(format_stage_text("soon"), "soon");
    }

    #[test]
    fn test_target_label() {
        let stages = parse_config("25-30 -> 60").unwrap();
        assert_eq!(target_label(stages.first()), "Target: 25s - 30s");
        assert_eq!(target_label(stages.get(1)), "Target: 60s");
        assert_eq!(target_label(None), "Target: --");
    }

    #[test]
    fn test_stage_strip_marks_rinse_boundary() {
        let stages = parse_config("(3-5 -> 5-7) -> 10 -> 90").unwrap();
        assert_eq!(
            stage_strip(&stages, Some(2)),
            "3-5 → 5-7 | [10] → 1:30"
        );
        assert_eq!(stage_strip(&[], None), "");
    }
}
