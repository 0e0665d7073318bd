use chrono::Utc;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width (not a char count), adding an ellipsis when
/// something was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push_str("...");
    result
}

/// Relative time for DM rows, e.g. "2h ago".
pub fn format_relative_time(timestamp: i64) -> String {
    let diff = (Utc::now().timestamp() - timestamp).max(0) as u64;

    if diff < 60 {
        "just now".to_string()
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else if diff < 86400 {
        format!("{}h ago", diff / 3600)
    } else if diff < 604800 {
        format!("{}d ago", diff / 86400)
    } else {
        format!("{}w ago", diff / 604800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("CRATE DIG", 20), "CRATE DIG");
        assert_eq!(truncate_to_width("CRATE DIG & COFFEE", 10), "CRATE D...");
        assert_eq!(truncate_to_width("anything", 2), "..");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn old_timestamps_format_in_weeks() {
        let two_weeks_ago = Utc::now().timestamp() - 14 * 86400;
        assert_eq!(format_relative_time(two_weeks_ago), "2w ago");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let future = Utc::now().timestamp() + 3600;
        assert_eq!(format_relative_time(future), "just now");
    }
}
