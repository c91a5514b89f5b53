use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

pub const TRANSCRIPT_PREVIEW_CHARS: usize = 500;
pub const COMMENT_PREVIEW_COUNT: usize = 5;

// Cuts on char boundaries, appends "..." only when something was dropped.
pub fn transcript_preview(transcript: &str, max_chars: usize) -> String {
    let mut chars = transcript.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}

/// First `max` comments plus how many were left out.
pub fn comment_preview(comments: &[String], max: usize) -> (&[String], usize) {
    let shown = comments.len().min(max);
    (&comments[..shown], comments.len() - shown)
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

pub fn scroll_into_view(element_id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
    else {
        log::debug!("No element #{element_id} to scroll to");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_transcript_is_unchanged() {
        assert_eq!(transcript_preview("hello", 500), "hello");
    }

    #[test]
    fn transcript_at_limit_has_no_ellipsis() {
        let text = "a".repeat(500);
        assert_eq!(transcript_preview(&text, 500), text);
    }

    #[test]
    fn long_transcript_is_cut_with_ellipsis() {
        let text = "b".repeat(501);
        let preview = transcript_preview(&text, 500);
        assert_eq!(preview.len(), 503);
        assert!(preview.ends_with("b..."));
    }

    #[test]
    fn transcript_cut_respects_multibyte_chars() {
        assert_eq!(transcript_preview("ééé", 2), "éé...");
    }

    #[test]
    fn comment_preview_counts_remaining() {
        let comments: Vec<String> = (0..8).map(|i| format!("c{i}")).collect();
        let (shown, remaining) = comment_preview(&comments, 5);
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[4], "c4");
        assert_eq!(remaining, 3);
    }

    #[test]
    fn comment_preview_with_few_comments() {
        let comments = vec!["only".to_string()];
        let (shown, remaining) = comment_preview(&comments, 5);
        assert_eq!(shown, &comments[..]);
        assert_eq!(remaining, 0);
    }
}
