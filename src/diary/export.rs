//! Plain-text rendering of the diary for export.

use super::DiaryEntry;
use crate::constants::{EXPORT_DIVIDER_CHAR, EXPORT_DIVIDER_WIDTH, EXPORT_TITLE, UNKNOWN_DATE};

/// Renders all entries, most recent first.
///
/// "Most recent" is positional: the last appended entry comes first, matching
/// the order of the `list` view. Each entry is a `Date:`, `Text:` and
/// `Emotion:` line followed by a divider and a blank line.
pub fn render(entries: &[DiaryEntry]) -> String {
    let divider: String = std::iter::repeat(EXPORT_DIVIDER_CHAR)
        .take(EXPORT_DIVIDER_WIDTH)
        .collect();

    let mut out = format!("{}\n\n", EXPORT_TITLE);
    for entry in entries.iter().rev() {
        let date = if entry.timestamp.is_empty() {
            UNKNOWN_DATE
        } else {
            entry.timestamp.as_str()
        };
        out.push_str(&format!(
            "Date: {}\nText: {}\nEmotion: {}\n{}\n\n",
            date, entry.text, entry.emotion, divider
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, emotion: &str, timestamp: &str) -> DiaryEntry {
        DiaryEntry {
            text: text.to_string(),
            emotion: emotion.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_render_empty_diary_has_only_title() {
        assert_eq!(render(&[]), format!("{}\n\n", EXPORT_TITLE));
    }

    #[test]
    fn test_render_most_recent_first() {
        let entries = vec![
            entry("First day", "joy", "2024-01-01 09:00:00"),
            entry("Second day", "sadness", "2024-01-02 21:30:00"),
        ];

        let rendered = render(&entries);
        let second = rendered.find("Text: Second day").expect("second entry rendered");
        let first = rendered.find("Text: First day").expect("first entry rendered");
        assert!(second < first);

        assert!(rendered.contains("Date: 2024-01-02 21:30:00\nText: Second day\nEmotion: sadness\n"));
        let divider = EXPORT_DIVIDER_CHAR.to_string().repeat(EXPORT_DIVIDER_WIDTH);
        assert_eq!(rendered.matches(&format!("\n{}\n\n", divider)).count(), 2);
    }

    #[test]
    fn test_render_missing_date() {
        let rendered = render(&[entry("Undated", "joy", "")]);
        assert!(rendered.contains(&format!("Date: {}\n", UNKNOWN_DATE)));
    }
}
