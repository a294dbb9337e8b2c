//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every function returns a `String`
//! so output can be asserted on in tests; printing happens in `commands.rs`.
//!
//! ## List Layout
//!
//! ```text
//! 3f2a9c1e  Groceries                                         #home
//! 77b0d412  Work plan                                         #work #q3
//! ```
//!
//! Ids are shortened to `SHORT_ID_LEN` characters; the API accepts any unique
//! prefix, so the short form can be pasted back into `view`. Titles are
//! truncated so that the tag column fits in `LINE_WIDTH`.

use super::styles;
use tagnotesapp::api::{CmdMessage, MessageLevel};
use tagnotesapp::commands::{DanglingRefs, NoteDetail};
use tagnotesapp::model::{SimplifiedNote, Tag};
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const SHORT_ID_LEN: usize = 8;
const GAP: &str = "  ";
const MIN_TITLE_WIDTH: usize = 12;

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

fn tag_list(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t.label))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_notes(notes: &[SimplifiedNote]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let mut out = String::new();
    for note in notes {
        let id = format!("{:<width$}", short_id(note.id.as_str()), width = SHORT_ID_LEN);
        let tags = tag_list(&note.tags);

        let fixed = SHORT_ID_LEN + GAP.len() * 2 + tags.width();
        let available = LINE_WIDTH.saturating_sub(fixed).max(MIN_TITLE_WIDTH);
        let title = truncate_to_width(&note.title, available);
        let padding = available.saturating_sub(title.width());

        out.push_str(&format!(
            "{}{}{}{}{}{}\n",
            styles::ID.apply_to(id),
            GAP,
            title,
            " ".repeat(padding),
            GAP,
            styles::TAG.apply_to(tags)
        ));
    }
    out
}

pub fn render_note_detail(detail: &NoteDetail) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", styles::TITLE.apply_to(&detail.note.title)));
    out.push_str(&format!(
        "{}{}{}\n",
        styles::ID.apply_to(detail.note.id.as_str()),
        GAP,
        styles::MUTED.apply_to(detail.updated_at.format("%Y-%m-%d %H:%M"))
    ));
    if !detail.note.tags.is_empty() {
        out.push_str(&format!(
            "{}\n",
            styles::TAG.apply_to(tag_list(&detail.note.tags))
        ));
    }
    out.push_str(&format!("{}\n", styles::SEPARATOR.apply_to("-".repeat(32))));
    if !detail.content.is_empty() {
        out.push_str(&detail.content);
        if !detail.content.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

pub fn render_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| {
            let id = format!("{:<width$}", short_id(t.id.as_str()), width = SHORT_ID_LEN);
            format!(
                "{}{}{}\n",
                styles::ID.apply_to(id),
                GAP,
                styles::TAG.apply_to(&t.label)
            )
        })
        .collect()
}

pub fn render_dangling(dangling: &[DanglingRefs]) -> String {
    dangling
        .iter()
        .map(|d| {
            let ids: Vec<&str> = d.tag_ids.iter().map(|id| id.as_str()).collect();
            format!(
                "{}{}{}{}{}\n",
                styles::ID.apply_to(short_id(d.note_id.as_str())),
                GAP,
                d.title,
                GAP,
                styles::MUTED.apply_to(format!("missing: {}", ids.join(", ")))
            )
        })
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let style = match m.level {
                MessageLevel::Info => &*styles::INFO,
                MessageLevel::Success => &*styles::SUCCESS,
                MessageLevel::Warning => &*styles::WARNING,
            };
            format!("{}\n", style.apply_to(&m.content))
        })
        .collect()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn plain() {
        console::set_colors_enabled(false);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("a"), "a");
        assert_eq!(short_id("3f2a9c1e-1111-2222"), "3f2a9c1e");
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_notes(&[]), "No notes found.\n");
    }

    #[test]
    fn test_render_notes_shows_title_and_tags() {
        plain();
        let notes = vec![SimplifiedNote::new(
            "1",
            "Groceries",
            vec![Tag::new("a", "home"), Tag::new("b", "errands")],
        )];
        let out = render_notes(&notes);
        assert!(out.starts_with("1       "));
        assert!(out.contains("Groceries"));
        assert!(out.trim_end().ends_with("#home #errands"));
        assert_eq!(out.lines().next().unwrap().width(), LINE_WIDTH);
    }

    #[test]
    fn test_render_notes_truncates_long_titles() {
        plain();
        let notes = vec![SimplifiedNote::new("1", "x".repeat(200), vec![])];
        let out = render_notes(&notes);
        assert!(out.contains('…'));
        assert_eq!(out.lines().next().unwrap().width(), LINE_WIDTH);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_render_note_detail() {
        plain();
        let when = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
        let detail = NoteDetail {
            note: SimplifiedNote::new("1", "Groceries", vec![Tag::new("a", "home")]),
            content: "Milk, Eggs".to_string(),
            created_at: when,
            updated_at: when,
        };
        let out = render_note_detail(&detail);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Groceries");
        assert_eq!(lines[1], "1  2024-01-15 14:30");
        assert_eq!(lines[2], "#home");
        assert_eq!(lines[4], "Milk, Eggs");
    }

    #[test]
    fn test_render_tags() {
        plain();
        let out = render_tags(&[Tag::new("a", "home"), Tag::new("b", "work")]);
        assert_eq!(out, "a         home\nb         work\n");
    }

    #[test]
    fn test_render_messages() {
        plain();
        let out = render_messages(&[
            CmdMessage::success("Created tag 'work'"),
            CmdMessage::warning("Tag 'x' not found"),
        ]);
        assert_eq!(out, "Created tag 'work'\nTag 'x' not found\n");
    }
}
