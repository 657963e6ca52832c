//! Note Text Helpers
//!
//! Plain-text previews, counts and date labels shown on cards and the home
//! page. Time-dependent helpers take `now` so callers pass `Local::now()`.

use std::fmt::Display;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use pulldown_cmark::{Event, Parser, TagEnd};

use crate::models::Note;

/// Markdown rendered down to its text, whitespace collapsed, cut to
/// `max_chars` with a trailing "..."
pub fn preview_text(content: &str, max_chars: usize) -> String {
    let mut text = String::new();
    for event in Parser::new(content) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak | Event::Rule => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => text.push(' '),
            _ => {}
        }
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// "Just now", "N hours ago", "Yesterday", then "Oct 19" (", 2025" when the
/// year differs from `now`)
pub fn format_relative<Tz: TimeZone>(at: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let local = at.with_timezone(&now.timezone());
    let hours = now.clone().signed_duration_since(local.clone()).num_minutes() / 60;

    match hours {
        h if h < 1 => "Just now".to_string(),
        1 => "1 hour ago".to_string(),
        h if h < 24 => format!("{} hours ago", h),
        h if h < 48 => "Yesterday".to_string(),
        _ if local.year() != now.year() => local.format("%b %-d, %Y").to_string(),
        _ => local.format("%b %-d").to_string(),
    }
}

/// Day heading for grouped lists, e.g. "October 19, 2026"
pub fn date_group_label<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%B %-d, %Y").to_string()
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Home page counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoteStats {
    pub total: usize,
    pub words: usize,
    /// Created within the last 7 days
    pub this_week: usize,
    /// Updated on `now`'s calendar day
    pub updated_today: usize,
}

impl NoteStats {
    pub fn compute<Tz: TimeZone>(notes: &[Note], now: &DateTime<Tz>) -> Self {
        let week_ago = now.clone() - Duration::days(7);
        let today = now.date_naive();
        let tz = now.timezone();

        Self {
            total: notes.len(),
            words: notes.iter().map(|n| word_count(&n.content)).sum(),
            this_week: notes.iter().filter(|n| n.created_at > week_ago).count(),
            updated_today: notes
                .iter()
                .filter(|n| n.updated_at.with_timezone(&tz).date_naive() == today)
                .count(),
        }
    }
}

fn newest_first(notes: &[Note]) -> Vec<Note> {
    let mut sorted = notes.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted
}

/// Most recently updated notes
pub fn recent_notes(notes: &[Note], limit: usize) -> Vec<Note> {
    let mut sorted = newest_first(notes);
    sorted.truncate(limit);
    sorted
}

/// Notes bucketed by update day, newest day first
pub fn group_by_date<Tz: TimeZone>(notes: &[Note], tz: &Tz) -> Vec<(String, Vec<Note>)>
where
    Tz::Offset: Display,
{
    let mut groups: Vec<(String, Vec<Note>)> = Vec::new();
    for note in newest_first(notes) {
        let label = date_group_label(&note.updated_at, tz);
        match groups.last_mut() {
            Some((last, bucket)) if *last == label => bucket.push(note),
            _ => groups.push((label, vec![note])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{note, ts};
    use chrono::FixedOffset;

    #[test]
    fn test_preview_strips_markdown() {
        let md = "# Plan\n\n* **first** item\n* `second`\n\nSee [docs](http://x)";
        assert_eq!(preview_text(md, 120), "Plan first item second See docs");
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        let long = "é".repeat(130);
        let preview = preview_text(&long, 120);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 123);
        assert_eq!(preview_text("short", 120), "short");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\n\nthree  "), 3);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_format_relative() {
        let now = ts(19, 12);
        assert_eq!(format_relative(&ts(19, 12), &now), "Just now");
        assert_eq!(format_relative(&ts(19, 11), &now), "1 hour ago");
        assert_eq!(format_relative(&ts(19, 7), &now), "5 hours ago");
        assert_eq!(format_relative(&ts(18, 6), &now), "Yesterday");
        assert_eq!(format_relative(&ts(10, 12), &now), "Oct 10");

        let last_year = Utc.with_ymd_and_hms(2025, 3, 4, 8, 0, 0).unwrap();
        assert_eq!(format_relative(&last_year, &now), "Mar 4, 2025");
    }

    #[test]
    fn test_format_relative_uses_local_calendar() {
        // 23:00 UTC on Dec 31 is already next year at UTC+2
        let at = Utc.with_ymd_and_hms(2025, 12, 31, 23, 0, 0).unwrap();
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap();
        assert_eq!(format_relative(&at, &now), "Jan 1");
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(16), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
    }

    #[test]
    fn test_stats() {
        let mut old = note(1, "old", None);
        old.content = "one two three".into();
        old.created_at = ts(1, 8);
        old.updated_at = ts(19, 8);

        let mut fresh = note(2, "fresh", None);
        fresh.content = "four".into();
        fresh.created_at = ts(15, 8);
        fresh.updated_at = ts(15, 8);

        let stats = NoteStats::compute(&[old, fresh], &ts(19, 12));
        assert_eq!(
            stats,
            NoteStats { total: 2, words: 4, this_week: 1, updated_today: 1 }
        );
    }

    #[test]
    fn test_recent_and_grouping() {
        let mut a = note(1, "a", None);
        a.updated_at = ts(17, 9);
        let mut b = note(2, "b", None);
        b.updated_at = ts(19, 9);
        let mut c = note(3, "c", None);
        c.updated_at = ts(19, 15);

        let notes = vec![a, b, c];
        let recent: Vec<i64> = recent_notes(&notes, 2).iter().map(|n| n.id).collect();
        assert_eq!(recent, vec![3, 2]);

        let groups = group_by_date(&notes, &Utc);
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["October 19, 2026", "October 17, 2026"]);
        assert_eq!(groups[0].1.len(), 2);
    }
}
