//! Markdown rendering of the notes report: a title page, then one page per
//! explored pair.

use std::fmt::Write as _;

use csb_core::report::NotesReport;
use csb_core::report::PairPage;

/// Separates pages. Renders as a rule and forces a break when printed.
pub const PAGE_BREAK: &str = "\n<div style=\"page-break-after: always\"></div>\n\n---\n\n";
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn render_markdown(report: &NotesReport) -> String {
    let mut out = String::new();
    write_title_page(&mut out, report);
    for page in &report.pages {
        out.push_str(PAGE_BREAK);
        write_pair_page(&mut out, page);
    }
    out
}

fn write_title_page(out: &mut String, report: &NotesReport) {
    let _ = writeln!(out, "# {}", report.title);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Exported {}",
        report.exported_at.format(EXPORT_DATE_FORMAT)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Ranked themes");
    let _ = writeln!(out);
    if report.ranked.is_empty() {
        let _ = writeln!(out, "_No themes placed._");
    }
    for (rank, name) in &report.ranked {
        let _ = writeln!(out, "{rank}. {name}");
    }
    if let Some(file) = &report.snapshot_file {
        let _ = writeln!(out);
        let _ = writeln!(out, "![Dominant themes wheel]({file})");
    }
    if report.pages.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "_No pairs explored yet._");
    }
}

fn write_pair_page(out: &mut String, page: &PairPage) {
    let _ = writeln!(out, "## {}", page.title);
    let _ = writeln!(out);
    if let Some(updated) = page.updated_at {
        let _ = writeln!(out, "_Updated {}_", updated.format(EXPORT_DATE_FORMAT));
        let _ = writeln!(out);
    }
    for (idx, entry) in page.entries.iter().enumerate() {
        let _ = writeln!(out, "**{}. {}**", idx + 1, entry.question);
        let _ = writeln!(out);
        for line in entry.answer.lines() {
            let _ = writeln!(out, "> {line}");
        }
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use csb_core::report::build_report;
    use csb_core::report::BLANK_ANSWER;
    use csb_core::PairId;
    use csb_core::SlotTarget;
    use csb_core::ThemeKey;
    use csb_core::WheelState;
    use pretty_assertions::assert_eq;

    use super::*;

    fn exported_at() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("valid date")
    }

    #[test]
    fn title_page_lists_ranked_themes_and_snapshot() {
        let mut wheel = WheelState::new(10);
        wheel.selection.assign(SlotTarget::Slot(0), ThemeKey::Woo);
        wheel.selection.assign(SlotTarget::Slot(1), ThemeKey::Focus);
        let report = build_report(&wheel, exported_at(), Some("wheel.svg"));

        let markdown = render_markdown(&report);
        assert!(markdown.starts_with("# Dominant themes: reflection notes\n"));
        assert!(markdown.contains("Exported 2024-05-01 09:30 UTC"));
        assert!(markdown.contains("1. Woo®\n2. Focus®\n"));
        assert!(markdown.contains("![Dominant themes wheel](wheel.svg)"));
        assert!(markdown.contains("_No pairs explored yet._"));
        assert!(!markdown.contains(PAGE_BREAK));
    }

    #[test]
    fn each_pair_gets_its_own_page_with_blank_markers() {
        let mut wheel = WheelState::new(10);
        wheel.selection.assign(SlotTarget::Slot(0), ThemeKey::Woo);
        wheel.selection.assign(SlotTarget::Slot(1), ThemeKey::Focus);
        wheel.selection.assign(SlotTarget::Slot(2), ThemeKey::Learner);
        wheel.notes.set_answer(
            PairId::new(ThemeKey::Woo, ThemeKey::Focus),
            0,
            "Meetings".to_string(),
            1_714_555_800_000,
        );
        wheel.notes.set_answer(
            PairId::new(ThemeKey::Learner, ThemeKey::Woo),
            3,
            "Line one\nLine two".to_string(),
            1_714_555_800_000,
        );
        let report = build_report(&wheel, exported_at(), None);

        let markdown = render_markdown(&report);
        assert_eq!(markdown.matches(PAGE_BREAK).count(), 2);
        assert!(markdown.contains("## Focus® + Woo®"));
        assert!(markdown.contains("## Learner® + Woo®"));
        assert!(markdown.contains("> Meetings"));
        assert!(markdown.contains("> Line one\n> Line two"));
        assert!(markdown.contains(&format!("> {BLANK_ANSWER}")));
        assert!(markdown.contains("_Updated 2024-05-01 09:30 UTC_"));
        assert!(!markdown.contains("!["));
    }
}
