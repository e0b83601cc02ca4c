//! Structured content of the notes report, independent of output format.

use chrono::DateTime;
use chrono::Utc;

use crate::blend::REFLECTION_QUESTIONS;
use crate::state::PairId;
use crate::state::WheelState;

pub const REPORT_TITLE: &str = "Dominant themes: reflection notes";
/// Printed in place of an unanswered question.
pub const BLANK_ANSWER: &str = "–";

#[derive(Debug, Clone, PartialEq)]
pub struct NotesReport {
    pub title: String,
    pub exported_at: DateTime<Utc>,
    /// `(rank, trademarked name)` for each occupied slot.
    pub ranked: Vec<(usize, String)>,
    pub snapshot_file: Option<String>,
    pub pages: Vec<PairPage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairPage {
    pub pair: PairId,
    pub title: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub entries: Vec<QuestionAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswer {
    pub question: &'static str,
    pub answer: String,
}

pub fn build_report(
    wheel: &WheelState,
    exported_at: DateTime<Utc>,
    snapshot_file: Option<&str>,
) -> NotesReport {
    let ranked = wheel
        .selection
        .slots()
        .iter()
        .enumerate()
        .filter_map(|(idx, key)| key.map(|key| (idx + 1, key.trademarked_name())))
        .collect();

    let pages = wheel
        .notes
        .iter()
        .map(|(pair, notes)| PairPage {
            pair: pair.clone(),
            title: pair_title(pair),
            updated_at: notes.updated_at(),
            entries: REFLECTION_QUESTIONS
                .iter()
                .zip(notes.answers.iter())
                .map(|(question, answer)| QuestionAnswer {
                    question: *question,
                    answer: display_answer(answer),
                })
                .collect(),
        })
        .collect();

    NotesReport {
        title: REPORT_TITLE.to_string(),
        exported_at,
        ranked,
        snapshot_file: snapshot_file.map(str::to_string),
        pages,
    }
}

fn pair_title(pair: &PairId) -> String {
    match pair.keys() {
        Some((a, b)) => format!("{} + {}", a.trademarked_name(), b.trademarked_name()),
        None => pair.to_string(),
    }
}

fn display_answer(answer: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        BLANK_ANSWER.to_string()
    } else {
        trimmed.to_string()
    }
}
