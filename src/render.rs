//! Terminal rendering of a loaded assessment summary.
//!
//! Generates the sectioned text view: header, statistics overview, answers
//! grouped by area, and the follow-up link block. A JSON mode serializes
//! the derived summary for machine consumption.

use crate::locale::{text, MessageKey};
use crate::models::{Answer, AnswerValue, AssessmentResponse, Language, ResponseData};
use crate::summary::{group_by_area, AnswerStats};
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Fixed outbound link targets. The viewer only prints these; opening one
/// counts as an interaction for the reminder.
pub const CERTIFICATION_URL: &str = "https://cadcertification.sw.siemens.com/solid-edge/";
pub const ACADEMY_URL: &str =
    "https://learn.sw.siemens.com/library/solid-edge-for-education-and-community/VyR_oDmjP";
pub const BADGE_DIRECTORY_URL: &str = "https://www.credly.com/organizations/siemens-sw/directory";

/// Generate the complete text summary for a loaded record.
pub fn render_summary(data: &ResponseData) -> String {
    let language = data.response.language;
    let stats = AnswerStats::from_answers(&data.answers);
    let grouped = group_by_area(&data.answers);

    let mut output = String::new();
    output.push_str(&render_header(&data.response, language));
    output.push_str(&render_stats(&stats, language));
    output.push_str(&render_areas(&grouped, language));
    output.push_str(&render_links(language));
    output.push_str(&render_footer(language));
    output
}

/// Header section: title plus record metadata.
fn render_header(response: &AssessmentResponse, language: Language) -> String {
    let mut section = String::new();

    section.push_str(&format!("# {}\n\n", text(MessageKey::AssessmentSummary, language)));
    section.push_str(&format!(
        "{}: {}\n",
        text(MessageKey::EmailLabel, language),
        response.email
    ));
    section.push_str(&format!(
        "{}: {}\n",
        text(MessageKey::LanguageLabel, language),
        text(MessageKey::LanguageName, language)
    ));
    section.push_str(&format!(
        "{}: {}\n\n",
        text(MessageKey::DateLabel, language),
        response.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    section
}

/// Statistics overview with per-category counts and percentages.
fn render_stats(stats: &AnswerStats, language: Language) -> String {
    let mut section = String::new();

    section.push_str(&format!("## {}\n\n", text(MessageKey::ResultsOverview, language)));
    section.push_str(&format!(
        "  {}: {} ({}%)\n",
        text(MessageKey::AnswerYes, language),
        stats.yes,
        stats.percentage(stats.yes)
    ));
    section.push_str(&format!(
        "  {}: {} ({}%)\n",
        text(MessageKey::AnswerNo, language),
        stats.no,
        stats.percentage(stats.no)
    ));
    section.push_str(&format!(
        "  {}: {} ({}%)\n",
        text(MessageKey::AnswerNa, language),
        stats.na,
        stats.percentage(stats.na)
    ));
    section.push_str(&format!(
        "  {}: {}\n",
        text(MessageKey::TotalQuestions, language),
        stats.total()
    ));
    section.push_str(&format!(
        "  {}: 100%\n\n",
        text(MessageKey::CompletionRate, language)
    ));

    section
}

/// Detailed answers, one block per area in first-seen order.
fn render_areas(grouped: &IndexMap<String, Vec<Answer>>, language: Language) -> String {
    let mut section = String::new();

    for (area, answers) in grouped {
        section.push_str(&format!("## {}\n\n", area));

        for answer in answers {
            section.push_str(&format!("- {}\n", answer.activity));
            section.push_str(&format!("  {}\n", answer.criteria));
            section.push_str(&format!(
                "  {}: {}\n",
                text(MessageKey::AnswerLabel, language),
                answer_badge(&answer.answer, language)
            ));
            if let Some(remarks) = &answer.remarks {
                section.push_str(&format!(
                    "  {}: {}\n",
                    text(MessageKey::RemarksLabel, language),
                    remarks
                ));
            }
            section.push('\n');
        }
    }

    section
}

/// Localized badge for an answer value. Anything outside Yes/No renders as
/// the N/A label, matching how the results page displays them.
fn answer_badge(value: &AnswerValue, language: Language) -> &'static str {
    match value {
        AnswerValue::Yes => text(MessageKey::AnswerYes, language),
        AnswerValue::No => text(MessageKey::AnswerNo, language),
        _ => text(MessageKey::AnswerNa, language),
    }
}

/// Certification / academy follow-up block with the fixed link targets.
fn render_links(language: Language) -> String {
    let mut section = String::new();

    section.push_str(&format!(
        "## {}\n\n",
        text(MessageKey::CertificationHeading, language)
    ));
    section.push_str(&format!("{}\n\n", text(MessageKey::CertificationBody, language)));
    section.push_str(&format!(
        "  {}: {}\n",
        text(MessageKey::StartCertification, language),
        CERTIFICATION_URL
    ));
    section.push_str(&format!(
        "  {}: {}\n",
        text(MessageKey::StartAcademy, language),
        ACADEMY_URL
    ));
    section.push_str(&format!(
        "  {}: {}\n\n",
        text(MessageKey::ViewBadges, language),
        BADGE_DIRECTORY_URL
    ));

    section
}

fn render_footer(language: Language) -> String {
    format!("{}\n", text(MessageKey::FooterNote, language))
}

#[derive(Serialize)]
struct JsonStats {
    yes: usize,
    no: usize,
    na: usize,
    total: usize,
    yes_pct: u32,
    no_pct: u32,
    na_pct: u32,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    response: &'a AssessmentResponse,
    stats: JsonStats,
    groups: IndexMap<String, Vec<Answer>>,
}

/// Serialize the derived summary (record, stats, grouped answers) as JSON.
pub fn render_json(data: &ResponseData) -> Result<String> {
    let stats = AnswerStats::from_answers(&data.answers);
    let document = JsonSummary {
        response: &data.response,
        stats: JsonStats {
            yes: stats.yes,
            no: stats.no,
            na: stats.na,
            total: stats.total(),
            yes_pct: stats.percentage(stats.yes),
            no_pct: stats.percentage(stats.no),
            na_pct: stats.percentage(stats.na),
        },
        groups: group_by_area(&data.answers),
    };

    serde_json::to_string_pretty(&document).map_err(Into::into)
}
