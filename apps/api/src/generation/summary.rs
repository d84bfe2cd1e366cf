//! Summary Synthesizer: derives a one-paragraph professional summary from work history.

use chrono::{Datelike, NaiveDate, Utc};

use crate::models::resume::{Resume, WorkExperience};

/// End-date literal that marks the current position.
pub const PRESENT: &str = "Present";

const FALLBACK_ROLE: &str = "professional";
const TOP_SKILL_COUNT: usize = 3;

/// Builds the summary using today's date for "Present" positions.
pub fn generate_resume_summary(resume: &Resume) -> String {
    generate_resume_summary_at(resume, Utc::now().date_naive())
}

/// Builds the summary with an explicit "today", for deterministic callers.
pub fn generate_resume_summary_at(resume: &Resume, today: NaiveDate) -> String {
    let total_years: i32 = resume
        .work_experience
        .iter()
        .map(|job| experience_years(job, today))
        .sum();

    let role = resume
        .most_recent_job()
        .map(|job| job.position.as_str())
        .filter(|position| !position.is_empty())
        .unwrap_or(FALLBACK_ROLE);

    let top_skills = resume
        .skills
        .iter()
        .map(|skill| skill.name.trim())
        .filter(|name| !name.is_empty())
        .take(TOP_SKILL_COUNT)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{role} with {total_years}+ years of experience. Demonstrated expertise in {top_skills}. \
         Proven track record of delivering high-quality results and driving business value \
         through technical excellence and innovative solutions."
    )
}

/// Whole calendar years between start and end. Unparsable dates and negative
/// spans contribute 0.
pub fn experience_years(job: &WorkExperience, today: NaiveDate) -> i32 {
    let end_year = if job.end_date == PRESENT {
        Some(today.year())
    } else {
        parse_year(&job.end_date)
    };

    match (parse_year(&job.start_date), end_year) {
        (Some(start), Some(end)) => (end - start).max(0),
        _ => 0,
    }
}

/// Extracts the year from the date shapes the form editor produces.
///
/// Accepts `2021-03-15`, `2021-03`, `03/15/2021`, `03/2021`, `March 2021`,
/// `Mar 2021` and a bare `2021`.
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let candidates = [
        (raw.to_string(), "%Y-%m-%d"),
        (raw.to_string(), "%m/%d/%Y"),
        (format!("{raw}-01"), "%Y-%m-%d"),
        (format!("01/{raw}"), "%d/%m/%Y"),
        (format!("1 {raw}"), "%d %B %Y"),
    ];
    for (text, fmt) in &candidates {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date.year());
        }
    }

    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.parse().ok();
    }
    None
}
