//! Cover letter assembly. Content is plain text with paragraphs separated by a
//! blank line; the UI splits it back with `split_paragraphs`.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::models::cover_letter::{CoverLetter, JobDetails};
use crate::models::resume::PersonalInfo;

/// Returned instead of letter content when personal info is missing.
pub const MISSING_PERSONAL_INFO: &str = "Please enter your information to generate a cover letter.";

const PARAGRAPH_BREAK: &str = "\n\n";

/// A cover letter ready for preview: header blocks plus body paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterDocument {
    /// Name, email, phone, location and the letter date. Empty without personal info.
    pub sender: Vec<String>,
    /// Hiring manager (or "Hiring Manager"), company and optional department.
    pub recipient: Vec<String>,
    pub content: String,
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

pub fn generate_cover_letter_content(
    personal_info: Option<&PersonalInfo>,
    job: &JobDetails,
    key_points: &[String],
) -> String {
    let Some(info) = personal_info else {
        return MISSING_PERSONAL_INFO.to_string();
    };

    let position = or_default(&job.position, "open");
    let company = or_default(&job.company, "your organization");
    let department = job
        .department
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!(" within the {d} team"))
        .unwrap_or_default();

    let opening = format!(
        "I am writing to express my interest in the {position} position at {company}{department}. \
         My background aligns closely with the needs of this role, and I am confident I can make \
         a meaningful contribution from day one."
    );

    let highlights: Vec<String> = key_points
        .iter()
        .map(|point| point.trim())
        .filter(|point| !point.is_empty())
        .map(as_sentence)
        .collect();
    let body = if highlights.is_empty() {
        "Throughout my career, I have built a strong foundation of technical and interpersonal \
         skills, and I take pride in delivering high-quality work that moves the business forward."
            .to_string()
    } else {
        format!(
            "Throughout my career, I have developed the experience this role demands. {}",
            highlights.join(" ")
        )
    };

    let closing = format!(
        "I would welcome the opportunity to bring this experience to {company} and to discuss how \
         I can contribute to your goals. Thank you for considering my application."
    );

    [
        format!("Dear {},", job.recipient()),
        opening,
        body,
        closing,
        format!("Sincerely,\n{}", info.full_name.trim()),
    ]
    .join(PARAGRAPH_BREAK)
}

/// Splits letter content on blank lines into display paragraphs.
pub fn split_paragraphs(content: &str) -> Vec<String> {
    content
        .split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Suggested export file name, e.g. `Ada_Lovelace_CoverLetter_Analytical_Engines.pdf`.
pub fn cover_letter_file_name(info: &PersonalInfo, job: &JobDetails) -> String {
    format!(
        "{}_CoverLetter_{}.pdf",
        info.full_name.replace(' ', "_"),
        job.company.replace(' ', "_")
    )
}

pub fn render_cover_letter(letter: &CoverLetter) -> CoverLetterDocument {
    render_cover_letter_at(letter, Utc::now().date_naive())
}

/// Assembles the full letter with an explicit letter date.
pub fn render_cover_letter_at(letter: &CoverLetter, date: NaiveDate) -> CoverLetterDocument {
    let info = letter.personal_info.as_ref();
    let job = &letter.job_details;

    let content = generate_cover_letter_content(info, job, &letter.key_points);
    let paragraphs = split_paragraphs(&content);

    let sender: Vec<String> = info
        .map(|info| {
            [
                info.full_name.as_str(),
                info.email.as_str(),
                info.phone.as_str(),
                info.location.as_str(),
            ]
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .chain(std::iter::once(date.format("%B %-d, %Y").to_string()))
            .collect()
        })
        .unwrap_or_default();

    let mut recipient = vec![job.recipient().to_string(), job.company.clone()];
    if let Some(department) = job.department.as_deref().filter(|d| !d.trim().is_empty()) {
        recipient.push(department.to_string());
    }

    CoverLetterDocument {
        sender,
        recipient,
        content,
        paragraphs,
        file_name: info.map(|info| cover_letter_file_name(info, job)),
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn as_sentence(point: &str) -> String {
    if point.ends_with(['.', '!', '?']) {
        point.to_string()
    } else {
        format!("{point}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_info() -> PersonalInfo {
        PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-1234".to_string(),
            location: "London".to_string(),
            linkedin: None,
            website: None,
        }
    }

    fn make_job() -> JobDetails {
        JobDetails {
            company: "Analytical Engines".to_string(),
            position: "Software Engineer".to_string(),
            hiring_manager: None,
            department: None,
            job_description: None,
        }
    }

    #[test]
    fn test_missing_personal_info_returns_placeholder() {
        let content = generate_cover_letter_content(None, &make_job(), &[]);
        assert_eq!(content, MISSING_PERSONAL_INFO);
    }

    #[test]
    fn test_salutation_defaults_to_hiring_manager() {
        let content = generate_cover_letter_content(Some(&make_info()), &make_job(), &[]);
        assert!(content.starts_with("Dear Hiring Manager,\n\n"));
        assert!(content.ends_with("Sincerely,\nAda Lovelace"));
    }

    #[test]
    fn test_named_manager_and_department() {
        let job = JobDetails {
            hiring_manager: Some("Charles Babbage".to_string()),
            department: Some("Research".to_string()),
            ..make_job()
        };
        let content = generate_cover_letter_content(Some(&make_info()), &job, &[]);
        assert!(content.starts_with("Dear Charles Babbage,"));
        assert!(content.contains(
            "the Software Engineer position at Analytical Engines within the Research team."
        ));
    }

    #[test]
    fn test_key_points_woven_into_body() {
        let points = vec![
            "Led a team of 5 engineers".to_string(),
            "  ".to_string(),
            "Cut build times by 40%!".to_string(),
        ];
        let content = generate_cover_letter_content(Some(&make_info()), &make_job(), &points);
        let paragraphs = split_paragraphs(&content);
        assert_eq!(paragraphs.len(), 5);
        assert_eq!(
            paragraphs[2],
            "Throughout my career, I have developed the experience this role demands. \
             Led a team of 5 engineers. Cut build times by 40%!"
        );
    }

    #[test]
    fn test_blank_position_and_company_use_fallbacks() {
        let job = JobDetails::default();
        let content = generate_cover_letter_content(Some(&make_info()), &job, &[]);
        assert!(content.contains("the open position at your organization."));
    }

    #[test]
    fn test_split_paragraphs_drops_empty_blocks() {
        let paragraphs = split_paragraphs("One\n\n\n\nTwo\n\n  ");
        assert_eq!(paragraphs, vec!["One".to_string(), "Two".to_string()]);
    }

    #[test]
    fn test_render_document_header_blocks() {
        let letter = CoverLetter {
            personal_info: Some(make_info()),
            job_details: JobDetails {
                department: Some("Research".to_string()),
                ..make_job()
            },
            key_points: vec![],
        };
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let doc = render_cover_letter_at(&letter, date);

        assert_eq!(
            doc.sender,
            vec!["Ada Lovelace", "ada@example.com", "555-1234", "London", "June 1, 2024"]
        );
        assert_eq!(
            doc.recipient,
            vec!["Hiring Manager", "Analytical Engines", "Research"]
        );
        assert_eq!(
            doc.file_name.as_deref(),
            Some("Ada_Lovelace_CoverLetter_Analytical_Engines.pdf")
        );
        assert_eq!(doc.paragraphs, split_paragraphs(&doc.content));
    }

    #[test]
    fn test_render_document_without_personal_info() {
        let letter = CoverLetter {
            personal_info: None,
            job_details: make_job(),
            key_points: vec![],
        };
        let doc = render_cover_letter_at(&letter, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(doc.sender.is_empty());
        assert!(doc.file_name.is_none());
        assert_eq!(doc.paragraphs, vec![MISSING_PERSONAL_INFO.to_string()]);
    }
}
