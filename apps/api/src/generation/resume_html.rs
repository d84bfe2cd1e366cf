//! Resume markup renderer. Produces a self-contained HTML fragment styled by the
//! chosen template; the UI previews it and the exporter rasterizes it.
//!
//! Each section is its own askama template under `templates/resume/`, rendered
//! only when its backing data is non-empty. askama escapes every interpolated value.

use askama::Template;

use crate::generation::templates::{ResumeTemplate, TemplateStyle};
use crate::models::resume::{Education, PersonalInfo, Resume, WorkExperience};

/// Returned instead of markup when the resume has no personal info.
pub const MISSING_PERSONAL_INFO: &str = "<p>Missing personal information</p>";

// ────────────────────────────────────────────────────────────────────────────
// Section templates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "resume/layout.html")]
struct ResumeLayout<'a> {
    style: &'a TemplateStyle,
    /// Already-rendered section fragments.
    sections: Vec<String>,
}

#[derive(Template)]
#[template(path = "resume/header.html")]
struct HeaderSection<'a> {
    style: &'a TemplateStyle,
    info: &'a PersonalInfo,
    linkedin: Option<&'a str>,
    website: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "resume/summary.html")]
struct SummarySection<'a> {
    style: &'a TemplateStyle,
    summary: &'a str,
}

struct JobView<'a> {
    position: &'a str,
    company: &'a str,
    location: Option<&'a str>,
    start_date: &'a str,
    end_date: &'a str,
    description: &'a str,
    achievements: Vec<&'a str>,
}

impl<'a> From<&'a WorkExperience> for JobView<'a> {
    fn from(job: &'a WorkExperience) -> Self {
        Self {
            position: &job.position,
            company: &job.company,
            location: non_blank(Some(job.location.as_str())),
            start_date: &job.start_date,
            end_date: &job.end_date,
            description: &job.description,
            achievements: job.filled_achievements().collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "resume/experience.html")]
struct ExperienceSection<'a> {
    style: &'a TemplateStyle,
    jobs: Vec<JobView<'a>>,
}

struct EducationView<'a> {
    degree: &'a str,
    field_of_study: Option<&'a str>,
    institution: &'a str,
    gpa: Option<&'a str>,
    start_date: &'a str,
    end_date: &'a str,
}

impl<'a> From<&'a Education> for EducationView<'a> {
    fn from(edu: &'a Education) -> Self {
        Self {
            degree: &edu.degree,
            field_of_study: non_blank(edu.field_of_study.as_deref()),
            institution: &edu.institution,
            gpa: non_blank(edu.gpa.as_deref()),
            start_date: &edu.start_date,
            end_date: &edu.end_date,
        }
    }
}

#[derive(Template)]
#[template(path = "resume/education.html")]
struct EducationSection<'a> {
    style: &'a TemplateStyle,
    entries: Vec<EducationView<'a>>,
}

#[derive(Template)]
#[template(path = "resume/skills.html")]
struct SkillsSection<'a> {
    style: &'a TemplateStyle,
    /// Skill names with blank entries removed.
    skills: Vec<&'a str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

pub fn generate_resume_html(
    resume: &Resume,
    template: ResumeTemplate,
) -> Result<String, askama::Error> {
    let Some(info) = resume.personal_info.as_ref() else {
        return Ok(MISSING_PERSONAL_INFO.to_string());
    };
    let style = template.style();

    let mut sections = vec![HeaderSection {
        style,
        info,
        linkedin: non_blank(info.linkedin.as_deref()),
        website: non_blank(info.website.as_deref()),
    }
    .render()?];

    if let Some(summary) = non_blank(resume.summary.as_deref()) {
        sections.push(SummarySection { style, summary }.render()?);
    }

    if !resume.work_experience.is_empty() {
        let jobs = resume.work_experience.iter().map(JobView::from).collect();
        sections.push(ExperienceSection { style, jobs }.render()?);
    }

    if !resume.education.is_empty() {
        let entries = resume.education.iter().map(EducationView::from).collect();
        sections.push(EducationSection { style, entries }.render()?);
    }

    if !resume.skills.is_empty() {
        let skills = resume
            .skills
            .iter()
            .map(|skill| skill.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .collect();
        sections.push(SkillsSection { style, skills }.render()?);
    }

    ResumeLayout { style, sections }.render()
}

/// Suggested export file name, e.g. `Ada_Lovelace_Resume.pdf`.
pub fn resume_file_name(info: &PersonalInfo) -> String {
    format!("{}_Resume.pdf", info.full_name.replace(' ', "_"))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Skill, SkillLevel};

    fn make_info() -> PersonalInfo {
        PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-1234".to_string(),
            location: "London".to_string(),
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            website: None,
        }
    }

    fn full_resume() -> Resume {
        Resume {
            personal_info: Some(make_info()),
            summary: Some("Mathematician and first programmer.".to_string()),
            work_experience: vec![WorkExperience {
                company: "Analytical Engines".to_string(),
                position: "Programmer".to_string(),
                location: "London".to_string(),
                start_date: "1842".to_string(),
                end_date: "1843".to_string(),
                description: "Translated and annotated the Menabrea memoir.".to_string(),
                achievements: vec![
                    "Published the first algorithm".to_string(),
                    "   ".to_string(),
                    "Designed Bernoulli number computation".to_string(),
                ],
            }],
            education: vec![Education {
                institution: "Home tutoring".to_string(),
                degree: "Mathematics".to_string(),
                field_of_study: Some("Analysis".to_string()),
                start_date: "1830".to_string(),
                end_date: "1835".to_string(),
                gpa: None,
            }],
            skills: vec![
                Skill {
                    name: "Mathematics".to_string(),
                    level: SkillLevel::Expert,
                },
                Skill {
                    name: " ".to_string(),
                    level: SkillLevel::Beginner,
                },
            ],
        }
    }

    #[test]
    fn test_missing_personal_info_returns_placeholder() {
        let html = generate_resume_html(&Resume::default(), ResumeTemplate::Modern).unwrap();
        assert_eq!(html, MISSING_PERSONAL_INFO);
    }

    #[test]
    fn test_each_template_uses_its_container_class() {
        let resume = full_resume();
        for template in ResumeTemplate::ALL {
            let html = generate_resume_html(&resume, template).unwrap();
            let expected = format!("<div class=\"{}\">", template.style().container);
            assert!(html.starts_with(&expected), "{template}: {html}");
        }
        let modern = generate_resume_html(&resume, ResumeTemplate::Modern).unwrap();
        let creative = generate_resume_html(&resume, ResumeTemplate::Creative).unwrap();
        assert!(modern.contains("modern-resume"));
        assert!(!modern.contains("creative-resume"));
        assert!(creative.contains("creative-resume"));
    }

    #[test]
    fn test_all_sections_present_for_full_resume() {
        let html = generate_resume_html(&full_resume(), ResumeTemplate::Professional).unwrap();
        assert!(html.contains("Professional Summary"));
        assert!(html.contains("Work Experience"));
        assert!(html.contains("Education"));
        assert!(html.contains(">Skills</h2>"));
        assert!(html.contains("Mathematics in Analysis"));
        assert!(html.contains("Analytical Engines • London"));
        assert!(html.contains(">LinkedIn</a>"));
        assert!(!html.contains("Portfolio"));
    }

    #[test]
    fn test_sections_omitted_when_data_empty() {
        let resume = Resume {
            personal_info: Some(make_info()),
            ..Default::default()
        };
        let html = generate_resume_html(&resume, ResumeTemplate::Creative).unwrap();
        assert!(html.contains("Ada Lovelace"));
        assert!(!html.contains("Professional Summary"));
        assert!(!html.contains("Work Experience"));
        assert!(!html.contains("Education"));
        assert!(!html.contains("Skills"));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_blank_achievements_and_skills_skipped() {
        let html = generate_resume_html(&full_resume(), ResumeTemplate::Modern).unwrap();
        assert_eq!(html.matches("<li>").count(), 2);
        let pill = ResumeTemplate::Modern.style().skill;
        assert_eq!(html.matches(&format!("<span class=\"{pill}\">")).count(), 1);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut resume = full_resume();
        resume.summary = Some("<script>alert(1)</script> & more".to_string());
        if let Some(info) = resume.personal_info.as_mut() {
            info.full_name = "Ada \"<b>\" Lovelace".to_string();
        }
        let html = generate_resume_html(&resume, ResumeTemplate::Modern).unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(html.contains("&amp; more"));
        assert!(html.contains("Ada &quot;&lt;b&gt;&quot; Lovelace"));
    }

    #[test]
    fn test_website_rendered_as_portfolio_link() {
        let mut resume = full_resume();
        if let Some(info) = resume.personal_info.as_mut() {
            info.website = Some("https://ada.dev".to_string());
        }
        let html = generate_resume_html(&resume, ResumeTemplate::Modern).unwrap();
        assert!(html.contains("ada.dev"));
        assert!(html.contains(">Portfolio</a>"));
    }

    #[test]
    fn test_resume_file_name() {
        assert_eq!(resume_file_name(&make_info()), "Ada_Lovelace_Resume.pdf");
    }
}
