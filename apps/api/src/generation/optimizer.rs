//! Resume Optimizer: appends unmatched job-description keywords to the summary.

use crate::models::resume::Resume;
use crate::scoring::keywords::extract_keywords;
use crate::scoring::lexicon::Lexicon;

const MAX_APPENDED_KEYWORDS: usize = 3;

/// Returns a copy of `resume` whose summary ends with " Expertise in k1, k2, k3."
/// listing up to three keywords the summary does not already mention.
///
/// Keywords keep the casing of the job description; the "already mentioned"
/// test is case-insensitive. A resume with a missing or empty summary, or whose
/// summary already covers every keyword, comes back unchanged.
pub fn optimize_resume(resume: &Resume, job_description: &str, lexicon: &Lexicon) -> Resume {
    let mut optimized = resume.clone();
    let Some(summary) = resume.summary.as_deref().filter(|s| !s.is_empty()) else {
        return optimized;
    };

    let summary_lower = summary.to_lowercase();
    let missing: Vec<String> = extract_keywords(job_description, lexicon)
        .into_iter()
        .filter(|keyword| !summary_lower.contains(&keyword.to_lowercase()))
        .take(MAX_APPENDED_KEYWORDS)
        .collect();

    if !missing.is_empty() {
        optimized.summary = Some(format!("{summary} Expertise in {}.", missing.join(", ")));
    }
    optimized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_summary(summary: &str) -> Resume {
        Resume {
            summary: Some(summary.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_appends_up_to_three_missing_keywords() {
        let resume = with_summary("Backend engineer.");
        let optimized = optimize_resume(
            &resume,
            "Kubernetes Terraform observability pipelines",
            &Lexicon::default(),
        );
        assert_eq!(
            optimized.summary.as_deref(),
            Some("Backend engineer. Expertise in Kubernetes, Terraform, observability.")
        );
    }

    #[test]
    fn test_skips_keywords_already_in_summary() {
        let resume = with_summary("Kubernetes specialist.");
        let optimized = optimize_resume(&resume, "kubernetes terraform", &Lexicon::default());
        assert_eq!(
            optimized.summary.as_deref(),
            Some("Kubernetes specialist. Expertise in terraform, kubernetes terraform.")
        );
    }

    #[test]
    fn test_missing_summary_is_unchanged() {
        let resume = Resume::default();
        let optimized = optimize_resume(&resume, "kubernetes terraform", &Lexicon::default());
        assert_eq!(optimized, resume);
    }

    #[test]
    fn test_empty_summary_is_unchanged() {
        let resume = with_summary("");
        let optimized = optimize_resume(&resume, "kubernetes terraform", &Lexicon::default());
        assert_eq!(optimized, resume);
        assert_eq!(optimized.summary.as_deref(), Some(""));
    }

    #[test]
    fn test_case_insensitive_coverage_check() {
        let resume = with_summary("kubernetes and TERRAFORM expert.");
        let optimized = optimize_resume(&resume, "Kubernetes Terraform", &Lexicon::default());
        assert_eq!(optimized, resume);
    }

    #[test]
    fn test_no_keywords_leaves_summary_unchanged() {
        let resume = with_summary("Backend engineer.");
        let optimized = optimize_resume(&resume, "a b c", &Lexicon::default());
        assert_eq!(optimized, resume);
    }

    #[test]
    fn test_idempotent_once_keywords_are_covered() {
        let lexicon = Lexicon::default();
        let jd = "Kubernetes Terraform";
        let once = optimize_resume(&with_summary("Backend engineer."), jd, &lexicon);
        let twice = optimize_resume(&once, jd, &lexicon);
        assert_eq!(once.summary, twice.summary);
    }

    #[test]
    fn test_other_fields_untouched() {
        let mut resume = with_summary("Backend engineer.");
        resume.skills.push(crate::models::resume::Skill::default());
        let optimized = optimize_resume(&resume, "kubernetes", &Lexicon::default());
        assert_eq!(optimized.skills, resume.skills);
        assert_eq!(optimized.work_experience, resume.work_experience);
    }
}
