//! ATS Score Calculator: estimates how well a resume survives an applicant-tracking filter.
//!
//! Three sub-scores are accumulated from independent rules, each with its own weight:
//! format (30), content (35) and keyword match (35). Each rule below is a pure
//! function of the resume, and `combine` turns the raw totals into the displayed result.
//!
//! The displayed sub-scores are normalized to 0–100, but `overall_score` is the
//! rounded sum of the RAW sub-scores, not the mean of the displayed ones.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::{PersonalInfo, Resume, WorkExperience};
use crate::scoring::keywords::extract_keywords;
use crate::scoring::lexicon::Lexicon;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

pub const FORMAT_WEIGHT: f64 = 30.0;
pub const CONTENT_WEIGHT: f64 = 35.0;
pub const KEYWORD_WEIGHT: f64 = 35.0;

const FORMAT_CHECK_POINTS: f64 = 7.5;

const METRICS_POINTS: f64 = 10.0;
const ACTION_VERB_POINTS: f64 = 10.0;
const DESCRIPTION_POINTS: f64 = 7.5;
const HISTORY_DEPTH_POINTS: f64 = 7.5;
const MIN_DESCRIPTION_CHARS: usize = 50;

const FALLBACK_KEYWORD_BASE: f64 = 20.0;
const FALLBACK_KEYWORD_BONUS: f64 = 5.0;

const MIN_SKILLS: usize = 5;
const MIN_SUMMARY_CHARS: usize = 100;
const MIN_JOBS_FOR_DEPTH: usize = 2;
/// Raw keyword score below which the "add keywords" suggestion fires.
const LOW_KEYWORD_MATCH: f64 = 25.0;

static METRICS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+%|\d+x|\$\d+").expect("valid metrics regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-()]+$").expect("valid phone regex"));

// ────────────────────────────────────────────────────────────────────────────
// Suggestions
// ────────────────────────────────────────────────────────────────────────────

pub const SUGGEST_SUMMARY: &str =
    "Add a detailed professional summary (100-150 words) highlighting your key qualifications";
pub const SUGGEST_EXPERIENCE: &str =
    "Include your work experience with specific achievements and metrics";
pub const SUGGEST_QUANTIFY: &str =
    "Add quantifiable achievements (e.g., \"Increased sales by 25%\", \"Managed a team of 10\")";
pub const SUGGEST_SKILLS: &str = "List at least 5-7 relevant technical and soft skills";
pub const SUGGEST_KEYWORDS: &str = "Your resume needs more keywords from the job description. Consider adding relevant terms and skills.";
pub const WELL_OPTIMIZED: &str =
    "Your resume is well-optimized! Consider tailoring it further for specific job applications.";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Display band for a 0–100 score. Drives colour and icon in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ScoreBand::Excellent,
            s if s >= 70 => ScoreBand::Good,
            s if s >= 50 => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }
}

/// Pre-normalization sub-scores, each within `[0, weight]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawScores {
    pub format: f64,
    pub content: f64,
    pub keyword: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreResult {
    pub overall_score: u32,
    pub keyword_match: u32,
    pub format_score: u32,
    pub content_score: u32,
    pub suggestions: Vec<String>,
    /// Band of `overall_score`.
    pub band: ScoreBand,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume, optionally against a job description.
///
/// Carried in `AppState` as `Arc<dyn DocumentScorer>` so the heuristic backend
/// can be swapped without touching handlers.
pub trait DocumentScorer: Send + Sync {
    fn score(&self, resume: &Resume, job_description: Option<&str>) -> AtsScoreResult;
}

/// Rule-based scorer. Deterministic, no I/O.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAtsScorer {
    lexicon: Lexicon,
}

impl HeuristicAtsScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }
}

impl DocumentScorer for HeuristicAtsScorer {
    fn score(&self, resume: &Resume, job_description: Option<&str>) -> AtsScoreResult {
        generate_ats_score(resume, job_description, &self.lexicon)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume`. Only an empty job description counts as absent; whitespace
/// still takes the keyword-match path (and yields no keywords).
pub fn generate_ats_score(
    resume: &Resume,
    job_description: Option<&str>,
    lexicon: &Lexicon,
) -> AtsScoreResult {
    let job_description = job_description.filter(|jd| !jd.is_empty());
    let raw = raw_scores(resume, job_description, lexicon);
    let suggestions = suggestions(resume, job_description.is_some(), raw.keyword);

    debug!(
        raw_format = raw.format,
        raw_content = raw.content,
        raw_keyword = raw.keyword,
        "computed raw ATS sub-scores"
    );

    combine(raw, suggestions)
}

pub fn raw_scores(resume: &Resume, job_description: Option<&str>, lexicon: &Lexicon) -> RawScores {
    RawScores {
        format: format_points(resume.personal_info.as_ref()),
        content: content_points(resume, lexicon),
        keyword: match job_description {
            Some(jd) => keyword_match_points(resume, jd, lexicon),
            None => fallback_keyword_points(resume),
        },
    }
}

/// Final combine step: normalizes each sub-score for display and sums the raw ones.
pub fn combine(raw: RawScores, suggestions: Vec<String>) -> AtsScoreResult {
    let overall_score = round_score(raw.format + raw.content + raw.keyword);
    let suggestions = if suggestions.is_empty() {
        vec![WELL_OPTIMIZED.to_string()]
    } else {
        suggestions
    };

    AtsScoreResult {
        overall_score,
        keyword_match: normalize(raw.keyword, KEYWORD_WEIGHT),
        format_score: normalize(raw.format, FORMAT_WEIGHT),
        content_score: normalize(raw.content, CONTENT_WEIGHT),
        suggestions,
        band: ScoreBand::from_score(overall_score),
    }
}

fn normalize(raw: f64, weight: f64) -> u32 {
    round_score(raw * (100.0 / weight))
}

fn round_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Format rules
// ────────────────────────────────────────────────────────────────────────────

const FORMAT_CHECKS: [fn(&PersonalInfo) -> bool; 4] = [
    has_name,
    has_valid_email,
    has_valid_phone,
    has_location,
];

fn has_name(info: &PersonalInfo) -> bool {
    !info.full_name.is_empty()
}

fn has_valid_email(info: &PersonalInfo) -> bool {
    info.email.contains('@')
}

fn has_valid_phone(info: &PersonalInfo) -> bool {
    PHONE_RE.is_match(&info.phone)
}

fn has_location(info: &PersonalInfo) -> bool {
    !info.location.is_empty()
}

/// 7.5 points per passing check; 0 when personal info is missing.
pub fn format_points(info: Option<&PersonalInfo>) -> f64 {
    let Some(info) = info else {
        return 0.0;
    };
    FORMAT_CHECKS
        .iter()
        .filter(|check| check(info))
        .map(|_| FORMAT_CHECK_POINTS)
        .sum()
}

// ────────────────────────────────────────────────────────────────────────────
// Content rules (most recent job only)
// ────────────────────────────────────────────────────────────────────────────

type ContentRule = fn(&Resume, &WorkExperience, &Lexicon) -> bool;

const CONTENT_RULES: [(f64, ContentRule); 4] = [
    (METRICS_POINTS, has_measurable_achievement),
    (ACTION_VERB_POINTS, has_action_verb_achievement),
    (DESCRIPTION_POINTS, has_detailed_description),
    (HISTORY_DEPTH_POINTS, has_history_depth),
];

fn has_measurable_achievement(_: &Resume, job: &WorkExperience, lexicon: &Lexicon) -> bool {
    job.filled_achievements()
        .any(|a| METRICS_RE.is_match(a) || lexicon.mentions_metric_verb(a))
}

fn has_action_verb_achievement(_: &Resume, job: &WorkExperience, lexicon: &Lexicon) -> bool {
    job.filled_achievements()
        .any(|a| lexicon.starts_with_action_verb(a))
}

fn has_detailed_description(_: &Resume, job: &WorkExperience, _: &Lexicon) -> bool {
    job.description.chars().count() > MIN_DESCRIPTION_CHARS
}

fn has_history_depth(resume: &Resume, _: &WorkExperience, _: &Lexicon) -> bool {
    resume.work_experience.len() >= MIN_JOBS_FOR_DEPTH
}

/// Content points, gated on the most recent job. No work experience scores 0.
pub fn content_points(resume: &Resume, lexicon: &Lexicon) -> f64 {
    let Some(job) = resume.most_recent_job() else {
        return 0.0;
    };
    CONTENT_RULES
        .iter()
        .filter(|(_, rule)| rule(resume, job, lexicon))
        .map(|(points, _)| points)
        .sum()
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword rules
// ────────────────────────────────────────────────────────────────────────────

/// `matched / extracted × 35`, or 0 when the description yields no keywords.
///
/// The description is lower-cased before extraction so it lines up with the
/// lower-case reference terms and the lower-cased resume text.
pub fn keyword_match_points(resume: &Resume, job_description: &str, lexicon: &Lexicon) -> f64 {
    let keywords = extract_keywords(&job_description.to_lowercase(), lexicon);
    if keywords.is_empty() {
        return 0.0;
    }

    let haystack = resume_haystack(resume);
    let matched = keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count();

    debug!(matched, total = keywords.len(), "keyword match");
    (matched as f64 / keywords.len() as f64) * KEYWORD_WEIGHT
}

/// Heuristic used when no job description is supplied. Always within [20, 35].
pub fn fallback_keyword_points(resume: &Resume) -> f64 {
    let bonuses = [
        resume.skills.len() >= MIN_SKILLS,
        resume.summary_text().chars().count() > MIN_SUMMARY_CHARS,
        resume.work_experience.len() >= MIN_JOBS_FOR_DEPTH,
    ];
    let earned = bonuses.iter().filter(|&&b| b).count() as f64;
    (FALLBACK_KEYWORD_BASE + earned * FALLBACK_KEYWORD_BONUS).min(KEYWORD_WEIGHT)
}

/// Lower-cased text of summary, job descriptions, achievements and skill names.
fn resume_haystack(resume: &Resume) -> String {
    let mut parts: Vec<String> = vec![resume.summary_text().to_string()];
    for job in &resume.work_experience {
        let achievements: Vec<&str> = job.filled_achievements().collect();
        parts.push(format!("{} {}", job.description, achievements.join(" ")));
    }
    parts.extend(resume.skills.iter().map(|skill| skill.name.clone()));
    parts.join(" ").to_lowercase()
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestions
// ────────────────────────────────────────────────────────────────────────────

/// Every applicable suggestion, in a fixed order. Empty means nothing to flag.
pub fn suggestions(
    resume: &Resume,
    job_description_supplied: bool,
    raw_keyword: f64,
) -> Vec<String> {
    let mut out = Vec::new();

    if resume.summary_text().chars().count() < MIN_SUMMARY_CHARS {
        out.push(SUGGEST_SUMMARY.to_string());
    }

    match resume.most_recent_job() {
        None => out.push(SUGGEST_EXPERIENCE.to_string()),
        Some(job) => {
            let quantified = job
                .filled_achievements()
                .any(|a| a.chars().any(|c| c.is_ascii_digit()));
            if !quantified {
                out.push(SUGGEST_QUANTIFY.to_string());
            }
        }
    }

    if resume.skills.len() < MIN_SKILLS {
        out.push(SUGGEST_SKILLS.to_string());
    }

    if job_description_supplied && raw_keyword < LOW_KEYWORD_MATCH {
        out.push(SUGGEST_KEYWORDS.to_string());
    }

    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
