//! Term lists that drive keyword extraction and content scoring.
//!
//! The lists are injected rather than read from globals so tests and
//! deployments can substitute their own (see `Config::from_env`).

/// Domain terms that make a job-description token worth keeping regardless of length.
pub const DEFAULT_REFERENCE_TERMS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node",
    "sql",
    "agile",
    "scrum",
    "project management",
    "leadership",
    "communication",
    "analysis",
    "development",
    "design",
    "testing",
    "deployment",
    "architecture",
    "cloud",
    "aws",
    "azure",
    "devops",
    "ci/cd",
    "team management",
];

/// Verbs that earn the action-verb bonus when an achievement starts with them.
pub const DEFAULT_ACTION_VERBS: &[&str] = &[
    "led",
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "analyzed",
];

/// Outcome verbs that count as a measurable result on their own.
pub const DEFAULT_METRIC_VERBS: &[&str] = &[
    "increased",
    "decreased",
    "improved",
    "reduced",
    "generated",
    "saved",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    pub reference_terms: Vec<String>,
    pub action_verbs: Vec<String>,
    pub metric_verbs: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            reference_terms: to_owned_list(DEFAULT_REFERENCE_TERMS),
            action_verbs: to_owned_list(DEFAULT_ACTION_VERBS),
            metric_verbs: to_owned_list(DEFAULT_METRIC_VERBS),
        }
    }
}

impl Lexicon {
    /// True if `keyword` contains any reference term as a substring.
    pub fn mentions_reference_term(&self, keyword: &str) -> bool {
        self.reference_terms
            .iter()
            .any(|term| keyword.contains(term.as_str()))
    }

    /// True if `text` begins with an action verb (case-insensitive, no trimming).
    pub fn starts_with_action_verb(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.action_verbs
            .iter()
            .any(|verb| lower.starts_with(verb.as_str()))
    }

    /// True if `text` contains an outcome verb anywhere (case-insensitive).
    pub fn mentions_metric_verb(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.metric_verbs
            .iter()
            .any(|verb| lower.contains(verb.as_str()))
    }
}

fn to_owned_list(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}
