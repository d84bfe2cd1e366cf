// ATS scoring engine: keyword extraction, injected term lists, and the
// weighted format/content/keyword score with suggestions.

pub mod ats;
pub mod handlers;
pub mod keywords;
pub mod lexicon;
