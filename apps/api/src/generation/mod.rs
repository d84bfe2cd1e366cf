// Document generation: summary synthesis, keyword optimization, and rendering
// of resumes (templated markup) and cover letters (paragraph text).
// Everything here is pure; the handlers are the only HTTP-facing code.

pub mod cover_letter;
pub mod handlers;
pub mod optimizer;
pub mod resume_html;
pub mod summary;
pub mod templates;
