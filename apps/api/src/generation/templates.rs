//! Resume templates. Each variant carries its own style descriptor, selected by
//! exhaustive match, so an unknown identifier fails at parse time instead of
//! rendering with missing classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown template '{0}'. Expected one of: modern, professional, creative")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeTemplate {
    Modern,
    Professional,
    Creative,
}

/// CSS class names for every structural element of a rendered resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    pub container: &'static str,
    pub header: &'static str,
    pub name: &'static str,
    pub contact: &'static str,
    pub section: &'static str,
    pub section_title: &'static str,
    pub job_title: &'static str,
    pub job_company: &'static str,
    pub skill_container: &'static str,
    pub skill: &'static str,
}

const MODERN_STYLE: TemplateStyle = TemplateStyle {
    container: "modern-resume bg-white p-8",
    header: "flex flex-col items-center text-center mb-8",
    name: "text-3xl font-bold text-gray-800 mb-2",
    contact: "text-gray-600 flex flex-wrap justify-center gap-3 text-sm",
    section: "mb-8",
    section_title: "text-2xl font-bold text-blue-600 mb-4 pb-2 border-b-2 border-blue-200",
    job_title: "text-xl font-semibold text-gray-800",
    job_company: "text-lg text-blue-600",
    skill_container: "flex flex-wrap gap-2",
    skill: "px-4 py-2 bg-blue-50 text-blue-700 rounded-full text-sm font-medium",
};

const PROFESSIONAL_STYLE: TemplateStyle = TemplateStyle {
    container: "professional-resume bg-white p-8",
    header: "border-b-2 border-gray-800 pb-4 mb-8",
    name: "text-4xl font-bold text-gray-900",
    contact: "text-gray-700 mt-2 space-x-4",
    section: "mb-8",
    section_title: "text-xl font-bold text-gray-900 mb-4 uppercase tracking-wider",
    job_title: "font-bold text-gray-800",
    job_company: "text-gray-700",
    skill_container: "grid grid-cols-2 md:grid-cols-3 gap-3",
    skill: "px-3 py-1 bg-gray-100 text-gray-800 rounded text-sm",
};

const CREATIVE_STYLE: TemplateStyle = TemplateStyle {
    container: "creative-resume bg-gradient-to-br from-indigo-50 to-white p-8",
    header: "bg-gradient-to-r from-indigo-600 to-purple-600 text-white rounded-lg p-6 mb-8 shadow-lg",
    name: "text-3xl font-bold mb-2",
    contact: "text-indigo-100 flex flex-wrap gap-4",
    section: "mb-8 bg-white rounded-lg p-6 shadow-md",
    section_title: "text-2xl font-bold text-indigo-600 mb-4",
    job_title: "text-lg font-semibold text-gray-800",
    job_company: "text-indigo-600 font-medium",
    skill_container: "flex flex-wrap gap-3",
    skill: "px-4 py-2 bg-gradient-to-r from-indigo-500 to-purple-500 text-white rounded-lg text-sm font-medium shadow-sm",
};

impl ResumeTemplate {
    pub const ALL: [ResumeTemplate; 3] = [
        ResumeTemplate::Modern,
        ResumeTemplate::Professional,
        ResumeTemplate::Creative,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ResumeTemplate::Modern => "modern",
            ResumeTemplate::Professional => "professional",
            ResumeTemplate::Creative => "creative",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ResumeTemplate::Modern => "Modern",
            ResumeTemplate::Professional => "Professional",
            ResumeTemplate::Creative => "Creative",
        }
    }

    pub fn style(self) -> &'static TemplateStyle {
        match self {
            ResumeTemplate::Modern => &MODERN_STYLE,
            ResumeTemplate::Professional => &PROFESSIONAL_STYLE,
            ResumeTemplate::Creative => &CREATIVE_STYLE,
        }
    }
}

impl FromStr for ResumeTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResumeTemplate::ALL
            .into_iter()
            .find(|template| template.id() == s)
            .ok_or_else(|| TemplateError::Unknown(s.to_string()))
    }
}

impl fmt::Display for ResumeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
