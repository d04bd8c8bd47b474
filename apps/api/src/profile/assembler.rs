use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::classifier::{classify, lines_in, Section};
use crate::profile::clean::{clean_list, split_skill_lines};
use crate::profile::extract::{extract_pdf_text, ExtractionFailure};
use crate::profile::keywords::SectionKeywords;
use crate::profile::normalize::normalize_lines;

/// Number of normalized lines kept in `raw_text_preview`.
pub const PREVIEW_LINES: usize = 25;

/// Structured result of one profile-document analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub raw_text_preview: String,
}

impl ProfileRecord {
    /// True when nothing was detected and there is no preview text either.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.raw_text_preview.is_empty()
    }
}

/// Analyzes already-extracted document text with the default keyword sets.
pub fn analyze(text: &str) -> ProfileRecord {
    analyze_with(text, &SectionKeywords::default())
}

pub fn analyze_with(text: &str, keywords: &SectionKeywords) -> ProfileRecord {
    let lines = normalize_lines(text);
    let classified = classify(&lines, keywords);

    let record = ProfileRecord {
        skills: clean_list(split_skill_lines(lines_in(&classified, Section::Skills))),
        experience: clean_list(lines_in(&classified, Section::Experience)),
        education: clean_list(lines_in(&classified, Section::Education)),
        raw_text_preview: lines
            .iter()
            .take(PREVIEW_LINES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
    };

    debug!(
        lines = lines.len(),
        skills = record.skills.len(),
        experience = record.experience.len(),
        education = record.education.len(),
        "Profile analyzed"
    );
    record
}

/// Full pipeline from PDF bytes. The only failure is the document not
/// yielding any text; an empty or unstructured document is a valid, empty
/// record.
pub fn analyze_document(pdf_bytes: &[u8]) -> Result<ProfileRecord, ExtractionFailure> {
    let text = extract_pdf_text(pdf_bytes)?;
    Ok(analyze(&text))
}
