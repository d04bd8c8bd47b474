//! Keyword configuration for the section classifier.
//!
//! Every trigger the classifier reacts to lives here as data, so new terms can
//! be added (or a set swapped out entirely) without touching the control flow
//! in `classifier.rs`.

/// A set of lowercase trigger terms matched by substring containment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSet {
    terms: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Adds a term to the set, returning the extended set.
    #[cfg(test)]
    pub fn with(mut self, term: &str) -> Self {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && !self.terms.contains(&term) {
            self.terms.push(term);
        }
        self
    }

    #[cfg(test)]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.terms.iter().any(|t| lowered.contains(t.as_str()))
    }

    /// True when `lowered` begins with one of the terms.
    pub fn starts(&self, lowered: &str) -> bool {
        self.terms.iter().any(|t| lowered.starts_with(t.as_str()))
    }
}

/// Full trigger configuration: heading sets, content-sniffing sets and the
/// two token limits that shape heading and list detection.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionKeywords {
    pub skills_heading: KeywordSet,
    pub experience_heading: KeywordSet,
    pub education_heading: KeywordSet,
    pub work_signals: KeywordSet,
    pub education_signals: KeywordSet,
    pub skill_signals: KeywordSet,
    /// A comma-joined line with at most this many tokens sniffs as a skill list.
    pub list_token_limit: usize,
    /// A heading keyword only makes a heading on lines this short, unless
    /// the line starts with the keyword.
    pub heading_token_limit: usize,
}

impl Default for SectionKeywords {
    fn default() -> Self {
        Self {
            skills_heading: KeywordSet::new(["skill", "skills", "technical skills", "core skills"]),
            experience_heading: KeywordSet::new([
                "experience",
                "work experience",
                "professional experience",
                "intern",
            ]),
            education_heading: KeywordSet::new([
                "education",
                "academic",
                "qualification",
                "degree",
                "bachelor",
                "master",
                "college",
                "university",
            ]),
            work_signals: KeywordSet::new([
                "company",
                "inc",
                "ltd",
                "pvt",
                "intern",
                "internship",
                "worked",
                "project",
            ]),
            education_signals: KeywordSet::new([
                "bachelor",
                "master",
                "b.sc",
                "b.tech",
                "bachelor's",
                "university",
                "college",
                "graduat",
            ]),
            skill_signals: KeywordSet::new([
                "python",
                "java",
                "excel",
                "sql",
                "machine learning",
                "ml",
            ]),
            list_token_limit: 12,
            heading_token_limit: 3,
        }
    }
}
