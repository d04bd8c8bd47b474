//! Section classifier. Tags each normalized line of a profile document as
//! skills, experience or education.
//!
//! Single pass, first match wins per line:
//! 1. heading lines (skills, then experience, then education) switch the
//!    current section and are consumed;
//! 2. before any heading has been seen, content sniffing infers a section
//!    from work / degree / skill signals;
//! 3. every other line lands in whatever section is current, or is left
//!    unclassified when there is none yet.

use crate::profile::keywords::{KeywordSet, SectionKeywords};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    Skills,
    Experience,
    Education,
    #[default]
    Unclassified,
}

/// A content line paired with the section that was active when it was read.
/// Heading lines never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub text: String,
    pub section: Section,
}

/// Classifier state threaded through the fold. Scoped to one call.
#[derive(Debug, Clone, Copy, Default)]
struct ClassifierState {
    current: Section,
    heading_seen: bool,
}

/// Outcome of reading one line.
enum Step {
    Heading,
    Content(Section),
}

pub fn classify(lines: &[String], keywords: &SectionKeywords) -> Vec<ClassifiedLine> {
    let (_, classified) = lines.iter().fold(
        (ClassifierState::default(), Vec::with_capacity(lines.len())),
        |(state, mut out), line| {
            let (next, step) = advance(state, line, keywords);
            if let Step::Content(section) = step {
                out.push(ClassifiedLine {
                    text: line.clone(),
                    section,
                });
            }
            (next, out)
        },
    );
    classified
}

/// Lines of `classified` that belong to `section`, in document order.
pub fn lines_in(classified: &[ClassifiedLine], section: Section) -> Vec<&str> {
    classified
        .iter()
        .filter(|l| l.section == section)
        .map(|l| l.text.as_str())
        .collect()
}

fn advance(state: ClassifierState, line: &str, keywords: &SectionKeywords) -> (ClassifierState, Step) {
    let lowered = line.to_lowercase();

    if let Some(section) = heading_section(&lowered, keywords) {
        let next = ClassifierState {
            current: section,
            heading_seen: true,
        };
        return (next, Step::Heading);
    }

    // Sniffing stays off for the rest of the document once an explicit
    // heading has appeared, even if a later line carries a stronger signal.
    let current = if state.heading_seen {
        state.current
    } else {
        sniff_section(line, &lowered, keywords).unwrap_or(state.current)
    };

    (
        ClassifierState { current, ..state },
        Step::Content(current),
    )
}

/// Headings are checked before any sniffing, so a line that is both a
/// heading and a sniff match is always treated as a heading.
fn heading_section(lowered: &str, keywords: &SectionKeywords) -> Option<Section> {
    let short = lowered.split_whitespace().count() <= keywords.heading_token_limit;
    let leading = lowered.trim_start_matches(|c: char| !c.is_alphanumeric());
    let is_heading = |set: &KeywordSet| set.matches(lowered) && (short || set.starts(leading));

    if is_heading(&keywords.skills_heading) {
        Some(Section::Skills)
    } else if is_heading(&keywords.experience_heading) {
        Some(Section::Experience)
    } else if is_heading(&keywords.education_heading) {
        Some(Section::Education)
    } else {
        None
    }
}

fn sniff_section(line: &str, lowered: &str, keywords: &SectionKeywords) -> Option<Section> {
    if keywords.work_signals.matches(lowered) {
        return Some(Section::Experience);
    }
    if keywords.education_signals.matches(lowered) {
        return Some(Section::Education);
    }
    let short_list =
        line.contains(',') && line.split_whitespace().count() <= keywords.list_token_limit;
    if short_list || keywords.skill_signals.matches(lowered) {
        return Some(Section::Skills);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Vec<ClassifiedLine> {
        let owned: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        classify(&owned, &SectionKeywords::default())
    }

    fn sections(classified: &[ClassifiedLine]) -> Vec<(&str, Section)> {
        classified
            .iter()
            .map(|l| (l.text.as_str(), l.section))
            .collect()
    }

    #[test]
    fn test_headings_are_consumed_and_sticky() {
        let out = run(&[
            "Skills",
            "Python, SQL",
            "Experience",
            "Acme Corp - Intern",
            "Education",
            "B.Tech Computer Science",
        ]);
        assert_eq!(
            sections(&out),
            vec![
                ("Python, SQL", Section::Skills),
                ("Acme Corp - Intern", Section::Experience),
                ("B.Tech Computer Science", Section::Education),
            ]
        );
    }

    #[test]
    fn test_sniffing_without_headings() {
        let out = run(&["Worked at Acme Inc as intern", "Python, SQL, Excel"]);
        assert_eq!(
            sections(&out),
            vec![
                ("Worked at Acme Inc as intern", Section::Experience),
                ("Python, SQL, Excel", Section::Skills),
            ]
        );
    }

    #[test]
    fn test_lines_before_any_signal_stay_unclassified() {
        let out = run(&["Jane Doe", "Pune, Maharashtra, India"]);
        assert_eq!(out[0].section, Section::Unclassified);
        // comma list with few tokens sniffs as skills
        assert_eq!(out[1].section, Section::Skills);
    }

    #[test]
    fn test_no_signals_means_nothing_classified() {
        let out = run(&["Jane Doe", "Hello there", "Open to new roles"]);
        assert!(out.iter().all(|l| l.section == Section::Unclassified));
    }

    #[test]
    fn test_heading_disables_sniffing() {
        let out = run(&[
            "Experience",
            "Software Engineer at Acme",
            "Graduated from State University in 2019",
        ]);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|l| l.section == Section::Experience));
    }

    #[test]
    fn test_sniffed_section_sticks_for_plain_lines() {
        let out = run(&["Backend developer at Acme Pvt Ltd", "Led a team of four"]);
        assert!(out.iter().all(|l| l.section == Section::Experience));
    }

    #[test]
    fn test_heading_wins_over_sniff_signals() {
        let out = run(&["University Education", "St. Xavier's College, Mumbai, 2016-2020"]);
        // first line is a heading, so only the second is content
        assert_eq!(
            sections(&out),
            vec![("St. Xavier's College, Mumbai, 2016-2020", Section::Education)]
        );
    }

    #[test]
    fn test_long_line_with_heading_keyword_is_content() {
        let out = run(&["Skills", "Improved reporting experience for the finance team"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].section, Section::Skills);
    }

    #[test]
    fn test_long_heading_starting_with_keyword() {
        let out = run(&["- Work Experience & Internships 2019 - 2023", "Acme Labs"]);
        assert_eq!(sections(&out), vec![("Acme Labs", Section::Experience)]);
    }

    #[test]
    fn test_skills_heading_checked_before_experience() {
        let out = run(&["Experience Skills", "Rust"]);
        assert_eq!(out[0].section, Section::Skills);
    }

    #[test]
    fn test_lines_in_filters_by_section() {
        let out = run(&["Skills", "Rust", "Education", "BSc Physics"]);
        assert_eq!(lines_in(&out, Section::Skills), vec!["Rust"]);
        assert_eq!(lines_in(&out, Section::Education), vec!["BSc Physics"]);
        assert!(lines_in(&out, Section::Experience).is_empty());
    }
}
