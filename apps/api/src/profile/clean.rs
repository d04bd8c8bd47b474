use std::collections::HashSet;

/// Items shorter than this (in chars, after trimming) are dropped.
pub const MIN_ITEM_CHARS: usize = 3;

/// Splits comma-joined skill lines into discrete items.
/// Lines without a comma pass through trimmed.
pub fn split_skill_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .flat_map(|line| {
            let parts: Vec<String> = if line.contains(',') {
                line.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            } else {
                vec![line.trim().to_string()]
            };
            parts
        })
        .collect()
}

/// Trims, drops short items and deduplicates case-insensitively.
/// The first occurrence wins, keeping its casing and position.
pub fn clean_list<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for item in items {
        let item = item.as_ref().trim();
        if item.chars().count() < MIN_ITEM_CHARS {
            continue;
        }
        if seen.insert(item.to_lowercase()) {
            cleaned.push(item.to_string());
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skill_lines_flattens_in_order() {
        let split = split_skill_lines(["Python, Java , SQL", "Docker", " , ,Go"]);
        assert_eq!(split, vec!["Python", "Java", "SQL", "Docker", "Go"]);
    }

    #[test]
    fn test_short_items_are_dropped() {
        let cleaned = clean_list(["Go", " C ", "R", "Rust", "   "]);
        assert_eq!(cleaned, vec!["Rust"]);
    }

    #[test]
    fn test_dedup_is_case_insensitive_first_wins() {
        let cleaned = clean_list(["Python", "python", "PYTHON ", "SQL", "sql"]);
        assert_eq!(cleaned, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // two chars, four bytes
        assert!(clean_list(["éé"]).is_empty());
        assert_eq!(clean_list(["ééé"]), vec!["ééé"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(clean_list(Vec::<String>::new()).is_empty());
        assert!(split_skill_lines(Vec::<&str>::new()).is_empty());
    }
}
