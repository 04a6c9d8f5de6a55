//! Parse LLM output into key points

use tracing::debug;

/// Parse a bullet list response into key points
///
/// Accepts `-`, `*`, `•`, `1.` and `1)` markers and strips `**bold**`
/// wrappers. Lines without a marker are treated as preamble and dropped,
/// unless the response has no markers at all, in which case every
/// non-heading line is a key point. Exact duplicates are removed and at
/// most `max` points are returned.
pub fn parse_key_points(response: &str, max: usize) -> Vec<String> {
    let lines: Vec<&str> = response
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with("```"))
        .collect();

    let bulleted: Vec<&str> = lines.iter().filter_map(|l| strip_bullet(l)).collect();

    let candidates = if bulleted.is_empty() {
        lines
            .into_iter()
            .filter(|l| !l.ends_with(':') && !l.starts_with('#'))
            .collect()
    } else {
        bulleted
    };

    let mut points: Vec<String> = Vec::new();
    for candidate in candidates {
        let point = candidate.replace("**", "").trim().to_string();
        if point.is_empty() {
            continue;
        }
        if points.contains(&point) {
            debug!(point = %point, "Dropping duplicate key point");
            continue;
        }
        points.push(point);
    }

    points.truncate(max);
    points
}

/// The text after a bullet marker, if the line has one
fn strip_bullet(line: &str) -> Option<&str> {
    if line.starts_with("**") {
        return None;
    }

    for marker in ['-', '*', '•'] {
        if let Some(rest) = line.strip_prefix(marker) {
            // "---" is a rule, not a bullet
            if rest.trim_start_matches('-').trim().is_empty() {
                return None;
            }
            return Some(rest.trim());
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    rest.strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))
        .map(str::trim)
        .filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_bullets_with_preamble() {
        let response = "Here are the key points:\n\n- First insight\n- Second insight\n";
        assert_eq!(parse_key_points(response, 10), vec!["First insight", "Second insight"]);
    }

    #[test]
    fn test_mixed_markers_and_bold() {
        let response = "* **Pricing**: flat fee\n• Team of 200\n3. Fridays\n4) No rollbacks";
        assert_eq!(
            parse_key_points(response, 10),
            vec!["Pricing: flat fee", "Team of 200", "Fridays", "No rollbacks"]
        );
    }

    #[test]
    fn test_bold_line_is_not_a_star_bullet() {
        let response = "**Key points**\n- Only this";
        assert_eq!(parse_key_points(response, 10), vec!["Only this"]);
    }

    #[test]
    fn test_duplicates_and_cap() {
        let response = "- a\n- b\n- a\n- c\n- d";
        assert_eq!(parse_key_points(response, 3), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_plain_lines_without_markers() {
        let response = "Key points:\nThe company started in a garage\nIt now employs 200 people";
        assert_eq!(
            parse_key_points(response, 10),
            vec!["The company started in a garage", "It now employs 200 people"]
        );
    }

    #[test]
    fn test_rules_and_fences_are_ignored() {
        let response = "```\n- one\n---\n- two\n```";
        assert_eq!(parse_key_points(response, 10), vec!["one", "two"]);
    }

    #[test]
    fn test_years_are_not_numbered_bullets() {
        assert_eq!(strip_bullet("2024 was a good year"), None);
        assert_eq!(strip_bullet("12. Twelfth"), Some("Twelfth"));
    }

    #[test]
    fn test_empty_response() {
        assert!(parse_key_points("", 10).is_empty());
        assert!(parse_key_points("\n  \n", 10).is_empty());
    }
}
