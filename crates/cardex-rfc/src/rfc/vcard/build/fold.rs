//! vCard line folding.

use cardex_core::constants::{CRLF, FOLD_WIDTH};

/// Folds a logical line to the interchange width.
///
/// Lines longer than 75 characters keep their first 75 characters on the
/// first physical line; every following chunk holds at most 74 characters
/// behind a single leading space. No terminator is appended after the last
/// chunk. Splits only at character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= FOLD_WIDTH {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / FOLD_WIDTH * 3);
    let mut current_len = 0;
    let mut first_segment = true;

    for c in line.chars() {
        // Continuation lines spend one character on the leading space
        let effective_max = if first_segment {
            FOLD_WIDTH
        } else {
            FOLD_WIDTH - 1
        };

        if current_len == effective_max {
            result.push_str(CRLF);
            result.push(' ');
            current_len = 0;
            first_segment = false;
        }

        result.push(c);
        current_len += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::parse::unfold;

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn exactly_75_is_not_folded() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line), line);
    }

    #[test]
    fn fold_at_75_then_74() {
        let line = "X".repeat(75 + 74 + 10);
        let folded = fold_line(&line);
        let physical: Vec<&str> = folded.split(CRLF).collect();

        assert_eq!(physical.len(), 3);
        assert_eq!(physical[0].chars().count(), 75);
        assert_eq!(physical[1].chars().count(), 75);
        assert!(physical[1].starts_with(' '));
        assert_eq!(physical[2], format!(" {}", "X".repeat(10)));
    }

    #[test]
    fn fold_counts_characters_not_bytes() {
        let line = format!("NOTE:{}", "日".repeat(80));
        let folded = fold_line(&line);
        let first: &str = folded.split(CRLF).next().unwrap();
        assert_eq!(first.chars().count(), 75);
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn fold_keeps_leading_spaces_of_chunks() {
        let line = format!("{} tail", "X".repeat(75));
        let folded = fold_line(&line);
        assert!(folded.ends_with("\r\n  tail"));
        assert_eq!(unfold(&folded), line);
    }
}
