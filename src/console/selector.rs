//! Reading the user's choice from a numbered list.

use std::io::{BufRead, Write};

use wikiseek_search::SearchResult;

use super::read_line_lossy;

/// Input that cancels the selection (case-insensitive).
pub const CANCEL_SENTINEL: &str = "q";

/// Outcome of [`select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// A valid choice. `position` is 1-based.
    Chosen {
        position: usize,
        result: &'a SearchResult,
    },
    Cancelled,
}

/// Prompt until the input names a result or cancels.
///
/// Non-numeric input and out-of-range numbers reprompt without limit. End
/// of input cancels, as does an empty `results` list.
pub fn select<'a, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    results: &'a [SearchResult],
) -> std::io::Result<Selection<'a>> {
    if results.is_empty() {
        return Ok(Selection::Cancelled);
    }
    let count = results.len();

    loop {
        write!(
            out,
            "Enter the article number (1-{count}) or '{CANCEL_SENTINEL}' to cancel: "
        )?;
        out.flush()?;

        let Some(line) = read_line_lossy(input)? else {
            tracing::debug!("input closed during selection");
            return Ok(Selection::Cancelled);
        };
        let answer = line.trim();

        if answer.eq_ignore_ascii_case(CANCEL_SENTINEL) {
            return Ok(Selection::Cancelled);
        }

        match answer.parse::<usize>() {
            Ok(position) if (1..=count).contains(&position) => {
                return Ok(Selection::Chosen {
                    position,
                    result: &results[position - 1],
                });
            }
            Ok(_) => {
                writeln!(out, "Number out of range. Enter a value from 1 to {count}.")?;
            }
            Err(_) if is_integer(answer) => {
                writeln!(out, "Number out of range. Enter a value from 1 to {count}.")?;
            }
            Err(_) => {
                writeln!(
                    out,
                    "Please enter a number, or '{CANCEL_SENTINEL}' to cancel."
                )?;
            }
        }
    }
}

/// Signed decimal integer of any magnitude.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn three() -> Vec<SearchResult> {
        vec![
            SearchResult::new("One"),
            SearchResult::new("Two"),
            SearchResult::new("Three"),
        ]
    }

    fn run<'a>(input: &str, results: &'a [SearchResult]) -> (Selection<'a>, String) {
        let mut reader = Cursor::new(input.to_owned());
        let mut out = Vec::new();
        let selection = select(&mut reader, &mut out, results).expect("select");
        (selection, String::from_utf8(out).expect("utf8"))
    }

    fn prompts(text: &str) -> usize {
        text.matches("Enter the article number").count()
    }

    #[test]
    fn valid_number_selects_result() {
        let results = three();
        let (selection, text) = run("2\n", &results);
        assert_eq!(
            selection,
            Selection::Chosen {
                position: 2,
                result: &results[1]
            }
        );
        assert_eq!(prompts(&text), 1);
    }

    #[test]
    fn out_of_range_reprompts_with_range() {
        let results = three();
        let (selection, text) = run("0\n4\n3\n", &results);
        assert!(matches!(selection, Selection::Chosen { position: 3, .. }));
        assert_eq!(prompts(&text), 3);
        assert_eq!(text.matches("Enter a value from 1 to 3.").count(), 2);
    }

    #[test]
    fn negative_number_is_out_of_range() {
        let results = three();
        let (selection, text) = run("-1\n1\n", &results);
        assert!(matches!(selection, Selection::Chosen { position: 1, .. }));
        assert!(text.contains("Number out of range"));
    }

    #[test]
    fn non_numeric_reprompts() {
        let results = three();
        let (selection, text) = run("two\n\n1\n", &results);
        assert!(matches!(selection, Selection::Chosen { position: 1, .. }));
        assert_eq!(text.matches("Please enter a number").count(), 2);
    }

    #[test]
    fn oversized_number_is_out_of_range() {
        let results = three();
        let (selection, text) = run("4294967297\n99999999999999999999999\n2\n", &results);
        assert!(matches!(selection, Selection::Chosen { position: 2, .. }));
        assert_eq!(text.matches("Number out of range").count(), 2);
        assert!(!text.contains("Please enter a number"));
    }

    #[test]
    fn non_utf8_input_reprompts() {
        // 'q' key on a Russian layout in cp1251
        let results = three();
        let mut reader = Cursor::new(b"\xe9\n2\n".to_vec());
        let mut out = Vec::new();
        let selection = select(&mut reader, &mut out, &results).expect("select");
        let text = String::from_utf8(out).expect("utf8");
        assert!(matches!(selection, Selection::Chosen { position: 2, .. }));
        assert!(text.contains("Please enter a number"));
        assert_eq!(prompts(&text), 2);
    }

    #[test]
    fn sentinel_cancels_without_further_prompting() {
        let results = three();
        let (selection, text) = run("q\n2\n", &results);
        assert_eq!(selection, Selection::Cancelled);
        assert_eq!(prompts(&text), 1);
    }

    #[test]
    fn uppercase_sentinel_cancels() {
        let results = three();
        let (selection, _) = run(" Q \n", &results);
        assert_eq!(selection, Selection::Cancelled);
    }

    #[test]
    fn end_of_input_cancels() {
        let results = three();
        let (selection, text) = run("abc\n", &results);
        assert_eq!(selection, Selection::Cancelled);
        assert_eq!(prompts(&text), 2);
    }

    #[test]
    fn empty_list_cancels_immediately() {
        let (selection, text) = run("1\n", &[]);
        assert_eq!(selection, Selection::Cancelled);
        assert!(text.is_empty());
    }
}
