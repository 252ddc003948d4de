//! Concrete per-file actions

use std::fs;
use std::path::Path;

use regex::Regex;

use super::tree::{FileAction, TreeError};

/// Removes a header matching a pattern from the start of each file.
///
/// Files whose content does not start with a match are left untouched.
pub struct HeaderRemover {
    header_pattern: Regex,
}

impl HeaderRemover {
    pub fn new(header_pattern: Regex) -> Self {
        Self { header_pattern }
    }
}

impl FileAction for HeaderRemover {
    fn process(&mut self, path: &Path) -> Result<(), TreeError> {
        let content = fs::read_to_string(path)?;

        let Some(matched) = self.header_pattern.find(&content) else {
            return Ok(());
        };

        // Only a header anchored at the very start of the file counts.
        if matched.start() != 0 {
            return Ok(());
        }

        fs::write(path, &content[matched.end()..])?;
        Ok(())
    }
}

/// A per-line transformation; returning `None` drops the line.
pub trait LineAction {
    fn process_line(&self, line: &str) -> Option<String>;
}

/// Adapts a [`LineAction`] into a [`FileAction`] by rewriting each file
/// from its surviving lines.
pub struct LineFilter<A> {
    line_action: A,
}

impl<A: LineAction> LineFilter<A> {
    pub fn new(line_action: A) -> Self {
        Self { line_action }
    }
}

impl<A: LineAction> FileAction for LineFilter<A> {
    fn process(&mut self, path: &Path) -> Result<(), TreeError> {
        let content = fs::read_to_string(path)?;

        let processed: String = lines_with_endings(&content)
            .filter_map(|line| self.line_action.process_line(line))
            .collect();

        fs::write(path, processed)?;
        Ok(())
    }
}

/// Strips trailing whitespace from every line, keeping each line's final
/// newline when present.
pub struct TrailingSpaceRemover;

impl LineAction for TrailingSpaceRemover {
    fn process_line(&self, line: &str) -> Option<String> {
        match line.strip_suffix('\n') {
            Some(stripped) => Some(format!("{}\n", stripped.trim_end())),
            None => Some(line.trim_end().to_string()),
        }
    }
}

/// Splits content into lines that keep their trailing `\n`, so a line
/// action can tell whether the file ended with a newline.
fn lines_with_endings(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let split = rest.find('\n').map_or(rest.len(), |index| index + 1);
        let (line, tail) = rest.split_at(split);
        rest = tail;

        Some(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn lines_with_endings_keeps_newlines() {
        let lines: Vec<&str> = lines_with_endings("one\ntwo\nthree").collect();
        assert_eq!(lines, vec!["one\n", "two\n", "three"]);
    }

    #[test]
    fn lines_with_endings_handles_a_trailing_newline() {
        let lines: Vec<&str> = lines_with_endings("one\ntwo\n").collect();
        assert_eq!(lines, vec!["one\n", "two\n"]);
    }

    #[test]
    fn lines_with_endings_on_empty_content_yields_nothing() {
        assert_eq!(lines_with_endings("").count(), 0);
    }

    #[rstest]
    #[case("alpha  \n", "alpha\n")]
    #[case("alpha\t\r\n", "alpha\n")] // CR stripped along with the tab
    #[case("alpha  ", "alpha")] // last line without a newline
    #[case("\n", "\n")]
    fn trailing_space_remover_strips_line_ends(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(
            TrailingSpaceRemover.process_line(line).as_deref(),
            Some(expected)
        );
    }
}
