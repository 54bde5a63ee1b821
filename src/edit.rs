use regex::Regex;
use std::ops::Range;
use tracing::debug;

use crate::error::{FixError, FixResult};

// The function block ends at the first line holding nothing but a closing
// brace and semicolon, the same boundary the hand-written cleanup relied on.
lazy_static::lazy_static! {
    static ref FUNCTION_CLOSE: Regex = Regex::new(r"^\s*\};\s*$").unwrap();
}

/// Outcome of one applied edit, used to build the final report
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub region: String,
    pub lines_inserted: usize,
    pub lines_removed: usize,
}

/// Insert a fixed line immediately after an anchor line.
///
/// The anchor is positional: the line at `anchor_index` must also contain
/// `anchor_marker`, otherwise the file has drifted from the layout this
/// migration was written against and the operation refuses to guess.
#[derive(Debug, Clone)]
pub struct AnchoredInsert {
    pub name: String,
    pub anchor_index: usize,
    pub anchor_marker: String,
    /// Full line to insert, terminator included
    pub line: String,
}

impl AnchoredInsert {
    pub fn apply(&self, lines: &[String]) -> FixResult<(Vec<String>, EditOutcome)> {
        let anchor = lines.get(self.anchor_index).ok_or_else(|| {
            FixError::anchor_mismatch(&self.name, self.anchor_index, &self.anchor_marker)
        })?;
        if !anchor.contains(&self.anchor_marker) {
            return Err(FixError::anchor_mismatch(
                &self.name,
                self.anchor_index,
                &self.anchor_marker,
            ));
        }

        debug!(
            "Inserting '{}' after line {}",
            self.name,
            self.anchor_index + 1
        );

        let mut output = Vec::with_capacity(lines.len() + 1);
        output.extend_from_slice(&lines[..=self.anchor_index]);
        output.push(self.line.clone());
        output.extend_from_slice(&lines[self.anchor_index + 1..]);

        Ok((
            output,
            EditOutcome {
                region: self.name.clone(),
                lines_inserted: 1,
                lines_removed: 0,
            },
        ))
    }
}

/// Remove a function block: the line holding the start marker through the
/// next lone `};` line, searched within a bounded lookahead window.
#[derive(Debug, Clone)]
pub struct FunctionRemoval {
    pub name: String,
    pub start_marker: String,
    pub lookahead: usize,
}

impl FunctionRemoval {
    /// Locate the block, enforcing that the start marker matches exactly once
    fn locate(&self, lines: &[String]) -> FixResult<Range<usize>> {
        let start = unique_match(&self.name, lines, |line| line.contains(&self.start_marker))
            .ok_or_else(|| FixError::region_not_found(&self.name, &self.start_marker))??;

        let window_end = (start + self.lookahead).min(lines.len());
        let close = (start + 1..window_end)
            .find(|&i| FUNCTION_CLOSE.is_match(&lines[i]))
            .ok_or_else(|| FixError::unterminated_region(&self.name, start + 1, "};"))?;

        Ok(start..close + 1)
    }

    pub fn apply(&self, lines: &[String]) -> FixResult<(Vec<String>, EditOutcome)> {
        let range = self.locate(lines)?;
        debug!(
            "Removing '{}': lines {}-{}",
            self.name,
            range.start + 1,
            range.end
        );
        Ok(remove_range(&self.name, lines, range))
    }
}

/// Remove a JSX tab block: a comment-marker line whose immediately following
/// line carries both the opening tag and the attribute, through the next line
/// containing the closing tag (inclusive).
#[derive(Debug, Clone)]
pub struct TabBlockRemoval {
    pub name: String,
    pub comment_marker: String,
    pub opening_tag: String,
    pub attribute: String,
    pub closing_tag: String,
}

impl TabBlockRemoval {
    fn is_start(&self, lines: &[String], index: usize) -> bool {
        lines[index].contains(&self.comment_marker)
            && lines
                .get(index + 1)
                .map(|next| next.contains(&self.opening_tag) && next.contains(&self.attribute))
                .unwrap_or(false)
    }

    fn locate(&self, lines: &[String]) -> FixResult<Range<usize>> {
        let candidates: Vec<usize> = (0..lines.len())
            .filter(|&i| self.is_start(lines, i))
            .collect();

        let start = match candidates.len() {
            0 => return Err(FixError::region_not_found(&self.name, &self.comment_marker)),
            1 => candidates[0],
            count => return Err(FixError::multiple_matches(&self.name, count)),
        };

        let close = (start + 1..lines.len())
            .find(|&i| lines[i].contains(&self.closing_tag))
            .ok_or_else(|| {
                FixError::unterminated_region(&self.name, start + 1, &self.closing_tag)
            })?;

        Ok(start..close + 1)
    }

    pub fn apply(&self, lines: &[String]) -> FixResult<(Vec<String>, EditOutcome)> {
        let range = self.locate(lines)?;
        debug!(
            "Removing '{}': lines {}-{}",
            self.name,
            range.start + 1,
            range.end
        );
        Ok(remove_range(&self.name, lines, range))
    }
}

/// Find the single line index satisfying the predicate.
///
/// Returns `None` for zero matches so callers can attach their own marker to
/// the error, and `Some(Err(MultipleMatches))` when the region is ambiguous.
fn unique_match(
    name: &str,
    lines: &[String],
    predicate: impl Fn(&str) -> bool,
) -> Option<FixResult<usize>> {
    let mut matches = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| predicate(line.as_str()))
        .map(|(i, _)| i);

    let first = matches.next()?;
    let rest = matches.count();
    if rest > 0 {
        return Some(Err(FixError::multiple_matches(name, rest + 1)));
    }
    Some(Ok(first))
}

fn remove_range(name: &str, lines: &[String], range: Range<usize>) -> (Vec<String>, EditOutcome) {
    let mut output = Vec::with_capacity(lines.len() - range.len());
    output.extend_from_slice(&lines[..range.start]);
    output.extend_from_slice(&lines[range.end..]);

    let outcome = EditOutcome {
        region: name.to_string(),
        lines_inserted: 0,
        lines_removed: range.len(),
    };
    (output, outcome)
}
