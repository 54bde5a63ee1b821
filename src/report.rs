use similar::{ChangeTag, TextDiff};
use std::fmt::Write as _;
use std::path::Path;

use crate::migration::MigrationReport;

/// Render the post-write summary, one line per applied operation.
///
/// Unlike the script this replaces, the summary reports what actually
/// happened: each region by name with its real line delta.
pub fn render_summary(report: &MigrationReport, path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut out = String::new();
    let _ = writeln!(out, "✅ {} migrated successfully", file_name);
    for outcome in &report.outcomes {
        if outcome.lines_inserted > 0 {
            let _ = writeln!(
                out,
                "   - {} inserted ({} line{})",
                outcome.region,
                outcome.lines_inserted,
                plural(outcome.lines_inserted)
            );
        }
        if outcome.lines_removed > 0 {
            let _ = writeln!(
                out,
                "   - {} removed ({} line{})",
                outcome.region,
                outcome.lines_removed,
                plural(outcome.lines_removed)
            );
        }
    }
    let _ = writeln!(
        out,
        "   - {} lines -> {} lines",
        report.lines_before, report.lines_after
    );
    out
}

/// Render a line diff between the original and migrated content
pub fn render_diff(old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => continue,
        };
        out.push_str(sign);
        out.push_str(change.value());
        if !change.value().ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
