//! The concrete edit plan for `ClientProfile.tsx`.
//!
//! Everything the migration touches is named here: the anchor for the new
//! import, the duplicated upload handler, and the superseded documents tab.
//! Each region must match exactly once or the whole migration fails without
//! writing anything.

use tracing::info;

use crate::document::Document;
use crate::edit::{AnchoredInsert, EditOutcome, FunctionRemoval, TabBlockRemoval};
use crate::error::FixResult;

/// The file this migration was written against
pub const DEFAULT_TARGET: &str = "client/src/pages/ClientProfile.tsx";

// The DashboardLayout import sits at line index 27 and the new DocumentsTab
// import goes immediately after it.
const IMPORT_ANCHOR_INDEX: usize = 27;
const IMPORT_ANCHOR_MARKER: &str = "import DashboardLayout";
const DOCUMENTS_TAB_IMPORT: &str = "import DocumentsTab from \"@/components/DocumentsTab\";\n";

// The duplicated upload handler: declaration line through the next lone
// `};`, which sits well inside a 50-line window.
const UPLOAD_FN_MARKER: &str = "const handleFileUpload";
const UPLOAD_FN_LOOKAHEAD: usize = 50;

// The old inline documents tab. The replacement tab renders
// `<DocumentsTab />` and carries no className, so the attribute check keeps
// it safe from removal.
const TAB_COMMENT_MARKER: &str = "{/* Documents Tab */}";
const TAB_OPENING_TAG: &str = "<TabsContent value=\"documents\"";
const TAB_ATTRIBUTE: &str = "className=\"space-y-4\"";
const TAB_CLOSING_TAG: &str = "</TabsContent>";

/// Aggregated result of the whole migration
#[derive(Debug)]
pub struct MigrationReport {
    pub outcomes: Vec<EditOutcome>,
    pub lines_before: usize,
    pub lines_after: usize,
}

fn import_insert() -> AnchoredInsert {
    AnchoredInsert {
        name: "DocumentsTab import".to_string(),
        anchor_index: IMPORT_ANCHOR_INDEX,
        anchor_marker: IMPORT_ANCHOR_MARKER.to_string(),
        line: DOCUMENTS_TAB_IMPORT.to_string(),
    }
}

fn upload_handler_removal() -> FunctionRemoval {
    FunctionRemoval {
        name: "duplicate handleFileUpload".to_string(),
        start_marker: UPLOAD_FN_MARKER.to_string(),
        lookahead: UPLOAD_FN_LOOKAHEAD,
    }
}

fn old_tab_removal() -> TabBlockRemoval {
    TabBlockRemoval {
        name: "old documents tab".to_string(),
        comment_marker: TAB_COMMENT_MARKER.to_string(),
        opening_tag: TAB_OPENING_TAG.to_string(),
        attribute: TAB_ATTRIBUTE.to_string(),
        closing_tag: TAB_CLOSING_TAG.to_string(),
    }
}

/// Run both passes against the loaded document.
///
/// The document is only replaced when every operation located its region, so
/// a failed run leaves the in-memory lines (and the file) untouched.
pub fn apply(document: &mut Document) -> FixResult<MigrationReport> {
    let lines_before = document.line_count();
    let mut outcomes = Vec::new();

    let (lines, outcome) = import_insert().apply(document.lines())?;
    outcomes.push(outcome);
    let (lines, outcome) = upload_handler_removal().apply(&lines)?;
    outcomes.push(outcome);
    let (lines, outcome) = old_tab_removal().apply(&lines)?;
    outcomes.push(outcome);

    let lines_after = lines.len();
    document.replace_lines(lines);

    info!(
        "Migration applied: {} -> {} lines",
        lines_before, lines_after
    );

    Ok(MigrationReport {
        outcomes,
        lines_before,
        lines_after,
    })
}
