//! CLI output formatting.
//!
//! Information-first: the headline is the selected card's identity (rotation
//! index + title), with file paths as indented context lines underneath.
//! `format_*` returns lines so tests can assert on them; `print_*` writes
//! them to stdout.
//!
//! ```text
//! Queued card 3/12: Silent letters
//!     Link:      chapters/02.html
//!     Schedule:  2025-10-13 08:10
//!     Text:      /abs/posts/pick_20251013_0810.txt
//!     Media:     /abs/lib/front_cover_small.jpg
//!     Queue:     queue.tsv (5 rows)
//!     Row id:    pick-20251013-081004-idx2
//! ```

use crate::pipeline::RunReport;
use std::path::Path;

/// Format the run report. `queue_path` is shown as given on the command
/// line, not canonicalized — it is the name the user will grep for.
pub fn format_report(report: &RunReport, queue_path: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Queued card {}/{}: {}",
        report.index + 1,
        report.card_count,
        report.card.title
    ));
    lines.push(format!("    Link:      {}", report.card.url));
    lines.push(format!("    Schedule:  {}", report.row.scheduled_at));
    lines.push(format!("    Text:      {}", report.text_path.display()));
    if report.row.media_paths.is_empty() {
        lines.push("    Media:     (none)".to_string());
    } else {
        lines.push(format!("    Media:     {}", report.row.media_paths));
    }
    lines.push(format!(
        "    Queue:     {} ({} row{})",
        queue_path.display(),
        report.queue_len,
        if report.queue_len == 1 { "" } else { "s" }
    ));
    lines.push(format!("    Row id:    {}", report.row.id));
    lines
}

pub fn print_report(report: &RunReport, queue_path: &Path) {
    for line in format_report(report, queue_path) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Card;
    use crate::queue::{QueueRow, STATUS_PENDING};
    use std::path::PathBuf;

    fn report() -> RunReport {
        RunReport {
            card: Card {
                title: "Silent letters".to_string(),
                url: "chapters/02.html".to_string(),
                qr_src: None,
            },
            index: 2,
            card_count: 12,
            text_path: PathBuf::from("/posts/pick_20251013_0810.txt"),
            row: QueueRow {
                id: "pick-20251013-081004-idx2".to_string(),
                scheduled_at: "2025-10-13 08:10".to_string(),
                text_path: "/posts/pick_20251013_0810.txt".to_string(),
                media_paths: String::new(),
                status: STATUS_PENDING.to_string(),
                remote_post_id: String::new(),
                posted_at: String::new(),
            },
            queue_len: 1,
        }
    }

    #[test]
    fn headline_is_one_based_index_and_title() {
        let lines = format_report(&report(), Path::new("queue.tsv"));
        assert_eq!(lines[0], "Queued card 3/12: Silent letters");
    }

    #[test]
    fn missing_media_shown_as_none() {
        let lines = format_report(&report(), Path::new("queue.tsv"));
        assert!(lines.iter().any(|l| l.contains("Media:     (none)")));
    }

    #[test]
    fn queue_line_uses_given_path_and_singular_row() {
        let lines = format_report(&report(), Path::new("queue.tsv"));
        assert!(lines.iter().any(|l| l.contains("queue.tsv (1 row)")));
    }
}
