//! The pending-post queue store.
//!
//! A tab-separated UTF-8 file with a header row and one row per queued
//! post. This tool only ever appends; the publisher that drains the queue
//! owns the `status` / `remote_post_id` / `posted_at` columns and flips
//! `PENDING` rows to `POSTED` out-of-band.
//!
//! ## Fixed Schema
//!
//! ```text
//! id  scheduled_at  text_path  media_paths  status  remote_post_id  posted_at
//! ```
//!
//! Column order is part of the contract — the publisher reads positionally
//! after the header. Appending is deliberately a read-all / rewrite-all
//! pass keyed by the header row: prior rows come back out with their values
//! intact, but mapped onto the fixed schema, so a store that was hand-edited
//! with missing or extra columns self-heals on the next append. Short rows
//! get empty strings for the absent columns; unknown columns are dropped.
//!
//! A store that exists but cannot be parsed as a delimited table is a fatal
//! error and the file is left untouched — never overwrite queued posts with
//! a guess.
//!
//! ## Crash Safety
//!
//! The rewrite goes to a temp file in the store's directory and is renamed
//! over the target, so an interrupt mid-write cannot truncate prior rows.
//! There is no locking: the queue is fed at most once a day by a single
//! invocation, and that single-writer assumption is documented rather than
//! solved here.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Queue columns, in on-disk order.
pub const COLUMNS: [&str; 7] = [
    "id",
    "scheduled_at",
    "text_path",
    "media_paths",
    "status",
    "remote_post_id",
    "posted_at",
];

/// Initial `status` value for every row this tool writes.
pub const STATUS_PENDING: &str = "PENDING";

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("queue store {path} is not a well-formed tab-separated table: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed writing queue store: {0}")]
    Write(#[from] csv::Error),
}

/// One queued post, all fields as stored.
///
/// Everything is a string: this type round-trips rows written by older
/// versions or edited by hand, and the publisher's columns are opaque here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueueRow {
    pub id: String,
    pub scheduled_at: String,
    pub text_path: String,
    pub media_paths: String,
    pub status: String,
    pub remote_post_id: String,
    pub posted_at: String,
}

impl QueueRow {
    fn fields(&self) -> [&str; 7] {
        [
            &self.id,
            &self.scheduled_at,
            &self.text_path,
            &self.media_paths,
            &self.status,
            &self.remote_post_id,
            &self.posted_at,
        ]
    }

    fn set(&mut self, column: &str, value: &str) {
        match column {
            "id" => self.id = value.to_string(),
            "scheduled_at" => self.scheduled_at = value.to_string(),
            "text_path" => self.text_path = value.to_string(),
            "media_paths" => self.media_paths = value.to_string(),
            "status" => self.status = value.to_string(),
            "remote_post_id" => self.remote_post_id = value.to_string(),
            "posted_at" => self.posted_at = value.to_string(),
            _ => {} // unknown column from a hand-edited store; dropped
        }
    }
}

/// Read all rows currently in the store. A missing file is an empty queue.
pub fn read_rows(store: &Path) -> Result<Vec<QueueRow>, QueueError> {
    if !store.exists() {
        return Ok(Vec::new());
    }
    let parse_err = |source| QueueError::Parse {
        path: store.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(store)
        .map_err(parse_err)?;
    let header = reader.headers().map_err(parse_err)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_err)?;
        let mut row = QueueRow::default();
        for (pos, column) in header.iter().enumerate() {
            if let Some(value) = record.get(pos) {
                row.set(column, value);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Append one row, preserving every existing row in order.
///
/// Rewrites the whole store (header + rows) through a temp file + rename.
/// Returns the number of data rows in the store after the append.
pub fn append_row(store: &Path, row: QueueRow) -> Result<usize, QueueError> {
    let mut rows = read_rows(store)?;
    rows.push(row);

    let dir = match store.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(&mut tmp);
        writer.write_record(COLUMNS)?;
        for r in &rows {
            writer.write_record(r.fields())?;
        }
        writer.flush().map_err(QueueError::Io)?;
    }
    tmp.as_file_mut().flush()?;
    tmp.persist(store).map_err(|e| QueueError::Io(e.error))?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn row(id: &str) -> QueueRow {
        QueueRow {
            id: id.to_string(),
            scheduled_at: "2025-10-13 08:10".to_string(),
            text_path: "posts/a.txt".to_string(),
            media_paths: String::new(),
            status: STATUS_PENDING.to_string(),
            remote_post_id: String::new(),
            posted_at: String::new(),
        }
    }

    #[test]
    fn missing_store_treated_as_empty() {
        let tmp = TempDir::new().unwrap();
        let store = tmp.path().join("queue.tsv");
        assert_eq!(read_rows(&store).unwrap(), Vec::new());

        let count = append_row(&store, row("a-1")).unwrap();
        assert_eq!(count, 1);
        let text = fs::read_to_string(&store).unwrap();
        assert_eq!(text.lines().count(), 2); // header + 1 row
        assert!(text.starts_with(
            "id\tscheduled_at\ttext_path\tmedia_paths\tstatus\tremote_post_id\tposted_at\n"
        ));
    }

    #[test]
    fn sequential_appends_preserve_order_and_ids() {
        let tmp = TempDir::new().unwrap();
        let store = tmp.path().join("queue.tsv");
        for i in 0..4 {
            append_row(&store, row(&format!("a-{i}"))).unwrap();
        }
        let rows = read_rows(&store).unwrap();
        assert_eq!(rows.len(), 4);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a-0", "a-1", "a-2", "a-3"]);
        assert_eq!(fs::read_to_string(&store).unwrap().lines().count(), 5);
    }

    #[test]
    fn existing_field_values_preserved_verbatim() {
        let tmp = TempDir::new().unwrap();
        let store = tmp.path().join("queue.tsv");
        fs::write(
            &store,
            "id\tscheduled_at\ttext_path\tmedia_paths\tstatus\tremote_post_id\tposted_at\n\
             old-1\t2025-01-02 09:00\tposts/old.txt\t/img/q.png\tPOSTED\t190000000\t2025-01-02 09:01\n",
        )
        .unwrap();

        append_row(&store, row("new-1")).unwrap();
        let rows = read_rows(&store).unwrap();
        assert_eq!(rows[0].status, "POSTED");
        assert_eq!(rows[0].remote_post_id, "190000000");
        assert_eq!(rows[0].posted_at, "2025-01-02 09:01");
        assert_eq!(rows[1].id, "new-1");
    }

    #[test]
    fn short_rows_normalize_with_empty_fields() {
        let tmp = TempDir::new().unwrap();
        let store = tmp.path().join("queue.tsv");
        // Hand-edited store: only three columns.
        fs::write(
            &store,
            "id\tscheduled_at\ttext_path\nold-1\t2025-01-02 09:00\tposts/old.txt\n",
        )
        .unwrap();

        append_row(&store, row("new-1")).unwrap();
        let rows = read_rows(&store).unwrap();
        assert_eq!(rows[0].id, "old-1");
        assert_eq!(rows[0].media_paths, "");
        assert_eq!(rows[0].status, "");
        // Rewritten file is back on the 7-column schema.
        let text = fs::read_to_string(&store).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header.split('\t').count(), 7);
        for line in text.lines().skip(1) {
            assert_eq!(line.split('\t').count(), 7);
        }
    }

    #[test]
    fn extra_columns_dropped_known_values_kept() {
        let tmp = TempDir::new().unwrap();
        let store = tmp.path().join("queue.tsv");
        fs::write(
            &store,
            "id\tnote\tscheduled_at\ttext_path\tmedia_paths\tstatus\tremote_post_id\tposted_at\n\
             old-1\tkeep me?\t2025-01-02 09:00\tposts/old.txt\t\tPENDING\t\t\n",
        )
        .unwrap();

        append_row(&store, row("new-1")).unwrap();
        let rows = read_rows(&store).unwrap();
        assert_eq!(rows[0].id, "old-1");
        assert_eq!(rows[0].scheduled_at, "2025-01-02 09:00");
        assert!(!fs::read_to_string(&store).unwrap().contains("note"));
    }

    #[test]
    fn unparsable_store_errors_and_is_left_untouched() {
        let tmp = TempDir::new().unwrap();
        let store = tmp.path().join("queue.tsv");
        // The store contract is UTF-8 TSV; a row that is not valid UTF-8
        // cannot be parsed and must not be clobbered.
        let garbage = b"id\tscheduled_at\n\xff\xfe broken \xff\t2025-01-02 09:00\n";
        fs::write(&store, garbage).unwrap();

        let err = append_row(&store, row("new-1")).unwrap_err();
        assert!(matches!(err, QueueError::Parse { .. }));
        assert_eq!(fs::read(&store).unwrap(), garbage);
    }
}
