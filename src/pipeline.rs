//! End-to-end pipeline: document → today's card → rendered post → queue row.
//!
//! ```text
//! extract_cards ─→ pick_index ─→ render_post ──→ text artifact
//!                                resolve_media ─┐
//!                                               ├─→ QueueRow ─→ append_row
//! ```
//!
//! Ordering matters for the no-partial-write guarantee: the schedule is
//! validated by the caller before [`run`] is invoked, and extraction happens
//! before anything touches disk, so a fatal error never leaves a partial
//! queue row. The rendered-text artifact is written just before the append;
//! a queue failure can orphan one text file but never corrupt the store.
//!
//! The clock and the RNG are parameters, not ambient state — the whole run
//! is a deterministic function of `(options, now, rng)`.

use crate::config::{self, Defaults};
use crate::extract::{self, Card};
use crate::media::resolve_media;
use crate::queue::{self, QueueRow, STATUS_PENDING};
use crate::render::{render_post, Style};
use crate::rotation::pick_index;
use crate::schedule::{self, Schedule};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Extract(#[from] extract::ExtractError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Queue(#[from] queue::QueueError),
}

/// Everything one invocation needs. `defaults` arrives already merged
/// (stock ← config file ← CLI flags).
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Landing-page document to extract cards from.
    pub document: PathBuf,
    /// Queue store to append to.
    pub queue: PathBuf,
    /// Public landing-page URL for the mid/long templates.
    pub lp_url: Option<String>,
    pub style: Style,
    /// Extra hashtags appended after the configured base tags.
    pub extra_tags: Vec<String>,
    pub schedule: Schedule,
    /// Directory for rendered post bodies, created if absent.
    pub text_dir: PathBuf,
    pub defaults: Defaults,
}

/// What happened, for display. The row is returned exactly as persisted.
#[derive(Debug)]
pub struct RunReport {
    pub card: Card,
    pub index: usize,
    pub card_count: usize,
    pub text_path: PathBuf,
    pub row: QueueRow,
    /// Data rows in the store after the append.
    pub queue_len: usize,
}

/// Run the full pipeline once and append one PENDING row.
pub fn run(
    opts: &RunOptions,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<RunReport, RunError> {
    let offset = opts.defaults.offset()?;

    let document = opts.document.canonicalize()?;
    let html = std::fs::read_to_string(&document)?;
    let cards = extract::extract_cards(&html)?;
    let index = pick_index(cards.len(), now.date_naive(), opts.defaults.epoch);
    let card = cards[index].clone();

    let mut tags = opts.defaults.tags.clone();
    tags.extend(opts.extra_tags.iter().cloned());
    let body = render_post(
        &card,
        opts.lp_url.as_deref(),
        opts.style,
        &tags,
        &opts.defaults.mentions,
        rng,
    );

    let now_civil = schedule::civil(now, offset);
    std::fs::create_dir_all(&opts.text_dir)?;
    let text_dir = opts.text_dir.canonicalize()?;
    let text_path = text_dir.join(format!(
        "{}_{}.txt",
        opts.defaults.id_prefix,
        now_civil.format("%Y%m%d_%H%M")
    ));
    std::fs::write(&text_path, &body)?;

    // The document links its images relative to its own directory.
    let document_dir = document.parent().unwrap_or(&document);
    let media = resolve_media(
        card.qr_src.as_deref(),
        document_dir,
        &opts.defaults.cover_fallback,
    );

    let row = QueueRow {
        id: format!(
            "{}-{}-idx{index}",
            opts.defaults.id_prefix,
            now_civil.format("%Y%m%d-%H%M%S")
        ),
        scheduled_at: opts.schedule.column_value(now_civil),
        text_path: text_path.to_string_lossy().into_owned(),
        media_paths: media
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default(),
        status: STATUS_PENDING.to_string(),
        remote_post_id: String::new(),
        posted_at: String::new(),
    };
    let queue_len = queue::append_row(&opts.queue, row.clone())?;

    Ok(RunReport {
        card,
        index,
        card_count: cards.len(),
        text_path,
        row,
        queue_len,
    })
}
