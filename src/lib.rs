//! # pickpost
//!
//! Picks one "topic card" per day from a static landing page and appends a
//! PENDING post to a TSV queue that a separate publisher drains. The landing
//! page is the data source: its `topic-card` articles are the candidate
//! pool, and a day-indexed rotation guarantees every card gets featured,
//! every machine agrees on today's pick, and the cycle repeats forever
//! without any stored state.
//!
//! # Architecture: One Pass, One Row
//!
//! ```text
//! index.html ─ extract ─→ [cards] ─ rotation ─→ card
//!                                                ├─ render ─→ posts/<id>.txt
//!                                                ├─ media  ─→ qr | cover | ∅
//!                                                └──────────→ queue.tsv (+1 row)
//! ```
//!
//! Every stage before the queue append is a pure function; the append is the
//! only mutation, and it rewrites the store through a temp file + rename so
//! a crash never truncates rows already queued. There is deliberately no
//! daemon, no database, and no network: the publisher that actually posts is
//! a separate process reading `queue.tsv`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`extract`] | DOM-parses the landing page into ordered candidate cards |
//! | [`rotation`] | Pure (count, UTC day, epoch) → index rotation |
//! | [`render`] | The three post templates + explicit random `Auto` style |
//! | [`media`] | QR-else-cover-else-nothing image resolution |
//! | [`schedule`] | `now` / `YYYY-MM-DD HH:MM` civil-time schedule in a fixed offset |
//! | [`queue`] | Header-keyed TSV store: normalize, append, atomic rewrite |
//! | [`pipeline`] | Orchestration: one invocation, one appended row |
//! | [`config`] | Stock defaults overridable by a TOML file and CLI flags |
//! | [`output`] | Information-first display of the queued row |
//!
//! # Design Decisions
//!
//! ## Deterministic Rotation, Random Presentation
//!
//! Which card runs today is a pure function of the UTC calendar day, so the
//! landing page's own "today's pick" widget and this tool always agree. How
//! the post reads is allowed to vary: with no `--style` flag one of the
//! three templates is chosen at random per invocation. The RNG is injected,
//! so tests pin it with a seed while production keeps the variety.
//!
//! ## The Queue Is a Flat File
//!
//! Tab-separated with a header row, one row per pending post. It is legible,
//! grep-able, diff-friendly in version control, and trivially consumed by
//! the publisher. Appends re-read and rewrite the whole file keyed by the
//! header, which doubles as a schema-normalization pass: a hand-edited store
//! self-heals on the next append. Post bodies live in side `.txt` files so
//! multi-line text never fights the row format.
//!
//! ## Civil Time, Fixed Offset
//!
//! Schedules are for humans reading a queue, so they are civil time in one
//! configured UTC offset — never the invoking machine's local zone. Rotation
//! arithmetic, by contrast, uses UTC calendar days so the daily boundary is
//! globally unambiguous.

pub mod config;
pub mod extract;
pub mod media;
pub mod output;
pub mod pipeline;
pub mod queue;
pub mod render;
pub mod rotation;
pub mod schedule;
