use chrono::Utc;
use clap::Parser;
use pickpost::config::Defaults;
use pickpost::output;
use pickpost::pipeline::{self, RunOptions};
use pickpost::render::Style;
use pickpost::schedule::Schedule;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pickpost")]
#[command(about = "Queue today's topic card as a pending social post")]
#[command(long_about = "\
Queue today's topic card as a pending social post

Reads the landing page, picks one topic card by the deterministic daily
rotation (UTC days since the configured epoch, modulo card count), renders a
post body into a text file, and appends one PENDING row to the TSV queue.
A separate publisher process drains the queue and flips rows to POSTED.

Typical cron entry:

  pickpost --document site/index.html --queue queue.tsv \\
           --lp-url https://example.com/ --schedule now

The schedule is civil time in the configured fixed offset (stock +09:00),
either the literal 'now' or an explicit 'YYYY-MM-DD HH:MM'. A malformed
schedule aborts the run before anything is written.

Defaults (tags, epoch, offset, id prefix, cover fallback, mentions) can be
overridden by a TOML file passed with --config; flags override both.")]
#[command(version)]
struct Cli {
    /// Landing-page document to extract topic cards from
    #[arg(long, default_value = "index.html")]
    document: PathBuf,

    /// TSV queue store consumed by the publisher
    #[arg(long, default_value = "queue.tsv")]
    queue: PathBuf,

    /// Public landing-page URL, shown by the mid and long templates
    #[arg(long)]
    lp_url: Option<String>,

    /// Fixed template; omit to pick one of the three at random
    #[arg(long, value_parser = ["short", "mid", "long"])]
    style: Option<String>,

    /// Extra hashtag (repeatable, no '#' needed), appended after the defaults
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// 'now' or an explicit civil date-time 'YYYY-MM-DD HH:MM'
    #[arg(long, default_value = "now")]
    schedule: String,

    /// Directory for rendered post bodies
    #[arg(long, default_value = "posts")]
    text_dir: PathBuf,

    /// Override the configured row-id prefix
    #[arg(long)]
    id_prefix: Option<String>,

    /// Override the configured fallback image (relative to the document dir)
    #[arg(long)]
    cover_fallback: Option<String>,

    /// TOML defaults file (see --help for the fields)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut defaults = match &cli.config {
        Some(path) => Defaults::load(path)?,
        None => Defaults::default(),
    };
    if let Some(prefix) = cli.id_prefix {
        defaults.id_prefix = prefix;
    }
    if let Some(cover) = cli.cover_fallback {
        defaults.cover_fallback = cover;
    }

    // Validate the schedule before the pipeline touches any file.
    let schedule = Schedule::parse(&cli.schedule)?;
    let style = cli
        .style
        .as_deref()
        .and_then(Style::from_key)
        .unwrap_or(Style::Auto);

    let opts = RunOptions {
        document: cli.document,
        queue: cli.queue.clone(),
        lp_url: cli.lp_url,
        style,
        extra_tags: cli.tags,
        schedule,
        text_dir: cli.text_dir,
        defaults,
    };
    let report = pipeline::run(&opts, Utc::now(), &mut rand::rng())?;
    output::print_report(&report, &cli.queue);

    Ok(())
}
