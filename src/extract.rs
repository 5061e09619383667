//! Topic-card extraction from the landing-page document.
//!
//! Stage 1 of the pickpost pipeline. Parses the landing page's HTML into an
//! ordered list of candidate cards that the rotation selector picks from.
//!
//! ## Card Shape
//!
//! A candidate is an `<article>` element carrying the `topic-card` class
//! (extra classes and attributes are fine). From each card we take:
//!
//! - **Title** (required): text content of the first `<h3>`, markup stripped,
//!   runs of whitespace collapsed to single spaces, trimmed.
//! - **Link** (required): `href` of the first `<a href=...>`.
//! - **QR image** (optional): `src` of an `<img>` nested inside a descendant
//!   carrying the `topic-qr` class. Images elsewhere in the card are ignored.
//!
//! ```text
//! <article class="topic-card featured" data-track="ch7">
//!   <h3>Why <em>silent</em> letters?</h3>
//!   <a href="chapters/07.html">Read</a>
//!   <div class="topic-qr"><img src="qr/ch07.png"></div>
//! </article>
//! ```
//!
//! ## Skip Rule
//!
//! Cards missing the title or the link are silently skipped — the landing
//! page legitimately contains placeholder cards while chapters are drafted.
//! A document yielding zero usable cards is an error: the rotation has
//! nothing to select from.
//!
//! Extraction is pure: document text in, card list out. Nothing here touches
//! the filesystem.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no usable topic card found in the document (need an <article class=\"topic-card\"> with an <h3> title and an <a href> link)")]
    NoCandidates,
}

/// One selectable topic, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Heading text, markup stripped, whitespace collapsed.
    pub title: String,
    /// Primary link target, exactly as written in the document.
    pub url: String,
    /// QR image reference from the card's `topic-qr` block, if any.
    /// Relative to the document's directory; existence is not checked here.
    pub qr_src: Option<String>,
}

fn selector(css: &str) -> Selector {
    // All selectors in this module are hard-coded literals.
    Selector::parse(css).expect("hard-coded selector")
}

/// Extract all usable topic cards from a landing-page document.
///
/// Returns cards in document order. Errors only when no card satisfies the
/// title + link requirement; partial cards are skipped, not reported.
pub fn extract_cards(html: &str) -> Result<Vec<Card>, ExtractError> {
    let doc = Html::parse_document(html);
    let card_sel = selector("article.topic-card");
    let title_sel = selector("h3");
    let link_sel = selector("a[href]");
    let qr_sel = selector(".topic-qr img[src]");

    let mut cards = Vec::new();
    for el in doc.select(&card_sel) {
        let Some(title) = el.select(&title_sel).next().map(collapse_text) else {
            continue;
        };
        if title.is_empty() {
            continue;
        }
        let Some(url) = el
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            continue;
        };
        let qr_src = el
            .select(&qr_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(String::from);
        cards.push(Card {
            title,
            url: url.to_string(),
            qr_src,
        });
    }

    if cards.is_empty() {
        return Err(ExtractError::NoCandidates);
    }
    Ok(cards)
}

/// Text content of an element with markup stripped and whitespace collapsed.
fn collapse_text(el: ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
