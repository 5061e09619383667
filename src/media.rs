//! Media resolution for the queued post.
//!
//! Picks at most one image to attach, by priority:
//!
//! 1. The selected card's QR image, if the card has one and the file exists.
//! 2. The fallback cover image, if it exists.
//! 3. Nothing.
//!
//! Both references are interpreted relative to the landing-page document's
//! directory, because that is how the page itself links them. Missing media
//! is a soft degrade, never an error — the post simply goes out text-only.

use std::path::{Path, PathBuf};

/// Resolve the image to attach, or `None` for a text-only post.
///
/// Returns an absolute path so the queue row is meaningful regardless of the
/// publisher's working directory.
pub fn resolve_media(
    qr_src: Option<&str>,
    document_dir: &Path,
    cover_fallback: &str,
) -> Option<PathBuf> {
    if let Some(src) = qr_src {
        if let Some(path) = existing(document_dir, src) {
            return Some(path);
        }
    }
    existing(document_dir, cover_fallback)
}

/// Absolute path of `relative` under `base`, if it names an existing file.
///
/// An empty reference (`<img src="">` in the document) is treated as absent,
/// not as the document directory that `join("")` would yield. Directories
/// are rejected for the same reason: only a real file can be attached.
fn existing(base: &Path, relative: &str) -> Option<PathBuf> {
    if relative.is_empty() {
        return None;
    }
    // canonicalize doubles as the existence check and flattens `../`
    // segments like the fallback cover's `../lib/...`.
    let path = base.join(relative).canonicalize().ok()?;
    path.is_file().then_some(path)
}
