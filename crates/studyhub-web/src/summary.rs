//! Summary-card extraction for the home page.
//!
//! The home page shows the same cards as the summaries page. Rather than
//! duplicating the markup, the first `card-container` block is lifted out of
//! `summaries.html` at request time.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use studyhub_common::{Result, TrustedHtml};
use tracing::warn;

pub const SUMMARIES_TEMPLATE: &str = "summaries.html";

/// Non-greedy: the first `</div>` after the opening tag ends the match, so
/// nested divs inside the container truncate it.
static CARD_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<div\s+class=["']card-container["'][\s\S]*?</div>"#)
        .expect("static card-container pattern is valid")
});

/// Return the first `<div class="card-container">…</div>` in
/// `<templates_root>/summaries.html`, or an empty fragment when the file or
/// the block is absent.
pub fn extract_summary_cards(templates_root: &Path) -> Result<TrustedHtml> {
    let path = templates_root.join(SUMMARIES_TEMPLATE);
    if !path.is_file() {
        return Ok(TrustedHtml::empty());
    }

    let content = std::fs::read_to_string(&path)?;
    Ok(CARD_CONTAINER
        .find(&content)
        .map(|m| TrustedHtml::new_unchecked(m.as_str()))
        .unwrap_or_default())
}

/// Like [`extract_summary_cards`], but failures become an inline message so
/// the home page always renders.
pub fn summary_cards_or_error(templates_root: &Path) -> TrustedHtml {
    match extract_summary_cards(templates_root) {
        Ok(cards) => cards,
        Err(e) => {
            warn!(error = %e, "failed to load summary cards");
            TrustedHtml::escaped_text("p", &format!("Error loading summary cards: {e}"))
        }
    }
}
