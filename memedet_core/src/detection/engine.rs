use std::cmp::Ordering;

use crate::catalog::MemeRecord;

use super::types::DetectionMatch;

/// Ratio boost applied before clamping. Rewards high-ratio partial matches
/// so that "mostly matched" saturates toward 1.0 faster than the raw ratio
/// would.
const RATIO_BOOST: f64 = 1.2;

/// Count how many of `keywords` occur in the lower-cased content.
///
/// Plain substring containment, case-insensitive. A keyword contained in a
/// larger unrelated word still counts as a hit; this is a known precision
/// limitation kept for compatibility with existing clients.
#[must_use]
pub fn keyword_hits(content_lower: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| content_lower.contains(&keyword.to_lowercase()))
        .count()
}

/// Confidence for `matched` hits out of `total` keywords.
///
/// Formula: `min(matched/total * 1.2, 1.0)`, rounded half-away-from-zero to
/// 2 decimal places. `total` must be ≥ 1; records with no keywords are
/// filtered out before scoring.
#[must_use]
pub fn confidence(matched: usize, total: usize) -> f64 {
    let raw = (matched as f64 / total as f64) * RATIO_BOOST;
    round2(raw.min(1.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Match `content` against the corpus and return scored matches ordered by
/// descending confidence.
///
/// Records with empty keyword lists are skipped, never an error. Memes with
/// zero keyword hits are omitted. The sort is stable, so equal confidences
/// keep corpus iteration order; callers that need a deterministic tie-break
/// supply the corpus in a fixed order (the catalog uses popularity
/// descending, id ascending).
#[must_use]
pub fn detect(content: &str, corpus: &[MemeRecord]) -> Vec<DetectionMatch> {
    let content_lower = content.to_lowercase();

    let mut matches: Vec<DetectionMatch> = corpus
        .iter()
        .filter(|meme| meme.matchable())
        .filter_map(|meme| {
            let hits = keyword_hits(&content_lower, &meme.keywords);
            (hits > 0).then(|| DetectionMatch {
                meme_id: meme.id.clone(),
                confidence: confidence(hits, meme.keywords.len()),
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    matches
}
