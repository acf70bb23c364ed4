//! Sample meme corpus and catalog seeding.

use chrono::Utc;
use memedet_core::{MemeRecord, MemeRepo};
use tracing::info;

struct SeedMeme {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    video_url: &'static str,
    category: &'static str,
    popularity_score: i32,
}

const SAMPLE_MEMES: &[SeedMeme] = &[
    SeedMeme {
        id: "drake-hotline-bling",
        name: "Drake Hotline Bling",
        description: "Drake rejecting something in the first panel and approving something in the second panel",
        keywords: &["drake", "hotline bling", "no yes", "reject approve", "choice"],
        video_url: "https://i.imgur.com/jgWFMkL.mp4",
        category: "reaction",
        popularity_score: 95,
    },
    SeedMeme {
        id: "distracted-boyfriend",
        name: "Distracted Boyfriend",
        description: "Man looking at another woman while his girlfriend looks on disapprovingly",
        keywords: &["distracted boyfriend", "looking at other girl", "jealous girlfriend", "cheating"],
        video_url: "https://i.imgur.com/8Q5WGqB.mp4",
        category: "reaction",
        popularity_score: 92,
    },
    SeedMeme {
        id: "expanding-brain",
        name: "Expanding Brain",
        description: "Shows increasingly enlightened stages of thinking",
        keywords: &["expanding brain", "galaxy brain", "enlightened", "smart", "intelligence"],
        video_url: "https://i.imgur.com/YVy7xCj.mp4",
        category: "comparison",
        popularity_score: 88,
    },
    SeedMeme {
        id: "change-my-mind",
        name: "Change My Mind",
        description: "Steven Crowder sitting at a table with a sign",
        keywords: &["change my mind", "crowder", "debate", "convince me", "opinion"],
        video_url: "https://i.imgur.com/5LQK8zP.mp4",
        category: "opinion",
        popularity_score: 85,
    },
    SeedMeme {
        id: "woman-yelling-at-cat",
        name: "Woman Yelling at Cat",
        description: "Woman yelling at a confused cat sitting at a table",
        keywords: &["woman yelling at cat", "confused cat", "angry woman", "smudge", "table"],
        video_url: "https://i.imgur.com/8KS3XT6.mp4",
        category: "reaction",
        popularity_score: 90,
    },
    SeedMeme {
        id: "this-is-fine",
        name: "This Is Fine",
        description: "Dog sitting in burning room saying this is fine",
        keywords: &["this is fine", "burning", "fire", "dog", "denial", "everything is fine"],
        video_url: "https://i.imgur.com/XqJOJSt.mp4",
        category: "reaction",
        popularity_score: 87,
    },
    SeedMeme {
        id: "spiderman-pointing",
        name: "Spider-Man Pointing",
        description: "Two Spider-Men pointing at each other",
        keywords: &["spiderman pointing", "same", "identical", "copy", "duplicate"],
        video_url: "https://i.imgur.com/6gK3oWb.mp4",
        category: "comparison",
        popularity_score: 83,
    },
    SeedMeme {
        id: "success-kid",
        name: "Success Kid",
        description: "Baby with clenched fist looking determined and successful",
        keywords: &["success kid", "victory", "win", "achievement", "baby"],
        video_url: "https://i.imgur.com/2pf8rVN.mp4",
        category: "reaction",
        popularity_score: 80,
    },
    SeedMeme {
        id: "stonks",
        name: "Stonks",
        description: "Meme man in front of rising stocks graph",
        keywords: &["stonks", "stocks", "investment", "money", "profit", "loss"],
        video_url: "https://i.imgur.com/vMqFdYk.mp4",
        category: "finance",
        popularity_score: 86,
    },
    SeedMeme {
        id: "is-this-a-pigeon",
        name: "Is This a Pigeon?",
        description: "Anime character pointing at butterfly asking if it's a pigeon",
        keywords: &["is this a pigeon", "butterfly", "confused", "misidentify", "anime"],
        video_url: "https://i.imgur.com/3hN5qMy.mp4",
        category: "reaction",
        popularity_score: 82,
    },
    SeedMeme {
        id: "roll-safe",
        name: "Roll Safe",
        description: "Man tapping head with smart thinking expression",
        keywords: &["roll safe", "thinking", "smart", "genius", "big brain", "tap head"],
        video_url: "https://i.imgur.com/QGLLvqh.mp4",
        category: "reaction",
        popularity_score: 81,
    },
    SeedMeme {
        id: "surprised-pikachu",
        name: "Surprised Pikachu",
        description: "Pikachu with shocked expression",
        keywords: &["surprised pikachu", "shocked", "unexpected", "surprise", "pokemon"],
        video_url: "https://i.imgur.com/vMNzQTw.mp4",
        category: "reaction",
        popularity_score: 89,
    },
    SeedMeme {
        id: "mocking-spongebob",
        name: "Mocking SpongeBob",
        description: "SpongeBob with alternating caps text to mock someone",
        keywords: &["mocking spongebob", "alternating caps", "sarcasm", "mock", "spongebob"],
        video_url: "https://i.imgur.com/D3HgqN7.mp4",
        category: "reaction",
        popularity_score: 84,
    },
    SeedMeme {
        id: "coffin-dance",
        name: "Coffin Dance",
        description: "Ghanaian pallbearers dancing with a coffin",
        keywords: &["coffin dance", "astronomia", "funeral", "dancing pallbearers", "meme"],
        video_url: "https://i.imgur.com/8GUJP5S.mp4",
        category: "trending",
        popularity_score: 93,
    },
    SeedMeme {
        id: "trade-offer",
        name: "Trade Offer",
        description: "Guy presenting a trade offer with hands",
        keywords: &["trade offer", "i receive you receive", "exchange", "deal", "negotiation"],
        video_url: "https://i.imgur.com/P0hRLvw.mp4",
        category: "trending",
        popularity_score: 78,
    },
    SeedMeme {
        id: "doge",
        name: "Doge",
        description: "Shiba Inu dog with comic sans text",
        keywords: &["doge", "shiba inu", "such wow", "very", "much", "so"],
        video_url: "https://i.imgur.com/xCNW4GN.mp4",
        category: "classic",
        popularity_score: 91,
    },
    SeedMeme {
        id: "pepe-frog",
        name: "Pepe the Frog",
        description: "Green frog character with various emotions",
        keywords: &["pepe", "frog", "sad", "feels bad man", "rare pepe"],
        video_url: "https://i.imgur.com/7KzYQhC.mp4",
        category: "classic",
        popularity_score: 88,
    },
    SeedMeme {
        id: "wojak",
        name: "Wojak",
        description: "Simple line drawing character expressing emotions",
        keywords: &["wojak", "feels guy", "doomer", "bloomer", "emotion"],
        video_url: "https://i.imgur.com/nGh8BVp.mp4",
        category: "reaction",
        popularity_score: 79,
    },
    SeedMeme {
        id: "rickroll",
        name: "Rickroll",
        description: "Rick Astley's Never Gonna Give You Up",
        keywords: &["rickroll", "never gonna give you up", "rick astley", "prank"],
        video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        category: "classic",
        popularity_score: 94,
    },
    SeedMeme {
        id: "hide-the-pain-harold",
        name: "Hide the Pain Harold",
        description: "Elderly man with forced smile hiding pain",
        keywords: &["hide the pain harold", "harold", "forced smile", "uncomfortable", "awkward"],
        video_url: "https://i.imgur.com/xJH9KzL.mp4",
        category: "reaction",
        popularity_score: 77,
    },
];

/// The sample corpus as domain records.
#[must_use]
pub fn sample_memes() -> Vec<MemeRecord> {
    SAMPLE_MEMES
        .iter()
        .map(|seed| MemeRecord {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: Some(seed.description.to_string()),
            keywords: seed.keywords.iter().map(ToString::to_string).collect(),
            template_image_url: None,
            video_url: seed.video_url.to_string(),
            category: Some(seed.category.to_string()),
            popularity_score: seed.popularity_score,
            created_at: Utc::now(),
        })
        .collect()
}

/// Insert the sample corpus, replacing records that already exist.
///
/// Idempotent: re-running the seed leaves the catalog with exactly one row
/// per sample meme.
pub async fn seed_catalog(repo: &dyn MemeRepo) -> anyhow::Result<usize> {
    let records = sample_memes();

    for record in &records {
        repo.insert(record).await?;
    }

    info!("Seeded {} memes", records.len());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_meme_is_matchable() {
        for record in sample_memes() {
            assert!(record.matchable(), "{} has no keywords", record.id);
        }
    }

    #[test]
    fn sample_ids_are_unique() {
        let records = sample_memes();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }
}
