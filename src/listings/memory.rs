//! In-memory listing repository.
//!
//! Backs each collection with a `Vec` behind an async `RwLock`. Text search
//! tokenizes title, description, location and the category field; a record
//! matches when every query term appears as a word, or when the whole query
//! is a case-insensitive substring of title, location or the category field.
//!
//! Words are normalized before comparison: common English stop words are
//! dropped and a trailing plural `s` is folded, so `villas in qurum` matches
//! "Garden Villa" in Qurum. There is no further stemming.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::Listing;
use super::repository::{ListingRepository, RepoError};

// == In-Memory Repository ==
/// One listing collection held in memory.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    /// Records in insertion order
    records: RwLock<Vec<T>>,
}

impl<T: Listing> InMemoryRepository<T> {
    // == Constructor ==
    /// Creates a repository holding `records`.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    // == Length ==
    /// Returns the number of records, whatever their status.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl<T: Listing> ListingRepository<T> for InMemoryRepository<T> {
    async fn find_recent(&self, status: &str, limit: usize) -> Result<Vec<T>, RepoError> {
        let records = self.records.read().await;
        let mut matching: Vec<&T> = records.iter().filter(|r| r.status() == status).collect();
        matching.sort_by_key(|r| std::cmp::Reverse(r.created_at()));
        Ok(matching.into_iter().take(limit).cloned().collect())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<T>, RepoError> {
        let terms = tokenize(query);
        let needle = query.to_lowercase();

        let records = self.records.read().await;
        let mut scored: Vec<(f64, &T)> = records
            .iter()
            .filter_map(|record| {
                let rank = text_rank(record, &terms);
                if rank > 0.0 || substring_match(record, &needle) {
                    Some((rank, record))
                } else {
                    None
                }
            })
            .collect();

        scored.sort_by(|(rank_a, a), (rank_b, b)| {
            rank_b
                .total_cmp(rank_a)
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

// == Text Ranking ==
// Title words count double; other fields count once.
const TITLE_WEIGHT: f64 = 2.0;
const BODY_WEIGHT: f64 = 1.0;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "into", "is", "it",
    "of", "on", "or", "the", "to", "with",
];

/// Lowercased, normalized alphanumeric words of `text`, stop words removed.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .map(fold_plural)
        .collect()
}

/// `villas` -> `villa`; short words and `-ss` endings are kept.
fn fold_plural(mut word: String) -> String {
    if word.chars().count() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        word.pop();
    }
    word
}

/// Weighted term frequency, or 0.0 unless every term occurs somewhere.
fn text_rank<T: Listing>(record: &T, terms: &[String]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }

    let fields = [
        (record.title(), TITLE_WEIGHT),
        (record.description(), BODY_WEIGHT),
        (record.location(), BODY_WEIGHT),
        (record.category_field(), BODY_WEIGHT),
    ];
    let tokenized: Vec<(Vec<String>, f64)> = fields
        .iter()
        .map(|(text, weight)| (tokenize(text), *weight))
        .collect();

    let mut rank = 0.0;
    for term in terms {
        let score: f64 = tokenized
            .iter()
            .map(|(words, weight)| words.iter().filter(|w| *w == term).count() as f64 * weight)
            .sum();
        if score == 0.0 {
            return 0.0;
        }
        rank += score;
    }
    rank
}

fn substring_match<T: Listing>(record: &T, needle: &str) -> bool {
    [record.title(), record.location(), record.category_field()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
