//! Keyword relevance filter and ranker.
//!
//! An entry is a candidate when the case-folded query occurs as a substring
//! of its title, its description, or any one of its tags. Candidates are
//! scored `3 * title + 2 * description + 1 * any_tag` and returned best first,
//! keeping upstream order among equal scores.

use super::entry::KnowledgeEntry;

pub const TITLE_WEIGHT: u8 = 3;
pub const DESCRIPTION_WEIGHT: u8 = 2;
pub const TAG_WEIGHT: u8 = 1;

/// Which fields of an entry contain the folded query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMatches {
    pub title: bool,
    pub description: bool,
    pub tag: bool,
}

impl FieldMatches {
    /// `folded_query` must already be lowercased.
    pub fn of(entry: &KnowledgeEntry, folded_query: &str) -> Self {
        Self {
            title: entry.title.to_lowercase().contains(folded_query),
            description: entry.description.to_lowercase().contains(folded_query),
            tag: entry
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(folded_query)),
        }
    }

    pub fn any(&self) -> bool {
        self.title || self.description || self.tag
    }

    /// Relevance in `0..=6`; several matching tags still count once.
    pub fn score(&self) -> u8 {
        TITLE_WEIGHT * u8::from(self.title)
            + DESCRIPTION_WEIGHT * u8::from(self.description)
            + TAG_WEIGHT * u8::from(self.tag)
    }
}

/// Relevance score of a single entry for `query`.
pub fn relevance_score(entry: &KnowledgeEntry, query: &str) -> u8 {
    FieldMatches::of(entry, &query.to_lowercase()).score()
}

/// Filter, rank and truncate `entries` for `query`.
///
/// `limit <= 0` yields an empty result. The caller is responsible for
/// rejecting blank queries.
pub fn rank(entries: Vec<KnowledgeEntry>, query: &str, limit: i64) -> Vec<KnowledgeEntry> {
    let keep = usize::try_from(limit).unwrap_or(0);
    if keep == 0 {
        return Vec::new();
    }

    let folded = query.to_lowercase();
    let mut candidates: Vec<(u8, KnowledgeEntry)> = entries
        .into_iter()
        .filter_map(|entry| {
            let matches = FieldMatches::of(&entry, &folded);
            matches.any().then(|| (matches.score(), entry))
        })
        .collect();

    // stable: equal scores keep upstream order
    candidates.sort_by(|a, b| b.0.cmp(&a.0));
    candidates.truncate(keep);

    candidates.into_iter().map(|(_, entry)| entry).collect()
}
