mod genres;
pub mod vocab;

use crate::types::TagCategoryWeights;

pub use genres::{ALIASES, GENRES, MOOD_PHRASES, PRIORITY_GENRES};

pub const DEFAULT_GENRE: &str = "pop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BpmRange {
    pub min: u16,
    pub max: u16,
    pub typical: u16,
}

impl BpmRange {
    pub const fn new(min: u16, max: u16, typical: u16) -> Self {
        Self { min, max, typical }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrumentGroup {
    pub name: &'static str,
    pub options: &'static [&'static str],
    pub min: u8,
    pub max: u8,
    pub probability: f64,
    pub order: u8,
}

#[derive(Debug)]
pub struct GenreDefinition {
    pub id: &'static str,
    pub display_name: &'static str,
    pub keywords: &'static [&'static str],
    pub groups: &'static [InstrumentGroup],
    pub exclusions: &'static [(&'static str, &'static str)],
    pub bpm: BpmRange,
    pub moods: &'static [&'static str],
    pub recording: &'static [&'static str],
    pub progressions: &'static [&'static str],
    pub vocals: &'static [&'static str],
    pub weights: Option<TagCategoryWeights>,
}

impl GenreDefinition {
    pub fn excludes(&self, left: &str, right: &str) -> bool {
        self.exclusions.iter().any(|(a, b)| {
            (a.eq_ignore_ascii_case(left) && b.eq_ignore_ascii_case(right))
                || (a.eq_ignore_ascii_case(right) && b.eq_ignore_ascii_case(left))
        })
    }

    pub fn signature_group(&self) -> Option<&InstrumentGroup> {
        self.groups.iter().min_by_key(|group| group.order)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GenreCatalog {
    genres: &'static [GenreDefinition],
    priority: &'static [&'static str],
    aliases: &'static [(&'static str, &'static str)],
    mood_phrases: &'static [(&'static str, &'static str)],
    default_weights: TagCategoryWeights,
}

impl Default for GenreCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GenreCatalog {
    pub const fn new(
        genres: &'static [GenreDefinition],
        priority: &'static [&'static str],
        aliases: &'static [(&'static str, &'static str)],
        mood_phrases: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            genres,
            priority,
            aliases,
            mood_phrases,
            default_weights: TagCategoryWeights::DEFAULT,
        }
    }

    pub const fn builtin() -> Self {
        Self::new(GENRES, PRIORITY_GENRES, ALIASES, MOOD_PHRASES)
    }

    pub fn genres(&self) -> &'static [GenreDefinition] {
        self.genres
    }

    pub fn genre(&self, id: &str) -> Option<&'static GenreDefinition> {
        let id = id.trim();
        self.genres.iter().find(|genre| genre.id.eq_ignore_ascii_case(id))
    }

    pub fn is_canonical(&self, id: &str) -> bool {
        self.genre(id).is_some()
    }

    pub fn scan_order(&self) -> Vec<&'static GenreDefinition> {
        let mut order: Vec<&'static GenreDefinition> =
            self.priority.iter().filter_map(|id| self.genre(id)).collect();
        for genre in self.genres {
            if !order.iter().any(|existing| existing.id == genre.id) {
                order.push(genre);
            }
        }
        order
    }

    pub fn aliases_longest_first(&self) -> Vec<(&'static str, &'static str)> {
        let mut aliases = self.aliases.to_vec();
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        aliases
    }

    pub fn alias(&self, alias: &str) -> Option<&'static str> {
        let alias = alias.trim();
        self.aliases
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(alias))
            .map(|(_, id)| *id)
            .filter(|id| self.is_canonical(id))
    }

    pub fn canonical_id(&self, token: &str) -> Option<&'static str> {
        self.genre(token).map(|genre| genre.id).or_else(|| self.alias(token))
    }

    pub fn mood_phrases(&self) -> &'static [(&'static str, &'static str)] {
        self.mood_phrases
    }

    pub fn weights_for(&self, id: &str) -> TagCategoryWeights {
        self.genre(id).and_then(|genre| genre.weights).unwrap_or(self.default_weights)
    }

    pub fn bpm_for(&self, id: &str) -> Option<BpmRange> {
        self.genre(id).map(|genre| genre.bpm)
    }

    pub fn moods_for(&self, id: &str) -> &'static [&'static str] {
        self.genre(id).map(|genre| genre.moods).unwrap_or(&[])
    }
}
