use serde::{Deserialize, Serialize};

pub const MAX_GENRE_COMPONENTS: usize = 4;
pub const STYLE_TAG_LIMIT: usize = 10;
pub const MAX_INSTRUMENTS: usize = 6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    Override,
    Keyword,
    Alias,
    Mood,
    Random,
}

impl ResolutionPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::Keyword => "keyword",
            Self::Alias => "alias",
            Self::Mood => "mood",
            Self::Random => "random",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedGenre {
    pub detected: Option<String>,
    pub display: String,
    pub primary: String,
    pub components: Vec<String>,
    pub policy: ResolutionPolicy,
}

impl ResolvedGenre {
    pub fn new(
        components: Vec<String>,
        display: Option<String>,
        detected: Option<String>,
        policy: ResolutionPolicy,
    ) -> Self {
        let primary = components.first().cloned().unwrap_or_default();
        let display = display.unwrap_or_else(|| components.join(" "));
        Self { detected, display, primary, components, policy }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BpmRangeResult {
    pub min: u16,
    pub max: u16,
    pub is_intersection: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BpmStyle {
    #[default]
    Exact,
    Range,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TagCategoryWeights {
    pub vocal: f64,
    pub spatial: f64,
    pub harmonic: f64,
    pub dynamic: f64,
    pub temporal: f64,
}

impl TagCategoryWeights {
    pub const DEFAULT: Self =
        Self { vocal: 0.5, spatial: 0.45, harmonic: 0.35, dynamic: 0.4, temporal: 0.3 };

    pub const fn new(vocal: f64, spatial: f64, harmonic: f64, dynamic: f64, temporal: f64) -> Self {
        Self { vocal, spatial, harmonic, dynamic, temporal }
    }

    pub fn mean(weights: &[Self]) -> Self {
        if weights.is_empty() {
            return Self::DEFAULT;
        }
        let count = weights.len() as f64;
        Self {
            vocal: weights.iter().map(|w| w.vocal).sum::<f64>() / count,
            spatial: weights.iter().map(|w| w.spatial).sum::<f64>() / count,
            harmonic: weights.iter().map(|w| w.harmonic).sum::<f64>() / count,
            dynamic: weights.iter().map(|w| w.dynamic).sum::<f64>() / count,
            temporal: weights.iter().map(|w| w.temporal).sum::<f64>() / count,
        }
    }

    pub fn clamped(self) -> Self {
        Self {
            vocal: self.vocal.clamp(0.0, 1.0),
            spatial: self.spatial.clamp(0.0, 1.0),
            harmonic: self.harmonic.clamp(0.0, 1.0),
            dynamic: self.dynamic.clamp(0.0, 1.0),
            temporal: self.temporal.clamp(0.0, 1.0),
        }
    }
}

impl Default for TagCategoryWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ThematicContext {
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(default)]
    pub narrative_arc: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyLevel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AssembledStyleResult {
    pub tags: Vec<String>,
    pub formatted: String,
    pub mood_tags: Vec<String>,
    pub recording_context: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InstrumentSelection {
    pub instruments: Vec<String>,
    pub chord_progression: String,
    pub vocal_style: String,
}

impl InstrumentSelection {
    pub fn is_instrumental(&self) -> bool {
        self.vocal_style.to_lowercase().contains("instrumental")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoherenceConflict {
    pub rule: String,
    pub instrument: String,
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CoherenceReport {
    pub valid: bool,
    pub conflicts: Vec<CoherenceConflict>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeySignature {
    pub root: String,
    pub mode: String,
}

impl std::fmt::Display for KeySignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromptLayout {
    #[default]
    Quoted,
    Bracket,
}

impl std::str::FromStr for PromptLayout {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "quoted" | "a" => Ok(Self::Quoted),
            "bracket" | "b" => Ok(Self::Bracket),
            other => Err(format!("unknown layout {other:?} (expected quoted or bracket)")),
        }
    }
}

impl std::str::FromStr for BpmStyle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "range" => Ok(Self::Range),
            other => Err(format!("unknown bpm style {other:?} (expected exact or range)")),
        }
    }
}

impl std::str::FromStr for EnergyLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown energy level {other:?}")),
        }
    }
}
