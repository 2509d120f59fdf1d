use crate::bpm;
use crate::catalog::GenreCatalog;
use crate::coherence;
use crate::formatter::{self, PromptFields};
use crate::genre;
use crate::instruments::assemble_instruments;
use crate::rng::RandomStream;
use crate::style::{self, StyleContext};
use crate::trace::{TraceEvent, TraceSink};
use crate::types::{
    AssembledStyleResult, BpmRangeResult, BpmStyle, CoherenceReport, EnergyLevel,
    InstrumentSelection, KeySignature, PromptLayout, ResolvedGenre, ThematicContext,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CREATIVITY: u8 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptRequest {
    pub description: String,
    pub genre_override: Option<String>,
    pub layout: PromptLayout,
    pub creativity_level: u8,
    pub thematic: Option<ThematicContext>,
    pub energy: Option<EnergyLevel>,
    pub bpm_style: BpmStyle,
    pub max_chars: Option<usize>,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self {
            description: String::new(),
            genre_override: None,
            layout: PromptLayout::default(),
            creativity_level: DEFAULT_CREATIVITY,
            thematic: None,
            energy: None,
            bpm_style: BpmStyle::default(),
            max_chars: None,
        }
    }
}

impl PromptRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub text: String,
    pub genre: ResolvedGenre,
    pub bpm_range: Option<BpmRangeResult>,
    pub instruments: InstrumentSelection,
    pub style: AssembledStyleResult,
    pub coherence: CoherenceReport,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed_tags: Vec<String>,
    pub key: KeySignature,
    pub fields: PromptFields,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptGenerator {
    catalog: GenreCatalog,
}

impl PromptGenerator {
    pub fn new(catalog: GenreCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &GenreCatalog {
        &self.catalog
    }

    pub fn generate(
        &self,
        request: &PromptRequest,
        rng: &mut dyn RandomStream,
        trace: &mut dyn TraceSink,
    ) -> GeneratedPrompt {
        let catalog = &self.catalog;
        let resolved = genre::resolve(
            catalog,
            &request.description,
            request.genre_override.as_deref(),
            rng,
            trace,
        );

        let instruments = assemble_instruments(catalog, &resolved.components, rng, trace);

        let bpm_range = bpm::blend(catalog, &resolved.components.join(" "));
        let bpm_text = bpm::render_bpm(bpm_range.as_ref(), request.bpm_style, rng);
        let branch = if bpm_range.is_some() { "blended" } else { "default" };
        trace.record(TraceEvent::new("bpm", "render", branch, bpm_text.clone()));

        let context = StyleContext {
            description: &request.description,
            thematic: request.thematic.as_ref(),
            energy: request.energy,
            instrumental: instruments.is_instrumental(),
        };
        let mut style = style::assemble(catalog, &resolved.components, rng, &context, trace);

        let fixed =
            coherence::fix(&instruments.instruments, &style.tags, request.creativity_level, trace);
        let removed_tags = fixed.removed.clone();
        if !removed_tags.is_empty() {
            style.tags = fixed.tags;
            style.formatted = style.tags.join(", ");
        }

        let key = formatter::select_key(&style.mood_tags, rng);

        let recording_context = if removed_tags.iter().any(|tag| tag == &style.recording_context) {
            ""
        } else {
            style.recording_context.as_str()
        };
        let fields = PromptFields {
            genre: resolved.display.clone(),
            bpm: bpm_text,
            moods: style.mood_tags.clone(),
            instruments: instruments.instruments.clone(),
            style_tags: style.formatted.clone(),
            recording: formatter::recording_field(
                recording_context,
                &instruments.vocal_style,
                &instruments.chord_progression,
            ),
            key: key.clone(),
            chord_progression: instruments.chord_progression.clone(),
            instrumental: instruments.is_instrumental(),
        };
        let text = formatter::format_prompt(&fields, request.layout, request.max_chars);

        GeneratedPrompt {
            text,
            genre: resolved,
            bpm_range,
            instruments,
            style,
            coherence: fixed.report,
            removed_tags,
            key,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remix::{extract_field, FieldName};
    use crate::rng::SeededStream;
    use crate::trace::NullTrace;
    use crate::types::STYLE_TAG_LIMIT;

    fn generate(request: &PromptRequest, seed: u64) -> GeneratedPrompt {
        PromptGenerator::default().generate(request, &mut SeededStream::new(seed), &mut NullTrace)
    }

    #[test]
    fn same_seed_same_prompt() {
        let request = PromptRequest::new("dreamy synthwave drive through neon rain");
        assert_eq!(generate(&request, 17), generate(&request, 17));
    }

    #[test]
    fn quoted_prompt_round_trips_through_extraction() {
        let prompt = generate(&PromptRequest::new("smooth jazz night"), 2);
        assert_eq!(prompt.genre.components, vec!["jazz".to_string()]);
        assert_eq!(extract_field(&prompt.text, FieldName::Genre), Some("jazz".to_string()));
        let bpm: u16 = extract_field(&prompt.text, FieldName::Bpm)
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        assert!((80..=160).contains(&bpm));
        assert_eq!(
            extract_field(&prompt.text, FieldName::StyleTags),
            Some(prompt.style.formatted.clone())
        );
        assert!(prompt.style.tags.len() <= STYLE_TAG_LIMIT);
    }

    #[test]
    fn bracket_layout_with_range_tempo() {
        let request = PromptRequest {
            description: "jazz rock fusion".into(),
            layout: PromptLayout::Bracket,
            bpm_style: BpmStyle::Range,
            ..PromptRequest::default()
        };
        let prompt = generate(&request, 9);
        assert_eq!(prompt.genre.display, "jazz rock");
        assert!(prompt.text.starts_with('['));
        assert!(prompt.text.lines().next().unwrap_or_default().contains("Jazz Rock, Key: "));
        assert_eq!(
            extract_field(&prompt.text, FieldName::Bpm),
            Some("between 100 and 160".to_string())
        );
        assert!(prompt.text.contains("[Chorus]"));
    }

    #[test]
    fn override_wins_over_description() {
        let request = PromptRequest {
            description: "smooth jazz night".into(),
            genre_override: Some("Metal".into()),
            ..PromptRequest::default()
        };
        let prompt = generate(&request, 4);
        assert_eq!(prompt.genre.primary, "metal");
        assert_eq!(prompt.genre.display, "metal");
    }

    #[test]
    fn low_creativity_strips_conflicting_tags() {
        for seed in 0..64 {
            let request = PromptRequest {
                description: "heavy metal".into(),
                creativity_level: 10,
                ..PromptRequest::default()
            };
            let prompt = generate(&request, seed);
            let recheck = coherence::check(&prompt.instruments.instruments, &prompt.style.tags, 10);
            assert!(recheck.valid, "seed {seed}: {:?}", recheck.conflicts);
            assert!(prompt.removed_tags.iter().all(|tag| !prompt.style.tags.contains(tag)));
        }
    }

    #[test]
    fn instrumental_prompts_swap_the_verse() {
        let request = PromptRequest {
            description: "ambient soundscape".into(),
            layout: PromptLayout::Bracket,
            ..PromptRequest::default()
        };
        let mut seen = 0;
        for seed in 0..64 {
            let prompt = generate(&request, seed);
            if !prompt.instruments.is_instrumental() {
                continue;
            }
            seen += 1;
            assert!(prompt.text.contains("[Instrumental Break]"));
            assert!(!prompt.text.contains("[Verse]"));
        }
        assert!(seen > 0);
    }

    #[test]
    fn character_cap_is_honoured() {
        let request = PromptRequest {
            description: "lofi beats to study to".into(),
            layout: PromptLayout::Bracket,
            max_chars: Some(160),
            ..PromptRequest::default()
        };
        let prompt = generate(&request, 5);
        assert!(prompt.text.chars().count() <= 160);
        assert!(prompt.text.starts_with('['));
    }

    #[test]
    fn request_deserialises_with_defaults() {
        let request: PromptRequest =
            serde_json::from_str(r#"{"description": "rainy piano"}"#).expect("valid request");
        assert_eq!(request.creativity_level, DEFAULT_CREATIVITY);
        assert_eq!(request.layout, PromptLayout::Quoted);
        assert!(request.genre_override.is_none());
    }
}
