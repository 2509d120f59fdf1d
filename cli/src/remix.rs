use crate::bpm::{self, DEFAULT_BPM_PHRASE};
use crate::catalog::{GenreCatalog, DEFAULT_GENRE};
use crate::formatter::{header_mood, title_case};
use crate::genre::{self, components_from_display};
use crate::instruments::assemble_instruments;
use crate::matching::cached_regex;
use crate::rng::{sample_distinct, RandomStream};
use crate::style::{self, StyleContext};
use crate::trace::{TraceEvent, TraceSink};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

const DOMAIN: &str = "remix";

// The genre slot may itself hold commas ("Techno, House"), so it runs lazily
// up to the key label.
const HEADER_PATTERN: &str =
    r"^\[(?P<mood>[^,\]\r\n]*),[ \t]*(?P<genre>[^\]\r\n]*?),[ \t]*Key:[^\]\r\n]*\]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Genre,
    Bpm,
    Mood,
    Instruments,
    StyleTags,
    Recording,
}

impl FieldName {
    fn key_pattern(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Bpm => "bpm",
            Self::Mood => "moods?",
            Self::Instruments => "instruments",
            Self::StyleTags => r"style[ _\-]?tags",
            Self::Recording => "recording",
        }
    }

    fn line_pattern(self) -> String {
        format!(
            r"^(?P<prefix>[ \t]*(?:{})[ \t]*:[ \t]*)(?P<value>[^\r\n]*)",
            self.key_pattern()
        )
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Self::Genre => DEFAULT_GENRE,
            Self::Bpm => DEFAULT_BPM_PHRASE,
            _ => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Bpm => "bpm",
            Self::Mood => "mood",
            Self::Instruments => "instruments",
            Self::StyleTags => "style tags",
            Self::Recording => "recording",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match normalized.as_str() {
            "genre" => Ok(Self::Genre),
            "bpm" | "tempo" => Ok(Self::Bpm),
            "mood" | "moods" => Ok(Self::Mood),
            "instruments" => Ok(Self::Instruments),
            "styletags" | "style" | "tags" => Ok(Self::StyleTags),
            "recording" => Ok(Self::Recording),
            _ => Err(format!("unknown field {value:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemixOutcome {
    pub text: String,
    pub field: FieldName,
    pub previous: String,
    pub replacement: String,
}

struct FieldLine {
    value: Range<usize>,
    quoted: bool,
}

fn locate(text: &str, field: FieldName) -> Option<FieldLine> {
    let regex = cached_regex(&field.line_pattern())?;
    let captures = regex.captures(text)?;
    let value = captures.name("value")?;
    let raw = value.as_str().trim_end();
    let quoted = raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"');
    Some(FieldLine { value: value.start()..value.start() + raw.len(), quoted })
}

fn unquote(raw: &str) -> &str {
    let raw = raw.trim();
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        raw[1..raw.len() - 1].trim()
    } else {
        raw
    }
}

pub fn extract_field(text: &str, field: FieldName) -> Option<String> {
    let line = locate(text, field)?;
    Some(unquote(&text[line.value]).to_string())
}

pub fn extract_field_or_default(text: &str, field: FieldName) -> String {
    extract_field(text, field)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| field.default_value().to_string())
}

/// Rewrites the value on the first line carrying `field`. The key, its
/// spelling and the quoting style are kept; every other byte is untouched.
pub fn replace_field_line(text: &str, field: FieldName, value: &str) -> String {
    let Some(line) = locate(text, field) else {
        return text.to_string();
    };
    let rendered = if line.quoted { format!("\"{value}\"") } else { value.to_string() };
    let mut out = String::with_capacity(text.len() + rendered.len());
    out.push_str(&text[..line.value.start]);
    out.push_str(&rendered);
    out.push_str(&text[line.value.end..]);
    out
}

fn replace_header_slot(text: &str, slot: &str, value: &str) -> String {
    let Some(regex) = cached_regex(HEADER_PATTERN) else {
        return text.to_string();
    };
    let Some(found) = regex.captures(text).and_then(|captures| captures.name(slot)) else {
        return text.to_string();
    };
    let range = found.start()..found.start() + found.as_str().trim_end().len();
    format!("{}{}{}", &text[..range.start], value, &text[range.end..])
}

fn split_csv(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|part| !part.is_empty()).map(String::from).collect()
}

fn current_components(catalog: &GenreCatalog, text: &str) -> Vec<String> {
    let components =
        components_from_display(catalog, &extract_field_or_default(text, FieldName::Genre));
    if components.is_empty() {
        vec![DEFAULT_GENRE.to_string()]
    } else {
        components
    }
}

fn outcome(text: String, field: FieldName, previous: String, replacement: String) -> RemixOutcome {
    RemixOutcome { text, field, previous, replacement }
}

pub fn remix_genre(
    catalog: &GenreCatalog,
    text: &str,
    target: Option<&str>,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> RemixOutcome {
    let previous = extract_field_or_default(text, FieldName::Genre);
    if locate(text, FieldName::Genre).is_none() {
        trace.record(TraceEvent::new(DOMAIN, "genre", "missing", "no genre line to swap"));
        return outcome(text.to_string(), FieldName::Genre, previous.clone(), previous);
    }
    let current = components_from_display(catalog, &previous);

    let components: Vec<String> = match target.filter(|value| !value.trim().is_empty()) {
        Some(target) => genre::resolve(catalog, target, Some(target), rng, trace).components,
        None => fresh_components(catalog, &current, rng),
    };
    let display = components.join(" ");
    let branch = if target.is_some() { "target" } else { "fresh" };
    trace.record(
        TraceEvent::new(DOMAIN, "genre", branch, "genre swap").with_candidates(&components),
    );

    let mut remixed = replace_field_line(text, FieldName::Genre, &display);
    if let Some(previous_bpm) = extract_field(&remixed, FieldName::Bpm) {
        let blended = bpm::blend(catalog, &display);
        let rendered = bpm::render_bpm(blended.as_ref(), bpm::style_of(&previous_bpm), rng);
        remixed = replace_field_line(&remixed, FieldName::Bpm, &rendered);
    }
    remixed = replace_header_slot(&remixed, "genre", &title_case(&display));

    outcome(remixed, FieldName::Genre, previous, display)
}

fn fresh_components(
    catalog: &GenreCatalog,
    current: &[String],
    rng: &mut dyn RandomStream,
) -> Vec<String> {
    let count = current.len().clamp(1, crate::types::MAX_GENRE_COMPONENTS);
    let unused: Vec<&str> = catalog
        .genres()
        .iter()
        .map(|genre| genre.id)
        .filter(|id| !current.iter().any(|existing| existing == id))
        .collect();
    let pool: Vec<&str> = if unused.len() >= count {
        unused
    } else {
        catalog.genres().iter().map(|genre| genre.id).collect()
    };
    sample_distinct(rng, &pool, count)
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn remix_bpm(
    catalog: &GenreCatalog,
    text: &str,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> RemixOutcome {
    let previous = extract_field_or_default(text, FieldName::Bpm);
    let display = current_components(catalog, text).join(" ");
    let blended = bpm::blend(catalog, &display);
    let replacement = bpm::render_bpm(blended.as_ref(), bpm::style_of(&previous), rng);
    trace.record(TraceEvent::new(
        DOMAIN,
        "bpm",
        "rerender",
        format!("{previous} -> {replacement}"),
    ));
    let remixed = replace_field_line(text, FieldName::Bpm, &replacement);
    outcome(remixed, FieldName::Bpm, previous, replacement)
}

pub fn remix_instruments(
    catalog: &GenreCatalog,
    text: &str,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> RemixOutcome {
    let previous = extract_field_or_default(text, FieldName::Instruments);
    let components = current_components(catalog, text);
    let selection = assemble_instruments(catalog, &components, rng, trace);
    let replacement = selection.instruments.join(", ");
    let remixed = replace_field_line(text, FieldName::Instruments, &replacement);
    outcome(remixed, FieldName::Instruments, previous, replacement)
}

pub fn remix_style_tags(
    catalog: &GenreCatalog,
    text: &str,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> RemixOutcome {
    let previous = extract_field_or_default(text, FieldName::StyleTags);
    let components = current_components(catalog, text);
    let moods = extract_field_or_default(text, FieldName::Mood);
    let recording = extract_field_or_default(text, FieldName::Recording);
    let context = StyleContext {
        description: &moods,
        instrumental: recording.to_lowercase().contains("instrumental"),
        ..Default::default()
    };
    let assembled = style::assemble(catalog, &components, rng, &context, trace);
    let remixed = replace_field_line(text, FieldName::StyleTags, &assembled.formatted);
    outcome(remixed, FieldName::StyleTags, previous, assembled.formatted)
}

pub fn remix_recording(
    catalog: &GenreCatalog,
    text: &str,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> RemixOutcome {
    let previous = extract_field_or_default(text, FieldName::Recording);
    let components = current_components(catalog, text);
    let context = style::recording_context(catalog, &components, rng, trace);
    let mut parts = split_csv(&previous);
    match parts.first_mut() {
        Some(first) => *first = context.to_string(),
        None => parts.push(context.to_string()),
    }
    let replacement = parts.join(", ");
    let remixed = replace_field_line(text, FieldName::Recording, &replacement);
    outcome(remixed, FieldName::Recording, previous, replacement)
}

fn known_mood(catalog: &GenreCatalog, components: &[String], tag: &str) -> bool {
    components
        .iter()
        .flat_map(|component| catalog.moods_for(component).iter())
        .any(|mood| mood.eq_ignore_ascii_case(tag))
        || style::priority_moods(tag).iter().any(|mood| mood.eq_ignore_ascii_case(tag))
}

pub fn remix_mood(
    catalog: &GenreCatalog,
    text: &str,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> RemixOutcome {
    let components = current_components(catalog, text);
    let style_tags = split_csv(&extract_field_or_default(text, FieldName::StyleTags));
    let previous: Vec<String> = match extract_field(text, FieldName::Mood) {
        Some(line) if !line.is_empty() => split_csv(&line),
        _ => style_tags
            .iter()
            .filter(|tag| known_mood(catalog, &components, tag))
            .cloned()
            .collect(),
    };
    let fresh = style::fresh_mood_tags(catalog, &components, &previous, rng, trace);

    let mut remixed = replace_field_line(text, FieldName::Mood, &fresh.join(", "));
    remixed = replace_header_slot(&remixed, "mood", &header_mood(&fresh));

    if !style_tags.is_empty() {
        let mut replacements = fresh.iter();
        let mut updated: Vec<String> = Vec::with_capacity(style_tags.len());
        for tag in &style_tags {
            let is_old_mood = previous.iter().any(|mood| mood.eq_ignore_ascii_case(tag));
            let next = if is_old_mood { replacements.next().cloned() } else { Some(tag.clone()) };
            if let Some(next) = next {
                if !updated.iter().any(|existing| existing.eq_ignore_ascii_case(&next)) {
                    updated.push(next);
                }
            }
        }
        remixed = replace_field_line(&remixed, FieldName::StyleTags, &updated.join(", "));
    }

    trace.record(TraceEvent::new(DOMAIN, "mood", "fresh", "mood swap").with_candidates(&fresh));
    outcome(remixed, FieldName::Mood, previous.join(", "), fresh.join(", "))
}

pub fn remix(
    catalog: &GenreCatalog,
    field: FieldName,
    text: &str,
    target: Option<&str>,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> RemixOutcome {
    match field {
        FieldName::Genre => remix_genre(catalog, text, target, rng, trace),
        FieldName::Bpm => remix_bpm(catalog, text, rng, trace),
        FieldName::Mood => remix_mood(catalog, text, rng, trace),
        FieldName::Instruments => remix_instruments(catalog, text, rng, trace),
        FieldName::StyleTags => remix_style_tags(catalog, text, rng, trace),
        FieldName::Recording => remix_recording(catalog, text, rng, trace),
    }
}
