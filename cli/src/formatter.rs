use crate::catalog::vocab::{KEY_ROOTS, MAJOR_MOODS, MINOR_MOODS};
use crate::rng::{chance, pick_index, RandomStream};
use crate::types::{KeySignature, PromptLayout};
use serde::{Deserialize, Serialize};

pub const QUOTED_HEADER: [&str; 2] = [
    "Generate a song from the structured description below.",
    "Treat every quoted field as a hard requirement.",
];

const DEFAULT_HEADER_MOOD: &str = "Evocative";
const DEFAULT_TEXTURE: &str = "open atmosphere";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptFields {
    pub genre: String,
    pub bpm: String,
    pub moods: Vec<String>,
    pub instruments: Vec<String>,
    pub style_tags: String,
    pub recording: String,
    pub key: KeySignature,
    pub chord_progression: String,
    pub instrumental: bool,
}

struct SectionTemplate {
    label: &'static str,
    template: &'static str,
}

const SECTIONS: &[SectionTemplate] = &[
    SectionTemplate {
        label: "Intro",
        template: "Set a {mood} {texture} scene with {lead} before the groove arrives.",
    },
    SectionTemplate {
        label: "Verse",
        template: "Carry the {genre} groove on {instruments}, vocals sitting close over the {progression} changes.",
    },
    SectionTemplate {
        label: "Chorus",
        template: "Open into a {mood} chorus where {instruments} lift the {progression} hook.",
    },
    SectionTemplate {
        label: "Bridge",
        template: "Thin the layers so {lead} can explore {texture} colours before the final chorus.",
    },
    SectionTemplate {
        label: "Outro",
        template: "Let {lead} ease the {genre} groove into a reflective {texture} fade.",
    },
];

const INSTRUMENTAL_BREAK: SectionTemplate = SectionTemplate {
    label: "Instrumental Break",
    template: "Hand the melody to {lead} while {instruments} keep the {progression} changes moving.",
};

pub fn select_key(moods: &[String], rng: &mut dyn RandomStream) -> KeySignature {
    let root = KEY_ROOTS[pick_index(rng, KEY_ROOTS.len())];
    let lowered: Vec<String> = moods.iter().map(|mood| mood.to_lowercase()).collect();
    let minor = lowered.iter().filter(|mood| MINOR_MOODS.contains(&mood.as_str())).count();
    let major = lowered.iter().filter(|mood| MAJOR_MOODS.contains(&mood.as_str())).count();
    let minor_bias = match minor.cmp(&major) {
        std::cmp::Ordering::Greater => 0.8,
        std::cmp::Ordering::Less => 0.2,
        std::cmp::Ordering::Equal => 0.5,
    };
    let mode = if chance(rng, minor_bias) { "minor" } else { "major" };
    KeySignature { root: root.to_string(), mode: mode.to_string() }
}

pub fn recording_field(context: &str, vocal_style: &str, chord_progression: &str) -> String {
    [context.to_string(), vocal_style.to_string(), format!("{chord_progression} progression")]
        .into_iter()
        .filter(|part| !part.trim().is_empty() && part.trim() != "progression")
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn header_mood(moods: &[String]) -> String {
    moods
        .iter()
        .find(|mood| !mood.trim().is_empty())
        .map(|mood| title_case(mood))
        .unwrap_or_else(|| DEFAULT_HEADER_MOOD.to_string())
}

pub fn bracket_header(mood: &str, genre: &str, key: &str) -> String {
    format!("[{mood}, {}, Key: {key}]", title_case(genre))
}

fn render_section(template: &SectionTemplate, fields: &PromptFields) -> String {
    let lead = fields.instruments.first().map(String::as_str).unwrap_or("the lead voice");
    let instruments = match fields.instruments.len() {
        0 => "the full band".to_string(),
        1 => fields.instruments[0].clone(),
        _ => fields.instruments[..2].join(" and "),
    };
    let mood = fields
        .moods
        .first()
        .map(|mood| mood.to_lowercase())
        .unwrap_or_else(|| "evocative".to_string());
    let texture = fields
        .style_tags
        .split(',')
        .map(str::trim)
        .find(|tag| !tag.is_empty())
        .unwrap_or(DEFAULT_TEXTURE);

    let mut rendered = template.template.to_string();
    rendered = rendered.replace("{mood}", &mood);
    rendered = rendered.replace("{genre}", &fields.genre);
    rendered = rendered.replace("{lead}", lead);
    rendered = rendered.replace("{instruments}", &instruments);
    rendered = rendered.replace("{texture}", texture);
    rendered = rendered.replace("{progression}", &fields.chord_progression);
    format!("[{}]\n{}", template.label, rendered.trim())
}

fn render_quoted(fields: &PromptFields) -> String {
    let mut lines: Vec<String> = QUOTED_HEADER.iter().map(|line| line.to_string()).collect();
    lines.push(String::new());
    lines.push(format!("genre: \"{}\"", fields.genre));
    lines.push(format!("bpm: \"{}\"", fields.bpm));
    lines.push(format!("instruments: \"{}\"", fields.instruments.join(", ")));
    lines.push(format!("style tags: \"{}\"", fields.style_tags));
    lines.push(format!("recording: \"{}\"", fields.recording));
    lines.join("\n")
}

fn render_bracket(fields: &PromptFields) -> String {
    let mut lines = vec![
        bracket_header(&header_mood(&fields.moods), &fields.genre, &fields.key.to_string()),
        String::new(),
        format!("Genre: {}", fields.genre),
        format!("BPM: {}", fields.bpm),
        format!("Mood: {}", fields.moods.join(", ")),
        format!("Instruments: {}", fields.instruments.join(", ")),
        format!("Style Tags: {}", fields.style_tags),
        format!("Recording: {}", fields.recording),
        String::new(),
    ];
    for section in SECTIONS {
        let section = if section.label == "Verse" && fields.instrumental {
            &INSTRUMENTAL_BREAK
        } else {
            section
        };
        lines.push(render_section(section, fields));
    }
    lines.join("\n")
}

pub fn format_prompt(
    fields: &PromptFields,
    layout: PromptLayout,
    max_chars: Option<usize>,
) -> String {
    let text = match layout {
        PromptLayout::Quoted => render_quoted(fields),
        PromptLayout::Bracket => render_bracket(fields),
    };
    match max_chars {
        Some(cap) => apply_char_cap(&text, cap),
        None => text,
    }
}

/// Shortens `text` to at most `cap` characters, preferring to stop at a line
/// break or after a closing quote that ends a line.
pub fn apply_char_cap(text: &str, cap: usize) -> String {
    let Some((limit, _)) = text.char_indices().nth(cap) else {
        return text.to_string();
    };
    let prefix = &text[..limit];
    let bytes = text.as_bytes();
    let mut cut = None;
    for (index, ch) in prefix.char_indices() {
        match ch {
            '\n' => cut = Some(index),
            '"' => {
                let next = bytes.get(index + 1).copied();
                if matches!(next, None | Some(b'\n') | Some(b'\r')) {
                    cut = Some(index + 1);
                }
            }
            _ => {}
        }
    }
    match cut {
        Some(cut) if cut > 0 => drop_dangling_labels(&text[..cut]).to_string(),
        _ => prefix.to_string(),
    }
}

// A section label is only useful with its direction line under it.
fn drop_dangling_labels(text: &str) -> &str {
    let mut kept = text.trim_end();
    while let Some(newline) = kept.rfind('\n') {
        let last = kept[newline + 1..].trim();
        if !(last.starts_with('[') && last.ends_with(']')) {
            break;
        }
        kept = kept[..newline].trim_end();
    }
    kept
}
