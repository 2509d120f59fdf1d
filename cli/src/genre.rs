use crate::catalog::{GenreCatalog, DEFAULT_GENRE};
use crate::matching::contains_whole_word;
use crate::rng::{pick_index, RandomStream};
use crate::trace::{TraceEvent, TraceSink};
use crate::types::{ResolutionPolicy, ResolvedGenre, MAX_GENRE_COMPONENTS};
use tracing::warn;

const DOMAIN: &str = "genre";

pub fn resolve(
    catalog: &GenreCatalog,
    description: &str,
    explicit_override: Option<&str>,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> ResolvedGenre {
    if let Some(raw) = explicit_override.filter(|value| !value.trim().is_empty()) {
        if let Some(resolved) = resolve_override(catalog, raw, trace) {
            return resolved;
        }
    }

    if let Some(resolved) = resolve_keywords(catalog, description, trace) {
        return resolved;
    }

    if let Some(resolved) = resolve_mood(catalog, description, trace) {
        return resolved;
    }

    resolve_random(catalog, rng, trace)
}

fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '+' | '/'))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn resolve_override(
    catalog: &GenreCatalog,
    raw: &str,
    trace: &mut dyn TraceSink,
) -> Option<ResolvedGenre> {
    let display = raw.trim().to_lowercase();
    let tokens: Vec<&str> = split_tokens(&display).take(MAX_GENRE_COMPONENTS).collect();
    let mut components: Vec<String> = Vec::new();
    for token in &tokens {
        if let Some(genre) = catalog.genre(token) {
            if !components.iter().any(|existing| existing == genre.id) {
                components.push(genre.id.to_string());
            }
        }
    }

    if components.is_empty() {
        warn!("genre override {raw:?} names no known genre; falling back to detection");
        trace.record(
            TraceEvent::new(
                DOMAIN,
                "resolve",
                "override-invalid",
                format!("no canonical id in {raw:?}"),
            )
            .with_candidates(&tokens),
        );
        return None;
    }

    trace.record(
        TraceEvent::new(
            DOMAIN,
            "resolve",
            ResolutionPolicy::Override.label(),
            format!("override accepted {} of {} tokens", components.len(), tokens.len()),
        )
        .with_candidates(&components),
    );
    Some(ResolvedGenre::new(components, Some(display), None, ResolutionPolicy::Override))
}

fn resolve_keywords(
    catalog: &GenreCatalog,
    description: &str,
    trace: &mut dyn TraceSink,
) -> Option<ResolvedGenre> {
    let mut hits: Vec<String> = Vec::new();
    for genre in catalog.scan_order() {
        if hits.len() >= MAX_GENRE_COMPONENTS {
            break;
        }
        if genre.keywords.iter().any(|keyword| contains_whole_word(description, keyword)) {
            hits.push(genre.id.to_string());
        }
    }

    if hits.is_empty() {
        let (alias, id) = catalog
            .aliases_longest_first()
            .into_iter()
            .find(|(alias, _)| contains_whole_word(description, alias))?;
        if !catalog.is_canonical(id) {
            return None;
        }
        trace.record(TraceEvent::new(
            DOMAIN,
            "resolve",
            ResolutionPolicy::Alias.label(),
            format!("alias {alias:?} maps to {id}"),
        ));
        let id = id.to_string();
        return Some(ResolvedGenre::new(
            vec![id.clone()],
            None,
            Some(id),
            ResolutionPolicy::Alias,
        ));
    }

    trace.record(
        TraceEvent::new(
            DOMAIN,
            "resolve",
            ResolutionPolicy::Keyword.label(),
            format!("{} whole-word keyword hit(s)", hits.len()),
        )
        .with_candidates(&hits),
    );
    let detected = hits.first().cloned();
    Some(ResolvedGenre::new(hits, None, detected, ResolutionPolicy::Keyword))
}

fn resolve_mood(
    catalog: &GenreCatalog,
    description: &str,
    trace: &mut dyn TraceSink,
) -> Option<ResolvedGenre> {
    let mut scores: Vec<(&'static str, usize)> = Vec::new();
    for (phrase, id) in catalog.mood_phrases() {
        if !contains_whole_word(description, phrase) {
            continue;
        }
        match scores.iter_mut().find(|(existing, _)| existing == id) {
            Some(entry) => entry.1 += 1,
            None => scores.push((*id, 1)),
        }
    }

    // First entry wins ties, which keeps table order.
    let mut best: Option<(&'static str, usize)> = None;
    for (id, score) in &scores {
        if best.map(|(_, top)| *score > top).unwrap_or(true) {
            best = Some((*id, *score));
        }
    }
    let (id, score) = best?;
    if !catalog.is_canonical(id) {
        return None;
    }

    let candidates: Vec<&str> = scores.iter().map(|(id, _)| *id).collect();
    let chosen = candidates.iter().position(|candidate| *candidate == id).unwrap_or(0);
    trace.record(
        TraceEvent::new(
            DOMAIN,
            "resolve",
            ResolutionPolicy::Mood.label(),
            format!("{score} mood phrase hit(s) point at {id}"),
        )
        .with_pick(&candidates, chosen),
    );
    Some(ResolvedGenre::new(
        vec![id.to_string()],
        None,
        Some(id.to_string()),
        ResolutionPolicy::Mood,
    ))
}

fn resolve_random(
    catalog: &GenreCatalog,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> ResolvedGenre {
    let ids: Vec<&str> = catalog.genres().iter().map(|genre| genre.id).collect();
    if ids.is_empty() {
        trace.record(TraceEvent::new(DOMAIN, "resolve", "default", "catalog is empty"));
        return ResolvedGenre::new(
            vec![DEFAULT_GENRE.to_string()],
            None,
            None,
            ResolutionPolicy::Random,
        );
    }
    let index = pick_index(rng, ids.len());
    trace.record(
        TraceEvent::new(
            DOMAIN,
            "resolve",
            ResolutionPolicy::Random.label(),
            "nothing detected; uniform pick",
        )
        .with_pick(&ids, index),
    );
    ResolvedGenre::new(vec![ids[index].to_string()], None, None, ResolutionPolicy::Random)
}

pub fn components_from_display(catalog: &GenreCatalog, text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut components: Vec<String> = Vec::new();
    let push = |id: &str, components: &mut Vec<String>| {
        if components.len() < MAX_GENRE_COMPONENTS && !components.iter().any(|c| c == id) {
            components.push(id.to_string());
        }
    };

    for (alias, id) in catalog.aliases_longest_first() {
        if alias.contains(' ') && contains_whole_word(&lower, alias) {
            push(id, &mut components);
        }
    }
    for token in lower.split(|c: char| c.is_whitespace() || matches!(c, ',' | '+' | '/')) {
        let token = token.trim_matches(|c: char| c == '"' || c == '\'');
        if token.is_empty() {
            continue;
        }
        if let Some(id) = catalog.canonical_id(token) {
            push(id, &mut components);
            continue;
        }
        for part in token.split('-') {
            if let Some(id) = catalog.canonical_id(part) {
                push(id, &mut components);
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedStream, SeededStream};
    use crate::trace::{NullTrace, TraceEvent};

    fn resolve_plain(description: &str, genre_override: Option<&str>) -> ResolvedGenre {
        let catalog = GenreCatalog::builtin();
        let mut rng = SeededStream::new(11);
        resolve(&catalog, description, genre_override, &mut rng, &mut NullTrace)
    }

    #[test]
    fn detects_single_keyword() {
        let resolved = resolve_plain("smooth jazz night", None);
        assert_eq!(resolved.primary, "jazz");
        assert_eq!(resolved.components, vec!["jazz".to_string()]);
        assert_eq!(resolved.detected.as_deref(), Some("jazz"));
        assert_eq!(resolved.policy, ResolutionPolicy::Keyword);
    }

    #[test]
    fn detects_multiple_keywords_in_scan_order() {
        let resolved = resolve_plain("jazz rock fusion", None);
        assert_eq!(resolved.components, vec!["jazz".to_string(), "rock".to_string()]);
        assert_eq!(resolved.display, "jazz rock");
    }

    #[test]
    fn whole_word_matching_skips_embedded_names() {
        let catalog = GenreCatalog::builtin();
        let mut trace: Vec<TraceEvent> = Vec::new();
        let mut rng = SeededStream::new(3);
        let resolved = resolve(&catalog, "discovering popcorn", None, &mut rng, &mut trace);
        assert_eq!(resolved.policy, ResolutionPolicy::Random);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].branch, ResolutionPolicy::Random.label());
        assert!(!trace.iter().any(|event| event.branch == ResolutionPolicy::Keyword.label()));
    }

    #[test]
    fn caps_components_at_four() {
        let resolved = resolve_plain("jazz rock pop metal punk folk", None);
        assert_eq!(resolved.components.len(), MAX_GENRE_COMPONENTS);
        assert_eq!(resolved.components, vec!["jazz", "rock", "pop", "metal"]);
    }

    #[test]
    fn valid_override_wins_and_keeps_raw_display() {
        let resolved = resolve_plain("smooth jazz night", Some("  Techno, House "));
        assert_eq!(resolved.components, vec!["techno".to_string(), "house".to_string()]);
        assert_eq!(resolved.display, "techno, house");
        assert_eq!(resolved.policy, ResolutionPolicy::Override);
        assert!(resolved.detected.is_none());
    }

    #[test]
    fn override_keeps_only_first_four_tokens() {
        let resolved = resolve_plain("", Some("polka jazz rock pop metal"));
        assert_eq!(resolved.components, vec!["jazz", "rock", "pop"]);
    }

    #[test]
    fn invalid_override_falls_through_with_trace() {
        let catalog = GenreCatalog::builtin();
        let mut trace: Vec<TraceEvent> = Vec::new();
        let mut rng = SeededStream::new(5);
        let resolved =
            resolve(&catalog, "smooth jazz night", Some("polka"), &mut rng, &mut trace);
        assert_eq!(resolved.primary, "jazz");
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].branch, "override-invalid");
        assert_eq!(trace[1].branch, "keyword");
    }

    #[test]
    fn alias_fallback_when_no_keyword_matches() {
        let resolved = resolve_plain("some dusty lo-fi for studying", None);
        assert_eq!(resolved.components, vec!["lofi".to_string()]);
        assert_eq!(resolved.policy, ResolutionPolicy::Alias);

        let resolved = resolve_plain("classic drum and bass roller", None);
        assert_eq!(resolved.primary, "dnb");
    }

    #[test]
    fn mood_classifier_picks_highest_scoring_genre() {
        let resolved = resolve_plain("something calm, peaceful and a little romantic", None);
        assert_eq!(resolved.components, vec!["ambient".to_string()]);
        assert_eq!(resolved.policy, ResolutionPolicy::Mood);
    }

    #[test]
    fn random_pick_uses_the_stream_and_emits_one_event() {
        let catalog = GenreCatalog::builtin();
        let mut trace: Vec<TraceEvent> = Vec::new();
        let mut rng = ScriptedStream::new(vec![0.0]);
        let resolved = resolve(&catalog, "untitled", None, &mut rng, &mut trace);
        assert_eq!(resolved.primary, catalog.genres()[0].id);
        assert_eq!(rng.draws(), 1);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].chosen, Some(0));
    }

    #[test]
    fn resolution_is_deterministic_for_a_seed() {
        let catalog = GenreCatalog::builtin();
        let first = resolve(&catalog, "xyz", None, &mut SeededStream::new(99), &mut NullTrace);
        let second = resolve(&catalog, "xyz", None, &mut SeededStream::new(99), &mut NullTrace);
        assert_eq!(first, second);
    }

    #[test]
    fn components_from_display_reads_ids_and_aliases() {
        let catalog = GenreCatalog::builtin();
        assert_eq!(components_from_display(&catalog, "jazz rock"), vec!["jazz", "rock"]);
        assert_eq!(components_from_display(&catalog, "techno, house"), vec!["techno", "house"]);
        assert_eq!(components_from_display(&catalog, "R&B-soul"), vec!["rnb", "soul"]);
        assert_eq!(components_from_display(&catalog, "drum and bass"), vec!["dnb"]);
        assert!(components_from_display(&catalog, "unknown").is_empty());
    }
}
