use crate::catalog::vocab::{GENERIC_PROGRESSIONS, GENERIC_VOCALS};
use crate::catalog::{GenreCatalog, GenreDefinition, InstrumentGroup};
use crate::rng::{chance, int_in_range, pick_index, RandomStream};
use crate::trace::{TraceEvent, TraceSink};
use crate::types::{InstrumentSelection, MAX_INSTRUMENTS};

const DOMAIN: &str = "instruments";

fn already_chosen(chosen: &[String], option: &str) -> bool {
    chosen.iter().any(|existing| existing.eq_ignore_ascii_case(option))
}

fn allowed(
    genre: &GenreDefinition,
    options: &[&'static str],
    chosen: &[String],
) -> Vec<&'static str> {
    options
        .iter()
        .copied()
        .filter(|option| !already_chosen(chosen, option))
        .filter(|option| !chosen.iter().any(|existing| genre.excludes(existing, option)))
        .collect()
}

fn fill_group(
    genre: &GenreDefinition,
    group: &InstrumentGroup,
    chosen: &mut Vec<String>,
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) {
    if group.probability < 1.0 && !chance(rng, group.probability) {
        trace.record(TraceEvent::new(
            DOMAIN,
            group.name,
            "skipped",
            format!("inclusion roll failed at p={:.2}", group.probability),
        ));
        return;
    }
    let count = int_in_range(rng, group.min as u32, group.max as u32);
    for _ in 0..count {
        let candidates = allowed(genre, group.options, chosen);
        if candidates.is_empty() {
            trace.record(TraceEvent::new(
                DOMAIN,
                group.name,
                "exhausted",
                "every option chosen or excluded",
            ));
            break;
        }
        let index = pick_index(rng, candidates.len());
        trace.record(
            TraceEvent::new(DOMAIN, group.name, "pick", "group option")
                .with_pick(&candidates, index),
        );
        chosen.push(candidates[index].to_string());
    }
}

fn pick_or_generic(
    rng: &mut dyn RandomStream,
    pool: &'static [&'static str],
    generic: &'static [&'static str],
    key: &str,
    trace: &mut dyn TraceSink,
) -> String {
    let (pool, branch) = if pool.is_empty() { (generic, "generic") } else { (pool, "genre") };
    let index = pick_index(rng, pool.len());
    trace.record(TraceEvent::new(DOMAIN, key, branch, "uniform pick").with_pick(pool, index));
    pool[index].to_string()
}

pub fn assemble_instruments(
    catalog: &GenreCatalog,
    components: &[String],
    rng: &mut dyn RandomStream,
    trace: &mut dyn TraceSink,
) -> InstrumentSelection {
    let primary = components.first().and_then(|id| catalog.genre(id));
    let mut chosen: Vec<String> = Vec::new();

    if let Some(genre) = primary {
        let mut groups: Vec<&InstrumentGroup> = genre.groups.iter().collect();
        groups.sort_by_key(|group| group.order);
        for group in groups {
            fill_group(genre, group, &mut chosen, rng, trace);
        }
    }

    for component in components.iter().skip(1) {
        let Some(genre) = catalog.genre(component) else {
            continue;
        };
        let Some(group) = genre.signature_group() else {
            continue;
        };
        let candidates = allowed(genre, group.options, &chosen);
        if candidates.is_empty() {
            continue;
        }
        let index = pick_index(rng, candidates.len());
        trace.record(
            TraceEvent::new(DOMAIN, "signature", genre.id, format!("{} signature", group.name))
                .with_pick(&candidates, index),
        );
        chosen.push(candidates[index].to_string());
    }

    if chosen.len() > MAX_INSTRUMENTS {
        let dropped = chosen.split_off(MAX_INSTRUMENTS);
        trace.record(
            TraceEvent::new(DOMAIN, "cap", "dropped", "instrument cap reached")
                .with_candidates(&dropped),
        );
    }

    let chord_progression = pick_or_generic(
        rng,
        primary.map(|genre| genre.progressions).unwrap_or(&[]),
        GENERIC_PROGRESSIONS,
        "progression",
        trace,
    );
    let vocal_style = pick_or_generic(
        rng,
        primary.map(|genre| genre.vocals).unwrap_or(&[]),
        GENERIC_VOCALS,
        "vocal",
        trace,
    );

    InstrumentSelection { instruments: chosen, chord_progression, vocal_style }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedStream, SeededStream};
    use crate::trace::NullTrace;

    fn components(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn high_rolls_skip_optional_groups_and_respect_exclusions() {
        let mut rng = ScriptedStream::new(vec![0.99]);
        let selection = assemble_instruments(
            &GenreCatalog::builtin(),
            &components(&["jazz"]),
            &mut rng,
            &mut NullTrace,
        );
        assert_eq!(
            selection.instruments,
            vec!["electric bass", "ride cymbal", "rhodes electric piano"]
        );
        assert_eq!(selection.chord_progression, "rhythm changes");
        assert_eq!(selection.vocal_style, "scat vocals");
    }

    #[test]
    fn exclusion_pairs_never_share_a_selection() {
        let catalog = GenreCatalog::builtin();
        for genre in catalog.genres() {
            for seed in 0..32 {
                let mut rng = SeededStream::new(seed);
                let ids = components(&[genre.id]);
                let selection = assemble_instruments(&catalog, &ids, &mut rng, &mut NullTrace);
                for (left, right) in genre.exclusions {
                    let both = selection.instruments.iter().any(|item| item == left)
                        && selection.instruments.iter().any(|item| item == right);
                    assert!(!both, "{}: {left} with {right}", genre.id);
                }
            }
        }
    }

    #[test]
    fn blends_are_capped_and_unique() {
        let catalog = GenreCatalog::builtin();
        for seed in 0..32 {
            let mut rng = SeededStream::new(seed);
            let selection = assemble_instruments(
                &catalog,
                &components(&["jazz", "rock", "electronic", "metal"]),
                &mut rng,
                &mut NullTrace,
            );
            assert!(selection.instruments.len() <= MAX_INSTRUMENTS);
            let mut lowered: Vec<String> =
                selection.instruments.iter().map(|item| item.to_lowercase()).collect();
            lowered.sort();
            lowered.dedup();
            assert_eq!(lowered.len(), selection.instruments.len());
        }
    }

    #[test]
    fn secondary_genre_contributes_its_signature() {
        let catalog = GenreCatalog::builtin();
        let mut rng = SeededStream::new(5);
        let ids = components(&["ambient", "latin"]);
        let selection = assemble_instruments(&catalog, &ids, &mut rng, &mut NullTrace);
        let signature = catalog
            .genre("latin")
            .and_then(|genre| genre.signature_group())
            .map(|group| group.options)
            .unwrap_or(&[]);
        assert!(selection.instruments.iter().any(|item| signature.contains(&item.as_str())));
    }

    #[test]
    fn unknown_primary_uses_generic_pools() {
        let mut rng = ScriptedStream::new(vec![0.0]);
        let selection = assemble_instruments(
            &GenreCatalog::builtin(),
            &components(&["polka"]),
            &mut rng,
            &mut NullTrace,
        );
        assert!(selection.instruments.is_empty());
        assert_eq!(selection.chord_progression, GENERIC_PROGRESSIONS[0]);
        assert_eq!(selection.vocal_style, GENERIC_VOCALS[0]);
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let catalog = GenreCatalog::builtin();
        let ids = components(&["rock", "folk"]);
        let mut rng = SeededStream::new(21);
        let first = assemble_instruments(&catalog, &ids, &mut rng, &mut NullTrace);
        let mut rng = SeededStream::new(21);
        let second = assemble_instruments(&catalog, &ids, &mut rng, &mut NullTrace);
        assert_eq!(first, second);
    }
}
