use crate::trace::{TraceEvent, TraceSink};
use crate::types::{CoherenceConflict, CoherenceReport};

pub const CREATIVITY_BYPASS: u8 = 60;

struct CoherenceRule {
    name: &'static str,
    instruments: &'static [&'static str],
    production: &'static [&'static str],
}

const RULES: &[CoherenceRule] = &[
    CoherenceRule {
        name: "distorted-intimate",
        instruments: &["distorted", "overdriven", "fuzz"],
        production: &["intimate", "bedroom", "whisper"],
    },
    CoherenceRule {
        name: "orchestral-lofi",
        instruments: &["orchestra", "string ensemble", "symphonic", "brass section"],
        production: &["lo-fi", "lofi", "cassette", "dusty"],
    },
    CoherenceRule {
        name: "acoustic-glitch",
        instruments: &["acoustic"],
        production: &["glitch", "bitcrush", "stutter"],
    },
    CoherenceRule {
        name: "drum-machine-live-room",
        instruments: &["drum machine", "808", "drum loop"],
        production: &["live room", "captured live", "live off the floor"],
    },
    CoherenceRule {
        name: "choir-dry",
        instruments: &["choir", "choral"],
        production: &["dry", "close-miked"],
    },
];

fn mentions_any(text: &str, patterns: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    patterns.iter().any(|pattern| lowered.contains(pattern))
}

pub fn check<I, T>(
    instruments: &[I],
    production_tags: &[T],
    creativity_level: u8,
) -> CoherenceReport
where
    I: AsRef<str>,
    T: AsRef<str>,
{
    if creativity_level > CREATIVITY_BYPASS {
        return CoherenceReport { valid: true, conflicts: Vec::new() };
    }
    let mut conflicts = Vec::new();
    for rule in RULES {
        for instrument in instruments.iter().map(AsRef::as_ref) {
            if !mentions_any(instrument, rule.instruments) {
                continue;
            }
            for tag in production_tags.iter().map(AsRef::as_ref) {
                if mentions_any(tag, rule.production) {
                    conflicts.push(CoherenceConflict {
                        rule: rule.name.to_string(),
                        instrument: instrument.to_string(),
                        tag: tag.to_string(),
                    });
                }
            }
        }
    }
    CoherenceReport { valid: conflicts.is_empty(), conflicts }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoherenceFix {
    pub tags: Vec<String>,
    pub removed: Vec<String>,
    pub report: CoherenceReport,
}

pub fn fix<I: AsRef<str>>(
    instruments: &[I],
    production_tags: &[String],
    creativity_level: u8,
    trace: &mut dyn TraceSink,
) -> CoherenceFix {
    let report = check(instruments, production_tags, creativity_level);
    if report.valid {
        return CoherenceFix { tags: production_tags.to_vec(), removed: Vec::new(), report };
    }
    let (removed, tags): (Vec<String>, Vec<String>) = production_tags
        .iter()
        .cloned()
        .partition(|tag| report.conflicts.iter().any(|conflict| &conflict.tag == tag));
    for conflict in &report.conflicts {
        trace.record(TraceEvent::new(
            "coherence",
            &conflict.rule,
            "removed",
            format!("{:?} clashes with {:?}", conflict.tag, conflict.instrument),
        ));
    }
    CoherenceFix { tags, removed, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::NullTrace;

    #[test]
    fn distorted_guitar_clashes_with_bedroom_recording() {
        let report = check(&["distorted guitar"], &["intimate bedroom recording"], 30);
        assert!(!report.valid);
        assert_eq!(report.conflicts.len(), 1);
        assert_eq!(report.conflicts[0].rule, "distorted-intimate");

        let relaxed = check(&["distorted guitar"], &["intimate bedroom recording"], 80);
        assert!(relaxed.valid);
        assert!(relaxed.conflicts.is_empty());
    }

    #[test]
    fn bypass_threshold_is_exclusive() {
        assert!(!check(&["distorted guitar"], &["whispered intimacy"], 60).valid);
        assert!(check(&["distorted guitar"], &["whispered intimacy"], 61).valid);
    }

    #[test]
    fn every_co_occurring_pair_is_reported() {
        let report = check(
            &["Acoustic Guitar", "chamber choir", "808 drum machine"],
            &["glitchy stutter edits", "dry close-miked sound", "captured live in one room"],
            0,
        );
        let rules: Vec<&str> = report.conflicts.iter().map(|c| c.rule.as_str()).collect();
        assert_eq!(rules, vec!["acoustic-glitch", "drum-machine-live-room", "choir-dry"]);
    }

    #[test]
    fn unrelated_material_is_valid() {
        let report = check(&["grand piano"], &["lush hall reverb", "wide stereo image"], 0);
        assert!(report.valid);
    }

    #[test]
    fn fix_removes_only_offending_tags() {
        let tags: Vec<String> = vec![
            "lush hall reverb".into(),
            "intimate bedroom recording".into(),
            "wide stereo image".into(),
        ];
        let fixed = fix(&["distorted guitar"], &tags, 10, &mut NullTrace);
        assert_eq!(
            fixed.tags,
            vec!["lush hall reverb".to_string(), "wide stereo image".to_string()]
        );
        assert_eq!(fixed.removed, vec!["intimate bedroom recording".to_string()]);
        assert!(!fixed.report.valid);

        let untouched = fix(&["distorted guitar"], &tags, 90, &mut NullTrace);
        assert_eq!(untouched.tags, tags);
        assert!(untouched.removed.is_empty());
    }
}
