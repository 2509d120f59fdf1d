use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub domain: String,
    pub key: String,
    pub branch: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen: Option<usize>,
}

impl TraceEvent {
    pub fn new(domain: &str, key: &str, branch: &str, rationale: impl Into<String>) -> Self {
        Self {
            domain: domain.to_string(),
            key: key.to_string(),
            branch: branch.to_string(),
            rationale: rationale.into(),
            candidates: Vec::new(),
            chosen: None,
        }
    }

    pub fn with_pick<S: AsRef<str>>(mut self, candidates: &[S], chosen: usize) -> Self {
        self.candidates = candidates.iter().map(|item| item.as_ref().to_string()).collect();
        self.chosen = Some(chosen);
        self
    }

    pub fn with_candidates<S: AsRef<str>>(mut self, candidates: &[S]) -> Self {
        self.candidates = candidates.iter().map(|item| item.as_ref().to_string()).collect();
        self
    }
}

pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&mut self, event: TraceEvent) {
        tracing::debug!(
            domain = %event.domain,
            key = %event.key,
            branch = %event.branch,
            chosen = ?event.chosen,
            candidates = event.candidates.len(),
            "{}",
            event.rationale
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_keeps_order() {
        let mut sink: Vec<TraceEvent> = Vec::new();
        sink.record(TraceEvent::new("genre", "resolve", "keyword", "matched jazz"));
        sink.record(
            TraceEvent::new("style", "texture", "pick", "texture slot").with_pick(&["a", "b"], 1),
        );
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].branch, "keyword");
        assert_eq!(sink[1].candidates, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(sink[1].chosen, Some(1));
    }

    #[test]
    fn serialises_without_empty_pick_fields() {
        let event = TraceEvent::new("bpm", "blend", "intersection", "overlap");
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert!(!json.contains("candidates"));
        assert!(!json.contains("chosen"));
    }
}
