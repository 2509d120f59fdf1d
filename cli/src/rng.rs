use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The only source of randomness the prompt core is allowed to touch.
///
/// Every selection in the crate goes through one of these, so a fixed seed
/// reproduces a prompt byte for byte. A stream carries a cursor and must not
/// be shared between requests.
pub trait RandomStream {
    fn next(&mut self) -> f64;
}

#[derive(Debug, Clone)]
pub struct SeededStream {
    seed: u64,
    inner: Pcg64Mcg,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        Self { seed, inner: Pcg64Mcg::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    pub fn from_description(description: &str) -> Self {
        Self::new(description_seed(description))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomStream for SeededStream {
    fn next(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedStream {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedStream {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted stream needs at least one value");
        Self { values, cursor: 0 }
    }

    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomStream for ScriptedStream {
    fn next(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

pub fn description_seed(description: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in description.trim().to_lowercase().as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

pub fn pick_index(rng: &mut dyn RandomStream, len: usize) -> usize {
    assert!(len > 0, "pick_index called with an empty candidate set");
    let index = (rng.next() * len as f64) as usize;
    index.min(len - 1)
}

pub fn pick<'a, T>(rng: &mut dyn RandomStream, items: &'a [T]) -> &'a T {
    &items[pick_index(rng, items.len())]
}

pub fn chance(rng: &mut dyn RandomStream, probability: f64) -> bool {
    rng.next() < probability
}

pub fn int_in_range(rng: &mut dyn RandomStream, low: u32, high: u32) -> u32 {
    assert!(low <= high, "int_in_range: low must be <= high");
    let span = (high - low) as usize + 1;
    low + pick_index(rng, span) as u32
}

/// Picks `count` distinct elements with a partial Fisher-Yates shuffle.
/// Consumes exactly `min(count, items.len())` draws and keeps pick order.
pub fn sample_distinct<T: Clone>(rng: &mut dyn RandomStream, items: &[T], count: usize) -> Vec<T> {
    let mut pool: Vec<T> = items.to_vec();
    let take = count.min(pool.len());
    let mut picked = Vec::with_capacity(take);
    for _ in 0..take {
        let index = pick_index(rng, pool.len());
        picked.push(pool.swap_remove(index));
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_repeat() {
        let mut a = SeededStream::new(7);
        let mut b = SeededStream::new(7);
        let left: Vec<f64> = (0..32).map(|_| a.next()).collect();
        let right: Vec<f64> = (0..32).map(|_| b.next()).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|value| (0.0..1.0).contains(value)));
    }

    #[test]
    fn description_seed_ignores_case_and_padding() {
        assert_eq!(description_seed("Smooth Jazz "), description_seed("smooth jazz"));
        assert_ne!(description_seed("smooth jazz"), description_seed("smooth rock"));
    }

    #[test]
    fn pick_index_stays_in_bounds_at_the_top_edge() {
        let mut rng = ScriptedStream::new(vec![0.999_999_999]);
        assert_eq!(pick_index(&mut rng, 3), 2);
        let mut rng = ScriptedStream::new(vec![0.0]);
        assert_eq!(pick_index(&mut rng, 3), 0);
    }

    #[test]
    #[should_panic(expected = "empty candidate set")]
    fn pick_index_rejects_empty_sets() {
        let mut rng = ScriptedStream::new(vec![0.5]);
        pick_index(&mut rng, 0);
    }

    #[test]
    fn sample_distinct_consumes_one_draw_per_pick() {
        let mut rng = ScriptedStream::new(vec![0.0, 0.0, 0.0]);
        let picked = sample_distinct(&mut rng, &["a", "b", "c", "d"], 2);
        assert_eq!(picked, vec!["a", "d"]);
        assert_eq!(rng.draws(), 2);

        let mut rng = ScriptedStream::new(vec![0.5]);
        let picked = sample_distinct(&mut rng, &["a", "b"], 5);
        assert_eq!(picked.len(), 2);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn int_in_range_is_inclusive() {
        let mut low = ScriptedStream::new(vec![0.0]);
        let mut high = ScriptedStream::new(vec![0.99999]);
        assert_eq!(int_in_range(&mut low, 80, 120), 80);
        assert_eq!(int_in_range(&mut high, 80, 120), 120);
        assert_eq!(int_in_range(&mut low, 5, 5), 5);
    }
}
