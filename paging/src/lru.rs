use std::hash::Hash;

use log::{debug, trace};

use crate::error::SimulationError;
use crate::recency::RecencyTracker;
use crate::result::SimulationResult;

/// Simula a política LRU: na falta com a memória cheia, despeja a página há
/// mais tempo sem referência.
pub fn simulate_lru<P: Eq + Hash + Clone>(
    trace: &[P],
    num_frames: usize,
) -> Result<SimulationResult<P>, SimulationError> {
    if num_frames == 0 {
        return Err(SimulationError::InvalidFrameCount(num_frames));
    }

    let mut tracker: RecencyTracker<&P> = RecencyTracker::with_capacity(num_frames);
    let mut result = SimulationResult::new();

    for (i, page) in trace.iter().enumerate() {
        if tracker.contains(&page) {
            tracker.touch(&page);
            continue;
        }

        trace!("lru: falta de página na posição {}", i);
        result.record_load(page);

        if tracker.len() == num_frames {
            tracker.evict_least_recent();
        }
        tracker.insert_most_recent(page);
    }

    debug!(
        "lru: {} faltas em {} acessos com {} frames",
        result.faults,
        trace.len(),
        num_frames
    );

    Ok(result)
}
