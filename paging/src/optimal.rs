use std::collections::HashSet;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::SimulationError;
use crate::future_index::FutureIndex;
use crate::result::SimulationResult;

/// Simula a política Ótima (Belady): na falta com a memória cheia, despeja a
/// página residente cuja próxima referência está mais longe no futuro, ou
/// que nunca mais será referenciada. Empates entre páginas "nunca mais"
/// são resolvidos pela ordem de chegada ao conjunto residente.
pub fn simulate_optimal<P: Eq + Hash + Clone>(
    trace: &[P],
    num_frames: usize,
) -> Result<SimulationResult<P>, SimulationError> {
    if num_frames == 0 {
        return Err(SimulationError::InvalidFrameCount(num_frames));
    }

    let mut index = FutureIndex::build(trace);
    // Vec em ordem de chegada para a varredura de despejo, HashSet para o
    // teste de residência em O(1).
    let mut order: Vec<&P> = Vec::with_capacity(num_frames);
    let mut resident: HashSet<&P> = HashSet::with_capacity(num_frames);
    let mut result = SimulationResult::new();

    for (i, page) in trace.iter().enumerate() {
        // A ocorrência atual sai da fila mesmo em caso de acerto: a fila só
        // guarda o futuro em relação ao cursor.
        index
            .advance_past(page)
            .ok_or(SimulationError::MissingFutureOccurrence { position: i })?;

        if resident.contains(page) {
            continue;
        }

        trace!("otimo: falta de página na posição {}", i);
        result.record_load(page);

        if order.len() == num_frames {
            let victim_idx = furthest_next_use(&order, &index);
            let victim = order.remove(victim_idx);
            resident.remove(victim);
        }

        order.push(page);
        resident.insert(page);
    }

    debug!(
        "otimo: {} faltas em {} acessos com {} frames",
        result.faults,
        trace.len(),
        num_frames
    );

    Ok(result)
}

/// Índice, dentro do conjunto residente, da página usada mais longe no
/// futuro. `None` de `next_use` vira `usize::MAX`, então "nunca mais" domina
/// qualquer posição real; a comparação estrita mantém a primeira página
/// encontrada em caso de empate.
fn furthest_next_use<P: Eq + Hash>(order: &[&P], index: &FutureIndex<P>) -> usize {
    let mut victim_idx = 0;
    let mut victim_next = 0;

    for (idx, page) in order.iter().enumerate() {
        let next = index.next_use(page).unwrap_or(usize::MAX);
        if idx == 0 || next > victim_next {
            victim_idx = idx;
            victim_next = next;
        }
    }

    victim_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faults(trace: &[&str], num_frames: usize) -> u64 {
        simulate_optimal(trace, num_frames).unwrap().faults
    }

    #[test]
    fn zero_frames_is_invalid() {
        assert_eq!(
            simulate_optimal(&["a"], 0),
            Err(SimulationError::InvalidFrameCount(0))
        );
    }

    #[test]
    fn empty_trace_has_no_faults() {
        let result = simulate_optimal::<&str>(&[], 3).unwrap();
        assert_eq!(result.faults, 0);
        assert_eq!(result.loads, 0);
        assert!(result.loads_per_page.is_empty());
    }

    #[test]
    fn cold_start_faults_once_per_distinct_page() {
        assert_eq!(faults(&["a", "b", "c", "a", "b", "c"], 3), 3);
    }

    #[test]
    fn single_page_single_frame() {
        let result = simulate_optimal(&["x", "x", "x", "x"], 1).unwrap();
        assert_eq!(result.faults, 1);
        assert_eq!(result.loads, 1);
        assert_eq!(result.loads_per_page[&"x"], 1);
    }

    #[test]
    fn evicts_page_used_furthest_in_future() {
        // Na falta de D (posição 5) os residentes são A@6, B@7, C@8: C cai.
        // Na falta de C (posição 8) ninguém tem uso futuro: cai A, a mais
        // antiga no conjunto. Total: 5 faltas.
        let trace = ["a", "b", "c", "a", "b", "d", "a", "b", "c", "d"];
        let result = simulate_optimal(&trace, 3).unwrap();

        assert_eq!(result.faults, 5);
        assert_eq!(result.loads, 5);
        assert_eq!(result.loads_per_page[&"a"], 1);
        assert_eq!(result.loads_per_page[&"b"], 1);
        assert_eq!(result.loads_per_page[&"c"], 2);
        assert_eq!(result.loads_per_page[&"d"], 1);
    }

    #[test]
    fn never_used_again_dominates_far_future_use() {
        // Com {a, b} residentes, "a" ainda será usada e "b" não: a falta de
        // "c" despeja "b" mesmo com o uso de "a" bem distante.
        let trace = ["a", "b", "c", "x", "y", "z", "a"];
        let result = simulate_optimal(&trace, 2).unwrap();

        // a, b, c, x, y, z faltam; o "a" final acerta só se "a" sobreviveu
        // à falta de "c".
        assert_eq!(result.loads_per_page[&"a"], 1);
    }
}
