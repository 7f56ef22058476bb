use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Índice de ocorrências futuras: para cada página do trace, a fila das
/// posições (em ordem crescente) em que ela aparece. As páginas são
/// emprestadas do próprio trace, então construir o índice não clona nada.
#[derive(Debug)]
pub struct FutureIndex<'t, P> {
    positions: HashMap<&'t P, VecDeque<usize>>,
}

impl<'t, P: Eq + Hash> FutureIndex<'t, P> {
    /// Varre o trace uma única vez, O(n).
    pub fn build(trace: &'t [P]) -> Self {
        let mut positions: HashMap<&P, VecDeque<usize>> = HashMap::new();

        for (i, page) in trace.iter().enumerate() {
            positions.entry(page).or_default().push_back(i);
        }

        FutureIndex { positions }
    }

    /// Consome a ocorrência na frente da fila da página, devolvendo a
    /// posição consumida. Deve ser chamada exatamente uma vez por posição do
    /// trace, na ordem do trace; depois disso a fila contém só posições
    /// estritamente futuras. `None` significa que a fila estava vazia, o que
    /// só acontece se o índice foi construído ou avançado errado.
    pub fn advance_past(&mut self, page: &P) -> Option<usize> {
        self.positions.get_mut(page).and_then(|queue| queue.pop_front())
    }

    /// Próxima posição em que a página será referenciada, ou `None` se ela
    /// nunca mais aparece. O(1).
    pub fn next_use(&self, page: &P) -> Option<usize> {
        self.positions
            .get(page)
            .and_then(|queue| queue.front())
            .copied()
    }
}
