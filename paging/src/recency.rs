use std::hash::Hash;

use linked_hash_map::LinkedHashMap;

/// Conjunto ordenado das páginas residentes, da menos para a mais
/// recentemente usada. A ordem de inserção do `LinkedHashMap` é exatamente a
/// ordem de recência, então todas as operações são O(1).
///
/// Uso fora do contrato (inserir página já residente, tocar página ausente,
/// despejar com o conjunto vazio) é defeito de programação e derruba a
/// simulação com um assert, não vira `Result`.
#[derive(Debug)]
pub struct RecencyTracker<P: Eq + Hash> {
    order: LinkedHashMap<P, ()>,
}

impl<P: Eq + Hash> RecencyTracker<P> {
    pub fn new() -> Self {
        RecencyTracker {
            order: LinkedHashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RecencyTracker {
            order: LinkedHashMap::with_capacity(capacity),
        }
    }

    pub fn contains(&self, page: &P) -> bool {
        self.order.contains_key(page)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Move uma página residente para a ponta mais recente.
    pub fn touch(&mut self, page: &P) {
        assert!(
            self.order.get_refresh(page).is_some(),
            "touch em página não residente"
        );
    }

    /// Insere uma página nova na ponta mais recente.
    pub fn insert_most_recent(&mut self, page: P) {
        let previous = self.order.insert(page, ());
        assert!(previous.is_none(), "página inserida já estava residente");
    }

    /// Remove e devolve a página menos recentemente usada.
    pub fn evict_least_recent(&mut self) -> P {
        let (page, ()) = self
            .order
            .pop_front()
            .expect("despejo com o conjunto residente vazio");
        page
    }
}

impl<P: Eq + Hash> Default for RecencyTracker<P> {
    fn default() -> Self {
        Self::new()
    }
}
