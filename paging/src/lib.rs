//! Simulação de políticas de substituição de páginas sobre um trace de
//! referências: a política Ótima (Belady, com conhecimento do futuro) e a
//! LRU (menos recentemente usada). Biblioteca pura, sem I/O.

pub mod error;
pub mod future_index;
pub mod lru;
pub mod optimal;
pub mod recency;
pub mod result;
