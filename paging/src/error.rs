use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Uma memória sem frame algum não pode residir página nenhuma.
    #[error("número de frames deve ser ao menos 1 (recebido {0})")]
    InvalidFrameCount(usize),

    /// A fila de ocorrências futuras de uma página estava vazia no momento
    /// em que o cursor passou por uma ocorrência dela. Indica um defeito na
    /// construção ou no avanço do índice, nunca um erro de entrada.
    #[error("fila de ocorrências futuras vazia na posição {position} do trace")]
    MissingFutureOccurrence { position: usize },
}
