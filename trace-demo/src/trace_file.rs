//! Leitura do arquivo de acessos.
//!
//! O arquivo tem uma referência de página por linha: `I<número>` para acesso
//! de instrução e `D<número>` para acesso de dado (ex.: `I12`, `D7`). A
//! linha inteira, sem espaços nas pontas, vira o identificador da página --
//! o simulador não olha dentro dele. Linhas fora do formato geram um aviso
//! e são ignoradas; linhas em branco são puladas em silêncio.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

pub fn read_trace(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| {
        format!(
            "não foi possível abrir o arquivo de acessos {}",
            path.display()
        )
    })?;
    let reader = BufReader::new(file);

    let mut accesses = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("falha lendo {}", path.display()))?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if is_page_reference(line) {
            accesses.push(line.to_string());
        } else {
            warn!("Formato de linha inválido: {}", line);
        }
    }

    Ok(accesses)
}

/// `I` ou `D` seguido de ao menos um dígito.
fn is_page_reference(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(chars.next(), Some('I') | Some('D'))
        && chars.next().map_or(false, |c| c.is_ascii_digit())
}
