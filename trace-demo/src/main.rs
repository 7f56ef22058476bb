mod trace_file;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use paging::error::SimulationError;
use paging::lru::simulate_lru;
use paging::optimal::simulate_optimal;
use paging::result::SimulationResult;

/// Compara as políticas Ótima e LRU de substituição de páginas sobre um
/// arquivo de acessos, para um número fixo de frames ou para uma varredura
/// de tamanhos de memória física.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Arquivo de acessos, uma referência por linha (ex.: I12, D7)
    trace: PathBuf,

    /// Simula com um número fixo de frames em vez da varredura de tamanhos
    #[arg(short = 'f', long, conflicts_with = "memory")]
    frames: Option<usize>,

    /// Tamanho de memória física a testar (ex.: 128MB); pode ser repetido
    #[arg(short = 'm', long = "memory")]
    memory: Vec<String>,

    /// Tamanho da página em bytes
    #[arg(long, default_value_t = 4096)]
    page_size: u64,

    /// Sempre lista o número de carregamentos, sem perguntar
    #[arg(long)]
    loads: bool,

    /// Nunca pergunta nada (modo não interativo)
    #[arg(short, long)]
    quiet: bool,
}

/// Varredura padrão, do maior para o menor, como no estudo original.
const DEFAULT_MEMORY_SIZES: [&str; 4] = ["1GB", "128MB", "16MB", "8KB"];

struct Scenario {
    label: Option<String>,
    num_frames: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    println!("Lendo acessos do arquivo: {}", cli.trace.display());
    let trace = trace_file::read_trace(&cli.trace)?;
    print_preview(&trace);

    for scenario in build_scenarios(&cli)? {
        if let Some(label) = &scenario.label {
            println!();
            println!(
                "Teste com {} de memória ({} frames)",
                label, scenario.num_frames
            );
        }
        run_scenario(&trace, scenario.num_frames, &cli)?;
    }

    Ok(())
}

fn build_scenarios(cli: &Cli) -> Result<Vec<Scenario>> {
    if let Some(num_frames) = cli.frames {
        return Ok(vec![Scenario {
            label: None,
            num_frames,
        }]);
    }

    if cli.page_size == 0 {
        bail!("tamanho de página deve ser ao menos 1 byte");
    }

    let sizes: Vec<String> = if cli.memory.is_empty() {
        DEFAULT_MEMORY_SIZES.iter().map(|s| s.to_string()).collect()
    } else {
        cli.memory.clone()
    };

    sizes
        .into_iter()
        .map(|size| {
            let bytes = parse_memory_size(&size)?;
            Ok(Scenario {
                num_frames: (bytes / cli.page_size) as usize,
                label: Some(size),
            })
        })
        .collect()
}

/// Aceita bytes puros ("4096") ou os sufixos binários KB, MB e GB.
fn parse_memory_size(text: &str) -> Result<u64> {
    let upper = text.trim().to_ascii_uppercase();
    let (number, multiplier) = if let Some(prefix) = upper.strip_suffix("GB") {
        (prefix, 1u64 << 30)
    } else if let Some(prefix) = upper.strip_suffix("MB") {
        (prefix, 1u64 << 20)
    } else if let Some(prefix) = upper.strip_suffix("KB") {
        (prefix, 1u64 << 10)
    } else {
        (upper.as_str(), 1)
    };

    let value: u64 = number
        .trim()
        .parse()
        .with_context(|| format!("tamanho de memória inválido: {}", text))?;

    Ok(value * multiplier)
}

fn print_preview(trace: &[String]) {
    let n = trace.len();
    if n > 5 {
        println!(
            "Acessos lidos: {:?} ... {:?} (total {})",
            &trace[..5],
            &trace[n - 5..],
            n
        );
    } else {
        println!("Acessos lidos: {:?} (total {})", trace, n);
    }
}

type Policy = fn(&[String], usize) -> Result<SimulationResult<String>, SimulationError>;

fn run_scenario(trace: &[String], num_frames: usize, cli: &Cli) -> Result<()> {
    println!("Calculando faltas de página com {} frames...", num_frames);

    let policies: [(&str, Policy); 2] = [
        ("Ótimo", simulate_optimal::<String>),
        ("LRU", simulate_lru::<String>),
    ];

    let mut results = Vec::with_capacity(policies.len());
    for (name, simulate) in policies {
        let start = Instant::now();
        let result = simulate(trace, num_frames)
            .with_context(|| format!("simulação {} com {} frames falhou", name, num_frames))?;
        results.push((name, result, start.elapsed()));
    }

    for (name, result, _) in &results {
        println!("Faltas de página ({}): {}", name, result.faults);
    }

    let optimal_faults = results[0].1.faults;
    let lru_faults = results[1].1.faults;
    let efficiency = if lru_faults > 0 {
        optimal_faults as f64 / lru_faults as f64
    } else {
        f64::INFINITY
    };
    println!("Eficiência do LRU em relação ao Ótimo: {:.2}", efficiency);

    for (name, _, elapsed) in &results {
        println!(
            "Tempo de execução ({}): {:.2} segundos",
            name,
            elapsed.as_secs_f64()
        );
    }

    if cli.loads || (!cli.quiet && ask_loads()) {
        for (name, result, _) in &results {
            println!("Carregamentos ({}): {}", name, result.loads);
            println!(
                "Páginas distintas carregadas ({}): {}",
                name,
                result.distinct_pages()
            );
            debug!("carregamentos por página ({}): {:?}", name, result.loads_per_page);
        }
    }

    Ok(())
}

fn ask_loads() -> bool {
    print!("Deseja listar o número de carregamentos (s/n)? ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        // EOF ou erro de leitura contam como "não"
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "s" | "sim"),
    }
}
