use chess_core::{Board, Color, PieceKind, Square};
use clap::{Parser, Subcommand};
use movegen_cli::config::ScenarioFile;
use movegen_cli::report::{render_board, write_json, Summary};
use movegen_cli::scenario::{parse_placement, Outcome, Scenario};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "movegen")]
#[command(about = "Piece move generation harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the squares one piece can reach
    Show {
        /// Piece kind (king, queen, rook, bishop, knight, pawn or a letter)
        piece: PieceKind,
        /// Square the piece stands on, e.g. d4
        square: Square,
        /// Side the piece belongs to
        #[arg(short, long, default_value = "white")]
        color: Color,
        /// Other pieces, e.g. --with Pd6 --with nf5
        #[arg(short, long)]
        with: Vec<String>,
    },
    /// Run scenarios and exit non-zero if any fails
    Check {
        /// Scenario file (defaults to scenarios.toml, then the built-in set)
        #[arg(short, long)]
        scenarios: Option<PathBuf>,
        /// Run only the named scenario
        #[arg(long)]
        only: Option<String>,
        /// Also write a JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// List scenario names
    List {
        /// Scenario file (defaults to scenarios.toml, then the built-in set)
        #[arg(short, long)]
        scenarios: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            piece,
            square,
            color,
            with,
        } => show(piece, square, color, &with),
        Commands::Check {
            scenarios,
            only,
            json,
        } => check(scenarios, only, json),
        Commands::List { scenarios } => {
            let file = ScenarioFile::load(scenarios.as_deref())?;
            for scenario in &file.scenarios {
                println!("{}", scenario.name);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show(
    kind: PieceKind,
    origin: Square,
    color: Color,
    with: &[String],
) -> anyhow::Result<ExitCode> {
    let mut board = Board::empty();
    for placement in with {
        let (sq, c, k) = parse_placement(placement)
            .ok_or_else(|| anyhow::anyhow!("invalid placement '{}'", placement))?;
        board = board.with_piece(sq, c, k)?;
    }
    board = board.with_piece(origin, color, kind)?;

    let moves = chess_engine::generate(&board, origin, color, kind)?;
    tracing::debug!("{} {} on {}: {:?}", color, kind, origin, moves);

    print!("{}", render_board(&board, &moves));
    println!();
    println!(
        "{} {} on {}: {} moves ({} captures)",
        color,
        kind,
        origin,
        moves.len(),
        moves.captures().count()
    );
    for m in &moves {
        println!("  {}", m);
    }
    Ok(ExitCode::SUCCESS)
}

fn check(
    path: Option<PathBuf>,
    only: Option<String>,
    json: Option<PathBuf>,
) -> anyhow::Result<ExitCode> {
    let file = ScenarioFile::load(path.as_deref())?;
    let configs = match &only {
        Some(name) => vec![file.get(name)?.clone()],
        None => file.scenarios,
    };
    tracing::info!("Running {} scenarios", configs.len());

    let mut outcomes: Vec<Outcome> = Vec::with_capacity(configs.len());
    for config in &configs {
        let outcome = Scenario::from_config(config)?.run();
        if outcome.passed {
            tracing::debug!("{}: ok", outcome.name);
            println!("ok    {}", outcome.name);
        } else {
            tracing::warn!("{}: {} failures", outcome.name, outcome.failures.len());
            println!("FAIL  {}", outcome.name);
            for failure in &outcome.failures {
                println!("      {}", failure);
            }
        }
        outcomes.push(outcome);
    }

    let summary = Summary::of(&outcomes);
    println!();
    println!("{} passed, {} failed", summary.passed, summary.failed);

    if let Some(json_path) = json {
        if let Err(e) = write_json(&json_path, &outcomes) {
            tracing::warn!("Failed to write JSON report {:?}: {}", json_path, e);
        }
    }

    if summary.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
