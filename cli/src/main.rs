use anyhow::{anyhow, Context, Result};
use cadenza::config::AppConfig;
use cadenza::remix::{self, FieldName};
use cadenza::types::{BpmStyle, EnergyLevel, PromptLayout, ThematicContext};
use cadenza::{
    GenreCatalog, LogTrace, PromptGenerator, PromptRequest, SeededStream, TraceEvent, TraceSink,
};
use clap::{Args, Parser, Subcommand};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "cadenza", version, about = "Deterministic prompts for generative music services")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a prompt from a free-text description.
    Generate(GenerateArgs),
    /// Rewrite one field of a previously generated prompt.
    Remix(RemixArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[arg(required = true)]
    description: Vec<String>,
    /// Explicit genre list, e.g. "jazz rock".
    #[arg(long)]
    genre: Option<String>,
    #[arg(long)]
    layout: Option<PromptLayout>,
    #[arg(long)]
    seed: Option<u64>,
    /// Seed from the operating system instead of the description.
    #[arg(long, conflicts_with = "seed")]
    random: bool,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    creativity: Option<u8>,
    #[arg(long)]
    energy: Option<EnergyLevel>,
    #[arg(long)]
    bpm_style: Option<BpmStyle>,
    /// JSON file holding pre-resolved thematic context.
    #[arg(long)]
    thematic: Option<PathBuf>,
    #[arg(long)]
    max_chars: Option<usize>,
    /// Print every decision as JSON lines on stderr.
    #[arg(long)]
    trace: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct RemixArgs {
    field: FieldName,
    /// Prompt file to rewrite; stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Genre to switch to (genre remixes only).
    #[arg(long)]
    target: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    trace: bool,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    setup_tracing()?;
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Command::Generate(args) => run_generate(args, &config),
        Command::Remix(args) => run_remix(args, &config),
    }
}

fn run_generate(args: GenerateArgs, config: &AppConfig) -> Result<()> {
    let description = args.description.join(" ");
    let thematic = args.thematic.as_deref().map(read_thematic).transpose()?;
    let request = PromptRequest {
        description: description.clone(),
        genre_override: args.genre,
        layout: args.layout.unwrap_or(config.layout()),
        creativity_level: args.creativity.unwrap_or(config.creativity_level()),
        thematic,
        energy: args.energy,
        bpm_style: args.bpm_style.unwrap_or(config.bpm_style()),
        max_chars: args.max_chars.or(config.max_chars()),
    };

    let mut rng = match (args.random, args.seed.or(config.seed())) {
        (true, _) => SeededStream::from_entropy(),
        (false, Some(seed)) => SeededStream::new(seed),
        (false, None) => SeededStream::from_description(&description),
    };
    info!(seed = rng.seed(), "generating prompt");

    let generator = PromptGenerator::new(GenreCatalog::builtin());
    let mut events: Vec<TraceEvent> = Vec::new();
    let mut log = LogTrace;
    let sink: &mut dyn TraceSink = if args.trace { &mut events } else { &mut log };
    let prompt = generator.generate(&request, &mut rng, sink);
    emit_trace(&events)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prompt).context("failed to encode prompt")?);
    } else {
        println!("{}", prompt.text);
    }
    Ok(())
}

fn run_remix(args: RemixArgs, config: &AppConfig) -> Result<()> {
    let text = match args.input.as_deref() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read prompt from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read prompt from stdin")?;
            buffer
        }
    };
    if text.trim().is_empty() {
        return Err(anyhow!("no prompt text to remix"));
    }

    let mut rng = match args.seed.or(config.seed()) {
        Some(seed) => SeededStream::new(seed),
        None => SeededStream::from_entropy(),
    };
    info!(seed = rng.seed(), field = %args.field, "remixing prompt");

    let catalog = GenreCatalog::builtin();
    let mut events: Vec<TraceEvent> = Vec::new();
    let mut log = LogTrace;
    let sink: &mut dyn TraceSink = if args.trace { &mut events } else { &mut log };
    let outcome = remix::remix(&catalog, args.field, &text, args.target.as_deref(), &mut rng, sink);
    emit_trace(&events)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome).context("failed to encode remix")?);
    } else {
        print!("{}", outcome.text);
        if !outcome.text.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn read_thematic(path: &Path) -> Result<ThematicContext> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read thematic context at {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

fn emit_trace(events: &[TraceEvent]) -> Result<()> {
    for event in events {
        eprintln!("{}", serde_json::to_string(event).context("failed to encode trace event")?);
    }
    Ok(())
}

fn setup_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .map_err(|err: Box<dyn std::error::Error + Send + Sync>| {
            anyhow!("failed to initialise tracing: {err}")
        })?;
    Ok(())
}
