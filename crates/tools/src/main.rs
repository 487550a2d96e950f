mod ascii_map;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{
    GeneratedDungeon, GenerationEvent, GeneratorConfig, RoomType, generate_with_retries,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
    Summary,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Generator settings file (`.toml` or `.json`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    min_rooms: Option<usize>,

    #[arg(long)]
    max_rooms: Option<usize>,

    /// Fresh seeds to try when a pass cannot place the boss room
    #[arg(short, long, default_value_t = 3)]
    retries: u32,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
}

fn load_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(min_rooms) = args.min_rooms {
        config.min_rooms = min_rooms;
    }
    if let Some(max_rooms) = args.max_rooms {
        config.max_rooms = max_rooms;
    }
    config.validate().with_context(|| "Invalid generator settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let dungeon = generate_with_retries(&config, args.seed, args.retries.saturating_add(1))
        .with_context(|| format!("Dungeon generation failed for seed {}", args.seed))?;

    match args.format {
        OutputFormat::Json => {
            let document = serde_json::json!({
                "layout": dungeon.snapshot(),
                "report": dungeon.report(),
            });
            let json = serde_json::to_string_pretty(&document).context("Failed to encode layout")?;
            println!("{json}");
        }
        OutputFormat::Ascii => {
            println!("{}", ascii_map::render(dungeon.graph()));
            println!();
            print_summary(&dungeon);
        }
        OutputFormat::Summary => print_summary(&dungeon),
    }

    Ok(())
}

fn print_summary(dungeon: &GeneratedDungeon) {
    let graph = dungeon.graph();
    println!("Seed: {}", dungeon.seed());
    println!("Target rooms: {}", dungeon.report().target_rooms);
    println!("Rooms: {} ({} from expansion)", graph.len(), graph.layout_room_count());
    for room_type in RoomType::ALL {
        let count = graph.count_of(room_type);
        if count > 0 {
            println!("  {:<9} {count}", room_type.label());
        }
    }
    println!("Fingerprint: {:016x}", dungeon.fingerprint());
    for event in &dungeon.report().events {
        if !matches!(event, GenerationEvent::TargetChosen { .. }) {
            println!("Event: {event:?}");
        }
    }
}
