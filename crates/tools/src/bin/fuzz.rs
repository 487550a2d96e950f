use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{GeneratorConfig, RoomType, generate_dungeon};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
    /// Chance of closing loops between adjacent rooms
    #[arg(long, default_value_t = 0.0)]
    loop_chance: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting layout fuzz on seed {} for {} runs...", args.seed, args.runs);
    let config = GeneratorConfig { loop_chance: args.loop_chance, ..GeneratorConfig::default() };
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut exhausted = 0_u32;
    let mut secrets = 0_u32;
    for run in 0..args.runs {
        let map_seed = rng.next_u64();
        let dungeon = match generate_dungeon(&config, map_seed) {
            Ok(dungeon) => dungeon,
            Err(err) => bail!("run {run}: generation failed for map_seed {map_seed}: {err}"),
        };
        let graph = dungeon.graph();

        if let Err(violation) = graph.check_invariants() {
            bail!("run {run}: invariant failed for map_seed {map_seed}: {violation}");
        }
        if graph.count_of(RoomType::Boss) != 1 {
            bail!("run {run}: expected one boss room for map_seed {map_seed}");
        }
        if graph.len() > config.max_rooms {
            bail!("run {run}: too many rooms for map_seed {map_seed}");
        }

        if dungeon.report().was_exhausted() {
            exhausted += 1;
        }
        if dungeon.report().secret_grafted() {
            secrets += 1;
        }
    }

    println!("Fuzzing completed successfully.");
    println!("Short layouts: {exhausted}, secret rooms: {secrets}");
    Ok(())
}
