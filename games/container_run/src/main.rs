use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use wigglebox::{
    engine::{set_collision_debug, set_debug_text},
    MotionPreset, PhysicsStats, PhysicsWorld, SimulationConfig,
};

/// Run the wiggling container simulation headless and report statistics.
#[derive(Parser, Debug)]
struct Args {
    /// YAML scenario, defaults to the built-in configuration
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Container motion: 0 static, 1 vertical, 2 diagonal, 3 anti-diagonal
    #[arg(short, long)]
    preset: Option<u8>,

    #[arg(long)]
    seed: Option<u64>,

    /// Print statistics every N frames, 0 for only the summary
    #[arg(short, long, default_value_t = 60)]
    report_every: u64,

    /// Print the final world snapshot as YAML
    #[arg(long)]
    dump: bool,

    #[arg(long)]
    debug: bool,

    #[arg(long)]
    collision_debug: bool,
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.scenario {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open scenario {}", path.display()))?;
            SimulationConfig::from_yaml_reader(BufReader::new(file))
                .with_context(|| format!("failed to load scenario {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(index) = args.preset {
        config.motion_preset = MotionPreset::try_from(index)?;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    Ok(config)
}

fn print_stats(stats: &PhysicsStats) {
    println!(
        "frame {:>6} | bodies {:>4} | inside {:>4} | escaped {:>3} | kinetic {:>14.1} | overlap {:>8.2}",
        stats.frame,
        stats.total_bodies,
        stats.contained_bodies,
        stats.escaped_bodies,
        stats.total_kinetic_energy,
        stats.max_overlap,
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    set_debug_text(args.debug || args.collision_debug);
    set_collision_debug(args.collision_debug);

    let config = load_config(&args)?;
    let mut world = PhysicsWorld::new(&config)?;

    println!(
        "Running {} frames: {} bodies, container radius {}, preset {:?}",
        args.frames,
        config.body_count,
        config.boundary_radius,
        config.motion_preset
    );

    for _ in 0..args.frames {
        world.step();
        if args.report_every > 0 && world.frame_count() % args.report_every == 0 {
            print_stats(&world.stats());
        }
    }

    println!("--- summary ---");
    print_stats(&world.stats());

    if args.dump {
        print!("{}", serde_yaml::to_string(&world.snapshot())?);
    }

    Ok(())
}
