use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skerry_common::IslandConfig;
use skerry_kernel::{Simulation, animate};
use skerry_render::{DebugTextRenderer, RenderView, Renderer};
use skerry_scene::{IslandAssets, build_island};

#[derive(Parser)]
#[command(name = "skerry-cli", about = "CLI host for the island simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the simulation headless and print the final frame
    Run {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Fixed delta per tick, seconds
        #[arg(short, long, default_value = "0.016")]
        delta: f32,
        /// Rock-placement seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Hold the forward key for the whole run
        #[arg(long)]
        forward: bool,
    },
    /// Print animator poses at a given elapsed time
    Pose {
        /// Elapsed time in seconds
        #[arg(short, long, default_value = "0.0")]
        time: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("skerry-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", skerry_common::crate_info());
            println!("collision: {}", skerry_collision::crate_info());
            println!("input: {}", skerry_input::crate_info());
            println!("assets: {}", skerry_assets::crate_info());
            println!("scene: {}", skerry_scene::crate_info());
            println!("kernel: {}", skerry_kernel::crate_info());
            println!("render: {}", skerry_render::crate_info());
        }
        Commands::Run {
            ticks,
            delta,
            seed,
            forward,
        } => {
            println!("Headless run: ticks={ticks}, delta={delta}, seed={seed}");

            let scene = build_island(IslandConfig::default(), seed, &IslandAssets::new());
            let mut sim = Simulation::new(scene);
            sim.set_captured(true);
            if forward {
                sim.input_mut().key_down("KeyW");
            }

            let mut frame = sim.tick_with(delta);
            for _ in 1..ticks {
                frame = sim.tick_with(delta);
            }

            let view = RenderView::first_person(&frame);
            print!(
                "{}",
                DebugTextRenderer::new().render(&frame, &sim.scene().graph, &view)
            );
        }
        Commands::Pose { time } => {
            let cfg = IslandConfig::default();
            let pose = animate::boat_pose(&cfg, cfg.water_level - 0.1, time);
            println!("t={time}");
            println!(
                "boat: pos=({:.3}, {:.3}, {:.3}) yaw={:.3} roll={:.4} pitch={:.4}",
                pose.position.x, pose.position.y, pose.position.z, pose.yaw, pose.roll, pose.pitch
            );
            println!(
                "wave@origin: {:.4}",
                animate::wave_height(0.0, 0.0, time)
            );
            println!(
                "lamp: {:.2}",
                animate::lamp_intensity(skerry_scene::Lamp::BASE_INTENSITY, time)
            );
        }
    }

    Ok(())
}
