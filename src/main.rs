use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ecosphere::{
    scenario::ScenarioLoader,
    scheduler::FrameLoop,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Headless ecosystem simulation runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/baseline.yaml")]
    scenario: PathBuf,

    /// Override frame budget (uses scenario default when omitted)
    #[arg(long)]
    frames: Option<u64>,

    /// Override the cosmetic RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override frames per second
    #[arg(long)]
    fps: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let mut scenario = loader.load(&cli.scenario)?;
    if let Some(seed) = cli.seed {
        scenario.seed = seed;
    }
    if let Some(fps) = cli.fps {
        scenario.frame_rate = fps;
    }
    let frames = scenario.frames(cli.frames);

    let mut session = scenario.build_session();
    let (frame_loop, stop) = FrameLoop::new(scenario.frame_rate);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop.stop();
        }
    });

    tracing::info!(
        scenario = %scenario.name,
        frames,
        fps = scenario.frame_rate,
        "starting session"
    );
    let driven = frame_loop.run(&mut session, Some(frames), None).await;
    let summary = session.finish();
    tracing::info!(frames = driven, "session complete");
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
