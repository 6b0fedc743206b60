//! Replays recorded landmark frames through the gesture engine.
//!
//! Frames are read as JSON lines from a file or stdin on a blocking thread,
//! which stands in for the capture loop. The async side polls the engine on a
//! fixed interval and prints each gesture as `{"gesture":"<token>"}`.

use std::io;

use clap::Parser;
use tokio::io::{AsyncWriteExt, Stdout};
use tracing::{error, info};

use pinch_runtime::{
    init_tracing, ConfigError, EngineConfig, FrameReader, GestureEngine, LogFormat, ReplayArgs,
    ReplayError, SharedEngine, TracingOverlay,
};

#[tokio::main]
async fn main() {
    if let Err(err) = init_tracing(LogFormat::from_env()) {
        eprintln!("logging unavailable: {err}");
    }

    let args = ReplayArgs::parse();

    if let Err(err) = run(args).await {
        error!(%err, "replay failed");
        std::process::exit(1);
    }
}

fn load_config() -> Result<EngineConfig, ConfigError> {
    match std::env::var("PINCH_CONFIG") {
        Ok(path) => {
            info!(%path, "loading config");
            EngineConfig::from_path(path)
        }
        Err(_) => EngineConfig::from_env(),
    }
}

async fn run(args: ReplayArgs) -> Result<(), ReplayError> {
    let config = load_config()?;
    info!(?config, "engine config");

    let mut engine = GestureEngine::with_config(config).map_err(ConfigError::from)?;
    if args.overlay {
        engine = engine.with_overlay(Box::new(TracingOverlay));
    }
    let shared = SharedEngine::new(engine);

    let input = args.open_input()?;
    let driver = shared.clone();
    let frame_interval = args.frame_interval;
    let mut capture = tokio::task::spawn_blocking(move || -> Result<u64, ReplayError> {
        let mut count = 0;
        for frame in FrameReader::new(input) {
            driver.process_frame(&frame?);
            count += 1;
            if !frame_interval.is_zero() {
                std::thread::sleep(frame_interval);
            }
        }
        Ok(count)
    });

    let mut stdout = tokio::io::stdout();
    let mut ticker = tokio::time::interval(args.poll_interval);

    let frames = loop {
        tokio::select! {
            _ = ticker.tick() => {
                emit(&shared, &mut stdout, args.all).await?;
            }
            joined = &mut capture => {
                break joined.map_err(io::Error::from)??;
            }
        }
    };

    // whatever the last frames released
    emit(&shared, &mut stdout, args.all).await?;

    let stats = shared.stats();
    info!(
        frames,
        driven = stats.driven_frames,
        invalid = stats.invalid_frames,
        emitted = stats.events_emitted,
        polled = stats.events_polled,
        "replay finished"
    );
    Ok(())
}

async fn emit(shared: &SharedEngine, out: &mut Stdout, all: bool) -> Result<(), ReplayError> {
    let message = shared.poll_message();
    if message.gesture.is_none() && !all {
        return Ok(());
    }
    let mut line = serde_json::to_vec(&message).map_err(io::Error::from)?;
    line.push(b'\n');
    out.write_all(&line).await?;
    out.flush().await?;
    Ok(())
}
