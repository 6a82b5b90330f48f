//! Particle album: step through geotagged photos on a globe with hand gestures.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use particle_album::{
    app::AlbumApp, config::Config, landmarks::ReplaySource, photo::load_photo_list, scene::HeadlessScene,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Photo list as returned by the album backend (JSON array)
    #[arg(short, long)]
    photos: Option<String>,

    /// Recorded hand landmark trace to replay (YAML)
    #[arg(short, long)]
    gestures: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Override the target framerate
    #[arg(long)]
    fps: Option<u32>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Particle Album");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    if let Some(fps) = args.fps {
        config.render.target_fps = fps;
    }
    if args.frames.is_some() {
        config.render.max_frames = args.frames;
    }

    let source = match &args.gestures {
        Some(path) => ReplaySource::from_file(path).with_context(|| format!("reading gesture trace {path}"))?,
        None => ReplaySource::new(Vec::new())?,
    };

    let mut app = AlbumApp::new(config, Box::new(source), Box::new(HeadlessScene::new()))?;

    if let Some(path) = &args.photos {
        let photos = load_photo_list(path).with_context(|| format!("reading photo list {path}"))?;
        app.on_collection_changed(photos);
    }
    info!("{}", app.info_panel().status);

    if args.gestures.is_some() {
        if let Err(e) = app.start_camera() {
            warn!("Gesture recognition unavailable: {}", e);
        }
    }

    app.run()?;

    match app.current_photo() {
        Some(photo) => info!("Final photo: {} ({})", photo.title, app.info_panel().status),
        None => info!("{}", app.info_panel().status),
    }

    Ok(())
}
