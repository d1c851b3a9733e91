use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::demo::{DEFAULT_CAMERA, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use glint_core::{default_scene, load_scene, Scene, SceneFile};
use glint_renderer::{
    render, render_parallel, save_png, Camera, DegeneratePolicy, RenderConfig, Vec3,
};

mod cli;

use cli::Args;

/// Everything needed for one render, after merging CLI flags over the scene file.
#[derive(Debug)]
struct Settings {
    scene: Scene,
    width: u32,
    height: u32,
    camera: Vec3,
    degenerate: DegeneratePolicy,
}

impl Settings {
    /// CLI flags win over scene file values, which win over the defaults.
    fn resolve(args: &Args, file: Option<SceneFile>) -> Self {
        let (scene, width, height, camera) = match file {
            Some(file) => (file.scene, file.width, file.height, file.camera),
            None => (default_scene(), None, None, None),
        };

        Self {
            scene,
            width: args.width.or(width).unwrap_or(DEFAULT_WIDTH),
            height: args.height.or(height).unwrap_or(DEFAULT_HEIGHT),
            camera: args.camera.or(camera).unwrap_or(DEFAULT_CAMERA),
            degenerate: args.degenerate.map(DegeneratePolicy::from).unwrap_or_default(),
        }
    }
}

/// Log every row at debug level and each crossed tenth at info level.
fn report_progress(done: usize, total: usize) {
    log::debug!("progress: {}/{}", done, total);
    if done * 10 / total != (done - 1) * 10 / total {
        log::info!("progress: {}/{} rows ({}%)", done, total, done * 100 / total);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Glint");

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure render thread pool")?;
    }

    let file = match &args.scene {
        Some(path) => Some(
            load_scene(path).with_context(|| format!("Failed to load scene {}", path.display()))?,
        ),
        None => {
            log::info!("No scene file given, using the built-in demo scene");
            None
        }
    };
    let settings = Settings::resolve(&args, file);

    let camera = Camera::new()
        .with_resolution(settings.width, settings.height)
        .with_position(settings.camera);

    let config = RenderConfig {
        degenerate: settings.degenerate,
    };

    log::info!(
        "Rendering '{}' ({} spheres) at {}x{}, camera {}",
        settings.scene.name,
        settings.scene.sphere_count(),
        settings.width,
        settings.height,
        settings.camera
    );

    let start = Instant::now();
    let frame = if args.sequential {
        render(&camera, &settings.scene, &config, &report_progress)
    } else {
        render_parallel(&camera, &settings.scene, &config, &report_progress)
    }
    .context("Render failed")?;

    log::info!(
        "Rendered in {:?}: {} pixels hit, {} in shadow",
        start.elapsed(),
        frame.stats.hit_pixels,
        frame.stats.shadowed_pixels
    );

    save_png(&frame.image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
