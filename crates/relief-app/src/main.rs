//! Command-line terrain generator.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p relief-app -- --grid-size 128 --amplitude 30`.
//! Add `--sweep 120` to replay a two-second offset drag through the debouncer.

use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use relief_app::{AppError, RegenGate, build_terrain, noise_params, sweep_offset};
use relief_config::{CliArgs, Config, default_config_dir};
use relief_mesh::TerrainMesh;
use tracing::{error, info};

/// Offset distance covered by `--sweep`, in noise-space units.
const SWEEP_DISTANCE: f32 = 25.0;

#[derive(Parser, Debug)]
#[command(name = "relief", about = "Procedural terrain mesh generator")]
struct AppArgs {
    #[command(flatten)]
    cli: CliArgs,

    /// Simulate dragging the offset slider for this many frames after the
    /// initial generation.
    #[arg(long)]
    sweep: Option<u32>,

    /// Write the effective configuration back to `config.ron`.
    #[arg(long)]
    save_config: bool,
}

fn main() -> ExitCode {
    let args = AppArgs::parse();

    let config_dir = match args.cli.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args.cli);

    relief_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    match run(&config, &config_dir, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, config_dir: &Path, args: &AppArgs) -> Result<(), AppError> {
    if args.save_config {
        config.save(config_dir)?;
        info!("Saved configuration to {}", config_dir.display());
    }

    let mut terrain = build_terrain(config)?;
    let params = noise_params(&config.noise);

    let started = Instant::now();
    let mesh = terrain.regenerate(&params)?;
    log_summary(mesh, started.elapsed());

    if let Some(frames) = args.sweep.filter(|&f| f > 0) {
        let mut gate = RegenGate::new(Duration::from_millis(config.editor.regen_interval_ms));
        let started = Instant::now();
        let report = sweep_offset(
            &mut terrain,
            &mut gate,
            params,
            SWEEP_DISTANCE,
            frames,
            Instant::now(),
        )?;
        info!(
            frames = report.frames,
            regenerations = report.regenerations,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Offset sweep finished"
        );
        if let Some(mesh) = terrain.mesh() {
            log_summary(mesh, started.elapsed());
        }
    }

    Ok(())
}

fn log_summary(mesh: &TerrainMesh, elapsed: Duration) {
    let stats = &mesh.stats;
    info!(
        grid_size = mesh.grid.grid_size,
        vertices = stats.vertex_count,
        triangles = stats.triangle_count,
        stride_floats = mesh.vertices.stride_floats(),
        buffer_kib = mesh.buffer_bytes() / 1024,
        min_height = stats.min_height,
        max_height = stats.max_height,
        mirrored_tangents = stats.mirrored_tangents,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Terrain mesh ready"
    );
    if stats.fallback_normals > 0 || stats.fallback_tangents > 0 {
        info!(
            fallback_normals = stats.fallback_normals,
            fallback_tangents = stats.fallback_tangents,
            degenerate_uv_faces = stats.degenerate_uv_faces,
            "Degenerate vertices recovered"
        );
    }
}
