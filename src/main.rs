//! Noise Explorer - headless frontend
//!
//! Plays the part of the interactive window: feeds parameters and scripted
//! pan gestures to the explorer, then draws the last frame to a PNG.

use clap::Parser;
use log::info;

use noise_explorer::bench::format_micros;
use noise_explorer::cli::Args;
use noise_explorer::explorer::Explorer;
use noise_explorer::fractal::FractalSampler;
use noise_explorer::grid::GridRenderer;
use noise_explorer::params::CanvasLayout;
use noise_explorer::raster;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let render_config = args.render_config();

    println!("Noise Explorer - fractal simplex noise");

    let sampler =
        FractalSampler::new(args.build_kernel()).with_normalization(args.normalization());
    let renderer = GridRenderer::new(sampler, CanvasLayout::default());
    let mut explorer = Explorer::new(renderer).with_parallel(args.parallel);
    explorer.set_parameters(args.parameters());

    for label in explorer.params().labels() {
        println!("  {}", label);
    }
    info!(
        "Kernel: {:?} (seed {}), normalization: {:?}",
        args.kernel,
        args.seed,
        args.normalization()
    );

    let script = args.pointer_script(&explorer.canvas_rect());
    let mut last = None;
    let mut total_render_us = 0.0;
    for input in &script {
        let output = explorer.frame(input);
        total_render_us += output.render_us;
        last = Some(output);
    }
    let Some(output) = last else {
        anyhow::bail!("no frames rendered");
    };

    let frames = explorer.frame_count() as f64;
    let avg_us = total_render_us / frames;
    let budget_us = render_config.frame_budget_us();
    println!(
        "  Frames: {} (avg render {:.2}ms, {:.1} fps max)",
        explorer.frame_count(),
        avg_us / 1000.0,
        1_000_000.0 / avg_us.max(1.0)
    );
    if avg_us > budget_us {
        info!(
            "Average render exceeds the {} fps budget ({:.0}µs > {:.0}µs)",
            render_config.target_fps, avg_us, budget_us
        );
    }
    println!("  Offset: {:?}", explorer.viewport().offset());
    println!("  {}", format_micros(output.compute_us));

    raster::save_frame(&output.grid, &render_config)?;
    info!("Wrote {}", render_config.output_path);

    Ok(())
}
