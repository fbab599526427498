mod cli;

use clap::Parser;
use log::{error, info, warn};
use std::fs::File;
use std::io::Write;

use eigentrack::color::{load_track_colors, track_color};
use eigentrack::error::Result;
use eigentrack::input::load_tracks;
use eigentrack::layout::{render_png, render_svg, Layout};

use cli::Args;

fn run(args: &Args) -> Result<()> {
    let mut tracks = load_tracks(&args.inputs, args.step)?;

    let custom_colors = match &args.track_colors {
        Some(path) => Some(load_track_colors(path)?),
        None => None,
    };
    for track in &mut tracks {
        let color = track_color(track.name(), custom_colors.as_ref(), args.color_by_name);
        track.set_color(color);
    }

    let layout = Layout::new(&tracks, &args.layout_options())?;

    if args.is_svg() {
        info!("Rendering SVG...");
        let svg = render_svg(&tracks, &layout);
        info!("Saving to {:?}...", args.out);
        let mut file = File::create(&args.out)?;
        file.write_all(svg.as_bytes())?;
    } else {
        info!("Rendering image...");
        let img = render_png(&tracks, &layout);
        info!("Saving to {:?}...", args.out);
        img.save(&args.out)?;
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Initialize logger based on verbosity
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            warn!("Could not size the thread pool: {}", e);
        }
    }

    info!("Starting visualization...");

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Done.");
}
