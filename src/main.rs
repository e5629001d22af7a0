// artspace - A terminal art gallery viewer
// Displays one artwork at a time from a fixed collection with cyclic
// next/previous navigation

use anyhow::Result;
use artspace::{assets, cli, screen};
use log::info;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args = cli::parse_args()?;

    // Build the fixed collection
    let archive = assets::builtin_archive();
    info!("Gallery loaded with {} artworks", archive.len());

    let display = screen::Screen::new(args.plain);
    match args.mode {
        cli::Mode::List => screen::list(&archive, &mut std::io::stdout()),
        cli::Mode::Script(steps) => screen::run_script(archive, &display, &steps),
        cli::Mode::Interactive => screen::run(archive, &display),
    }
}
