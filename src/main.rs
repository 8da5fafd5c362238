use clap::Parser;
use env_logger::Env;
use resflat::{run, Args};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match std::env::current_dir() {
        Ok(cwd) => log::info!("Working directory: {}", cwd.display()),
        Err(e) => log::warn!("Working directory unavailable: {e}"),
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
