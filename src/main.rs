#![allow(non_snake_case)]

mod app;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Prism UI - component gallery
#[derive(Parser, Debug)]
#[command(name = "prism-gallery")]
#[command(about = "Prism UI - browse component variants and states")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!("Starting Prism UI gallery ({}x{})", args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Prism UI Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
