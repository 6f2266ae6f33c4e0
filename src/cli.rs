// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "rv-showcase")]
#[command(about = "Spinning RV model showcase", long_about = None)]
pub struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Render this many frames, then exit (default: run until closed)
    #[arg(long)]
    pub frames: Option<u64>,
}
