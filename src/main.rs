use clap::{Parser, Subcommand};
use geoconvlib::cli_commands;

#[derive(Parser)]
#[command(name = "geoconvlib", about = "Parse, inspect, and rewrite WKT geometries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a WKT string and print details about the geometry
    Show { wkt: String },
    /// Parse a WKT string and print its bounding envelope
    Envelope { wkt: String },
    /// Parse a WKT string and re-emit it in canonical form
    Canon {
        wkt: String,
        /// Optional file to save the canonical output to
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Show { wkt } => cli_commands::parse_show_detail(wkt),
        Commands::Envelope { wkt } => cli_commands::show_envelope(wkt),
        Commands::Canon { wkt, output } => cli_commands::write_canonical(wkt, output),
    };
    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
