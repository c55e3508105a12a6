// ===== teamforge/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;
use teamforge::pool::loader;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Profile pool file: a JSON array of profiles, or CSV.
    #[arg(global = true, short, long, default_value = "data/pool.json")]
    pool: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Recommend(cmd::recommend::RecommendArgs),
    Partition(cmd::partition::PartitionArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(false)
        .init();

    println!("\n🚀 Initializing TeamForge...");
    println!("📂 Loading Pool: {}", cli.pool);

    let profiles = loader::load_pool_file(&cli.pool).unwrap_or_else(|e| {
        eprintln!("\n❌ FATAL ERROR LOADING POOL:");
        eprintln!("   {}", e);
        process::exit(1);
    });
    println!("👥 {} profiles loaded", profiles.len());

    let outcome = match cli.command {
        Commands::Recommend(args) => cmd::recommend::run(args, profiles),
        Commands::Partition(args) => cmd::partition::run(args, profiles),
    };

    if let Err(e) = outcome {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
