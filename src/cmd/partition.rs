use crate::reports;
use clap::Args;
use teamforge::api;
use teamforge::config::{GaParams, Mode, RunParams};
use teamforge::error::TfResult;
use teamforge::pool::{InMemoryProfileStore, Profile};

#[derive(Args, Debug, Clone)]
pub struct PartitionArgs {
    #[command(flatten)]
    pub ga: GaParams,

    /// Emit the JSON output contract instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Suppress per-generation progress lines.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: PartitionArgs, profiles: Vec<Profile>) -> TfResult<()> {
    let store = InMemoryProfileStore::new(profiles.clone());
    let params = RunParams::resolve(&args.ga, Mode::Partition)?;

    if !args.quiet {
        println!(
            "🧬 Partitioning into teams of {} | pop {} | gens {} | mutation {}",
            params.team_size, params.population_size, params.generations, params.mutation_rate
        );
    }

    let quiet = args.quiet || args.json;
    let progress = move |generation: usize, best: f64| -> bool {
        if !quiet {
            println!("Generation {}: Best Fitness = {:.4}", generation + 1, best);
        }
        true
    };

    let outcome = api::partition_pool(&store, &params, args.ga.seed, &progress)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        reports::print_partition(&outcome, &profiles);
    }
    Ok(())
}
