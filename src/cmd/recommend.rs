use crate::reports;
use clap::Args;
use teamforge::api;
use teamforge::config::{GaParams, Mode, RunParams};
use teamforge::error::{TeamForgeError, TfResult};
use teamforge::pool::{InMemoryProfileStore, Profile};

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub ga: GaParams,

    /// Seed profile: id or roll/registration id.
    #[arg(short = 'u', long)]
    pub member: String,

    /// Emit the JSON output contract instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Suppress per-generation progress lines.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: RecommendArgs, profiles: Vec<Profile>) -> TfResult<()> {
    let store = InMemoryProfileStore::new(profiles);
    let seed_profile = store
        .find(&args.member)
        .ok_or_else(|| TeamForgeError::Validation(format!("No profile matches '{}'", args.member)))?
        .clone();

    let params = RunParams::resolve(&args.ga, Mode::Recommendation)?;
    if !args.quiet {
        println!(
            "🧬 Recommending for {} | pop {} | gens {} | mutation {}",
            seed_profile.name, params.population_size, params.generations, params.mutation_rate
        );
    }

    let quiet = args.quiet || args.json;
    let progress = move |generation: usize, best: f64| -> bool {
        if !quiet {
            println!("Generation {}: Best Fitness = {:.4}", generation + 1, best);
        }
        true
    };

    let ranked = api::recommend_teams(&store, &seed_profile, &params, args.ga.seed, &progress)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        reports::print_recommendations(&seed_profile, &ranked);
    }
    Ok(())
}
