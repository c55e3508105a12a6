use crate::error::{TeamForgeError, TfResult};
use clap::Args;
use strum_macros::{Display, EnumString};

/// Operating mode of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    /// Propose ranked teams around one seed profile.
    Recommendation,
    /// Split the whole pool into buckets.
    Partition,
}

pub const DEFAULT_TEAM_SIZE: usize = 3;

// (population_size, generations, mutation_rate)
const RECOMMEND_DEFAULTS: (usize, usize, f64) = (50, 100, 0.08);
const PARTITION_DEFAULTS: (usize, usize, f64) = (30, 50, 0.07);

/// GA parameters as accepted on the CLI / embedding surface.
/// Unset fields resolve to per-mode defaults via [`RunParams::resolve`].
#[derive(Args, Debug, Clone)]
pub struct GaParams {
    /// Members per team, counting the seed user in recommendation mode.
    #[arg(long, default_value_t = DEFAULT_TEAM_SIZE)]
    pub team_size: usize,

    /// Chromosomes per generation (default: 50 recommendation / 30 partition).
    #[arg(long)]
    pub population_size: Option<usize>,

    /// Generation budget (default: 100 recommendation / 50 partition).
    #[arg(long)]
    pub generations: Option<usize>,

    /// Mutation probability (default: 0.08 recommendation / 0.07 partition).
    #[arg(long)]
    pub mutation_rate: Option<f64>,

    /// RNG seed for reproducible runs.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            population_size: None,
            generations: None,
            mutation_rate: None,
            seed: None,
        }
    }
}

/// Fully resolved parameters for one run.
#[derive(Debug, Clone, Copy)]
pub struct RunParams {
    pub team_size: usize,
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
}

impl RunParams {
    pub fn for_mode(mode: Mode) -> Self {
        let (population_size, generations, mutation_rate) = match mode {
            Mode::Recommendation => RECOMMEND_DEFAULTS,
            Mode::Partition => PARTITION_DEFAULTS,
        };
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            population_size,
            generations,
            mutation_rate,
        }
    }

    /// Overlay explicit overrides onto the mode defaults and validate.
    pub fn resolve(params: &GaParams, mode: Mode) -> TfResult<Self> {
        let mut run = Self::for_mode(mode);
        run.team_size = params.team_size;
        if let Some(p) = params.population_size {
            run.population_size = p;
        }
        if let Some(g) = params.generations {
            run.generations = g;
        }
        if let Some(m) = params.mutation_rate {
            run.mutation_rate = m;
        }

        if run.team_size < 2 {
            return Err(TeamForgeError::Config(format!(
                "--team-size must be at least 2 (got {})",
                run.team_size
            )));
        }
        if run.population_size < 2 {
            return Err(TeamForgeError::Config(format!(
                "--population-size must be at least 2 (got {})",
                run.population_size
            )));
        }
        if !(0.0..=1.0).contains(&run.mutation_rate) {
            return Err(TeamForgeError::Config(format!(
                "--mutation-rate must be within [0, 1] (got {})",
                run.mutation_rate
            )));
        }
        Ok(run)
    }
}
