//! Run command: meteorological forcing from TOML to monthly evaporation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use petcr_bgcr::{BgcrEstimate, estimate_et};

use crate::cli::RunArgs;
use crate::config::PetcrConfig;
use crate::convert;
use crate::output::{FieldJson, write_json};

/// Pipeline results written by `petcr run`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub scheme: String,
    pub policy: String,
    pub et: FieldJson,
    pub epa: FieldJson,
    pub erad: FieldJson,
    pub eaero: FieldJson,
    pub w: FieldJson,
    pub beta_c: FieldJson,
    pub x: FieldJson,
    pub ratio: FieldJson,
    pub clamped_cells: usize,
    pub masked_cells: usize,
}

impl RunReport {
    fn new(scheme: &str, policy: &str, est: &BgcrEstimate) -> Self {
        Self {
            scheme: scheme.to_string(),
            policy: policy.to_string(),
            et: est.et().into(),
            epa: est.epa().into(),
            erad: est.erad().into(),
            eaero: est.eaero().into(),
            w: est.w().into(),
            beta_c: est.beta_c().into(),
            x: est.x().into(),
            ratio: est.ratio().into(),
            clamped_cells: est.clamped_cells(),
            masked_cells: est.masked_cells(),
        }
    }
}

/// Run the meteorology-to-evaporation pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: PetcrConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Convert sections
    let pipeline = convert::build_pipeline_config(&config)?;
    let forcing = config
        .forcing
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no forcing: add a [forcing] section to the config"))?;
    let meteo = convert::build_forcing(forcing)?;
    info!(
        periods = forcing.precipitation.len(),
        scheme = pipeline.scheme().label(),
        "forcing loaded"
    );

    // 3. Estimate
    let est = estimate_et(&meteo, &pipeline).context("evaporation estimate failed")?;
    info!(shape = ?est.et().shape(), "evaporation estimated");

    // 4. Write JSON
    let report = RunReport::new(
        pipeline.scheme().label(),
        &config.solver.policy.to_lowercase(),
        &est,
    );
    let path = args.output.or(config.output.path);
    write_json(&report, path.as_deref())
}
