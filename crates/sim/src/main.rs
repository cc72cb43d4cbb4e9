use anyhow::Context;

use dunning_sim::Scenario;

/// Environment variable consulted when no scenario path is given.
const SCENARIO_ENV: &str = "DUNNING_SCENARIO";

fn main() -> anyhow::Result<()> {
    dunning_observability::init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SCENARIO_ENV).ok())
        .with_context(|| format!("usage: dunning-sim <scenario.json> (or set {SCENARIO_ENV})"))?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read scenario {path}"))?;
    let scenario = Scenario::from_json(&raw)?;

    let (reports, _) = scenario.run();
    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    Ok(())
}
