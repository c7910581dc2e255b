use mimic_core::model::Simulation;

use super::super::args::{PreloadArgs, StoreArgs};
use crate::exit_codes::SUCCESS;

pub fn run(store: &StoreArgs, args: PreloadArgs) -> anyhow::Result<i32> {
    let simulation = Simulation::load(&args.simulation)?;
    let matcher = super::store::open_matcher(store)?;

    if args.flush {
        matcher.flush_cache()?;
    }
    let summary = matcher.preload_cache(&simulation)?;

    eprintln!(
        "preloaded {} of {} templates ({} left to the full matcher)",
        summary.cached,
        simulation.templates.len(),
        summary.skipped
    );
    Ok(SUCCESS)
}
