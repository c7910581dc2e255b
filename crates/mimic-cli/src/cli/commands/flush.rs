use super::super::args::StoreArgs;
use crate::exit_codes::SUCCESS;

pub fn run(store: &StoreArgs) -> anyhow::Result<i32> {
    let matcher = super::store::open_matcher(store)?;
    matcher.flush_cache()?;
    eprintln!("cache flushed");
    Ok(SUCCESS)
}
