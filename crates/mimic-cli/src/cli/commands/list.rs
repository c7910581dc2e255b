use super::super::args::StoreArgs;
use crate::exit_codes::SUCCESS;

pub fn run(store: &StoreArgs) -> anyhow::Result<i32> {
    let matcher = super::store::open_matcher(store)?;
    let entries = matcher.get_all_responses()?;

    for entry in &entries {
        println!("{}", serde_json::to_string(&super::lookup::entry_json(entry))?);
    }
    eprintln!("{} cached entries", entries.len());
    Ok(SUCCESS)
}
