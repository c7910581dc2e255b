use mimic_core::cache::CachedEntry;
use mimic_core::fingerprint::fingerprint;
use serde_json::json;

use super::super::args::{LookupArgs, StoreArgs};
use crate::exit_codes::{CACHE_MISS, SUCCESS};

pub fn run(store: &StoreArgs, args: LookupArgs) -> anyhow::Result<i32> {
    let matcher = super::store::open_matcher(store)?;
    let request = args.request.to_request();
    let key = fingerprint(&request);

    let hit = if args.ignore_headers {
        match matcher.get_cached_response(&request) {
            Ok(entry) => Some(entry),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(err.into()),
        }
    } else {
        matcher.get_matching_response(&request)?
    };

    match hit {
        Some(entry) => {
            println!("{}", serde_json::to_string_pretty(&entry_json(&entry))?);
            Ok(SUCCESS)
        }
        None => {
            eprintln!("cache miss: {key}");
            Ok(CACHE_MISS)
        }
    }
}

pub(crate) fn entry_json(entry: &CachedEntry) -> serde_json::Value {
    json!({
        "fingerprint": fingerprint(&entry.request).hex,
        "headerMatch": entry.header_match,
        "request": entry.request,
        "requestTemplate": entry.pair.request_template,
        "response": entry.pair.response,
    })
}
