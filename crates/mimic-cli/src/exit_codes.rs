//! Exit codes of the `mimic` binary. Scripts depend on these values.

pub const SUCCESS: i32 = 0;
pub const CACHE_MISS: i32 = 1; // lookup found nothing servable
pub const CONFIG_ERROR: i32 = 2; // bad config, unreadable input or store failure
