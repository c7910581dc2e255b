mod dispatch;
pub mod fingerprint;
pub mod flush;
pub mod list;
pub mod lookup;
pub mod preload;
mod store;

pub use dispatch::dispatch;
