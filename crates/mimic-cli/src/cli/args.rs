use clap::{Args, Parser, Subcommand};
use mimic_core::model::RequestDetails;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mimic",
    version,
    about = "Exact-match request cache for the mimic service-virtualization proxy"
)]
pub struct Cli {
    #[command(flatten)]
    pub store: StoreArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Cache every fully exact template of a simulation file
    Preload(PreloadArgs),
    /// Look up the cached response for a request
    Lookup(LookupArgs),
    /// Print every cached entry as JSON lines
    List,
    /// Remove every cached entry
    Flush,
    /// Print the cache key of a request
    Fingerprint(RequestArgs),
    Version,
}

#[derive(Args, Clone, Debug, Default)]
pub struct StoreArgs {
    /// Cache config file (YAML)
    #[arg(long, global = true, env = "MIMIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite cache database; selects the sqlite backend
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct PreloadArgs {
    /// Simulation JSON file
    pub simulation: PathBuf,

    /// Flush the cache before preloading
    #[arg(long)]
    pub flush: bool,
}

#[derive(Args, Clone, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Return the entry even when its template headers are not satisfied
    #[arg(long)]
    pub ignore_headers: bool,
}

#[derive(Args, Clone, Debug, Default)]
pub struct RequestArgs {
    #[arg(long, default_value = "")]
    pub scheme: String,
    #[arg(long, default_value = "")]
    pub method: String,
    #[arg(long, default_value = "")]
    pub destination: String,
    #[arg(long, default_value = "")]
    pub path: String,
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long, default_value = "")]
    pub body: String,

    /// Request header, repeatable
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,
}

impl RequestArgs {
    pub fn to_request(&self) -> RequestDetails {
        let base = RequestDetails::new(
            self.scheme.as_str(),
            self.method.as_str(),
            self.destination.as_str(),
            self.path.as_str(),
            self.query.as_str(),
            self.body.as_str(),
        );
        self.headers
            .iter()
            .fold(base, |req, (name, value)| req.with_header(name.as_str(), value.as_str()))
    }
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
