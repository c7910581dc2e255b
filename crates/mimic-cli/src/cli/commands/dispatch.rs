use super::super::args::*;
use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Preload(args) => super::preload::run(&cli.store, args),
        Command::Lookup(args) => super::lookup::run(&cli.store, args),
        Command::List => super::list::run(&cli.store),
        Command::Flush => super::flush::run(&cli.store),
        Command::Fingerprint(args) => Ok(super::fingerprint::run(&args)),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
