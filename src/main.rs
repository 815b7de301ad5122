use clap::Parser;
use huffstat::cli::{Cli, run};

fn main() {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => {}
        Err(e) => println!("{e}"),
    }
}
