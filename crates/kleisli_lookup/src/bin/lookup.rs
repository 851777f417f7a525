use clap::Parser;
use kleisli_lookup::{args::LookupCli, binary_logic};

fn main() -> anyhow::Result<()> {
    binary_logic::run(LookupCli::parse())
}
