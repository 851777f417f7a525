use crate::{
    args::{LookupCli, MonadKind},
    arrows::{self, LookupError},
};
use anyhow::Context;
use kleisli::KleisliPipeline;
use log::{debug, info};
use serde_json::Value;
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

pub fn run(opt: LookupCli) -> anyhow::Result<()> {
    // Init logging.
    simple_logger::init_with_level(opt.log_opt.log_level)?;

    let input = read_input(opt.in_file.as_deref())?;
    match opt.monad {
        MonadKind::Optional => {
            let found = lookup_option(&opt.path, opt.upper, input);
            info!("Lookup of `{}` finished", opt.path);
            println!("{}", render_option(found.as_ref()));
        }
        MonadKind::Fallible => {
            let found = lookup_result(&opt.path, opt.upper, input)
                .with_context(|| format!("Looking up `{}`", opt.path))?;
            info!("Lookup of `{}` finished", opt.path);
            println!("{found}");
        }
    }
    Ok(())
}

/// Reads the whole input file, or stdin if there is none.
fn read_input(in_file: Option<&Path>) -> anyhow::Result<String> {
    match in_file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Reading stdin")?;
            Ok(input)
        }
    }
}

/// Parse `input` and follow `path`. Any failing step gives `None`.
pub fn lookup_option(path: &str, upper: bool, input: String) -> Option<Value> {
    let pipeline = KleisliPipeline::pipe(arrows::option_arrows(path, upper));
    debug!("Looking up `{path}` with {} steps", pipeline.len());
    pipeline.apply(Some(Value::String(input)))
}

/// Parse `input` and follow `path`. The first failing step is the error.
pub fn lookup_result(path: &str, upper: bool, input: String) -> Result<Value, LookupError> {
    let pipeline = KleisliPipeline::pipe(arrows::result_arrows(path, upper));
    debug!("Looking up `{path}` with {} steps", pipeline.len());
    pipeline.apply(Ok(Value::String(input)))
}

/// `Just(<json>)` or `Nothing`.
pub fn render_option(found: Option<&Value>) -> String {
    match found {
        Some(value) => format!("Just({value})"),
        None => String::from("Nothing"),
    }
}
