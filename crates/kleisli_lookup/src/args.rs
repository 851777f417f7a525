use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Args, Parser, ValueEnum, ValueHint,
};
use log::Level;
use std::path::PathBuf;

/// Logging options.
#[derive(Args, Clone, Debug)]
pub struct LoggingOpt {
    /// The logging level to use.
    #[arg(
        short, long, default_value_t = Level::Info,
        // Needed because enum is foreign so can't use ValueEnum derive.
        value_parser = PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"]).map(|s| s.parse::<Level>().unwrap()),
        ignore_case = true
    )]
    pub log_level: Level,
}

/// Which wrapper threads the lookup.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonadKind {
    /// Any failure gives `Nothing`.
    #[default]
    #[value(name = "option")]
    Optional,
    /// The first failure is reported.
    #[value(name = "result")]
    Fallible,
}

/// Look up a key path in a JSON document.
#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct LookupCli {
    #[command(flatten)]
    pub log_opt: LoggingOpt,

    /// The JSON file to read. Reads stdin if not provided.
    #[arg(value_hint = ValueHint::FilePath)]
    pub in_file: Option<PathBuf>,

    /// Dot separated object keys to follow.
    #[arg(short, long, default_value_t = String::from("user.address.state"))]
    pub path: String,

    /// Upper-case the value found. Fails if it isn't a string.
    #[arg(short, long)]
    pub upper: bool,

    /// How failures are threaded through the lookup.
    #[arg(short, long, value_enum, default_value_t)]
    pub monad: MonadKind,
}
