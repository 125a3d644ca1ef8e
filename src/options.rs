//! Command-line options for the `u-chain` binary.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::search::{ChainSearch, DEFAULT_TRIALS};
use crate::{Error, Result};

/// Output file written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "output.json";

/// Logging verbosity accepted by `--log-level`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_argument(format!(
                "invalid value for --log-level: {value} (expected error|warn|info|debug|trace|off)"
            ))),
        }
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

/// Runtime options for a chaining run.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainOptions {
    /// Input JSON file with the bookings.
    pub file: Option<PathBuf>,
    /// Number of randomized trials.
    pub iterations: usize,
    /// Output JSON file for the ordered booking ids.
    pub output: PathBuf,
    /// Fixed random seed; drawn at random when absent.
    pub seed: Option<u64>,
    /// Run trials on this many worker threads (0 = all cores).
    pub threads: Option<usize>,
    /// Logging verbosity.
    pub log_level: LogLevel,
    /// Print usage and exit.
    pub help: bool,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            file: None,
            iterations: DEFAULT_TRIALS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            threads: None,
            log_level: LogLevel::Info,
            help: false,
        }
    }
}

impl ChainOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse(env::args().skip(1))
    }

    /// Parses options from arguments (program name excluded).
    ///
    /// Accepts `-f <v>`, `-f<v>`, `--file <v>` and `--file=<v>` forms.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (name, inline) = split_arg(&arg)?;

            match name.as_str() {
                "h" | "help" => {
                    if inline.is_some() {
                        return Err(Error::invalid_argument("flag --help does not take a value"));
                    }
                    options.help = true;
                }
                "f" | "file" => {
                    options.file = Some(PathBuf::from(take_value(&name, inline, &mut args)?));
                }
                "i" | "iterations" => {
                    options.iterations = parse_value(&name, take_value(&name, inline, &mut args)?)?;
                }
                "o" | "output" => {
                    options.output = PathBuf::from(take_value(&name, inline, &mut args)?);
                }
                "seed" => {
                    options.seed = Some(parse_value(&name, take_value(&name, inline, &mut args)?)?);
                }
                "threads" => {
                    options.threads =
                        Some(parse_value(&name, take_value(&name, inline, &mut args)?)?);
                }
                "log-level" => {
                    options.log_level = LogLevel::parse(&take_value(&name, inline, &mut args)?)?;
                }
                _ => {
                    return Err(Error::invalid_argument(format!("unknown option: {arg}")));
                }
            }
        }

        if options.help {
            return Ok(options);
        }
        if options.file.is_none() {
            return Err(Error::invalid_argument("missing required option --file"));
        }
        if options.iterations == 0 {
            return Err(Error::invalid_argument("--iterations must be at least 1"));
        }

        Ok(options)
    }

    /// Builds the search configured by these options.
    pub fn search(&self) -> ChainSearch {
        let mut search = ChainSearch::new(self.iterations);
        if let Some(seed) = self.seed {
            search = search.with_seed(seed);
        }
        if let Some(threads) = self.threads {
            search = search.with_threads(threads);
        }
        search
    }

    pub fn usage() -> &'static str {
        concat!(
            "usage: u-chain -f <inputfile> [-i <iterations>] [-o <outputfile>]\n\n",
            "arguments:\n",
            "  -h, --help                show this help message and exit\n",
            "  -f, --file <path>         path to the input json file\n",
            "  -i, --iterations <n>      number of iterations (default: 500)\n",
            "  -o, --output <path>       path to the output json file (default: output.json)\n",
            "      --seed <u64>          random seed for reproducible runs\n",
            "      --threads <n>         run trials in parallel on n threads (0 = all cores)\n",
            "      --log-level <level>   error|warn|info|debug|trace|off (default: info)\n",
        )
    }
}

/// Splits an argument into its option name and any inline value.
fn split_arg(arg: &str) -> Result<(String, Option<String>)> {
    if let Some(long) = arg.strip_prefix("--") {
        if long.is_empty() {
            return Err(Error::invalid_argument(format!("invalid option name: {arg}")));
        }
        return Ok(match long.split_once('=') {
            Some((k, v)) => (k.to_string(), Some(v.to_string())),
            None => (long.to_string(), None),
        });
    }

    if let Some(short) = arg.strip_prefix('-') {
        let mut chars = short.chars();
        let Some(flag) = chars.next() else {
            return Err(Error::invalid_argument(format!("invalid option name: {arg}")));
        };
        let rest = chars.as_str();
        let inline = (!rest.is_empty()).then(|| rest.to_string());
        return Ok((flag.to_string(), inline));
    }

    Err(Error::invalid_argument(format!("unexpected argument: {arg}")))
}

fn take_value(
    name: &str,
    inline: Option<String>,
    args: &mut impl Iterator<Item = String>,
) -> Result<String> {
    if let Some(v) = inline {
        return Ok(v);
    }
    args.next()
        .ok_or_else(|| Error::invalid_argument(format!("missing value for {}", flag(name))))
}

fn parse_value<T>(name: &str, raw: String) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| {
        Error::invalid_argument(format!("invalid value for {}: {raw} ({e})", flag(name)))
    })
}

fn flag(name: &str) -> String {
    if name.len() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ChainOptions> {
        ChainOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults_with_file() {
        let opts = parse(&["-f", "bookings.json"]).expect("valid");
        assert_eq!(opts.file, Some(PathBuf::from("bookings.json")));
        assert_eq!(opts.iterations, 500);
        assert_eq!(opts.output, PathBuf::from("output.json"));
        assert_eq!(opts.seed, None);
        assert_eq!(opts.threads, None);
        assert_eq!(opts.log_level, LogLevel::Info);
        assert!(!opts.help);
    }

    #[test]
    fn test_short_and_long_forms() {
        let opts = parse(&["--file=in.json", "-i50", "--output", "out.json"]).expect("valid");
        assert_eq!(opts.file, Some(PathBuf::from("in.json")));
        assert_eq!(opts.iterations, 50);
        assert_eq!(opts.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_extra_options() {
        let opts = parse(&[
            "-f",
            "in.json",
            "--seed",
            "42",
            "--threads=4",
            "--log-level",
            "debug",
        ])
        .expect("valid");
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.threads, Some(4));
        assert_eq!(opts.log_level, LogLevel::Debug);

        let search = opts.search();
        assert_eq!(search.trials(), 500);
        assert_eq!(search.seed(), Some(42));
        assert_eq!(search.threads(), Some(4));
    }

    #[test]
    fn test_help_skips_required_file() {
        let opts = parse(&["--help"]).expect("valid");
        assert!(opts.help);
        let opts = parse(&["-h"]).expect("valid");
        assert!(opts.help);
    }

    #[test]
    fn test_missing_file() {
        let err = parse(&["-i", "10"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_bad_iterations() {
        assert!(parse(&["-f", "in.json", "-i", "many"]).is_err());
        assert!(parse(&["-f", "in.json", "-i", "0"]).is_err());
        assert!(parse(&["-f", "in.json", "-i", "-3"]).is_err());
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["-f"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: missing value for -f");
        let err = parse(&["-f", "in.json", "--seed"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: missing value for --seed");
    }

    #[test]
    fn test_separated_value_may_start_with_dash() {
        let opts = parse(&["-f", "-weird.json"]).expect("valid");
        assert_eq!(opts.file, Some(PathBuf::from("-weird.json")));

        let opts = parse(&["--file", "--in.json", "-o", "-"]).expect("valid");
        assert_eq!(opts.file, Some(PathBuf::from("--in.json")));
        assert_eq!(opts.output, PathBuf::from("-"));

        // The flag after -f is consumed as its value.
        let opts = parse(&["-f", "-h"]).expect("valid");
        assert_eq!(opts.file, Some(PathBuf::from("-h")));
        assert!(!opts.help);
    }

    #[test]
    fn test_unknown_option() {
        assert!(parse(&["-f", "in.json", "-x"]).is_err());
        assert!(parse(&["-f", "in.json", "--verbose"]).is_err());
        assert!(parse(&["in.json"]).is_err());
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("WARNING").expect("valid"), LogLevel::Warn);
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
        assert!(LogLevel::parse("loud").is_err());
    }
}
