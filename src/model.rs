use clap::{ArgGroup, Parser, ValueEnum};
use serde::Deserialize;

use abst_fs::{self as fs, AbstPath};
use tree_diff::{ExcludeList, Flags, Mode};

use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_FLAGS: &str = "car";
const DEFAULT_INTERVAL: u64 = 10;
const DEFAULT_CUTOFF: usize = 3;

#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Silent,
}
impl LogLevel {
    pub fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// Monitor a directory for changes or compare two directories.
///
/// Groups to show are picked with --flags, a string over "acrsu" (added,
/// changed, removed, shared, unchanged) whose order is the order of the
/// output. Changed files are found by comparing sizes and, for files of equal
/// size, checksums (or modification times with --skip-checksum)
#[derive(Parser, Debug)]
#[clap(version)]
#[clap(group(ArgGroup::new("mode").required(true).args(&["compare", "watch"])))]
pub struct Args {
    /// Compare two directories
    #[clap(short, long, number_of_values = 2, value_names = &["DIR", "DIR"])]
    pub compare: Option<Vec<String>>,

    /// Watch a directory continuously for changes [default: current directory]
    #[clap(short, long, value_name = "DIR")]
    pub watch: Option<Option<String>>,

    /// Groups to show, see above [default: car]
    #[clap(short, long)]
    pub flags: Option<String>,

    /// Don't checksum, check modification times instead
    #[clap(short, long)]
    pub skip_checksum: bool,

    /// Update interval in seconds for watch mode [default: 10]
    #[clap(short, long, value_name = "N")]
    pub interval: Option<u64>,

    /// Amount of files to list for each group before displaying "and N more"
    /// in watch mode [default: 3]
    #[clap(short = 'x', long, value_name = "N")]
    pub cutoff: Option<usize>,

    /// Ignore paths matching this regex (relative to the root, directories
    /// end with a separator). Can be repeated
    #[clap(short, long, value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Don't color group labels
    #[clap(long)]
    pub no_color: bool,

    /// Verbosity of diagnostics printed on stderr
    #[clap(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Settings file [default: ~/.config/changemon/config.toml]
    #[clap(long, value_name = "PATH")]
    pub config: Option<String>,
}

pub enum Operation {
    Compare(AbstPath, AbstPath),
    Watch(AbstPath),
}
impl Args {
    pub fn operation(&self) -> Result<Operation> {
        match (&self.compare, &self.watch) {
            (Some(dirs), None) => match dirs.as_slice() {
                [left, right] => Ok(Operation::Compare(
                    AbstPath::from(left),
                    AbstPath::from(right),
                )),
                _ => anyhow::bail!("--compare takes exactly two directories"),
            },
            (None, Some(Some(dir))) => Ok(Operation::Watch(AbstPath::from(dir))),
            (None, Some(None)) => Ok(Operation::Watch(
                fs::cwd().context("could not resolve current working directory")?,
            )),
            _ => anyhow::bail!("exactly one of --compare and --watch must be given"),
        }
    }
}

/// Content of the settings file. Every key is optional, command line
/// arguments take precedence
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub flags: Option<String>,
    pub skip_checksum: Option<bool>,
    pub interval: Option<u64>,
    pub cutoff: Option<usize>,
    pub exclude: Option<Vec<String>>,
}
impl FileSettings {
    fn path(home_dir: &AbstPath) -> AbstPath {
        home_dir
            .add_last(".config")
            .add_last("changemon")
            .add_last("config.toml")
    }
    /// Load the file given explicitly, which must exist, or else the default
    /// one, which may not
    pub fn load(explicit: Option<&str>) -> Result<FileSettings> {
        let path = match explicit {
            Some(path) => AbstPath::from(path),
            None => match fs::home_dir() {
                Ok(home_dir) => {
                    let path = FileSettings::path(&home_dir);
                    if !path.exists() {
                        return Ok(FileSettings::default());
                    }
                    path
                }
                Err(_) => return Ok(FileSettings::default()),
            },
        };
        let settings: FileSettings =
            fs::load(&path).with_context(|| format!("failed to load settings file [{path}]"))?;
        Ok(settings)
    }
}

pub struct Settings {
    pub flags: Flags,
    pub mode: Mode,
    pub interval: Duration,
    pub cutoff: usize,
    pub exclude_list: ExcludeList,
    pub color: bool,
}
impl Settings {
    /// Merge command line and settings file, validating everything before any
    /// directory is touched
    pub fn resolve(args: &Args, file: FileSettings) -> Result<Settings> {
        let flags = args
            .flags
            .clone()
            .or(file.flags)
            .unwrap_or_else(|| DEFAULT_FLAGS.to_string());
        let flags = Flags::parse(&flags).context("invalid --flags")?;

        let mode = match args.skip_checksum || file.skip_checksum.unwrap_or(false) {
            true => Mode::Mtime,
            false => Mode::Checksum,
        };

        let interval = args.interval.or(file.interval).unwrap_or(DEFAULT_INTERVAL);
        if interval == 0 {
            anyhow::bail!("invalid --interval: must be a positive number of seconds");
        }

        let cutoff = args.cutoff.or(file.cutoff).unwrap_or(DEFAULT_CUTOFF);

        let mut rules = file.exclude.unwrap_or_default();
        rules.extend(args.exclude.iter().cloned());
        let exclude_list = ExcludeList::from(&rules).context("invalid exclude rule")?;

        Ok(Settings {
            flags,
            mode,
            interval: Duration::from_secs(interval),
            cutoff,
            exclude_list,
            color: !args.no_color,
        })
    }
}
