use clap::ValueEnum;
use devpath_types::Difficulty;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DifficultyFilter {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<DifficultyFilter> for Difficulty {
    fn from(filter: DifficultyFilter) -> Self {
        match filter {
            DifficultyFilter::Beginner => Difficulty::Beginner,
            DifficultyFilter::Intermediate => Difficulty::Intermediate,
            DifficultyFilter::Advanced => Difficulty::Advanced,
        }
    }
}

impl OutputFormat {
    pub fn is_plain(&self) -> bool {
        matches!(self, OutputFormat::Plain)
    }
}
