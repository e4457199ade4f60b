use clap::ValueEnum;
use erpview_engine::Viewport;
use erpview_types::DevelopmentStatus;
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
pub enum ViewportArg {
    Narrow,
    Wide,
}

impl From<ViewportArg> for Viewport {
    fn from(arg: ViewportArg) -> Self {
        match arg {
            ViewportArg::Narrow => Viewport::Narrow,
            ViewportArg::Wide => Viewport::Wide,
        }
    }
}

/// Statuses a draft can be moved to by hand. `published` is only reached
/// through promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatusArg {
    Development,
    Testing,
    Ready,
}

impl From<StatusArg> for DevelopmentStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Development => DevelopmentStatus::Development,
            StatusArg::Testing => DevelopmentStatus::Testing,
            StatusArg::Ready => DevelopmentStatus::Ready,
        }
    }
}
