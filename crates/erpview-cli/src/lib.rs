// NOTE: Command layout
//
// Commands are thin: `commands::run` resolves the data directory, installs
// logging and hands a single `ExecutionContext` to the handler. Handlers do
// the store and engine calls, presenters turn the results into view models,
// and the console renderer prints them as text or JSON.
//
// The store is opened lazily, so `--help` and the bare guidance screen never
// touch the database.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, StatusArg, ViewCommand, ViewportArg};
pub use commands::run;
