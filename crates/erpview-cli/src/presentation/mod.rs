//! # Presentation Layer
//!
//! Output of the CLI, in the MVVM shape:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!    (Controller)      (Converter)       (Contract)       (Driver)      (Console/JSON)
//! ```
//!
//! * `view_models/`: serializable data contracts. `--format json` prints
//!   them as they are, wrapped in a [`CommandResultViewModel`].
//! * `presenters/`: pure functions from engine and store results to view
//!   models, choosing the badge and suggestions.
//! * `views/`: text layout of each view model, colored through a
//!   [`Palette`].
//! * `renderers/`: the driver that picks JSON or text.
//!
//! The UI tree produced by the engine's renderer is drawn by
//! `views/ui_tree.rs`; JSON output carries the tree unchanged.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use formatters::Palette;
pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
