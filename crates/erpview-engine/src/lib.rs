// Engine module - the dynamic view pipeline
// Sits between the view store and CLI presentation: resolve an alias, check
// access, render the component tree, and author views through the builder

mod builder;
mod error;
mod locale;
mod navigator;
mod opener;
mod renderer;
mod resolver;
mod sql;

pub use builder::{ViewBuilder, ViewInfoUpdate};
pub use error::{BuilderError, OpenError, ResolveError, SaveOutcome};
pub use locale::Locale;
pub use navigator::{Navigation, Navigator, Ticket};
pub use opener::{OpenedView, ViewOpener};
pub use renderer::{
    ActionRegistry, DEFAULT_SUBMIT_TEXT, FormInput, MetadataFooter, RenderOptions, RenderedView,
    TABLE_PLACEHOLDER, Tone, UiNode, Viewport, grid_columns, render, render_component,
    render_not_found,
};
pub use resolver::{Resolution, ViewResolver};
pub use sql::sql_preview;
