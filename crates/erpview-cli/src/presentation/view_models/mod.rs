pub mod common;
pub mod guidance;
pub mod init;
pub mod promote;
pub mod render;
pub mod resolve;
pub mod result;
pub mod view;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use guidance::GuidanceViewModel;
pub use init::{ConfigStatus, InitResultViewModel};
pub use promote::PromotionViewModel;
pub use render::RenderViewModel;
pub use resolve::ResolveViewModel;
pub use result::CommandResultViewModel;
pub use view::{
    DevelopmentEntry, ImportResultViewModel, IssueEntry, PublishedEntry, SqlPreviewViewModel,
    StatusChangeViewModel, ValidationViewModel, ViewDetailViewModel, ViewListViewModel,
};

use crate::presentation::formatters::Palette;
use std::fmt;

/// Bridge from a view model to its text layout.
pub trait CreateView {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a>;
}
