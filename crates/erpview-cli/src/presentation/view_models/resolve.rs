use erpview_types::ViewRenderConfig;
use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::Palette;

/// The render configuration exactly as the resolver returned it.
#[derive(Debug, Serialize)]
pub struct ResolveViewModel {
    pub role: String,
    #[serde(flatten)]
    pub resolved: ViewRenderConfig,
}

impl CreateView for ResolveViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::view::ResolveView;
        Box::new(ResolveView::new(self, palette))
    }
}
