use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::Palette;

#[derive(Debug, Serialize)]
pub struct PromotionViewModel {
    pub development_id: String,
    pub published_id: String,
    pub alias: String,
    pub module_id: String,
    pub component_path: String,
    pub required_roles: Vec<String>,
    pub required_permissions: Vec<String>,
}

impl CreateView for PromotionViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::view::PromotionView;
        Box::new(PromotionView::new(self, palette))
    }
}
