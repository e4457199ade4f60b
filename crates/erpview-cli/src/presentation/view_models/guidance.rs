use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::Palette;

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub config_exists: bool,
    pub db_exists: bool,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self, palette))
    }
}
