use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStatus {
    Created,
    Overwritten,
    LoadedExisting,
}

#[derive(Debug, Serialize)]
pub struct InitResultViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub db_path: String,
    pub config_status: ConfigStatus,
    pub environment: String,
    pub locale: String,
    pub development_views: usize,
    pub published_views: usize,
}

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::InitResultView;
        Box::new(InitResultView::new(self, palette))
    }
}
