use erpview_types::{DynamicViewConfig, Severity};
use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::Palette;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DevelopmentEntry {
    pub id: String,
    pub name: String,
    pub alias: String,
    pub status: String,
    pub created_by: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct PublishedEntry {
    pub id: String,
    pub name: String,
    pub alias: String,
    pub module_id: String,
    pub component_path: String,
    pub status: String,
    pub required_roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ViewListViewModel {
    pub development: Vec<DevelopmentEntry>,
    pub published: Vec<PublishedEntry>,
}

#[derive(Debug, Serialize)]
pub struct ViewDetailViewModel {
    pub id: String,
    pub status: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub component_count: usize,
    pub query_count: usize,
    pub config: DynamicViewConfig,
}

#[derive(Debug, Serialize)]
pub struct ImportResultViewModel {
    pub id: String,
    pub name: String,
    pub alias: String,
    pub component_count: usize,
    pub query_count: usize,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IssueEntry {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationViewModel {
    pub name: String,
    pub alias: String,
    pub valid: bool,
    pub issues: Vec<IssueEntry>,
}

#[derive(Debug, Serialize)]
pub struct StatusChangeViewModel {
    pub id: String,
    pub alias: String,
    pub previous: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct SqlPreviewViewModel {
    pub query_id: String,
    pub query_name: String,
    pub sql: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ViewListViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::view::ViewListView;
        Box::new(ViewListView::new(self, palette))
    }
}

impl CreateView for ViewDetailViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::view::ViewDetailView;
        Box::new(ViewDetailView::new(self, palette))
    }
}

impl CreateView for ImportResultViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::view::ImportResultView;
        Box::new(ImportResultView::new(self, palette))
    }
}

impl CreateView for ValidationViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::view::ValidationView;
        Box::new(ValidationView::new(self, palette))
    }
}

impl CreateView for StatusChangeViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::view::StatusChangeView;
        Box::new(StatusChangeView::new(self, palette))
    }
}

impl CreateView for SqlPreviewViewModel {
    fn create_view<'a>(&'a self, _palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::view::SqlPreviewView;
        Box::new(SqlPreviewView::new(self))
    }
}
