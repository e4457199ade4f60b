use erpview_engine::{RenderedView, UiNode};
use erpview_types::ViewType;
use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::Palette;

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RenderViewModel {
    /// JSON screen drawn by the renderer.
    Dynamic { tier: ViewType, view: RenderedView },
    /// Compiled screen; only its location is known here.
    Static {
        alias: String,
        component_path: String,
    },
    Hardcoded { alias: String },
    /// Nothing resolved; the nodes are the not-implemented screen.
    NotFound { alias: String, nodes: Vec<UiNode> },
}

impl CreateView for RenderViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::ui_tree::RenderView;
        Box::new(RenderView::new(self, palette))
    }
}
