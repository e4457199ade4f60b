use erpview_engine::{OpenedView, RenderOptions, render, render_not_found};
use erpview_types::ViewRenderConfig;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, RenderViewModel, ResolveViewModel, StatusBadge,
};

pub fn present_resolved(
    role: &str,
    resolved: ViewRenderConfig,
) -> CommandResultViewModel<ResolveViewModel> {
    CommandResultViewModel::new(ResolveViewModel {
        role: role.to_string(),
        resolved,
    })
}

pub fn present_opened(
    opened: OpenedView,
    options: &RenderOptions,
) -> CommandResultViewModel<RenderViewModel> {
    let content = match opened {
        OpenedView::Dynamic { tier, config, .. } => RenderViewModel::Dynamic {
            tier,
            view: render(&config, options),
        },
        OpenedView::Static {
            alias,
            component_path,
        } => RenderViewModel::Static {
            alias,
            component_path,
        },
        OpenedView::Hardcoded { alias } => RenderViewModel::Hardcoded { alias },
    };
    CommandResultViewModel::new(content)
}

pub fn present_not_found(alias: &str, home_alias: &str) -> CommandResultViewModel<RenderViewModel> {
    CommandResultViewModel::new(RenderViewModel::NotFound {
        alias: alias.to_string(),
        nodes: render_not_found(alias, home_alias),
    })
    .with_badge(StatusBadge::warning(format!("No view for '{}'", alias)))
    .with_suggestion(Guidance::new("See the stored views").with_command("erpview view list"))
}
