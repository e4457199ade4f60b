use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use erpview_store::PromoteOptions;

pub async fn handle(
    ctx: &ExecutionContext,
    renderer: &ConsoleRenderer,
    id: &str,
    module: &str,
    roles: Vec<String>,
    permissions: Vec<String>,
) -> Result<()> {
    let mut options = PromoteOptions::new(module).with_permissions(permissions);
    if !roles.is_empty() {
        options = options.with_roles(roles);
    }

    let report = ctx.views()?.promote(id, &options).await?;
    renderer.render(presenters::present_promotion(report))
}
