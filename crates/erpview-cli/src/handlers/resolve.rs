use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;

pub async fn handle(
    ctx: &ExecutionContext,
    renderer: &ConsoleRenderer,
    alias: &str,
    role: &str,
) -> Result<()> {
    let resolved = ctx.resolver()?.resolve(alias, role).await?;
    renderer.render(presenters::present_resolved(role, resolved))
}
