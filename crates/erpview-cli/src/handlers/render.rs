use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use erpview_engine::RenderOptions;
use erpview_types::Principal;

/// Open `alias` as `principal` and draw it. An alias nothing resolves
/// shows the not-implemented screen; a denied one is an error.
pub async fn handle(
    ctx: &ExecutionContext,
    renderer: &ConsoleRenderer,
    alias: &str,
    principal: &Principal,
    options: RenderOptions,
) -> Result<()> {
    let opener = ctx.opener()?;

    let result = match opener.open(alias, principal).await {
        Ok(opened) => presenters::present_opened(opened, &options),
        Err(err) if err.is_not_found() => {
            presenters::present_not_found(alias, &ctx.config()?.home_alias)
        }
        Err(err) => return Err(err.into()),
    };
    renderer.render(result)
}
