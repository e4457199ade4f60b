use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, renderer: &ConsoleRenderer) -> Result<()> {
    let result = presenters::present_guidance(
        ctx.data_dir().display().to_string(),
        ctx.config_path().exists(),
        ctx.db_path().exists(),
    );
    renderer.render(result)
}
