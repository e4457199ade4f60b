use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{ConfigStatus, InitResultViewModel};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;

pub async fn handle(ctx: &ExecutionContext, renderer: &ConsoleRenderer, force: bool) -> Result<()> {
    let config_path = ctx.config_path();

    let config_status = if !config_path.exists() {
        Config::default().save_to(&config_path)?;
        ConfigStatus::Created
    } else if force {
        Config::default().save_to(&config_path)?;
        ConfigStatus::Overwritten
    } else {
        ConfigStatus::LoadedExisting
    };
    tracing::info!(path = %config_path.display(), ?config_status, "configuration ready");

    let config = ctx.config()?;
    let views = ctx.views()?;
    let development_views = views.list_development().await?.len();
    let published_views = views.list_published().await?.len();

    let content = InitResultViewModel {
        data_dir: ctx.data_dir().display().to_string(),
        config_path: config_path.display().to_string(),
        db_path: ctx.db_path().display().to_string(),
        config_status,
        environment: config.environment.to_string(),
        locale: config.locale.to_string(),
        development_views,
        published_views,
    };
    renderer.render(presenters::present_init(content))
}
