use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result, anyhow, bail};
use erpview_engine::{ViewBuilder, sql_preview};
use erpview_types::{DataSource, DevelopmentStatus, DynamicViewConfig, SystemClock, validate};
use std::path::Path;
use std::sync::Arc;

fn read_view(path: &Path) -> Result<DynamicViewConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid view JSON in {}", path.display()))
}

/// Save a view file as a new development view through a builder session,
/// so the same checks as interactive authoring apply.
pub async fn import(
    ctx: &ExecutionContext,
    renderer: &ConsoleRenderer,
    file: &Path,
    actor: &str,
) -> Result<()> {
    let mut config = read_view(file)?;
    config.id = None;

    let mut builder = ViewBuilder::new(ctx.views()?.clone(), Arc::new(SystemClock), actor);
    builder.load_config(config);

    let outcome = builder.save_view(actor).await;
    let id = match (outcome.success, outcome.id) {
        (true, Some(id)) => id,
        _ => bail!(
            "{}",
            outcome
                .error
                .unwrap_or_else(|| "saving the view failed".to_string())
        ),
    };

    let report = validate(builder.config());
    renderer.render(presenters::present_import(id, builder.config(), &report))
}

pub async fn list(ctx: &ExecutionContext, renderer: &ConsoleRenderer) -> Result<()> {
    let views = ctx.views()?;
    let development = views.list_development().await?;
    let published = views.list_published().await?;
    renderer.render(presenters::present_view_list(development, published))
}

pub async fn show(ctx: &ExecutionContext, renderer: &ConsoleRenderer, id: &str) -> Result<()> {
    let record = ctx
        .views()?
        .get_development(id)
        .await?
        .ok_or_else(|| anyhow!("development view not found: {}", id))?;
    let config = record
        .config()
        .with_context(|| format!("development view {} holds an invalid configuration", id))?;
    renderer.render(presenters::present_view_detail(record, config))
}

/// Print the file's validation issues; fails when any is an error.
pub fn validate_file(renderer: &ConsoleRenderer, file: &Path) -> Result<()> {
    let config = read_view(file)?;
    let report = validate(&config);
    let error_count = report.errors().count();

    renderer.render(presenters::present_validation(&config, &report))?;

    if error_count > 0 {
        bail!("{} has {} validation error(s)", file.display(), error_count);
    }
    Ok(())
}

pub async fn set_status(
    ctx: &ExecutionContext,
    renderer: &ConsoleRenderer,
    id: &str,
    status: DevelopmentStatus,
) -> Result<()> {
    let views = ctx.views()?;
    let current = views
        .get_development(id)
        .await?
        .ok_or_else(|| anyhow!("development view not found: {}", id))?;
    if current.status == DevelopmentStatus::Published {
        bail!("development view {} is already published", id);
    }

    let updated = views.set_development_status(id, status).await?;
    renderer.render(presenters::present_status_change(current.status, updated))
}

pub fn sql(
    renderer: &ConsoleRenderer,
    file: &Path,
    query_id: &str,
    sources: Option<&Path>,
) -> Result<()> {
    let config = read_view(file)?;
    let query = config
        .query(query_id)
        .ok_or_else(|| anyhow!("view '{}' has no query '{}'", config.alias, query_id))?;

    let catalog: Vec<DataSource> = match sources {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("invalid data source JSON in {}", path.display()))?
        }
        None => Vec::new(),
    };

    let preview = sql_preview(query, &catalog);
    renderer.render(presenters::present_sql(&query.id, &query.name, preview))
}
