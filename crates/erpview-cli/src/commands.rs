use super::args::{Cli, Commands, OutputFormat, ViewCommand};
use super::handlers;
use crate::config::resolve_workspace_path;
use crate::context::ExecutionContext;
use crate::logging;
use crate::presentation::ConsoleRenderer;
use anyhow::Result;
use erpview_engine::RenderOptions;
use erpview_types::Principal;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir);
    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx, &renderer);
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(command, &ctx, &renderer))
}

async fn dispatch(command: Commands, ctx: &ExecutionContext, renderer: &ConsoleRenderer) -> Result<()> {
    match command {
        Commands::Init { force } => handlers::init::handle(ctx, renderer, force).await,

        Commands::Resolve { alias, role } => {
            handlers::resolve::handle(ctx, renderer, &alias, &role).await
        }

        Commands::Render {
            alias,
            role,
            permissions,
            viewport,
            locale,
        } => {
            let config = ctx.config()?;
            let options = RenderOptions {
                viewport: viewport.map(Into::into).unwrap_or(config.viewport),
                locale: locale.unwrap_or(config.locale),
            };
            let principal = Principal::new(role).with_permissions(permissions);
            handlers::render::handle(ctx, renderer, &alias, &principal, options).await
        }

        Commands::View { command } => match command {
            ViewCommand::Import { file, actor } => {
                handlers::view::import(ctx, renderer, &file, &actor).await
            }
            ViewCommand::List => handlers::view::list(ctx, renderer).await,
            ViewCommand::Show { id } => handlers::view::show(ctx, renderer, &id).await,
            ViewCommand::Validate { file } => handlers::view::validate_file(renderer, &file),
            ViewCommand::Status { id, status } => {
                handlers::view::set_status(ctx, renderer, &id, status.into()).await
            }
            ViewCommand::Sql {
                file,
                query_id,
                sources,
            } => handlers::view::sql(renderer, &file, &query_id, sources.as_deref()),
        },

        Commands::Promote {
            id,
            module,
            roles,
            permissions,
        } => handlers::promote::handle(ctx, renderer, &id, &module, roles, permissions).await,
    }
}
