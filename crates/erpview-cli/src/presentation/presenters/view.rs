use erpview_store::PromotionReport;
use erpview_types::{
    DevelopmentStatus, DevelopmentViewRecord, DynamicViewConfig, PublishedViewRecord,
    ValidationReport,
};

use crate::presentation::view_models::{
    CommandResultViewModel, DevelopmentEntry, Guidance, ImportResultViewModel, IssueEntry,
    PromotionViewModel, PublishedEntry, SqlPreviewViewModel, StatusBadge, StatusChangeViewModel,
    ValidationViewModel, ViewDetailViewModel, ViewListViewModel,
};

pub fn present_view_list(
    development: Vec<DevelopmentViewRecord>,
    published: Vec<PublishedViewRecord>,
) -> CommandResultViewModel<ViewListViewModel> {
    let content = ViewListViewModel {
        development: development
            .into_iter()
            .map(|record| DevelopmentEntry {
                id: record.id,
                name: record.name,
                alias: record.alias,
                status: record.status.to_string(),
                created_by: record.created_by,
                updated_at: record.updated_at,
            })
            .collect(),
        published: published
            .into_iter()
            .map(|record| PublishedEntry {
                id: record.id,
                name: record.name,
                alias: record.alias,
                module_id: record.module_id,
                component_path: record.component_path,
                status: record.status.as_str().to_string(),
                required_roles: record.required_roles,
            })
            .collect(),
    };

    let label = format!(
        "{} development, {} published",
        content.development.len(),
        content.published.len()
    );
    let empty = content.development.is_empty() && content.published.is_empty();

    let mut result = CommandResultViewModel::new(content);
    if empty {
        result = result
            .with_badge(StatusBadge::info("No views stored yet"))
            .with_suggestion(
                Guidance::new("Save a view JSON file as a draft")
                    .with_command("erpview view import <FILE>"),
            );
    } else {
        result = result.with_badge(StatusBadge::success(label));
    }
    result
}

pub fn present_view_detail(
    record: DevelopmentViewRecord,
    config: DynamicViewConfig,
) -> CommandResultViewModel<ViewDetailViewModel> {
    let status = record.status;
    let content = ViewDetailViewModel {
        component_count: config.total_components(),
        query_count: config.queries.len(),
        id: record.id,
        status: status.to_string(),
        created_by: record.created_by,
        created_at: record.created_at,
        updated_at: record.updated_at,
        config,
    };

    let promote_command = format!("erpview promote {} --module <ID>", content.id);

    let mut result = CommandResultViewModel::new(content);
    if status == DevelopmentStatus::Ready {
        result = result.with_suggestion(Guidance::new("Publish it").with_command(promote_command));
    }
    result
}

pub fn present_import(
    id: String,
    config: &DynamicViewConfig,
    report: &ValidationReport,
) -> CommandResultViewModel<ImportResultViewModel> {
    let content = ImportResultViewModel {
        id,
        name: config.name.clone(),
        alias: config.alias.clone(),
        component_count: config.total_components(),
        query_count: config.queries.len(),
        warnings: report.warnings().map(ToString::to_string).collect(),
    };
    let render_command = format!("erpview render {} --role admin", content.alias);

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Saved development view"))
        .with_suggestion(Guidance::new("Preview it").with_command(render_command))
}

pub fn present_validation(
    config: &DynamicViewConfig,
    report: &ValidationReport,
) -> CommandResultViewModel<ValidationViewModel> {
    let content = ValidationViewModel {
        name: config.name.clone(),
        alias: config.alias.clone(),
        valid: report.is_valid(),
        issues: report
            .issues
            .iter()
            .map(|issue| IssueEntry {
                severity: issue.severity(),
                message: issue.to_string(),
            })
            .collect(),
    };

    let error_count = report.errors().count();
    let warning_count = report.warnings().count();
    let badge = if error_count > 0 {
        StatusBadge::error(format!(
            "{} error(s), {} warning(s)",
            error_count, warning_count
        ))
    } else if warning_count > 0 {
        StatusBadge::warning(format!("Valid with {} warning(s)", warning_count))
    } else {
        StatusBadge::success("Valid")
    };

    CommandResultViewModel::new(content).with_badge(badge)
}

pub fn present_status_change(
    previous: DevelopmentStatus,
    record: DevelopmentViewRecord,
) -> CommandResultViewModel<StatusChangeViewModel> {
    CommandResultViewModel::new(StatusChangeViewModel {
        id: record.id,
        alias: record.alias,
        previous: previous.to_string(),
        status: record.status.to_string(),
    })
}

pub fn present_sql(
    query_id: &str,
    query_name: &str,
    sql: String,
) -> CommandResultViewModel<SqlPreviewViewModel> {
    CommandResultViewModel::new(SqlPreviewViewModel {
        query_id: query_id.to_string(),
        query_name: query_name.to_string(),
        sql,
    })
}

pub fn present_promotion(report: PromotionReport) -> CommandResultViewModel<PromotionViewModel> {
    let published = report.published;
    let content = PromotionViewModel {
        development_id: report.development_id,
        published_id: published.id,
        alias: published.alias,
        module_id: published.module_id,
        component_path: published.component_path,
        required_roles: published.required_roles,
        required_permissions: published.required_permissions,
    };
    let label = format!("Published '{}'", content.alias);
    CommandResultViewModel::new(content).with_badge(StatusBadge::success(label))
}
