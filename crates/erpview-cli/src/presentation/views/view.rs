use std::fmt;

use crate::presentation::formatters::{Palette, truncate};
use crate::presentation::view_models::{
    ImportResultViewModel, PromotionViewModel, ResolveViewModel, SqlPreviewViewModel,
    StatusChangeViewModel, ValidationViewModel, ViewDetailViewModel, ViewListViewModel,
};
use erpview_types::{Severity, ViewType};

// --------------------------------------------------------
// Resolve View
// --------------------------------------------------------

pub struct ResolveView<'a> {
    data: &'a ResolveViewModel,
    palette: Palette,
}

impl<'a> ResolveView<'a> {
    pub fn new(data: &'a ResolveViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for ResolveView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let resolved = &self.data.resolved;
        let tier = match resolved.view_type {
            ViewType::Database => "database",
            ViewType::Development => "development",
            ViewType::Hardcoded => "hardcoded",
        };

        writeln!(f, "Alias:     {}", self.palette.bold(&resolved.view_id))?;
        writeln!(f, "Role:      {}", self.data.role)?;
        writeln!(f, "View type: {}", tier)?;
        if let Some(path) = &resolved.component_path {
            writeln!(f, "Path:      {}", self.palette.cyan(path))?;
        }
        if let Some(config) = &resolved.config {
            writeln!(f, "Name:      {}", config.name)?;
            writeln!(
                f,
                "Contents:  {} components, {} queries",
                config.total_components(),
                config.queries.len()
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// View List View
// --------------------------------------------------------

pub struct ViewListView<'a> {
    data: &'a ViewListViewModel,
    palette: Palette,
}

impl<'a> ViewListView<'a> {
    pub fn new(data: &'a ViewListViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for ViewListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.palette.bold("Development views"))?;
        if self.data.development.is_empty() {
            writeln!(f, "  (none)")?;
        } else {
            writeln!(
                f,
                "  {:<36} {:<10} {:<12} {:<24} UPDATED",
                "ID", "ALIAS", "STATUS", "NAME"
            )?;
            for entry in &self.data.development {
                writeln!(
                    f,
                    "  {:<36} {:<10} {:<12} {:<24} {}",
                    entry.id,
                    entry.alias,
                    entry.status,
                    truncate(&entry.name, 24),
                    self.palette.dim(&entry.updated_at)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", self.palette.bold("Published views"))?;
        if self.data.published.is_empty() {
            writeln!(f, "  (none)")?;
        } else {
            writeln!(
                f,
                "  {:<10} {:<10} {:<10} {:<20} PATH",
                "ALIAS", "MODULE", "STATUS", "ROLES"
            )?;
            for entry in &self.data.published {
                writeln!(
                    f,
                    "  {:<10} {:<10} {:<10} {:<20} {}",
                    entry.alias,
                    entry.module_id,
                    entry.status,
                    truncate(&entry.required_roles.join(","), 20),
                    self.palette.cyan(&entry.component_path)
                )?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// View Detail View
// --------------------------------------------------------

pub struct ViewDetailView<'a> {
    data: &'a ViewDetailViewModel,
    palette: Palette,
}

impl<'a> ViewDetailView<'a> {
    pub fn new(data: &'a ViewDetailViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for ViewDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config = &self.data.config;
        writeln!(
            f,
            "{}  {}",
            self.palette.bold(&config.name),
            self.palette.dim(&format!("({})", config.alias))
        )?;
        if !config.description.is_empty() {
            writeln!(f, "{}", config.description)?;
        }
        writeln!(f)?;
        writeln!(f, "ID:         {}", self.data.id)?;
        writeln!(f, "Status:     {}", self.data.status)?;
        writeln!(f, "Author:     {}", self.data.created_by)?;
        writeln!(f, "Version:    {}", config.metadata.version)?;
        writeln!(f, "Created:    {}", self.data.created_at)?;
        writeln!(f, "Updated:    {}", self.data.updated_at)?;
        writeln!(f, "Layout:     {} columns", config.layout.grid_cols)?;
        writeln!(f, "Components: {}", self.data.component_count)?;
        for component in &config.components {
            let mut lines = Vec::new();
            component.walk(1, &mut |c, depth| {
                lines.push(format!(
                    "{}{} ({})",
                    "  ".repeat(depth),
                    c.id,
                    c.kind_name()
                ))
            });
            for line in lines {
                writeln!(f, "{}", line)?;
            }
        }
        writeln!(f, "Queries:    {}", self.data.query_count)?;
        for query in &config.queries {
            writeln!(f, "  {} ({})", query.id, query.name)?;
        }
        if !config.data_sources.is_empty() {
            writeln!(f, "Sources:    {}", config.data_sources.join(", "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Import Result View
// --------------------------------------------------------

pub struct ImportResultView<'a> {
    data: &'a ImportResultViewModel,
    palette: Palette,
}

impl<'a> ImportResultView<'a> {
    pub fn new(data: &'a ImportResultViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for ImportResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "ID:    {}", self.palette.cyan(&self.data.id))?;
        writeln!(f, "Alias: {}", self.data.alias)?;
        writeln!(f, "Name:  {}", self.data.name)?;
        writeln!(
            f,
            "Saved {} components and {} queries",
            self.data.component_count, self.data.query_count
        )?;
        for warning in &self.data.warnings {
            writeln!(f, "{} {}", self.palette.yellow("warning:"), warning)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Validation View
// --------------------------------------------------------

pub struct ValidationView<'a> {
    data: &'a ValidationViewModel,
    palette: Palette,
}

impl<'a> ValidationView<'a> {
    pub fn new(data: &'a ValidationViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for ValidationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.issues.is_empty() {
            return writeln!(f, "No issues found.");
        }
        for issue in &self.data.issues {
            let label = match issue.severity {
                Severity::Error => self.palette.red("error:"),
                Severity::Warning => self.palette.yellow("warning:"),
            };
            writeln!(f, "{} {}", label, issue.message)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Status Change View
// --------------------------------------------------------

pub struct StatusChangeView<'a> {
    data: &'a StatusChangeViewModel,
    palette: Palette,
}

impl<'a> StatusChangeView<'a> {
    pub fn new(data: &'a StatusChangeViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for StatusChangeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} ({}): {} -> {}",
            self.data.alias,
            self.palette.dim(&self.data.id),
            self.data.previous,
            self.palette.bold(&self.data.status)
        )
    }
}

// --------------------------------------------------------
// SQL Preview View
// --------------------------------------------------------

pub struct SqlPreviewView<'a> {
    data: &'a SqlPreviewViewModel,
}

impl<'a> SqlPreviewView<'a> {
    pub fn new(data: &'a SqlPreviewViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for SqlPreviewView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Bare SQL so the output can be piped into a client
        writeln!(f, "{}", self.data.sql)
    }
}

// --------------------------------------------------------
// Promotion View
// --------------------------------------------------------

pub struct PromotionView<'a> {
    data: &'a PromotionViewModel,
    palette: Palette,
}

impl<'a> PromotionView<'a> {
    pub fn new(data: &'a PromotionViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for PromotionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Alias:        {}", self.palette.bold(&self.data.alias))?;
        writeln!(f, "Module:       {}", self.data.module_id)?;
        writeln!(f, "Published id: {}", self.data.published_id)?;
        writeln!(f, "Path:         {}", self.palette.cyan(&self.data.component_path))?;
        writeln!(f, "Roles:        {}", self.data.required_roles.join(", "))?;
        if !self.data.required_permissions.is_empty() {
            writeln!(
                f,
                "Permissions:  {}",
                self.data.required_permissions.join(", ")
            )?;
        }
        Ok(())
    }
}
