use std::fmt;

use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{ConfigStatus, GuidanceViewModel, InitResultViewModel};

// --------------------------------------------------------
// Guidance View (no command given)
// --------------------------------------------------------

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    palette: Palette,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for GuidanceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}\n", self.palette.bold("erpview - dynamic ERP views"))?;

        if !self.data.config_exists || !self.data.db_exists {
            writeln!(f, "Get started:")?;
            writeln!(f, "  erpview init\n")?;
            writeln!(f, "The init command will:")?;
            writeln!(f, "  1. Write the default config.toml")?;
            writeln!(f, "  2. Create the view database\n")?;
        } else {
            writeln!(f, "Quick commands:")?;
            writeln!(f, "  erpview view list                     # Stored views")?;
            writeln!(f, "  erpview view import <FILE>            # Save a view JSON as a draft")?;
            writeln!(f, "  erpview render <ALIAS> --role <ROLE>  # Open and draw a view")?;
            writeln!(f, "  erpview promote <ID> --module <ID>    # Publish a draft\n")?;
        }

        writeln!(f, "Data directory: {}", self.palette.dim(&self.data.data_dir))?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  erpview --help")
    }
}

// --------------------------------------------------------
// Init Result View
// --------------------------------------------------------

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
    palette: Palette,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for InitResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config_line = match self.data.config_status {
            ConfigStatus::Created => "written",
            ConfigStatus::Overwritten => "reset to defaults",
            ConfigStatus::LoadedExisting => "kept",
        };

        writeln!(
            f,
            "Config:      {} ({})",
            self.palette.cyan(&self.data.config_path),
            config_line
        )?;
        writeln!(f, "Database:    {}", self.palette.cyan(&self.data.db_path))?;
        writeln!(f, "Environment: {}", self.data.environment)?;
        writeln!(f, "Locale:      {}", self.data.locale)?;
        writeln!(
            f,
            "Views:       {} development, {} published",
            self.data.development_views, self.data.published_views
        )
    }
}
