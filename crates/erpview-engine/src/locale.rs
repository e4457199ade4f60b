use erpview_types::parse_timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale used for the dates shown to end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// `dd/mm/yyyy HH:MM:SS`
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// `mm/dd/yyyy hh:MM:SS AM`
    #[serde(rename = "en-US")]
    EnUs,
    /// RFC 3339, unchanged.
    #[serde(rename = "iso")]
    Iso,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
            Locale::Iso => "iso",
        }
    }

    /// Format an ISO-8601 timestamp. Unparseable input is returned verbatim.
    pub fn format_timestamp(&self, ts: &str) -> String {
        let Some(at) = parse_timestamp(ts) else {
            return ts.to_string();
        };
        match self {
            Locale::PtBr => at.format("%d/%m/%Y %H:%M:%S").to_string(),
            Locale::EnUs => at.format("%m/%d/%Y %I:%M:%S %p").to_string(),
            Locale::Iso => ts.to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en_us" | "en" => Ok(Locale::EnUs),
            "iso" => Ok(Locale::Iso),
            other => Err(format!("unknown locale: {}", other)),
        }
    }
}
