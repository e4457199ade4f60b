use std::collections::BTreeSet;

/// Aliases of the compiled screens that exist without any stored record.
pub const STATIC_VIEW_ALIASES: &[&str] = &[
    "usr001", "usr002", "usr003", "usr004", "mcat01", "mcat02", "mdep01", "mdep02", "cr001",
    "cr002", "cr003",
];

/// Allow-list consulted by the last resolution tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAliases(BTreeSet<String>);

impl Default for StaticAliases {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StaticAliases {
    pub fn builtin() -> Self {
        Self(STATIC_VIEW_ALIASES.iter().map(|a| a.to_string()).collect())
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.0.contains(alias)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_list() {
        let aliases = StaticAliases::builtin();
        for alias in ["usr001", "usr004", "mcat02", "mdep01", "cr003"] {
            assert!(aliases.contains(alias), "{}", alias);
        }
        assert!(!aliases.contains("usr005"));
        assert!(!aliases.contains("USR001"));
        assert_eq!(aliases.iter().count(), 11);
    }

    #[test]
    fn test_extra_aliases() {
        let aliases = StaticAliases::builtin().with_extra(["fin001"]);
        assert!(aliases.contains("fin001"));
        assert!(aliases.contains("usr001"));
    }
}
