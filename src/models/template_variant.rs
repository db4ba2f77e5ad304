use serde::{Deserialize, Serialize};

/// Document shape emitted by a server instance, fixed at startup
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// `mode: global`, proxies only
    #[default]
    Global,
    /// `mode: rule`, plus one select group and a catch-all rule
    Rule,
}

impl TemplateVariant {
    /// Value of the `mode` key
    pub fn mode(&self) -> &'static str {
        match self {
            TemplateVariant::Global => "global",
            TemplateVariant::Rule => "rule",
        }
    }

    /// Whether the document carries `proxy-groups` and `rules` sections
    pub fn has_rules(&self) -> bool {
        matches!(self, TemplateVariant::Rule)
    }
}

impl std::fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode() {
        assert_eq!(TemplateVariant::default().mode(), "global");
        assert!(TemplateVariant::Rule.has_rules());
        assert!(!TemplateVariant::Global.has_rules());
    }
}
