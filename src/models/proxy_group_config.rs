/// Type of proxy group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyGroupType {
    Select,
}

impl ProxyGroupType {
    /// Get string representation of the proxy group type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyGroupType::Select => "select",
        }
    }
}

/// Configuration for a proxy group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyGroupConfig {
    /// Name of the proxy group
    pub name: String,
    /// Type of the proxy group
    pub group_type: ProxyGroupType,
    /// List of proxy names in this group
    pub proxies: Vec<String>,
}

impl ProxyGroupConfig {
    /// Create a new proxy group config
    pub fn new(name: String, group_type: ProxyGroupType) -> Self {
        Self {
            name,
            group_type,
            proxies: Vec::new(),
        }
    }

    /// Get string representation of the group type
    pub fn type_str(&self) -> &'static str {
        self.group_type.as_str()
    }

    /// Flow-style YAML entry, e.g. `{name: g, type: select, proxies: [a, b]}`
    pub fn to_flow_yaml(&self) -> String {
        format!(
            "{{name: {}, type: {}, proxies: [{}]}}",
            self.name,
            self.type_str(),
            self.proxies.join(", ")
        )
    }
}
