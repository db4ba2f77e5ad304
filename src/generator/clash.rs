//! Clash config generation
//!
//! The document is written line by line instead of going through a YAML
//! serializer, so the output shape (flow-style proxy entry, quoted rule) stays
//! byte-for-byte stable. Request values are inserted as-is without escaping.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALLOW_LAN, DEFAULT_EXTERNAL_CONTROLLER, DEFAULT_LOG_LEVEL, DEFAULT_MIXED_PORT,
    DEFAULT_SOCKS_PORT, PROXY_GROUP_NAME, PROXY_NAME,
};
use crate::models::{
    ProxyGroupConfig, ProxyGroupType, RenderError, RenderRequest, TemplateVariant,
};
use crate::utils::{yaml_bool, QueryParams};

/// Fixed preamble of every rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseConfig {
    pub port: u16,
    pub socks_port: u16,
    pub allow_lan: bool,
    pub log_level: String,
    pub external_controller: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_MIXED_PORT,
            socks_port: DEFAULT_SOCKS_PORT,
            allow_lan: DEFAULT_ALLOW_LAN,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            external_controller: DEFAULT_EXTERNAL_CONTROLLER.to_string(),
        }
    }
}

/// Fully formatted config for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes of the UTF-8 text
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns query parameters into a Clash config
///
/// Holds only immutable startup configuration, so one instance can be shared
/// by any number of workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRenderer {
    base: BaseConfig,
    variant: TemplateVariant,
}

impl ConfigRenderer {
    pub fn new(base: BaseConfig, variant: TemplateVariant) -> Self {
        Self { base, variant }
    }

    pub fn variant(&self) -> TemplateVariant {
        self.variant
    }

    /// Validate the query and render the document
    ///
    /// # Arguments
    /// * `params` - Decoded query parameters, only the first value of each key is used
    ///
    /// # Returns
    /// * `Ok(RenderedDocument)` - All fields were valid
    /// * `Err(RenderError)` - The first failed validation, in field order
    pub fn render(&self, params: &QueryParams) -> Result<RenderedDocument, RenderError> {
        let request = RenderRequest::from_query(params)?;
        Ok(self.render_request(&request))
    }

    /// Render an already validated request
    pub fn render_request(&self, request: &RenderRequest) -> RenderedDocument {
        let mut out = String::new();
        self.write_preamble(&mut out);

        out.push_str("proxies:\n");
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "  - {{name: {}, server: {}, port: {}, type: {}, cipher: {}, password: {}}}",
            PROXY_NAME,
            request.ip,
            request.port,
            request.proxy_type,
            request.cipher,
            request.password
        );

        if self.variant.has_rules() {
            let mut group =
                ProxyGroupConfig::new(PROXY_GROUP_NAME.to_string(), ProxyGroupType::Select);
            group.proxies.push(PROXY_NAME.to_string());

            out.push_str("proxy-groups:\n");
            let _ = writeln!(out, "  - {}", group.to_flow_yaml());
            out.push_str("rules:\n");
            let _ = writeln!(out, "  - 'MATCH,{}'", group.name);
        }

        RenderedDocument(out)
    }

    /// `writeln!` into a String cannot fail, results are discarded
    fn write_preamble(&self, out: &mut String) {
        let base = &self.base;
        let _ = writeln!(out, "port: {}", base.port);
        let _ = writeln!(out, "socks-port: {}", base.socks_port);
        let _ = writeln!(out, "allow-lan: {}", yaml_bool(base.allow_lan));
        let _ = writeln!(out, "mode: {}", self.variant.mode());
        let _ = writeln!(out, "log-level: {}", base.log_level);
        let _ = writeln!(out, "external-controller: {}", base.external_controller);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_query_string;

    const GLOBAL_DOC: &str = "port: 7890
socks-port: 7891
allow-lan: true
mode: global
log-level: info
external-controller: :9090
proxies:
  - {name: proxy, server: 1.2.3.4, port: 443, type: ss, cipher: aes-256-gcm, password: secret}
";

    fn renderer(variant: TemplateVariant) -> ConfigRenderer {
        ConfigRenderer::new(BaseConfig::default(), variant)
    }

    #[test]
    fn test_render_global() {
        let params = parse_query_string("ip=1.2.3.4&port=443&cipher=aes-256-gcm&password=secret");
        let doc = renderer(TemplateVariant::Global).render(&params).unwrap();
        assert_eq!(doc.as_str(), GLOBAL_DOC);
        assert_eq!(doc.len(), GLOBAL_DOC.len());
    }

    #[test]
    fn test_render_rule() {
        let params = parse_query_string("ip=1.2.3.4&port=443&cipher=aes-256-gcm&password=secret");
        let doc = renderer(TemplateVariant::Rule).render(&params).unwrap();
        let expected = GLOBAL_DOC.replace("mode: global", "mode: rule")
            + "proxy-groups:\n"
            + "  - {name: proxyGroup, type: select, proxies: [proxy]}\n"
            + "rules:\n"
            + "  - 'MATCH,proxyGroup'\n";
        assert_eq!(doc.as_str(), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let params = parse_query_string("ip=h&port=1&type=vmess&cipher=auto&password=p");
        let r = renderer(TemplateVariant::Rule);
        assert_eq!(r.variant(), TemplateVariant::Rule);
        assert_eq!(r.render(&params).unwrap(), r.render(&params).unwrap());
    }

    #[test]
    fn test_values_are_not_escaped() {
        let params = parse_query_string("ip=a%7Db&port=1&cipher=c,d&password=%7Bx%7D");
        let doc = renderer(TemplateVariant::Global).render(&params).unwrap();
        assert!(doc
            .as_str()
            .contains("server: a}b, port: 1, type: ss, cipher: c,d, password: {x}}"));
    }

    #[test]
    fn test_custom_base_config() {
        let base = BaseConfig {
            port: 8080,
            socks_port: 1080,
            allow_lan: false,
            log_level: "debug".to_string(),
            external_controller: "127.0.0.1:9090".to_string(),
        };
        let params = parse_query_string("ip=h&port=1&cipher=c&password=p");
        let doc = ConfigRenderer::new(base, TemplateVariant::Global)
            .render(&params)
            .unwrap();
        assert!(doc.as_str().starts_with(
            "port: 8080\nsocks-port: 1080\nallow-lan: false\nmode: global\nlog-level: debug\nexternal-controller: 127.0.0.1:9090\n"
        ));
    }

    #[test]
    fn test_render_error_is_passed_through() {
        let params = parse_query_string("ip=h&port=abc&cipher=c&password=p");
        let err = renderer(TemplateVariant::Rule).render(&params).unwrap_err();
        assert_eq!(err.message, "port must be integer");
    }
}
