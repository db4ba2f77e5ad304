// Fixed values of the rendered Clash preamble and of the listener
pub const DEFAULT_MIXED_PORT: u16 = 7890;
pub const DEFAULT_SOCKS_PORT: u16 = 7891;
pub const DEFAULT_ALLOW_LAN: bool = true;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_EXTERNAL_CONTROLLER: &str = ":9090";

/// Proxy protocol used when the request carries no `type`
pub const DEFAULT_PROXY_TYPE: &str = "ss";

/// Name of the single generated proxy entry
pub const PROXY_NAME: &str = "proxy";
/// Name of the select group emitted by the rule template
pub const PROXY_GROUP_NAME: &str = "proxyGroup";

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_LISTEN_PORT: u16 = 11356;
pub const DEFAULT_WORKERS: usize = 4;
