//! Fixed string constants shared by handlers, the store and the driver.
//!
//! Key names are a stable contract: anything reading the store after
//! parsing looks values up by these names.

/// Canonical true token for boolean options and derived flags.
pub const V_TRUE: &str = "true";

/// Canonical false token for boolean options.
pub const V_FALSE: &str = "false";

/// Derived key holding the log file path.
pub const PREF_LOG: &str = "log_file";

/// Derived key set to [`V_TRUE`] when logging goes to standard output.
pub const PREF_STDOUT_LOG: &str = "stdout_log";

/// Derived key holding the proxy spec exactly as given (`host:port`).
pub const PREF_HTTP_PROXY: &str = "http_proxy";

/// Derived key holding the proxy host.
pub const PREF_HTTP_PROXY_HOST: &str = "http_proxy_host";

/// Derived key holding the proxy port, as given.
pub const PREF_HTTP_PROXY_PORT: &str = "http_proxy_port";

/// Derived key set to [`V_TRUE`] once a proxy has been configured.
pub const PREF_HTTP_PROXY_ENABLED: &str = "http_proxy_enabled";

/// Sentinel log destination meaning "log to standard output".
pub const STDOUT_LOG_SENTINEL: &str = "-";
