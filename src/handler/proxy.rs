//! HTTP proxy (`host:port`) handler.

use crate::prefs::{
    PREF_HTTP_PROXY, PREF_HTTP_PROXY_ENABLED, PREF_HTTP_PROXY_HOST, PREF_HTTP_PROXY_PORT, V_TRUE,
};
use crate::store::OptionStore;

use super::ValidationError;

/// Host and port split out of a `host:port` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPort<'a> {
    /// Text before the separator
    pub host: &'a str,
    /// Text after the separator, as given
    pub port: &'a str,
}

impl<'a> HostPort<'a> {
    /// Splits and validates a `host:port` string.
    ///
    /// Rules, in order: exactly one `:`; host and port non-empty; port is a
    /// number in 0-65535.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated.
    ///
    /// # Example
    ///
    /// ```
    /// use optval::handler::HostPort;
    ///
    /// let hp = HostPort::parse("proxy.local:8080").unwrap();
    /// assert_eq!(hp.host, "proxy.local");
    /// assert_eq!(hp.port, "8080");
    /// assert!(HostPort::parse(":8080").is_err());
    /// ```
    pub fn parse(value: &'a str) -> Result<Self, ValidationError> {
        let (host, port) = value
            .split_once(':')
            .filter(|(_, port)| !port.contains(':'))
            .ok_or_else(|| ValidationError::MissingSeparator {
                value: value.to_string(),
            })?;

        if host.is_empty() || port.is_empty() {
            return Err(ValidationError::EmptyHostOrPort {
                value: value.to_string(),
            });
        }

        port.parse::<u16>()
            .map_err(|_| ValidationError::InvalidPort {
                port: port.to_string(),
            })?;

        Ok(Self { host, port })
    }
}

/// Validates a `host:port` proxy and writes the four derived proxy keys.
///
/// Nothing is written unless the whole value is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProxyHandler {
    name: String,
}

impl HttpProxyHandler {
    /// Creates a proxy handler bound to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the bound option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parses `arg` and stores spec, host, port and the enabled flag.
    ///
    /// # Errors
    ///
    /// Returns an error if `arg` is not a valid `host:port`.
    #[allow(clippy::unused_self)]
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        let HostPort { host, port } = HostPort::parse(arg)?;

        store.put(PREF_HTTP_PROXY, arg);
        store.put(PREF_HTTP_PROXY_HOST, host);
        store.put(PREF_HTTP_PROXY_PORT, port);
        store.put(PREF_HTTP_PROXY_ENABLED, V_TRUE);
        Ok(())
    }
}
