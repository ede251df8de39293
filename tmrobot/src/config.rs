use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use rodbus::AppDecodeLevel;

/// Address of the controller used when none is given
pub const DEFAULT_HOST: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 168, 132, 173)), 502);
/// Unit id of the controller used when none is given
pub const DEFAULT_UNIT_ID: u8 = 1;
/// Response timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Parameters used to open a session with the controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectConfig {
    /// socket address of the controller
    pub host: SocketAddr,
    /// Modbus unit id of the controller
    pub unit_id: u8,
    /// how long to wait for each response
    pub timeout: Duration,
    /// level of protocol decoding written to the log
    pub decode: AppDecodeLevel,
}

impl ConnectConfig {
    /// Default parameters for a controller at `host`
    pub fn new(host: SocketAddr) -> Self {
        Self {
            host,
            ..Self::default()
        }
    }
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            unit_id: DEFAULT_UNIT_ID,
            timeout: DEFAULT_TIMEOUT,
            decode: AppDecodeLevel::DataValues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_controller_on_the_standard_port() {
        let config = ConnectConfig::default();
        assert_eq!(config.host.to_string(), "192.168.132.173:502");
        assert_eq!(config.unit_id, 1);
        assert_eq!(config.timeout, Duration::from_secs(1));
    }

    #[test]
    fn new_only_overrides_the_host() {
        let host: SocketAddr = "127.0.0.1:1502".parse().unwrap();
        let config = ConnectConfig::new(host);
        assert_eq!(config.host, host);
        assert_eq!(config.unit_id, DEFAULT_UNIT_ID);
    }
}
