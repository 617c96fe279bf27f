use crate::{err::Error, init::logging::LogLevel};
use config::{Config, File};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub address: String,
    pub port: u16,
    pub log_level: LogLevel,
}

impl Settings {
    /// Load the settings
    ///
    /// Defaults bind every interface on port 8080. A config file is only read
    /// when a path is given, and must exist in that case.
    ///
    /// # Arguments
    /// * `config_file` - Optional path to a config file
    pub fn new(config_file: Option<String>) -> Result<Self, Error> {
        let mut builder = Config::builder()
            .set_default("address", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("log_level", "info")?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(&path).required(true));
        }

        let config = builder.build()?;

        Ok(Settings {
            address: config.get("address")?,
            port: config.get("port")?,
            log_level: config.get("log_level")?,
        })
    }

    /// The socket address the server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
        let ip: IpAddr = self.address.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn print(&self) {
        info!("Address: {}", self.address);
        info!("Port: {}", self.port);
        info!("Log level: {}", self.log_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs, process};

    fn write_config(name: &str, contents: &str) -> String {
        let path = env::temp_dir().join(format!("time-service-{}-{}.toml", name, process::id()));
        fs::write(&path, contents).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::new(None).unwrap();

        assert_eq!(settings.address, "0.0.0.0");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(
            settings.socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_config_file_overrides() {
        let path = write_config(
            "overrides",
            "address = \"127.0.0.1\"\nport = 9090\nlog_level = \"debug\"\n",
        );
        let settings = Settings::new(Some(path.clone())).unwrap();
        fs::remove_file(path).unwrap();

        assert_eq!(settings.port, 9090);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(
            settings.socket_addr().unwrap(),
            "127.0.0.1:9090".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_config_file_partial() {
        let path = write_config("partial", "port = 8181\n");
        let settings = Settings::new(Some(path.clone())).unwrap();
        fs::remove_file(path).unwrap();

        assert_eq!(settings.address, "0.0.0.0");
        assert_eq!(settings.port, 8181);
    }

    #[test]
    fn test_missing_config_file() {
        let path = env::temp_dir().join("time-service-does-not-exist.toml");
        assert!(matches!(
            Settings::new(Some(path.display().to_string())),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_invalid_port_in_config_file() {
        let path = write_config("bad-port", "port = \"eighty\"\n");
        let result = Settings::new(Some(path.clone()));
        fs::remove_file(path).unwrap();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_ipv6_address() {
        let settings = Settings {
            address: String::from("::"),
            port: 8080,
            log_level: LogLevel::Info,
        };

        assert_eq!(
            settings.socket_addr().unwrap(),
            "[::]:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_address() {
        let settings = Settings {
            address: String::from("localhost"),
            port: 8080,
            log_level: LogLevel::Info,
        };

        assert!(matches!(
            settings.socket_addr(),
            Err(Error::InvalidAddress(_))
        ));
    }
}
