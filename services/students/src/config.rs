use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9090";

// Student service configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct StudentsConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
}

#[derive(Debug, Deserialize)]
struct StudentsConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
}

impl StudentsConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("STUDENTS_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse STUDENTS_BIND")?;
        let metrics_bind = std::env::var("STUDENTS_METRICS_BIND")
            .unwrap_or_else(|_| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse STUDENTS_METRICS_BIND")?;
        Ok(Self {
            bind_addr,
            metrics_bind,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("STUDENTS_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read STUDENTS_CONFIG: {path}"))?;
            let override_cfg: StudentsConfigOverride = serde_yaml::from_str(&contents)
                .with_context(|| "parse students config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    struct EnvGuard {
        key: &'static str,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe {
                std::env::set_var(key, value);
            }
            Self { key, prev }
        }

        fn unset(key: &'static str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe {
                std::env::remove_var(key);
            }
            Self { key, prev }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.prev {
                Some(value) => unsafe {
                    std::env::set_var(self.key, value);
                },
                None => unsafe {
                    std::env::remove_var(self.key);
                },
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_env() {
        let _g1 = EnvGuard::unset("STUDENTS_BIND");
        let _g2 = EnvGuard::unset("STUDENTS_METRICS_BIND");
        let _g3 = EnvGuard::unset("STUDENTS_CONFIG");

        let config = StudentsConfig::from_env_or_yaml().expect("config");
        assert_eq!(config.bind_addr, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.metrics_bind, DEFAULT_METRICS_BIND.parse::<SocketAddr>().unwrap());
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        let _g1 = EnvGuard::set("STUDENTS_BIND", "127.0.0.1:7000");
        let _g2 = EnvGuard::set("STUDENTS_METRICS_BIND", "127.0.0.1:7001");
        let _g3 = EnvGuard::unset("STUDENTS_CONFIG");

        let config = StudentsConfig::from_env_or_yaml().expect("config");
        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.metrics_bind, "127.0.0.1:7001".parse::<SocketAddr>().unwrap());
    }

    #[test]
    #[serial]
    fn invalid_bind_is_reported() {
        let _g1 = EnvGuard::set("STUDENTS_BIND", "not-an-addr");
        let err = StudentsConfig::from_env().expect_err("invalid bind");
        assert!(err.to_string().contains("STUDENTS_BIND"));
    }

    #[test]
    #[serial]
    fn yaml_overrides_env() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "bind_addr: \"127.0.0.1:7100\"").expect("write");
        let path = file.path().to_string_lossy().to_string();

        let _g1 = EnvGuard::set("STUDENTS_BIND", "127.0.0.1:7000");
        let _g2 = EnvGuard::set("STUDENTS_METRICS_BIND", "127.0.0.1:7001");
        let _g3 = EnvGuard::set("STUDENTS_CONFIG", &path);

        let config = StudentsConfig::from_env_or_yaml().expect("config");
        assert_eq!(config.bind_addr, "127.0.0.1:7100".parse::<SocketAddr>().unwrap());
        assert_eq!(config.metrics_bind, "127.0.0.1:7001".parse::<SocketAddr>().unwrap());
    }

    #[test]
    #[serial]
    fn missing_yaml_file_is_reported() {
        let _g1 = EnvGuard::unset("STUDENTS_BIND");
        let _g2 = EnvGuard::unset("STUDENTS_METRICS_BIND");
        let _g3 = EnvGuard::set("STUDENTS_CONFIG", "/nonexistent/students.yaml");

        let err = StudentsConfig::from_env_or_yaml().expect_err("missing file");
        assert!(err.to_string().contains("STUDENTS_CONFIG"));
    }
}
