//! Database port polling.

use std::fmt;
use std::time::{Duration, Instant};

use tokio::net::TcpStream;
use tokio::time;

use crate::config::DatabaseWaitConfig;
use crate::error::{StartupError, StartupResult};

/// Resolved address and timing for one readiness wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitTarget {
    pub host: String,
    pub port: u16,
    pub interval: Duration,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl fmt::Display for WaitTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Resolve the wait target, preferring the configured environment variables.
///
/// `lookup` is `std::env::var(..).ok()` in production.
pub fn resolve_target<F>(config: &DatabaseWaitConfig, lookup: F) -> WaitTarget
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup(&config.host_env)
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| config.host.clone());

    let port = match lookup(&config.port_env) {
        Some(raw) => match raw.trim().parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!(
                    variable = %config.port_env,
                    value = %raw,
                    fallback = config.port,
                    "Ignoring invalid database port"
                );
                config.port
            }
        },
        None => config.port,
    };

    WaitTarget {
        host,
        port,
        interval: Duration::from_millis(config.interval_ms),
        connect_timeout: Duration::from_millis(config.connect_timeout_ms),
        timeout: Duration::from_secs(config.timeout_secs),
    }
}

/// Poll the target until a TCP connection succeeds or the deadline passes.
///
/// Returns how long the wait took.
pub async fn wait_for_database(target: &WaitTarget) -> StartupResult<Duration> {
    let started = Instant::now();
    let addr = target.to_string();

    tracing::info!(
        addr = %addr,
        timeout_secs = target.timeout.as_secs(),
        "Waiting for database"
    );

    let poll = async {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            match time::timeout(target.connect_timeout, TcpStream::connect(addr.as_str())).await {
                Ok(Ok(_)) => return attempts,
                Ok(Err(e)) => {
                    tracing::debug!(addr = %addr, attempt = attempts, error = %e, "Database not ready");
                }
                Err(_) => {
                    tracing::debug!(addr = %addr, attempt = attempts, "Database connect timed out");
                }
            }
            time::sleep(target.interval).await;
        }
    };

    match time::timeout(target.timeout, poll).await {
        Ok(attempts) => {
            let waited = started.elapsed();
            tracing::info!(addr = %addr, attempts, waited_ms = waited.as_millis() as u64, "Database is ready");
            Ok(waited)
        }
        Err(_) => {
            let waited = started.elapsed();
            tracing::error!(addr = %addr, waited_ms = waited.as_millis() as u64, "Database never became ready");
            Err(StartupError::DatabaseUnavailable { addr, waited })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    fn target(port: u16, timeout: Duration) -> WaitTarget {
        WaitTarget {
            host: "127.0.0.1".into(),
            port,
            interval: Duration::from_millis(20),
            connect_timeout: Duration::from_millis(200),
            timeout,
        }
    }

    #[test]
    fn test_resolve_prefers_environment() {
        let config = DatabaseWaitConfig::default();
        let env: HashMap<&str, &str> = [("DB_HOST", "db"), ("DB_PORT", "6543")].into();

        let resolved = resolve_target(&config, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(resolved.host, "db");
        assert_eq!(resolved.port, 6543);
        assert_eq!(resolved.interval, Duration::from_millis(100));
        assert_eq!(resolved.to_string(), "db:6543");
    }

    #[test]
    fn test_resolve_falls_back_to_config() {
        let config = DatabaseWaitConfig::default();
        let env: HashMap<&str, &str> = [("DB_HOST", ""), ("DB_PORT", "not-a-port")].into();

        let resolved = resolve_target(&config, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(resolved.host, "localhost");
        assert_eq!(resolved.port, 5432);
    }

    #[tokio::test]
    async fn test_returns_once_port_accepts() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let waited = wait_for_database(&target(port, Duration::from_secs(5)))
            .await
            .unwrap();
        assert!(waited < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_waits_for_late_listener() {
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = probe.local_addr().unwrap();
        drop(probe);

        tokio::spawn(async move {
            time::sleep(Duration::from_millis(150)).await;
            let listener = TcpListener::bind(addr).await.unwrap();
            time::sleep(Duration::from_secs(5)).await;
            drop(listener);
        });

        let waited = wait_for_database(&target(addr.port(), Duration::from_secs(5)))
            .await
            .unwrap();
        assert!(waited >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_times_out_on_closed_port() {
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let err = wait_for_database(&target(port, Duration::from_millis(300)))
            .await
            .unwrap_err();
        match err {
            StartupError::DatabaseUnavailable { addr, waited } => {
                assert_eq!(addr, format!("127.0.0.1:{}", port));
                assert!(waited >= Duration::from_millis(300));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
