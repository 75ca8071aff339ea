//! Logging setup.
//!
//! The subscriber is installed before configuration is loaded so warnings
//! raised while reading config are not lost. Its filter sits behind a reload
//! layer: once the config says debug mode is on, the filter is widened.

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    reload,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

pub const DEFAULT_FILTER: &str = "studyhub_web=info,studyhub_config=info,tower_http=info,warn";
pub const DEBUG_FILTER: &str = "studyhub_web=debug,studyhub_config=debug,tower_http=debug,info";

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Handle to the installed logging filter.
pub struct Logging {
    handle: FilterHandle,
    /// RUST_LOG was set; never override it.
    from_env: bool,
}

impl Logging {
    /// Install the global subscriber writing to stdout.
    pub fn init() -> anyhow::Result<Self> {
        let (filter, from_env) = match EnvFilter::try_from_default_env() {
            Ok(filter) => (filter, true),
            Err(_) => (EnvFilter::new(DEFAULT_FILTER), false),
        };
        let (subscriber, handle) = build_subscriber(std::io::stdout, filter);
        subscriber.try_init()?;
        Ok(Self { handle, from_env })
    }

    /// Switch to debug-level logging unless RUST_LOG chose the levels.
    pub fn enable_debug(&self) -> anyhow::Result<()> {
        if self.from_env {
            return Ok(());
        }
        self.handle.reload(EnvFilter::new(DEBUG_FILTER))?;
        Ok(())
    }
}

pub fn build_subscriber<W>(
    make_writer: W,
    filter: EnvFilter,
) -> (impl Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(make_writer).with_ansi(false));
    (subscriber, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use studyhub_config::Config;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_config_warnings_reach_startup_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studyhub.toml");
        std::fs::write(&path, "").unwrap();
        let path = path.to_str().unwrap().to_string();

        let out = Captured::default();
        let writer = out.clone();
        let (subscriber, _handle) =
            build_subscriber(move || writer.clone(), EnvFilter::new(DEFAULT_FILTER));

        let config = tracing::subscriber::with_default(subscriber, || {
            Config::load_with(|key| match key {
                "STUDYHUB_CONFIG" => Some(path.clone()),
                "STUDYHUB_PORT" => Some("not-a-port".to_string()),
                _ => None,
            })
        })
        .unwrap();

        assert_eq!(config.server.port, 5000);
        let logged = out.text();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("STUDYHUB_PORT"), "{logged}");
    }

    #[test]
    fn test_enable_debug_widens_filter() {
        let out = Captured::default();
        let writer = out.clone();
        let (subscriber, handle) =
            build_subscriber(move || writer.clone(), EnvFilter::new(DEFAULT_FILTER));
        let logging = Logging { handle, from_env: false };

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("before reload");
            logging.enable_debug().unwrap();
            tracing::debug!("after reload");
        });

        let logged = out.text();
        assert!(!logged.contains("before reload"), "{logged}");
        assert!(logged.contains("after reload"), "{logged}");
    }

    #[test]
    fn test_enable_debug_respects_rust_log() {
        let out = Captured::default();
        let writer = out.clone();
        let (subscriber, handle) =
            build_subscriber(move || writer.clone(), EnvFilter::new("warn"));
        let logging = Logging { handle, from_env: true };

        tracing::subscriber::with_default(subscriber, || {
            logging.enable_debug().unwrap();
            tracing::info!("still filtered");
        });

        assert!(!out.text().contains("still filtered"));
    }
}
