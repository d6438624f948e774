use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings resolved from `TM_LOG_*` and `RUST_LOG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub app_name: &'static str,
    pub format: LogFormat,
    /// Daily-rotated file output directory; stdout when `None`.
    pub dir: Option<PathBuf>,
    pub include_backtrace: bool,
}

impl LoggingConfig {
    pub fn from_env(app_name: &'static str) -> Self {
        let format = match std::env::var("TM_LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            app_name,
            format,
            dir: std::env::var_os("TM_LOG_DIR").map(PathBuf::from),
            include_backtrace: std::env::var("TM_LOG_INCLUDE_BACKTRACE")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

/// Routes panics through `tracing` so they land in the same sink as other events.
/// Installed at most once per process.
pub fn install_tracing_panic_hook(config: &LoggingConfig) {
    static INSTALLED: OnceLock<()> = OnceLock::new();
    let app_name = config.app_name;
    let include_backtrace = config.include_backtrace;

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();

        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            let location = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(
                application = app_name,
                thread_name = thread.name().unwrap_or("unknown"),
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

fn file_writer(config: &LoggingConfig) -> Option<BoxMakeWriter> {
    let dir = config.dir.as_ref()?;
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!("failed to create TM_LOG_DIR ({err}); logging to stdout");
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{}.log", config.app_name));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(non_blocking))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_tracing_subscriber(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = file_writer(config).unwrap_or_else(|| BoxMakeWriter::new(std::io::stdout));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer);

    match config.format {
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
        LogFormat::Text => {
            let _ = builder.try_init();
        }
    }
}
