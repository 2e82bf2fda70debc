use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt};

use crate::error::{MugshotError, MugshotResult};

/// Stream the terminal layer writes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TerminalOutput {
    #[default]
    Stdout,
    /// Keeps stdout clean for program output, e.g. JSON piped into another tool.
    Stderr,
}

impl TerminalOutput {
    fn make_writer(self) -> BoxMakeWriter {
        match self {
            TerminalOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
            TerminalOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: tracing::Level,
    pub logging_enabled: bool,
    pub logger_name: String,
    /// Directory for the rolling log files. Defaults to `<tmp>/mugshot_logs`.
    pub log_dir: Option<PathBuf>,
    pub terminal_output: TerminalOutput,
    pub _tracing_guard: Option<std::sync::Arc<tracing::subscriber::DefaultGuard>>,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            logging_enabled: false,
            logger_name: "mugshot".to_string(),
            log_dir: None,
            terminal_output: TerminalOutput::default(),
            _tracing_guard: None,
        }
    }
}

impl LoggingConfig {
    pub(crate) fn load_logger(&mut self) -> MugshotResult<()> {
        self._tracing_guard = if self.logging_enabled {
            Some(std::sync::Arc::new(self.create_logger()?))
        } else {
            None
        };
        Ok(())
    }

    pub(crate) fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("mugshot_logs"))
    }

    fn create_logger(&mut self) -> MugshotResult<tracing::subscriber::DefaultGuard> {
        let log_dir = self.resolved_log_dir();

        if !Path::new(&log_dir).exists() {
            create_dir_all(&log_dir).map_err(|e| {
                MugshotError::Logging(format!("failed to create {}: {e}", log_dir.display()))
            })?;
        }

        let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
            .rotation(tracing_appender::rolling::Rotation::HOURLY)
            .max_log_files(6)
            .filename_prefix(&self.logger_name)
            .filename_suffix("log")
            .build(&log_dir)
            .map_err(|e| MugshotError::Logging(e.to_string()))?;

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(self.level.into())
            .parse_lossy("");

        let file_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(false)
            .with_writer(file_appender);

        let terminal_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(true)
            .with_writer(self.terminal_output.make_writer());

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(terminal_layer);

        Ok(tracing::subscriber::set_default(subscriber))
    }
}

pub trait LoggingConfigTrait {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig;

    /// Installs the subscriber as the default for the thread that builds the client.
    ///
    /// The guard is thread-local: calls made from tasks running on other runtime
    /// threads are not captured, and dropping the last client clone on another
    /// thread resets that thread's default rather than the building thread's.
    /// Build and use the client on one thread (e.g. a current-thread runtime) to
    /// capture every call.
    fn logging_enabled(mut self, enabled: bool) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().logging_enabled = enabled;
        self
    }

    fn logger_name<S: Into<String>>(mut self, logger_name: S) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().logger_name = logger_name.into();
        self
    }

    fn log_dir<P: Into<PathBuf>>(mut self, log_dir: P) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().log_dir = Some(log_dir.into());
        self
    }

    /// Sends terminal logs to stderr instead of stdout.
    fn log_to_stderr(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().terminal_output = TerminalOutput::Stderr;
        self
    }

    /// Sets the log level to TRACE.
    ///
    /// Request and response bodies are logged at this level.
    fn log_level_trace(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::TRACE;
        self
    }

    /// Sets the log level to DEBUG.
    ///
    /// Endpoint URLs and response statuses are logged at this level.
    fn log_level_debug(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::DEBUG;
        self
    }

    fn log_level_info(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::INFO;
        self
    }

    fn log_level_warn(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::WARN;
        self
    }

    /// Sets the log level to ERROR.
    ///
    /// Non-success statuses and undecodable bodies are logged at this level.
    fn log_level_error(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::ERROR;
        self
    }
}

impl LoggingConfigTrait for LoggingConfig {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        self
    }
}
