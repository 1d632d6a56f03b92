//! Tracing subscriber setup
//!
//! Diagnostics go through `tracing`. Stdout belongs to the program's own
//! output, so by default the subscriber writes to stderr and stays quiet below
//! WARN. `RUST_LOG` overrides the configured level.
//!
//! ```rust,no_run
//! use highorder::{init_logging, Config};
//!
//! let config = Config::load().unwrap_or_default();
//! init_logging(&config.logging);
//! ```

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogOutput, LoggingConfig};

/// Formatter that omits the INFO prefix and adds target plus file:line only
/// for ERROR and WARN
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionalLocationFormatter;

impl<S, N> FormatEvent<S, N> for ConditionalLocationFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = metadata.level();

        // Format level (skip INFO prefix for cleaner default-level output)
        if *level != Level::INFO {
            write!(writer, "{}", level)?;
            // Only show module target and file:line for ERROR and WARN levels
            if matches!(*level, Level::ERROR | Level::WARN) {
                write!(writer, " {}", metadata.target())?;
                if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
                    write!(writer, " {}:{}", file, line)?;
                }
            }
            write!(writer, ": ")?;
        }

        // Span context, outermost first
        if let Some(scope) = ctx.event_scope() {
            let mut first = true;
            for span in scope.from_root() {
                if !first {
                    write!(writer, ":")?;
                }
                first = false;
                write!(writer, "{}", span.name())?;
            }
            write!(writer, " ")?;
        }

        // Write the event fields
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Env filter from RUST_LOG, falling back to `default_level`
pub fn create_base_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber described by `config`.
///
/// Returns false if a subscriber was already installed, which happens when
/// several tests initialise logging in one process.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env_filter = create_base_env_filter(&config.level);

    // Colour only when the destination is a terminal
    let result = match config.output {
        LogOutput::Stderr => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .event_format(ConditionalLocationFormatter))
            .try_init(),
        LogOutput::Stdout => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(std::io::stdout().is_terminal())
                .event_format(ConditionalLocationFormatter))
            .try_init(),
    };

    result.is_ok()
}
