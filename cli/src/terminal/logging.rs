use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Renders events the way the rest of the terminal output already looks:
/// one marker, then the message. Info lines blend in with the converter's
/// `>`-prefixed output; anything noisier names its level outright.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_marker(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_marker(level: Level) -> ColoredString {
    if level == Level::ERROR {
        "error:".red().bold()
    } else if level == Level::WARN {
        "warning:".yellow().bold()
    } else if level == Level::DEBUG {
        "debug:".blue()
    } else if level == Level::TRACE {
        "trace:".bright_black()
    } else {
        ">".bright_green()
    }
}

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(LineFormat)
        .init();
}
