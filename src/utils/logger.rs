use std::fmt::Write as _;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{ConfigError, LoggingConfig};

/// Collects event fields as JSON attributes, renaming the dotted OTel keys.
#[derive(Default)]
struct AttributeVisitor {
    attributes: Map<String, Value>,
}

impl AttributeVisitor {
    fn put(&mut self, field: &Field, value: Value) {
        let key = match field.name() {
            "event_name" => "event.name",
            "event_domain" => "event.domain",
            other => other,
        };
        self.attributes.insert(key.to_string(), value);
    }
}

impl Visit for AttributeVisitor {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, Value::from(format!("{:?}", value)));
    }
}

/// One JSON object per line, shaped like an OpenTelemetry log record.
#[derive(Clone)]
struct OtelJsonFormat {
    resource: Map<String, Value>,
}

impl OtelJsonFormat {
    fn new(config: &LoggingConfig) -> Self {
        let mut resource = Map::new();
        resource.insert("service.name".into(), config.service_name.clone().into());
        resource.insert(
            "service.version".into(),
            config.service_version.clone().into(),
        );
        Self { resource }
    }

    fn record(&self, event: &Event<'_>) -> Value {
        let metadata = event.metadata();
        let mut visitor = AttributeVisitor::default();
        event.record(&mut visitor);
        let mut attributes = visitor.attributes;

        let body = match attributes.remove("message") {
            Some(Value::String(message)) => message,
            _ => metadata.name().to_string(),
        };
        attributes.insert("code.target".into(), metadata.target().into());
        if let Some(file) = metadata.file() {
            attributes.insert("code.filepath".into(), file.into());
        }
        if let Some(line) = metadata.line() {
            attributes.insert("code.lineno".into(), line.into());
        }

        serde_json::json!({
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "severity_text": metadata.level().as_str(),
            "severity_number": severity_number(metadata.level()),
            "body": body,
            "resource": self.resource,
            "attributes": attributes,
        })
    }
}

fn severity_number(level: &Level) -> u64 {
    match *level {
        Level::TRACE => 1,
        Level::DEBUG => 5,
        Level::INFO => 9,
        Level::WARN => 13,
        Level::ERROR => 17,
    }
}

impl<S, N> FormatEvent<S, N> for OtelJsonFormat
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let line = serde_json::to_string(&self.record(event)).map_err(|_| std::fmt::Error)?;
        writeln!(writer, "{}", line)
    }
}

/// Parse a `logging.level` value.
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(level.to_string())),
    }
}

/// Install the global subscriber. `RUST_LOG` directives refine the configured level.
/// Calling it twice keeps the first subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let level = parse_level(&config.level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let installed = match config.format.to_lowercase().as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().event_format(OtelJsonFormat::new(config)))
            .try_init(),
        // "console" and anything unknown
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };
    if installed.is_err() {
        tracing::debug!("Global tracing subscriber already installed; keeping it.");
    }
    Ok(())
}
