//! Tracing with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → OTLP/JSON lines
//! ```
//!
//! Traces go to `~/.local/share/zellij/zelect/zelect-otlp.json`, rotated at
//! 5 MiB with three timestamped backups. The filter comes from the
//! `trace_level` plugin option (`info` by default) and accepts any
//! `EnvFilter` directive, e.g. `zelect=debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber installation
//! - [`exporter`]: Span exporter and tracer provider
//! - [`otlp`]: OTLP/JSON encoding
//! - [`rotating`]: Size-rotated line writer

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
