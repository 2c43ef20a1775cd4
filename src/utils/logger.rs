use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

const DEFAULT_DIRECTIVES: &str = "lang_showcase=info";
const VERBOSE_DIRECTIVES: &str = "lang_showcase=debug,info";

/// How log records are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// `RUST_LOG` wins over the built-in directives.
fn env_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// The fmt layer for `format`, always writing to stderr since stdout carries
/// the demo output.
fn stderr_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    match format {
        LogFormat::Compact => layer
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer(format))
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(LogFormat::Compact, verbose);
}

/// Machine-readable variant for piping logs into other tools.
pub fn init_json_logger() {
    init_logger(LogFormat::Json, false);
}
