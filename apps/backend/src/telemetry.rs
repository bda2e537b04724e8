use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default filter. Output is JSON lines unless
/// `LIBRARY_LOG_FORMAT=pretty`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let pretty = std::env::var("LIBRARY_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("pretty"));

    let json_layer = (!pretty).then(|| {
        fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .with_span_list(false)
            .with_ansi(false)
    });
    let pretty_layer = pretty.then(|| fmt::layer().with_target(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();
}
