use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "VADFRAME_LOG";

/// Initialize structured JSON logging.
///
/// Defaults to `error` level unless overridden by `VADFRAME_LOG`. The framer logs one `debug`
/// event per `process` call (sample, frame and remainder counts) and one `trace` event per
/// classified frame, so `VADFRAME_LOG=vadframe=debug` is usually the useful setting.
pub fn init() {
    init_with_default(LevelFilter::ERROR);
}

/// Like [`init`], with `default` used when `VADFRAME_LOG` is unset or unparseable.
pub fn init_with_default(default: LevelFilter) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(default))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true),
        )
        .try_init();
}

fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(default.into())
        .from_env_lossy()
}
