use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Filter used when `RUST_LOG` is not set.
///
/// Production keeps SQL statements and pool chatter out of the logs;
/// development shows request spans and statement timing.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,tower_http=info,sqlx=warn,sea_orm=warn"
    } else {
        "debug,tower_http=debug,hyper=info,sqlx=info,sea_orm=info"
    }
}

/// Install color-eyre for the binary's error reports.
///
/// Call first thing in `main`. Later calls are no-ops. Reports show the
/// failing location but not the environment section.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global subscriber.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events, targets hidden.
/// - **Development** (default): pretty-printed output with targets.
///
/// `tracing_error::ErrorLayer` is installed in both modes so eyre reports
/// carry span traces. `RUST_LOG` overrides [`default_filter`]. A second call
/// leaves the first subscriber in place.
///
/// # Example
///
/// ```ignore
/// use core_config::{Environment, tracing::{init_tracing, install_color_eyre}};
///
/// install_color_eyre();
/// init_tracing(&Environment::from_env());
/// ```
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let result = if environment.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init()
    };

    match result {
        Ok(_) => info!(environment = ?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, keeping existing subscriber"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_quieter_in_production() {
        let production = default_filter(&Environment::Production);
        let development = default_filter(&Environment::Development);

        assert!(production.starts_with("info"));
        assert!(production.contains("sea_orm=warn"));
        assert!(development.starts_with("debug"));
    }

    #[test]
    fn test_default_filters_parse() {
        for env in [Environment::Development, Environment::Production] {
            assert!(EnvFilter::try_new(default_filter(&env)).is_ok());
        }
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Production);
    }

    #[test]
    fn test_init_tracing_with_rust_log_env() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            init_tracing(&Environment::Production);
        });
    }
}
