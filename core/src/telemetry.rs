//! Tracing bootstrap for binaries embedding the domain services

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DomainConfig;

/// Initialize the global tracing subscriber.
///
/// JSON output in production (better for log aggregation), pretty output
/// for development. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if DomainConfig::is_production() {
            "homehub_core=info".into()
        } else {
            "homehub_core=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if DomainConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
