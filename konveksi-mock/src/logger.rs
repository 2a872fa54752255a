//! Logging Infrastructure
//!
//! Console output (pretty or JSON) filtered by `RUST_LOG` or the configured
//! level, plus optional daily rotating files:
//! - `app/`: everything except audit and security events
//! - `audit/`: order mutations (`audit_log!`)
//! - `security/`: rejected admin requests (`security_log!`)

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

fn is_audit_or_security(target: &str) -> bool {
    target == "audit" || target == "security"
}

/// Initialize logging
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// konveksi_mock::logger::init_logger_with_file("debug", false, None)?;
///
/// // Production-like setup (JSON console + files)
/// konveksi_mock::logger::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let mut file_layers = Vec::new();
    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        for sub in ["app", "audit", "security"] {
            fs::create_dir_all(log_dir.join(sub))?;
        }

        let app_log = RollingFileAppender::new(Rotation::DAILY, log_dir.join("app"), "app");
        file_layers.push(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    !is_audit_or_security(meta.target())
                }))
                .boxed(),
        );

        for target in ["audit", "security"] {
            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir.join(target), target);
            file_layers.push(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::sync::Mutex::new(appender))
                    .with_filter(tracing_subscriber::filter::filter_fn(move |meta| {
                        meta.target() == target
                    }))
                    .boxed(),
            );
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layers)
        .try_init()?;

    Ok(())
}

/// Audit log helper - records order mutations
///
/// ```no_run
/// konveksi_mock::audit_log!("admin", "create", "order:12");
/// konveksi_mock::audit_log!("admin", "update", "order:12", "selesai");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user_id = %$user_id,
            action = %$action,
            resource = %$resource,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($user_id:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user_id = %$user_id,
            action = %$action,
            resource = %$resource,
            details = %$details,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}

/// Security log helper - records rejected or suspicious requests
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            timestamp = %chrono::Local::now().to_rfc3339(),
            $($arg)*
        );
    };
    (INFO, $event:expr, $($arg:tt)*) => {
        tracing::info!(
            target: "security",
            event = $event,
            timestamp = %chrono::Local::now().to_rfc3339(),
            $($arg)*
        );
    };
}
