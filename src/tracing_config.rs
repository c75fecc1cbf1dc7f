//! Tracing configuration for debugging resolution queries.
//!
//! ## Quick start
//!
//! ```bash
//! # Engine-wide debug output
//! TYDOM_LOG=debug my-tool project.json
//!
//! # Fine-grained filtering
//! TYDOM_LOG="tydom_resolver=trace,tydom_space=debug" my-tool project.json
//! ```
//!
//! The subscriber is only initialised when `TYDOM_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal builds.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `TYDOM_LOG`, falling back to `RUST_LOG`.
///
/// `TYDOM_LOG` takes precedence when both are set. Values use the same
/// syntax as `RUST_LOG` (e.g. `debug`, `tydom_resolver=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TYDOM_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        // RUST_LOG is set (caller already checked).  Use it as-is.
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TYDOM_LOG` nor `RUST_LOG` is set, keeping
/// startup cost at zero for normal usage.
///
/// All output goes to stderr so it never interferes with whatever the
/// embedding tool writes to stdout. Safe to call more than once; later
/// calls lose the race for the global subscriber and are ignored.
pub fn init_tracing() {
    let has_tydom_log = std::env::var("TYDOM_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_tydom_log && !has_rust_log {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
