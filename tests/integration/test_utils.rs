//! Shared test utilities for integration tests

use std::path::PathBuf;
use std::sync::Mutex;

/// Serializes environment variable access across tests running in parallel.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Directory holding the shared defaults/locals fixtures.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/config")
}

pub fn fixture_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Run `f` with `var` set to `value` (or removed), restoring it afterwards.
pub fn with_env_var<F, R>(var: &str, value: Option<&str>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::var(var).ok();

    match value {
        Some(value) => std::env::set_var(var, value),
        None => std::env::remove_var(var),
    }

    let result = f();

    match original {
        Some(orig) => std::env::set_var(var, orig),
        None => std::env::remove_var(var),
    }

    result
}
