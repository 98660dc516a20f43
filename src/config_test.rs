use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers hold [`env_guard`] so env mutations do not race.
unsafe fn clear_dashboard_env() {
    unsafe {
        std::env::remove_var("SCHOLARSYNC_API_BASE_URL");
        std::env::remove_var("SCHOLARSYNC_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("SCHOLARSYNC_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _env = env_guard();
    unsafe { clear_dashboard_env() };

    let cfg = DashboardConfig::from_env().unwrap();
    assert_eq!(cfg, DashboardConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, None);
    assert_eq!(cfg.connect_timeout_secs, None);
}

#[test]
fn from_env_parses_overrides() {
    let _env = env_guard();
    unsafe {
        clear_dashboard_env();
        std::env::set_var("SCHOLARSYNC_API_BASE_URL", "https://stats.example.test/api/");
        std::env::set_var("SCHOLARSYNC_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("SCHOLARSYNC_CONNECT_TIMEOUT_SECS", "3");
    }

    let cfg = DashboardConfig::from_env().unwrap();
    assert_eq!(cfg.api_base_url, "https://stats.example.test/api");
    assert_eq!(cfg.request_timeout_secs, Some(30));
    assert_eq!(cfg.connect_timeout_secs, Some(3));

    unsafe { clear_dashboard_env() };
}

#[test]
fn from_env_ignores_unparsable_timeouts() {
    let _env = env_guard();
    unsafe {
        clear_dashboard_env();
        std::env::set_var("SCHOLARSYNC_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = DashboardConfig::from_env().unwrap();
    assert_eq!(cfg.request_timeout_secs, None);

    unsafe { clear_dashboard_env() };
}

#[test]
fn from_env_rejects_schemeless_base_url() {
    let _env = env_guard();
    unsafe {
        clear_dashboard_env();
        std::env::set_var("SCHOLARSYNC_API_BASE_URL", "localhost:8000/api");
    }

    let err = DashboardConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl(url) if url == "localhost:8000/api"));

    unsafe { clear_dashboard_env() };
}

#[test]
fn with_base_url_trims_trailing_slash() {
    let cfg = DashboardConfig::default().with_base_url("http://127.0.0.1:8000/api//").unwrap();
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:8000/api");
}
