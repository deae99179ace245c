// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

const VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_USER_ID",
    "DOCKER_SOCKET_PATH",
    "DOCKER_HOST",
    "STACKBOT_DOCKER_TIMEOUT_MS",
    "STACKBOT_POLL_TIMEOUT_SECS",
    "TELEGRAM_API_URL",
    "STACKBOT_LOG",
    "RUST_LOG",
    "STACKBOT_LOG_DIR",
];

/// Run `f` with exactly `vars` set among the daemon's variables
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let saved: Vec<(&str, Option<String>)> =
        VARS.iter().map(|name| (*name, std::env::var(name).ok())).collect();
    for name in VARS {
        std::env::remove_var(name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let result = f();

    for (name, value) in saved {
        match value {
            Some(v) => std::env::set_var(name, v),
            None => std::env::remove_var(name),
        }
    }
    result
}

#[test]
#[serial]
fn missing_token_is_reported_by_name() {
    let err = with_env(&[], bot_token).unwrap_err();
    assert!(matches!(err, LifecycleError::MissingEnv("TELEGRAM_BOT_TOKEN")));
}

#[test]
#[serial]
fn blank_token_counts_as_missing() {
    let err = with_env(&[("TELEGRAM_BOT_TOKEN", "  ")], bot_token).unwrap_err();
    assert!(matches!(err, LifecycleError::MissingEnv("TELEGRAM_BOT_TOKEN")));
}

#[yare::parameterized(
    positive = { "123456789",   123456789 },
    padded   = { " 42 ",        42 },
    negative = { "-1001234",    -1001234 },
)]
#[serial]
fn user_id_parses(value: &str, expected: i64) {
    assert_eq!(with_env(&[("TELEGRAM_USER_ID", value)], allowed_user_id).unwrap(), expected);
}

#[test]
#[serial]
fn non_numeric_user_id_is_invalid() {
    let err = with_env(&[("TELEGRAM_USER_ID", "@ops")], allowed_user_id).unwrap_err();
    assert_eq!(err.to_string(), "TELEGRAM_USER_ID is not a valid integer: @ops");
}

#[test]
#[serial]
fn docker_socket_defaults() {
    assert_eq!(with_env(&[], docker_endpoint).unwrap(), DockerEndpoint::default());
}

#[test]
#[serial]
fn docker_socket_path_wins_over_docker_host() {
    let endpoint = with_env(
        &[("DOCKER_SOCKET_PATH", "/srv/docker.sock"), ("DOCKER_HOST", "tcp://10.0.0.1:2375")],
        docker_endpoint,
    )
    .unwrap();
    assert_eq!(endpoint, DockerEndpoint::Unix(PathBuf::from("/srv/docker.sock")));
}

#[test]
#[serial]
fn docker_host_is_used_as_fallback() {
    let endpoint = with_env(&[("DOCKER_HOST", "tcp://10.0.0.1:2375")], docker_endpoint).unwrap();
    assert_eq!(endpoint, DockerEndpoint::Tcp("10.0.0.1:2375".to_string()));
}

#[test]
#[serial]
fn unsupported_docker_host_is_rejected() {
    let err = with_env(&[("DOCKER_HOST", "ssh://me@box")], docker_endpoint).unwrap_err();
    assert!(matches!(err, LifecycleError::UnsupportedDockerHost(ref h) if h == "ssh://me@box"));
}

#[test]
#[serial]
fn timeouts_have_defaults_and_overrides() {
    with_env(&[], || {
        assert_eq!(docker_timeout().unwrap(), Duration::from_secs(15));
        assert_eq!(poll_timeout().unwrap(), Duration::from_secs(30));
    });
    with_env(
        &[("STACKBOT_DOCKER_TIMEOUT_MS", "250"), ("STACKBOT_POLL_TIMEOUT_SECS", "5")],
        || {
            assert_eq!(docker_timeout().unwrap(), Duration::from_millis(250));
            assert_eq!(poll_timeout().unwrap(), Duration::from_secs(5));
        },
    );
}

#[test]
#[serial]
fn bad_timeout_is_invalid() {
    let err = with_env(&[("STACKBOT_DOCKER_TIMEOUT_MS", "soon")], docker_timeout).unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidEnv { name: "STACKBOT_DOCKER_TIMEOUT_MS", .. }));
}

#[test]
#[serial]
fn log_filter_precedence() {
    assert_eq!(with_env(&[], log_filter), "info");
    assert_eq!(with_env(&[("RUST_LOG", "debug")], log_filter), "debug");
    assert_eq!(
        with_env(&[("RUST_LOG", "debug"), ("STACKBOT_LOG", "sb_engine=trace")], log_filter),
        "sb_engine=trace"
    );
}

#[test]
#[serial]
fn optional_settings() {
    with_env(&[], || {
        assert_eq!(api_url(), "https://api.telegram.org");
        assert_eq!(log_dir(), None);
    });
    with_env(
        &[("TELEGRAM_API_URL", "http://localhost:8081"), ("STACKBOT_LOG_DIR", "/var/log/stackbot")],
        || {
            assert_eq!(api_url(), "http://localhost:8081");
            assert_eq!(log_dir(), Some(PathBuf::from("/var/log/stackbot")));
        },
    );
}
