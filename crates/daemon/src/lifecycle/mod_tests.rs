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

fn load_with(vars: &[(&str, &str)]) -> Result<Config, LifecycleError> {
    for name in VARS {
        std::env::remove_var(name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }
    let result = Config::load();
    for name in VARS {
        std::env::remove_var(name);
    }
    result
}

#[test]
#[serial]
fn load_minimal_config() {
    let config =
        load_with(&[("TELEGRAM_BOT_TOKEN", "123:abc"), ("TELEGRAM_USER_ID", "1001")]).unwrap();

    assert_eq!(config.telegram.token, "123:abc");
    assert_eq!(config.telegram.api_url, "https://api.telegram.org");
    assert_eq!(config.telegram.poll_timeout, Duration::from_secs(30));
    assert_eq!(config.allowed_id, 1001);
    assert_eq!(config.docker, DockerEndpoint::default());
    assert_eq!(config.docker_timeout, Duration::from_secs(15));
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.log_dir, None);
}

#[test]
#[serial]
fn load_full_config() {
    let config = load_with(&[
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("TELEGRAM_USER_ID", "1001"),
        ("DOCKER_HOST", "unix:///run/user/1000/docker.sock"),
        ("STACKBOT_DOCKER_TIMEOUT_MS", "2000"),
        ("STACKBOT_POLL_TIMEOUT_SECS", "10"),
        ("TELEGRAM_API_URL", "http://localhost:8081/"),
        ("STACKBOT_LOG", "debug"),
        ("STACKBOT_LOG_DIR", "/tmp/stackbot"),
    ])
    .unwrap();

    assert_eq!(config.docker, DockerEndpoint::Unix(PathBuf::from("/run/user/1000/docker.sock")));
    assert_eq!(config.docker_timeout, Duration::from_millis(2000));
    assert_eq!(config.telegram.poll_timeout, Duration::from_secs(10));
    assert_eq!(config.telegram.api_url, "http://localhost:8081/");
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/stackbot")));
}

#[yare::parameterized(
    no_token   = { &[("TELEGRAM_USER_ID", "1")], "TELEGRAM_BOT_TOKEN is not set" },
    no_user    = { &[("TELEGRAM_BOT_TOKEN", "t")], "TELEGRAM_USER_ID is not set" },
    bad_user   = { &[("TELEGRAM_BOT_TOKEN", "t"), ("TELEGRAM_USER_ID", "me")], "TELEGRAM_USER_ID is not a valid integer: me" },
    bad_host   = { &[("TELEGRAM_BOT_TOKEN", "t"), ("TELEGRAM_USER_ID", "1"), ("DOCKER_HOST", "npipe:////./pipe/docker")], "unsupported DOCKER_HOST: npipe:////./pipe/docker (expected unix:// or tcp://)" },
    bad_poll   = { &[("TELEGRAM_BOT_TOKEN", "t"), ("TELEGRAM_USER_ID", "1"), ("STACKBOT_POLL_TIMEOUT_SECS", "-1")], "STACKBOT_POLL_TIMEOUT_SECS is not a valid number of seconds: -1" },
)]
#[serial]
fn load_rejects(vars: &[(&str, &str)], message: &str) {
    let err = load_with(vars).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn config_debug_hides_token() {
    let config = Config {
        telegram: TelegramConfig::new("123:secret"),
        allowed_id: 1,
        docker: DockerEndpoint::default(),
        docker_timeout: Duration::from_secs(1),
        log_filter: "info".to_string(),
        log_dir: None,
    };
    assert!(!format!("{config:?}").contains("secret"));
}
