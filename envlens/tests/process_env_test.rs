//! End-to-end tests against the real process environment.
//!
//! These mutate process-global state, so every test is `#[serial]`.

use envlens::{Environment, ProcessEnv};
use serial_test::serial;
use std::env;

fn clear(keys: &[&str]) {
    for key in keys {
        unsafe {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn name_defaults_without_designated_key() {
    clear(&["APP_ENV"]);
    let environment = Environment::new(ProcessEnv);
    assert_eq!(environment.name(), "development");
}

#[test]
#[serial]
fn name_resolves_from_process_environment() {
    unsafe {
        env::set_var("APP_ENV", "staging");
    }
    let environment = Environment::new(ProcessEnv);
    assert_eq!(environment.name(), "staging");
    clear(&["APP_ENV"]);
}

#[test]
#[serial]
fn properties_read_live_process_state() {
    unsafe {
        env::set_var("ENVLENS_E2E_FLAG", " TrUe");
        env::set_var("ENVLENS_E2E_LIMIT", "2.5");
        env::set_var("ENVLENS_E2E_EMPTY", "");
    }
    let environment = Environment::new(ProcessEnv);

    assert!(environment.supports("ENVLENS_E2E_FLAG"));
    assert_eq!(environment.number("ENVLENS_E2E_LIMIT"), Some(2.5));
    assert!(!environment.has_property("ENVLENS_E2E_EMPTY"));
    assert!(!environment.has_property("ENVLENS_E2E_MISSING"));

    // No caching: a mutation between calls is visible on the next read.
    unsafe {
        env::set_var("ENVLENS_E2E_LIMIT", "-3");
    }
    assert_eq!(environment.number("ENVLENS_E2E_LIMIT"), Some(-3.0));

    clear(&["ENVLENS_E2E_FLAG", "ENVLENS_E2E_LIMIT", "ENVLENS_E2E_EMPTY"]);
}

#[test]
#[serial]
fn keys_contains_set_variables() {
    unsafe {
        env::set_var("ENVLENS_E2E_KEY_A", "1");
        env::set_var("ENVLENS_E2E_KEY_B", "2");
    }
    let environment = Environment::new(ProcessEnv);
    let keys = environment.keys();

    assert!(keys.iter().any(|k| k == "ENVLENS_E2E_KEY_A"));
    assert!(keys.iter().any(|k| k == "ENVLENS_E2E_KEY_B"));

    clear(&["ENVLENS_E2E_KEY_A", "ENVLENS_E2E_KEY_B"]);
}
