//! Runs against a fake `wp` binary so the real executor is exercised.
#![cfg(unix)]

mod common;

use common::{FakeWp, TestEnv};

fn env_with_fake_wp(failing: &[&str], probe_answer: &str) -> (TestEnv, FakeWp) {
    let env = TestEnv::new();
    let wp = FakeWp::install(env.home_dir.path(), failing, probe_answer);
    env.write_config(&format!(
        "[target]\nwp_bin = \"{}\"\npath = \"/srv/www\"\n",
        wp.script.display()
    ));
    (env, wp)
}

#[test]
fn issues_the_wp_cli_commands_in_order() {
    let (env, wp) = env_with_fake_wp(&[], "no");
    let result = env.run(&["deploy", "--yes"]);

    assert_exit!(result, 0);
    let calls = wp.calls();
    assert_eq!(calls[0], "plugin activate --all --path=/srv/www");
    assert_eq!(calls[1], "core update-db --path=/srv/www");
    assert_eq!(calls[2], "transient delete --all --path=/srv/www");
    assert!(calls[3].starts_with("eval echo function_exists('wp_cache_clear_cache')"));
    assert_eq!(calls[4], "rewrite flush --path=/srv/www");
    assert_eq!(calls.len(), 5, "{calls:?}");
}

#[test]
fn page_cache_is_cleared_when_the_plugin_is_present() {
    let (env, wp) = env_with_fake_wp(&[], "yes");
    let result = env.run(&["sync", "--yes"]);

    assert_exit!(result, 0);
    assert!(wp
        .calls()
        .iter()
        .any(|c| c == "eval wp_cache_clear_cache(); --path=/srv/www"));
    assert_output_contains!(result, "Cleared the cache");
}

#[test]
fn a_failing_task_does_not_stop_later_tasks() {
    let (env, wp) = env_with_fake_wp(&["core update-db"], "no");
    let result = env.run(&["deploy", "--yes"]);

    assert_exit!(result, 1);
    assert_output_contains!(result, "[OK] activate-plugins");
    assert_output_contains!(result, "[FAIL] update-database");
    assert_output_contains!(result, "[OK] clear-cache");
    assert_output_contains!(result, "[OK] flush-rewrites");
    assert_output_contains!(result, "3 succeeded, 0 skipped, 1 failed");
    assert!(wp.calls().iter().any(|c| c.starts_with("rewrite flush")));
}

#[test]
fn failure_reason_carries_the_wp_error() {
    let (env, _wp) = env_with_fake_wp(&["rewrite flush"], "no");
    let result = env.run(&["deploy", "--yes", "--json"]);

    assert_exit!(result, 1);
    let events = result.json_lines();
    let failed = events
        .iter()
        .find(|e| e["event"] == "task_failed")
        .expect("task_failed event");
    assert_eq!(failed["task"], "flush-rewrites");
    assert!(failed["message"]
        .as_str()
        .unwrap_or_default()
        .contains("rewrite flush"));
}

#[test]
fn missing_wp_binary_fails_every_task_but_reports_all() {
    let env = TestEnv::with_config("[target]\nwp_bin = \"/nonexistent/bin/wp\"\n");
    let result = env.run(&["deploy", "--yes"]);

    assert_exit!(result, 1);
    for task in ["activate-plugins", "update-database", "flush-rewrites"] {
        assert_output_contains!(result, &format!("[FAIL] {task}"));
    }
    assert_output_contains!(result, "[FAIL] clear-cache");
}

#[test]
fn ci_annotations_name_failed_tasks() {
    let (env, _wp) = env_with_fake_wp(&["plugin activate"], "no");
    let result = env.run_with_env(&["deploy", "--yes"], &[("GITHUB_ACTIONS", "true")]);

    assert_exit!(result, 1);
    assert_output_contains!(result, "::error title=deploy task 'activate-plugins'::");
}
