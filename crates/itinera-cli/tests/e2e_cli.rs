//! E2E integration tests for the `itinera` binary.
//!
//! Dialogs and logs go to stderr; results go to stdout.

mod common;

use common::itinera_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

// ─── confirm ───────────────────────────────────────────────────────

#[test]
fn confirm_accept() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.args(["confirm", "Save the trip?"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("accepted"))
        .stderr(contains("Save the trip?"))
        .stderr(contains("[y] Confirm"));
}

#[test]
fn confirm_decline_exits_nonzero() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.args(["confirm", "Delete this day?", "--kind", "warning"])
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stdout(contains("declined"))
        .stderr(contains("[!]"));
}

#[test]
fn confirm_escape_and_backdrop_dismiss() {
    for input in ["esc\n", "backdrop\n"] {
        let (mut cmd, _guard) = itinera_cmd();
        cmd.args(["confirm", "Leave?"])
            .write_stdin(input)
            .assert()
            .code(1)
            .stdout(contains("declined"));
    }
}

#[test]
fn confirm_end_of_input_declines() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.args(["confirm", "Leave?"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(contains("declined"));
}

#[test]
fn confirm_custom_labels_and_title() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.args([
        "confirm",
        "Templates are ready.",
        "--title",
        "Unlocked!",
        "--kind",
        "success",
        "--confirm-label",
        "Awesome",
    ])
    .write_stdin("ok\n")
    .assert()
    .success()
    .stderr(contains("Unlocked!"))
    .stderr(contains("[y] Awesome"));
}

#[test]
fn confirm_localized_labels() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.args(["--locale", "fr", "confirm", "Continuer ?"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(contains("[y] Confirmer"))
        .stderr(contains("[n] Annuler"));
}

#[test]
fn confirm_locale_from_env() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.env("ITINERA_LOCALE", "de")
        .args(["confirm", "Weiter?"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(contains("Bestätigen"));
}

#[test]
fn confirm_labels_from_project_config() {
    let (mut cmd, guard) = itinera_cmd();
    let dir = guard.path().join(".itinera");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[locale]\nconfirm_label = \"Do it\"\n",
    )
    .unwrap();

    cmd.args(["confirm", "Go?"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(contains("[y] Do it"));
}

#[test]
fn invalid_env_var_fails() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.env("ITINERA_OVERLAP", "stack")
        .args(["confirm", "Go?"])
        .assert()
        .failure()
        .stderr(contains("ITINERA_OVERLAP"))
        .stderr(contains("[CONFIG_INVALID_ENV_VAR]"));
}

// ─── assets / drag ─────────────────────────────────────────────────

#[test]
fn assets_lists_bundled_sample() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.arg("assets")
        .assert()
        .success()
        .stdout(contains("Louvre"))
        .stdout(contains("Fushimi Inari"));
}

#[test]
fn assets_filtered_and_grouped() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.args(["assets", "--tag", "outdoor", "--group"])
        .assert()
        .success()
        .stdout(contains("Kyoto"))
        .stdout(contains("Eiffel Tower"))
        .stdout(contains("Louvre").not());
}

#[test]
fn assets_from_catalog_file() {
    let (mut cmd, guard) = itinera_cmd();
    let path = guard.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"id":"belem","name":"Belém Tower","region":"Lisbon","tags":["views"]}]"#,
    )
    .unwrap();

    cmd.args(["assets", "--json", "--catalog", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("\"id\": \"belem\""));
}

#[test]
fn broken_catalog_reports_error_code() {
    let (mut cmd, guard) = itinera_cmd();
    let path = guard.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();

    cmd.args(["assets", "--catalog", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("[CATALOG_PARSE]"));
}

#[test]
fn drag_prints_payload() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.args(["drag", "paris-weekend"])
        .assert()
        .success()
        .stdout(contains(r#"{"asset_id":"paris-weekend","kind":"template"}"#));
}

#[test]
fn drag_locked_and_unknown() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.args(["drag", "kyoto-classic"])
        .assert()
        .code(1)
        .stderr(contains("locked"));

    let (mut cmd, _guard) = itinera_cmd();
    cmd.args(["drag", "atlantis"])
        .assert()
        .code(2)
        .stderr(contains("Unknown asset"));
}

// ─── onboarding ────────────────────────────────────────────────────

#[test]
fn onboarding_completes_once() {
    let (mut cmd, guard) = itinera_cmd();
    let flags = guard.path().join("flags.json");
    let flag_arg = flags.to_str().unwrap().to_string();

    cmd.args(["--flag-file", &flag_arg, "onboarding"])
        .write_stdin("\n\n\n")
        .assert()
        .success()
        .stdout(contains("Onboarding complete."))
        .stderr(contains("[1/3]"));

    let (mut cmd, _guard2) = itinera_cmd();
    cmd.args(["--flag-file", &flag_arg, "onboarding"])
        .assert()
        .success()
        .stdout(contains("already completed"));
}

#[test]
fn onboarding_skip_then_reset() {
    let (mut cmd, guard) = itinera_cmd();
    let flags = guard.path().join("flags.json");
    let flag_arg = flags.to_str().unwrap().to_string();

    cmd.args(["--flag-file", &flag_arg, "onboarding"])
        .write_stdin("s\n")
        .assert()
        .success()
        .stdout(contains("Onboarding skipped."));
    assert!(std::fs::read_to_string(&flags)
        .unwrap()
        .contains("\"onboarding_complete\": true"));

    let (mut cmd, _g) = itinera_cmd();
    cmd.args(["--flag-file", &flag_arg, "onboarding", "--reset"])
        .assert()
        .success()
        .stdout(contains("Onboarding reset."));

    let (mut cmd, _g) = itinera_cmd();
    cmd.args(["--flag-file", &flag_arg, "onboarding"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("Onboarding paused."));
}

// ─── demo ──────────────────────────────────────────────────────────

#[test]
fn demo_walkthrough() {
    let (mut cmd, _guard) = itinera_cmd();
    cmd.arg("demo")
        .write_stdin("n\ny\n")
        .assert()
        .success()
        .stdout(contains("Sidebar"))
        .stdout(contains("Dragged onto day 1"))
        .stdout(contains("Day 2 kept."))
        .stdout(contains("Templates enabled."))
        .stderr(contains("Delete this day?"))
        .stderr(contains("[y] Awesome"));
}
