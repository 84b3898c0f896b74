//! Integration tests that drive real child processes through fake editor scripts.
#![cfg(unix)]

use extsync_sync::{
    enumerate, install_missing, resolve, sync_document, ConfigDocument, ExtensionId,
    ExtensionStore, InstallOutcome, SyncConfig, SystemRunner,
};
use extsync_test_utils::{env_guard, write_broken_editor, write_fake_editor, SyncFixture};
use std::fs;

fn fake_editor(fixture: &SyncFixture, failing: &[&str]) -> String {
    write_fake_editor(
        &fixture.bin_dir,
        "cursor",
        &fixture.installed_list(),
        &fixture.install_log(),
        failing,
    )
    .unwrap()
    .display()
    .to_string()
}

#[test]
fn third_candidate_wins_and_is_used_for_installs() {
    /*
    GIVEN a missing binary, a binary whose probe fails, and a working editor
    WHEN resolving and importing
    THEN the working editor is chosen and receives every install
    */
    // Serialized: writing an executable while another test forks can hit ETXTBSY.
    let _guard = env_guard();
    let fixture = SyncFixture::new().unwrap();
    let missing = fixture.bin_dir.join("no-such-editor").display().to_string();
    let broken = write_broken_editor(&fixture.bin_dir, "broken-editor")
        .unwrap()
        .display()
        .to_string();
    let working = fake_editor(&fixture, &[]);

    let runner = SystemRunner;
    let candidates = vec![missing, broken, working.clone()];
    let editor = resolve(&runner, &candidates).expect("working editor resolves");
    assert_eq!(editor.program(), working);

    let desired = vec![ExtensionId::new("a.one"), ExtensionId::new("b.two@1.2.3")];
    let report = install_missing(Some(&editor), "Cursor", &desired, |_| {}).unwrap();

    assert_eq!(report.installed_count(), 2);
    assert_eq!(fixture.installs(), vec!["a.one", "b.two@1.2.3"]);
}

#[test]
fn enumerate_reads_editor_output() {
    let _guard = env_guard();
    let fixture = SyncFixture::new().unwrap();
    fs::write(fixture.installed_list(), "foo.bar@1.0.0\n\nbaz.qux@0.1.0\n").unwrap();
    let program = fake_editor(&fixture, &[]);

    let runner = SystemRunner;
    let editor = resolve(&runner, &[program]).unwrap();
    let installed = enumerate(Some(&editor), "Cursor").unwrap();

    assert_eq!(
        installed,
        vec![
            ExtensionId::new("foo.bar@1.0.0"),
            ExtensionId::new("baz.qux@0.1.0")
        ]
    );
}

#[test]
fn failed_install_is_isolated_and_reported_with_stderr() {
    let _guard = env_guard();
    let fixture = SyncFixture::new().unwrap();
    let program = fake_editor(&fixture, &["b"]);

    let runner = SystemRunner;
    let editor = resolve(&runner, &[program]).unwrap();
    let desired: Vec<ExtensionId> = ["a", "b", "c"].into_iter().map(ExtensionId::from).collect();
    let report = install_missing(Some(&editor), "Cursor", &desired, |_| {}).unwrap();

    assert_eq!(fixture.installs(), vec!["a", "b", "c"]);
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0.as_str(), "b");
    assert!(failures[0].1.contains("Extension 'b' not found."));
}

#[test]
fn second_import_installs_nothing() {
    /*
    GIVEN a first import already installed everything
    WHEN importing the same list again
    THEN every entry is already installed and no install command runs
    */
    let _guard = env_guard();
    let fixture = SyncFixture::new().unwrap();
    let program = fake_editor(&fixture, &[]);
    let runner = SystemRunner;
    let editor = resolve(&runner, &[program]).unwrap();
    let desired = vec![ExtensionId::new("x.y@1.0.0")];

    install_missing(Some(&editor), "Cursor", &desired, |_| {}).unwrap();
    let again = install_missing(Some(&editor), "Cursor", &desired, |_| {}).unwrap();

    assert_eq!(fixture.installs().len(), 1);
    assert_eq!(
        again.entries[0].outcome,
        InstallOutcome::AlreadyInstalled
    );
}

#[test]
fn store_and_mirror_round_trip_through_project_dir() {
    let fixture = SyncFixture::new().unwrap();
    let config = SyncConfig::with_dirs(&fixture.project_dir, &fixture.editor_dir);
    let store = ExtensionStore::new(config.extensions_file());

    store
        .save(&[ExtensionId::new("b.b@2"), ExtensionId::new("a.a@1")])
        .unwrap();
    fixture
        .write_project_file("settings.json", "{\n  \"files.autoSave\": \"off\"\n}\n")
        .unwrap();
    sync_document(&config, ConfigDocument::Settings).unwrap();

    assert_eq!(
        store.load().unwrap(),
        vec![ExtensionId::new("a.a@1"), ExtensionId::new("b.b@2")]
    );
    assert_eq!(
        fs::read(fixture.editor_dir.join("settings.json")).unwrap(),
        fs::read(fixture.project_dir.join("settings.json")).unwrap()
    );
}
