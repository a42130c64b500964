use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{FOO_JAVA, Workspace};

fn cocomo_scan(ws: &Workspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cocomo_scan"));
    cmd.current_dir(ws.path());
    cmd
}

#[test]
fn single_java_file_becomes_one_row() {
    let ws = Workspace::new();
    ws.write_file("AppA/Foo.java", FOO_JAVA);
    let mapping = ws.mapping(&["Size=LOC", "Methods=functions"]);

    cocomo_scan(&ws)
        .arg(ws.apps())
        .arg(ws.report())
        .arg("--report-config")
        .arg(&mapping)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));

    assert_eq!(ws.read_report(), "Application,Methods,Size,Total\nAppA,1,10,11\n");

    let metrics = fs::read_to_string(ws.apps().join("AppAapp.metrics")).unwrap();
    assert_eq!(metrics, "File-java=1\nLOC=10\nLOC_java=10\nfunctions=1\nfunctions_java=1\n");
}

#[test]
fn empty_application_gets_sentinel_row_and_dump() {
    let ws = Workspace::new();
    ws.write_file("AppA/Foo.java", FOO_JAVA);
    ws.app("AppB");
    let mapping = ws.mapping(&["Size=LOC"]);

    cocomo_scan(&ws)
        .arg(ws.apps())
        .arg(ws.report())
        .arg("--report-config")
        .arg(&mapping)
        .assert()
        .success();

    let report = ws.read_report();
    let rows: Vec<_> = report.lines().collect();
    assert_eq!(rows, vec!["Application,Size,Total", "AppA,10,10", "AppB,{EMPTY}"]);
    assert_eq!(fs::read_to_string(ws.apps().join("AppBapp.metrics")).unwrap(), "{EMPTY}");
}

#[test]
fn markup_and_plain_files_are_counted() {
    let ws = Workspace::new();
    ws.write_file(
        "Mail/Design/Memo.form",
        "<form><field name='Subject'/><code event='click'><lotusscript>Sub Click\n' note\nEnd Sub</lotusscript></code></form>",
    );
    ws.write_file("Mail/plugin.properties", "a=1\n\nb=2\n");
    ws.write_file("Mail/logo.gif", "GIF89a");
    let mapping = ws.mapping(&["Fields=field", "Code=LOC", "Images=File-gif"]);

    cocomo_scan(&ws)
        .arg(ws.apps())
        .arg(ws.report())
        .arg("--report-config")
        .arg(&mapping)
        .assert()
        .success();

    assert_eq!(ws.read_report(), "Application,Code,Fields,Images,Total\nMail,4,1,1,6\n");
}

#[test]
fn missing_mapping_is_replaced_by_the_default_and_persisted() {
    let ws = Workspace::new();
    ws.write_file("AppA/Foo.java", FOO_JAVA);

    cocomo_scan(&ws).arg(ws.apps()).arg(ws.report()).assert().success();

    let persisted = fs::read_to_string(ws.path().join("cocomo_scan.properties")).unwrap();
    assert!(persisted.starts_with("# ***** Default values ******"));
    assert!(ws.read_report().starts_with("Application,"));
}

#[test]
fn no_metrics_flag_skips_dumps() {
    let ws = Workspace::new();
    ws.write_file("AppA/Foo.java", FOO_JAVA);
    let mapping = ws.mapping(&["Size=LOC"]);

    cocomo_scan(&ws)
        .arg(ws.apps())
        .arg(ws.report())
        .arg("--report-config")
        .arg(&mapping)
        .arg("--no-metrics")
        .assert()
        .success();

    assert!(!ws.apps().join("AppAapp.metrics").exists());
}

#[test]
fn config_dir_overrides_markup_extensions() {
    let ws = Workspace::new();
    ws.write_file("AppA/Home.page", "<page><field/></page>");
    let config = ws.path().join("conf");
    fs::create_dir(&config).unwrap();
    fs::write(config.join("xmlExtensions.properties"), "form\n").unwrap();
    let mapping = ws.mapping(&["Fields=field", "Pages=File-page"]);

    cocomo_scan(&ws)
        .arg(ws.apps())
        .arg(ws.report())
        .arg("--report-config")
        .arg(&mapping)
        .arg("--config-dir")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(ws.read_report(), "Application,Fields,Pages,Total\nAppA,0,1,1\n");
}
