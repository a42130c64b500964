use std::fs;

use assert_cmd::Command;

use crate::common::{FOO_JAVA, Workspace};

#[test]
fn command_file_selects_and_orders_applications() {
    let ws = Workspace::new();
    ws.write_file("AppA/Foo.java", FOO_JAVA);
    ws.write_file("AppB/Bar.java", "class Bar {}\n");
    ws.write_file("AppC/Baz.java", "class Baz {}\n");
    let mapping = ws.mapping(&["Size=LOC"]);

    let listing = format!(
        "# measured on request\n{}\n\n{}\n{}\n",
        ws.apps().join("AppB").display(),
        ws.apps().join("Gone").display(),
        ws.apps().join("AppA").display(),
    );
    let command = ws.path().join("apps.txt");
    fs::write(&command, listing).unwrap();

    Command::new(env!("CARGO_BIN_EXE_cocomo_scan"))
        .current_dir(ws.path())
        .arg(ws.apps())
        .arg(ws.report())
        .arg(&command)
        .arg("--report-config")
        .arg(&mapping)
        .assert()
        .success();

    assert_eq!(ws.read_report(), "Application,Size,Total\nAppB,1,1\nAppA,10,10\n");
}

#[test]
fn unreadable_command_file_fails_the_run() {
    let ws = Workspace::new();
    ws.app("AppA");
    let mapping = ws.mapping(&["Size=LOC"]);

    Command::new(env!("CARGO_BIN_EXE_cocomo_scan"))
        .current_dir(ws.path())
        .arg(ws.apps())
        .arg(ws.report())
        .arg(ws.path().join("absent.txt"))
        .arg("--report-config")
        .arg(&mapping)
        .assert()
        .failure();
}
