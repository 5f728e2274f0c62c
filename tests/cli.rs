use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_dataset(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn fpminer() -> Command {
    Command::cargo_bin("fpminer").unwrap()
}

fn read_result(dir: &Path, stem: &str) -> String {
    fs::read_to_string(dir.join(format!("MiningResult_{}.txt", stem))).unwrap()
}

#[test]
fn mines_plain_dataset() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir, "abc.txt", "a b c\na b\na c\na\nb c\n");

    let output = fpminer()
        .arg(&dataset)
        .arg("40")
        .arg("--output-dir")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("minsup = 40% = 2"));
    assert!(stdout.contains("|FPs| = 6"));
    assert!(stdout.contains("Runtime:"));

    assert_eq!(
        read_result(dir.path(), "abc"),
        "|FPs| = 6\na : 4\nb : 3\nc : 3\na, b : 2\na, c : 2\nb, c : 2\n"
    );
}

#[test]
fn mines_tid_count_dataset_with_header() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir, "numbers.dat", "3\n1 3 10 20 30\n2 2 10 20\n3 1 20\n");

    fpminer()
        .arg(&dataset)
        .arg("60")
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(
        read_result(dir.path(), "numbers"),
        "|FPs| = 3\n10 : 2\n20 : 3\n10, 20 : 2\n"
    );
}

#[test]
fn empty_dataset_yields_zero_patterns() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir, "empty.txt", "");

    fpminer()
        .arg(&dataset)
        .arg("50")
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(read_result(dir.path(), "empty"), "|FPs| = 0\n");
}

#[test]
fn rejects_out_of_range_support() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir, "abc.txt", "a b\n");

    for bad in ["0", "-5", "150"] {
        fpminer()
            .arg(&dataset)
            .arg(bad)
            .arg("-o")
            .arg(dir.path())
            .assert()
            .failure();
    }
    assert!(!dir.path().join("MiningResult_abc.txt").exists());
}

#[test]
fn rejects_bad_usage() {
    fpminer().assert().failure();
    fpminer().arg("data.txt").assert().failure();
    fpminer().arg("data.txt").arg("lots").assert().failure();
}

#[test]
fn missing_dataset_fails() {
    let dir = TempDir::new().unwrap();
    fpminer()
        .arg(dir.path().join("nope.txt"))
        .arg("10")
        .assert()
        .failure();
}

#[test]
fn node_budget_aborts_run() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir, "abc.txt", "a b c\na b\na c\na\nb c\n");

    fpminer()
        .arg(&dataset)
        .arg("40")
        .arg("-o")
        .arg(dir.path())
        .arg("--max-tree-nodes")
        .arg("2")
        .assert()
        .failure();
    assert!(!dir.path().join("MiningResult_abc.txt").exists());
}
