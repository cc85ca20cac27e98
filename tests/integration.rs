// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use std::path::{Path, PathBuf};

fn scaffold_in(dir: &Path) -> assert_cmd::assert::Assert {
    let mut cmd = assert_cmd::Command::cargo_bin("rangka").unwrap();

    cmd.current_dir(dir);

    cmd.assert()
}

fn base(dir: &Path) -> PathBuf {
    dir.join(rangka::layout::BASE_DIR)
}

#[test]
fn scaffolds_an_empty_working_directory() {
    let tmp = tempfile::tempdir().unwrap();

    scaffold_in(tmp.path())
        .success()
        .stdout(predicates::str::contains("create"))
        .stdout(predicates::str::contains("Next steps:"));

    let root = base(tmp.path());

    for dir in rangka::layout::DIRECTORIES {
        assert!(root.join(dir).is_dir(), "missing directory: {}", dir);
    }
    for file in rangka::layout::placeholder_files().keys() {
        assert!(root.join(file).is_file(), "missing file: {}", file);
    }
}

#[test]
fn produces_no_stray_entries() {
    let tmp = tempfile::tempdir().unwrap();

    scaffold_in(tmp.path()).success();

    let root = base(tmp.path());
    let files = rangka::layout::placeholder_files();

    let on_disk: Vec<PathBuf> = walkdir::WalkDir::new(&root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(&root).unwrap().to_path_buf())
        .collect();

    assert_eq!(on_disk.len(), files.len());
    for path in on_disk {
        assert!(
            files.contains_key(path.to_string_lossy().as_ref()),
            "unexpected file: {}",
            path.display()
        );
    }
}

#[test]
fn rerun_reports_existing_entries_and_changes_nothing() {
    let tmp = tempfile::tempdir().unwrap();

    scaffold_in(tmp.path()).success();

    let license = base(tmp.path()).join("LICENSE");
    let before = std::fs::metadata(&license).unwrap().modified().unwrap();

    scaffold_in(tmp.path())
        .success()
        .stdout(predicates::str::contains("exists"));

    let after = std::fs::metadata(&license).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[test]
fn pre_created_directory_is_left_alone() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(base(tmp.path()).join("data/raw")).unwrap();

    scaffold_in(tmp.path())
        .success()
        .stdout(predicates::str::contains("exists data/raw"));
}

#[test]
fn custom_edits_survive_a_rerun() {
    let tmp = tempfile::tempdir().unwrap();

    scaffold_in(tmp.path()).success();

    let readme = base(tmp.path()).join("README.md");
    std::fs::write(&readme, "# My own notes\n").unwrap();

    scaffold_in(tmp.path()).success();

    assert_eq!(
        std::fs::read_to_string(&readme).unwrap(),
        "# My own notes\n"
    );
}

#[test]
fn aborts_with_a_nonzero_exit_when_the_base_path_is_blocked() {
    let tmp = tempfile::tempdir().unwrap();

    // A plain file squatting on the base-directory path makes every child
    // creation fail.
    let blocker = tmp.path().join(rangka::layout::BASE_DIR);
    std::fs::write(&blocker, "not a directory").unwrap();

    scaffold_in(tmp.path()).failure();

    assert!(blocker.is_file());
    assert_eq!(
        std::fs::read_to_string(&blocker).unwrap(),
        "not a directory"
    );
}

#[test]
fn seeded_files_match_the_generators() {
    let tmp = tempfile::tempdir().unwrap();

    scaffold_in(tmp.path()).success();

    let root = base(tmp.path());

    assert_eq!(
        std::fs::read_to_string(root.join("requirements.txt")).unwrap(),
        rangka::manifest::requirements_manifest()
    );
    assert_eq!(
        std::fs::read_to_string(root.join("README.md")).unwrap(),
        rangka::manifest::readme()
    );
    assert_eq!(
        std::fs::read_to_string(root.join("LICENSE")).unwrap(),
        "MIT License\n"
    );
    assert_eq!(
        std::fs::read_to_string(root.join("notebooks/01_Data_Preparation.ipynb")).unwrap(),
        "{}"
    );
}
