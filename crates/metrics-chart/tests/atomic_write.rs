// File: crates/metrics-chart/tests/atomic_write.rs
// Purpose: A failed write never leaves a partial file behind.

use metrics_chart::io::write_atomic;

#[test]
fn writes_and_replaces() {
    let path = std::path::PathBuf::from("target/test_out/atomic/out.bin");
    write_atomic(&path, b"first").expect("first write");
    write_atomic(&path, b"second").expect("second write");
    assert_eq!(std::fs::read(&path).unwrap(), b"second");
}

#[test]
fn failure_leaves_no_temporary() {
    // A directory at the target path makes the final rename fail.
    let dir = std::path::PathBuf::from("target/test_out/atomic_fail");
    let target = dir.join("occupied");
    std::fs::create_dir_all(&target).unwrap();

    assert!(write_atomic(&target, b"data").is_err());
    assert!(target.is_dir());

    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temporary files left: {leftovers:?}");
}

#[cfg(unix)]
#[test]
fn read_only_target_is_refused() {
    use std::os::unix::fs::PermissionsExt;

    let target = std::path::PathBuf::from("target/test_out/atomic_ro/locked.png");
    std::fs::create_dir_all(target.parent().unwrap()).unwrap();
    if target.exists() {
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o644)).unwrap();
    }
    std::fs::write(&target, b"original").unwrap();
    std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o444)).unwrap();

    let res = write_atomic(&target, b"replaced");
    let kept = std::fs::read(&target).unwrap();
    std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o644)).unwrap();

    assert!(res.is_err(), "read-only target must not be replaced");
    assert_eq!(kept, b"original");
}
