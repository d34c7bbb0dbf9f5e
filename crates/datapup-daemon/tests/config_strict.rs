#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use datapup_daemon::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
daemon:
  listen: ":8125"
  max_datagram_bytez: 2048 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.daemon.listen, ":8125");
    assert_eq!(cfg.daemon.max_datagram_bytes, 1024);
    assert!(cfg.ops.is_none());
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
daemon:
  listen: "127.0.0.1:9125"
  max_datagram_bytes: 8192
ops:
  listen: "127.0.0.1:9102"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.daemon.listen, "127.0.0.1:9125");
    assert_eq!(cfg.daemon.max_datagram_bytes, 8192);
    let ops = cfg.ops.unwrap();
    assert_eq!(ops.listen, "127.0.0.1:9102");
    assert_eq!(ops.drain_grace_ms, 2000);
}

#[test]
fn reject_long_drain_grace() {
    let bad = r#"
version: 1
ops:
  listen: "127.0.0.1:9102"
  drain_grace_ms: 600000
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn reject_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn reject_zero_buffer() {
    let bad = r#"
version: 1
daemon:
  max_datagram_bytes: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}
