//! Tests for version command

use delsla::commands::version;

#[test]
fn test_version_banner() {
    let banner = version::banner();
    assert!(banner.starts_with("Delsla v"));
    assert!(banner.ends_with(env!("CARGO_PKG_VERSION")));
}
