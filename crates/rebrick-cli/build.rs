//! Embeds the version reported by `rebrick --version`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
    println!("cargo:rerun-if-env-changed=REBRICK_BUILD_VERSION");

    // Packagers can pin the version; otherwise ask git, then Cargo.
    let version = std::env::var("REBRICK_BUILD_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=REBRICK_VERSION={version}");
}

/// `git describe` output without a leading `v`, marked when the tree is dirty.
fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let raw = String::from_utf8(output.stdout).ok()?;
    let raw = raw.trim();

    (!raw.is_empty()).then(|| raw.trim_start_matches('v').to_string())
}
