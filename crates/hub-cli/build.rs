//! Build script embedding the git commit into the reported version.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=HUB_BUILD_COMMIT");

    let pkg_version = env!("CARGO_PKG_VERSION");
    let commit = std::env::var("HUB_BUILD_COMMIT").ok().or_else(short_commit);

    let version = match commit {
        Some(commit) => format!("{} ({})", pkg_version, commit),
        None => pkg_version.to_string(),
    };

    println!("cargo:rustc-env=HUB_VERSION={}", version);
}

/// Abbreviated hash of HEAD, if built from a git checkout.
fn short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let commit = String::from_utf8(output.stdout).ok()?;
    let commit = commit.trim();
    (!commit.is_empty()).then(|| commit.to_string())
}
