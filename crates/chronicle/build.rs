use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");
    let release_tag = format!("v{version}");

    // A build of the tagged release commit reports the bare version. Other
    // checkouts append the commit and build date as semver build metadata.
    let stamped = match git(&["describe", "--tags", "--exact-match", "HEAD"]) {
        Some(tag) if tag == release_tag => version.to_owned(),
        _ => match git(&["rev-parse", "--short", "HEAD"]) {
            Some(hash) => format!("{version}+{hash}.{}", Utc::now().format("%Y%m%d")),
            None => version.to_owned(),
        },
    };

    println!("cargo:rustc-env=CHRONICLE_VERSION={stamped}");
}

/// Trimmed stdout of a git command, or `None` if it could not run or failed.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
