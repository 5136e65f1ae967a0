use std::process::Command;

/// Run `git rev-parse <args> HEAD`, falling back to "unknown" outside a checkout.
fn git_rev(extra_args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("rev-parse")
        .args(extra_args)
        .arg("HEAD")
        .output();

    match output {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // short hash shows up in `crossgen --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["--short"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev(&[]));

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
