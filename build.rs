fn main() {
    // `--version` prints TODOLIST_VERSION when packaging sets it, else the
    // commit hash, else the crate version for builds outside a checkout.
    if let Ok(version) = std::env::var("TODOLIST_VERSION") {
        println!("cargo:rustc-env=TODOLIST_VERSION={version}");
    } else {
        let hash = std::process::Command::new("git")
            .args(["rev-parse", "--short=7", "HEAD"])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .unwrap_or_default()
            .trim()
            .to_string();

        if hash.is_empty() {
            println!(
                "cargo:rustc-env=TODOLIST_VERSION={}",
                std::env::var("CARGO_PKG_VERSION").unwrap_or_default()
            );
        } else {
            println!("cargo:rustc-env=TODOLIST_VERSION=version-{hash}");
        }
    }
}
