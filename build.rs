use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // The build id has to move with every change that lands in the binary.
    // Static assets are read from disk at runtime and are not watched.
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Dev marker logged at startup, so we can tell whether the running server
    // is the newest binary.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITY_SIGNUP_BUILD_ID={}", build_id);
}
