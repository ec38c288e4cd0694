fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Capture package name/version for the startup log line
    built::write_built_file().expect("Failed to acquire build-time information");
}
