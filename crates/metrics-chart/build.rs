// File: crates/metrics-chart/build.rs
// Summary: Links Windows system libraries that the Skia/ICU static build expects.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry lookups used by Skia's font manager (RegOpenKeyExW, RegQueryInfoKeyW)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
