#![allow(missing_docs)]

use std::{env, error::Error};
use vergen::{BuildBuilder, CargoBuilder, Emitter};
use vergen_git2::Git2Builder;

fn main() -> Result<(), Box<dyn Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;
    let cargo = CargoBuilder::default().features(true).target_triple(true).build()?;
    let gitcl = Git2Builder::default().sha(false).dirty(true).build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&gitcl)?
        .emit_and_set()?;

    // Git information is unavailable when building outside of a checkout, e.g. from a crate
    // archive, in which case vergen emits idempotent placeholder values.
    let sha = env::var("VERGEN_GIT_SHA").unwrap_or_else(|_| "unknown".into());
    let sha_short = &sha[..sha.len().min(8)];

    let is_dirty = env::var("VERGEN_GIT_DIRTY").map(|v| v == "true").unwrap_or(false);
    let version_suffix = if is_dirty { "-dev" } else { "" };

    let out_dir = env::var("OUT_DIR")?;
    let profile = out_dir.rsplit(std::path::MAIN_SEPARATOR).nth(3).unwrap_or("unknown").to_string();

    let pkg_version = env!("CARGO_PKG_VERSION");

    // The short version information.
    // Example: 0.1.0 (defa64b2)
    println!("cargo:rustc-env=MINTFEE_SHORT_VERSION={pkg_version}{version_suffix} ({sha_short})");

    println!("cargo:rustc-env=MINTFEE_LONG_VERSION_0=Version: {pkg_version}{version_suffix}");
    println!("cargo:rustc-env=MINTFEE_LONG_VERSION_1=Commit SHA: {sha}");
    println!(
        "cargo:rustc-env=MINTFEE_LONG_VERSION_2=Build Timestamp: {}",
        env::var("VERGEN_BUILD_TIMESTAMP").unwrap_or_else(|_| "unknown".into())
    );
    println!(
        "cargo:rustc-env=MINTFEE_LONG_VERSION_3=Build Features: {}",
        env::var("VERGEN_CARGO_FEATURES").unwrap_or_default()
    );
    println!("cargo:rustc-env=MINTFEE_LONG_VERSION_4=Build Profile: {profile}");

    Ok(())
}
