//! Emits `VERGEN_GIT_SHA` so dev builds of geoclean report the commit they
//! were built from. Release builds (`--features release`) skip it and
//! `cli::VERSION` falls back to the bare package version.

#[cfg(not(feature = "release"))]
fn main() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let git = match GitclBuilder::default().sha(true).build() {
        Ok(git) => git,
        Err(e) => return emit_unknown(&e.to_string()),
    };
    let emitted = Emitter::default()
        .add_instructions(&git)
        .and_then(|emitter| emitter.emit());
    if let Err(e) = emitted {
        emit_unknown(&e.to_string());
    }
}

/// Outside a git checkout the SHA is reported as `unknown`.
#[cfg(not(feature = "release"))]
fn emit_unknown(reason: &str) {
    println!("cargo:warning=git SHA unavailable: {}", reason);
    println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
}

#[cfg(feature = "release")]
fn main() {}
