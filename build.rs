//! Build script for drp - embeds the git commit hash for dev builds
//!
//! Without the `release` feature, `VERGEN_GIT_SHA` is emitted so `drp --version`
//! can show which commit a dev binary came from. Release builds emit nothing.

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = GitclBuilder::default()
            .sha(true)
            .build()
            .expect("Failed to configure git info");

        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .expect("Failed to add git instructions")
            .emit()
        {
            // Not a git checkout (e.g. a source tarball)
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
