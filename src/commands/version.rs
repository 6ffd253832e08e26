/// Set at build time, e.g. `GIT_COMMIT=$(git rev-parse HEAD) cargo build`.
const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

pub fn handle_version() {
    println!("{}", version_line(GIT_COMMIT.unwrap_or_default()));
}

pub fn version_line(git_commit: &str) -> String {
    format!(
        "Version: {} {}",
        env!("CARGO_PKG_VERSION"),
        short_commit(git_commit)
    )
}

/// First seven characters of a commit hash, or nothing for shorter input.
pub fn short_commit(commit: &str) -> &str {
    commit.get(..7).unwrap_or_default()
}
