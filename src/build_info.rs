//! Identity strings stamped in by the build pipeline.
//!
//! Each constant reads a `LOGFACADE_*` variable at compile time, e.g.
//! `LOGFACADE_GIT_HASH=$(git rev-parse HEAD) cargo build --release`.

/// Application name.
pub const APP_NAME: &str = match option_env!("LOGFACADE_APP_NAME") {
    Some(v) => v,
    None => env!("CARGO_PKG_NAME"),
};

/// Release version.
pub const VERSION: &str = match option_env!("LOGFACADE_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Build timestamp.
pub const BUILD_STAMP: &str = match option_env!("LOGFACADE_BUILD_STAMP") {
    Some(v) => v,
    None => "unknown",
};

pub const GIT_HASH: &str = match option_env!("LOGFACADE_GIT_HASH") {
    Some(v) => v,
    None => "unknown",
};

/// Deployment tag of the server this binary was built for.
pub const SERVER_TAG: &str = match option_env!("LOGFACADE_SERVER_TAG") {
    Some(v) => v,
    None => "unknown",
};

pub const SERVER_ID: &str = match option_env!("LOGFACADE_SERVER_ID") {
    Some(v) => v,
    None => "unknown",
};

/// One-line rendering for `--version` style output.
#[must_use]
pub fn summary() -> String {
    format!(
        "{APP_NAME} {VERSION} (build {BUILD_STAMP}, git {GIT_HASH}, server {SERVER_TAG}/{SERVER_ID})"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_name_and_version() {
        let line = summary();
        assert!(line.starts_with(APP_NAME));
        assert!(line.contains(VERSION));
    }
}
