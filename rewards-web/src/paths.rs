//! Helpers for building redeem form actions that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/school` when the site is
/// mounted under a subdirectory), the configured redeem prefix is nested under
/// it. Builds without `PUBLIC_URL` keep the prefix as configured.
#[must_use]
pub fn redeem_prefix(prefix: &str) -> String {
    redeem_prefix_with_base(prefix, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn redeem_prefix_with_base(prefix: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');

    if base.is_empty() {
        prefix.to_string()
    } else if base.starts_with('/') {
        format!("{base}{prefix}")
    } else {
        format!("/{base}{prefix}")
    }
}
