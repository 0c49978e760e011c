//! User identity for container user mapping

/// Numeric uid/gid used when the host cannot report one.
///
/// Matches the unprivileged user baked into the builder image.
#[cfg(not(unix))]
const FALLBACK_IDS: (u32, u32) = (1000, 1000);

/// The invoking user's numeric uid/gid pair.
///
/// Containers run with this mapping so files written through the bind
/// mount are owned by the invoking user rather than root.
#[cfg(unix)]
pub fn current_user_ids() -> (u32, u32) {
    (
        nix::unistd::getuid().as_raw(),
        nix::unistd::getgid().as_raw(),
    )
}

#[cfg(not(unix))]
pub fn current_user_ids() -> (u32, u32) {
    FALLBACK_IDS
}
