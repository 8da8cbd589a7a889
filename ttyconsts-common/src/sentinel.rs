// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::os::fd::AsFd;

use nix::unistd::{PathconfVar, fpathconf};

/// Name under which the disable sentinel is reported.
pub const VDISABLE_NAME: &str = "_POSIX_VDISABLE";

/// Resolve the platform's disable sentinel for special control
/// characters, the value that turns a `c_cc` slot off.
///
/// libc exports `_POSIX_VDISABLE` on this target, so presence is a
/// pure platform property.
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "illumos",
    target_os = "solaris",
))]
#[must_use]
pub fn vdisable() -> Option<i64> {
    Some(i64::from(libc::_POSIX_VDISABLE))
}

/// Resolve the platform's disable sentinel for special control
/// characters, the value that turns a `c_cc` slot off.
///
/// libc does not export `_POSIX_VDISABLE` on this target, so the
/// pathconf capability surface is asked instead; glibc and musl answer
/// `_PC_VDISABLE` without consulting the file, so the result stays
/// fixed per platform. `None` means the report must omit the sentinel
/// line entirely.
#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "illumos",
    target_os = "solaris",
)))]
#[must_use]
pub fn vdisable() -> Option<i64> {
    probe_vdisable(std::io::stdout())
}

/// Fallback capability probe for targets whose libc does not export
/// `_POSIX_VDISABLE` directly.
#[must_use]
pub fn probe_vdisable<F: AsFd>(fd: F) -> Option<i64> {
    match fpathconf(fd, PathconfVar::_POSIX_VDISABLE) {
        Ok(Some(value)) => {
            trace!("pathconf reports {VDISABLE_NAME}={value}");
            Some(i64::from(value))
        }
        Ok(None) => {
            trace!("{VDISABLE_NAME} is not defined on this platform");
            None
        }
        Err(e) => {
            debug!("pathconf probe for {VDISABLE_NAME} failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod sentinel_tests {
    use super::*;

    #[test_log::test]
    fn resolution_is_deterministic() {
        let first = vdisable();
        let second = vdisable();

        assert_eq!(first, second);
    }

    #[cfg(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "illumos",
        target_os = "solaris",
    ))]
    #[test]
    fn resolution_uses_the_exported_libc_constant() {
        assert_eq!(vdisable(), Some(i64::from(libc::_POSIX_VDISABLE)));
    }

    #[cfg(not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "illumos",
        target_os = "solaris",
    )))]
    #[test]
    fn resolution_does_not_depend_on_where_stdout_points() {
        // Any stream must give the same answer as the stdout-backed
        // resolution on the fallback path.
        assert_eq!(vdisable(), probe_vdisable(std::io::stderr()));
    }

    #[test_log::test]
    fn probe_agrees_across_standard_streams() {
        // glibc and musl answer _PC_VDISABLE without consulting the
        // file, so the standard streams must agree with each other.
        let out = probe_vdisable(std::io::stdout());
        let err = probe_vdisable(std::io::stderr());

        assert_eq!(out, err);
    }
}
