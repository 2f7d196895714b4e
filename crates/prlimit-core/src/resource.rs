//! Resource kind resolution — the static, platform-conditional name table.
//!
//! Maps case-insensitive resource names ("nofile", "cpu", ...) to the
//! platform's `RLIMIT_*` code. The set of entries is fixed at build time by
//! what the target defines; a kind the platform lacks never appears in the
//! table and is therefore unresolvable by name. Numeric codes bypass this
//! module entirely: they are handed to the kernel unvalidated, since the
//! kernel is the final authority on which codes exist.

use libc::c_int;

use crate::error::PrlimitError;

/// One entry of the resource-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Lowercase name accepted (case-insensitively) by [`resolve_name`].
    pub name: &'static str,
    /// The platform's `RLIMIT_*` code for this kind.
    pub code: c_int,
}

/// Kinds every platform this crate supports defines.
static POSIX_RESOURCES: &[ResourceEntry] = &[
    ResourceEntry {
        name: "as",
        code: libc::RLIMIT_AS as c_int,
    },
    ResourceEntry {
        name: "core",
        code: libc::RLIMIT_CORE as c_int,
    },
    ResourceEntry {
        name: "cpu",
        code: libc::RLIMIT_CPU as c_int,
    },
    ResourceEntry {
        name: "data",
        code: libc::RLIMIT_DATA as c_int,
    },
    ResourceEntry {
        name: "fsize",
        code: libc::RLIMIT_FSIZE as c_int,
    },
    ResourceEntry {
        name: "memlock",
        code: libc::RLIMIT_MEMLOCK as c_int,
    },
    ResourceEntry {
        name: "nofile",
        code: libc::RLIMIT_NOFILE as c_int,
    },
    ResourceEntry {
        name: "nproc",
        code: libc::RLIMIT_NPROC as c_int,
    },
    ResourceEntry {
        name: "rss",
        code: libc::RLIMIT_RSS as c_int,
    },
    ResourceEntry {
        name: "stack",
        code: libc::RLIMIT_STACK as c_int,
    },
];

/// Kinds Linux defines on top of the POSIX set.
#[cfg(target_os = "linux")]
static LINUX_RESOURCES: &[ResourceEntry] = &[
    ResourceEntry {
        name: "locks",
        code: libc::RLIMIT_LOCKS as c_int,
    },
    ResourceEntry {
        name: "msgqueue",
        code: libc::RLIMIT_MSGQUEUE as c_int,
    },
    ResourceEntry {
        name: "nice",
        code: libc::RLIMIT_NICE as c_int,
    },
    ResourceEntry {
        name: "rtprio",
        code: libc::RLIMIT_RTPRIO as c_int,
    },
    ResourceEntry {
        name: "rttime",
        code: libc::RLIMIT_RTTIME as c_int,
    },
    ResourceEntry {
        name: "sigpending",
        code: libc::RLIMIT_SIGPENDING as c_int,
    },
];

#[cfg(not(target_os = "linux"))]
static LINUX_RESOURCES: &[ResourceEntry] = &[];

/// Iterates over every resource kind the compiling platform supports.
pub fn resource_table() -> impl Iterator<Item = &'static ResourceEntry> {
    POSIX_RESOURCES.iter().chain(LINUX_RESOURCES.iter())
}

/// Resolves a resource name to the platform's `RLIMIT_*` code.
///
/// Lookup is case-insensitive. An unmatched name is a normal outcome, not a
/// programming error: platforms differ in which kinds they define, so the
/// caller must be able to distinguish [`PrlimitError::UnknownResource`] from
/// a type error.
pub fn resolve_name(name: &str) -> Result<c_int, PrlimitError> {
    resource_table()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.code)
        .ok_or_else(|| PrlimitError::UnknownResource {
            name: name.to_owned(),
        })
}
