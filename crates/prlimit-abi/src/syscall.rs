//! Narrow `prlimit(2)` boundary.
//!
//! The single place in the workspace that crosses into the kernel. Callers
//! hand over validated, strongly-typed inputs; raw pointers exist only
//! inside this module, for the duration of one call. The call is
//! synchronous and blocking, with no retry and no cancellation — every
//! failure cause (permission, existence, validation) is final.

use std::io;
use std::ptr;

use libc::{c_int, pid_t};

// glibc types the resource parameter as an enum, musl and bionic as a
// plain int.
#[cfg(target_env = "gnu")]
type RlimitResource = libc::__rlimit_resource_t;
#[cfg(not(target_env = "gnu"))]
type RlimitResource = c_int;

/// Invokes `prlimit(pid, resource, new_limit, &old_limit)`.
///
/// The old-limit output buffer is always supplied, matching kernel
/// semantics: the previous pair is produced whether or not new limits are
/// being set. On failure returns the raw errno, captured immediately after
/// the call; translation to a typed error happens in `prlimit-core`.
///
/// On success with `new_limit` supplied, the target process's limits have
/// been mutated by the kernel; there is no rollback.
#[inline]
pub fn sys_prlimit(
    pid: pid_t,
    resource: c_int,
    new_limit: Option<&libc::rlimit>,
) -> Result<libc::rlimit, i32> {
    let new_ptr: *const libc::rlimit = match new_limit {
        Some(rlim) => rlim,
        None => ptr::null(),
    };
    let mut old = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };

    // SAFETY: `new_ptr` is null or points at a caller-owned rlimit that
    // outlives the call; `old` is a valid output buffer owned by this
    // frame. The kernel rejects anything else with EFAULT.
    let rc = unsafe {
        libc::prlimit(pid, resource as RlimitResource, new_ptr, &mut old)
    };

    if rc == 0 {
        Ok(old)
    } else {
        Err(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }
}
