//! # prlimit-abi
//!
//! The syscall boundary for the prlimit layer: validates a loosely-typed
//! request, crosses into the kernel exactly once, and translates the result
//! back into host-representable values. The pure pieces (name table, value
//! codec, error taxonomy) live in `prlimit-core`; this crate adds the parts
//! that touch the kernel.
//!
//! One operation per invocation, on the caller's thread, blocking for the
//! duration of the kernel transition. No caching, batching, or retrying;
//! concurrent callers acting on the same pid get no mutual exclusion beyond
//! what the kernel itself provides.

pub mod request;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod syscall;

use libc::{c_int, pid_t};

use prlimit_core::{LimitPair, PrlimitError};

pub use request::{Arg, Field, LimitSpec, Request};

/// The previous limit pair, flattened to the host convention:
/// `None` for the saved sentinel, positive infinity for unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitReport {
    pub soft: Option<f64>,
    pub hard: Option<f64>,
}

impl From<LimitPair> for LimitReport {
    fn from(pair: LimitPair) -> Self {
        LimitReport {
            soft: pair.soft.to_host(),
            hard: pair.hard.to_host(),
        }
    }
}

/// The single externally callable operation.
///
/// Arguments are `(pid, resource)` for a pure read or
/// `(pid, resource, new_limit)` to set; the previous pair is returned in
/// both cases. See [`request::parse`] for the validation contract and
/// [`PrlimitError`] for the failure taxonomy.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn get_or_set_resource_limit(args: &[Arg]) -> Result<LimitReport, PrlimitError> {
    let req = request::parse(args)?;
    dispatch(&req).map(LimitReport::from)
}

/// Reads the limit pair for `resource` of process `pid` (0 = calling
/// process). Typed equivalent of the two-argument form.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn read_limits(pid: pid_t, resource: c_int) -> Result<LimitPair, PrlimitError> {
    dispatch(&Request {
        pid,
        resource,
        new_limit: None,
    })
}

/// Atomically replaces the limit pair for `resource` of process `pid`,
/// returning the previous pair. Typed equivalent of the three-argument form.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn write_limits(
    pid: pid_t,
    resource: c_int,
    new_limit: LimitPair,
) -> Result<LimitPair, PrlimitError> {
    dispatch(&Request {
        pid,
        resource,
        new_limit: Some(new_limit),
    })
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn dispatch(req: &Request) -> Result<LimitPair, PrlimitError> {
    let new_raw = req.new_limit.map(LimitPair::to_raw);
    let old = syscall::sys_prlimit(req.pid, req.resource, new_raw.as_ref())
        .map_err(PrlimitError::from_errno)?;
    Ok(LimitPair::from_raw(old))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_flattens_the_sentinels() {
        use prlimit_core::LimitValue;

        let report = LimitReport::from(LimitPair {
            soft: LimitValue::Finite(256),
            hard: LimitValue::Unbounded,
        });
        assert_eq!(report.soft, Some(256.0));
        assert_eq!(report.hard, Some(f64::INFINITY));

        let report = LimitReport::from(LimitPair {
            soft: LimitValue::Unspecified,
            hard: LimitValue::Unspecified,
        });
        assert_eq!(report.soft, None);
        assert_eq!(report.hard, None);
    }
}
