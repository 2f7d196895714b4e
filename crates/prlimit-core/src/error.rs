//! Error taxonomy for the prlimit layer.
//!
//! Two tiers: request-validation errors raised before any syscall is
//! attempted (arity, types, unknown name, malformed limit object), and
//! syscall-reported errors translated from errno after the kernel attempt.
//! Every variant carries enough structure for the caller to branch
//! programmatically instead of parsing the display string. No error here is
//! transient; nothing is ever retried.

use thiserror::Error;

/// Everything that can go wrong in one prlimit invocation.
#[derive(Debug, Error, PartialEq)]
pub enum PrlimitError {
    /// Wrong number of arguments (before any syscall).
    #[error("prlimit: function takes 2 or 3 arguments, got {given}")]
    Arity { given: usize },

    /// An argument had the wrong type (before any syscall).
    #[error("prlimit: {what}")]
    Type { what: &'static str },

    /// The resource name matched no table entry for this platform.
    #[error("prlimit: resource '{name}' is not found by string (could be not supported in your OS)")]
    UnknownResource { name: String },

    /// A new-limit object was missing its soft or hard field.
    #[error("prlimit: new limit must supply both 'soft' and 'hard', missing '{missing}'")]
    MalformedLimit { missing: &'static str },

    /// A limit field was a number but not encodable (negative or NaN).
    #[error("prlimit: limit value {value} is not a non-negative number")]
    InvalidLimitValue { value: f64 },

    /// EFAULT: a request buffer was not reachable by the kernel.
    #[error("prlimit: EFAULT: a pointer argument points to a location outside the accessible address space")]
    Fault,

    /// EINVAL: bad resource code, or the new soft limit exceeded the hard limit.
    #[error("prlimit: EINVAL: the value specified in resource is not valid, or the new soft limit was greater than the new hard limit")]
    Validation,

    /// EPERM: privilege failure, one of the three causes prlimit(2) documents.
    #[error(
        "prlimit: EPERM: an unprivileged process tried to raise the hard limit \
         (CAP_SYS_RESOURCE is required), or tried to raise the hard RLIMIT_NOFILE \
         limit above the kernel maximum, or lacked permission to set limits for \
         the process specified by pid"
    )]
    Permission,

    /// ESRCH: no process with the requested pid.
    #[error("prlimit: ESRCH: could not find a process with the ID specified in pid")]
    ProcessNotFound,

    /// A failure code outside the recognized set; carries the raw errno.
    #[error("prlimit: unknown error number: {code}")]
    UnknownSyscall { code: i32 },
}

impl PrlimitError {
    /// Translates a raw errno from a failed `prlimit(2)` call.
    ///
    /// The four conditions the man page names get dedicated variants; any
    /// other code is reported verbatim. Callers never see a raw errno for
    /// the recognized conditions.
    pub fn from_errno(code: i32) -> Self {
        match code {
            libc::EFAULT => PrlimitError::Fault,
            libc::EINVAL => PrlimitError::Validation,
            libc::EPERM => PrlimitError::Permission,
            libc::ESRCH => PrlimitError::ProcessNotFound,
            other => PrlimitError::UnknownSyscall { code: other },
        }
    }

    /// Whether the error was produced before the syscall was attempted.
    pub fn is_validation_tier(&self) -> bool {
        matches!(
            self,
            PrlimitError::Arity { .. }
                | PrlimitError::Type { .. }
                | PrlimitError::UnknownResource { .. }
                | PrlimitError::MalformedLimit { .. }
                | PrlimitError::InvalidLimitValue { .. }
        )
    }
}
