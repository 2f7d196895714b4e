//! Limit-value codec — kernel sentinels vs. host numbers.
//!
//! `rlim_t` overloads one unsigned integer type with three meanings: an
//! ordinary value, "unbounded" (`RLIM_INFINITY`), and the saved sentinels
//! (`RLIM_SAVED_CUR` / `RLIM_SAVED_MAX`, meaning "leave this slot at its
//! current value"). Internally this module keeps the three cases as a tagged
//! sum and only flattens to the host convention (`null` / positive infinity /
//! finite number) at the boundary, so the cases cannot be conflated in
//! between. Everything except the three sentinel mappings is a lossless
//! bit-for-bit bridge; nothing is clamped or rounded.

use libc::rlim_t;

use crate::error::PrlimitError;

/// Which half of a limit pair a value occupies.
///
/// Encoding an unspecified value is directionally asymmetric: the soft slot
/// takes `RLIM_SAVED_CUR`, the hard slot `RLIM_SAVED_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Soft,
    Hard,
}

/// A single resource-limit value, with the sentinel cases kept explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitValue {
    /// An ordinary, enforced ceiling.
    Finite(u64),
    /// No ceiling (`RLIM_INFINITY`).
    Unbounded,
    /// Not a concrete number — the kernel's saved sentinel on output, or
    /// "use the saved value" on input.
    Unspecified,
}

impl LimitValue {
    /// Decodes a raw kernel value.
    ///
    /// The infinity check comes first: glibc defines the saved sentinels as
    /// aliases of `RLIM_INFINITY`, and on such platforms the infinity
    /// mapping wins.
    pub fn from_raw(raw: rlim_t) -> Self {
        if raw == libc::RLIM_INFINITY {
            LimitValue::Unbounded
        } else if raw == libc::RLIM_SAVED_CUR || raw == libc::RLIM_SAVED_MAX {
            LimitValue::Unspecified
        } else {
            LimitValue::Finite(raw as u64)
        }
    }

    /// Encodes into the raw kernel value for the given slot.
    pub fn to_raw(self, slot: Slot) -> rlim_t {
        match self {
            LimitValue::Finite(n) => n as rlim_t,
            LimitValue::Unbounded => libc::RLIM_INFINITY,
            LimitValue::Unspecified => match slot {
                Slot::Soft => libc::RLIM_SAVED_CUR,
                Slot::Hard => libc::RLIM_SAVED_MAX,
            },
        }
    }

    /// Converts a host value (`null` or a number) into a limit value.
    ///
    /// `None` means unspecified, positive infinity means unbounded, and any
    /// other finite non-negative number is truncated to the kernel's
    /// unsigned limit type. Negative numbers and NaN are rejected.
    pub fn from_host(value: Option<f64>) -> Result<Self, PrlimitError> {
        match value {
            None => Ok(LimitValue::Unspecified),
            Some(n) if n == f64::INFINITY => Ok(LimitValue::Unbounded),
            Some(n) if n.is_finite() && n >= 0.0 => Ok(LimitValue::Finite(n as u64)),
            Some(n) => Err(PrlimitError::InvalidLimitValue { value: n }),
        }
    }

    /// Flattens to the host convention: `None` for unspecified, positive
    /// infinity for unbounded, the number otherwise.
    pub fn to_host(self) -> Option<f64> {
        match self {
            LimitValue::Finite(n) => Some(n as f64),
            LimitValue::Unbounded => Some(f64::INFINITY),
            LimitValue::Unspecified => None,
        }
    }
}

/// A soft/hard limit pair, the unit the kernel reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPair {
    pub soft: LimitValue,
    pub hard: LimitValue,
}

impl LimitPair {
    /// Decodes a kernel `rlimit` struct.
    pub fn from_raw(raw: libc::rlimit) -> Self {
        LimitPair {
            soft: LimitValue::from_raw(raw.rlim_cur),
            hard: LimitValue::from_raw(raw.rlim_max),
        }
    }

    /// Encodes into a kernel `rlimit` struct, applying the per-slot
    /// sentinel asymmetry.
    pub fn to_raw(self) -> libc::rlimit {
        libc::rlimit {
            rlim_cur: self.soft.to_raw(Slot::Soft),
            rlim_max: self.hard.to_raw(Slot::Hard),
        }
    }
}
