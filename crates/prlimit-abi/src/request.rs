//! Loose-argument validation — everything checked before the syscall.
//!
//! The calling environment hands over an untyped argument list; this module
//! turns it into a [`Request`] or rejects it. All failures here are
//! validation-tier: the kernel is never consulted, and the caller can always
//! recover by fixing the request.

use libc::{c_int, pid_t};

use prlimit_core::{resolve_name, LimitPair, LimitValue, PrlimitError};

/// A loosely-typed argument as a host environment would supply it.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Number(f64),
    Text(String),
    Limit(LimitSpec),
}

/// One field of a new-limit object.
///
/// `Absent` records that the key was not supplied at all, which is distinct
/// from an explicit null: a null encodes the saved sentinel, an absent key
/// is a malformed request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Field {
    #[default]
    Absent,
    Null,
    Number(f64),
}

impl Field {
    fn host(self, missing: &'static str) -> Result<Option<f64>, PrlimitError> {
        match self {
            Field::Absent => Err(PrlimitError::MalformedLimit { missing }),
            Field::Null => Ok(None),
            Field::Number(n) => Ok(Some(n)),
        }
    }
}

/// A new-limit object as received: both fields mandatory, checked at parse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LimitSpec {
    pub soft: Field,
    pub hard: Field,
}

/// A fully validated request, ready for the syscall boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    /// Target process; zero means the calling process, negative addresses a
    /// process group (kernel semantics, not re-checked here).
    pub pid: pid_t,
    /// Kernel resource code. Names were resolved against the table; numeric
    /// input passes through unvalidated, the kernel being the final
    /// authority on which codes exist.
    pub resource: c_int,
    /// Encoded new limits, or `None` for a pure read.
    pub new_limit: Option<LimitPair>,
}

fn parse_pid(arg: &Arg) -> Result<pid_t, PrlimitError> {
    match arg {
        Arg::Number(n)
            if n.fract() == 0.0
                && *n >= pid_t::MIN as f64
                && *n <= pid_t::MAX as f64 =>
        {
            Ok(*n as pid_t)
        }
        _ => Err(PrlimitError::Type {
            what: "first argument must be an integer (pid)",
        }),
    }
}

fn parse_resource(arg: &Arg) -> Result<c_int, PrlimitError> {
    match arg {
        // Numeric codes pass through untouched; out-of-range codes are the
        // kernel's to reject (EINVAL).
        Arg::Number(n) => Ok(*n as c_int),
        Arg::Text(name) => resolve_name(name),
        Arg::Limit(_) => Err(PrlimitError::Type {
            what: "second argument must be a number or a string (resource)",
        }),
    }
}

fn parse_new_limit(arg: &Arg) -> Result<LimitPair, PrlimitError> {
    let spec = match arg {
        Arg::Limit(spec) => spec,
        _ => {
            return Err(PrlimitError::Type {
                what: "third argument must be a limit object with 'soft' and 'hard'",
            })
        }
    };
    Ok(LimitPair {
        soft: LimitValue::from_host(spec.soft.host("soft")?)?,
        hard: LimitValue::from_host(spec.hard.host("hard")?)?,
    })
}

/// Validates the argument list and builds a [`Request`].
pub fn parse(args: &[Arg]) -> Result<Request, PrlimitError> {
    if args.len() < 2 || args.len() > 3 {
        return Err(PrlimitError::Arity { given: args.len() });
    }

    let pid = parse_pid(&args[0])?;
    let resource = parse_resource(&args[1])?;
    let new_limit = match args.get(2) {
        Some(arg) => Some(parse_new_limit(arg)?),
        None => None,
    };

    Ok(Request {
        pid,
        resource,
        new_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nofile() -> Arg {
        Arg::Text("nofile".into())
    }

    #[test]
    fn two_arguments_make_a_pure_read() {
        let req = parse(&[Arg::Number(0.0), nofile()]).unwrap();
        assert_eq!(req.pid, 0);
        assert_eq!(req.resource, libc::RLIMIT_NOFILE as c_int);
        assert!(req.new_limit.is_none());
    }

    #[test]
    fn one_and_four_arguments_fail_arity() {
        assert_eq!(
            parse(&[Arg::Number(0.0)]).unwrap_err(),
            PrlimitError::Arity { given: 1 }
        );
        let four = [
            Arg::Number(0.0),
            nofile(),
            Arg::Limit(LimitSpec::default()),
            Arg::Number(0.0),
        ];
        assert_eq!(
            parse(&four).unwrap_err(),
            PrlimitError::Arity { given: 4 }
        );
        assert_eq!(parse(&[]).unwrap_err(), PrlimitError::Arity { given: 0 });
    }

    #[test]
    fn pid_must_be_an_integer_number() {
        assert!(matches!(
            parse(&[Arg::Text("self".into()), nofile()]).unwrap_err(),
            PrlimitError::Type { .. }
        ));
        assert!(matches!(
            parse(&[Arg::Number(1.5), nofile()]).unwrap_err(),
            PrlimitError::Type { .. }
        ));
    }

    #[test]
    fn negative_pid_addresses_a_process_group() {
        let req = parse(&[Arg::Number(-42.0), nofile()]).unwrap();
        assert_eq!(req.pid, -42);
    }

    #[test]
    fn numeric_resource_codes_pass_through_unvalidated() {
        let req = parse(&[Arg::Number(0.0), Arg::Number(99999.0)]).unwrap();
        assert_eq!(req.resource, 99999);
    }

    #[test]
    fn resource_name_lookup_is_case_insensitive() {
        for name in ["NOFILE", "nofile", "NoFile"] {
            let req = parse(&[Arg::Number(0.0), Arg::Text(name.into())]).unwrap();
            assert_eq!(req.resource, libc::RLIMIT_NOFILE as c_int);
        }
    }

    #[test]
    fn unknown_resource_name_is_not_a_type_error() {
        let err = parse(&[Arg::Number(0.0), Arg::Text("bogus".into())]).unwrap_err();
        assert!(matches!(err, PrlimitError::UnknownResource { .. }));
    }

    #[test]
    fn resource_must_be_number_or_string() {
        let err =
            parse(&[Arg::Number(0.0), Arg::Limit(LimitSpec::default())]).unwrap_err();
        assert!(matches!(err, PrlimitError::Type { .. }));
    }

    #[test]
    fn partial_limit_object_is_malformed_not_defaulted() {
        let spec = LimitSpec {
            soft: Field::Number(100.0),
            hard: Field::Absent,
        };
        let err = parse(&[Arg::Number(0.0), nofile(), Arg::Limit(spec)]).unwrap_err();
        assert_eq!(err, PrlimitError::MalformedLimit { missing: "hard" });

        let spec = LimitSpec {
            soft: Field::Absent,
            hard: Field::Number(100.0),
        };
        let err = parse(&[Arg::Number(0.0), nofile(), Arg::Limit(spec)]).unwrap_err();
        assert_eq!(err, PrlimitError::MalformedLimit { missing: "soft" });
    }

    #[test]
    fn null_fields_encode_the_saved_sentinels() {
        let spec = LimitSpec {
            soft: Field::Null,
            hard: Field::Null,
        };
        let req = parse(&[Arg::Number(0.0), nofile(), Arg::Limit(spec)]).unwrap();
        let pair = req.new_limit.unwrap();
        assert_eq!(pair.soft, LimitValue::Unspecified);
        assert_eq!(pair.hard, LimitValue::Unspecified);
        let raw = pair.to_raw();
        assert_eq!(raw.rlim_cur, libc::RLIM_SAVED_CUR);
        assert_eq!(raw.rlim_max, libc::RLIM_SAVED_MAX);
    }

    #[test]
    fn non_limit_third_argument_is_a_type_error() {
        let err = parse(&[Arg::Number(0.0), nofile(), Arg::Number(7.0)]).unwrap_err();
        assert!(matches!(err, PrlimitError::Type { .. }));
    }

    #[test]
    fn negative_limit_value_is_rejected() {
        let spec = LimitSpec {
            soft: Field::Number(-5.0),
            hard: Field::Null,
        };
        let err = parse(&[Arg::Number(0.0), nofile(), Arg::Limit(spec)]).unwrap_err();
        assert!(matches!(err, PrlimitError::InvalidLimitValue { .. }));
    }
}
