//! Closed status sets.
//!
//! Each enum serializes to the lowercase wire value used by the web client.
//! Entities whose status is free-form (employees, clients, departments)
//! keep a plain `String` instead.

use std::fmt;
use std::str::FromStr;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The wire value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok($name::$variant), )+
                    other => Err(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        stringify!($name),
                        [$( $val ),+].join(", ")
                    )),
                }
            }
        }
    };
}

define_status_enum! {
    /// Design pipeline state of a project.
    ProjectStatus {
        New = "new",
        Hold = "hold",
        Completed = "completed",
        Revision = "revision",
    }
}

define_status_enum! {
    /// Leave request decision state. A later decision replaces an earlier one.
    LeaveStatus {
        Pending = "pending",
        Approved = "approved",
        Rejected = "rejected",
    }
}

define_status_enum! {
    /// Payroll run state.
    PayrollStatus {
        Pending = "pending",
        Processed = "processed",
        Paid = "paid",
    }
}

define_status_enum! {
    /// Daily attendance classification.
    AttendanceStatus {
        Present = "present",
        Absent = "absent",
        Late = "late",
        HalfDay = "half-day",
    }
}

impl Default for LeaveStatus {
    fn default() -> Self {
        LeaveStatus::Pending
    }
}

impl Default for PayrollStatus {
    fn default() -> Self {
        PayrollStatus::Pending
    }
}

/// Default status for employees, clients and departments.
pub const DEFAULT_ACTIVE_STATUS: &str = "active";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_round_trips_through_str() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "archived".parse::<ProjectStatus>().unwrap_err();
        assert!(err.contains("Invalid ProjectStatus"));
        assert!(err.contains("revision"));
    }

    #[test]
    fn half_day_uses_hyphenated_wire_value() {
        let json = serde_json::to_string(&AttendanceStatus::HalfDay).unwrap();
        assert_eq!(json, "\"half-day\"");
        let back: AttendanceStatus = serde_json::from_str("\"half-day\"").unwrap();
        assert_eq!(back, AttendanceStatus::HalfDay);
    }

    #[test]
    fn pending_is_the_default_for_requests_and_payroll() {
        assert_eq!(LeaveStatus::default(), LeaveStatus::Pending);
        assert_eq!(PayrollStatus::default(), PayrollStatus::Pending);
    }
}
