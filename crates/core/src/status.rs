//! Status enums shared across the workspace.
//!
//! Statuses are persisted as lowercase text and constrained by CHECK
//! clauses in the schema; the enums here are the single mapping between
//! the database labels and typed Rust values.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $label:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The database label for this status.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            /// Parse a database label back into a typed status.
            pub fn parse(label: &str) -> Result<Self, CoreError> {
                match label {
                    $( $label => Ok(Self::$variant), )+
                    other => Err(CoreError::Internal(format!(
                        concat!("Unknown ", stringify!($name), " label '{}'"),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_status_enum! {
    /// Employment status on the employee row. Flipped to `Vacation` as a
    /// side effect of approving a vacation time-off request.
    EmployeeStatus {
        Active = "active",
        Vacation = "vacation",
        Terminated = "terminated",
        Leave = "leave",
    }
}

define_status_enum! {
    /// Review status of an uploaded document.
    DocumentStatus {
        Pending = "pending",
        Approved = "approved",
        Rejected = "rejected",
    }
}

define_status_enum! {
    /// Completion status of an onboarding assignment.
    OnboardingStatus {
        Pending = "pending",
        Completed = "completed",
    }
}

define_status_enum! {
    /// Decision status of a time-off request. Approved and rejected are
    /// terminal.
    TimeOffStatus {
        Pending = "pending",
        Approved = "approved",
        Rejected = "rejected",
    }
}

define_status_enum! {
    /// Category of a time-off request.
    TimeOffKind {
        Vacation = "vacation",
        Sick = "sick",
        Personal = "personal",
        Unpaid = "unpaid",
    }
}
