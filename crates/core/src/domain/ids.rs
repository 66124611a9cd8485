use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::DomainError;

macro_rules! define_id_type {
    ($name:ident, $kind:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            pub const KIND: &'static str = $kind;

            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self).map_err(|_| DomainError::InvalidId {
                    kind: Self::KIND,
                    value: s.to_string(),
                })
            }
        }
    };
}

define_id_type!(FeedbackId, "feedback");
define_id_type!(CourseId, "course");
define_id_type!(FacultyId, "faculty");
define_id_type!(StudentId, "student");
define_id_type!(AnnouncementId, "announcement");
