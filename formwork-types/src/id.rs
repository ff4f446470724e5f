use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            /// Create an id from its raw value.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw value.
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

id_type! {
    /// Identity of a survey in the external catalog.
    SurveyId
}

id_type! {
    /// Identity of a question in the external catalog.
    QuestionId
}

id_type! {
    /// Identity of the acting user. Opaque to this crate; authentication
    /// happens in the surrounding web layer.
    UserId
}

id_type! {
    /// Identity of one stored submission (one user's completion of one survey).
    SubmissionId
}

id_type! {
    /// Identity of one stored answer row.
    AnswerId
}
