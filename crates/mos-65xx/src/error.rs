//! Host-facing errors.
//!
//! Instruction execution never fails. These cover the debugger and
//! save-state interfaces, where the host hands in ids and values that may
//! not make sense for the running variant.

use thiserror::Error;

use crate::Variant;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown register id {0}")]
    UnknownRegister(i32),

    #[error("register {register} does not exist on the {variant}")]
    UnsupportedRegister {
        register: &'static str,
        variant: Variant,
    },

    #[error("register {0} is derived and cannot be written")]
    ReadOnlyRegister(&'static str),

    #[error("unknown CPU variant {0:?}")]
    UnknownVariant(String),

    #[error("state belongs to {found}#{found_instance}, expected {expected}#{expected_instance}")]
    ComponentMismatch {
        expected: &'static str,
        expected_instance: u32,
        found: String,
        found_instance: u32,
    },

    #[error("save state is missing field {0}")]
    MissingField(&'static str),

    #[error("save state has unexpected field {0:?}")]
    UnexpectedField(String),

    #[error("save state has field {0:?} more than once")]
    DuplicateField(String),

    #[error("field {tag} should be {expected} bits wide")]
    FieldWidth { tag: &'static str, expected: u8 },
}
