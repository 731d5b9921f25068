use thiserror::Error;

use crate::value::Kind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The presented value is neither an integer nor text.
    #[error("unsupported value type '{0}': only integer and text values are allowed")]
    UnsupportedType(&'static str),
    /// The presented value's kind differs from the kind the list is locked to.
    #[error("not allowed type '{found}': list already has type '{locked}'")]
    TypeMismatch { found: Kind, locked: Kind },
    #[error("list is empty")]
    EmptyList,
}
