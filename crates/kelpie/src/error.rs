/// Error recorded while scanning path data.
///
/// Scanning never fails hard: the first error stops the scan, the valid
/// segment prefix is kept on the [`SvgPath`](crate::SvgPath), and the error
/// stays readable through [`SvgPath::last_error`](crate::SvgPath::last_error).
/// Positions are byte offsets into the input string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("bad command `{command}` (at pos {pos})")]
    BadCommand { command: char, pos: usize },

    #[error("param should start with 0-9 or `.` (at pos {pos})")]
    BadParamStart { pos: usize },

    #[error("numbers started with `0` such as `09` are illegal (at pos {pos})")]
    LeadingZero { pos: usize },

    #[error("invalid float exponent (at pos {pos})")]
    InvalidExponent { pos: usize },

    #[error("missed param (at pos {pos})")]
    MissingParam { pos: usize },

    #[error("arc flag can be 0 or 1 only (at pos {pos})")]
    BadArcFlag { pos: usize },

    #[error("path should start with `M` or `m`")]
    MustStartWithMoveto,
}

impl ParseError {
    /// Byte offset where scanning stopped, for positional errors.
    pub fn pos(&self) -> Option<usize> {
        match *self {
            ParseError::BadCommand { pos, .. }
            | ParseError::BadParamStart { pos }
            | ParseError::LeadingZero { pos }
            | ParseError::InvalidExponent { pos }
            | ParseError::MissingParam { pos }
            | ParseError::BadArcFlag { pos } => Some(pos),
            ParseError::MustStartWithMoveto => None,
        }
    }
}
