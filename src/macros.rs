//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span from a start offset and a length

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, TokenValue::Number(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span covering `$len` bytes starting at byte offset `$start`.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $len:expr) => {
        Span {
            start: Position($start as u32),
            end: Position(($start + $len) as u32),
        }
    };
}
