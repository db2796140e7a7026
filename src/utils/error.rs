//! Error handling for WebCee compilation
//!
//! This module provides the grammar failure payload and the unified error
//! and result types for all compile operations.

use std::fmt;

use crate::core::wce2html::engine::token::{Token, TokenKind};

/// A grammar violation raised by `expect`: the required token tag was absent
/// or mismatched. Carries the expected tag and the actual token (or its
/// absence) for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    pub expected: TokenKind,
    pub found: Option<Token>,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(token) => write!(f, "expected {}, found {}", self.expected, token),
            None => write!(f, "expected {}, found nothing", self.expected),
        }
    }
}

/// Compile error type
#[derive(Debug, Clone)]
pub enum CompileError {
    /// Grammar violation - aborts the whole build, no partial tree
    Grammar(GrammarError),
    /// Container nesting exceeded the fixed depth guard
    NestingTooDeep { limit: usize },
    /// IO error (for file operations)
    Io { message: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Grammar(err) => write!(f, "Grammar error: {}", err),
            CompileError::NestingTooDeep { limit } => {
                write!(f, "Container nesting exceeds the depth limit of {}", limit)
            }
            CompileError::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<GrammarError> for CompileError {
    fn from(err: GrammarError) -> Self {
        CompileError::Grammar(err)
    }
}

impl From<std::io::Error> for CompileError {
    fn from(err: std::io::Error) -> Self {
        CompileError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for compile operations
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_error_display() {
        let err = GrammarError {
            expected: TokenKind::RBrace,
            found: Some(Token::new(TokenKind::Semicolon, ";")),
        };
        assert_eq!(err.to_string(), "expected '}', found ';'");
    }

    #[test]
    fn test_grammar_error_display_at_end() {
        let err = GrammarError {
            expected: TokenKind::RParen,
            found: None,
        };
        assert_eq!(err.to_string(), "expected ')', found nothing");
    }

    #[test]
    fn test_compile_error_wraps_grammar() {
        let err: CompileError = GrammarError {
            expected: TokenKind::LParen,
            found: Some(Token::new(TokenKind::LBrace, "{")),
        }
        .into();
        assert!(err.to_string().contains("Grammar error"));
        assert!(err.to_string().contains("'('"));
    }

    #[test]
    fn test_depth_error_display() {
        let err = CompileError::NestingTooDeep { limit: 64 };
        assert!(err.to_string().contains("64"));
    }
}
