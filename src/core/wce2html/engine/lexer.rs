//! Lexer for the WebCee UI language.
//!
//! Converts the UI region's source text into a finite token sequence.
//! Scanning is deliberately lossy: characters outside the grammar are
//! discarded without being reported, and an unterminated string literal
//! simply runs to the end of the input.

use super::token::{Token, TokenKind, TokenStream};

/// The lexer that converts source text to tokens.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    /// Peek at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Byte offset of the next character, or the input length at the end.
    fn peek_offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(i, _)| *i)
            .unwrap_or(self.source.len())
    }

    /// Consume and return the next character.
    fn next_char(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    /// Consume characters while `keep` holds, returning the end offset.
    fn consume_while(&mut self, keep: impl Fn(char) -> bool) -> usize {
        while let Some(c) = self.peek_char() {
            if keep(c) {
                self.next_char();
            } else {
                break;
            }
        }
        self.peek_offset()
    }

    /// Skip a `//` line comment up to (but not including) the next line
    /// terminator.
    fn skip_line_comment(&mut self) {
        self.consume_while(|c| c != '\n');
    }

    /// Read a string literal body after the opening quote.
    ///
    /// A backslash escapes the following character (both are consumed but the
    /// value keeps them verbatim). The closing quote is consumed and excluded
    /// from the value; a missing closing quote ends the literal at the end of
    /// input.
    fn read_string(&mut self, start: usize) -> Token {
        let end = loop {
            match self.peek_char() {
                Some('"') => break self.peek_offset(),
                Some('\\') => {
                    self.next_char();
                    self.next_char();
                }
                Some(_) => {
                    self.next_char();
                }
                None => break self.source.len(),
            }
        };
        // Closing quote, if any
        if self.peek_char() == Some('"') {
            self.next_char();
        }
        Token::new(TokenKind::Str, &self.source[start..end])
    }

    /// Read the next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> Option<Token> {
        loop {
            let start = self.peek_offset();
            let c = self.next_char()?;

            if c.is_whitespace() {
                continue;
            }

            if c == '/' {
                if self.peek_char() == Some('/') {
                    self.skip_line_comment();
                }
                // A lone '/' is not part of the grammar and is dropped.
                continue;
            }

            if c.is_alphabetic() || c == '_' {
                let end = self.consume_while(|c| c.is_alphanumeric() || c == '_');
                return Some(Token::new(TokenKind::Ident, &self.source[start..end]));
            }

            if c == '"' {
                let body_start = start + 1;
                return Some(self.read_string(body_start));
            }

            if c.is_ascii_digit() {
                let end = self.consume_while(|c| c.is_ascii_digit());
                return Some(Token::new(TokenKind::Number, &self.source[start..end]));
            }

            let kind = match c {
                '(' => Some(TokenKind::LParen),
                ')' => Some(TokenKind::RParen),
                '{' => Some(TokenKind::LBrace),
                '}' => Some(TokenKind::RBrace),
                ';' => Some(TokenKind::Semicolon),
                ',' => Some(TokenKind::Comma),
                // Anything else is silently discarded.
                _ => None,
            };

            if let Some(kind) = kind {
                return Some(Token::new(kind, c.to_string()));
            }
        }
    }

    /// Tokenize the entire input, appending exactly one end-of-input token.
    pub fn tokenize(mut self) -> TokenStream {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens.push(Token::new(TokenKind::Eof, ""));
        TokenStream::from_vec(tokens)
    }
}

/// Convenience function to tokenize a string.
pub fn tokenize(source: &str) -> TokenStream {
    Lexer::new(source).tokenize()
}
