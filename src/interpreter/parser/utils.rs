use crate::interpreter::lexer::{Spanned, Token};

static END: Spanned = Spanned { token:    Token::End,
                                position: 0, };

/// Read position within a token slice.
///
/// The cursor never moves past the final [`Token::End`] marker, so callers can
/// always peek without checking for exhaustion. Unlike a plain iterator it can
/// also look back at the previously consumed token, which implicit
/// multiplication needs.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Spanned],
    index:  usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the start of `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a [Spanned]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Returns the current token without consuming it.
    ///
    /// A slice without an end marker behaves as if it had one.
    #[must_use]
    pub fn peek(&self) -> &'a Spanned {
        self.tokens.get(self.index).unwrap_or(&END)
    }

    /// Consumes and returns the current token. At the end marker the cursor
    /// stays put.
    pub fn advance(&mut self) -> &'a Spanned {
        let current = self.peek();
        if current.token != Token::End {
            self.index += 1;
        }
        current
    }

    /// Returns the most recently consumed token, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&'a Spanned> {
        self.index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Whether the current token is `token`.
    #[must_use]
    pub fn check(&self, token: &Token) -> bool {
        &self.peek().token == token
    }
}
