//! Parsing of the textual ordinal notation into raw terms.
//!
//! A character-level lexer feeds a small recursive-descent parser. The
//! output is a raw `Term`; callers normalize it themselves. The one
//! exception is the ψ subscript, which is normalized in place so the
//! Bachmann-Howard ceiling check sees a canonical index.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr  := power ('+' power)*
//! power := atom ('^' power)?            -- right associative
//! atom  := NUMBER | 'ω'
//!        | ('ε' | 'ζ' | 'η') '_' atom
//!        | ('φ' | 'ψ') '_' atom '(' expr ')'
//!        | '(' expr ')'
//! ```

use bho_calc::normalize;
use bho_term::{ErrorInfo, Term, TermError};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(u64),
    Omega,
    Epsilon,
    Zeta,
    Eta,
    Phi,
    Psi,
    Plus,
    Caret,
    Underscore,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy)]
struct Lexed {
    token: Token,
    position: usize,
}

fn malformed(code: &str, message: impl Into<String>, position: usize) -> TermError {
    TermError::MalformedIndex(
        ErrorInfo::new(code, message).with_context("position", position.to_string()),
    )
}

fn lex(input: &str) -> Result<Vec<Lexed>, TermError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let position = i;
        let token = match chars[i] {
            ' ' | '\t' => {
                i += 1;
                continue;
            }
            '0'..='9' => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                let value = text.parse::<u64>().map_err(|_| {
                    malformed("notation-number-overflow", "numeral does not fit in u64", start)
                })?;
                tokens.push(Lexed {
                    token: Token::Number(value),
                    position: start,
                });
                continue;
            }
            'ω' => Token::Omega,
            'ε' => Token::Epsilon,
            'ζ' => Token::Zeta,
            'η' => Token::Eta,
            'φ' => Token::Phi,
            'ψ' => Token::Psi,
            '+' => Token::Plus,
            '^' => Token::Caret,
            '_' => Token::Underscore,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(malformed(
                    "notation-unexpected-char",
                    format!("unexpected character {other:?}"),
                    position,
                ))
            }
        };
        tokens.push(Lexed { token, position });
        i += 1;
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Lexed>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).map(|lexed| lexed.token)
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .map(|lexed| lexed.position)
            .unwrap_or_else(|| {
                self.tokens
                    .last()
                    .map(|lexed| lexed.position + 1)
                    .unwrap_or(0)
            })
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn expect(&mut self, wanted: Token, what: &str) -> Result<(), TermError> {
        let position = self.position();
        match self.bump() {
            Some(token) if token == wanted => Ok(()),
            _ => Err(malformed(
                "notation-expected-token",
                format!("expected {what}"),
                position,
            )),
        }
    }

    fn parse_expr(&mut self) -> Result<Term, TermError> {
        let mut parts = vec![self.parse_power()?];
        while self.peek() == Some(Token::Plus) {
            self.cursor += 1;
            parts.push(self.parse_power()?);
        }
        Ok(Term::sum(parts))
    }

    fn parse_power(&mut self) -> Result<Term, TermError> {
        let base = self.parse_atom()?;
        if self.peek() == Some(Token::Caret) {
            self.cursor += 1;
            let exponent = self.parse_power()?;
            return Ok(Term::power(base, exponent));
        }
        Ok(base)
    }

    fn parse_subscript(&mut self) -> Result<Term, TermError> {
        self.expect(Token::Underscore, "'_' before a subscript")?;
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<Term, TermError> {
        let position = self.position();
        match self.bump() {
            Some(Token::Number(n)) => Ok(Term::nat(n)),
            Some(Token::Omega) => Ok(Term::Omega),
            Some(Token::Epsilon) => Ok(Term::epsilon(self.parse_subscript()?)),
            Some(Token::Zeta) => Ok(Term::zeta(self.parse_subscript()?)),
            Some(Token::Eta) => Ok(Term::eta(self.parse_subscript()?)),
            Some(Token::Phi) => {
                let index = self.parse_subscript()?;
                self.expect(Token::LParen, "'(' after a φ subscript")?;
                let argument = self.parse_expr()?;
                self.expect(Token::RParen, "')' closing a φ argument")?;
                Ok(Term::veblen(index, argument))
            }
            Some(Token::Psi) => {
                let index = self.parse_subscript()?;
                self.expect(Token::LParen, "'(' after a ψ subscript")?;
                let argument = self.parse_expr()?;
                self.expect(Token::RParen, "')' closing a ψ argument")?;
                Term::buchholz(normalize(&index), argument)
            }
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(malformed(
                "notation-expected-term",
                "expected a number, ω, a hierarchy function, or '('",
                position,
            )),
        }
    }
}

/// Parses notation text into a raw term.
pub fn parse(input: &str) -> Result<Term, TermError> {
    let tokens = lex(input)?;
    let mut parser = Parser { tokens, cursor: 0 };
    let term = parser.parse_expr()?;
    if parser.cursor != parser.tokens.len() {
        return Err(malformed(
            "notation-trailing-input",
            "input continues after a complete expression",
            parser.position(),
        ));
    }
    Ok(term)
}
