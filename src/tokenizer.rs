use std::iter::Filter;

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::split_in_three;

pub(crate) type Tokens<'a> = Filter<Tokenizer<'a>, fn(&Token) -> bool>;

/// Split `text` into alternating word runs and separators.
///
/// Concatenating the tokens in order gives back `text` exactly.
pub(crate) fn tokenize(text: &str) -> Tokens {
    let tokens = Tokenizer {
        string: text,
        next_token: None,
    };
    tokens.filter(|t| !t.is_empty())
}

lazy_static! {
    // a word starts with an alphanumeric character; apostrophes may only continue it
    static ref WORD: Regex = Regex::new(r"[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N}']*").unwrap();
}

pub(crate) struct Tokenizer<'a> {
    next_token: Option<Token<'a>>,
    string: &'a str,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.next_token.take() {
            return Some(token);
        }

        if self.string.is_empty() {
            return None;
        }

        if let Some(mat) = WORD.find(self.string) {
            let (before, word, rest) = split_in_three(self.string, mat.start(), mat.end());
            self.string = rest;
            self.next_token = Some(Token::new(word, TokenKind::Word));
            Some(Token::new(before, TokenKind::Separator))
        } else {
            let rest = self.string;
            self.string = "";
            Some(Token::new(rest, TokenKind::Separator))
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Word,
    Separator,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, kind: TokenKind) -> Self {
        Self { text, kind }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
