use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        // Patterns are tried in order; the first one matching at the current
        // offset wins. Two-character operators sit above their one-character
        // prefixes, and the comment pattern sits above Slash. There is no
        // pattern for a bare `!`, so it falls through to InvalidCharacter.
        Lexer {
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("//.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("[a-zA-Z][a-zA-Z0-9_]*").unwrap(), handler: word_handler },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
                RegexPattern { regex: Regex::new("\"").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Quote, "\"") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        for c in self.source[self.pos..self.pos + n].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.line, self.column, Rc::clone(&self.file))
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let position = lexer.position();
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // The digit run is decoded here; the token carries the canonical decimal
    // rendering, so `007` lexes to the same token as `7`. There is no rule
    // for `.`, so a decimal point after the run is rejected by a later call.
    let decoded = match matched.parse::<i64>() {
        Ok(decoded) => decoded,
        Err(_) => {
            return Err(Error::new(
                ErrorImpl::NumberParseError { token: matched },
                position,
            ))
        }
    };

    lexer.push(MK_TOKEN!(TokenKind::Number, decoded.to_string(), position));
    lexer.advance_n(matched.len());
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
    Ok(())
}

fn word_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let position = lexer.position();
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // `int`/`float` and the keyword set are never identifiers, even where an
    // identifier is expected.
    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, value.clone(), position));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, value.clone(), position));
    }

    lexer.advance_n(value.len());
    Ok(())
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone())?;
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::InvalidCharacter { character: lex.at() },
                lex.position(),
            ));
        }
    }

    let position = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), position));
    Ok(lex.tokens)
}
