#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A line/column location in a source file. Lines and columns are 1-based.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(1, 1, Rc::new(String::from("<null>")))
    }

    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn column(&self) -> u32 {
        self.1
    }
}

pub fn get_line_at(source: &str, line_number: u32) -> Option<String> {
    source
        .split('\n')
        .nth((line_number as usize).saturating_sub(1))
        .map(String::from)
}

pub fn display_error(error: &Error, file_name: &str, source: &str) {
    /*
        Error: InvalidCharacter (invalid character `!`)
        -> program.c
           |
         3 | x = 1!2;
           | -----^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file_name);

    let line_text = match get_line_at(source, position.line()) {
        Some(line) => line,
        None => return,
    };

    let line_string = position.line().to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column() as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at() {
        let source = "int main() {\n    int x;\n    x = 1;\n}\n";

        assert_eq!(
            super::get_line_at(source, 1),
            Some("int main() {".to_string())
        );
        assert_eq!(super::get_line_at(source, 3), Some("    x = 1;".to_string()));
        assert_eq!(super::get_line_at(source, 9), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("    x = 1;");
        assert_eq!(text, "x = 1;");
        assert_eq!(removed, 4);
    }
}
