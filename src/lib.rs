#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::{
    ast::statements::Declaration,
    errors::errors::{Error, ErrorTip},
    formatter::formatter::group,
    lexer::lexer::tokenize,
    parser::stmt::parse_statement,
};

pub mod ast;
pub mod errors;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod translator;

extern crate regex;

/// A resolved source location. Line and column are 1-based; the offset
/// counts characters (not bytes) from the start of the resource.
#[derive(Debug, Clone)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub resource: Rc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            resource: Rc::new(String::from("<null>")),
        }
    }

    /// Resolves an absolute character offset into a line/column pair.
    /// Computed once per token at emission time and never recomputed.
    pub fn from_offset(chars: &[char], offset: usize, resource: Rc<String>) -> Self {
        let mut line = 1;
        let mut line_start = 0;

        for (index, c) in chars[..offset].iter().enumerate() {
            if *c == '\n' {
                line += 1;
                line_start = index + 1;
            }
        }

        Position {
            offset: offset as u32,
            line,
            column: (offset - line_start) as u32 + 1,
            resource,
        }
    }
}

/// Runs the full front-end pipeline: tokenize, group into statements,
/// parse each group. Fails fast on the first error of any stage.
pub fn build_ast(source: &str, resource: &str) -> Result<Vec<Declaration>, Error> {
    let tokens = tokenize(source, resource)?;

    group(tokens)?
        .iter()
        .map(parse_statement)
        .collect::<Result<Vec<Declaration>, Error>>()
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        error: message
        -> final.ql
           |
        20 | const a = #;
           | ----------^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    let position = match error.get_position() {
        Some(position) => position,
        None => return,
    };

    let content = fs::read_to_string(&file).unwrap_or_default();
    let line_text = match content.lines().nth(position.line as usize - 1) {
        Some(line_text) => line_text,
        None => return,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
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
    use std::rc::Rc;

    use super::Position;

    #[test]
    fn test_position_from_offset() {
        let chars: Vec<char> = "fn f\n  x\nnext".chars().collect();

        let position = Position::from_offset(&chars, 0, Rc::new(String::from("test.ql")));
        assert_eq!(position.line, 1);
        assert_eq!(position.column, 1);

        let position = Position::from_offset(&chars, 7, Rc::new(String::from("test.ql")));
        assert_eq!(position.line, 2);
        assert_eq!(position.column, 3);

        let position = Position::from_offset(&chars, 9, Rc::new(String::from("test.ql")));
        assert_eq!(position.line, 3);
        assert_eq!(position.column, 1);
    }
}
