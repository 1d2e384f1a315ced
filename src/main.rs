use std::{env, fs::read_to_string, path::PathBuf, time::Instant};

use quill::{
    display_error,
    formatter::formatter::group,
    lexer::lexer::tokenize,
    parser::stmt::parse_statement,
    translator::translator::{translate, Scope},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let source = read_to_string(file_path).expect("Failed to read file!");

    let tokens = match tokenize(&source, file_name) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            panic!()
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();

    let groups = match group(tokens) {
        Ok(groups) => groups,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            panic!()
        }
    };

    let mut declarations = vec![];
    for statement in &groups {
        match parse_statement(statement) {
            Ok(declaration) => declarations.push(declaration),
            Err(error) => {
                display_error(error, PathBuf::from(file_path));
                panic!()
            }
        }
    }

    println!("Parsed in {:?}", parse_start.elapsed());

    let scope = declarations
        .iter()
        .fold(Scope::new(), |scope, declaration| {
            translate(declaration, scope)
        });

    println!("{:#?}", declarations);
    println!("Scope: {:#?}", scope);
    println!("Total time: {:?}", start.elapsed());
}
