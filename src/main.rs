use std::{env, fs::read_to_string, time::Instant};

use cvalidator::{display_error, lexer::lexer::tokenize, parser::parser::validate};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        panic!("Incorrect arguments provided!");
    }

    for file_path in &args[1..] {
        println!("Validating {}:", file_path);
        validate_file(file_path);
        println!();
    }
}

/// Runs one file through the pipeline and prints the verdict. Lexical and
/// structural errors are caught here; the next file still gets validated.
fn validate_file(file_path: &str) {
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            println!("Failed to read {}: {}", file_path, error);
            return;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, file_name, &source);
            println!("Program is invalid");
            return;
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let validate_start = Instant::now();
    let (layout, result) = validate(tokens);

    println!("Validated in {:?}", validate_start.elapsed());

    println!("\nToken layout:");
    println!("{}", layout);

    match result {
        Ok(()) => println!("\nProgram is valid"),
        Err(error) => {
            println!();
            display_error(&error, file_name, &source);
            println!("Program is invalid");
        }
    }
}
