use std::{env, process, time::Instant};

use arith::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let dump_tokens = args.first().is_some_and(|arg| arg == "--tokens");
    if dump_tokens {
        args.remove(0);
    }

    if args.is_empty() {
        eprintln!("usage: arith [--tokens] <expression>");
        process::exit(2);
    }

    let source = args.join(" ");

    if dump_tokens {
        match tokenize(source.clone(), None) {
            Ok(tokens) => tokens.iter().for_each(|token| token.debug()),
            Err(error) => {
                display_error(&error, &source);
                process::exit(1);
            }
        }
    }

    let start = Instant::now();

    match parse(source.clone(), None) {
        Ok(expr) => {
            println!("Parsed in {:?}", start.elapsed());
            println!("{}", expr);
        }
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    }
}
