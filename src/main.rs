use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use tamarin::evaluator::eval;
use tamarin::{repl, Environment, Lexer};

/// The Tamarin programming language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate an expression and print the result.
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Script file to execute.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(expr) = args.eval {
        run(&expr, true);
    } else if let Some(path) = args.script {
        let source = fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("Failed to read {}: {}", path.display(), err);
            process::exit(1);
        });
        run(&source, false);
    } else {
        println!("Hello! This is the Tamarin programming language!");
        println!("Feel free to type in commands");
        if let Err(err) = repl::start() {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn run(source: &str, print_result: bool) {
    let parser = tamarin::Parser::new(Lexer::new(source.to_owned()));

    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(errors) => {
            eprintln!("parser errors:");
            for err in errors.iter() {
                eprintln!("\t{}", err);
            }
            process::exit(1);
        }
    };

    let env = Environment::new();
    match eval(program.into(), &env) {
        Ok(result) => {
            if print_result {
                println!("{}", result);
            }
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
}
