//! Interactive loop backed by rustyline.

use crate::environment::Environment;
use crate::evaluator::eval;
use crate::lexer::Lexer;
use crate::parser::Parser;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};

static PROMPT: &str = ">> ";

pub fn start() -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let env = Environment::new();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());

                match Parser::new(Lexer::new(line)).parse_program() {
                    Err(errors) => {
                        for err in errors.iter() {
                            println!("\t{}", err);
                        }
                    }
                    Ok(program) => match eval(program.into(), &env) {
                        Ok(result) => println!("{}", result),
                        Err(err) => println!("ERROR: {}", err),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("readline error: {}", err);
                break;
            }
        }
    }

    Ok(())
}
