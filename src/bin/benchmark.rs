use std::time::Instant;
use tamarin::evaluator::eval;
use tamarin::{Environment, Lexer, Parser};

static INPUT: &str = "let fibonacci = fn(x) {
  if (x == 0) {
    0
  } else {
    if (x == 1) {
      return 1;
    } else {
      fibonacci(x - 1) + fibonacci(x - 2);
    }
  }
};
fibonacci(25);";

fn main() {
    let program = Parser::new(Lexer::new(INPUT.to_owned()))
        .parse_program()
        .expect("Parse errors found");

    let env = Environment::new();

    let start = Instant::now();
    let result = eval(program.into(), &env).expect("evaluation failed");
    let duration = start.elapsed();

    println!("result={}, duration={}", result, duration.as_secs_f64());
}
