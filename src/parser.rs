use crate::ast::{self, Expression, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};
use std::collections::HashMap;

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

fn precedence_of(token_type: TokenType) -> Precedence {
    match token_type {
        TokenType::Eq | TokenType::NotEq => Precedence::Equals,
        TokenType::LT | TokenType::GT => Precedence::LessGreater,
        TokenType::Plus | TokenType::Minus => Precedence::Sum,
        TokenType::Slash | TokenType::Asterisk => Precedence::Product,
        TokenType::LParen => Precedence::Call,
        TokenType::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

pub struct Parser {
    lexer: Lexer,
    errors: Vec<String>,

    cur_token: Token,
    peek_token: Token,

    prefix_parse_fns: HashMap<TokenType, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenType, InfixParseFn>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Self {
            lexer,
            cur_token,
            peek_token,
            errors: Default::default(),
            prefix_parse_fns: Default::default(),
            infix_parse_fns: Default::default(),
        };

        parser.register_prefix(TokenType::Ident, Self::parse_identifier);
        parser.register_prefix(TokenType::Int, Self::parse_integer_literal);
        parser.register_prefix(TokenType::String, Self::parse_string_literal);
        parser.register_prefix(TokenType::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenType::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenType::True, Self::parse_boolean);
        parser.register_prefix(TokenType::False, Self::parse_boolean);
        parser.register_prefix(TokenType::LParen, Self::parse_grouped_expression);
        parser.register_prefix(TokenType::If, Self::parse_if_expression);
        parser.register_prefix(TokenType::Function, Self::parse_function_literal);
        parser.register_prefix(TokenType::LBracket, Self::parse_array_literal);
        parser.register_prefix(TokenType::LBrace, Self::parse_hash_literal);

        parser.register_infix(TokenType::Plus, Self::parse_infix_expression);
        parser.register_infix(TokenType::Minus, Self::parse_infix_expression);
        parser.register_infix(TokenType::Slash, Self::parse_infix_expression);
        parser.register_infix(TokenType::Asterisk, Self::parse_infix_expression);
        parser.register_infix(TokenType::Eq, Self::parse_infix_expression);
        parser.register_infix(TokenType::NotEq, Self::parse_infix_expression);
        parser.register_infix(TokenType::LT, Self::parse_infix_expression);
        parser.register_infix(TokenType::GT, Self::parse_infix_expression);
        parser.register_infix(TokenType::LParen, Self::parse_call_expression);
        parser.register_infix(TokenType::LBracket, Self::parse_index_expression);

        parser
    }

    fn register_prefix(&mut self, token_type: TokenType, func: PrefixParseFn) {
        self.prefix_parse_fns.insert(token_type, func);
    }

    fn register_infix(&mut self, token_type: TokenType, func: InfixParseFn) {
        self.infix_parse_fns.insert(token_type, func);
    }

    fn next_token(&mut self) {
        self.cur_token = self.peek_token.clone();
        self.peek_token = self.lexer.next_token();
    }

    pub fn parse_program(mut self) -> Result<ast::Program, Vec<String>> {
        let mut program = ast::Program::default();

        while !self.cur_token.is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt)
            }
            self.next_token();
        }

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.token_type {
            TokenType::Let => self.parse_let_statement().map(Statement::Let),
            TokenType::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expr),
        }
    }

    fn parse_let_statement(&mut self) -> Option<ast::LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::Ident) {
            return None;
        }

        let name: ast::Identifier = self.cur_token.clone().into();

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::LetStatement { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ast::ReturnStatement> {
        let token = self.cur_token.clone();

        self.next_token();
        let return_value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ReturnStatement {
            token,
            return_value,
        })
    }

    fn parse_expression_statement(&mut self) -> Option<ast::ExpressionStatement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ExpressionStatement {
            token,
            expression: expression?,
        })
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let prefix = match self.prefix_parse_fns.get(&self.cur_token.token_type) {
            Some(prefix) => *prefix,
            None => {
                self.no_prefix_parse_fn_error();
                return None;
            }
        };

        let mut left = prefix(self)?;

        while !self.peek_token.is(TokenType::Semicolon) && precedence < self.peek_precedence() {
            let infix = match self.infix_parse_fns.get(&self.peek_token.token_type) {
                Some(infix) => *infix,
                None => return Some(left),
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.cur_token.clone().into()))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        match token.literal.parse() {
            Ok(value) => Some(Expression::IntegerLiteral(ast::IntegerLiteral {
                token,
                value,
            })),
            Err(_) => {
                self.errors
                    .push(format!("could not parse {} as integer", token.literal));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let value = token.literal.clone();

        Some(Expression::StringLiteral(ast::StringLiteral {
            token,
            value,
        }))
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.cur_token.clone().into()))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.token_type.into();

        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);

        Some(Expression::Prefix(ast::PrefixExpression {
            token,
            operator,
            right,
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        expression
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token.is(TokenType::Else) {
            self.next_token();

            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(ast::IfExpression {
            token,
            condition,
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::Function(ast::FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<ast::Identifier>> {
        let mut identifiers = vec![];

        if self.peek_token.is(TokenType::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(self.cur_token.clone().into());

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(self.cur_token.clone().into());
        }

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        Some(identifiers)
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        let elements = self.parse_expression_list(TokenType::RBracket)?;

        Some(Expression::Array(ast::ArrayLiteral { token, elements }))
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let mut pairs = vec![];

        while !self.peek_token.is(TokenType::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenType::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_token.is(TokenType::RBrace) && !self.expect_peek(TokenType::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenType::RBrace) {
            return None;
        }

        Some(Expression::Hash(ast::HashLiteral { token, pairs }))
    }

    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = vec![];

        if self.peek_token.is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.token_type.into();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Some(Expression::Infix(ast::InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right,
        }))
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();

        let arguments = self.parse_expression_list(TokenType::RParen)?;

        Some(Expression::Call(ast::CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let index = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenType::RBracket) {
            return None;
        }

        Some(Expression::Index(ast::IndexExpression {
            token,
            left: Box::new(left),
            index,
        }))
    }

    fn parse_block_statement(&mut self) -> ast::BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = vec![];

        self.next_token();

        while !self.cur_token.is(TokenType::RBrace) && !self.cur_token.is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        ast::BlockStatement { token, statements }
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.token_type)
    }

    fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.token_type)
    }

    fn expect_peek(&mut self, expected: TokenType) -> bool {
        if self.peek_token.is(expected) {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenType) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            expected, self.peek_token.token_type
        ));
    }

    fn no_prefix_parse_fn_error(&mut self) {
        self.errors.push(format!(
            "no prefix parse function for {} found",
            self.cur_token.token_type
        ));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ast::Operator;

    fn parse(input: &str) -> ast::Program {
        Parser::new(Lexer::new(input.to_owned()))
            .parse_program()
            .expect("Parse errors found")
    }

    fn parse_errors(input: &str) -> Vec<String> {
        Parser::new(Lexer::new(input.to_owned()))
            .parse_program()
            .expect_err("expected parse errors")
    }

    fn expression(program: &ast::Program, index: usize) -> &Expression {
        match &program.statements[index] {
            Statement::Expr(stmt) => &stmt.expression,
            stmt => panic!("statement {} is not an expression: {}", index, stmt),
        }
    }

    fn assert_integer_literal(expr: &Expression, expected: i64) {
        match expr {
            Expression::IntegerLiteral(literal) => {
                assert_eq!(literal.value, expected);
                assert_eq!(literal.token.literal, expected.to_string());
            }
            e => panic!("not an integer literal: {}", e),
        }
    }

    fn assert_identifier(expr: &Expression, expected: &str) {
        match expr {
            Expression::Identifier(ident) => assert_eq!(ident.value, expected),
            e => panic!("not an identifier: {}", e),
        }
    }

    #[test]
    fn test_let_statements() {
        let cases = [
            ("let x = 5;", "x", "5"),
            ("let y = true;", "y", "true"),
            ("let foobar = y;", "foobar", "y"),
        ];

        for (input, name, value) in cases.iter() {
            let program = parse(input);

            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Let(stmt) => {
                    assert_eq!(stmt.token.literal, "let");
                    assert_eq!(stmt.name.value, *name);
                    assert_eq!(stmt.value.to_string(), *value);
                }
                stmt => panic!("not a let statement: {}", stmt),
            }
        }
    }

    #[test]
    fn test_return_statements() {
        let cases = [
            ("return 5;", "5"),
            ("return true;", "true"),
            ("return foobar;", "foobar"),
        ];

        for (input, value) in cases.iter() {
            let program = parse(input);

            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Return(stmt) => {
                    assert_eq!(stmt.token.literal, "return");
                    assert_eq!(stmt.return_value.to_string(), *value);
                }
                stmt => panic!("not a return statement: {}", stmt),
            }
        }
    }

    #[test]
    fn test_identifier_expression() {
        let program = parse("foobar;");

        assert_eq!(program.statements.len(), 1);
        assert_identifier(expression(&program, 0), "foobar");
    }

    #[test]
    fn test_integer_literal_expression() {
        let program = parse("5;");

        assert_eq!(program.statements.len(), 1);
        assert_integer_literal(expression(&program, 0), 5);
    }

    #[test]
    fn test_string_literal_expression() {
        let program = parse("\"hello world\";");

        match expression(&program, 0) {
            Expression::StringLiteral(literal) => assert_eq!(literal.value, "hello world"),
            e => panic!("not a string literal: {}", e),
        }
    }

    #[test]
    fn test_boolean_expression() {
        let cases = [("true;", true), ("false;", false)];

        for (input, value) in cases.iter() {
            let program = parse(input);

            match expression(&program, 0) {
                Expression::Boolean(b) => assert_eq!(b.value, *value),
                e => panic!("not a boolean: {}", e),
            }
        }
    }

    #[test]
    fn test_prefix_expressions() {
        let cases = [
            ("!5;", Operator::Bang, "5"),
            ("-15;", Operator::Minus, "15"),
            ("!true;", Operator::Bang, "true"),
            ("!false;", Operator::Bang, "false"),
        ];

        for (input, operator, right) in cases.iter() {
            let program = parse(input);

            match expression(&program, 0) {
                Expression::Prefix(prefix) => {
                    assert_eq!(prefix.operator, *operator);
                    assert_eq!(prefix.right.to_string(), *right);
                }
                e => panic!("not a prefix expression: {}", e),
            }
        }
    }

    #[test]
    fn test_infix_expressions() {
        let cases = [
            ("5 + 5;", "5", Operator::Plus, "5"),
            ("5 - 5;", "5", Operator::Minus, "5"),
            ("5 * 5;", "5", Operator::Asterisk, "5"),
            ("5 / 5;", "5", Operator::Slash, "5"),
            ("5 > 5;", "5", Operator::GT, "5"),
            ("5 < 5;", "5", Operator::LT, "5"),
            ("5 == 5;", "5", Operator::Eq, "5"),
            ("5 != 5;", "5", Operator::NotEq, "5"),
            ("true == true", "true", Operator::Eq, "true"),
            ("true != false", "true", Operator::NotEq, "false"),
        ];

        for (input, left, operator, right) in cases.iter() {
            let program = parse(input);

            match expression(&program, 0) {
                Expression::Infix(infix) => {
                    assert_eq!(infix.left.to_string(), *left);
                    assert_eq!(infix.operator, *operator);
                    assert_eq!(infix.right.to_string(), *right);
                }
                e => panic!("not an infix expression: {}", e),
            }
        }
    }

    #[test]
    fn test_operator_precedence() {
        let cases = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
            (
                "a * [1, 2, 3, 4][b * c] * d",
                "((a * ([1, 2, 3, 4][(b * c)])) * d)",
            ),
            (
                "add(a * b[2], b[1], 2 * [1, 2][1])",
                "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
            ),
        ];

        for (input, expected) in cases.iter() {
            assert_eq!(parse(input).to_string(), *expected);
        }
    }

    #[test]
    fn test_canonical_form_is_a_fixed_point() {
        let cases = [
            "a + b * c + d / e - f",
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "a * [1, 2, 3, 4][b * c] * d",
            "let x = 1 + 2 * 3;",
        ];

        for input in cases.iter() {
            let canonical = parse(input).to_string();
            assert_eq!(parse(&canonical).to_string(), canonical);
        }
    }

    #[test]
    fn test_if_expression() {
        let program = parse("if (x < y) { x }");

        match expression(&program, 0) {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.consequence.statements.len(), 1);
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert!(if_expr.alternative.is_none());
            }
            e => panic!("not an if expression: {}", e),
        }
    }

    #[test]
    fn test_if_else_expression() {
        let program = parse("if (x < y) { x } else { y }");

        match expression(&program, 0) {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert_eq!(if_expr.alternative.as_ref().unwrap().to_string(), "y");
            }
            e => panic!("not an if expression: {}", e),
        }
    }

    #[test]
    fn test_function_literal() {
        let program = parse("fn(x, y) { x + y; }");

        match expression(&program, 0) {
            Expression::Function(func) => {
                assert_eq!(func.parameters.len(), 2);
                assert_eq!(func.parameters[0].value, "x");
                assert_eq!(func.parameters[1].value, "y");
                assert_eq!(func.body.statements.len(), 1);
                assert_eq!(func.body.to_string(), "(x + y)");
            }
            e => panic!("not a function literal: {}", e),
        }
    }

    #[test]
    fn test_function_parameters() {
        let cases: [(&str, &[&str]); 3] = [
            ("fn() {};", &[]),
            ("fn(x) {};", &["x"]),
            ("fn(x, y, z) {};", &["x", "y", "z"]),
        ];

        for (input, expected) in cases.iter() {
            let program = parse(input);

            match expression(&program, 0) {
                Expression::Function(func) => {
                    let names: Vec<&str> =
                        func.parameters.iter().map(|p| p.value.as_str()).collect();
                    assert_eq!(names, *expected);
                }
                e => panic!("not a function literal: {}", e),
            }
        }
    }

    #[test]
    fn test_call_expression() {
        let program = parse("add(1, 2 * 3, 4 + 5);");

        match expression(&program, 0) {
            Expression::Call(call) => {
                assert_identifier(&call.function, "add");
                assert_eq!(call.arguments.len(), 3);
                assert_integer_literal(&call.arguments[0], 1);
                assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
                assert_eq!(call.arguments[2].to_string(), "(4 + 5)");
            }
            e => panic!("not a call expression: {}", e),
        }
    }

    #[test]
    fn test_array_literal() {
        let program = parse("[1, 2 * 2, 3 + 3]");

        match expression(&program, 0) {
            Expression::Array(array) => {
                assert_eq!(array.elements.len(), 3);
                assert_integer_literal(&array.elements[0], 1);
                assert_eq!(array.elements[1].to_string(), "(2 * 2)");
                assert_eq!(array.elements[2].to_string(), "(3 + 3)");
            }
            e => panic!("not an array literal: {}", e),
        }
    }

    #[test]
    fn test_empty_array_literal() {
        let program = parse("[]");

        match expression(&program, 0) {
            Expression::Array(array) => assert!(array.elements.is_empty()),
            e => panic!("not an array literal: {}", e),
        }
    }

    #[test]
    fn test_index_expression() {
        let program = parse("myArray[1 + 1]");

        match expression(&program, 0) {
            Expression::Index(index) => {
                assert_identifier(&index.left, "myArray");
                assert_eq!(index.index.to_string(), "(1 + 1)");
            }
            e => panic!("not an index expression: {}", e),
        }
    }

    #[test]
    fn test_hash_literal_string_keys() {
        let program = parse("{\"one\": 1, \"two\": 2, \"three\": 3}");

        match expression(&program, 0) {
            Expression::Hash(hash) => {
                let pairs: Vec<(String, String)> = hash
                    .pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();

                // Source order is preserved.
                assert_eq!(
                    pairs,
                    vec![
                        ("one".to_owned(), "1".to_owned()),
                        ("two".to_owned(), "2".to_owned()),
                        ("three".to_owned(), "3".to_owned()),
                    ]
                );
            }
            e => panic!("not a hash literal: {}", e),
        }
    }

    #[test]
    fn test_empty_hash_literal() {
        let program = parse("{}");

        match expression(&program, 0) {
            Expression::Hash(hash) => assert!(hash.pairs.is_empty()),
            e => panic!("not a hash literal: {}", e),
        }
    }

    #[test]
    fn test_hash_literal_with_expression_values() {
        let program = parse("{\"one\": 0 + 1, \"two\": 10 - 8, \"three\": 15 / 5}");

        match expression(&program, 0) {
            Expression::Hash(hash) => {
                assert_eq!(hash.pairs.len(), 3);
                assert_eq!(hash.pairs[0].1.to_string(), "(0 + 1)");
                assert_eq!(hash.pairs[1].1.to_string(), "(10 - 8)");
                assert_eq!(hash.pairs[2].1.to_string(), "(15 / 5)");
            }
            e => panic!("not a hash literal: {}", e),
        }
    }

    #[test]
    fn test_error_recovery_accumulates_messages() {
        let errors = parse_errors("let x 5; let = 10; let 838383;");

        assert_eq!(
            errors,
            vec![
                "expected next token to be =, got INT instead".to_owned(),
                "expected next token to be IDENT, got = instead".to_owned(),
                "no prefix parse function for = found".to_owned(),
                "expected next token to be IDENT, got INT instead".to_owned(),
            ]
        );
    }

    #[test]
    fn test_missing_prefix_parse_fn() {
        let errors = parse_errors("5 + ;");

        assert_eq!(
            errors,
            vec!["no prefix parse function for ; found".to_owned()]
        );
    }

    #[test]
    fn test_unclosed_group() {
        let errors = parse_errors("(1 + 2");

        assert_eq!(
            errors,
            vec!["expected next token to be ), got EOF instead".to_owned()]
        );
    }
}
