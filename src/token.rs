use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    #[strum(serialize = "ILLEGAL")]
    Illegal,
    #[strum(serialize = "EOF")]
    Eof,

    // Identifiers and literals
    #[strum(serialize = "IDENT")]
    Ident,
    #[strum(serialize = "INT")]
    Int,
    #[strum(serialize = "STRING")]
    String,

    // Operators
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "*")]
    Asterisk,
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "<")]
    LT,
    #[strum(serialize = ">")]
    GT,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    NotEq,

    // Delimiters
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = ":")]
    Colon,

    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = "{{")]
    LBrace,
    #[strum(serialize = "}}")]
    RBrace,
    #[strum(serialize = "[")]
    LBracket,
    #[strum(serialize = "]")]
    RBracket,

    // Keywords
    #[strum(serialize = "ELSE")]
    Else,
    #[strum(serialize = "FALSE")]
    False,
    #[strum(serialize = "FUNCTION")]
    Function,
    #[strum(serialize = "IF")]
    If,
    #[strum(serialize = "LET")]
    Let,
    #[strum(serialize = "RETURN")]
    Return,
    #[strum(serialize = "TRUE")]
    True,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
}

fn lookup_keyword(text: &str) -> Option<TokenType> {
    match text {
        "fn" => Some(TokenType::Function),
        "let" => Some(TokenType::Let),
        "true" => Some(TokenType::True),
        "false" => Some(TokenType::False),
        "if" => Some(TokenType::If),
        "else" => Some(TokenType::Else),
        "return" => Some(TokenType::Return),
        _ => None,
    }
}

impl Token {
    /// Builds an identifier-or-keyword token from a lexeme.
    pub fn new(text: &str) -> Self {
        Self {
            token_type: lookup_keyword(text).unwrap_or(TokenType::Ident),
            literal: text.to_owned(),
        }
    }

    pub fn new_from_char(token_type: TokenType, ch: u8) -> Self {
        Self {
            token_type,
            literal: (ch as char).to_string(),
        }
    }

    pub fn eof() -> Self {
        Self {
            token_type: TokenType::Eof,
            literal: "".to_owned(),
        }
    }

    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}
