// Whitespace separated tokens. Scene files have no quoting or comments so a token is
// any run of non-whitespace characters.

#[derive(Debug, Clone, PartialEq)]
pub struct LexerError {
    pub error_type: LexerErrorType,
    pub location: FileLocation,
}

impl LexerError {
    fn new(error_type: LexerErrorType, location: FileLocation) -> Self {
        Self {
            error_type,
            location,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LexerErrorType {
    EndOfInput,
    InvalidNumber(String),
    UnexpectedToken { expected: String, found: String },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_type {
            LexerErrorType::EndOfInput => write!(f, "{}: Unexpected end of input", self.location),
            LexerErrorType::InvalidNumber(token) => {
                write!(f, "{}: Can't convert '{}' to a number", self.location, token)
            }
            LexerErrorType::UnexpectedToken { expected, found } => write!(
                f,
                "{}: Expected '{}', got '{}'",
                self.location, expected, found
            ),
        }
    }
}

impl std::error::Error for LexerError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FileLocation {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for FileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    file_location: FileLocation,
    previous_token_location: FileLocation,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            file_location: FileLocation { line: 1, column: 1 },
            previous_token_location: FileLocation { line: 1, column: 1 },
        }
    }

    /// Location of the start of the most recently returned token.
    pub fn previous_token_location(&self) -> FileLocation {
        self.previous_token_location
    }

    /// Returns `true` if only whitespace remains.
    pub fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.position >= self.input.len()
    }

    /// Returns the next raw token.
    pub fn next_token(&mut self) -> Result<&'a str, LexerError> {
        self.skip_whitespace();
        if self.position >= self.input.len() {
            return Err(LexerError::new(
                LexerErrorType::EndOfInput,
                self.file_location,
            ));
        }

        self.previous_token_location = self.file_location;
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                break;
            }
            self.advance(c);
        }
        Ok(&self.input[start..self.position])
    }

    /// Returns the next token in lower case.
    pub fn next_string(&mut self) -> Result<String, LexerError> {
        Ok(self.next_token()?.to_lowercase())
    }

    /// Returns the next token as a number.
    pub fn next_number(&mut self) -> Result<f32, LexerError> {
        let token = self.next_token()?;
        // Rejects inf and nan too, they'd only poison the math later
        match token.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(LexerError::new(
                LexerErrorType::InvalidNumber(token.to_string()),
                self.previous_token_location,
            )),
        }
    }

    /// Consumes the next token, erroring if it isn't `pattern` (case insensitive).
    pub fn expect(&mut self, pattern: &str) -> Result<(), LexerError> {
        let token = self.next_string()?;
        if token == pattern {
            Ok(())
        } else {
            Err(LexerError::new(
                LexerErrorType::UnexpectedToken {
                    expected: pattern.to_string(),
                    found: token,
                },
                self.previous_token_location,
            ))
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.advance(c);
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self, c: char) {
        self.position += c.len_utf8();
        if c == '\n' {
            self.file_location.line += 1;
            self.file_location.column = 1;
        } else {
            self.file_location.column += 1;
        }
    }
}
