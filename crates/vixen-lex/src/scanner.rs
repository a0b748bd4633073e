//! Byte-oriented symbol scanner.
//!
//! Segments a raw byte buffer into `(line, column, symbol)` triples,
//! tracking a `string_parsing` mode flag so that string bodies (which may
//! contain whitespace, `#`, and structural characters) are not mistaken
//! for code. The scanner never fails: malformed input simply produces a
//! symbol that the classifier in `token.rs` later rejects.

const WHITESPACE: &[u8] = b" \t\n\r\x0b\x0c";
const STRUCTURE_CHARS: &[u8] = b"])}{([";
const STR_CHARS: &[u8] = b"'`\"";
const DIGIT_SEP_CHARS: &[u8] = b".xdbo";
const COMMENT_CHAR: u8 = b'#';
const NEWLINE_CHAR: u8 = b'\n';
const TERM_CHAR: u8 = b';';

/// The six recognized quote sequences: single and triple forms of `'`, `"`, `` ` ``.
const STR_SYMBOLS: [&[u8]; 6] = [b"\"", b"\"\"\"", b"'", b"'''", b"`", b"```"];

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_digit_char(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_digit_sep(b: u8) -> bool {
    DIGIT_SEP_CHARS.contains(&b)
}

/// The extended digit alphabet used for bases above 10: ASCII letters plus
/// punctuation, excluding `-`, `\`, and `'` (which carry their own meaning
/// inside a numeric literal or string body).
fn is_ext_digit_char(b: u8) -> bool {
    b.is_ascii_alphabetic()
        || matches!(
            b,
            b'!' | b'"'
                | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b'.'
                | b'/'
                | b':'
                | b';'
                | b'<'
                | b'='
                | b'>'
                | b'?'
                | b'@'
                | b'['
                | b']'
                | b'^'
                | b'_'
                | b'`'
                | b'{'
                | b'|'
                | b'}'
                | b'~'
        )
}

fn is_noparse(b: u8) -> bool {
    WHITESPACE.contains(&b)
}

fn is_comment(b: u8) -> bool {
    b == COMMENT_CHAR
}

fn is_newline(b: u8) -> bool {
    b == NEWLINE_CHAR
}

fn is_term(b: u8) -> bool {
    b == TERM_CHAR
}

fn is_struct(b: u8) -> bool {
    STRUCTURE_CHARS.contains(&b)
}

fn is_str_char(b: u8) -> bool {
    STR_CHARS.contains(&b)
}

/// A byte is "punctuation-shaped" if it cannot start or continue a name.
fn is_punc_char(b: u8) -> bool {
    !is_name_char(b)
}

pub(crate) fn symbol_is_name(sym: &[u8]) -> bool {
    !sym.is_empty()
        && is_name_char(sym[0])
        && !is_digit_char(sym[0])
        && is_name_char(*sym.last().unwrap())
}

/// A symbol is numeric-shaped if it contains at least one digit, uses at
/// most one `.`, never mixes `.` with a base sigil (`x`/`d`/`b`/`o`), and
/// every byte fits the alphabet implied by its base.
pub(crate) fn symbol_is_numeric(sym: &[u8]) -> bool {
    if sym.is_empty() || !sym.iter().any(|&b| is_digit_char(b)) {
        return false;
    }

    let mut base_notation: Option<u8> = None;
    for &sep in &DIGIT_SEP_CHARS[1..] {
        let has_sep = sym.contains(&sep);
        let has_dot = sym.contains(&b'.');
        if has_sep && has_dot {
            return false;
        } else if has_sep {
            base_notation = Some(sep);
        }
    }

    for &b in sym {
        match base_notation {
            None | Some(b'b') | Some(b'o') => {
                if !(is_digit_char(b) || is_digit_sep(b)) {
                    return false;
                }
            }
            _ => {
                if !(is_digit_char(b) || is_ext_digit_char(b)) {
                    return false;
                }
            }
        }
    }

    sym.iter().filter(|&&b| b == b'.').count() < 2
}

fn symbol_is_punc(sym: &[u8]) -> bool {
    !sym.is_empty() && !is_name_char(sym[0]) && !is_name_char(*sym.last().unwrap())
}

pub(crate) fn symbol_is_str_sym(sym: &[u8]) -> bool {
    !sym.is_empty() && STR_SYMBOLS.iter().any(|s| *s == sym)
}

fn symbol_is_valid_name(sym: &[u8], next: u8) -> bool {
    symbol_is_name(sym) && !is_punc_char(next)
}

fn symbol_is_valid_num(sym: &[u8], next: u8) -> bool {
    if !symbol_is_numeric(sym) && sym != [b'.'] {
        return false;
    }
    if sym.contains(&b'.') {
        !is_punc_char(next)
    } else if is_digit_char(next) {
        true
    } else if is_digit_sep(next) {
        true
    } else {
        !is_punc_char(next)
    }
}

fn symbol_is_valid_punc(sym: &[u8], next: u8) -> bool {
    !(symbol_is_punc(sym) && is_name_char(next))
}

/// A raw, unclassified symbol carved out of the input by the scanner.
pub type RawSymbol = (u32, u32, Vec<u8>);

/// Segments a byte buffer into raw `(line, column, bytes)` symbols.
///
/// Owns the entire input; the read head only ever advances. See
/// `next` for the dispatch and skipping rules.
pub struct Scanner {
    data: Vec<u8>,
    line: u32,
    line_start: usize,
    read_head: usize,
    string_parsing: bool,
    /// The three most recently emitted symbols (oldest first), used to
    /// detect a string's closing quote sequence without re-scanning.
    history: [Vec<u8>; 3],
}

impl Scanner {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Scanner {
            data: data.into(),
            line: 1,
            line_start: 0,
            read_head: 0,
            string_parsing: false,
            history: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn end(&self) -> bool {
        self.read_head >= self.data.len()
    }

    pub fn head(&self) -> u8 {
        if self.data.is_empty() {
            0
        } else if self.end() {
            self.data[self.data.len() - 1]
        } else {
            self.data[self.read_head]
        }
    }

    fn lookahead(&self, n: usize) -> &[u8] {
        let start = self.read_head.min(self.data.len());
        let end = (self.read_head + n).min(self.data.len());
        &self.data[start..end]
    }

    fn lookahead_matches(&self, symbol: &[u8]) -> bool {
        self.lookahead(symbol.len()) == symbol
    }

    fn advance(&mut self) {
        if is_newline(self.head()) {
            self.line += 1;
            self.line_start = self.read_head + 1;
        }
        self.read_head += 1;
    }

    fn advance_whitespace(&mut self) {
        if self.string_parsing {
            return;
        }
        while is_noparse(self.head()) && !self.end() {
            self.advance();
        }
    }

    fn advance_comments(&mut self) {
        if self.string_parsing {
            return;
        }
        while is_comment(self.head()) && !self.end() {
            while !is_newline(self.head()) && !self.end() {
                self.advance();
            }
            self.advance_whitespace();
        }
    }

    fn column_here(&self) -> u32 {
        (self.read_head - self.line_start + 1) as u32
    }

    /// Advance past whitespace/comments, then emit exactly one symbol.
    /// At end of input, emits a synthetic `EOF`/`EOL` marker instead.
    pub fn next(&mut self) -> RawSymbol {
        self.advance_whitespace();
        self.advance_comments();

        if self.end() {
            let symbol = if self.line > 1 {
                b"EOF".to_vec()
            } else {
                b"EOL".to_vec()
            };
            return (self.line, 0, symbol);
        }

        let token = if self.string_parsing {
            self.next_punc()
        } else if is_name_char(self.head()) && !is_digit_char(self.head()) {
            self.next_name()
        } else if is_digit_char(self.head()) {
            self.next_numeric()
        } else if is_digit_sep(self.head())
            && self
                .lookahead(2)
                .get(1)
                .copied()
                .map(is_digit_char)
                .unwrap_or(false)
        {
            self.next_numeric()
        } else {
            self.next_punc()
        };

        self.history = [
            std::mem::take(&mut self.history[1]),
            std::mem::take(&mut self.history[2]),
            token.2.clone(),
        ];

        token
    }

    fn next_name(&mut self) -> RawSymbol {
        let mut symbol = Vec::new();
        let column = self.column_here();

        loop {
            symbol.push(self.head());
            self.advance();

            if is_noparse(self.head()) {
                break;
            }
            if is_comment(self.head()) {
                break;
            }
            if is_term(self.head()) {
                break;
            }
            if !symbol_is_valid_name(&symbol, self.head()) {
                break;
            }
            if self.end() {
                break;
            }
        }

        (self.line, column, symbol)
    }

    fn next_numeric(&mut self) -> RawSymbol {
        let mut symbol = Vec::new();
        let column = self.column_here();

        loop {
            symbol.push(self.head());
            self.advance();

            if is_noparse(self.head()) {
                break;
            }
            if is_comment(self.head()) {
                break;
            }
            if is_term(self.head()) {
                break;
            }
            if !symbol_is_valid_num(&symbol, self.head()) {
                break;
            }
            if self.end() {
                break;
            }
        }

        (self.line, column, symbol)
    }

    fn next_punc(&mut self) -> RawSymbol {
        let mut symbol = Vec::new();
        let column = self.column_here();

        loop {
            symbol.push(self.head());
            self.advance();

            if !self.string_parsing {
                if is_noparse(self.head()) {
                    break;
                }
                if is_comment(self.head()) {
                    break;
                }
                if is_struct(self.head()) {
                    break;
                }
                if is_term(self.head()) {
                    break;
                }
                if symbol.len() == 1 && is_struct(symbol[0]) {
                    break;
                }
                if !symbol_is_valid_punc(&symbol, self.head()) {
                    break;
                }
                if symbol_is_str_sym(&symbol) && !is_str_char(self.head()) {
                    break;
                }
            } else if *symbol.last().unwrap() == b'\\' {
                continue;
            } else if self.lookahead_matches(&self.history[2]) {
                break;
            } else if self.history[1] == symbol && symbol_is_str_sym(&self.history[1]) {
                break;
            }

            if self.end() {
                break;
            }
        }

        if symbol_is_str_sym(&symbol) {
            self.string_parsing = !self.string_parsing;
        }

        (self.line, column, symbol)
    }
}
