//! `TokenType` classification and the `Token` value it attaches to a symbol.

use vixen_util::{FileId, Span};

use crate::scanner::{symbol_is_name, symbol_is_numeric, symbol_is_str_sym};

/// A closed enumeration of every lexical category the classifier can
/// produce. Families mirror the data model: error, keyword, name,
/// numeric, operator, punctuation, string quote, and control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Error
    Error,
    ErrorUnknown,
    ErrorBadString,

    // Keyword
    KwAs,
    KwBreak,
    KwCatch,
    KwContinue,
    KwConst,
    KwClass,
    KwDefault,
    KwDelete,
    KwElse,
    KwFor,
    KwFrom,
    KwFunc,
    KwIf,
    KwImport,
    KwInclude,
    KwNew,
    KwNil,
    KwNull,
    KwPanic,
    KwProto,
    KwRaise,
    KwReturn,
    KwStatic,
    KwTry,
    KwWhile,
    KwWith,

    // Name
    NameGeneric,

    // Numeric
    NumBin,
    NumOct,
    NumHex,
    NumFlt,
    NumInt,

    // Operator
    Amp,
    Question,
    Assign,
    Pipe,
    Caret,
    MinusMinus,
    Tilde,
    Slash,
    SlashSlash,
    PlusPlus,
    AmpAmp,
    Bang,
    PipePipe,
    Gt,
    Ge,
    Lt,
    Le,
    Minus,
    MinusAssign,
    Plus,
    PlusAssign,
    StarStar,
    Arrow,
    At,
    Star,
    Percent,

    // Punctuation
    Colon,
    Comma,
    Dot,
    LBrace,
    LBracket,
    LParen,
    RBrace,
    RBracket,
    RParen,
    Semi,

    // String quote
    StrSingle,
    StrTripleSingle,
    StrDouble,
    StrTripleDouble,
    StrBacktick,
    StrTripleBacktick,

    // Control
    Eof,
    Eol,
}

impl TokenType {
    /// The stable name printed in `reduce()` output (e.g. `"NameGeneric"`).
    pub fn name(&self) -> &'static str {
        use TokenType::*;
        match self {
            Error => "Error",
            ErrorUnknown => "ErrorUnknown",
            ErrorBadString => "ErrorBadString",
            KwAs => "KwAs",
            KwBreak => "KwBreak",
            KwCatch => "KwCatch",
            KwContinue => "KwContinue",
            KwConst => "KwConst",
            KwClass => "KwClass",
            KwDefault => "KwDefault",
            KwDelete => "KwDelete",
            KwElse => "KwElse",
            KwFor => "KwFor",
            KwFrom => "KwFrom",
            KwFunc => "KwFunc",
            KwIf => "KwIf",
            KwImport => "KwImport",
            KwInclude => "KwInclude",
            KwNew => "KwNew",
            KwNil => "KwNil",
            KwNull => "KwNull",
            KwPanic => "KwPanic",
            KwProto => "KwProto",
            KwRaise => "KwRaise",
            KwReturn => "KwReturn",
            KwStatic => "KwStatic",
            KwTry => "KwTry",
            KwWhile => "KwWhile",
            KwWith => "KwWith",
            NameGeneric => "NameGeneric",
            NumBin => "NumBin",
            NumOct => "NumOct",
            NumHex => "NumHex",
            NumFlt => "NumFlt",
            NumInt => "NumInt",
            Amp => "Amp",
            Question => "Question",
            Assign => "Assign",
            Pipe => "Pipe",
            Caret => "Caret",
            MinusMinus => "MinusMinus",
            Tilde => "Tilde",
            Slash => "Slash",
            SlashSlash => "SlashSlash",
            PlusPlus => "PlusPlus",
            AmpAmp => "AmpAmp",
            Bang => "Bang",
            PipePipe => "PipePipe",
            Gt => "Gt",
            Ge => "Ge",
            Lt => "Lt",
            Le => "Le",
            Minus => "Minus",
            MinusAssign => "MinusAssign",
            Plus => "Plus",
            PlusAssign => "PlusAssign",
            StarStar => "StarStar",
            Arrow => "Arrow",
            At => "At",
            Star => "Star",
            Percent => "Percent",
            Colon => "Colon",
            Comma => "Comma",
            Dot => "Dot",
            LBrace => "LBrace",
            LBracket => "LBracket",
            LParen => "LParen",
            RBrace => "RBrace",
            RBracket => "RBracket",
            RParen => "RParen",
            Semi => "Semi",
            StrSingle => "StrSingle",
            StrTripleSingle => "StrTripleSingle",
            StrDouble => "StrDouble",
            StrTripleDouble => "StrTripleDouble",
            StrBacktick => "StrBacktick",
            StrTripleBacktick => "StrTripleBacktick",
            Eof => "Eof",
            Eol => "Eol",
        }
    }

    /// Whether this type is one of the two control markers. Per the
    /// scanner's end-of-input contract, these are only ever produced from
    /// a synthetic symbol the scanner emits when truly at end of input,
    /// never from classifying ordinary source bytes, even bytes that
    /// happen to spell `EOF` or `EOL` (see `Lexer::next`).
    pub fn is_control(&self) -> bool {
        matches!(self, TokenType::Eof | TokenType::Eol)
    }

    pub fn is_numeric(&self) -> bool {
        use TokenType::*;
        matches!(self, NumBin | NumOct | NumHex | NumFlt | NumInt)
    }
}

/// A classified symbol: a `TokenType` plus the source position and raw
/// bytes the scanner carved out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub ttype: TokenType,
    pub symbol: Vec<u8>,
    pub line: u32,
    pub column: u32,
    pub file: Option<FileId>,
}

impl Token {
    pub fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Lossy UTF-8 view of the symbol bytes, for display and JSON output.
    pub fn symbol_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.symbol)
    }
}

fn contains_subsequence(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn classify_numeric(symbol: &[u8]) -> TokenType {
    if contains_subsequence(symbol, b"0b") {
        TokenType::NumBin
    } else if contains_subsequence(symbol, b"0o") {
        TokenType::NumOct
    } else if contains_subsequence(symbol, b"0x") {
        TokenType::NumHex
    } else if symbol.contains(&b'.') {
        TokenType::NumFlt
    } else {
        TokenType::NumInt
    }
}

fn lookup_keyword(symbol: &[u8]) -> Option<TokenType> {
    use TokenType::*;
    Some(match symbol {
        b"as" => KwAs,
        b"break" => KwBreak,
        b"catch" => KwCatch,
        b"continue" => KwContinue,
        b"const" => KwConst,
        b"class" => KwClass,
        b"default" => KwDefault,
        b"delete" => KwDelete,
        b"else" => KwElse,
        b"for" => KwFor,
        b"from" => KwFrom,
        b"func" => KwFunc,
        b"if" => KwIf,
        b"import" => KwImport,
        b"include" => KwInclude,
        b"new" => KwNew,
        b"nil" => KwNil,
        b"null" => KwNull,
        b"panic" => KwPanic,
        b"proto" => KwProto,
        b"raise" => KwRaise,
        b"return" => KwReturn,
        b"static" => KwStatic,
        b"try" => KwTry,
        b"while" => KwWhile,
        b"with" => KwWith,
        _ => return None,
    })
}

fn lookup_operator(symbol: &[u8]) -> Option<TokenType> {
    use TokenType::*;
    Some(match symbol {
        b"&" => Amp,
        b"?" => Question,
        b"=" => Assign,
        b"|" => Pipe,
        b"^" => Caret,
        b"--" => MinusMinus,
        b"~" => Tilde,
        b"/" => Slash,
        b"//" => SlashSlash,
        b"++" => PlusPlus,
        b"&&" => AmpAmp,
        b"!" => Bang,
        b"||" => PipePipe,
        b">" => Gt,
        b">=" => Ge,
        b"<" => Lt,
        b"<=" => Le,
        b"-" => Minus,
        b"-=" => MinusAssign,
        b"+" => Plus,
        b"+=" => PlusAssign,
        b"**" => StarStar,
        b"->" => Arrow,
        b"@" => At,
        b"*" => Star,
        b"%" => Percent,
        _ => return None,
    })
}

fn lookup_punctuation(symbol: &[u8]) -> Option<TokenType> {
    use TokenType::*;
    Some(match symbol {
        b":" => Colon,
        b"," => Comma,
        b"." => Dot,
        b"{" => LBrace,
        b"[" => LBracket,
        b"(" => LParen,
        b"}" => RBrace,
        b"]" => RBracket,
        b")" => RParen,
        b";" => Semi,
        _ => return None,
    })
}

fn lookup_string_quote(symbol: &[u8]) -> Option<TokenType> {
    use TokenType::*;
    Some(match symbol {
        b"\"" => StrDouble,
        b"\"\"\"" => StrTripleDouble,
        b"'" => StrSingle,
        b"'''" => StrTripleSingle,
        b"`" => StrBacktick,
        b"```" => StrTripleBacktick,
        _ => return None,
    })
}

const STR_LEAD_CHARS: &[u8] = b"'`\"";

/// Classifies a raw symbol in priority order: numeric shape, then exact
/// literal match, then identifier shape, then string-quote shape (exact
/// or malformed), then unknown.
pub fn classify(symbol: &[u8]) -> TokenType {
    if symbol_is_numeric(symbol) {
        return classify_numeric(symbol);
    }
    if let Some(tt) = lookup_keyword(symbol)
        .or_else(|| lookup_operator(symbol))
        .or_else(|| lookup_punctuation(symbol))
    {
        return tt;
    }
    if symbol_is_name(symbol) {
        return TokenType::NameGeneric;
    }
    if symbol_is_str_sym(symbol) {
        return lookup_string_quote(symbol).expect("symbol_is_str_sym implies a literal match");
    }
    if !symbol.is_empty() && STR_LEAD_CHARS.contains(&symbol[0]) {
        return TokenType::ErrorBadString;
    }
    TokenType::ErrorUnknown
}
