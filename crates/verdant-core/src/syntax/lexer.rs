//! Tokenizer producing green symbols
//!
//! Every byte of the input ends up in exactly one symbol, so the lengths of
//! the returned symbols always add up to the input length. Nothing here
//! fails: text the tokenizer cannot make sense of becomes a symbol that
//! carries its own diagnostic.

use super::diagnostic::{JsonErrorCode, JsonErrorInfo};
use super::green::GreenSymbol;
use tracing::trace;

/// Split `input` into green symbols
pub fn tokenize(input: &str) -> Vec<GreenSymbol> {
    let mut symbols = Vec::new();
    let len = input.len();
    let mut i = 0usize;

    while let Some((current, size)) = next_char(input, i) {
        let start = i;

        let symbol = match current {
            c if c.is_whitespace() => {
                let end = skip_while(input, start, char::is_whitespace);
                i = end;
                GreenSymbol::whitespace(end - start)
            }
            '/' if next_char(input, i + size).is_some_and(|(c, _)| c == '/') => {
                // Single-line comment runs up to, not including, the line break
                let end = input[start..]
                    .find(['\n', '\r'])
                    .map_or(len, |offset| start + offset);
                i = end;
                GreenSymbol::comment(end - start)
            }
            '/' if next_char(input, i + size).is_some_and(|(c, _)| c == '*') => {
                match input[start + 2..].find("*/") {
                    Some(offset) => {
                        let end = start + 2 + offset + 2;
                        i = end;
                        GreenSymbol::comment(end - start)
                    }
                    None => {
                        i = len;
                        GreenSymbol::unterminated_multi_line_comment(len - start)
                    }
                }
            }
            ':' => {
                i += size;
                GreenSymbol::colon()
            }
            ',' => {
                i += size;
                GreenSymbol::comma()
            }
            '{' => {
                i += size;
                GreenSymbol::curly_open()
            }
            '}' => {
                i += size;
                GreenSymbol::curly_close()
            }
            '[' => {
                i += size;
                GreenSymbol::square_bracket_open()
            }
            ']' => {
                i += size;
                GreenSymbol::square_bracket_close()
            }
            '"' => {
                let (symbol, end) = lex_string(input, start);
                i = end;
                symbol
            }
            c if is_word_char(c) => {
                let end = skip_while(input, start, is_word_char);
                i = end;
                lex_word(&input[start..end])
            }
            other => {
                i += size;
                GreenSymbol::unknown_symbol(other)
            }
        };

        trace!(kind = %symbol.kind(), start, length = symbol.length(), "symbol");
        symbols.push(symbol);
    }

    symbols
}

fn is_word_char(ch: char) -> bool {
    matches!(ch, '-' | '+' | '.' | '_') || ch.is_alphanumeric()
}

/// Classify a word: boolean, integer that fits an `i64`, or undefined value
fn lex_word(word: &str) -> GreenSymbol {
    match word {
        "true" => GreenSymbol::boolean(true),
        "false" => GreenSymbol::boolean(false),
        _ => {
            let digits = word.strip_prefix('-').unwrap_or(word);
            let is_integer = !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit())
                && (digits.len() == 1 || !digits.starts_with('0'));
            match word.parse::<i64>() {
                Ok(value) if is_integer => GreenSymbol::integer(value, word.len()),
                _ => GreenSymbol::undefined_value(word),
            }
        }
    }
}

/// Lex a string starting at the opening quote at `start`
///
/// Returns the symbol and the end offset. A string with any problem in it
/// becomes an error string; its diagnostics are relative to `start`.
fn lex_string(input: &str, start: usize) -> (GreenSymbol, usize) {
    let mut value = String::new();
    let mut errors = Vec::new();
    let mut i = start + 1;

    loop {
        let Some((current, size)) = next_char(input, i) else {
            let length = input.len() - start;
            errors.insert(0, JsonErrorInfo::new(JsonErrorCode::UnterminatedString, 0, length));
            return (GreenSymbol::error_string(length, errors), input.len());
        };

        match current {
            '"' => {
                let end = i + size;
                let symbol = if errors.is_empty() {
                    GreenSymbol::string(value, end - start)
                } else {
                    GreenSymbol::error_string(end - start, errors)
                };
                return (symbol, end);
            }
            '\\' => {
                let (end, escaped) = lex_escape(input, i);
                match escaped {
                    Some(c) => value.push(c),
                    None => errors.push(
                        JsonErrorInfo::new(
                            JsonErrorCode::UnrecognizedEscapeSequence,
                            i - start,
                            end - i,
                        )
                        .with_parameters([&input[i..end]]),
                    ),
                }
                i = end;
            }
            c if (c as u32) < 0x20 => {
                errors.push(
                    JsonErrorInfo::new(
                        JsonErrorCode::IllegalControlCharacterInString,
                        i - start,
                        size,
                    )
                    .with_parameters([format!("\\u{:04X}", c as u32)]),
                );
                i += size;
            }
            c => {
                value.push(c);
                i += size;
            }
        }
    }
}

/// Lex an escape sequence at the backslash at `start`
///
/// Returns the end offset and the escaped character, or `None` if the
/// sequence is not recognized. A backslash at the end of the input yields an
/// empty sequence so that the enclosing string reports itself unterminated.
fn lex_escape(input: &str, start: usize) -> (usize, Option<char>) {
    let Some((escape, size)) = next_char(input, start + 1) else {
        return (start + 1, Some('\\'));
    };
    let end = start + 1 + size;
    let simple = match escape {
        '"' => '"',
        '\\' => '\\',
        '/' => '/',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'u' => return lex_unicode_escape(input, start),
        _ => return (end, None),
    };
    (end, Some(simple))
}

/// Lex `\uXXXX`, combining a surrogate pair written as two escapes
fn lex_unicode_escape(input: &str, start: usize) -> (usize, Option<char>) {
    let Some(high) = hex4(input, start + 2) else {
        // Cover the hex digits that are there so the whole sequence is reported
        let end = skip_while(input, start + 2, |c| c.is_ascii_hexdigit()).min(start + 6);
        return (end, None);
    };
    let end = start + 6;

    if (0xD800..0xDC00).contains(&high)
        && input[end..].starts_with("\\u")
        && let Some(low) = hex4(input, end + 2)
        && (0xDC00..0xE000).contains(&low)
    {
        let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return (end + 6, char::from_u32(combined));
    }

    // Lone surrogates are kept as the replacement character
    (end, Some(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER)))
}

fn hex4(input: &str, start: usize) -> Option<u32> {
    let digits = input.get(start..start + 4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Offset of the first character from `start` on that does not satisfy `pred`
fn skip_while(input: &str, start: usize, pred: impl Fn(char) -> bool) -> usize {
    input[start..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(input.len(), |(offset, _)| start + offset)
}

/// Get next character and its UTF-8 size
fn next_char(input: &str, pos: usize) -> Option<(char, usize)> {
    input[pos..].chars().next().map(|c| (c, c.len_utf8()))
}
