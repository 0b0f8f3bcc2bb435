//! Go literal unquoting (`strconv.Unquote` semantics).
//!
//! ```text
//! "a\tb"    → a<TAB>b
//! `raw\n`   → raw\n       (no escapes, carriage returns dropped)
//! 'x'       → x           (exactly one character)
//! 42        → None
//! ```

/// Unquote a Go string or rune literal. Returns `None` for anything that
/// isn't a well-formed quoted literal.
pub fn unquote(literal: &str) -> Option<String> {
    let mut chars = literal.chars();
    let quote = chars.next()?;
    if chars.next_back()? != quote {
        return None;
    }
    let body = chars.as_str();

    match quote {
        '`' => {
            if body.contains('`') {
                return None;
            }
            Some(body.replace('\r', ""))
        }
        '"' => unescape(body, '"'),
        '\'' => {
            let value = unescape(body, '\'')?;
            let mut value_chars = value.chars();
            match (value_chars.next(), value_chars.next()) {
                (Some(_), None) => Some(value),
                _ => None,
            }
        }
        _ => None,
    }
}

fn unescape(body: &str, quote: char) -> Option<String> {
    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == quote || c == '\n' {
            return None;
        }
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }

        match chars.next()? {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '\'' if quote == '\'' => out.push(b'\''),
            '"' if quote == '"' => out.push(b'"'),
            'x' => {
                let byte = read_digits(&mut chars, 2, 16)?;
                out.push(u8::try_from(byte).ok()?);
            }
            'u' => push_char(&mut out, char::from_u32(read_digits(&mut chars, 4, 16)?)?),
            'U' => push_char(&mut out, char::from_u32(read_digits(&mut chars, 8, 16)?)?),
            first @ '0'..='7' => {
                let rest = read_digits(&mut chars, 2, 8)?;
                let value = first.to_digit(8)? * 64 + rest;
                out.push(u8::try_from(value).ok()?);
            }
            _ => return None,
        }
    }

    String::from_utf8(out).ok()
}

fn read_digits(
    chars: &mut std::str::Chars<'_>,
    count: usize,
    radix: u32,
) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(radix)?;
        value = value * radix + digit;
    }
    Some(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
