use super::{FormatError, Stage};

#[cfg(test)]
mod tests;

const ARROW: &[u8] = b"->";
const ARROW_GLYPH: &[u8] = "→".as_bytes();

/// Parse a configuration string into its ordered stage list.
///
/// Tokens are separated by `->` or `→` outside of parentheses. A token wrapped
/// in one pair of parentheses is a rinse group whose parts are flagged
/// `is_rinse`. Empty tokens are skipped, so an empty or blank input yields an
/// empty list.
pub fn parse_config(text: &str) -> Result<Vec<Stage>, FormatError> {
    let mut stages = Vec::new();

    for token in Tokens::new(text) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match rinse_group(token) {
            Some(inner) => {
                for part in Tokens::new(inner) {
                    let part = part.trim();
                    // an empty slot inside a group has no text of its own to report
                    if part.is_empty() {
                        return Err(FormatError::new(token));
                    }
                    stages.push(parse_part(part)?.rinse());
                }
            }
            None => stages.push(parse_part(token)?),
        }
    }

    tracing::debug!(stages = stages.len(), "parsed configuration");
    Ok(stages)
}

fn rinse_group(token: &str) -> Option<&str> {
    token.strip_prefix('(')?.strip_suffix(')')
}

/// Parse a single trimmed part: `25-30`, `25 – 30` or `60`.
fn parse_part(part: &str) -> Result<Stage, FormatError> {
    if let Some(range) = RangeMatch::find(part) {
        let min = parse_secs(range.min, part)?;
        let max = parse_secs(range.max, part)?;
        if min > max {
            return Err(FormatError::new(part));
        }
        return Ok(Stage::range(min, max, part));
    }

    if is_digits(part) {
        let duration = parse_secs(part, part)?;
        return Ok(Stage::fixed(duration, part));
    }

    Err(FormatError::new(part))
}

/// Seconds are positive; zero and values past `u32` reject the whole part.
fn parse_secs(digits: &str, part: &str) -> Result<u32, FormatError> {
    match digits.parse::<u32>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(FormatError::new(part)),
    }
}

pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexical helpers
// ─────────────────────────────────────────────────────────────────────────────

/// `digits ws* (- | –) ws* digits`, matched against the whole text
pub(crate) struct RangeMatch<'a> {
    pub min: &'a str,
    pub separator: char,
    pub max: &'a str,
}

impl<'a> RangeMatch<'a> {
    pub fn find(text: &'a str) -> Option<Self> {
        let digits_end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (min, rest) = text.split_at(digits_end);
        if min.is_empty() {
            return None;
        }

        let rest = rest.trim_start();
        let separator = rest.chars().next().filter(|c| matches!(c, '-' | '–'))?;
        let max = rest[separator.len_utf8()..].trim_start();

        is_digits(max).then_some(Self {
            min,
            separator,
            max,
        })
    }
}

/// Depth-aware token scanner.
///
/// Yields the raw (untrimmed) text between separators found at nesting
/// depth 0. Separators inside parentheses stay part of the current token.
/// Always yields at least one token, possibly empty.
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }

        // Scanning bytes is safe here: every byte of a multi-byte UTF-8
        // sequence is >= 0x80, so it never equals `(`, `)` or `-`, and a
        // separator match always starts and ends on a char boundary.
        let bytes = self.text.as_bytes();
        let start = self.pos;
        let mut depth: i32 = 0;

        for i in start..bytes.len() {
            match bytes[i] {
                b'(' => depth += 1,
                b')' => depth -= 1,
                _ if depth == 0 => {
                    let rest = &bytes[i..];
                    let sep_len = if rest.starts_with(ARROW) {
                        ARROW.len()
                    } else if rest.starts_with(ARROW_GLYPH) {
                        ARROW_GLYPH.len()
                    } else {
                        continue;
                    };
                    self.pos = i + sep_len;
                    return Some(&self.text[start..i]);
                }
                _ => {}
            }
        }

        self.done = true;
        Some(&self.text[start..])
    }
}
