use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::config::ColorScheme;

#[derive(Debug, Clone, Copy, PartialEq)]
enum TokenKind {
    Key,
    Str,
    Number,
    Keyword,
    Bracket,
    Punct,
    Plain,
}

/// Split one line of JSON into classified runs. Works line by line, so a
/// string left open at the end of a line simply runs to the end.
fn tokenize(line: &str) -> Vec<(TokenKind, &str)> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut plain_start: Option<usize> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'"' => {
                flush(line, &mut tokens, &mut plain_start, i);
                let start = i;
                i += 1;
                while i < bytes.len() {
                    match bytes[i] {
                        b'\\' => {
                            i += 1;
                            i += line[i..].chars().next().map(char::len_utf8).unwrap_or(0);
                        }
                        b'"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                let end = i.min(bytes.len());
                let is_key = line[end..].trim_start().starts_with(':');
                let kind = if is_key { TokenKind::Key } else { TokenKind::Str };
                tokens.push((kind, &line[start..end]));
                i = end;
            }
            b'{' | b'}' | b'[' | b']' => {
                flush(line, &mut tokens, &mut plain_start, i);
                tokens.push((TokenKind::Bracket, &line[i..i + 1]));
                i += 1;
            }
            b':' | b',' => {
                flush(line, &mut tokens, &mut plain_start, i);
                tokens.push((TokenKind::Punct, &line[i..i + 1]));
                i += 1;
            }
            b'-' | b'0'..=b'9' => {
                flush(line, &mut tokens, &mut plain_start, i);
                let start = i;
                while i < bytes.len()
                    && matches!(bytes[i], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
                {
                    i += 1;
                }
                tokens.push((TokenKind::Number, &line[start..i]));
            }
            _ => {
                let rest = &line[i..];
                if let Some(word) = ["true", "false", "null"]
                    .into_iter()
                    .find(|w| rest.starts_with(w))
                {
                    flush(line, &mut tokens, &mut plain_start, i);
                    tokens.push((TokenKind::Keyword, &line[i..i + word.len()]));
                    i += word.len();
                } else {
                    plain_start.get_or_insert(i);
                    // advance a whole char to stay on a boundary
                    i += rest.chars().next().map(char::len_utf8).unwrap_or(1);
                }
            }
        }
    }
    flush(line, &mut tokens, &mut plain_start, bytes.len());
    tokens
}

fn flush<'a>(
    line: &'a str,
    tokens: &mut Vec<(TokenKind, &'a str)>,
    start: &mut Option<usize>,
    end: usize,
) {
    if let Some(s) = start.take() {
        tokens.push((TokenKind::Plain, &line[s..end]));
    }
}

pub fn highlight_json_line(line: &str, colorscheme: &ColorScheme) -> Vec<Span<'static>> {
    tokenize(line)
        .into_iter()
        .map(|(kind, text)| {
            let color = match kind {
                TokenKind::Key => colorscheme.key,
                TokenKind::Str => colorscheme.string,
                TokenKind::Number => colorscheme.number,
                TokenKind::Keyword => colorscheme.boolean,
                TokenKind::Bracket => colorscheme.bracket,
                TokenKind::Punct => Color::White,
                TokenKind::Plain => colorscheme.text,
            };
            Span::styled(text.to_string(), Style::default().fg(color))
        })
        .collect()
}
