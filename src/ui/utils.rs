use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Take `width_cols` display columns of `s`, starting at `start_cols`.
/// A wide character straddling either edge is dropped.
pub fn slice_columns(s: &str, start_cols: usize, width_cols: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    let end_cols = start_cols + width_cols;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if col >= start_cols && col + w <= end_cols {
            out.push(c);
        }
        col += w;
        if col >= end_cols {
            break;
        }
    }
    out
}

/// Horizontal viewport over styled spans.
pub fn slice_spans(spans: Vec<Span<'static>>, start_col: usize, width: usize) -> Vec<Span<'static>> {
    let mut result = Vec::new();
    let mut col = 0usize;
    let end_col = start_col + width;

    for span in spans {
        let span_width = UnicodeWidthStr::width(span.content.as_ref());
        let span_start = col;
        col += span_width;

        if col <= start_col {
            continue;
        }
        if span_start >= end_col {
            break;
        }

        let from = start_col.saturating_sub(span_start);
        let to = span_width.min(end_col - span_start);
        let text = slice_columns(&span.content, from, to - from);
        if !text.is_empty() {
            result.push(Span::styled(text, span.style));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_columns_ascii() {
        assert_eq!(slice_columns("abcdef", 2, 3), "cde");
        assert_eq!(slice_columns("abc", 5, 3), "");
    }

    #[test]
    fn test_slice_columns_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(slice_columns("日本語", 2, 4), "本語");
        assert_eq!(slice_columns("日本語", 1, 4), "本");
    }

    #[test]
    fn test_slice_spans_across_boundary() {
        let spans = vec![Span::raw("abc"), Span::raw("def")];
        let sliced = slice_spans(spans, 2, 3);
        let text: String = sliced.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "cde");
    }
}
