/// Greedily packs `text` into lines of at most `max_width` characters.
///
/// Logographic text is tokenized per character and joined without spaces;
/// everything else is split on whitespace runs and joined with one space.
/// A line always takes its first token, so a token wider than `max_width`
/// ends up alone on its own line instead of being dropped.
pub fn wrap_lines(text: &str, max_width: usize, logographic: bool) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let (tokens, joiner): (Vec<&str>, &str) = if logographic {
        (
            text.char_indices()
                .map(|(idx, c)| &text[idx..idx + c.len_utf8()])
                .collect(),
            "",
        )
    } else {
        (text.split_whitespace().collect(), " ")
    };
    let joiner_width = joiner.chars().count();

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;
    for token in tokens {
        let token_width = token.chars().count();
        if line.is_empty() {
            line.push_str(token);
            line_width = token_width;
            continue;
        }
        if line_width + joiner_width + token_width > max_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(token);
            line_width = token_width;
        } else {
            line.push_str(joiner);
            line.push_str(token);
            line_width += joiner_width + token_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
