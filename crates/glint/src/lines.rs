//! Line-number post-processing.
//!
//! Wraps each line of the final markup in `code-line` / `line-number` /
//! `line-content` spans. Spans that cross a line break (multiline strings
//! and comments) are closed before the break and reopened after it, so no
//! tag is ever split and every line is well-formed on its own.
//! `code-line` is expected to be styled as a block element.

/// Add line-number structure to highlighted (or merely escaped) markup.
pub fn number_lines(html: &str) -> String {
    let mut out = String::with_capacity(html.len() * 2);
    let mut open: Vec<&str> = Vec::new();
    let mut line = 1usize;
    start_line(&mut out, line, &open);
    let mut rest = html;
    loop {
        let Some(pos) = rest.find(['<', '\n']) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..pos]);
        if rest.as_bytes()[pos] == b'<' {
            let end = rest[pos..].find('>').map_or(rest.len(), |e| pos + e + 1);
            let tag = &rest[pos..end];
            if tag.starts_with("</") {
                open.pop();
            } else {
                open.push(tag);
            }
            out.push_str(tag);
            rest = &rest[end..];
        } else {
            close_open(&mut out, &open);
            end_line(&mut out);
            line += 1;
            start_line(&mut out, line, &open);
            rest = &rest[pos + 1..];
        }
    }
    close_open(&mut out, &open);
    end_line(&mut out);
    out
}

fn start_line(out: &mut String, number: usize, open: &[&str]) {
    out.push_str("<span class=\"code-line\"><span class=\"line-number\">");
    out.push_str(&number.to_string());
    out.push_str("</span><span class=\"line-content\">");
    for tag in open {
        out.push_str(tag);
    }
}

fn close_open(out: &mut String, open: &[&str]) {
    for _ in open {
        out.push_str("</span>");
    }
}

fn end_line(out: &mut String) {
    out.push_str("</span></span>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced(html: &str) -> bool {
        html.matches("<span").count() == html.matches("</span>").count()
    }

    #[test]
    fn numbers_every_line() {
        let out = number_lines("one\ntwo\nthree");
        assert!(out.contains("<span class=\"line-number\">1</span>"));
        assert!(out.contains("<span class=\"line-number\">3</span>"));
        assert!(balanced(&out));
    }

    #[test]
    fn reopens_spans_split_by_a_break() {
        let input = "<span class=\"js-comment\">/* a\nb */</span>";
        let out = number_lines(input);
        // the comment span is closed at the break and reopened on line 2
        assert_eq!(out.matches("class=\"js-comment\"").count(), 2);
        assert!(balanced(&out));
        assert!(!out.contains("a\n"), "raw break must be consumed");
    }

    #[test]
    fn single_line_input_gets_one_wrapper() {
        let out = number_lines("plain");
        assert_eq!(out.matches("code-line").count(), 1);
        assert!(out.ends_with("plain</span></span>"));
    }
}
