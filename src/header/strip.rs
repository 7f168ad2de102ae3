//! Comment removal for C source text.

/// Stripper states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Reading source code
    Code,
    /// Inside a `//` comment, up to the next newline
    Line,
    /// Inside a `/* */` comment
    Block,
}

/// Remove `//` and `/* */` comments from C source text.
///
/// Non-comment characters are preserved verbatim. The newline that ends a
/// line comment is consumed with the comment, so the surrounding lines join.
/// An unterminated block comment runs to end of input without error. Comment
/// openers inside string or character literals are still treated as comment
/// starts; that is a known limitation of the one-pass scan.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut state = State::Code;

    while let Some(c) = chars.next() {
        match state {
            State::Code => {
                if c == '/' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Line;
                } else if c == '/' && chars.peek() == Some(&'*') {
                    chars.next();
                    state = State::Block;
                } else {
                    out.push(c);
                }
            }
            State::Line => {
                if c == '\n' {
                    state = State::Code;
                }
            }
            State::Block => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    out
}
