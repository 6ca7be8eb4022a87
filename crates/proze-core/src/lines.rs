//! Line splitting helpers.
//!
//! Manuscripts reach the core exactly as the host editor holds them, so newlines are not
//! normalized up front. Any of `"\n"`, `"\r\n"` or a bare `"\r"` ends a line, and a `"\r\n"`
//! pair is a single terminator.
//!
//! Line semantics match the rest of the kernel: `N` terminators yield `N + 1` lines (a trailing
//! terminator produces a trailing empty line), and the empty text is one empty line.

/// Iterator over the lines of a text, without their terminators.
///
/// Created by [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let Some(idx) = rest.find(['\n', '\r']) else {
            self.rest = None;
            return Some(rest);
        };

        let terminator_len = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = Some(&rest[idx + terminator_len..]);
        Some(&rest[..idx])
    }
}

impl std::iter::FusedIterator for Lines<'_> {}

/// Split `text` into lines on `\n`, `\r\n` or `\r`.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

/// Number of lines in `text` under the same rules as [`lines`].
pub fn line_count(text: &str) -> usize {
    lines(text).count()
}
