/// A resolved location in the source text.
///
/// `index` is a byte offset into the source; `line` and `column` are 1-based
/// and intended for display. Positions are cheap to copy and are never shared
/// between tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the source.
    pub index:  usize,
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column number, reset on every newline.
    pub column: usize,
}

impl Position {
    /// The position of the first character of any source text.
    #[must_use]
    pub const fn start() -> Self {
        Self { index:  0,
               line:   1,
               column: 1, }
    }

    /// Returns the position reached after advancing over `text`.
    ///
    /// Newlines bump the line counter and reset the column; any other
    /// character advances the column by one.
    ///
    /// # Example
    /// ```
    /// use qlang::position::Position;
    ///
    /// let pos = Position::start().advanced_over("ab\nc");
    ///
    /// assert_eq!(pos.line, 2);
    /// assert_eq!(pos.column, 2);
    /// ```
    #[must_use]
    pub fn advanced_over(mut self, text: &str) -> Self {
        for c in text.chars() {
            self.index += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// A half-open region of source text, from `start` up to `end`.
///
/// The end position points one past the final character of the region, so an
/// empty span (`start == end`) marks a single point, such as end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First position covered by the span.
    pub start: Position,
    /// One past the last position covered by the span.
    pub end:   Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width span marking a single point.
    #[must_use]
    pub const fn empty(at: Position) -> Self {
        Self { start: at, end: at }
    }

    /// Joins two spans into one covering both.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self { start: self.start,
               end:   other.end, }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.index == self.end.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_tracks_lines_and_columns() {
        let pos = Position::start().advanced_over("dec x = 1\ndec");

        assert_eq!(pos.index, 13);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 4);
    }

    #[test]
    fn joined_spans_cover_both_ends() {
        let a = Span::new(Position::start(), Position::start().advanced_over("dec"));
        let b = Span::new(Position::start().advanced_over("dec "),
                          Position::start().advanced_over("dec x"));

        let joined = a.to(b);

        assert_eq!(joined.start.column, 1);
        assert_eq!(joined.end.column, 6);
    }
}
