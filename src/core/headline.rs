//! # Headline Layout / 标题横幅布局
//!
//! Computes how a headline is centered inside the fixed-width `=` banner.
//!
//! 计算标题在固定宽度 `=` 横幅中的居中方式。

/// Width of a headline banner in columns.
pub const HEADLINE_WIDTH: usize = 80;

/// The character repeated on both sides of a headline.
pub const HEADLINE_FILL: char = '=';

/// Fill counts on either side of a centered headline.
///
/// The text is rendered as `left_fill` fill characters, a space, the text,
/// a space, then `right_fill` fill characters. Text of 79 characters or more
/// gets no fill at all and the line runs past the banner width.
///
/// 居中标题两侧的填充数量。
/// 文本渲染为 `left_fill` 个填充字符、一个空格、文本、一个空格，
/// 然后是 `right_fill` 个填充字符。79 个字符及以上的文本没有填充，行宽会超过横幅宽度。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineLayout {
    pub left_fill: usize,
    pub right_fill: usize,
    pub text_len: usize,
}

impl HeadlineLayout {
    /// Lays out `text` in a banner of [`HEADLINE_WIDTH`] columns.
    pub fn new(text: &str) -> Self {
        Self::with_width(text, HEADLINE_WIDTH)
    }

    /// Lays out `text` in a banner of `width` columns.
    ///
    /// Left fill is `(width - len) / 2 - 1`, the right side takes the rest.
    /// Both saturate at zero.
    ///
    /// 左侧填充为 `(width - len) / 2 - 1`，右侧占用剩余部分。两者最小为零。
    pub fn with_width(text: &str, width: usize) -> Self {
        let text_len = text.chars().count();
        let left_fill = (width.saturating_sub(text_len) / 2).saturating_sub(1);
        let used = left_fill + text_len + 2;
        let right_fill = width.saturating_sub(used);

        Self {
            left_fill,
            right_fill,
            text_len,
        }
    }

    /// Total visible columns of the rendered line, newline excluded.
    pub fn line_len(&self) -> usize {
        self.left_fill + self.text_len + 2 + self.right_fill
    }

    /// Returns `true` if the text did not fit and the line overflows the banner.
    pub fn overflows(&self, width: usize) -> bool {
        self.line_len() > width
    }

    /// The left-hand fill string.
    pub fn left(&self) -> String {
        fill(self.left_fill)
    }

    /// The right-hand fill string.
    pub fn right(&self) -> String {
        fill(self.right_fill)
    }
}

fn fill(count: usize) -> String {
    std::iter::repeat_n(HEADLINE_FILL, count).collect()
}
