//! # Headline Unit Tests / 标题横幅单元测试
//!
//! Tests for headline centering, both the layout arithmetic and the
//! rendered banner.
//!
//! 测试标题居中，包括布局计算和渲染出的横幅。

mod common;

use common::{ansi_reporter, visible};
use ws_test_console::core::headline::{HEADLINE_FILL, HEADLINE_WIDTH};
use ws_test_console::{HeadlineLayout, ReporterFlags, Sink};

fn fill_runs(line: &str) -> (usize, usize) {
    let leading = line.chars().take_while(|c| *c == HEADLINE_FILL).count();
    let trailing = line.chars().rev().take_while(|c| *c == HEADLINE_FILL).count();
    (leading, trailing)
}

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_results_layout() {
        let layout = HeadlineLayout::new("RESULTS");
        assert_eq!(layout.left_fill, 35);
        assert_eq!(layout.right_fill, 36);
        assert_eq!(layout.line_len(), HEADLINE_WIDTH);
        assert!(!layout.overflows(HEADLINE_WIDTH));
    }

    #[test]
    fn test_empty_text_layout() {
        let layout = HeadlineLayout::new("");
        assert_eq!(layout.left_fill, 39);
        assert_eq!(layout.right_fill, 39);
        assert_eq!(layout.line_len(), 80);
    }

    #[test]
    fn test_every_fitting_length_fills_the_banner() {
        for len in 0..=78 {
            let text = "x".repeat(len);
            let layout = HeadlineLayout::new(&text);
            assert_eq!(layout.line_len(), 80, "length {}", len);
            assert!(
                layout.right_fill.abs_diff(layout.left_fill) <= 1,
                "length {} gave {:?}",
                len,
                layout
            );
        }
    }

    #[test]
    fn test_text_of_78_chars_has_no_fill() {
        let layout = HeadlineLayout::new(&"x".repeat(78));
        assert_eq!(layout.left_fill, 0);
        assert_eq!(layout.right_fill, 0);
        assert_eq!(layout.line_len(), 80);
    }

    #[test]
    fn test_text_of_79_chars_overflows_by_one() {
        let layout = HeadlineLayout::new(&"x".repeat(79));
        assert_eq!(layout.left_fill, 0);
        assert_eq!(layout.right_fill, 0);
        assert_eq!(layout.line_len(), 81);
        assert!(layout.overflows(HEADLINE_WIDTH));
    }

    #[test]
    fn test_overlong_text_clamps_fill_to_zero() {
        for len in [80, 81, 120, 500] {
            let layout = HeadlineLayout::new(&"x".repeat(len));
            assert_eq!(layout.left_fill, 0);
            assert_eq!(layout.right_fill, 0);
            assert_eq!(layout.line_len(), len + 2);
        }
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let layout = HeadlineLayout::new("ÄÖÜ");
        assert_eq!(layout.text_len, 3);
        assert_eq!(layout.line_len(), 80);
    }

    #[test]
    fn test_custom_width() {
        let layout = HeadlineLayout::with_width("AB", 20);
        assert_eq!(layout.left_fill, 8);
        assert_eq!(layout.right_fill, 8);
        assert_eq!(layout.line_len(), 20);
    }

    #[test]
    fn test_fill_strings() {
        let layout = HeadlineLayout::new("RESULTS");
        assert_eq!(layout.left(), "=".repeat(35));
        assert_eq!(layout.right(), "=".repeat(36));
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_results_banner_is_80_visible_columns() {
        let mut reporter = ansi_reporter(ReporterFlags::default());
        reporter.headline("RESULTS");
        let streams = reporter.into_streams();

        let out = visible(&streams, Sink::Stdout);
        let line = out.strip_suffix('\n').expect("headline ends with a newline");
        assert_eq!(line.chars().count(), 80);
        assert!(line.contains(" RESULTS "));

        let (leading, trailing) = fill_runs(line);
        assert_eq!(leading + trailing + "RESULTS".len() + 2, 80);
        assert!(leading.abs_diff(trailing) <= 1);
        assert!(streams.stderr.is_empty());
    }

    #[test]
    fn test_banner_text_is_magenta_and_fill_is_bright() {
        let mut reporter = ansi_reporter(ReporterFlags::default());
        reporter.headline("RESULTS");
        let raw = reporter.into_streams().text(Sink::Stdout);

        assert!(raw.contains("\x1b[1;35m RESULTS \x1b[0m"));
        assert!(raw.starts_with("\x1b[1;37m="));
    }

    #[test]
    fn test_overlong_banner_has_no_fill() {
        let text = "y".repeat(90);
        let mut reporter = ansi_reporter(ReporterFlags::default());
        reporter.headline(&text);
        let out = visible(reporter.streams(), Sink::Stdout);

        assert_eq!(out, format!(" {} \n", text));
    }
}
