//! # Color Tags / 颜色标签
//!
//! This module defines the closed set of color tags a reporter can ask for,
//! together with their console attribute encoding. The ANSI encoding lives in
//! the ANSI backend since it goes through the `colored` crate.
//!
//! 此模块定义报告器可以使用的颜色标签集合，以及它们的控制台属性编码。
//! ANSI 编码位于 ANSI 后端，因为它通过 `colored` crate 生成。

use std::fmt;

/// Console character attribute bits, as understood by the Win32 console API.
/// 控制台字符属性位，与 Win32 控制台 API 的定义一致。
pub mod attr {
    pub const FOREGROUND_BLUE: u16 = 0x0001;
    pub const FOREGROUND_GREEN: u16 = 0x0002;
    pub const FOREGROUND_RED: u16 = 0x0004;
    pub const FOREGROUND_INTENSITY: u16 = 0x0008;
}

/// A symbolic style selector for one styled write.
/// 单次样式化写入所使用的符号样式选择器。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestColor {
    /// No styling at all / 不应用任何样式
    #[default]
    Normal,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta,
    /// High-intensity neutral, used for brackets and banner fill.
    /// 高亮中性色，用于括号和横幅填充。
    Bright,
    /// Dim gray, used for status lines.
    /// 暗灰色，用于状态行。
    Status,
}

impl TestColor {
    /// Every tag, in declaration order.
    pub const ALL: [TestColor; 8] = [
        TestColor::Normal,
        TestColor::Green,
        TestColor::Red,
        TestColor::Yellow,
        TestColor::Cyan,
        TestColor::Magenta,
        TestColor::Bright,
        TestColor::Status,
    ];

    /// Returns `true` when the tag applies no styling.
    pub fn is_plain(self) -> bool {
        self == TestColor::Normal
    }

    /// Gets the console attribute word for this tag, or `None` for `Normal`.
    ///
    /// 获取此标签的控制台属性值，`Normal` 返回 `None`。
    pub fn console_attributes(self) -> Option<u16> {
        use attr::*;

        let word = match self {
            TestColor::Normal => return None,
            TestColor::Green => FOREGROUND_GREEN | FOREGROUND_INTENSITY,
            TestColor::Red => FOREGROUND_RED | FOREGROUND_INTENSITY,
            TestColor::Yellow => FOREGROUND_RED | FOREGROUND_GREEN | FOREGROUND_INTENSITY,
            TestColor::Cyan => FOREGROUND_GREEN | FOREGROUND_BLUE | FOREGROUND_INTENSITY,
            TestColor::Magenta => FOREGROUND_RED | FOREGROUND_BLUE | FOREGROUND_INTENSITY,
            TestColor::Bright => {
                FOREGROUND_RED | FOREGROUND_GREEN | FOREGROUND_BLUE | FOREGROUND_INTENSITY
            }
            TestColor::Status => FOREGROUND_INTENSITY,
        };
        Some(word)
    }
}

impl fmt::Display for TestColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestColor::Normal => "normal",
            TestColor::Green => "green",
            TestColor::Red => "red",
            TestColor::Yellow => "yellow",
            TestColor::Cyan => "cyan",
            TestColor::Magenta => "magenta",
            TestColor::Bright => "bright",
            TestColor::Status => "status",
        };
        f.write_str(name)
    }
}
