//! 源代码位置追踪
//!
//! 位置是值类型：字符流每读一个字节推进一次，token 创建时拷贝一份，
//! 之后不再修改。

use std::fmt;
use std::sync::Arc;

/// 源代码位置
///
/// `==` 比较完整的 (文件, 行, 列)；判断"是否同一个源文件"请用
/// [`SourceLocation::same_file`]，它只比较文件名。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// 源名称（文件路径）
    pub filename: Arc<str>,
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based；制表符按 tab_width 计
    pub column: usize,
}

impl SourceLocation {
    /// 创建新位置
    pub fn new(filename: impl Into<Arc<str>>, line: usize, column: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }

    /// 文件起始位置 (1:1)
    pub fn start(filename: impl Into<Arc<str>>) -> Self {
        Self::new(filename, 1, 1)
    }

    /// 按消费的字节前进
    ///
    /// - `\n`：换行，列归 1
    /// - `\t`：列 += tab_width
    /// - 其他：列 += 1
    pub fn advance(&mut self, c: u8, tab_width: usize) {
        match c {
            b'\n' => {
                self.line += 1;
                self.column = 1;
            }
            b'\t' => self.column += tab_width,
            _ => self.column += 1,
        }
    }

    /// 文件同一性：只比较文件名，忽略行列
    ///
    /// 供上层做文件级判断（例如 import 循环检测）。
    pub fn same_file(&self, other: &SourceLocation) -> bool {
        self.filename == other.filename
    }

    /// 严格位于 `other` 之后（同一文件内）
    pub fn is_after(&self, other: &SourceLocation) -> bool {
        (self.line, self.column) > (other.line, other.column)
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::start("")
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}
