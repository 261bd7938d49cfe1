//! 字符流抽象
//!
//! 按字节读取一个已打开的命名源，支持位置追踪和单字符回退。
//! 编码按单字节分类处理（ASCII / UTF-8 兼容），不做多字节解码。

use std::io::{Bytes, Read};
use std::path::Path;
use std::sync::Arc;

use super::position::SourceLocation;
use loco_vfs::{SourceReader, VfsError, VirtualFileSystem};
use tracing::{trace, warn};

/// 字符流错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StreamError {
    #[error("cannot open source '{name}': {source}")]
    SourceUnavailable { name: String, source: VfsError },

    #[error("read failed: {0}")]
    Io(String),
}

/// 字符流
///
/// 独占一个源句柄，生命周期结束时（包括出错路径）随 drop 释放。
///
/// 回退槽只有一个：两次 `unread` 之间没有 `read` 时，后一次覆盖前一次。
pub struct CharStream {
    /// 源句柄
    source: Bytes<SourceReader>,
    /// 源是否已读完
    exhausted: bool,
    /// 当前位置（下一个字节将要出现的位置）
    location: SourceLocation,
    /// 最近一次 read 之前的位置，供 unread 恢复
    saved_location: SourceLocation,
    /// 回退槽
    pushback: Option<u8>,
    /// 制表符宽度
    tab_width: usize,
}

impl CharStream {
    /// 通过文件系统打开命名源
    ///
    /// 打不开的源在这里就报错，而不是等到第一次读取。
    pub fn open(
        fs: &dyn VirtualFileSystem,
        name: impl AsRef<Path>,
        tab_width: usize,
    ) -> Result<Self, StreamError> {
        let path = name.as_ref();
        let source_name = path.to_string_lossy().to_string();

        match fs.open(path) {
            Ok(reader) => {
                trace!(target: "loco::lexer::stream", source = %source_name, tab_width, "Opened source");
                Ok(Self::from_reader(source_name, reader, tab_width))
            }
            Err(source) => {
                warn!(target: "loco::lexer::stream", source = %source_name, error = %source, "Failed to open source");
                Err(StreamError::SourceUnavailable {
                    name: source_name,
                    source,
                })
            }
        }
    }

    /// 从已打开的句柄创建
    pub fn from_reader(name: impl Into<Arc<str>>, reader: SourceReader, tab_width: usize) -> Self {
        let location = SourceLocation::start(name);
        Self {
            source: reader.bytes(),
            exhausted: false,
            saved_location: location.clone(),
            location,
            pushback: None,
            tab_width,
        }
    }

    /// 从指定位置开始计数（源片段嵌在更大文件中时使用）
    pub fn starting_at(mut self, location: SourceLocation) -> Self {
        self.saved_location = location.clone();
        self.location = location;
        self
    }

    /// 获取当前位置
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// 制表符宽度
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// 回退槽中是否有字节
    pub fn has_pushback(&self) -> bool {
        self.pushback.is_some()
    }

    /// 读取一个字节并前进
    ///
    /// 回退槽非空时先返回回退的字节。源结束时返回 `Ok(None)`，之后再读仍是 `None`。
    pub fn read(&mut self) -> Result<Option<u8>, StreamError> {
        let byte = match self.pushback.take() {
            Some(c) => Some(c),
            None => self.next_source_byte()?,
        };

        self.saved_location = self.location.clone();
        if let Some(c) = byte {
            self.location.advance(c, self.tab_width);
        }
        Ok(byte)
    }

    /// 回退一个字节
    ///
    /// 位置恢复到对应 `read` 之前。
    pub fn unread(&mut self, c: u8) {
        if self.pushback.is_some() {
            trace!(target: "loco::lexer::stream", byte = c, "Overwriting pending pushback");
        }
        self.pushback = Some(c);
        self.location = self.saved_location.clone();
    }

    /// 跳过空白符和注释
    ///
    /// 空白：空格、`\t`、`\r`、`\n`；注释：`#` 到行尾（不含换行）。
    /// 停在第一个有效字节之前，下一次 `read` 返回它。到达源结尾时正常返回。
    pub fn skip_whitespace_and_comments(&mut self) -> Result<(), StreamError> {
        loop {
            match self.read()? {
                Some(b' ' | b'\t' | b'\r' | b'\n') => {}
                Some(b'#') => self.skip_line_comment()?,
                Some(c) => {
                    self.unread(c);
                    return Ok(());
                }
                None => return Ok(()),
            }
        }
    }

    /// 跳过注释正文，换行留给下一轮
    fn skip_line_comment(&mut self) -> Result<(), StreamError> {
        loop {
            match self.read()? {
                Some(b'\n') => {
                    self.unread(b'\n');
                    return Ok(());
                }
                Some(_) => {}
                None => return Ok(()),
            }
        }
    }

    fn next_source_byte(&mut self) -> Result<Option<u8>, StreamError> {
        if self.exhausted {
            return Ok(None);
        }
        match self.source.next() {
            Some(Ok(c)) => Ok(Some(c)),
            Some(Err(e)) => {
                warn!(target: "loco::lexer::stream", location = %self.location, error = %e, "Source read failed");
                Err(StreamError::Io(e.to_string()))
            }
            None => {
                trace!(target: "loco::lexer::stream", location = %self.location, "Reached end of source");
                self.exhausted = true;
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for CharStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharStream")
            .field("location", &self.location)
            .field("pushback", &self.pushback)
            .field("exhausted", &self.exhausted)
            .field("tab_width", &self.tab_width)
            .finish()
    }
}
