//! 测试辅助工具
//!
//! 提供真实文件上的端到端测试辅助函数

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// 测试结束时自动删除的临时源文件
pub struct TempSource {
    path: PathBuf,
}

impl TempSource {
    /// 在系统临时目录下写入源文件
    pub fn new(name: &str, content: &str) -> Self {
        let path = std::env::temp_dir().join(format!("loco_it_{}_{}", std::process::id(), name));
        std::fs::write(&path, content).expect("failed to write temp source");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 源名（即 token 位置中的文件名）
    pub fn name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempSource {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
