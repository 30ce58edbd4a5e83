// ==========================================
// SMT贴片排产系统 - 导出层
// ==========================================
// 职责: 将作业序列序列化为机器可执行文件
// ==========================================

pub mod neoden_yy1;

use thiserror::Error;

/// 导出模块错误类型 (映射到进程退出码 1)
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 写出失败: {0}")]
    Csv(#[from] csv::Error),
}

// 重导出导出入口
pub use neoden_yy1::export_job;
