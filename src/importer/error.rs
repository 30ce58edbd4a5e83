// ==========================================
// SMT贴片排产系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 所有导入错误映射到进程退出码 1
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),

    // ===== 数据映射错误 =====
    #[error("料单记录缺少字段 (行 {row}): 期望至少 {expected} 列, 实际 {actual} 列")]
    MissingColumns {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("数值解析失败 (行 {row}, 字段 {field}): {value}")]
    NumberFormat {
        row: usize,
        field: String,
        value: String,
    },
}
