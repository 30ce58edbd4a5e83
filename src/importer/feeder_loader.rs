// ==========================================
// SMT贴片排产系统 - 飞达库加载器
// ==========================================
// 格式: JSON 数组, 每条记录字段均可省略 (取 Default)
// 红线: 必须在末尾追加兜底飞达 (id=0, nozzle=99),
// 置于末尾保证真实飞达优先匹配
// ==========================================

use crate::domain::feeder::Feeder;
use crate::importer::error::ImportError;
use std::fs;
use std::path::Path;
use tracing::info;

/// 加载飞达库并追加兜底飞达
///
/// # 参数
/// - `path`: 飞达库 JSON 文件路径
///
/// # 返回
/// 飞达列表 (保持文件顺序, 末尾为兜底飞达)
pub fn load_feeders(path: &Path) -> Result<Vec<Feeder>, ImportError> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let data = fs::read_to_string(path)?;
    let mut feeders: Vec<Feeder> = serde_json::from_str(&data)?;
    feeders.push(Feeder::fallback());

    info!("已加载 {} 个飞达 (含兜底飞达)", feeders.len());
    Ok(feeders)
}
