// ==========================================
// SMT贴片排产系统 - 机器配置加载器
// ==========================================
// 格式: JSON 对象, head/changer 必填,
// xoffset/yoffset/headOffset 可省略 (取默认值)
// ==========================================

use crate::domain::machine::MachineConfig;
use crate::importer::error::ImportError;
use std::fs;
use std::path::Path;
use tracing::info;

/// 加载机器配置
///
/// # 参数
/// - `path`: 机器配置 JSON 文件路径
pub fn load_config(path: &Path) -> Result<MachineConfig, ImportError> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let data = fs::read_to_string(path)?;
    let config: MachineConfig = serde_json::from_str(&data)?;

    info!(
        "已加载机器配置: {} 个贴装头, {} 个更换站槽位",
        config.head_count(),
        config.changer.len()
    );
    Ok(config)
}
