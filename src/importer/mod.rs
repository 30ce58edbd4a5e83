// ==========================================
// SMT贴片排产系统 - 导入层
// ==========================================
// 职责: 外部数据读取与换算, 不含排产逻辑
// 输入一次性读入, 之后视为不可变 (机器状态除外)
// ==========================================

pub mod config_loader;
pub mod error;
pub mod feeder_loader;
pub mod part_loader;

// 重导出加载入口
pub use config_loader::load_config;
pub use error::ImportError;
pub use feeder_loader::load_feeders;
pub use part_loader::load_parts;
