// ==========================================
// SMT贴片排产系统 - 核心库
// ==========================================
// 系统定位: 将散列的贴装坐标料单转换为
// NeoDen YY1 双头贴片机可执行的有序贴装程序
// 核心难点: 双头吸嘴调度 (更换额度 ≤ 4 次)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排产业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 导出层 - 机器程序文件
pub mod exporter;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{NozzleCode, PipelineKey, NOZZLE_NONE, NOZZLE_UNASSIGNED};

// 领域实体
pub use domain::{Feeder, MachineConfig, NozzleChange, Part};

// 引擎
pub use engine::{
    FeederMatcher, JobOrchestrator, JobResult, NozzleChangeCoordinator, PartSequencer,
    PipelineBuilder, PipelineSet, PlacementScheduler, ScheduleError, MAX_NOZZLE_CHANGES,
};

// 导入/导出
pub use exporter::ExportError;
pub use importer::ImportError;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "SMT贴片排产系统";
