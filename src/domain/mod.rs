// ==========================================
// SMT贴片排产系统 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含业务规则
// ==========================================

pub mod feeder;
pub mod machine;
pub mod part;
pub mod types;

// 重导出领域实体
pub use feeder::Feeder;
pub use machine::{MachineConfig, NozzleChange};
pub use part::Part;
pub use types::{NozzleCode, PipelineKey, NOZZLE_NONE, NOZZLE_UNASSIGNED};
