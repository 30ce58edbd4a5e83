// ==========================================
// SMT贴片排产系统 - 引擎层
// ==========================================
// 职责: 排产业务规则, 不做文件 I/O
// 红线: 四类排产错误全部致命, 引擎内部不重试
// ==========================================

pub mod changer;
pub mod error;
pub mod matcher;
pub mod orchestrator;
pub mod pipeline;
pub mod scheduler;
pub mod sequencer;

// 重导出核心引擎
pub use changer::{NozzleChangeCoordinator, MAX_NOZZLE_CHANGES};
pub use error::ScheduleError;
pub use matcher::FeederMatcher;
pub use orchestrator::JobOrchestrator;
pub use pipeline::{PipelineBuilder, PipelineSet};
pub use scheduler::{JobResult, PlacementScheduler};
pub use sequencer::PartSequencer;
