// ==========================================
// SMT贴片排产系统 - 引擎编排器
// ==========================================
// 职责: 协调四个核心引擎的执行顺序
// 流程: 飞达匹配 -> 元件排序 -> 流水线构建 -> 校验 -> 调度
// ==========================================

use crate::domain::feeder::Feeder;
use crate::domain::machine::MachineConfig;
use crate::domain::part::Part;
use crate::engine::error::ScheduleError;
use crate::engine::matcher::FeederMatcher;
use crate::engine::pipeline::PipelineBuilder;
use crate::engine::scheduler::{JobResult, PlacementScheduler};
use crate::engine::sequencer::PartSequencer;
use tracing::info;

// ==========================================
// JobOrchestrator - 引擎编排器
// ==========================================
pub struct JobOrchestrator {
    matcher: FeederMatcher,
    sequencer: PartSequencer,
    builder: PipelineBuilder,
    scheduler: PlacementScheduler,
}

impl JobOrchestrator {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            matcher: FeederMatcher::new(),
            sequencer: PartSequencer::new(),
            builder: PipelineBuilder::new(),
            scheduler: PlacementScheduler::new(),
        }
    }

    /// 执行完整排产流程
    ///
    /// # 参数
    /// - `parts`: 料单元件列表 (导入器输出)
    /// - `feeders`: 飞达库 (含兜底飞达)
    /// - `machine`: 可变机器状态
    ///
    /// # 返回
    /// 作业序列与吸嘴更换日志; 配置/容量/一致性错误时终止
    pub fn run(
        &self,
        mut parts: Vec<Part>,
        feeders: &[Feeder],
        machine: &mut MachineConfig,
    ) -> Result<JobResult, ScheduleError> {
        self.matcher.assign(&mut parts, feeders);
        self.sequencer.sort(&mut parts);

        let mut pipelines = self.builder.build(parts);
        self.builder.validate(&pipelines, machine)?;

        let result = self.scheduler.run(&mut pipelines, machine)?;
        info!(
            "排产完成: {} 个元件, {} 次吸嘴更换",
            result.job.len(),
            result.nozzle_changes.len()
        );
        Ok(result)
    }
}

impl Default for JobOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
