// ==========================================
// SMT贴片排产系统 - 贴装调度引擎
// ==========================================
// 职责: 双头轮转消费吸嘴流水线, 生成机器执行顺序
// 输入: 校验通过的流水线集合 + 可变机器状态
// 输出: JobResult (作业序列 + 吸嘴更换日志)
// ==========================================
// 调度策略: 轮转 + 每头每轮一件, 两头进度大致同步;
// 仅在当前吸嘴确无剩余工作时才更换吸嘴, 压缩更换次数;
// 换哪个吸嘴取决于首个在更换站有存量的待处理流水线
// (按编码升序) —— 该决策顺序为既有产线依赖, 不得改动
// ==========================================

use crate::domain::machine::{MachineConfig, NozzleChange};
use crate::domain::part::Part;
use crate::domain::types::{NozzleCode, PipelineKey, NOZZLE_NONE};
use crate::engine::changer::NozzleChangeCoordinator;
use crate::engine::error::ScheduleError;
use crate::engine::pipeline::PipelineSet;
use tracing::{debug, instrument, warn};

// ==========================================
// JobResult - 排产结果
// ==========================================
#[derive(Debug)]
pub struct JobResult {
    /// 作业序列 (即机器执行顺序): 先贴装元件, 后跳过元件
    pub job: Vec<Part>,

    /// 吸嘴更换日志 (按发生顺序, 最多 4 条)
    pub nozzle_changes: Vec<NozzleChange>,
}

// ==========================================
// PlacementScheduler - 贴装调度引擎
// ==========================================
pub struct PlacementScheduler {
    // 无状态引擎, 不需要注入依赖
}

impl PlacementScheduler {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 执行排产
    ///
    /// 阶段 1 (轮转服务): 依贴装头序号逐头服务, 每头每轮至多
    /// 贴一件; 头上吸嘴的流水线取空时, 若仍有待贴元件则尝试
    /// 更换吸嘴并在本轮重试该头, 无可换吸嘴则永久停用该头;
    /// 空头 (吸嘴 0) 自始停用
    ///
    /// 阶段 2 (清空跳过队列): 未分配流水线按 FIFO 全部追加,
    /// 固定 head=0, skip=true
    ///
    /// # 参数
    /// - `pipelines`: 流水线集合 (被消费殆尽)
    /// - `machine`: 可变机器状态 (head/changer 随更换而变)
    ///
    /// # 返回
    /// 作业序列与更换日志; 任一更换前置条件不满足时返回错误
    #[instrument(skip(self, pipelines, machine), fields(
        heads = machine.head_count(),
        parts = pipelines.total_parts()
    ))]
    pub fn run(
        &self,
        pipelines: &mut PipelineSet,
        machine: &mut MachineConfig,
    ) -> Result<JobResult, ScheduleError> {
        let mut coordinator = NozzleChangeCoordinator::new();
        let mut job: Vec<Part> = Vec::new();

        // 空头无法取料也无法触发更换, 自始视为完成
        let mut head_complete: Vec<bool> =
            machine.head.iter().map(|&n| n == NOZZLE_NONE).collect();

        // ==========================================
        // 阶段 1: 轮转服务贴装头
        // ==========================================
        'service: loop {
            let mut head = 0;
            while head < machine.head_count() {
                if head_complete[head] {
                    head += 1;
                    continue;
                }
                let nozzle = machine.head[head];

                if let Some(mut part) = pipelines.pop_next(PipelineKey::Nozzle(nozzle)) {
                    part.head = head;
                    part.skip = false;
                    debug!(
                        "#{} > 贴装头 {} 使用吸嘴 {} 贴装 {}",
                        job.len(),
                        head,
                        nozzle,
                        part.reference
                    );
                    job.push(part);
                    // 本轮不再服务同一头
                    head += 1;
                    continue;
                }

                // 当前吸嘴已无工作, 检查全局剩余
                let left = pipelines.parts_left();
                debug!("吸嘴 {} 流水线已空, 剩余待贴元件 {}", nozzle, left);
                if left == 0 {
                    break 'service;
                }

                match self.next_available_nozzle(pipelines, machine) {
                    Some(next) => {
                        // 更换后重试同一头
                        coordinator.change_nozzle(machine, head, next, job.len())?;
                    }
                    None => {
                        debug!("更换站无任何待用吸嘴, 停用贴装头 {}", head);
                        head_complete[head] = true;
                    }
                }
            }

            // 校验保证不可达: 头全部停用时必然已无待贴元件
            if head_complete.iter().all(|&done| done) {
                if pipelines.parts_left() > 0 {
                    warn!(
                        "贴装头全部停用但仍有 {} 个元件待贴, 提前结束服务",
                        pipelines.parts_left()
                    );
                }
                break;
            }
        }

        // ==========================================
        // 阶段 2: 清空跳过队列
        // ==========================================
        while let Some(mut part) = pipelines.pop_next(PipelineKey::Unassigned) {
            debug!("#{} > {} 将被跳过", job.len(), part.reference);
            part.head = 0;
            part.skip = true;
            job.push(part);
        }

        Ok(JobResult {
            job,
            nozzle_changes: coordinator.into_changes(),
        })
    }

    /// 下一个应更换的吸嘴
    ///
    /// 按流水线键升序扫描待处理流水线, 取第一个在更换站
    /// 有存量的吸嘴编码; 全部无存量时返回 None
    fn next_available_nozzle(
        &self,
        pipelines: &PipelineSet,
        machine: &MachineConfig,
    ) -> Option<NozzleCode> {
        for key in pipelines.pending_keys() {
            if let PipelineKey::Nozzle(nozzle) = key {
                let stock = machine.changer_stock(nozzle);
                debug!("需要吸嘴 {}, 更换站存量 {}", nozzle, stock);
                if stock > 0 {
                    return Some(nozzle);
                }
            }
        }
        None
    }
}

impl Default for PlacementScheduler {
    fn default() -> Self {
        Self::new()
    }
}
