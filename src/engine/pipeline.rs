// ==========================================
// SMT贴片排产系统 - 吸嘴流水线
// ==========================================
// 职责: 将排序后的元件按吸嘴切分为 FIFO 队列
// 输入: 排序后的元件列表
// 输出: PipelineSet (吸嘴 -> 元件队列)
// ==========================================
// 红线: 排产开始前必须通过 validate,
// 缺吸嘴 / 无空槽位属于机器配置问题, 直接终止
// ==========================================

use crate::domain::machine::MachineConfig;
use crate::domain::part::Part;
use crate::domain::types::PipelineKey;
use crate::engine::error::ScheduleError;
use std::collections::{BTreeMap, VecDeque};
use tracing::info;

// ==========================================
// PipelineSet - 吸嘴流水线集合
// ==========================================
// BTreeMap 保证键按吸嘴编码升序迭代, Unassigned 排最后;
// 队列取空即删, 键快照供调度器安全迭代
#[derive(Debug, Default)]
pub struct PipelineSet {
    queues: BTreeMap<PipelineKey, VecDeque<Part>>,
}

impl PipelineSet {
    /// 空流水线集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 将元件追加到其所属流水线队尾
    pub fn push(&mut self, part: Part) {
        let key = part.pipeline_key();
        self.queues.entry(key).or_default().push_back(part);
    }

    /// 取出指定流水线的下一个元件, 队列取空后移除该键
    pub fn pop_next(&mut self, key: PipelineKey) -> Option<Part> {
        let queue = self.queues.get_mut(&key)?;
        let part = queue.pop_front();
        if queue.is_empty() {
            self.queues.remove(&key);
        }
        part
    }

    /// 尚待贴装的元件总数 (不含未分配队列)
    pub fn parts_left(&self) -> usize {
        self.queues
            .iter()
            .filter(|(key, _)| !key.is_unassigned())
            .map(|(_, queue)| queue.len())
            .sum()
    }

    /// 当前待处理流水线键的快照 (升序, 不含未分配)
    pub fn pending_keys(&self) -> Vec<PipelineKey> {
        self.queues
            .keys()
            .filter(|key| !key.is_unassigned())
            .copied()
            .collect()
    }

    /// 所有键的快照 (升序)
    pub fn keys(&self) -> Vec<PipelineKey> {
        self.queues.keys().copied().collect()
    }

    /// 指定流水线的队列长度
    pub fn queue_len(&self, key: PipelineKey) -> usize {
        self.queues.get(&key).map(VecDeque::len).unwrap_or(0)
    }

    /// 元件总数 (含未分配队列)
    pub fn total_parts(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}

// ==========================================
// PipelineBuilder - 流水线构建引擎
// ==========================================
pub struct PipelineBuilder {
    // 无状态引擎, 不需要注入依赖
}

impl PipelineBuilder {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 构建吸嘴流水线
    ///
    /// 单遍扫描, 队列内保持排序引擎给出的顺序 (FIFO)
    ///
    /// # 参数
    /// - `parts`: 排序后的元件列表
    pub fn build(&self, parts: Vec<Part>) -> PipelineSet {
        let mut pipelines = PipelineSet::new();
        for part in parts {
            pipelines.push(part);
        }
        info!(
            "构建 {} 条吸嘴流水线, 共 {} 个元件",
            pipelines.keys().len(),
            pipelines.total_parts()
        );
        pipelines
    }

    /// 排产前校验
    ///
    /// 规则:
    /// 1) 每条贴装流水线的吸嘴必须存在于贴装头或更换站
    /// 2) 更换站必须至少有 1 个空槽位
    ///
    /// # 参数
    /// - `pipelines`: 待校验的流水线集合
    /// - `machine`: 机器配置
    pub fn validate(
        &self,
        pipelines: &PipelineSet,
        machine: &MachineConfig,
    ) -> Result<(), ScheduleError> {
        for key in pipelines.pending_keys() {
            if let PipelineKey::Nozzle(nozzle) = key {
                if !machine.is_nozzle_available(nozzle) {
                    return Err(ScheduleError::NozzleUnavailable { nozzle });
                }
            }
        }
        if !machine.has_empty_changer_slot() {
            return Err(ScheduleError::NoEmptyChangerSlot);
        }
        Ok(())
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
