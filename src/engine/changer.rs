// ==========================================
// SMT贴片排产系统 - 吸嘴更换协调器
// ==========================================
// 职责: 执行吸嘴更换, 维护更换事件日志与更换额度
// 输入: 可变机器状态 + 目标贴装头/吸嘴/元件序号
// 输出: NozzleChange 事件 (按发生顺序累积)
// ==========================================
// 红线: YY1 机型整个作业最多 4 次吸嘴更换 (机器硬限制);
// 槽位选择为首位适配 (从 0 号槽位起第一个命中), 不做优化
// ==========================================

use crate::domain::machine::{MachineConfig, NozzleChange};
use crate::domain::types::{NozzleCode, NOZZLE_NONE};
use crate::engine::error::ScheduleError;
use tracing::info;

/// 单个作业允许的吸嘴更换上限 (YY1 机型硬限制)
pub const MAX_NOZZLE_CHANGES: usize = 4;

// ==========================================
// NozzleChangeCoordinator - 吸嘴更换协调器
// ==========================================
pub struct NozzleChangeCoordinator {
    changes: Vec<NozzleChange>,
}

impl NozzleChangeCoordinator {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// 已记录的更换事件
    pub fn changes(&self) -> &[NozzleChange] {
        &self.changes
    }

    /// 剩余更换额度
    pub fn remaining_budget(&self) -> usize {
        MAX_NOZZLE_CHANGES.saturating_sub(self.changes.len())
    }

    /// 消费协调器, 取出全部更换事件
    pub fn into_changes(self) -> Vec<NozzleChange> {
        self.changes
    }

    /// 为指定贴装头更换吸嘴
    ///
    /// 前置条件 (按序检查, 任一不满足即致命错误):
    /// 1) 已记录事件数 < 4
    /// 2) 更换站存在空槽位 (放入旧吸嘴)
    /// 3) 更换站存在装有目标吸嘴的槽位 (取出新吸嘴)
    ///
    /// 效果 (对调度器原子可见): 旧吸嘴入空槽位,
    /// 贴装头装上新吸嘴, 取出槽位置空, 记录事件
    ///
    /// # 参数
    /// - `machine`: 可变机器状态
    /// - `head`: 贴装头序号 (0 基)
    /// - `new_nozzle`: 目标吸嘴编码
    /// - `before_component`: 在该元件序号前执行 (0 基)
    pub fn change_nozzle(
        &mut self,
        machine: &mut MachineConfig,
        head: usize,
        new_nozzle: NozzleCode,
        before_component: usize,
    ) -> Result<NozzleChange, ScheduleError> {
        info!(
            "贴装头 {} 吸嘴更换: {} -> {}, 于元件 #{} 之前",
            head, machine.head[head], new_nozzle, before_component
        );

        if self.changes.len() >= MAX_NOZZLE_CHANGES {
            return Err(ScheduleError::ChangeBudgetExhausted {
                head,
                nozzle: new_nozzle,
                component: before_component,
                max: MAX_NOZZLE_CHANGES,
            });
        }

        // 首位适配: 从 0 号槽位起分别找第一个空槽位与第一个目标吸嘴
        let drop_in = machine.changer.iter().position(|&n| n == NOZZLE_NONE);
        let pick_from = machine.changer.iter().position(|&n| n == new_nozzle);

        let (drop_in, pick_from) = match (drop_in, pick_from) {
            (Some(d), Some(p)) => (d, p),
            _ => {
                return Err(ScheduleError::NozzleNotFound {
                    nozzle: new_nozzle,
                    drop_in,
                    pick_from,
                })
            }
        };

        machine.changer[drop_in] = machine.head[head];
        machine.head[head] = new_nozzle;
        machine.changer[pick_from] = NOZZLE_NONE;

        let change = NozzleChange {
            component: before_component,
            head,
            drop: drop_in,
            pickup: pick_from,
        };
        self.changes.push(change);
        Ok(change)
    }
}

impl Default for NozzleChangeCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
