// ==========================================
// SMT贴片排产系统 - 排产引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 四类错误全部致命, 引擎内部不重试不兜底;
// 每类错误对应独立的进程退出码, 便于外围脚本判断
// ==========================================

use crate::domain::types::NozzleCode;
use thiserror::Error;

/// 排产引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    // ===== 配置错误 =====
    #[error("吸嘴 {nozzle} 不可用: 未安装在任何贴装头, 更换站中也没有")]
    NozzleUnavailable { nozzle: NozzleCode },

    #[error("更换站必须至少保留 1 个空槽位, 否则无法执行任何吸嘴更换")]
    NoEmptyChangerSlot,

    // ===== 容量错误 =====
    #[error("无法更换吸嘴: {max} 次更换额度已用完 (贴装头 {head}, 目标吸嘴 {nozzle}, 元件 #{component})")]
    ChangeBudgetExhausted {
        head: usize,
        nozzle: NozzleCode,
        component: usize,
        max: usize,
    },

    // ===== 一致性错误 =====
    // 校验通过后理论上不可达, 但机器状态在排产中持续变化, 必须防御性检查
    #[error("更换站中找不到吸嘴 {nozzle} (空槽位: {drop_in:?}, 取出槽位: {pick_from:?})")]
    NozzleNotFound {
        nozzle: NozzleCode,
        drop_in: Option<usize>,
        pick_from: Option<usize>,
    },
}

impl ScheduleError {
    /// 进程退出码 (与历史工具保持一致, 外围脚本依赖该映射)
    pub fn exit_code(&self) -> i32 {
        match self {
            ScheduleError::ChangeBudgetExhausted { .. } => 2,
            ScheduleError::NozzleNotFound { .. } => 3,
            ScheduleError::NozzleUnavailable { .. } => 4,
            ScheduleError::NoEmptyChangerSlot => 5,
        }
    }
}
