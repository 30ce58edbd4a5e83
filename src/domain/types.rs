// ==========================================
// SMT贴片排产系统 - 领域类型定义
// ==========================================
// 吸嘴编码体系: 0 = 空(无吸嘴/空槽位), 99 = 未分配(无飞达匹配)
// ==========================================

use std::fmt;

// ==========================================
// 吸嘴编码 (Nozzle Code)
// ==========================================

/// 吸嘴编码。0 表示"无吸嘴"(贴装头空置或更换站空槽位)
pub type NozzleCode = u32;

/// 空吸嘴 / 空槽位
pub const NOZZLE_NONE: NozzleCode = 0;

/// 未分配吸嘴 (无飞达匹配的元件, 永远跳过)
pub const NOZZLE_UNASSIGNED: NozzleCode = 99;

// ==========================================
// 流水线键 (Pipeline Key)
// ==========================================
// 未匹配元件不复用数字哨兵 99 作比较,
// 用显式变体承载"未分配"语义
// 变体顺序即排序顺序: Unassigned 永远排最后
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineKey {
    /// 需要指定编码的吸嘴
    Nozzle(NozzleCode),
    /// 无飞达匹配, 排在所有贴装流水线之后
    Unassigned,
}

impl PipelineKey {
    /// 从飞达吸嘴编码构造流水线键
    ///
    /// # 参数
    /// - `code`: 飞达定义中的吸嘴编码 (99 = 未分配)
    pub fn from_code(code: NozzleCode) -> Self {
        if code == NOZZLE_UNASSIGNED {
            PipelineKey::Unassigned
        } else {
            PipelineKey::Nozzle(code)
        }
    }

    /// 是否为未分配键
    pub fn is_unassigned(&self) -> bool {
        matches!(self, PipelineKey::Unassigned)
    }
}

impl fmt::Display for PipelineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineKey::Nozzle(code) => write!(f, "{}", code),
            PipelineKey::Unassigned => write!(f, "{}", NOZZLE_UNASSIGNED),
        }
    }
}
