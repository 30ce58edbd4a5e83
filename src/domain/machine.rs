// ==========================================
// SMT贴片排产系统 - 机器配置与机器状态
// ==========================================
// head / changer 数组在排产过程中被核心引擎就地修改,
// 即 MachineConfig 同时承担"配置"与"可变机器状态"两个角色;
// 整个排产期间由调用方独占持有, 以 &mut 传入
// ==========================================

use crate::domain::types::{NozzleCode, NOZZLE_NONE};
use serde::{Deserialize, Serialize};

fn default_head_offset() -> Vec<f64> {
    vec![0.0, 0.0]
}

// ==========================================
// MachineConfig - 机器配置 (JSON)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// 各贴装头当前安装的吸嘴编码 (0 = 空头), 长度即贴装头数量
    pub head: Vec<NozzleCode>,

    /// 更换站各槽位内容 (0 = 空槽位)
    pub changer: Vec<NozzleCode>,

    /// 全局 X 偏移 (mm)
    #[serde(default)]
    pub xoffset: f64,

    /// 全局 Y 偏移 (mm)
    #[serde(default)]
    pub yoffset: f64,

    /// 各贴装头 Z 轴偏移 (mm), 导出时加到取/贴高度上
    #[serde(default = "default_head_offset", rename = "headOffset")]
    pub head_offset: Vec<f64>,
}

impl MachineConfig {
    /// 贴装头数量
    pub fn head_count(&self) -> usize {
        self.head.len()
    }

    /// 吸嘴是否存在于任一贴装头或更换站槽位
    pub fn is_nozzle_available(&self, nozzle: NozzleCode) -> bool {
        self.head.iter().any(|&n| n == nozzle) || self.changer.iter().any(|&n| n == nozzle)
    }

    /// 更换站是否还有空槽位
    pub fn has_empty_changer_slot(&self) -> bool {
        self.changer.iter().any(|&n| n == NOZZLE_NONE)
    }

    /// 更换站中指定吸嘴的存量
    pub fn changer_stock(&self, nozzle: NozzleCode) -> usize {
        self.changer.iter().filter(|&&n| n == nozzle).count()
    }

    /// 指定贴装头的 Z 轴偏移 (越界取 0)
    pub fn head_z_offset(&self, head: usize) -> f64 {
        self.head_offset.get(head).copied().unwrap_or(0.0)
    }
}

// ==========================================
// NozzleChange - 吸嘴更换事件
// ==========================================
// 所有索引均为 0 基, 导出层负责转为机器要求的 1 基
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NozzleChange {
    /// 在第几个元件之前执行更换 (0 基元件序号)
    pub component: usize,

    /// 受影响的贴装头
    pub head: usize,

    /// 旧吸嘴放入的槽位
    pub drop: usize,

    /// 新吸嘴取出的槽位
    pub pickup: usize,
}
