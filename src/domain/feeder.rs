// ==========================================
// SMT贴片排产系统 - 飞达(供料器)实体
// ==========================================
// 飞达库为 JSON 数组, 字段均可省略, 缺省值见 Default
// id=0 且 nozzle=99 的记录为兜底飞达, 由加载器追加
// ==========================================

use crate::domain::types::{NozzleCode, PipelineKey, NOZZLE_UNASSIGNED};
use serde::{Deserialize, Serialize};

// ==========================================
// Feeder - 飞达记录
// ==========================================
// 字段名与飞达库 JSON 保持一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feeder {
    /// 飞达编号 (0 保留给兜底飞达)
    pub id: u32,

    /// 该飞达元件所需吸嘴编码 (99 = 未分配)
    pub nozzle: NozzleCode,

    /// 元件值 (与料单 value 匹配)
    pub value: String,

    /// 封装 (与料单 footprint 匹配)
    pub footprint: String,

    /// 贴装模式
    pub mode: u32,

    /// 贴装速度 (%)
    pub speed: u32,

    /// 取料高度 (mm)
    pub pickheight: f64,

    /// 贴装高度 (mm)
    pub placeheight: f64,
}

impl Default for Feeder {
    fn default() -> Self {
        Self {
            id: 0,
            nozzle: NOZZLE_UNASSIGNED,
            value: String::new(),
            footprint: String::new(),
            mode: 3,
            speed: 100,
            pickheight: 0.0,
            placeheight: 0.0,
        }
    }
}

impl Feeder {
    /// 兜底飞达: 承接所有无匹配的元件
    pub fn fallback() -> Self {
        Self::default()
    }

    /// 判断飞达是否匹配给定的元件值与封装
    ///
    /// 匹配规则: 忽略大小写, 去除首尾空白
    pub fn matches(&self, value: &str, footprint: &str) -> bool {
        self.value.trim().eq_ignore_ascii_case(value.trim())
            && self.footprint.trim().eq_ignore_ascii_case(footprint.trim())
    }

    /// 该飞达元件所属的流水线键
    pub fn pipeline_key(&self) -> PipelineKey {
        PipelineKey::from_code(self.nozzle)
    }
}
