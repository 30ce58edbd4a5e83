// ==========================================
// SMT贴片排产系统 - 元件实体
// ==========================================
// 生命周期: 由料单导入器创建一次;
// FeederMatcher / PlacementScheduler 就地补全;
// 最终整体移入贴装作业序列, 不会被丢弃
// ==========================================

use crate::domain::feeder::Feeder;
use crate::domain::types::{NozzleCode, PipelineKey, NOZZLE_UNASSIGNED};

// ==========================================
// Part - 待贴装元件
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// 位号 (如 R1, C3)
    pub reference: String,

    /// 元件值 (如 10k, 100nF)
    pub value: String,

    /// 封装 (如 R_0603_1608Metric)
    pub footprint: String,

    /// X 坐标 (mm, 已加全局偏移, 保留 2 位小数)
    pub x: f64,

    /// Y 坐标 (mm, 已加全局偏移, 保留 2 位小数)
    pub y: f64,

    /// 旋转角度 (度, 已归一化到 [0,180))
    pub orientation: f64,

    /// 分配的贴装头 (0 基, 排产时写入)
    pub head: usize,

    /// 跳过标志 (无飞达匹配时为 true)
    pub skip: bool,

    /// 匹配的飞达 (FeederMatcher 写入)
    pub feeder: Option<Feeder>,
}

impl Part {
    /// 构造尚未匹配飞达的元件
    pub fn new(
        reference: impl Into<String>,
        value: impl Into<String>,
        footprint: impl Into<String>,
        x: f64,
        y: f64,
        orientation: f64,
    ) -> Self {
        Self {
            reference: reference.into(),
            value: value.into(),
            footprint: footprint.into(),
            x,
            y,
            orientation,
            head: 0,
            skip: false,
            feeder: None,
        }
    }

    /// 该元件所属的流水线键 (未匹配飞达视为未分配)
    pub fn pipeline_key(&self) -> PipelineKey {
        self.feeder
            .as_ref()
            .map(Feeder::pipeline_key)
            .unwrap_or(PipelineKey::Unassigned)
    }

    /// 排序键: (吸嘴编码, 飞达编号)
    ///
    /// 99 在有效编码中数值最大, 跳过元件自然聚在末尾
    pub fn sort_key(&self) -> (NozzleCode, u32) {
        self.feeder
            .as_ref()
            .map(|f| (f.nozzle, f.id))
            .unwrap_or((NOZZLE_UNASSIGNED, 0))
    }

    /// 匹配的飞达编号 (未匹配时为兜底编号 0)
    pub fn feeder_id(&self) -> u32 {
        self.feeder.as_ref().map(|f| f.id).unwrap_or(0)
    }
}
