// ==========================================
// SMT贴片排产系统 - NeoDen YY1 贴装程序导出器
// ==========================================
// 格式: YY1 P&P CSV, CRLF 行尾, 固定表头块 +
// 恒定 4 条 NozzleChange 指令 (不足用 OFF 占位)
// ==========================================
// 注意: 机器侧序号全部为 1 基 (元件/贴装头/槽位);
// 列表头中 "Mid Y(mm) " 与 "Head " 的尾随空格为
// 机器固件所要求的原样文本, 不得修剪
// ==========================================

use crate::domain::machine::{MachineConfig, NozzleChange};
use crate::domain::part::Part;
use crate::exporter::ExportError;
use csv::{Terminator, WriterBuilder};
use std::path::Path;
use tracing::info;

/// 占位空行列数
const BLANK_COLUMNS: usize = 14;

/// 文本字段净化: 逗号转句点, 去除引号
fn csv_safe(text: &str) -> String {
    text.replace(',', ".").replace('"', "").replace('\'', "")
}

/// 数值按最短形式输出 (2.00 -> "2", 1.50 -> "1.5")
fn fmt_num(value: f64) -> String {
    value.to_string()
}

fn nozzle_change_row(change: Option<&NozzleChange>) -> Vec<String> {
    match change {
        Some(c) => vec![
            "NozzleChange".to_string(),
            "ON".to_string(),
            "BeforeComponent".to_string(),
            (c.component + 1).to_string(),
            format!("Head{}", c.head + 1),
            "Drop".to_string(),
            format!("Station{}", c.drop + 1),
            "PickUp".to_string(),
            format!("Station{}", c.pickup + 1),
            String::new(),
        ],
        None => vec![
            "NozzleChange".to_string(),
            "OFF".to_string(),
            "BeforeComponent".to_string(),
            "1".to_string(),
            "Head1".to_string(),
            "Drop".to_string(),
            "Station1".to_string(),
            "PickUp".to_string(),
            "Station1".to_string(),
            String::new(),
        ],
    }
}

/// 导出 YY1 贴装程序
///
/// # 参数
/// - `path`: 输出文件路径
/// - `job`: 作业序列 (机器执行顺序)
/// - `changes`: 吸嘴更换日志 (≤ 4 条)
/// - `config`: 机器配置 (提供各头 Z 轴偏移)
pub fn export_job(
    path: &Path,
    job: &[Part],
    changes: &[NozzleChange],
    config: &MachineConfig,
) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .flexible(true)
        .from_path(path)?;

    let blank = vec![""; BLANK_COLUMNS];

    writer.write_record([
        "NEODEN", "YY1", "P&P FILE", "", "", "", "", "", "", "", "", "", "", "",
    ])?;
    writer.write_record(&blank)?;
    writer.write_record([
        "PanelizedPCB",
        "UnitLength",
        "0",
        "UnitWidth",
        "0",
        "Rows",
        "1",
        "Columns",
        "1",
        "",
    ])?;
    writer.write_record(&blank)?;
    writer.write_record([
        "Fiducial",
        "1-X",
        "0",
        "1-Y",
        "0",
        "OverallOffsetX",
        "0",
        "OverallOffsetY",
        "0",
        "",
    ])?;
    writer.write_record(&blank)?;

    // 恒定输出 4 条更换指令, 未用的以 OFF 占位
    for i in 0..4 {
        writer.write_record(nozzle_change_row(changes.get(i)))?;
    }
    writer.write_record(&blank)?;

    writer.write_record([
        "Designator",
        "Comment",
        "Footprint",
        "Mid X(mm)",
        "Mid Y(mm) ",
        "Rotation",
        "Head ",
        "FeederNo",
        "Mount Speed(%)",
        "Pick Height(mm)",
        "Place Height(mm)",
        "Mode",
        "Skip",
    ])?;

    for part in job {
        let feeder = part.feeder.clone().unwrap_or_default();
        let z_offset = config.head_z_offset(part.head);
        writer.write_record([
            csv_safe(&part.reference),
            csv_safe(&part.value),
            csv_safe(&part.footprint),
            fmt_num(part.x),
            fmt_num(part.y),
            fmt_num(part.orientation),
            (part.head + 1).to_string(),
            feeder.id.to_string(),
            feeder.speed.to_string(),
            fmt_num(feeder.pickheight + z_offset),
            fmt_num(feeder.placeheight + z_offset),
            feeder.mode.to_string(),
            if part.skip { "1" } else { "0" }.to_string(),
        ])?;
    }

    writer.flush()?;
    info!("已导出 {} 个元件到 {}", job.len(), path.display());
    Ok(())
}
