// ==========================================
// SMT贴片排产系统 - 料单加载器
// ==========================================
// 格式: KiCad 贴装坐标 CSV, 首行表头, 列序固定:
// reference, value, footprint, x, y, rotation
// ==========================================
// 加载即完成坐标换算:
// - x/y 加全局偏移并保留 2 位小数
// - 旋转角 > 180 时减 180 (对称封装简化, 域建模约定)
// - value 为 "fiducial" (忽略大小写) 的记录不进入核心
// ==========================================

use crate::domain::machine::MachineConfig;
use crate::domain::part::Part;
use crate::importer::error::ImportError;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// 料单 CSV 最少列数
const MIN_COLUMNS: usize = 6;

/// 保留 2 位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 旋转角归一化到 [0,180)
///
/// 仅适用于对称封装; 非对称封装需在飞达侧补偿
fn normalize_orientation(raw: f64) -> f64 {
    if raw > 180.0 {
        raw - 180.0
    } else {
        raw
    }
}

fn parse_number(raw: &str, row: usize, field: &str) -> Result<f64, ImportError> {
    raw.trim().parse::<f64>().map_err(|_| ImportError::NumberFormat {
        row,
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// 加载料单并完成坐标换算
///
/// # 参数
/// - `path`: 料单 CSV 文件路径
/// - `config`: 机器配置 (提供全局 X/Y 偏移)
///
/// # 返回
/// 元件列表 (保持文件顺序, 基准点已剔除)
pub fn load_parts(path: &Path, config: &MachineConfig) -> Result<Vec<Part>, ImportError> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut parts = Vec::new();
    let mut fiducials = 0usize;
    for (idx, result) in reader.records().enumerate() {
        // 行号按数据行计, 表头为第 1 行
        let row = idx + 2;
        let record = result?;
        if record.len() < MIN_COLUMNS {
            return Err(ImportError::MissingColumns {
                row,
                expected: MIN_COLUMNS,
                actual: record.len(),
            });
        }

        let value = record[1].to_string();
        // 基准点不进入排产核心
        if value.trim().eq_ignore_ascii_case("fiducial") {
            fiducials += 1;
            continue;
        }

        let x = parse_number(&record[3], row, "x")?;
        let y = parse_number(&record[4], row, "y")?;
        let rotation = parse_number(&record[5], row, "rotation")?;

        parts.push(Part::new(
            record[0].to_string(),
            value,
            record[2].to_string(),
            round2(x + config.xoffset),
            round2(y + config.yoffset),
            normalize_orientation(rotation),
        ));
    }

    info!("已加载 {} 个元件 (剔除 {} 个基准点)", parts.len(), fiducials);
    Ok(parts)
}
