// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成一套可直接喂给 CLI 的示例输入
// (料单 CSV + 飞达库 JSON + 机器配置 JSON)
// 运行: cargo run --bin generate_test_data [输出目录]
// ==========================================

use anyhow::{Context, Result};
use serde_json::json;
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/data"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("无法创建输出目录 {}", out_dir.display()))?;

    // ==========================================
    // 飞达库
    // ==========================================
    let feeders = json!([
        {"id": 1, "nozzle": 2, "value": "10k", "footprint": "R_0603_1608Metric"},
        {"id": 2, "nozzle": 2, "value": "1k", "footprint": "R_0603_1608Metric"},
        {"id": 3, "nozzle": 2, "value": "100nF", "footprint": "C_0603_1608Metric"},
        {"id": 4, "nozzle": 4, "value": "SN74HC595", "footprint": "SOIC-16",
         "speed": 60, "pickheight": 0.2, "placeheight": 0.5},
        {"id": 5, "nozzle": 5, "value": "USB_C_Receptacle", "footprint": "USB_C_SMD",
         "speed": 40, "mode": 1}
    ]);
    let feeders_path = out_dir.join("feeders.json");
    fs::write(&feeders_path, serde_json::to_string_pretty(&feeders)?)?;

    // ==========================================
    // 机器配置 (双头 YY1, 4 槽位更换站)
    // ==========================================
    let machine = json!({
        "head": [2, 2],
        "changer": [0, 4, 5, 0],
        "xoffset": 0,
        "yoffset": 0,
        "headOffset": [0, 0]
    });
    let machine_path = out_dir.join("machine.json");
    fs::write(&machine_path, serde_json::to_string_pretty(&machine)?)?;

    // ==========================================
    // 料单 (KiCad 贴装坐标格式, 含基准点与无匹配元件)
    // ==========================================
    let parts_path = out_dir.join("parts.csv");
    let mut writer = csv::Writer::from_path(&parts_path)?;
    writer.write_record(["Ref", "Val", "Package", "PosX", "PosY", "Rot"])?;
    let rows = [
        ("R1", "10k", "R_0603_1608Metric", "10.0", "10.0", "0"),
        ("R2", "10k", "R_0603_1608Metric", "12.0", "10.0", "270"),
        ("R3", "1k", "R_0603_1608Metric", "14.0", "10.0", "90"),
        ("C1", "100nF", "C_0603_1608Metric", "16.0", "12.5", "0"),
        ("C2", "100nF", "C_0603_1608Metric", "18.0", "12.5", "180"),
        ("U1", "SN74HC595", "SOIC-16", "25.0", "20.0", "0"),
        ("J1", "USB_C_Receptacle", "USB_C_SMD", "40.0", "5.0", "0"),
        ("FID1", "Fiducial", "Fiducial_1mm", "2.0", "2.0", "0"),
        ("FID2", "Fiducial", "Fiducial_1mm", "48.0", "28.0", "0"),
        ("X1", "DoNotPopulate", "Custom", "30.0", "30.0", "0"),
    ];
    for row in rows {
        writer.write_record([row.0, row.1, row.2, row.3, row.4, row.5])?;
    }
    writer.flush()?;

    println!("已生成测试数据:");
    println!("  {}", feeders_path.display());
    println!("  {}", machine_path.display());
    println!("  {}", parts_path.display());
    Ok(())
}
