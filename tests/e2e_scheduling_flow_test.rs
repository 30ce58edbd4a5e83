// ==========================================
// 端到端排产流程测试
// ==========================================
// 测试目标: 料单 -> 排产 -> 贴装程序 全链路
// 覆盖范围: 正常流程、配置错误退出码
// ==========================================

use smt_pnp_aps::engine::{JobOrchestrator, ScheduleError};
use smt_pnp_aps::exporter::export_job;
use smt_pnp_aps::importer::{load_config, load_feeders, load_parts};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ==========================================
// 测试夹具
// ==========================================

const FEEDERS_JSON: &str = r#"[
    {"id": 1, "nozzle": 5, "value": "10k", "footprint": "R_0603_1608Metric"},
    {"id": 2, "nozzle": 5, "value": "100nF", "footprint": "C_0603_1608Metric"},
    {"id": 3, "nozzle": 7, "value": "SN74HC595", "footprint": "SOIC-16", "speed": 60}
]"#;

const MACHINE_JSON: &str = r#"{
    "head": [5, 5],
    "changer": [0, 7],
    "xoffset": 0,
    "yoffset": 0,
    "headOffset": [0, 0]
}"#;

const PARTS_CSV: &str = "\
Ref,Val,Package,PosX,PosY,Rot
U1,SN74HC595,SOIC-16,30.0,20.0,0
R1,10k,R_0603_1608Metric,10.0,10.0,0
FID1,Fiducial,Fiducial_1mm,0.0,0.0,0
C1,100nF,C_0603_1608Metric,20.0,10.0,90
X1,Unknown,NoFootprint,5.0,5.0,0
R2,10k,R_0603_1608Metric,12.0,10.0,270
";

fn write_inputs(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let feeders = dir.path().join("feeders.json");
    let machine = dir.path().join("machine.json");
    let parts = dir.path().join("parts.csv");
    fs::write(&feeders, FEEDERS_JSON).unwrap();
    fs::write(&machine, MACHINE_JSON).unwrap();
    fs::write(&parts, PARTS_CSV).unwrap();
    (feeders, machine, parts)
}

// ==========================================
// 正常流程测试
// ==========================================

#[test]
fn test_full_flow_produces_machine_program() {
    let dir = TempDir::new().unwrap();
    let (feeders_path, machine_path, parts_path) = write_inputs(&dir);
    let output_path = dir.path().join("job.csv");

    let feeders = load_feeders(&feeders_path).unwrap();
    let mut machine = load_config(&machine_path).unwrap();
    let parts = load_parts(&parts_path, &machine).unwrap();

    // 基准点已剔除: 6 行料单 -> 5 个元件
    assert_eq!(parts.len(), 5);

    let result = JobOrchestrator::new()
        .run(parts, &feeders, &mut machine)
        .unwrap();

    // 守恒: 每个元件恰好出现一次
    assert_eq!(result.job.len(), 5);

    // 吸嘴 5 的元件先贴 (R1,R2 同飞达聚集, C1 随后),
    // 之后更换吸嘴 7 贴 U1, 无匹配的 X1 跳过垫底
    let refs: Vec<&str> = result.job.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(refs, vec!["R1", "R2", "C1", "U1", "X1"]);

    // 贴装元件全部在跳过元件之前
    let first_skip = result.job.iter().position(|p| p.skip).unwrap();
    assert!(result.job[..first_skip].iter().all(|p| !p.skip));
    assert!(result.job[first_skip..].iter().all(|p| p.skip));

    // 恰好一次吸嘴更换 (5 -> 7)
    assert_eq!(result.nozzle_changes.len(), 1);
    assert_eq!(result.nozzle_changes[0].component, 3);

    export_job(&output_path, &result.job, &result.nozzle_changes, &machine).unwrap();
    let output = fs::read_to_string(&output_path).unwrap();

    assert!(output.starts_with("NEODEN,YY1,P&P FILE"));
    assert_eq!(
        output
            .lines()
            .filter(|l| l.starts_with("NozzleChange"))
            .count(),
        4
    );
    // X1 行: 兜底飞达 0 号, skip=1
    assert!(output.contains("X1,Unknown,NoFootprint,5,5,0,1,0,100,0,0,3,1"));
}

// ==========================================
// 配置错误测试
// ==========================================

#[test]
fn test_unavailable_nozzle_aborts_before_scheduling() {
    let dir = TempDir::new().unwrap();
    let (feeders_path, _, parts_path) = write_inputs(&dir);
    // 吸嘴 7 既不在头上也不在更换站中
    let machine_path = dir.path().join("machine_bad.json");
    fs::write(&machine_path, r#"{"head": [5, 5], "changer": [0]}"#).unwrap();

    let feeders = load_feeders(&feeders_path).unwrap();
    let mut machine = load_config(&machine_path).unwrap();
    let parts = load_parts(&parts_path, &machine).unwrap();

    let err = JobOrchestrator::new()
        .run(parts, &feeders, &mut machine)
        .unwrap_err();
    assert_eq!(err, ScheduleError::NozzleUnavailable { nozzle: 7 });
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_full_changer_aborts_before_scheduling() {
    let dir = TempDir::new().unwrap();
    let (feeders_path, _, parts_path) = write_inputs(&dir);
    let machine_path = dir.path().join("machine_full.json");
    fs::write(&machine_path, r#"{"head": [5, 7], "changer": [3, 2]}"#).unwrap();

    let feeders = load_feeders(&feeders_path).unwrap();
    let mut machine = load_config(&machine_path).unwrap();
    let parts = load_parts(&parts_path, &machine).unwrap();

    let err = JobOrchestrator::new()
        .run(parts, &feeders, &mut machine)
        .unwrap_err();
    assert_eq!(err, ScheduleError::NoEmptyChangerSlot);
    assert_eq!(err.exit_code(), 5);
}
