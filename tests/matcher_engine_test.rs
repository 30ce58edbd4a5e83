// ==========================================
// FeederMatcher 引擎集成测试
// ==========================================
// 测试目标: 验证飞达匹配规则
// 覆盖范围: 大小写/空白容忍、首个匹配胜出、兜底飞达
// ==========================================

use smt_pnp_aps::domain::{Feeder, Part};
use smt_pnp_aps::engine::FeederMatcher;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的飞达
fn create_test_feeder(id: u32, nozzle: u32, value: &str, footprint: &str) -> Feeder {
    Feeder {
        id,
        nozzle,
        value: value.to_string(),
        footprint: footprint.to_string(),
        ..Feeder::default()
    }
}

/// 创建测试用的元件
fn create_test_part(reference: &str, value: &str, footprint: &str) -> Part {
    Part::new(reference, value, footprint, 0.0, 0.0, 0.0)
}

/// 测试用飞达库 (末尾含兜底飞达, 与加载器行为一致)
fn create_test_library() -> Vec<Feeder> {
    vec![
        create_test_feeder(1, 2, "10k", "R_0603_1608Metric"),
        create_test_feeder(2, 2, "100nF", "C_0603_1608Metric"),
        create_test_feeder(3, 4, "SN74HC595", "SOIC-16"),
        Feeder::fallback(),
    ]
}

// ==========================================
// 匹配规则测试
// ==========================================

#[test]
fn test_exact_match_binds_feeder() {
    let feeders = create_test_library();
    let mut parts = vec![create_test_part("R1", "10k", "R_0603_1608Metric")];

    FeederMatcher::new().assign(&mut parts, &feeders);

    assert!(!parts[0].skip);
    assert_eq!(parts[0].feeder_id(), 1);
}

#[test]
fn test_match_is_case_insensitive_and_trims_whitespace() {
    let feeders = create_test_library();
    let mut parts = vec![
        create_test_part("R1", "10K", "r_0603_1608metric"),
        create_test_part("C1", "  100nF  ", " C_0603_1608Metric "),
    ];

    FeederMatcher::new().assign(&mut parts, &feeders);

    assert!(!parts[0].skip);
    assert_eq!(parts[0].feeder_id(), 1);
    assert!(!parts[1].skip);
    assert_eq!(parts[1].feeder_id(), 2);
}

#[test]
fn test_first_matching_feeder_wins() {
    let mut feeders = create_test_library();
    // 在库首插入同值同封装的飞达, 应优先命中
    feeders.insert(0, create_test_feeder(9, 7, "10k", "R_0603_1608Metric"));
    let mut parts = vec![create_test_part("R1", "10k", "R_0603_1608Metric")];

    FeederMatcher::new().assign(&mut parts, &feeders);

    assert_eq!(parts[0].feeder_id(), 9);
}

#[test]
fn test_value_match_alone_is_not_enough() {
    let feeders = create_test_library();
    // 值相同但封装不同 -> 无匹配
    let mut parts = vec![create_test_part("R1", "10k", "R_0805_2012Metric")];

    FeederMatcher::new().assign(&mut parts, &feeders);

    assert!(parts[0].skip);
    assert_eq!(parts[0].feeder_id(), 0);
}

// ==========================================
// 优雅降级测试
// ==========================================

#[test]
fn test_unmatched_part_binds_fallback_and_skips() {
    let feeders = create_test_library();
    let mut parts = vec![create_test_part("U9", "ATmega328P", "TQFP-32")];

    FeederMatcher::new().assign(&mut parts, &feeders);

    assert!(parts[0].skip);
    let feeder = parts[0].feeder.as_ref().unwrap();
    assert_eq!(feeder.id, 0);
    assert_eq!(feeder.nozzle, 99);
}

#[test]
fn test_skip_flag_matches_feeder_presence_exactly() {
    let feeders = create_test_library();
    let mut parts = vec![
        create_test_part("R1", "10k", "R_0603_1608Metric"),
        create_test_part("X1", "NoSuchPart", "NoSuchFootprint"),
        create_test_part("U1", "SN74HC595", "SOIC-16"),
    ];

    FeederMatcher::new().assign(&mut parts, &feeders);

    let skipped: Vec<bool> = parts.iter().map(|p| p.skip).collect();
    assert_eq!(skipped, vec![false, true, false]);
}
