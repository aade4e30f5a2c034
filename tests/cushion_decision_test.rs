// ==========================================
// 缓冲吸收与分配决策集成测试
// ==========================================
// 测试目标: plan_assignment 的缓冲优先求值与资格过滤组合
// 规则: 缓冲先求值, 命中账本作用于求值结果
// ==========================================


use lead_rotation_aps::{logging, CushionState, Lead, RotationApi, RotationError};
use test_helpers::*;

fn cushion(remaining: u32) -> CushionState {
    CushionState {
        damping: 1,
        remaining,
    }
}

#[test]
fn test_plain_assignment_no_cushion() {
    logging::init_test();

    let snapshot = create_test_snapshot(&["A", "B"]);
    let api = RotationApi::new(&snapshot, test_date()).unwrap();

    let lead = Lead::new("L1", Some(100), vec![], None);
    let decision = api.plan_assignment(&lead).unwrap();
    assert_eq!(decision.rep_id, "A");
    assert!(decision.absorbed_cushions.is_empty());
}

#[test]
fn test_cushion_absorbs_turn() {
    let mut snapshot = create_test_snapshot(&["A", "B", "C"]);
    snapshot.cushions.insert("A".to_string(), cushion(1));

    let api = RotationApi::new(&snapshot, test_date()).unwrap();
    let lead = Lead::new("L1", Some(100), vec![], None);
    let decision = api.plan_assignment(&lead).unwrap();

    // A 的轮次被吸收, 线索落到 B; 吸收结果随决策返回
    assert_eq!(decision.rep_id, "B");
    assert_eq!(decision.absorbed_cushions, vec!["A"]);
}

#[test]
fn test_cushion_exhaustion_resumes_scoring() {
    let mut snapshot = create_test_snapshot(&["A", "B"]);
    snapshot.cushions.insert("A".to_string(), cushion(2));

    let api = RotationApi::new(&snapshot, test_date()).unwrap();
    let lead = Lead::new("L1", Some(100), vec![], None);
    let decision = api.plan_assignment(&lead).unwrap();

    // 顺位第一个非吸收轮次就是决策结果: A 被吸收一次后轮到 B
    assert_eq!(decision.absorbed_cushions, vec!["A"]);
    assert_eq!(decision.rep_id, "B");

    // 全员带缓冲时逐轮递减, 直到某个代表余量耗尽
    let mut all_cushioned = create_test_snapshot(&["A", "B"]);
    all_cushioned.cushions.insert("A".to_string(), cushion(1));
    all_cushioned.cushions.insert("B".to_string(), cushion(1));
    let api = RotationApi::new(&all_cushioned, test_date()).unwrap();
    let decision = api.plan_assignment(&lead).unwrap();
    assert_eq!(decision.absorbed_cushions, vec!["A", "B"]);
    assert_eq!(decision.rep_id, "A");

    // 余量用尽的缓冲不再吸收
    let mut spent = create_test_snapshot(&["A", "B"]);
    spent.cushions.insert("A".to_string(), cushion(0));
    let api = RotationApi::new(&spent, test_date()).unwrap();
    let decision = api.plan_assignment(&lead).unwrap();
    assert_eq!(decision.rep_id, "A");
    assert!(decision.absorbed_cushions.is_empty());
}

#[test]
fn test_cushion_evaluated_before_hit_accounting() {
    // A 净 -1 (标记换单) 但带缓冲: 缓冲先求值, 吸收后落到 B
    let mut snapshot = create_test_snapshot(&["A", "B"]);
    append_lead(&mut snapshot, "A", "L0", Some(100));
    snapshot
        .replacements
        .mark("L0", lead_rotation_aps::Lane::Sub, "A", "ACC-1", test_now())
        .unwrap();
    snapshot.cushions.insert("A".to_string(), cushion(1));

    let api = RotationApi::new(&snapshot, test_date()).unwrap();
    let lead = Lead::new("L1", Some(100), vec![], None);
    let decision = api.plan_assignment(&lead).unwrap();
    assert_eq!(decision.absorbed_cushions, vec!["A"]);
    assert_eq!(decision.rep_id, "B");
}

#[test]
fn test_assignment_respects_eligibility() {
    let mut snapshot = create_test_snapshot(&["A", "B"]);
    // A 套数上限 200, 无法承接 500 套线索
    if let Some(rep) = snapshot.reps.iter_mut().find(|r| r.id == "A") {
        rep.max_units = Some(200);
    }

    let api = RotationApi::new(&snapshot, test_date()).unwrap();
    let lead = Lead::new("L1", Some(500), vec![], None);
    let decision = api.plan_assignment(&lead).unwrap();
    assert_eq!(decision.rep_id, "B");
}

#[test]
fn test_assignment_closed_lane() {
    let mut snapshot = create_test_snapshot(&["A"]);
    if let Some(rep) = snapshot.reps.iter_mut().find(|r| r.id == "A") {
        rep.can_handle_oversize = false;
    }

    let api = RotationApi::new(&snapshot, test_date()).unwrap();
    let lead = Lead::new("L1", Some(2000), vec![], None);
    let err = api.plan_assignment(&lead).unwrap_err();
    assert!(matches!(err, RotationError::LaneClosed { .. }));
}
