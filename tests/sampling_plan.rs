//! Sampling plan properties.

use framestrip::SamplingPlan;

#[test]
fn hundred_frame_video_twenty_samples() {
    let plan = SamplingPlan::evenly_spaced(100, 20);
    let expected: Vec<u64> = vec![
        0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95,
    ];
    assert_eq!(plan.indices(), expected.as_slice());
}

#[test]
fn plan_always_yields_requested_count() {
    for total in [20u64, 21, 50, 99, 100, 101, 10_000] {
        let plan = SamplingPlan::evenly_spaced(total, 20);
        assert_eq!(
            plan.indices().len(),
            20,
            "plan for {total} frames should hold 20 indices",
        );
    }
}

#[test]
fn indices_stay_in_range_and_ordered() {
    for total in [1u64, 7, 19, 20, 33, 1000] {
        for count in [1u64, 2, 19, 20, 21] {
            let plan = SamplingPlan::evenly_spaced(total, count);
            assert!(
                plan.indices().iter().all(|&i| i < total),
                "index out of range for total={total} count={count}",
            );
            assert!(
                plan.indices().windows(2).all(|pair| pair[0] <= pair[1]),
                "indices must be non-decreasing for total={total} count={count}",
            );
        }
    }
}

#[test]
fn single_frame_request_samples_index_zero() {
    let plan = SamplingPlan::evenly_spaced(1000, 1);
    assert_eq!(plan.indices(), &[0]);
    assert_eq!(plan.requested(), 1);
}

#[test]
fn short_video_collapses_to_distinct_positions() {
    // 5 frames, 20 requested: every stream position appears in the plan, so
    // a scan captures at most 5 distinct frames.
    let plan = SamplingPlan::evenly_spaced(5, 20);
    assert_eq!(plan.indices().len(), 20);

    let captured: Vec<u64> = (0..5).filter(|&p| plan.contains(p)).collect();
    assert_eq!(captured, [0, 1, 2, 3, 4]);
}

#[test]
fn equal_total_and_count_is_the_identity_plan() {
    let plan = SamplingPlan::evenly_spaced(20, 20);
    let expected: Vec<u64> = (0..20).collect();
    assert_eq!(plan.indices(), expected.as_slice());
}

#[test]
fn last_index_never_reaches_total() {
    for total in [20u64, 100, 12345] {
        let plan = SamplingPlan::evenly_spaced(total, 20);
        assert!(plan.last_index().unwrap() < total);
    }
}
