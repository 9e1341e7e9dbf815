use irrigation_model::{CropKind, CropPlanting, CURRENT_AVERAGE_EFFICIENCY};

const ALL_KINDS: [CropKind; 5] = [
    CropKind::Corn,
    CropKind::Sorghum,
    CropKind::Wheat,
    CropKind::Cotton,
    CropKind::Peanuts,
];

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= expected.abs() * 1e-12,
        "{} != {}",
        actual,
        expected
    );
}

#[test]
fn test_water_usage_formulas() {
    assert_close(
        CropPlanting::new(CropKind::Corn, 1000.0, 100.0).water_usage(),
        100.0 * 56.0 * 73.4398 * CURRENT_AVERAGE_EFFICIENCY,
    );
    assert_close(
        CropPlanting::new(CropKind::Sorghum, 1000.0, 100.0).water_usage(),
        100.0 * 50.0 * 143.1813 * CURRENT_AVERAGE_EFFICIENCY,
    );
    assert_close(
        CropPlanting::new(CropKind::Wheat, 1000.0, 100.0).water_usage(),
        100.0 * 60.0 * 268.7951 * CURRENT_AVERAGE_EFFICIENCY,
    );
    assert_close(
        CropPlanting::new(CropKind::Cotton, 1000.0, 100.0).water_usage(),
        1000.0 * 100.0 * 653.0333 * CURRENT_AVERAGE_EFFICIENCY,
    );
    assert_close(
        CropPlanting::new(CropKind::Peanuts, 1000.0, 100.0).water_usage(),
        100.0 * 127.8593 * CURRENT_AVERAGE_EFFICIENCY,
    );
}

#[test]
fn test_water_usage_corn_scenario() {
    // 100 bushels of corn: 100 x 56 x 73.4398 x 0.6285 gallons.
    let usage = CropPlanting::new(CropKind::Corn, 1000.0, 100.0).water_usage();
    assert!((usage - 258_478.72).abs() < 1.0, "usage = {}", usage);
}

#[test]
fn test_lbs_per_bushel_only_for_bushel_crops() {
    assert_eq!(CropKind::Corn.lbs_per_bushel(), Some(56.0));
    assert_eq!(CropKind::Sorghum.lbs_per_bushel(), Some(50.0));
    assert_eq!(CropKind::Wheat.lbs_per_bushel(), Some(60.0));
    assert_eq!(CropKind::Cotton.lbs_per_bushel(), None);
    assert_eq!(CropKind::Peanuts.lbs_per_bushel(), None);
}

#[test]
fn test_bushel_crop_usage_tracks_lbs_per_bushel() {
    // The conversion constant must come from the one on CropKind, so the
    // two can never drift apart.
    for kind in [CropKind::Corn, CropKind::Sorghum, CropKind::Wheat] {
        let usage = CropPlanting::new(kind, 0.0, 75.0).water_usage();
        let expected = 75.0 * kind.lbs_per_bushel().unwrap() * kind.gallons_per_lb();
        assert_close(usage, expected);
    }
}

#[test]
fn test_water_usage_non_negative() {
    for kind in ALL_KINDS {
        assert!(CropPlanting::new(kind, 0.0, 0.0).water_usage() >= 0.0);
        assert!(CropPlanting::new(kind, 500.0, 2500.0).water_usage() >= 0.0);
    }
}

#[test]
fn test_water_usage_linear_in_yield() {
    for kind in ALL_KINDS {
        let single = CropPlanting::new(kind, 300.0, 1200.0).water_usage();
        let double = CropPlanting::new(kind, 300.0, 2400.0).water_usage();
        assert_close(double, single * 2.0);
    }
}
