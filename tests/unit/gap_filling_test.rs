//! Unit tests for samples recorded between position fixes.

use crate::common::{activity, count_elements, fix, gap, texts_at};
use tcxport::export::export_tcx;
use tcxport::model::{Event, SampleKind};

fn export(points: Vec<tcxport::model::Point>) -> String {
    let event = Event::new("Gaps", vec![activity(points)]);
    export_tcx(&event).unwrap().into_string()
}

#[test]
fn test_heart_rate_before_fix_lands_on_fix() {
    let xml = export(vec![
        gap(0).with_sample(SampleKind::HeartRate, 150.0),
        fix(1).with_sample(SampleKind::Altitude, 100.0),
    ]);

    assert_eq!(count_elements(&xml, "Trackpoint"), 1);
    assert_eq!(texts_at(&xml, "Trackpoint/AltitudeMeters"), vec!["100"]);
    assert_eq!(texts_at(&xml, "Trackpoint/HeartRateBpm/Value"), vec!["150"]);
}

#[test]
fn test_first_carried_value_wins() {
    let xml = export(vec![
        gap(0).with_sample(SampleKind::HeartRate, 150.0),
        gap(1).with_sample(SampleKind::HeartRate, 160.0),
        fix(2),
    ]);

    assert_eq!(texts_at(&xml, "HeartRateBpm/Value"), vec!["150"]);
}

#[test]
fn test_kinds_merge_across_gap_points() {
    let xml = export(vec![
        gap(0).with_sample(SampleKind::HeartRate, 150.0),
        gap(1).with_sample(SampleKind::Cadence, 170.0),
        gap(2).with_sample(SampleKind::Speed, 2.75),
        fix(3),
    ]);

    assert_eq!(texts_at(&xml, "HeartRateBpm/Value"), vec!["150"]);
    assert_eq!(texts_at(&xml, "Trackpoint/Cadence"), vec!["85"]);
    assert_eq!(texts_at(&xml, "TPX/Speed"), vec!["2.75"]);
}

#[test]
fn test_fix_keeps_its_own_value() {
    let xml = export(vec![
        gap(0).with_sample(SampleKind::HeartRate, 150.0),
        fix(1).with_sample(SampleKind::HeartRate, 142.0),
    ]);

    assert_eq!(texts_at(&xml, "HeartRateBpm/Value"), vec!["142"]);
}

#[test]
fn test_carry_applies_to_next_fix_only() {
    let xml = export(vec![
        gap(0).with_sample(SampleKind::HeartRate, 150.0),
        fix(1),
        fix(2),
        gap(3).with_sample(SampleKind::HeartRate, 155.0),
        fix(4),
    ]);

    assert_eq!(count_elements(&xml, "Trackpoint"), 3);
    assert_eq!(texts_at(&xml, "HeartRateBpm/Value"), vec!["150", "155"]);
}

#[test]
fn test_trailing_gap_is_dropped() {
    let xml = export(vec![
        fix(0),
        gap(1).with_sample(SampleKind::HeartRate, 150.0),
    ]);

    assert_eq!(count_elements(&xml, "Trackpoint"), 1);
    assert_eq!(count_elements(&xml, "HeartRateBpm"), 0);
}

#[test]
fn test_activity_without_any_fix_has_empty_track() {
    let xml = export(vec![gap(0), gap(1)]);

    assert_eq!(count_elements(&xml, "Track"), 1);
    assert_eq!(count_elements(&xml, "Trackpoint"), 0);
    assert_eq!(count_elements(&xml, "Lap"), 1);
}
