use shadow_sim::angles::compute;
use shadow_sim::sampler::*;
use shadow_sim::types::*;
use shadow_sim::Error;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const RECIFE: f64 = -8.06;
const JUNE_21: i32 = 172;

fn fake_result(length: f64) -> PositionResult {
    PositionResult {
        solar: SolarPosition {
            azimuth: 90.0,
            altitude: 0.05,
        },
        shadow: Shadow {
            length,
            azimuth: 270.0,
        },
    }
}

// ── HourGrid ──

#[test]
fn test_default_grid() {
    let grid = HourGrid::default();
    assert_eq!(grid.start_hour, 4.0);
    assert_eq!(grid.end_hour, 20.0);
    assert_eq!(grid.step_hours, 0.25);

    let hours: Vec<f64> = grid.hours().collect();
    assert_eq!(hours.len(), 65);
    assert_eq!(grid.sample_count(), 65);
    assert_eq!(hours[0], 4.0);
    assert_eq!(hours[32], 12.0);
    assert_eq!(*hours.last().unwrap(), 20.0);
}

#[test]
fn test_grid_endpoint_inclusive_for_inexact_step() {
    let grid = HourGrid::new(6.0, 18.0, 0.1).unwrap();
    assert_eq!(grid.sample_count(), 121);
    let last = grid.hours().last().unwrap();
    assert_approx!(last, 18.0, 1e-9);
}

#[test]
fn test_grid_single_point() {
    let grid = HourGrid::new(12.0, 12.0, 1.0).unwrap();
    assert_eq!(grid.hours().collect::<Vec<_>>(), vec![12.0]);
}

#[test]
fn test_grid_rejects_bad_parameters() {
    assert!(matches!(HourGrid::new(4.0, 20.0, 0.0), Err(Error::InvalidHourGrid { .. })));
    assert!(matches!(HourGrid::new(4.0, 20.0, -0.25), Err(Error::InvalidHourGrid { .. })));
    assert!(matches!(HourGrid::new(20.0, 4.0, 0.25), Err(Error::InvalidHourGrid { .. })));
    assert!(matches!(HourGrid::new(4.0, f64::INFINITY, 0.25), Err(Error::InvalidHourGrid { .. })));
}

#[test]
fn test_hand_built_degenerate_grids_are_empty() {
    let zero_step = HourGrid { start_hour: 4.0, end_hour: 20.0, step_hours: 0.0 };
    let negative_step = HourGrid { start_hour: 4.0, end_hour: 20.0, step_hours: -0.25 };
    let reversed = HourGrid { start_hour: 20.0, end_hour: 4.0, step_hours: 0.25 };
    let nan_step = HourGrid { start_hour: 4.0, end_hour: 20.0, step_hours: f64::NAN };
    for grid in [zero_step, negative_step, reversed, nan_step] {
        assert_eq!(grid.sample_count(), 0, "{:?}", grid);
        assert!(sample_day(RECIFE, 30.0, JUNE_21, &grid).is_empty(), "{:?}", grid);
    }
}

// ── Labels ──

#[test]
fn test_hour_labels() {
    assert_eq!(format_hour_label(4.0), "04:00");
    assert_eq!(format_hour_label(6.25), "06:15");
    assert_eq!(format_hour_label(12.5), "12:30");
    assert_eq!(format_hour_label(17.75), "17:45");
    assert_eq!(format_hour_label(9.99), "09:59");
}

// ── sample_day ──

#[test]
fn test_recife_june_day() {
    let sample = sample_day(RECIFE, 30.0, JUNE_21, &HourGrid::default());
    assert_eq!(sample.len(), 47);
    assert_eq!(sample.entries[0].label, "06:15");
    assert_eq!(sample.entries.last().unwrap().label, "17:45");
    assert_eq!(sample.latitude, RECIFE);
    assert_eq!(sample.height, 30.0);
    assert_eq!(sample.day_of_year, JUNE_21);
}

#[test]
fn test_entries_in_ascending_hour_order() {
    let sample = sample_day(RECIFE, 30.0, JUNE_21, &HourGrid::default());
    for w in sample.entries.windows(2) {
        assert!(w[0].hour < w[1].hour);
    }
}

#[test]
fn test_entries_match_compute() {
    let sample = sample_day(RECIFE, 30.0, JUNE_21, &HourGrid::default());
    for e in &sample.entries {
        let pos = compute(RECIFE, 30.0, JUNE_21, e.hour).unwrap();
        assert_eq!(e.shadow_length, pos.shadow.length);
        assert_eq!(e.shadow_azimuth, pos.shadow.azimuth);
        assert_eq!(e.solar_azimuth, pos.solar.azimuth);
        assert_eq!(e.solar_altitude, pos.solar.altitude);
        assert_eq!(e.label, format_hour_label(e.hour));
    }
}

#[test]
fn test_shortest_shadow_at_noon() {
    let sample = sample_day(RECIFE, 30.0, JUNE_21, &HourGrid::default());
    let shortest = sample.shortest_shadow().unwrap();
    assert_eq!(shortest.label, "12:00");
    assert_approx!(shortest.shadow_length, 18.39, 0.01);
}

#[test]
fn test_trajectory_follows_entries() {
    let sample = sample_day(39.8, 5.0, 81, &HourGrid::default());
    let path = sample.trajectory();
    assert_eq!(path.len(), sample.len());
    assert_eq!(path[0], (sample.entries[0].solar_azimuth, sample.entries[0].solar_altitude));
}

#[test]
fn test_polar_night_is_empty() {
    for &(lat, n) in &[(80.0, 355), (-80.0, JUNE_21), (70.0, 355)] {
        let sample = sample_day(lat, 10.0, n, &HourGrid::default());
        assert!(sample.is_empty(), "lat={} day={}", lat, n);
        assert!(sample.shortest_shadow().is_none());
        assert!(sample.trajectory().is_empty());
    }
}

#[test]
fn test_polar_day_samples_whole_grid() {
    let sample = sample_day(80.0, 10.0, JUNE_21, &HourGrid::default());
    assert_eq!(sample.len(), 65);
}

#[test]
fn test_sample_hours_keeps_given_order() {
    let sample = sample_hours(RECIFE, 30.0, JUNE_21, vec![15.0, 9.0, 3.0, 12.0]);
    let labels: Vec<&str> = sample.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["15:00", "09:00", "12:00"]);
}

// ── Astronomic-shadow filter ──

#[test]
fn test_display_bound() {
    assert!(within_display_bound(&fake_result(999.0), 1.0));
    assert!(!within_display_bound(&fake_result(1000.0), 1.0));
    assert!(!within_display_bound(&fake_result(1500.0), 1.0));
    assert!(within_display_bound(&fake_result(1500.0), 2.0));
}

#[test]
fn test_filter_drops_astronomic_shadow_but_calculator_keeps_it() {
    let calc = |hour: f64| {
        if hour == 6.0 {
            Some(fake_result(1500.0))
        } else {
            Some(fake_result(2.0))
        }
    };
    assert_eq!(calc(6.0).unwrap().shadow.length, 1500.0);

    let entries = sample_with(1.0, vec![6.0, 7.0, 8.0], calc);
    let hours: Vec<f64> = entries.iter().map(|e| e.hour).collect();
    assert_eq!(hours, vec![7.0, 8.0]);
}

#[test]
fn test_filter_skips_missing_results() {
    let entries = sample_with(1.0, vec![1.0, 2.0, 3.0], |hour| {
        (hour != 2.0).then(|| fake_result(hour))
    });
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].shadow_length, 3.0);
}

#[test]
fn test_real_results_stay_under_bound() {
    // The horizon threshold caps shadows just below 1000x height.
    for lat in (-85..=85).step_by(5) {
        for n in (1..=366).step_by(30) {
            for q in 0..96 {
                if let Some(pos) = compute(lat as f64, 1.0, n, q as f64 * 0.25) {
                    assert!(within_display_bound(&pos, 1.0), "length={}", pos.shadow.length);
                }
            }
        }
    }
}

// ── Daylight window ──

#[test]
fn test_equinox_twelve_hours() {
    match daylight_window(39.8, 81) {
        DaylightWindow::Daylight { sunrise, sunset } => {
            assert_approx!(sunrise, 6.0, 1e-9);
            assert_approx!(sunset, 18.0, 1e-9);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_recife_june_window_brackets_sample() {
    let window = daylight_window(RECIFE, JUNE_21);
    let DaylightWindow::Daylight { sunrise, sunset } = window else {
        panic!("unexpected {:?}", window);
    };
    assert_approx!(sunrise, 6.235, 0.001);
    assert_approx!(sunset, 17.765, 0.001);

    let sample = sample_day(RECIFE, 30.0, JUNE_21, &HourGrid::default());
    assert!(sample.entries.iter().all(|e| e.hour > sunrise && e.hour < sunset));
}

#[test]
fn test_polar_windows() {
    assert_eq!(daylight_window(80.0, JUNE_21), DaylightWindow::PolarDay);
    assert_eq!(daylight_window(80.0, 355), DaylightWindow::PolarNight);
    assert_eq!(DaylightWindow::PolarDay.day_length(), 24.0);
    assert_eq!(DaylightWindow::PolarNight.day_length(), 0.0);
}

#[test]
fn test_summer_longer_than_winter() {
    let summer = daylight_window(39.8, JUNE_21).day_length();
    let winter = daylight_window(39.8, 355).day_length();
    assert!(summer > 12.0 && winter < 12.0, "summer={} winter={}", summer, winter);
}
