use chrono::Month;

use shadow_sim::angles::{compute, representative_day_of_year, solar_declination};
use shadow_sim::sampler::{daylight_window, sample_day};
use shadow_sim::types::HourGrid;

fn main() {
    let latitude = -8.06;
    let height = 30.0;
    let hour = 9.5;

    let n = representative_day_of_year(2026, Month::June);

    println!("=== Shadow Calculation Example ===");
    println!("Location: Recife, PE ({:.2}°S)", -latitude);
    println!("Structure height: {:.1} m", height);
    println!("Day of year: {} (June 21)", n);
    println!("Declination: {:.2}°", solar_declination(n));
    println!("Daylight: {:?}", daylight_window(latitude, n));
    println!();

    match compute(latitude, height, n, hour) {
        Some(pos) => {
            println!("--- At {:.2} h ---", hour);
            println!("Solar azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.solar.azimuth);
            println!("Solar altitude: {:.2}°", pos.solar.altitude);
            println!("Shadow length: {:.2} m", pos.shadow.length);
            println!("Shadow direction: {:.1}°", pos.shadow.azimuth);
        }
        None => println!("Sun below the horizon at {:.2} h", hour),
    }
    println!();

    let sample = sample_day(latitude, height, n, &HourGrid::default());
    println!("--- Day sample ({} entries) ---", sample.len());
    for e in sample.entries.iter().step_by(4) {
        println!(
            "{}  shadow {:>8.2} m  dir {:>5.1}°  sun alt {:>5.1}°",
            e.label, e.shadow_length, e.shadow_azimuth, e.solar_altitude
        );
    }
    if let Some(shortest) = sample.shortest_shadow() {
        println!("Shortest shadow: {:.2} m at {}", shortest.shadow_length, shortest.label);
    }
}
