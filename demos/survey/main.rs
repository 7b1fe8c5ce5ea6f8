// 24 hour coverage survey of a nominal GPS constellation, watched from
// a launch site. One CSV record per 10 minute step, in the layout of
// the original tracking campaign logs: Time, Visible, Uncovered,
// Warnings. Run with RUST_LOG=debug for per-epoch detail.
use gnss_shade::prelude::{
    downtime_ratio, Config, Constellation, Ephemeris, Epoch, Observer, Survey, Unit, SV,
};

// 6 planes spaced 60° in ascending node, 4 slots per plane, the
// classical 55° GPS inclination at semi-synchronous altitude.
fn nominal_constellation(epoch: Epoch) -> Vec<Ephemeris> {
    let mut fleet = Vec::with_capacity(24);
    for plane in 0..6_u8 {
        for slot in 0..4_u8 {
            fleet.push(Ephemeris {
                sv: SV::new(Constellation::GPS, plane * 4 + slot + 1),
                epoch,
                semi_major_axis_m: 26_560.0E3,
                inclination_rad: 55.0_f64.to_radians(),
                raan_rad: (plane as f64 * 60.0).to_radians(),
                // stagger the slots between planes for even ground
                // coverage
                arg_latitude_rad: (slot as f64 * 90.0 + plane as f64 * 15.0).to_radians(),
            });
        }
    }
    fleet
}

pub fn main() {
    env_logger::init();

    let t0 = Epoch::from_gregorian_utc_at_midnight(2019, 9, 23);

    // launch site: Vancouver area
    let observer = Observer::new(49.260606, -123.249, 87.0, t0);

    let survey = Survey::new(Config::default(), observer, nominal_constellation(t0))
        .unwrap_or_else(|e| panic!("invalid survey setup: {}", e));

    let solutions = survey
        .run(t0, t0 + 24.0 * Unit::Hour, 10.0 * Unit::Minute)
        .unwrap_or_else(|e| panic!("survey failed: {}", e));

    println!("Time,Visible,Uncovered,Warnings");
    for solution in &solutions {
        println!(
            "{},{},{},{}",
            solution.epoch, solution.visible, solution.uncovered, solution.level
        );
    }

    println!("{:.2}% downtime.", downtime_ratio(&solutions) * 100.0);
}
