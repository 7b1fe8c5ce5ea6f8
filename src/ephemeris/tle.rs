//! GPS almanac intake from two-line element records
use log::debug;
use thiserror::Error;

use crate::{
    constants::EARTH_GRAVITATION_MU_M3_S2,
    prelude::{Constellation, Ephemeris, Epoch, Unit, SV},
};

/// rev/day to rad/s
const REV_PER_DAY_RAD_S: f64 = 7.27220521664304E-5;

/// TLE intake error
#[derive(Debug, PartialEq, Error)]
pub enum TleError {
    /// A record is not the expected name + two element lines,
    /// or an element line is too short.
    #[error("truncated TLE record")]
    TruncatedRecord,

    /// An element field failed to parse as a number.
    #[error("invalid TLE field \"{0}\"")]
    InvalidField(&'static str),

    /// GPS operational almanacs carry the PRN in the satellite
    /// name line, which is how we form the [SV] identity.
    #[error("satellite name carries no PRN")]
    MissingPrn,

    /// Element epoch fields do not form a valid date.
    #[error("invalid element epoch")]
    InvalidEpoch,
}

fn field(line: &str, range: std::ops::Range<usize>, name: &'static str) -> Result<f64, TleError> {
    line.get(range)
        .ok_or(TleError::TruncatedRecord)?
        .trim()
        .parse::<f64>()
        .map_err(|_| TleError::InvalidField(name))
}

fn prn_from_name(name: &str) -> Result<u8, TleError> {
    let (_, tail) = name.split_once("PRN").ok_or(TleError::MissingPrn)?;
    let digits: String = tail
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().map_err(|_| TleError::MissingPrn)
}

fn epoch_from_fields(year: f64, day_of_year: f64) -> Result<Epoch, TleError> {
    if !(1.0..=366.999).contains(&day_of_year) {
        return Err(TleError::InvalidEpoch);
    }
    // two-digit years in GPS almanacs are all 20xx
    let jan_1st = Epoch::maybe_from_gregorian_utc(2000 + year as i32, 1, 1, 0, 0, 0, 0)
        .map_err(|_| TleError::InvalidEpoch)?;
    Ok(jan_1st + (day_of_year - 1.0) * Unit::Day)
}

impl Ephemeris {
    /// Parses one almanac record: satellite name line plus the two
    /// element lines. Eccentricity is dropped (circular model) and the
    /// argument of latitude is taken as argument of perigee plus mean
    /// anomaly, which is exact for circular orbits and close enough for
    /// the near-circular GPS case.
    pub fn from_tle(name: &str, line1: &str, line2: &str) -> Result<Self, TleError> {
        let prn = prn_from_name(name)?;

        let year = field(line1, 18..20, "epoch year")?;
        let day_of_year = field(line1, 20..32, "epoch day")?;
        let epoch = epoch_from_fields(year, day_of_year)?;

        let inclination_deg = field(line2, 8..16, "inclination")?;
        let raan_deg = field(line2, 17..25, "ascending node")?;
        let arg_perigee_deg = field(line2, 34..42, "argument of perigee")?;
        let mean_anomaly_deg = field(line2, 43..51, "mean anomaly")?;
        let mean_motion_rev_day = field(line2, 52..63, "mean motion")?;

        let n = mean_motion_rev_day * REV_PER_DAY_RAD_S;
        let semi_major_axis_m = (EARTH_GRAVITATION_MU_M3_S2 / (n * n)).cbrt();

        let ephemeris = Self {
            sv: SV::new(Constellation::GPS, prn),
            epoch,
            semi_major_axis_m,
            inclination_rad: inclination_deg.to_radians(),
            raan_rad: raan_deg.to_radians(),
            arg_latitude_rad: (arg_perigee_deg + mean_anomaly_deg).to_radians(),
        };

        debug!(
            "{}: a = {:.1} km, i = {:.2}°, elements of {}",
            ephemeris.sv,
            semi_major_axis_m / 1.0E3,
            inclination_deg,
            epoch
        );

        Ok(ephemeris)
    }
}

/// Parses a whole almanac file (`gps-ops.txt` layout): records of three
/// lines each, blank lines ignored. Fails on the first malformed record
/// rather than skipping it silently.
pub fn parse_almanac(content: &str) -> Result<Vec<Ephemeris>, TleError> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() % 3 != 0 {
        return Err(TleError::TruncatedRecord);
    }

    lines
        .chunks_exact(3)
        .map(|record| Ephemeris::from_tle(record[0], record[1], record[2]))
        .collect()
}
