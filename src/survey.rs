//! Survey driver: time-stepped coverage resolution
use std::collections::{hash_map::Entry, HashMap};

use log::debug;

use crate::prelude::{
    worst_case_coverage, AngularCap, Config, CoverageLevel, CoverageSolution, Duration, Epoch,
    Error, Observer, PositionSource, TimeSeries, Vector3,
};

/// [Survey] walks a simulated period and resolves, for each [Epoch],
/// how many satellites the observer has in sight and how many of those
/// a single obstruction could block at once, whichever way it points.
pub struct Survey<S: PositionSource> {
    cfg: Config,
    observer: Observer,
    satellites: Vec<S>,
    cap: AngularCap,
}

impl<S: PositionSource> Survey<S> {
    /// Builds a [Survey] over `satellites`, watched by `observer`.
    /// Fails when the configured obstruction does not subtend a valid
    /// cap.
    pub fn new(cfg: Config, observer: Observer, satellites: Vec<S>) -> Result<Self, Error> {
        let cap = cfg.obstruction.cap()?;
        Ok(Self {
            cfg,
            observer,
            satellites,
            cap,
        })
    }

    /// [AngularCap] subtended by the configured obstruction.
    pub fn cap(&self) -> &AngularCap {
        &self.cap
    }

    /// Direction set at `epoch`: one unit line-of-sight vector per
    /// satellite above the elevation mask.
    pub fn directions_at(&self, epoch: Epoch) -> Result<Vec<Vector3<f64>>, Error> {
        let positions: Vec<_> = self
            .satellites
            .iter()
            .map(|satellite| satellite.position_at(epoch))
            .collect();
        self.observer
            .sky_directions(epoch, &positions, self.cfg.min_elevation_deg)
    }

    /// Resolves one [CoverageSolution] at `epoch`: propagate, filter
    /// through the elevation mask, optimize the cap orientation,
    /// classify.
    pub fn solution_at(&self, epoch: Epoch) -> Result<CoverageSolution, Error> {
        let directions = self.directions_at(epoch)?;
        self.resolve(epoch, &directions)
    }

    /// Same resolution, with the direction set coming from a
    /// caller-owned [DirectionCache]: repeated requests for the same
    /// [Epoch] propagate only once.
    pub fn solution_with_cache(
        &self,
        cache: &mut DirectionCache,
        epoch: Epoch,
    ) -> Result<CoverageSolution, Error> {
        let directions = cache.directions(self, epoch)?;
        self.resolve(epoch, directions)
    }

    /// Runs the whole survey, one [CoverageSolution] per `step` from
    /// `start` to `end` inclusive.
    pub fn run(
        &self,
        start: Epoch,
        end: Epoch,
        step: Duration,
    ) -> Result<Vec<CoverageSolution>, Error> {
        TimeSeries::inclusive(start, end, step)
            .map(|epoch| self.solution_at(epoch))
            .collect()
    }

    fn resolve(
        &self,
        epoch: Epoch,
        directions: &[Vector3<f64>],
    ) -> Result<CoverageSolution, Error> {
        let coverage = worst_case_coverage(directions, &self.cap)?;
        let uncovered = coverage.uncovered();
        let level = CoverageLevel::classify(uncovered, &self.cfg.thresholds);

        debug!(
            "{}: {} in sight, {} guaranteed unobstructed ({:?})",
            epoch, coverage.visible, uncovered, level
        );

        Ok(CoverageSolution {
            epoch,
            visible: coverage.visible,
            max_coverable: coverage.max_coverable,
            uncovered,
            axis: coverage.axis,
            level,
        })
    }
}

/// Fraction of surveyed epochs classified [CoverageLevel::Outage].
pub fn downtime_ratio(solutions: &[CoverageSolution]) -> f64 {
    if solutions.is_empty() {
        return 0.0;
    }
    let outages = solutions
        .iter()
        .filter(|solution| solution.level == CoverageLevel::Outage)
        .count();
    outages as f64 / solutions.len() as f64
}

/// Caller-owned [Epoch] to direction-set memoization, for workflows
/// that revisit the same epochs (several obstruction geometries over
/// one period, say). The geometry layer itself never caches.
#[derive(Default)]
pub struct DirectionCache {
    inner: HashMap<Epoch, Vec<Vector3<f64>>>,
}

impl DirectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized epochs
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Direction set at `epoch`, propagated through `survey` on first
    /// request only.
    pub fn directions<S: PositionSource>(
        &mut self,
        survey: &Survey<S>,
        epoch: Epoch,
    ) -> Result<&[Vector3<f64>], Error> {
        match self.inner.entry(epoch) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_slice()),
            Entry::Vacant(entry) => Ok(entry.insert(survey.directions_at(epoch)?).as_slice()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{downtime_ratio, DirectionCache, Survey};
    use crate::prelude::{
        Config, CoverageLevel, Epoch, Observer, PositionSource, Unit, Vector3,
    };
    use std::str::FromStr;

    /// Pinned target, for direction sets known in advance
    struct Fixed(Vector3<f64>);

    impl PositionSource for Fixed {
        fn position_at(&self, _: Epoch) -> Vector3<f64> {
            self.0
        }
    }

    fn start_epoch() -> Epoch {
        Epoch::from_str("2019-09-23T00:00:00 UTC").unwrap()
    }

    /// Pins targets along given local sky directions (elevation,
    /// azimuth in degrees) of the observer at `t0`.
    fn pinned_sky(observer: &Observer, t0: Epoch, sky: &[(f64, f64)]) -> Vec<Fixed> {
        let position = observer.position_at(t0);
        let zenith = position / position.norm();

        // local frame completing the zenith
        let east = Vector3::new(-zenith[1], zenith[0], 0.0).normalize();
        let north = zenith.cross(&east);

        sky.iter()
            .map(|(elevation_deg, azimuth_deg)| {
                let (elevation, azimuth) =
                    (elevation_deg.to_radians(), azimuth_deg.to_radians());
                let direction = zenith * elevation.sin()
                    + (east * azimuth.cos() + north * azimuth.sin()) * elevation.cos();
                Fixed(position + direction * 2.0E7)
            })
            .collect()
    }

    fn test_survey(sky: &[(f64, f64)]) -> (Survey<Fixed>, Epoch) {
        let t0 = start_epoch();
        let observer = Observer::new(30.0, -120.0, 0.0, t0);
        let satellites = pinned_sky(&observer, t0, sky);
        let survey = Survey::new(Config::default(), observer, satellites).unwrap();
        (survey, t0)
    }

    #[test]
    fn clustered_sky_resolves_low_coverage() {
        // three satellites within 1° of zenith (one cap can take all
        // three), four spread 75° apart (unreachable two at a time by
        // the ~20° default cap), one below the horizon
        let (survey, t0) = test_survey(&[
            (89.0, 0.0),
            (89.0, 120.0),
            (89.0, 240.0),
            (30.0, 0.0),
            (30.0, 90.0),
            (30.0, 180.0),
            (30.0, 270.0),
            (-10.0, 45.0),
        ]);

        let solution = survey.solution_at(t0).unwrap();

        assert_eq!(solution.visible, 7);
        assert_eq!(solution.max_coverable, 3);
        assert_eq!(solution.uncovered, 4);
        assert_eq!(solution.level, CoverageLevel::Low);
    }

    #[test]
    fn empty_sky_is_an_outage() {
        let (survey, t0) = test_survey(&[(-20.0, 0.0), (-45.0, 90.0)]);

        let solution = survey.solution_at(t0).unwrap();

        assert_eq!(solution.visible, 0);
        assert_eq!(solution.uncovered, 0);
        assert_eq!(solution.level, CoverageLevel::Outage);
        assert!(solution.axis.is_none());
    }

    #[test]
    fn run_covers_the_period_inclusive() {
        let (survey, t0) = test_survey(&[(89.0, 0.0), (60.0, 90.0)]);

        let end = t0 + 20.0 * Unit::Minute;
        let solutions = survey.run(t0, end, 10.0 * Unit::Minute).unwrap();

        assert_eq!(solutions.len(), 3);
        assert_eq!(solutions[0].epoch, t0);
        assert_eq!(solutions[2].epoch, end);
    }

    #[test]
    fn cached_resolution_matches_direct() {
        let (survey, t0) = test_survey(&[
            (89.0, 0.0),
            (89.0, 120.0),
            (30.0, 0.0),
            (30.0, 180.0),
        ]);

        let mut cache = DirectionCache::new();
        let first = survey.solution_with_cache(&mut cache, t0).unwrap();
        let second = survey.solution_with_cache(&mut cache, t0).unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(first, second);
        assert_eq!(first, survey.solution_at(t0).unwrap());
    }

    #[test]
    fn downtime_counts_outages_only() {
        let (survey, t0) = test_survey(&[(89.0, 0.0), (89.0, 120.0)]);

        // two satellites, both coverable at once: outage at every epoch
        let solutions = survey.run(t0, t0 + 30.0 * Unit::Minute, 10.0 * Unit::Minute).unwrap();
        assert_eq!(downtime_ratio(&solutions), 1.0);

        assert_eq!(downtime_ratio(&[]), 0.0);
    }
}
