use crate::chemistry::ElementRecord;
use glam::Vec2;
use std::f32::consts::TAU;

// Geometry in view units; the panel scales the whole model to fit.
pub const VIEW_SIZE: f32 = 600.0;
pub const BASE_RADIUS: f32 = 40.0;
pub const SHELL_GAP: f32 = 25.0;
pub const NUCLEUS_RADIUS: f32 = 18.0;
pub const ELECTRON_RADIUS: f32 = 4.0;

const NUCLEUS_PULSE: f32 = 2.0;
const NUCLEUS_PULSE_SECS: f32 = 4.0;

/// One electron shell at a given instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub radius: f32,
    /// Electron centres relative to the nucleus.
    pub electrons: Vec<Vec2>,
}

/// Animated planetary model of an element's shell occupancy.
#[derive(Clone, Copy, Debug)]
pub struct BohrModel {
    shells: &'static [u8],
}

impl BohrModel {
    pub fn new(shells: &'static [u8]) -> Self {
        Self { shells }
    }

    pub fn for_element(element: &ElementRecord) -> Self {
        Self::new(element.shells)
    }

    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    pub fn ring_radius(shell: usize) -> f32 {
        BASE_RADIUS + shell as f32 * SHELL_GAP
    }

    /// Seconds per revolution; outer shells turn more slowly.
    pub fn period_secs(shell: usize) -> f32 {
        3.0 + shell as f32 * 1.5
    }

    /// Radius of the outermost ring plus an electron, or the nucleus alone.
    pub fn extent(&self) -> f32 {
        match self.shells.len() {
            0 => NUCLEUS_RADIUS + NUCLEUS_PULSE,
            n => Self::ring_radius(n - 1) + ELECTRON_RADIUS,
        }
    }

    /// Nucleus radius breathing between 18 and 20 units every four seconds.
    pub fn nucleus_radius(time_secs: f32) -> f32 {
        let phase = (time_secs / NUCLEUS_PULSE_SECS).fract();
        let swing = 1.0 - (2.0 * phase - 1.0).abs();
        NUCLEUS_RADIUS + NUCLEUS_PULSE * swing
    }

    pub fn rings(&self, time_secs: f32) -> Vec<Ring> {
        self.shells
            .iter()
            .enumerate()
            .map(|(shell, &count)| {
                let radius = Self::ring_radius(shell);
                let spin = TAU * (time_secs / Self::period_secs(shell)).fract();
                let electrons = (0..count)
                    .map(|i| {
                        let angle = spin + TAU * f32::from(i) / f32::from(count);
                        Vec2::from_angle(angle) * radius
                    })
                    .collect();
                Ring { radius, electrons }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn one_ring_per_shell_with_matching_electrons() {
        for element in ElementRecord::all() {
            let rings = BohrModel::for_element(element).rings(1.25);
            assert_eq!(rings.len(), element.shells.len(), "{}", element.name);
            for (ring, &count) in rings.iter().zip(element.shells) {
                assert_eq!(ring.electrons.len(), usize::from(count));
            }
        }
    }

    #[test]
    fn electrons_sit_on_their_ring() {
        let gold = ElementRecord::by_symbol("Au").unwrap();
        for ring in BohrModel::for_element(gold).rings(7.3) {
            for electron in &ring.electrons {
                assert!((electron.length() - ring.radius).abs() < EPS);
            }
        }
    }

    #[test]
    fn ring_radii_grow_outward() {
        assert_eq!(BohrModel::ring_radius(0), 40.0);
        assert_eq!(BohrModel::ring_radius(2), 90.0);
        assert!(BohrModel::period_secs(3) > BohrModel::period_secs(0));
    }

    #[test]
    fn a_full_period_returns_to_the_start() {
        let model = BohrModel::new(&[2, 8]);
        let start = model.rings(0.0);
        let later = model.rings(BohrModel::period_secs(0));
        let first = start[0].electrons[0];
        let again = later[0].electrons[0];
        assert!((first - again).length() < EPS, "{first:?} vs {again:?}");
    }

    #[test]
    fn electrons_are_evenly_spaced() {
        let rings = BohrModel::new(&[4]).rings(0.0);
        let electrons = &rings[0].electrons;
        assert!((electrons[0] - Vec2::new(40.0, 0.0)).length() < EPS);
        assert!((electrons[1] - Vec2::new(0.0, 40.0)).length() < EPS);
        assert!((electrons[2] - Vec2::new(-40.0, 0.0)).length() < EPS);
    }

    #[test]
    fn nucleus_pulses_within_bounds() {
        assert!((BohrModel::nucleus_radius(0.0) - 18.0).abs() < EPS);
        assert!((BohrModel::nucleus_radius(2.0) - 20.0).abs() < EPS);
        for step in 0..40 {
            let r = BohrModel::nucleus_radius(step as f32 * 0.3);
            assert!((18.0..=20.0).contains(&r));
        }
    }

    #[test]
    fn extent_covers_the_outer_shell() {
        let oganesson = BohrModel::for_element(ElementRecord::by_atomic_number(118).unwrap());
        assert_eq!(oganesson.shell_count(), 7);
        assert_eq!(oganesson.extent(), 40.0 + 6.0 * 25.0 + 4.0);
        assert!(oganesson.extent() * 2.0 < VIEW_SIZE);
    }
}
