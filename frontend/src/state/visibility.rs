/// Fraction of a region that must be on screen before it counts as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Clamps into `[0, 1]`. NaN is treated as zero.
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateMode {
    /// Flip to visible on the first entry and stop observing.
    Once,
    /// Follow the intersection state, re-triggering on every entry.
    Replay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    Entered,
    Left,
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityGate {
    mode: GateMode,
    visible: bool,
    observing: bool,
}

impl VisibilityGate {
    pub fn new(mode: GateMode) -> Self {
        Self {
            mode,
            visible: false,
            observing: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// `false` once a one-shot gate has fired or the gate was torn down.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn observe(&mut self, is_intersecting: bool) -> GateEvent {
        if !self.observing {
            return GateEvent::Unchanged;
        }
        match (self.visible, is_intersecting) {
            (false, true) => {
                self.visible = true;
                if self.mode == GateMode::Once {
                    self.observing = false;
                }
                GateEvent::Entered
            }
            (true, false) => {
                self.visible = false;
                GateEvent::Left
            }
            _ => GateEvent::Unchanged,
        }
    }

    pub fn stop(&mut self) {
        self.observing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(Threshold::new(0.3).get(), 0.3);
        assert_eq!(Threshold::new(-1.0).get(), 0.0);
        assert_eq!(Threshold::new(4.0).get(), 1.0);
        assert_eq!(Threshold::new(f64::NAN).get(), 0.0);
    }

    #[test]
    fn one_shot_gate_flips_once_and_stops() {
        let mut gate = VisibilityGate::new(GateMode::Once);
        assert_eq!(gate.observe(false), GateEvent::Unchanged);
        assert_eq!(gate.observe(true), GateEvent::Entered);
        assert!(!gate.is_observing());

        assert_eq!(gate.observe(false), GateEvent::Unchanged);
        assert!(gate.is_visible());
    }

    #[test]
    fn replay_gate_follows_intersection() {
        let mut gate = VisibilityGate::new(GateMode::Replay);
        assert_eq!(gate.observe(true), GateEvent::Entered);
        assert_eq!(gate.observe(true), GateEvent::Unchanged);
        assert_eq!(gate.observe(false), GateEvent::Left);
        assert!(!gate.is_visible());
        assert_eq!(gate.observe(true), GateEvent::Entered);
        assert!(gate.is_observing());
    }

    #[test]
    fn stopped_gate_ignores_callbacks() {
        let mut gate = VisibilityGate::new(GateMode::Replay);
        gate.stop();
        assert_eq!(gate.observe(true), GateEvent::Unchanged);
        assert!(!gate.is_visible());
    }
}
