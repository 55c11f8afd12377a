use log::Level;

/// Timing and trigger settings for the landing page animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Delay between revealed characters in the live demo.
    pub type_delay_ms: u32,
    /// Pause after the last demo character before the call to action shows.
    pub settle_delay_ms: u32,
    pub testimonial_rotation_ms: u32,
    pub features_threshold: f64,
    pub steps_threshold: f64,
    pub plans_threshold: f64,
    pub testimonials_threshold: f64,
    pub about_values_threshold: f64,
}

pub const ANIMATION: AnimationConfig = AnimationConfig {
    type_delay_ms: 50,
    settle_delay_ms: 500,
    testimonial_rotation_ms: 5_000,
    features_threshold: 0.1,
    steps_threshold: 0.3,
    plans_threshold: 0.2,
    testimonials_threshold: 0.2,
    about_values_threshold: 0.2,
};

/// Widths at or above this show the desktop navigation.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_fractions() {
        let thresholds = [
            ANIMATION.features_threshold,
            ANIMATION.steps_threshold,
            ANIMATION.plans_threshold,
            ANIMATION.testimonials_threshold,
            ANIMATION.about_values_threshold,
        ];
        assert!(thresholds.iter().all(|t| (0.0..=1.0).contains(t)));
    }

    #[test]
    fn settle_outlasts_a_typing_tick() {
        assert!(ANIMATION.settle_delay_ms > ANIMATION.type_delay_ms);
        assert!(ANIMATION.testimonial_rotation_ms > ANIMATION.settle_delay_ms);
    }
}
