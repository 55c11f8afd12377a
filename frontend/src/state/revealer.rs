/// Outcome of a single revealer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One more character became visible.
    Advanced,
    /// The last character became visible on this tick. Returned once.
    Completed,
    /// Nothing left to reveal.
    Idle,
}

/// Where a reveal sits between its first tick and the completion signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStage {
    Typing,
    /// Every character is shown; waiting out the settle delay.
    Settling,
    Done,
}

impl RevealStage {
    pub fn after_tick(self, tick: Tick) -> Self {
        match (self, tick) {
            (RevealStage::Typing, Tick::Completed) => RevealStage::Settling,
            (stage, _) => stage,
        }
    }

    pub fn after_settle(self) -> Self {
        match self {
            RevealStage::Settling => RevealStage::Done,
            stage => stage,
        }
    }
}

/// Reveals a fixed string one character per tick.
///
/// Counts are in `char`s, so multi-byte text is never split mid-codepoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revealer {
    text: String,
    len: usize,
    revealed: usize,
    completed: bool,
}

impl Revealer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            revealed: 0,
            completed: false,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.completed {
            return Tick::Idle;
        }
        if self.revealed < self.len {
            self.revealed += 1;
        }
        if self.revealed == self.len {
            self.completed = true;
            Tick::Completed
        } else {
            Tick::Advanced
        }
    }

    pub fn revealed(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.revealed)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the full text in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_exhausted(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANIMATION;

    #[test]
    fn reveals_one_char_per_tick() {
        let mut revealer = Revealer::new("AI");
        assert_eq!(revealer.revealed(), "");

        assert_eq!(revealer.tick(), Tick::Advanced);
        assert_eq!(revealer.revealed(), "A");

        assert_eq!(revealer.tick(), Tick::Completed);
        assert_eq!(revealer.revealed(), "AI");
        assert!(revealer.is_exhausted());
    }

    #[test]
    fn prefix_length_tracks_tick_count() {
        let text = "Let me create a blog post";
        let len = text.chars().count();
        let mut revealer = Revealer::new(text);
        for k in 1..len {
            revealer.tick();
            assert_eq!(revealer.revealed_count(), k);
            assert_eq!(revealer.revealed(), &text[..k]);
        }
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut revealer = Revealer::new("hey");
        let completions = (0..10)
            .map(|_| revealer.tick())
            .filter(|tick| *tick == Tick::Completed)
            .count();
        assert_eq!(completions, 1);
        assert_eq!(revealer.revealed(), "hey");
        assert_eq!(revealer.revealed_count(), revealer.len());
    }

    #[test]
    fn frozen_after_exhaustion() {
        let mut revealer = Revealer::new("ok");
        revealer.tick();
        revealer.tick();
        assert_eq!(revealer.tick(), Tick::Idle);
        assert_eq!(revealer.tick(), Tick::Idle);
        assert_eq!(revealer.revealed(), "ok");
    }

    #[test]
    fn empty_text_completes_on_first_tick() {
        let mut revealer = Revealer::new("");
        assert_eq!(revealer.tick(), Tick::Completed);
        assert_eq!(revealer.tick(), Tick::Idle);
        assert_eq!(revealer.revealed(), "");
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let mut revealer = Revealer::new("नमस्ते ❤️");
        let mut previous = 0;
        while revealer.tick() != Tick::Idle {
            let shown = revealer.revealed();
            assert!(shown.len() >= previous);
            previous = shown.len();
        }
        assert_eq!(revealer.revealed(), "नमस्ते ❤️");
    }

    #[test]
    fn stage_settles_only_after_completion() {
        let mut revealer = Revealer::new("AI");
        let mut stage = RevealStage::Typing;

        stage = stage.after_tick(revealer.tick());
        assert_eq!(stage, RevealStage::Typing);
        assert_eq!(stage.after_settle(), RevealStage::Typing);

        stage = stage.after_tick(revealer.tick());
        assert_eq!(stage, RevealStage::Settling);
        assert_eq!(stage.after_tick(revealer.tick()), RevealStage::Settling);

        stage = stage.after_settle();
        assert_eq!(stage, RevealStage::Done);
        assert_eq!(stage.after_settle(), RevealStage::Done);
        assert_eq!(stage.after_tick(Tick::Completed), RevealStage::Done);
    }

    /// Steps a millisecond clock through the interval and settle timeout the
    /// way the typing hook schedules them.
    fn completion_times(text: &str, tick_ms: u32, settle_ms: u32) -> Vec<u32> {
        let mut revealer = Revealer::new(text);
        let mut stage = RevealStage::Typing;
        let mut settle_at = None;
        let mut done_at = Vec::new();

        for now in 1..=10_000u32 {
            if stage == RevealStage::Typing && now % tick_ms == 0 {
                stage = stage.after_tick(revealer.tick());
                if stage == RevealStage::Settling {
                    settle_at = Some(now + settle_ms);
                }
            }
            if settle_at == Some(now) {
                let next = stage.after_settle();
                if next != stage && next == RevealStage::Done {
                    done_at.push(now);
                }
                stage = next;
            }
        }
        done_at
    }

    #[test]
    fn completion_signal_follows_last_tick_by_settle_delay() {
        let (tick, settle) = (ANIMATION.type_delay_ms, ANIMATION.settle_delay_ms);
        assert_eq!(completion_times("AI", tick, settle), vec![2 * tick + settle]);
        assert_eq!(completion_times("A", tick, settle), vec![tick + settle]);
    }
}
