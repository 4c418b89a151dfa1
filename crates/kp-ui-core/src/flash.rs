//! Staggered dismissal of flash banners.

use tracing::trace;

use crate::config::FlashTiming;
use crate::schedule::Schedule;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashAction {
    /// Fade banner `index` (document order) out and shift it up.
    Fade(usize),
    /// Detach banner `index` from the document.
    Remove(usize),
}

impl FlashAction {
    pub fn index(self) -> usize {
        match self {
            FlashAction::Fade(i) | FlashAction::Remove(i) => i,
        }
    }
}

/// Fade delay of banner `index`, measured from page init.
pub fn fade_delay(index: usize, timing: &FlashTiming) -> u32 {
    let stagger = timing.stagger_ms.saturating_mul(index.min(u32::MAX as usize) as u32);
    timing.base_delay_ms.saturating_add(stagger)
}

/// Build the fade and removal timers for `count` banners.
pub fn dismiss_schedule(count: usize, timing: &FlashTiming) -> Schedule<FlashAction> {
    let mut schedule = Schedule::new();
    for i in 0..count {
        let fade_at = fade_delay(i, timing);
        schedule.push(fade_at, FlashAction::Fade(i));
        schedule.push(fade_at.saturating_add(timing.fade_ms), FlashAction::Remove(i));
    }
    trace!(count, "flash dismiss schedule built");
    schedule
}

/// Inline `transform` applied while fading.
pub fn fade_transform(timing: &FlashTiming) -> String {
    format!("translateY(-{}px)", timing.offset_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggered_fades_and_removals() {
        let timing = FlashTiming::default();
        let schedule = dismiss_schedule(3, &timing);
        let tasks: Vec<_> = schedule.iter().map(|t| (t.delay_ms, t.action)).collect();
        assert_eq!(
            tasks,
            vec![
                (4000, FlashAction::Fade(0)),
                (4300, FlashAction::Remove(0)),
                (4500, FlashAction::Fade(1)),
                (4800, FlashAction::Remove(1)),
                (5000, FlashAction::Fade(2)),
                (5300, FlashAction::Remove(2)),
            ]
        );
    }

    #[test]
    fn removal_follows_fade_by_fade_ms() {
        let timing = FlashTiming::default();
        let schedule = dismiss_schedule(10, &timing);
        for i in 0..10 {
            let fade = schedule
                .iter()
                .find(|t| t.action == FlashAction::Fade(i))
                .unwrap();
            let remove = schedule
                .iter()
                .find(|t| t.action == FlashAction::Remove(i))
                .unwrap();
            assert_eq!(fade.delay_ms, 4000 + 500 * i as u32);
            assert_eq!(remove.delay_ms - fade.delay_ms, 300);
        }
    }

    #[test]
    fn earlier_banners_never_fade_later() {
        let schedule = dismiss_schedule(6, &FlashTiming::default());
        let mut tasks: Vec<_> = schedule.iter().collect();
        tasks.sort_by_key(|t| t.delay_ms);
        let fades: Vec<_> = tasks
            .into_iter()
            .filter_map(|t| match t.action {
                FlashAction::Fade(i) => Some(i),
                FlashAction::Remove(_) => None,
            })
            .collect();
        assert_eq!(fades, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_banners_no_timers() {
        assert!(dismiss_schedule(0, &FlashTiming::default()).is_empty());
    }

    #[test]
    fn transform_uses_offset() {
        assert_eq!(fade_transform(&FlashTiming::default()), "translateY(-10px)");
    }
}
