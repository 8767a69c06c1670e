//! Boot sequencer cadence.

use crate::model::BOOT_PROGRESS_MAX;

/// Progress units added per tick.
pub const BOOT_PROGRESS_STEP: u8 = 2;
/// Tick cadence of the boot progress bar.
pub const BOOT_TICK_MS: u32 = 30;
/// Pause between a full bar and the ready transition.
pub const BOOT_SETTLE_DELAY_MS: u32 = 500;
/// The boot screen is skipped after this long even if the bar has not filled.
pub const BOOT_FAILSAFE_MS: u32 = 3_500;

/// Next progress value after one tick, saturating at the maximum.
pub fn advance_progress(progress: u8) -> u8 {
    progress
        .saturating_add(BOOT_PROGRESS_STEP)
        .min(BOOT_PROGRESS_MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn progress_advances_by_step_and_saturates() {
        assert_eq!(advance_progress(0), 2);
        assert_eq!(advance_progress(98), 100);
        assert_eq!(advance_progress(99), 100);
        assert_eq!(advance_progress(100), 100);
        assert_eq!(advance_progress(u8::MAX), 100);
    }

    #[test]
    fn fifty_ticks_fill_the_bar() {
        let progress = (0..50).fold(0u8, |progress, _| advance_progress(progress));
        assert_eq!(progress, BOOT_PROGRESS_MAX);
    }
}
