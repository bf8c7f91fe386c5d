//! Deferred platform work requested by the controllers.
//!
//! All core logic is synchronous; anything that must touch the platform
//! (container scrolling, animation frames, timers, navigation, the external
//! widgets) is returned to the caller as an [`Effect`] value. The shell
//! executes them in order within one event callback, which preserves the
//! ordering guarantees the flicker-avoidance sequences depend on.

use std::time::Duration;

use crate::contact::EmailPayload;
use crate::portfolio::ProjectId;
use crate::state::UiState;

/// One unit of deferred platform work.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set the main container's scroll offset.
    SetScroll(u32),

    /// Smooth-scroll the card into view at the viewport top edge, on the
    /// next animation frame.
    ScrollCardIntoView(ProjectId),

    /// Run the follow-up after the browser has observed the synchronous
    /// style changes made so far (next animation frame).
    NextFrame(FollowUp),

    /// Re-enable transitions after the delay, if the suppression epoch is
    /// still current.
    RestoreTransitionsAfter { delay: Duration, epoch: u64 },

    /// Navigate to the home document.
    NavigateHome,

    /// Navigate back in history if possible, else to the home document.
    NavigateBack,

    /// Lazily activate the email relay (idempotent; failure is logged, not
    /// surfaced).
    ActivateRelay,

    /// Run the CAPTCHA challenge.
    ExecuteChallenge,

    /// Reset the CAPTCHA so its next token can be issued.
    ResetChallenge,

    /// Hand the assembled payload to the relay's send operation.
    SendEmail(Box<EmailPayload>),
}

/// The second phase of a two-phase (synchronous state, frame-gated
/// follow-up) operation.
///
/// Exposed as a plain value so tests can invoke the follow-up directly
/// instead of going through a platform "next paint" primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// Apply a restored scroll offset to the container and recompute hero
    /// visibility from it.
    ApplyRestoredScroll { offset: u32 },

    /// Recompute hero-element visibility for the offset (overlay close).
    RecomputeHero { offset: u32 },
}

impl FollowUp {
    /// Run the follow-up against the state machine, yielding any further
    /// platform work.
    pub fn apply(self, ui: &mut UiState) -> Vec<Effect> {
        match self {
            FollowUp::ApplyRestoredScroll { offset } => {
                ui.scroll_offset = offset;
                ui.has_scrolled = offset > 0;
                ui.apply_hero_visibility(offset);
                vec![Effect::SetScroll(offset)]
            }
            FollowUp::RecomputeHero { offset } => {
                ui.apply_hero_visibility(offset);
                Vec::new()
            }
        }
    }
}
