//! Executes core effects against the platform.
//!
//! The state machine returns [`Effect`] values; this module is the only
//! place they touch the webview, the router, the timers and the external
//! widgets. Effects run in order within one event callback, and follow-up
//! effects produced by frame-gated steps or widget completions are queued
//! behind the current batch, which preserves the ordering the core's
//! flicker-avoidance sequences rely on.

use std::collections::VecDeque;

use chrono::Utc;
use dioxus::document;
use dioxus::prelude::*;
use folio_core::{Effect, ProjectId};

use crate::app::Route;
use crate::captcha;
use crate::context::AppContext;

/// Run a batch of effects to completion.
pub async fn drive(app: AppContext, effects: Vec<Effect>) {
    let mut app = app;
    let mut queue: VecDeque<Effect> = effects.into();

    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::SetScroll(offset) => set_scroll(offset).await,

            Effect::ScrollCardIntoView(id) => scroll_card_into_view(&id).await,

            Effect::NextFrame(follow_up) => {
                await_frame().await;
                let staged = follow_up.apply(&mut app.ui.write());
                queue.extend(staged);
            }

            Effect::RestoreTransitionsAfter { delay, epoch } => {
                let mut ui = app.ui;
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    // The page may have been torn down while the timer ran.
                    if let Ok(mut state) = ui.try_write() {
                        state.restore_transitions(epoch);
                    }
                });
            }

            Effect::NavigateHome => {
                let _ = app.navigator.push(Route::Home {});
            }

            Effect::NavigateBack => {
                if app.navigator.can_go_back() {
                    app.navigator.go_back();
                } else {
                    let _ = app.navigator.push(Route::Home {});
                }
            }

            Effect::ActivateRelay => {
                let relay = app.relay.read().clone();
                if let Err(err) = relay.ensure_active() {
                    // The overlay still opens; sending will surface the
                    // problem to the user if attempted.
                    tracing::warn!(error = %err, "email relay activation failed");
                }
            }

            Effect::ExecuteChallenge => {
                let staged = match captcha::execute().await {
                    Ok(token) => app.form.write().challenge_passed(&token, Utc::now()),
                    Err(reason) => app.form.write().challenge_failed(reason),
                };
                queue.extend(staged);
            }

            Effect::ResetChallenge => captcha::reset(),

            Effect::SendEmail(payload) => {
                let relay = app.relay.read().clone();
                let outcome = relay.send(&payload).await;
                let staged = app.form.write().send_finished(outcome);
                queue.extend(staged);
            }
        }
    }
}

async fn set_scroll(offset: u32) {
    let js = format!(
        "const m = document.getElementById('main'); if (m) m.scrollTop = {offset};"
    );
    let _ = document::eval(&js).await;
}

async fn scroll_card_into_view(id: &ProjectId) {
    let js = format!(
        r#"
        requestAnimationFrame(() => {{
            const card = document.querySelector('[data-project="{id}"]');
            if (card) card.scrollIntoView({{ behavior: "smooth", block: "start" }});
        }});
        "#
    );
    let _ = document::eval(&js).await;
}

/// Let the layout engine observe the synchronous style changes before the
/// follow-up runs.
async fn await_frame() {
    let mut eval = document::eval("await new Promise(requestAnimationFrame); dioxus.send(true);");
    let _ = eval.recv::<bool>().await;
}
