//! Thin adapter around the CAPTCHA challenge widget.
//!
//! The widget's integration contract requires a process-wide named entry
//! point for its completion callback; that global lives entirely inside
//! this module's scripts, so the rest of the shell and the whole core stay
//! free of global-scope dependencies.

use dioxus::document;

/// Run the challenge and wait for its one-time token.
///
/// Resolves to an error when the widget is missing or the challenge is
/// rejected; the caller reports it and resets the form phase.
pub async fn execute() -> Result<String, String> {
    let mut eval = document::eval(
        r#"
        window.__folioChallengeDone = (token) => dioxus.send(token || "");
        if (window.grecaptcha && typeof window.grecaptcha.execute === "function") {
            window.grecaptcha
                .execute()
                .then(window.__folioChallengeDone, () => window.__folioChallengeDone(""));
        } else {
            window.__folioChallengeDone("");
        }
        "#,
    );

    match eval.recv::<String>().await {
        Ok(token) if !token.is_empty() => Ok(token),
        Ok(_) => Err("challenge widget unavailable".to_string()),
        Err(err) => Err(format!("challenge bridge failed: {err:?}")),
    }
}

/// Reset the widget so its next token can be issued. Challenge tokens are
/// single-use, so this runs after every completed submission.
pub fn reset() {
    let _ = document::eval(
        r#"
        if (window.grecaptcha && typeof window.grecaptcha.reset === "function") {
            window.grecaptcha.reset();
        }
        "#,
    );
}
