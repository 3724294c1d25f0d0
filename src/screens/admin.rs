use dioxus::prelude::*;

use super::PAGE;
use crate::Route;
use crate::config;
use crate::nav::{self, GateOutcome};
use crate::store;

/// The operator screen. A password form stands in front of the panel; a
/// refused attempt alerts and sends the kiosk back to the splash so the
/// next visitor never sees a half-open gate.
#[component]
pub fn Admin() -> Element {
    let navigator = use_navigator();

    let mut attempt = use_signal(String::new);
    let mut unlocked = use_signal(|| false);
    let mut refused = use_signal(|| false);

    if unlocked() {
        return rsx! { Panel {} };
    }

    let border = if refused() { "#ef4444" } else { "#2a3348" };

    let mut submit = move || {
        match nav::admin_gate(&attempt()) {
            GateOutcome::Granted => unlocked.set(true),
            GateOutcome::Refused => {
                web_sys::console::warn_1(&"admin gate refused".into());
                refused.set(true);
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Wrong password. Back to the show floor.");
                }
                spawn(async move {
                    gloo_timers::future::TimeoutFuture::new(config::REFUSAL_REDIRECT_MS).await;
                    navigator.push(Route::Splash {});
                });
            }
        }
    };

    rsx! {
        div {
            style: "min-height: 100vh; background: #10141f; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, sans-serif;",

            div {
                style: "background: #1a2030; border: 1px solid #2a3348; border-radius: 12px; padding: 28px; width: 100%; max-width: 360px;",
                h2 {
                    style: "color: #f3f4f6; margin: 0 0 6px 0; font-size: 20px;",
                    "Staff only"
                }
                p {
                    style: "color: #8b93a7; font-size: 14px; margin: 0 0 18px 0;",
                    "Enter the operator password to open the event panel."
                }
                input {
                    r#type: "password",
                    style: "width: 100%; box-sizing: border-box; padding: 10px 12px; border: 1px solid {border}; border-radius: 6px; font-size: 15px; font-family: system-ui, sans-serif; outline: none; background: #10141f; color: #e5e7eb; transition: border-color 0.15s;",
                    placeholder: "Password",
                    value: "{attempt}",
                    oninput: move |e: Event<FormData>| attempt.set(e.value()),
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    style: "width: 100%; margin-top: 14px; padding: 11px; background: linear-gradient(135deg, #f59e0b, #d97706); color: #1a1206; border: none; border-radius: 6px; font-size: 15px; font-weight: 700; font-family: system-ui, sans-serif; cursor: pointer;",
                    onclick: move |_| submit(),
                    "Unlock"
                }
                div {
                    style: "text-align: center; margin-top: 14px;",
                    Link {
                        to: Route::Splash {},
                        style: "color: #4b5563; font-size: 13px;",
                        "\u{2190} back"
                    }
                }
            }
        }
    }
}

/// Event stats behind the gate: wins this session and the captured leads.
#[component]
fn Panel() -> Element {
    let mut store = store::use_store();
    let wins = store.games_won();
    let entries = store.lead_count();
    let leads = store.leads();
    let lead_rows = leads.iter().rev().map(|lead| {
        let when = js_sys::Date::new(&lead.submitted_at_ms.into())
            .to_locale_time_string("en-GB")
            .as_string()
            .unwrap_or_default();
        let tag = if lead.newsletter { "newsletter" } else { "draw only" };
        (lead.name.clone(), lead.email.clone(), tag, when)
    });

    rsx! {
        div {
            style: PAGE,

            div {
                style: "display: flex; gap: 16px; align-items: center; margin-bottom: 20px; width: 100%; max-width: 640px;",
                Link {
                    to: Route::Splash {},
                    style: "color: #8b93a7; text-decoration: none; font-size: 14px;",
                    "\u{2190} Show floor"
                }
                h2 {
                    style: "color: #f3f4f6; margin: 0; font-size: 20px;",
                    "Event panel"
                }
            }

            div {
                style: "width: 100%; max-width: 640px; display: flex; flex-direction: column; gap: 16px;",

                // Session stats
                div {
                    style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;",
                    div {
                        style: "background: #1a2030; border: 1px solid #2a3348; border-radius: 10px; padding: 20px;",
                        div {
                            style: "color: #8b93a7; font-size: 13px; margin-bottom: 6px;",
                            "Timelines completed (this session)"
                        }
                        div {
                            style: "color: #fbbf24; font-size: 32px; font-family: monospace; font-weight: 700;",
                            "{wins}"
                        }
                    }
                    div {
                        style: "background: #1a2030; border: 1px solid #2a3348; border-radius: 10px; padding: 20px;",
                        div {
                            style: "color: #8b93a7; font-size: 13px; margin-bottom: 6px;",
                            "Prize draw entries"
                        }
                        div {
                            style: "color: #fbbf24; font-size: 32px; font-family: monospace; font-weight: 700;",
                            "{entries}"
                        }
                    }
                }

                // Leads
                div {
                    style: "background: #1a2030; border: 1px solid #2a3348; border-radius: 10px; padding: 20px;",
                    h3 {
                        style: "color: #f3f4f6; font-size: 15px; margin: 0 0 12px 0;",
                        "Entries"
                    }
                    if leads.is_empty() {
                        p {
                            style: "color: #4b5563; font-size: 14px; margin: 0;",
                            "Nothing yet. Entries live in memory only \u{2014} export before closing the browser."
                        }
                    }
                    for (name, email, tag, when) in lead_rows {
                        div {
                            style: "display: flex; gap: 12px; align-items: baseline; padding: 6px 0; border-bottom: 1px solid #222b3f; font-size: 14px;",
                            span { style: "color: #e5e7eb; font-weight: 600;", "{name}" }
                            span { style: "color: #8b93a7;", "{email}" }
                            span { style: "color: #fbbf24; font-size: 12px; font-family: monospace;", "{tag}" }
                            span { style: "color: #4b5563; font-size: 12px; margin-left: auto;", "{when}" }
                        }
                    }
                }

                button {
                    style: "align-self: flex-start; padding: 9px 18px; background: #1a2030; color: #8b93a7; border: 1px solid #2a3348; border-radius: 6px; font-size: 14px; cursor: pointer; font-family: system-ui, sans-serif;",
                    onclick: move |_| store.reset_session(),
                    "Reset win counter"
                }
            }
        }
    }
}
