use dioxus::prelude::*;

use super::{PAGE, TopBar};
use crate::Route;
use crate::config;
use crate::store::{self, Lead};

/// Good enough for a kiosk form: something before and after the @, and a
/// dot somewhere in the domain.
fn plausible_email(input: &str) -> bool {
    match input.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[component]
pub fn OptIn() -> Element {
    let mut store = store::use_store();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut newsletter = use_signal(|| false);
    let mut bad_name = use_signal(|| false);
    let mut bad_email = use_signal(|| false);

    let name_border = if bad_name() { "#ef4444" } else { "#2a3348" };
    let email_border = if bad_email() { "#ef4444" } else { "#2a3348" };
    let wants_news = newsletter();
    let check_bg = if wants_news { "#f59e0b" } else { "#10141f" };

    rsx! {
        div {
            style: PAGE,

            TopBar {
                back: Route::Splash {},
                back_label: "Home",
                title: "Stay in the race".to_string(),
                note: "prize draw entry",
            }

            div {
                style: "background: #1a2030; border: 1px solid #2a3348; border-radius: 12px; padding: 28px; width: 100%; max-width: 420px;",

                p {
                    style: "color: #8b93a7; font-size: 15px; line-height: 1.6; margin: 0 0 20px 0;",
                    "Leave your details to enter the show's prize draw. We only keep what you type here, on this machine, for this event."
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 14px;",

                    div {
                        style: "display: flex; flex-direction: column; gap: 4px;",
                        label {
                            style: "font-size: 13px; color: #8b93a7; font-weight: 500;",
                            "Name"
                        }
                        input {
                            r#type: "text",
                            style: "padding: 10px 12px; border: 1px solid {name_border}; border-radius: 6px; font-size: 15px; font-family: system-ui, sans-serif; outline: none; background: #10141f; color: #e5e7eb; transition: border-color 0.15s;",
                            placeholder: "Your name",
                            value: "{name}",
                            oninput: move |e: Event<FormData>| name.set(e.value()),
                        }
                    }

                    div {
                        style: "display: flex; flex-direction: column; gap: 4px;",
                        label {
                            style: "font-size: 13px; color: #8b93a7; font-weight: 500;",
                            "Email"
                        }
                        input {
                            r#type: "email",
                            style: "padding: 10px 12px; border: 1px solid {email_border}; border-radius: 6px; font-size: 15px; font-family: system-ui, sans-serif; outline: none; background: #10141f; color: #e5e7eb; transition: border-color 0.15s;",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e: Event<FormData>| email.set(e.value()),
                        }
                    }

                    div {
                        style: "display: flex; align-items: center; gap: 10px; cursor: pointer;",
                        onclick: move |_| newsletter.set(!newsletter()),
                        div {
                            style: "width: 22px; height: 22px; border: 2px solid #f59e0b; border-radius: 4px; background: {check_bg}; flex-shrink: 0; transition: background 0.15s;",
                        }
                        span {
                            style: "font-size: 14px; color: #8b93a7;",
                            "Also send me the club newsletter"
                        }
                    }

                    button {
                        style: "padding: 12px; background: linear-gradient(135deg, #f59e0b, #d97706); color: #1a1206; border: none; border-radius: 6px; font-size: 16px; font-weight: 700; font-family: system-ui, sans-serif; cursor: pointer; margin-top: 6px;",
                        onclick: move |_| {
                            let name_ok = !name().trim().is_empty();
                            let email_ok = plausible_email(email().trim());
                            if name_ok && email_ok {
                                store.add_lead(Lead {
                                    name: name().trim().to_string(),
                                    email: email().trim().to_string(),
                                    newsletter: newsletter(),
                                    submitted_at_ms: js_sys::Date::now(),
                                });
                                navigator.push(Route::OptInSuccess {});
                            } else {
                                bad_name.set(!name_ok);
                                bad_email.set(!email_ok);
                                spawn(async move {
                                    gloo_timers::future::TimeoutFuture::new(config::FLASH_MS).await;
                                    bad_name.set(false);
                                    bad_email.set(false);
                                });
                            }
                        },
                        "Enter the draw"
                    }
                }
            }
        }
    }
}

#[component]
pub fn OptInSuccess() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #10141f; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, sans-serif;",

            div {
                style: "text-align: center; max-width: 520px;",
                div {
                    style: "font-size: 56px; margin-bottom: 12px;",
                    "\u{2709}"
                }
                h1 {
                    style: "font-size: 34px; font-weight: 700; color: #f3f4f6; margin: 0 0 12px 0;",
                    "You're in the draw!"
                }
                p {
                    style: "font-size: 17px; color: #8b93a7; margin: 0 0 36px 0; line-height: 1.6;",
                    "Winners are announced at the main stage this evening. Hand the wheel to the next driver."
                }
                Link {
                    to: Route::Splash {},
                    style: "display: inline-block; padding: 14px 44px; background: linear-gradient(135deg, #f59e0b, #d97706); color: #1a1206; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 700;",
                    "Back to start"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::plausible_email;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(plausible_email("driver@example.com"));
        assert!(plausible_email("a.b@mail.co.uk"));
    }

    #[test]
    fn rejects_the_obvious_garbage() {
        assert!(!plausible_email(""));
        assert!(!plausible_email("no-at-sign"));
        assert!(!plausible_email("@example.com"));
        assert!(!plausible_email("driver@nodot"));
        assert!(!plausible_email("driver@.com"));
    }
}
