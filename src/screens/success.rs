use dioxus::prelude::*;

use super::{GAMES, next_stop};
use crate::Route;
use crate::store;

/// Shared success card; the last era hands the player to the opt-in form.
#[component]
fn SuccessCard(index: usize) -> Element {
    let info = &GAMES[index];
    let store = store::use_store();
    let wins = store.games_won();
    let era_title = info.era.title();
    let last = index + 1 == GAMES.len();
    let next = next_stop(index);
    let next_label = if last { "Claim your prize entry \u{2192}" } else { "Next era \u{2192}" };

    rsx! {
        div {
            style: "min-height: 100vh; background: #10141f; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, sans-serif;",

            div {
                style: "text-align: center; max-width: 560px;",
                div {
                    style: "font-size: 56px; margin-bottom: 12px;",
                    "\u{1f3c1}"
                }
                h1 {
                    style: "font-size: 36px; font-weight: 700; color: #f3f4f6; margin: 0 0 12px 0;",
                    "{era_title} \u{2014} done!"
                }
                p {
                    style: "font-size: 18px; color: #8b93a7; margin: 0 0 8px 0; line-height: 1.6;",
                    "Every car parked on its year. That's how it's done."
                }
                p {
                    style: "color: #fbbf24; font-size: 15px; font-family: monospace; margin: 0 0 36px 0;",
                    "timelines completed this visit: {wins}"
                }

                div {
                    style: "display: flex; gap: 16px; justify-content: center;",
                    Link {
                        to: next,
                        style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #f59e0b, #d97706); color: #1a1206; text-decoration: none; border-radius: 8px; font-size: 17px; font-weight: 700;",
                        "{next_label}"
                    }
                    Link {
                        to: Route::Splash {},
                        style: "display: inline-block; padding: 14px 36px; background: #1a2030; border: 1px solid #2a3348; color: #8b93a7; text-decoration: none; border-radius: 8px; font-size: 17px;",
                        "Home"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SuccessGame1() -> Element {
    rsx! { SuccessCard { index: 0 } }
}

#[component]
pub fn SuccessGame2() -> Element {
    rsx! { SuccessCard { index: 1 } }
}

#[component]
pub fn SuccessGame3() -> Element {
    rsx! { SuccessCard { index: 2 } }
}

#[component]
pub fn SuccessGame4() -> Element {
    rsx! { SuccessCard { index: 3 } }
}
