use dioxus::prelude::*;

use super::GAMES;
use crate::Route;

#[component]
pub fn Splash() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #10141f; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "text-align: center; max-width: 680px;",
                p {
                    style: "color: #fbbf24; font-size: 14px; letter-spacing: 4px; text-transform: uppercase; margin: 0 0 12px 0;",
                    "Motor Heritage Show"
                }
                h1 {
                    style: "font-size: 52px; font-weight: 700; color: #f3f4f6; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Timeline Garage"
                }
                p {
                    style: "font-size: 20px; color: #8b93a7; margin: 0 0 40px 0; line-height: 1.6;",
                    "Eight icons per era, one timeline. Put every car on the year it first rolled out \u{2014} four eras stand between you and the champions' board."
                }
                Link {
                    to: Route::IntroGame {},
                    style: "display: inline-block; padding: 16px 48px; background: linear-gradient(135deg, #f59e0b, #d97706); color: #1a1206; text-decoration: none; border-radius: 8px; font-size: 20px; font-weight: 700;",
                    "Start \u{2192}"
                }
            }

            // Era teaser strip
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; max-width: 860px; margin-top: 64px;",
                for info in GAMES.iter() {
                    {
                        let span = info.era.span();
                        let title = info.era.title();
                        rsx! {
                            div {
                                style: "background: #1a2030; border: 1px solid #2a3348; border-radius: 10px; padding: 20px;",
                                div {
                                    style: "color: #fbbf24; font-size: 12px; font-family: monospace; margin-bottom: 6px;",
                                    "{span}"
                                }
                                h3 {
                                    style: "color: #f3f4f6; font-size: 15px; margin: 0;",
                                    "{title}"
                                }
                            }
                        }
                    }
                }
            }

            p {
                style: "color: #4b5563; font-size: 13px; margin-top: 64px;",
                "Staff? "
                Link {
                    to: Route::Admin {},
                    style: "color: #4b5563;",
                    "Admin"
                }
            }
        }
    }
}
