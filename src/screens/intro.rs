use dioxus::prelude::*;

use super::{GAMES, PAGE, TopBar};
use crate::Route;
use crate::garage::builtins;

/// The era hub: pick one of the four boards
#[component]
pub fn IntroGame() -> Element {
    rsx! {
        div {
            style: PAGE,

            TopBar {
                back: Route::Splash {},
                back_label: "Home",
                title: "Pick an era".to_string(),
                note: "four boards, eight cars each",
            }

            div {
                style: "display: grid; grid-template-columns: repeat(2, 300px); gap: 16px;",
                for info in GAMES.iter() {
                    {
                        let span = info.era.span();
                        let title = info.era.title();
                        let tagline = info.era.tagline();
                        rsx! {
                            Link {
                                to: info.intro.clone(),
                                style: "background: #1a2030; border: 1px solid #2a3348; border-radius: 10px; padding: 24px; text-decoration: none;",
                                div {
                                    style: "color: #fbbf24; font-size: 13px; font-weight: 600; margin-bottom: 8px; font-family: monospace;",
                                    "{info.number} \u{00b7} {span}"
                                }
                                h3 {
                                    style: "color: #f3f4f6; font-size: 18px; margin: 0 0 8px 0;",
                                    "{title}"
                                }
                                p {
                                    style: "color: #8b93a7; font-size: 14px; margin: 0; line-height: 1.5;",
                                    "{tagline}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One era's briefing: the lineup (no years - that's the game) and the
/// play button.
#[component]
fn EraIntro(index: usize) -> Element {
    let info = &GAMES[index];
    let lineup = builtins::deck(info.era);
    let title = format!("Game {} \u{2014} {}", info.number, info.era.title());
    let tagline = info.era.tagline();

    rsx! {
        div {
            style: PAGE,

            TopBar {
                back: Route::IntroGame {},
                back_label: "Eras",
                title: title,
                note: info.era.span(),
            }

            div {
                style: "max-width: 680px; width: 100%;",
                p {
                    style: "color: #8b93a7; font-size: 17px; line-height: 1.6; margin: 0 0 24px 0;",
                    "{tagline} Drag your eyes over the lineup, then place every car on the year it belongs to."
                }

                // Lineup strip - names only, the years are the puzzle
                div {
                    style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 10px; margin-bottom: 32px;",
                    for car in lineup.iter() {
                        div {
                            style: "background: #1a2030; border: 1px solid #2a3348; border-radius: 8px; padding: 12px; text-align: center;",
                            img {
                                src: "{car.image}",
                                alt: "{car.name}",
                                style: "width: 100%; height: 56px; object-fit: contain; margin-bottom: 8px;",
                            }
                            div {
                                style: "color: #e5e7eb; font-size: 12px; font-weight: 600;",
                                "{car.name}"
                            }
                        }
                    }
                }

                div {
                    style: "text-align: center;",
                    Link {
                        to: info.play.clone(),
                        style: "display: inline-block; padding: 14px 44px; background: linear-gradient(135deg, #f59e0b, #d97706); color: #1a1206; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 700;",
                        "Play \u{2192}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn IntroGame1() -> Element {
    rsx! { EraIntro { index: 0 } }
}

#[component]
pub fn IntroGame2() -> Element {
    rsx! { EraIntro { index: 1 } }
}

#[component]
pub fn IntroGame3() -> Element {
    rsx! { EraIntro { index: 2 } }
}

#[component]
pub fn IntroGame4() -> Element {
    rsx! { EraIntro { index: 3 } }
}
