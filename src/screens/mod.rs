//! The routed screens, plus the chrome they share
//!
//! One file per screen family: splash, the intro hub and per-era intros,
//! the four boards, the success screens, the opt-in pair, and the gated
//! admin panel. `GAMES` is the single table tying eras to routes.

mod admin;
mod game;
mod intro;
mod optin;
mod splash;
mod success;

pub use admin::Admin;
pub use game::{Game1, Game2, Game3, Game4};
pub use intro::{IntroGame, IntroGame1, IntroGame2, IntroGame3, IntroGame4};
pub use optin::{OptIn, OptInSuccess};
pub use splash::Splash;
pub use success::{SuccessGame1, SuccessGame2, SuccessGame3, SuccessGame4};

use dioxus::prelude::*;

use crate::Route;
use crate::garage::Era;
use crate::store;

/// One row per board: its era and the three routes around it
pub(crate) struct GameInfo {
    pub number: usize,
    pub era: Era,
    pub intro: Route,
    pub play: Route,
    pub success: Route,
}

pub(crate) const GAMES: &[GameInfo] = &[
    GameInfo {
        number: 1,
        era: Era::ChromeAndFins,
        intro: Route::IntroGame1 {},
        play: Route::Game1 {},
        success: Route::SuccessGame1 {},
    },
    GameInfo {
        number: 2,
        era: Era::SportingDecades,
        intro: Route::IntroGame2 {},
        play: Route::Game2 {},
        success: Route::SuccessGame2 {},
    },
    GameInfo {
        number: 3,
        era: Era::AnalogToDigital,
        intro: Route::IntroGame3 {},
        play: Route::Game3 {},
        success: Route::SuccessGame3 {},
    },
    GameInfo {
        number: 4,
        era: Era::NewMillennium,
        intro: Route::IntroGame4 {},
        play: Route::Game4 {},
        success: Route::SuccessGame4 {},
    },
];

/// The board after this one, or the opt-in form after the last era
pub(crate) fn next_stop(index: usize) -> Route {
    match GAMES.get(index + 1) {
        Some(next) => next.intro.clone(),
        None => Route::OptIn {},
    }
}

/// Page wrapper shared by every screen
pub(crate) const PAGE: &str = "min-height: 100vh; background: #10141f; display: flex; flex-direction: column; align-items: center; padding: 24px 16px; font-family: system-ui, sans-serif;";

/// Header strip with a back link, the screen title, and the session win count
#[component]
pub(crate) fn TopBar(back: Route, back_label: &'static str, title: String, note: &'static str) -> Element {
    let store = store::use_store();
    let wins = store.games_won();

    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center; margin-bottom: 20px; width: 100%; max-width: 760px;",
            Link {
                to: back,
                style: "color: #8b93a7; text-decoration: none; font-size: 14px;",
                "\u{2190} {back_label}"
            }
            h2 {
                style: "color: #f3f4f6; margin: 0; font-size: 20px;",
                "{title}"
            }
            span {
                style: "color: #8b93a7; font-size: 14px;",
                "{note}"
            }
            span {
                style: "color: #fbbf24; font-size: 14px; font-family: monospace; margin-left: auto;",
                "wins: {wins}"
            }
        }
    }
}
