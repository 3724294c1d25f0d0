mod config;
mod garage;
mod nav;
mod puzzle;
mod screens;
mod shell;
mod store;

use dioxus::prelude::*;

use screens::{
    Admin, Game1, Game2, Game3, Game4, IntroGame, IntroGame1, IntroGame2, IntroGame3, IntroGame4,
    OptIn, OptInSuccess, Splash, SuccessGame1, SuccessGame2, SuccessGame3, SuccessGame4,
};
use shell::Shell;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Splash {},
    #[route("/intro-game")]
    IntroGame {},
    #[route("/intro-game1")]
    IntroGame1 {},
    #[route("/intro-game2")]
    IntroGame2 {},
    #[route("/intro-game3")]
    IntroGame3 {},
    #[route("/intro-game4")]
    IntroGame4 {},
    #[route("/game1")]
    Game1 {},
    #[route("/game2")]
    Game2 {},
    #[route("/game3")]
    Game3 {},
    #[route("/game4")]
    Game4 {},
    #[route("/success-game1")]
    SuccessGame1 {},
    #[route("/success-game2")]
    SuccessGame2 {},
    #[route("/success-game3")]
    SuccessGame3 {},
    #[route("/success-game4")]
    SuccessGame4 {},
    #[route("/optin")]
    OptIn {},
    #[route("/success-optin")]
    OptInSuccess {},
    #[route("/admin")]
    Admin {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    store::GameStore::provide();

    // Kiosk boot: fullscreen + portrait lock, best effort. Browsers gate
    // fullscreen behind a user gesture, so the same calls are retried on
    // the first tap; every refusal ends up in the console and nowhere else.
    use_effect(|| {
        document::eval(r#"
            if (!window.__kioskBoot) {
                window.__kioskBoot = true;

                const goFullscreen = () => {
                    const elem = document.documentElement;
                    const req = elem.requestFullscreen
                        || elem.webkitRequestFullscreen
                        || elem.msRequestFullscreen;
                    if (!req) return;
                    try {
                        const p = req.call(elem);
                        if (p && p.catch) p.catch((err) => console.log('fullscreen refused', err));
                    } catch (err) {
                        console.log('fullscreen failed', err);
                    }
                };

                const lockPortrait = () => {
                    if (screen.orientation && screen.orientation.lock) {
                        screen.orientation.lock('portrait')
                            .catch((err) => console.log('orientation lock refused', err));
                    }
                };

                goFullscreen();
                lockPortrait();
                document.addEventListener('pointerdown', () => {
                    goFullscreen();
                    lockPortrait();
                }, { once: true });
            }
        "#);
    });

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
