use dioxus::prelude::*;

use super::{GAMES, PAGE, TopBar};
use crate::Route;
use crate::config;
use crate::garage::{Car, builtins};
use crate::puzzle::{Puzzle, fresh_rng};
use crate::store;

/// The timeline board. Tap a car in the rack to pick it up, tap a year
/// slot to park it there; tapping an occupied slot with an empty hand
/// sends that car back to the rack.
#[component]
fn GameBoard(index: usize) -> Element {
    let info = &GAMES[index];
    let mut store = store::use_store();
    let navigator = use_navigator();

    let era = info.era;
    let mut board = use_signal(move || Puzzle::new(builtins::deck(era), &mut fresh_rng()));
    let mut picked = use_signal(|| None::<u32>);
    let mut finished = use_signal(|| false);

    let b = board.read();
    let rack: Vec<Car> = b.pile().to_vec();
    let slots: Vec<Option<Car>> = b.slots().to_vec();
    let years: Vec<i32> = b.deck().iter().map(|c| c.year).collect();
    let placed = b.placed_count();
    let total = b.slot_count();
    drop(b);

    let in_hand = picked();
    let done = finished();
    let title = format!("Game {} \u{2014} {}", info.number, info.era.title());
    let board_border = if done { "#22c55e" } else { "#2a3348" };

    rsx! {
        div {
            style: PAGE,

            TopBar {
                back: info.intro.clone(),
                back_label: "Briefing",
                title: title,
                note: info.era.span(),
            }

            div {
                style: "max-width: 760px; width: 100%;",

                // Status row
                div {
                    style: "display: flex; align-items: center; gap: 12px; margin-bottom: 14px;",
                    span {
                        style: "color: #8b93a7; font-size: 14px;",
                        if done {
                            "Timeline complete!"
                        } else if in_hand.is_some() {
                            "Now tap the year it belongs to"
                        } else {
                            "Tap a car to pick it up"
                        }
                    }
                    span {
                        style: "color: #fbbf24; font-size: 14px; font-family: monospace; margin-left: auto;",
                        "placed {placed}/{total}"
                    }
                    button {
                        style: "padding: 6px 14px; background: #1a2030; color: #8b93a7; border: 1px solid #2a3348; border-radius: 6px; font-size: 13px; cursor: pointer; font-family: system-ui, sans-serif;",
                        disabled: done,
                        onclick: move |_| {
                            board.write().shuffle(&mut fresh_rng());
                        },
                        "Reshuffle rack"
                    }
                    button {
                        style: "padding: 6px 14px; background: #1a2030; color: #8b93a7; border: 1px solid #2a3348; border-radius: 6px; font-size: 13px; cursor: pointer; font-family: system-ui, sans-serif;",
                        disabled: done,
                        onclick: move |_| {
                            board.write().reset(&mut fresh_rng());
                            picked.set(None);
                        },
                        "Start over"
                    }
                }

                // Timeline slots
                div {
                    style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 10px; background: #151a28; border: 2px solid {board_border}; border-radius: 12px; padding: 16px; transition: border-color 0.3s;",
                    for (i, slot) in slots.iter().enumerate() {
                        {
                            let year = years[i];
                            let occupant = slot.clone();
                            let outline = if occupant.is_some() { "solid #3b4766" } else { "dashed #2a3348" };
                            let cell = match &occupant {
                                Some(car) => rsx! {
                                    img {
                                        src: "{car.image}",
                                        alt: "{car.name}",
                                        style: "width: 100%; height: 40px; object-fit: contain;",
                                    }
                                    div {
                                        style: "color: #e5e7eb; font-size: 11px; text-align: center; margin-top: 4px;",
                                        "{car.name}"
                                    }
                                },
                                None => rsx! {
                                    div {
                                        style: "color: #3b4766; font-size: 22px; margin-top: 12px;",
                                        "+"
                                    }
                                },
                            };
                            rsx! {
                                div {
                                    style: "border: 2px {outline}; border-radius: 8px; padding: 10px; min-height: 96px; display: flex; flex-direction: column; align-items: center; justify-content: flex-start; cursor: pointer; background: #10141f;",
                                    onclick: move |_| {
                                        if finished() {
                                            return;
                                        }
                                        match picked() {
                                            Some(id) => {
                                                let completed = {
                                                    let mut b = board.write();
                                                    b.place(id, i) && b.is_complete()
                                                };
                                                picked.set(None);
                                                if completed {
                                                    finished.set(true);
                                                    store.record_win();
                                                    let success = GAMES[index].success.clone();
                                                    spawn(async move {
                                                        gloo_timers::future::TimeoutFuture::new(config::SUCCESS_DELAY_MS).await;
                                                        navigator.push(success);
                                                    });
                                                }
                                            }
                                            None => {
                                                board.write().remove(i);
                                            }
                                        }
                                    },
                                    div {
                                        style: "color: #fbbf24; font-size: 14px; font-family: monospace; font-weight: 700; margin-bottom: 6px;",
                                        "{year}"
                                    }
                                    {cell}
                                }
                            }
                        }
                    }
                }

                // The rack
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 10px; margin-top: 18px; min-height: 104px;",
                    for car in rack.iter() {
                        {
                            let id = car.id;
                            let lifted = in_hand == Some(id);
                            let border = if lifted { "#fbbf24" } else { "#2a3348" };
                            let lift = if lifted { "translateY(-6px)" } else { "none" };
                            rsx! {
                                div {
                                    style: "background: #1a2030; border: 2px solid {border}; border-radius: 8px; padding: 10px; width: 108px; cursor: pointer; text-align: center; transform: {lift}; transition: transform 0.15s, border-color 0.15s; user-select: none;",
                                    onclick: move |_| {
                                        if finished() {
                                            return;
                                        }
                                        if picked() == Some(id) {
                                            picked.set(None);
                                        } else {
                                            picked.set(Some(id));
                                        }
                                    },
                                    img {
                                        src: "{car.image}",
                                        alt: "{car.name}",
                                        style: "width: 100%; height: 44px; object-fit: contain; margin-bottom: 6px; pointer-events: none;",
                                    }
                                    div {
                                        style: "color: #e5e7eb; font-size: 12px; font-weight: 600;",
                                        "{car.name}"
                                    }
                                }
                            }
                        }
                    }
                    if rack.is_empty() && !done {
                        span {
                            style: "color: #8b93a7; font-size: 14px; align-self: center;",
                            "Rack empty \u{2014} tap a placed car to take it back."
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Game1() -> Element {
    rsx! { GameBoard { index: 0 } }
}

#[component]
pub fn Game2() -> Element {
    rsx! { GameBoard { index: 1 } }
}

#[component]
pub fn Game3() -> Element {
    rsx! { GameBoard { index: 2 } }
}

#[component]
pub fn Game4() -> Element {
    rsx! { GameBoard { index: 3 } }
}
