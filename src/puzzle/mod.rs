//! Puzzle - the timeline board state
//!
//! One board per game screen: a shuffled rack of unplaced cars (the draw
//! pile) and a row of year slots. A car lives in exactly one place at a
//! time - the pile or a single slot - so the pile and the occupied slots
//! always partition the deck. Operations with bad arguments (unknown id,
//! out-of-range slot) are silent no-ops; the screens never need to handle
//! an error from the board.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::garage::Car;

/// Entropy for the board shuffles, seeded from the platform
pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).expect("getrandom");
    SmallRng::from_seed(buf)
}

/// A board mid-game
///
/// `deck` is the answer key (canonical year order, never mutated); slot i
/// is correct when its occupant's year equals `deck[i].year`. Two cars
/// that share a model year are interchangeable.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    deck: Vec<Car>,
    pile: Vec<Car>,
    slots: Vec<Option<Car>>,
}

impl Puzzle {
    /// Build a reset board from a canonical deck.
    pub fn new<R: Rng>(deck: Vec<Car>, rng: &mut R) -> Self {
        let slots = vec![None; deck.len()];
        let mut board = Self {
            pile: Vec::with_capacity(deck.len()),
            deck,
            slots,
        };
        board.reset(rng);
        board
    }

    /// Uniformly permute the current draw pile. Placed cars stay put.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.pile.shuffle(rng);
    }

    /// Full restart: every car back in the pile, pile shuffled, slots empty.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.pile = self.deck.clone();
        self.pile.shuffle(rng);
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Move the identified car from the pile into a slot.
    ///
    /// Returns false (leaving all state untouched) when the id is not in
    /// the pile or the slot index is out of range. A car already sitting
    /// in the slot goes back to the end of the pile rather than vanishing.
    pub fn place(&mut self, car_id: u32, slot: usize) -> bool {
        if slot >= self.slots.len() {
            return false;
        }
        let Some(pos) = self.pile.iter().position(|c| c.id == car_id) else {
            return false;
        };
        let car = self.pile.remove(pos);
        if let Some(bumped) = self.slots[slot].take() {
            self.pile.push(bumped);
        }
        self.slots[slot] = Some(car);
        true
    }

    /// Send a slot's occupant back to the end of the pile and empty it.
    /// No-op (false) on an empty or out-of-range slot.
    pub fn remove(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot).and_then(|s| s.take()) {
            Some(car) => {
                self.pile.push(car);
                true
            }
            None => false,
        }
    }

    /// Recomputed on every call; true iff each slot holds a car whose year
    /// matches the canonical year at that index.
    pub fn is_complete(&self) -> bool {
        self.slots
            .iter()
            .zip(&self.deck)
            .all(|(slot, wanted)| matches!(slot, Some(car) if car.year == wanted.year))
    }

    pub fn pile(&self) -> &[Car] {
        &self.pile
    }

    pub fn slots(&self) -> &[Option<Car>] {
        &self.slots
    }

    pub fn deck(&self) -> &[Car] {
        &self.deck
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn placed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garage::{Era, builtins};
    use std::collections::BTreeSet;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn board() -> Puzzle {
        Puzzle::new(builtins::deck(Era::ChromeAndFins), &mut rng())
    }

    /// Set of ids across pile + slots; asserts no car is duplicated
    fn all_ids(p: &Puzzle) -> BTreeSet<u32> {
        let mut ids = BTreeSet::new();
        for car in p.pile() {
            assert!(ids.insert(car.id), "id {} in two places", car.id);
        }
        for car in p.slots().iter().flatten() {
            assert!(ids.insert(car.id), "id {} in two places", car.id);
        }
        ids
    }

    fn deck_ids(p: &Puzzle) -> BTreeSet<u32> {
        p.deck().iter().map(|c| c.id).collect()
    }

    #[test]
    fn new_board_is_reset() {
        let p = board();
        assert_eq!(p.pile().len(), 8);
        assert_eq!(p.slot_count(), 8);
        assert_eq!(p.placed_count(), 0);
        assert!(!p.is_complete());
        assert_eq!(all_ids(&p), deck_ids(&p));
    }

    #[test]
    fn place_moves_car_from_pile_to_slot() {
        let mut p = board();
        let id = p.pile()[0].id;
        assert!(p.place(id, 3));
        assert_eq!(p.slots()[3].as_ref().map(|c| c.id), Some(id));
        assert!(p.pile().iter().all(|c| c.id != id));
        assert_eq!(p.pile().len(), 7);
    }

    #[test]
    fn place_unknown_id_is_a_pure_noop() {
        let mut p = board();
        let before = p.clone();
        assert!(!p.place(9999, 0));
        assert_eq!(p, before);
    }

    #[test]
    fn place_out_of_range_slot_is_a_pure_noop() {
        let mut p = board();
        let id = p.pile()[0].id;
        let before = p.clone();
        assert!(!p.place(id, 8));
        assert_eq!(p, before);
    }

    #[test]
    fn placed_car_id_is_no_longer_placeable() {
        let mut p = board();
        let id = p.pile()[0].id;
        assert!(p.place(id, 0));
        // The id now lives in a slot, not the pile, so a second place is a no-op.
        let before = p.clone();
        assert!(!p.place(id, 1));
        assert_eq!(p, before);
    }

    #[test]
    fn bumped_occupant_returns_to_end_of_pile() {
        let mut p = board();
        let first = p.pile()[0].id;
        let second = p.pile()[1].id;
        assert!(p.place(first, 4));
        assert!(p.place(second, 4));
        assert_eq!(p.slots()[4].as_ref().map(|c| c.id), Some(second));
        assert_eq!(p.pile().last().map(|c| c.id), Some(first));
        assert_eq!(all_ids(&p), deck_ids(&p));
    }

    #[test]
    fn remove_round_trips_membership() {
        let mut p = board();
        let id = p.pile()[2].id;
        assert!(p.place(id, 5));
        assert!(p.remove(5));
        assert!(p.slots()[5].is_none());
        assert_eq!(p.pile().last().map(|c| c.id), Some(id));
        assert_eq!(p.pile().len(), 8);
    }

    #[test]
    fn remove_empty_or_out_of_range_is_a_noop() {
        let mut p = board();
        let before = p.clone();
        assert!(!p.remove(0));
        assert!(!p.remove(99));
        assert_eq!(p, before);
    }

    #[test]
    fn reset_restores_full_pile_and_empty_slots() {
        let mut p = board();
        for i in 0..4 {
            let id = p.pile()[0].id;
            p.place(id, i);
        }
        p.reset(&mut rng());
        assert_eq!(p.placed_count(), 0);
        assert_eq!(p.pile().len(), 8);
        assert_eq!(all_ids(&p), deck_ids(&p));
    }

    #[test]
    fn shuffle_permutes_without_changing_membership() {
        let mut p = board();
        let id = p.pile()[0].id;
        p.place(id, 0);
        let before = all_ids(&p);
        let placed = p.slots()[0].clone();
        p.shuffle(&mut rng());
        assert_eq!(all_ids(&p), before);
        assert_eq!(p.slots()[0], placed, "shuffle must not touch slots");
        assert_eq!(p.pile().len(), 7);
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let a = Puzzle::new(builtins::deck(Era::NewMillennium), &mut SmallRng::seed_from_u64(7));
        let b = Puzzle::new(builtins::deck(Era::NewMillennium), &mut SmallRng::seed_from_u64(7));
        assert_eq!(a.pile(), b.pile());
    }

    #[test]
    fn solving_every_slot_completes_the_board() {
        let mut p = board();
        let answer: Vec<(u32, usize)> = p
            .deck()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        for (id, slot) in &answer[..7] {
            assert!(p.place(*id, *slot));
            assert!(!p.is_complete(), "7 of 8 placed must not complete");
        }
        let (last_id, last_slot) = answer[7];
        assert!(p.place(last_id, last_slot));
        assert!(p.is_complete());
    }

    #[test]
    fn completion_compares_years_not_ids() {
        // Build a two-car deck sharing a model year; either car satisfies
        // either slot.
        let deck = vec![
            Car::new(100, "Twin A", 1970, "/assets/cars/a.png"),
            Car::new(101, "Twin B", 1970, "/assets/cars/b.png"),
        ];
        let mut p = Puzzle::new(deck, &mut rng());
        let first = p.pile()[0].id;
        let second = p.pile()[1].id;
        assert!(p.place(second, 0));
        assert!(p.place(first, 1));
        assert!(p.is_complete());
    }

    #[test]
    fn misplaced_car_does_not_complete() {
        let mut p = board();
        // Fill every slot but swap the first two cars.
        let ids: Vec<u32> = p.deck().iter().map(|c| c.id).collect();
        assert!(p.place(ids[1], 0));
        assert!(p.place(ids[0], 1));
        for (i, id) in ids.iter().enumerate().skip(2) {
            assert!(p.place(*id, i));
        }
        assert_eq!(p.placed_count(), 8);
        assert!(!p.is_complete());
    }
}
