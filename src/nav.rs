//! Navigation policy - what the router shell enforces between screens
//!
//! Kept as plain functions over `Route` so the rules are testable without a
//! browser. The shell applies `clears_session` on every arrival; the admin
//! screen asks `admin_gate` before showing its panel.

use crate::Route;
use crate::config;

/// Entry routes wipe the player session (the win counter) on arrival:
/// the splash and every intro screen.
pub fn clears_session(route: &Route) -> bool {
    matches!(
        route,
        Route::Splash {}
            | Route::IntroGame {}
            | Route::IntroGame1 {}
            | Route::IntroGame2 {}
            | Route::IntroGame3 {}
            | Route::IntroGame4 {}
    )
}

/// Verdict of the admin password check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Granted,
    Refused,
}

/// Exact comparison against the configured operator password. Refusal is
/// alerted and redirected by the caller; there is no lockout and no rate
/// limiting on a show-floor kiosk.
pub fn admin_gate(input: &str) -> GateOutcome {
    if input == config::ADMIN_PASSWORD {
        GateOutcome::Granted
    } else {
        GateOutcome::Refused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_routes_clear_the_session() {
        assert!(clears_session(&Route::Splash {}));
        assert!(clears_session(&Route::IntroGame {}));
        assert!(clears_session(&Route::IntroGame1 {}));
        assert!(clears_session(&Route::IntroGame4 {}));
    }

    #[test]
    fn game_and_utility_routes_do_not() {
        assert!(!clears_session(&Route::Game1 {}));
        assert!(!clears_session(&Route::SuccessGame3 {}));
        assert!(!clears_session(&Route::OptIn {}));
        assert!(!clears_session(&Route::OptInSuccess {}));
        assert!(!clears_session(&Route::Admin {}));
    }

    #[test]
    fn gate_grants_only_the_exact_password() {
        assert_eq!(admin_gate(config::ADMIN_PASSWORD), GateOutcome::Granted);
        assert_eq!(admin_gate(""), GateOutcome::Refused);
        assert_eq!(admin_gate("admin"), GateOutcome::Refused);
        assert_eq!(
            admin_gate(&format!("{} ", config::ADMIN_PASSWORD)),
            GateOutcome::Refused
        );
        assert_eq!(
            admin_gate(&config::ADMIN_PASSWORD.to_uppercase()),
            GateOutcome::Refused
        );
    }
}
