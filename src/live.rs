//! Pseudo-live scoreboard for the home page widget.
//!
//! DESIGN
//! ======
//! A cosmetic demo, not a model of kabaddi. Each tick draws a weighted random
//! event from `EVENT_TABLE`, applies its score and player-count delta, hands
//! the raid to the other side, and runs the clock down one minute. When the
//! clock reaches zero the match is marked finished and the next tick starts a
//! fresh demo fixture.
//!
//! Players on the mat stay within `0..=PLAYERS_PER_SIDE`; a side that reaches
//! zero is all out, concedes `ALL_OUT_BONUS`, and is restored to a full side
//! within the same tick, so observers only ever see `1..=PLAYERS_PER_SIDE`.
//!
//! `step` takes the RNG as a parameter so tests can drive it with a seeded
//! generator; `apply` is fully deterministic.

use std::collections::VecDeque;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;

pub const PLAYERS_PER_SIDE: u8 = 7;
pub const MATCH_MINUTES: u8 = 40;
pub const ALL_OUT_BONUS: u32 = 2;
pub const TICKER_LEN: usize = 5;
/// Super tackles only count against a raider when this few defenders remain.
pub const SUPER_TACKLE_MAX_DEFENDERS: u8 = 3;

const DEMO_FIXTURES: [(&str, &str); 4] = [
    ("Patna Pirates", "U Mumba"),
    ("Jaipur Pink Panthers", "Bengal Warriors"),
    ("Puneri Paltan", "Haryana Steelers"),
    ("Dabang Delhi", "Tamil Thalaivas"),
];

/// Shared handle: one writer (the tick task), many snapshot readers.
pub type SharedScoreboard = Arc<RwLock<Scoreboard>>;

// =============================================================================
// EVENTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveEvent {
    RaidPoint,
    EmptyRaid,
    Tackle,
    SuperRaid,
    SuperTackle,
    DoOrDie,
    Bonus,
}

impl LiveEvent {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RaidPoint => "Raid point",
            Self::EmptyRaid => "Empty raid",
            Self::Tackle => "Tackle",
            Self::SuperRaid => "Super Raid",
            Self::SuperTackle => "Super Tackle",
            Self::DoOrDie => "Do-or-Die raid",
            Self::Bonus => "Bonus point",
        }
    }
}

/// Relative event weights.
const EVENT_TABLE: [(LiveEvent, u32); 7] = [
    (LiveEvent::RaidPoint, 30),
    (LiveEvent::EmptyRaid, 20),
    (LiveEvent::Tackle, 22),
    (LiveEvent::SuperRaid, 6),
    (LiveEvent::SuperTackle, 6),
    (LiveEvent::DoOrDie, 10),
    (LiveEvent::Bonus, 6),
];

/// Draw one event according to `EVENT_TABLE` weights.
pub fn draw_event<R: Rng + ?Sized>(rng: &mut R) -> LiveEvent {
    let total: u32 = EVENT_TABLE.iter().map(|(_, w)| w).sum();
    let mut roll = rng.random_range(0..total);
    for (event, weight) in EVENT_TABLE {
        if roll < weight {
            return event;
        }
        roll -= weight;
    }
    LiveEvent::EmptyRaid
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideState {
    pub name: String,
    pub score: u32,
    pub on_mat: u8,
}

impl SideState {
    fn new(name: &str) -> Self {
        Self { name: name.to_owned(), score: 0, on_mat: PLAYERS_PER_SIDE }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerEntry {
    pub minute: u8,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scoreboard {
    pub home: SideState,
    pub away: SideState,
    pub raiding: Side,
    pub minutes_left: u8,
    pub finished: bool,
    /// Most recent first, at most `TICKER_LEN` entries.
    pub ticker: VecDeque<TickerEntry>,
    #[serde(skip)]
    fixture: usize,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::with_fixture(0)
    }
}

impl Scoreboard {
    #[must_use]
    pub fn new(home: &str, away: &str) -> Self {
        Self {
            home: SideState::new(home),
            away: SideState::new(away),
            raiding: Side::Home,
            minutes_left: MATCH_MINUTES,
            finished: false,
            ticker: VecDeque::with_capacity(TICKER_LEN),
            fixture: 0,
        }
    }

    fn with_fixture(fixture: usize) -> Self {
        let (home, away) = DEMO_FIXTURES[fixture % DEMO_FIXTURES.len()];
        Self { fixture, ..Self::new(home, away) }
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Elapsed match minute for display.
    #[must_use]
    pub fn minute(&self) -> u8 {
        MATCH_MINUTES - self.minutes_left
    }

    /// Advance one tick.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.finished {
            *self = Self::with_fixture(self.fixture + 1);
            return;
        }

        let event = draw_event(rng);
        let raider_wins_do_or_die = rng.random_bool(0.5);
        self.apply(event, raider_wins_do_or_die);

        self.minutes_left = self.minutes_left.saturating_sub(1);
        if self.minutes_left == 0 {
            self.finished = true;
            let text = format!("Full time: {} {} - {} {}", self.home.name, self.home.score, self.away.score, self.away.name);
            self.push_ticker(text);
        }
        self.raiding = self.raiding.other();
    }

    /// Apply one event for the current raid. `raider_wins_do_or_die` decides
    /// the do-or-die coin flip and is ignored for other events.
    ///
    /// The ticker names the side that scored (the raider for an empty raid),
    /// and an All Out caused by the event is pushed after it so the
    /// newest-first ticker reads effect above cause.
    pub fn apply(&mut self, event: LiveEvent, raider_wins_do_or_die: bool) {
        let raider = self.raiding;
        let defender = raider.other();

        let (credited, depleted) = match event {
            LiveEvent::RaidPoint => (raider, Some(self.successful_raid(raider, 1))),
            LiveEvent::EmptyRaid => (raider, None),
            LiveEvent::Tackle => (defender, Some(self.successful_tackle(defender, 1))),
            LiveEvent::SuperRaid => (raider, Some(self.successful_raid(raider, 3))),
            LiveEvent::SuperTackle => {
                let points = if self.side(defender).on_mat <= SUPER_TACKLE_MAX_DEFENDERS { 2 } else { 1 };
                (defender, Some(self.successful_tackle(defender, points)))
            }
            LiveEvent::DoOrDie if raider_wins_do_or_die => (raider, Some(self.successful_raid(raider, 1))),
            LiveEvent::DoOrDie => (defender, Some(self.successful_tackle(defender, 1))),
            LiveEvent::Bonus => {
                self.side_mut(raider).score += 1;
                (raider, None)
            }
        };

        let name = self.side(credited).name.clone();
        self.push_ticker(format!("{}: {name}", event.label()));
        if let Some(side) = depleted {
            self.check_all_out(side);
        }
    }

    /// Raider scores `touches` points; that many defenders go out and the
    /// same number of raiding-side players are revived. Returns the side that
    /// lost players.
    fn successful_raid(&mut self, raider: Side, touches: u8) -> Side {
        let defender = raider.other();
        let out = self.put_out(defender, touches);
        self.side_mut(raider).score += u32::from(touches);
        self.revive(raider, out);
        defender
    }

    fn successful_tackle(&mut self, defender: Side, points: u32) -> Side {
        let raider = defender.other();
        let out = self.put_out(raider, 1);
        self.side_mut(defender).score += points;
        self.revive(defender, out);
        raider
    }

    fn put_out(&mut self, side: Side, n: u8) -> u8 {
        let state = self.side_mut(side);
        let out = n.min(state.on_mat);
        state.on_mat -= out;
        out
    }

    fn revive(&mut self, side: Side, n: u8) {
        let state = self.side_mut(side);
        state.on_mat = state.on_mat.saturating_add(n).min(PLAYERS_PER_SIDE);
    }

    fn check_all_out(&mut self, victim: Side) {
        if self.side(victim).on_mat > 0 {
            return;
        }
        self.side_mut(victim.other()).score += ALL_OUT_BONUS;
        self.side_mut(victim).on_mat = PLAYERS_PER_SIDE;
        let name = self.side(victim).name.clone();
        self.push_ticker(format!("All Out: {name}"));
    }

    fn push_ticker(&mut self, text: String) {
        let minute = self.minute();
        self.ticker.push_front(TickerEntry { minute, text });
        self.ticker.truncate(TICKER_LEN);
    }
}

#[must_use]
pub fn shared() -> SharedScoreboard {
    Arc::new(RwLock::new(Scoreboard::default()))
}

#[cfg(test)]
#[path = "live_test.rs"]
mod tests;
