//! Milestone quotes for the streak header.
//!
//! Selection among a milestone's candidates is randomized, so callers pass
//! their own [`Rng`]; tests drive it with a seeded generator and assert
//! membership rather than exact strings.

use rand::Rng;

use crate::engine::schedule::TrackingSchedule;

/// Streak counts with a dedicated quote set.
pub const STREAK_MILESTONES: [u32; 9] = [1, 3, 7, 14, 21, 30, 50, 100, 365];

/// Candidate quotes for an exact milestone streak, if it is one.
pub fn milestone_quotes(streak: u32) -> Option<[&'static str; 3]> {
    match streak {
        1 => Some([
            "\u{1F331} Great start! Every journey begins with a single session.",
            "\u{2728} First check complete! You're building something amazing.",
            "\u{1F3AF} One down! The habit journey begins now.",
        ]),
        3 => Some([
            "\u{1F525} 3 sessions strong! You're on fire!",
            "\u{1F4AA} Three times! You're building momentum.",
            "\u{26A1} 3 in a row! The habit is starting to stick!",
        ]),
        7 => Some([
            "\u{1F680} Seven sessions complete! You're unstoppable!",
            "\u{1F3C6} 7 times strong! This is how champions are made.",
            "\u{1F4AB} Seven victories! You're proving your commitment.",
        ]),
        14 => Some([
            "\u{1F31F} 14 sessions! You're officially building a real habit!",
            "\u{1F525} Two weeks of dedication! Your willpower is incredible.",
            "\u{1F48E} 14-session streak! You're becoming unstoppable.",
        ]),
        21 => Some([
            "\u{1F389} 21 times! Scientists say you're forming a real habit!",
            "\u{1F451} 21 sessions! You're a habit-building champion!",
            "\u{1F308} 21-session milestone! You've proven you can do anything!",
        ]),
        30 => Some([
            "\u{1F3C5} 30 sessions complete! You're officially a habit master!",
            "\u{1F680} 30 times! You're inspiring!",
            "\u{1F4AA} 30 victories! Nothing can stop you now!",
        ]),
        50 => Some([
            "\u{1F31F} 50 sessions! You're in the top 1% of habit builders!",
            "\u{1F525} Fifty times! You're absolutely incredible!",
            "\u{1F48E} 50-session streak! You're proving that persistence pays off!",
        ]),
        100 => Some([
            "\u{1F3C6} 100 SESSIONS! You're officially a habit legend!",
            "\u{1F451} Triple digits! You've achieved what most people dream of!",
            "\u{1F31F} 100 times! You're absolutely unstoppable!",
        ]),
        365 => Some([
            "\u{1F38A} 365 SESSIONS! You're a habit master of the universe!",
            "\u{1F451} A full year's worth! You've achieved the ultimate milestone!",
            "\u{1F31F} 365 victories! You're living proof that dreams come true!",
        ]),
        _ => None,
    }
}

/// Motivational quote for a streak count.
///
/// Daily habits speak in days; everything else speaks in sessions.
pub fn streak_quote<R: Rng + ?Sized>(
    streak: u32,
    schedule: &TrackingSchedule,
    rng: &mut R,
) -> String {
    let daily = schedule.is_daily();

    if let Some(quotes) = milestone_quotes(streak) {
        let quote = quotes[rng.gen_range(0..quotes.len())];
        return if daily { dailyize(quote) } else { quote.to_string() };
    }

    if streak == 0 {
        return if daily {
            "\u{1F4AA} Ready to start your streak? Today is the perfect day!".to_string()
        } else {
            "\u{1F4AA} Ready to start your streak? Your next scheduled session awaits!"
                .to_string()
        };
    }

    if daily {
        format!("\u{1F525} {streak} days strong! Keep the momentum going!")
    } else {
        format!("\u{1F525} {streak} sessions strong! Keep the momentum going!")
    }
}

/// Swap session vocabulary for day vocabulary.
fn dailyize(quote: &str) -> String {
    quote
        .replace("SESSIONS", "DAYS")
        .replace("sessions", "days")
        .replace("session", "day")
        .replace("times", "days")
}
