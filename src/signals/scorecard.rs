//! Asset-class scorecard rating

use crate::models::indicators::SymbolSnapshot;
use crate::models::regime::{Momentum, Oscillator, Rating};
use crate::signals::classification::classify_rating;

/// Rate one instrument from its momentum and oscillator regimes.
///
/// An oversold instrument in a bearish trend satisfies both predicates and
/// rates bullish.
pub fn rate_snapshot(snapshot: &SymbolSnapshot) -> Rating {
    let momentum = snapshot.momentum.label;
    let oscillator = snapshot.oscillator.label;

    classify_rating(
        || {
            (momentum == Momentum::Bullish && oscillator != Oscillator::Overbought)
                || oscillator == Oscillator::Oversold
        },
        || momentum == Momentum::Bearish || oscillator == Oscillator::Overbought,
    )
}
