use crate::domain::chips::Chips;
use crate::domain::table::{LimitType, Round};

/// Размер bet/raise по политике лимита стола.
///
/// Порядок:
///   1. не меньше big blind;
///   2. `Limit`: ровно BB (на тёрне и ривере 2 BB), запрошенная сумма игнорируется;
///   3. `PotLimit`: не больше фишек, уже лежащих в банке.
pub fn clamp_bet(
    requested: Chips,
    limit: LimitType,
    big_blind: Chips,
    round: Round,
    pot_total: Chips,
) -> Chips {
    let mut amount = requested.max(big_blind);

    match limit {
        LimitType::Limit => {
            amount = big_blind;
            if matches!(round, Round::Turn | Round::River) {
                amount = big_blind + big_blind;
            }
        }
        LimitType::PotLimit => {
            amount = amount.min(pot_total);
        }
        LimitType::NoLimit => {}
    }

    amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_limit_floors_at_big_blind_only() {
        let bb = Chips(2);
        assert_eq!(clamp_bet(Chips(1), LimitType::NoLimit, bb, Round::Flop, Chips(10)), Chips(2));
        assert_eq!(clamp_bet(Chips(500), LimitType::NoLimit, bb, Round::Flop, Chips(10)), Chips(500));
    }

    #[test]
    fn fixed_limit_doubles_on_late_streets() {
        let bb = Chips(4);
        assert_eq!(clamp_bet(Chips(100), LimitType::Limit, bb, Round::PreFlop, Chips(0)), Chips(4));
        assert_eq!(clamp_bet(Chips(100), LimitType::Limit, bb, Round::Flop, Chips(0)), Chips(4));
        assert_eq!(clamp_bet(Chips(1), LimitType::Limit, bb, Round::Turn, Chips(0)), Chips(8));
        assert_eq!(clamp_bet(Chips(100), LimitType::Limit, bb, Round::River, Chips(0)), Chips(8));
    }

    #[test]
    fn pot_limit_caps_at_pot() {
        let bb = Chips(2);
        assert_eq!(clamp_bet(Chips(50), LimitType::PotLimit, bb, Round::Flop, Chips(12)), Chips(12));
        assert_eq!(clamp_bet(Chips(5), LimitType::PotLimit, bb, Round::Flop, Chips(12)), Chips(5));
    }
}
