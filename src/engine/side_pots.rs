use serde::{Deserialize, Serialize};

use crate::domain::{chips::Chips, SeatIndex};

/// Сайд-пот: часть банка, на которую претендуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatIndex>,
}

/// Разбить банк на слои (main pot + side pots).
///
/// Вход:
///   - `contesting`: (seat, вклад) несфолдивших игроков;
///   - `contributions`: вклады ВСЕХ, кто платил в эту раздачу
///     (включая сфолдивших и ушедших из-за стола).
///
/// Пороги слоёв: различные вклады претендентов по возрастанию.
/// Слой i собирает с каждого вклада часть между предыдущим порогом и своим,
/// последний слой забирает всё выше своей нижней границы.
/// Претенденты слоя: те, чей вклад не меньше порога.
/// Пустые слои не возвращаются; сумма слоёв == сумме `contributions`.
pub fn compute_side_pots(contesting: &[(SeatIndex, Chips)], contributions: &[Chips]) -> Vec<SidePot> {
    let mut thresholds: Vec<Chips> = contesting.iter().map(|(_, c)| *c).collect();
    thresholds.sort();
    thresholds.dedup();

    let mut pots = Vec::with_capacity(thresholds.len());
    let mut lower = Chips::ZERO;

    for (i, &cost) in thresholds.iter().enumerate() {
        let is_last = i + 1 == thresholds.len();

        let amount: Chips = contributions
            .iter()
            .map(|&c| {
                let upper = if is_last { c } else { c.min(cost) };
                upper.saturating_sub(lower)
            })
            .sum();

        let eligible_seats: Vec<SeatIndex> = contesting
            .iter()
            .filter(|(_, c)| *c >= cost)
            .map(|(seat, _)| *seat)
            .collect();

        if !amount.is_zero() {
            pots.push(SidePot {
                amount,
                eligible_seats,
            });
        }

        lower = cost;
    }

    pots
}

/// Сколько всего фишек в банке по разбиению на слои.
pub fn total_in_pots(pots: &[SidePot]) -> Chips {
    pots.iter().map(|p| p.amount).sum()
}
