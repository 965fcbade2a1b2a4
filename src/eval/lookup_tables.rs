use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска "пять подряд" со старшей картой в бите 4.
const FIVE_IN_A_ROW: RankMask = 0b1_1111;

/// Колесо A2345: туз играет как единица.
const WHEEL: RankMask = 0b1_0000_0000_1111;

pub fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank.value() - 2)
}

pub fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    ranks.iter().fold(0, |mask, &r| mask | rank_to_bit(r))
}

/// Найти старший стрит в маске. Колесо возвращает `Rank::Five`.
pub fn detect_straight(mask: RankMask) -> Option<Rank> {
    // Старшая карта стрита: от туза (сдвиг 8) вниз до шестёрки (сдвиг 0).
    for shift in (0..=8u8).rev() {
        let window = FIVE_IN_A_ROW << shift;
        if mask & window == window {
            return Rank::from_value(shift + 6);
        }
    }
    if mask & WHEEL == WHEEL {
        return Some(Rank::Five);
    }
    None
}

/// Ранги стрита от старшего к младшему (для кикеров HandRank).
pub fn straight_ranks(high: Rank) -> Vec<Rank> {
    if high == Rank::Five {
        return vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let top = high.value();
    (0..5).filter_map(|i| Rank::from_value(top - i)).collect()
}
