use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::positions::distance_from_button;
use crate::engine::side_pots::{compute_side_pots, SidePot};
use crate::engine::HandRanker;

/// Выплата одного пота одному игроку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAward {
    /// Индекс пота в `Settlement::pots` (0: main pot).
    pub pot: usize,
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    pub amount: Chips,
}

/// Итог завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub hand_number: u64,
    pub board: Vec<Card>,
    pub pots: Vec<SidePot>,
    pub awards: Vec<PotAward>,
}

impl Settlement {
    /// Сколько получил seat по всем потам.
    pub fn won_by(&self, seat: SeatIndex) -> Chips {
        self.awards.iter().filter(|a| a.seat == seat).map(|a| a.amount).sum()
    }
}

/// Победители пота: сильнейшая рука и все, кто ей равен.
///
/// Порядок результата: порядок входа среди равных.
pub fn pick_winners<S: Ord>(ranked: &[(SeatIndex, S)]) -> Vec<SeatIndex> {
    let Some(best) = ranked.iter().map(|(_, s)| s).max() else {
        return Vec::new();
    };
    ranked
        .iter()
        .filter(|(_, s)| s == best)
        .map(|(seat, _)| *seat)
        .collect()
}

/// Поделить `amount` между победителями поровну.
///
/// `winners` должны идти от ближайшего к кнопке: остаток раздаётся по одной
/// фишке первым `amount % k` из них.
pub fn split_pot(amount: Chips, winners: &[SeatIndex]) -> Vec<(SeatIndex, Chips)> {
    let (share, remainder) = amount.split(winners.len());
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| {
            let bonus = if (i as u64) < remainder.0 { Chips(1) } else { Chips::ZERO };
            (seat, share + bonus)
        })
        .collect()
}

/// Расчёт раздачи: разбить банк на поты, определить победителей каждого
/// и зачислить выигрыш в `chips`.
///
/// Руки строятся только для несфолдивших игроков и только если пот
/// реально разыгрывается (претендентов больше одного).
pub fn settle<H: HandRanker>(
    seats: &mut [Option<Player>],
    board: &[Card],
    button: SeatIndex,
    dead_chips: &[Chips],
    ranker: &H,
) -> (Vec<SidePot>, Vec<PotAward>) {
    let contesting: Vec<(SeatIndex, Chips)> = seats
        .iter()
        .flatten()
        .filter(|p| p.is_contesting())
        .map(|p| (p.seat, p.chips_in_pot))
        .collect();

    let contributions: Vec<Chips> = seats
        .iter()
        .flatten()
        .map(|p| p.chips_in_pot)
        .chain(dead_chips.iter().copied())
        .collect();

    let pots = compute_side_pots(&contesting, &contributions);

    let mut strengths: HashMap<SeatIndex, H::Strength> = HashMap::new();
    let mut awards = Vec::new();

    for (pot_idx, pot) in pots.iter().enumerate() {
        let winners = if pot.eligible_seats.len() == 1 {
            pot.eligible_seats.clone()
        } else {
            let ranked: Vec<(SeatIndex, H::Strength)> = pot
                .eligible_seats
                .iter()
                .filter_map(|&seat| {
                    let player = seats[seat as usize].as_ref()?;
                    let strength = strengths
                        .entry(seat)
                        .or_insert_with(|| {
                            let mut cards = player.cards.clone();
                            cards.extend_from_slice(board);
                            ranker.strength(&cards)
                        })
                        .clone();
                    Some((seat, strength))
                })
                .collect();
            pick_winners(&ranked)
        };

        let mut ordered = winners;
        ordered.sort_by_key(|&seat| distance_from_button(seats, button, seat));

        for (seat, amount) in split_pot(pot.amount, &ordered) {
            if let Some(p) = seats[seat as usize].as_mut() {
                p.chips += amount;
                awards.push(PotAward {
                    pot: pot_idx,
                    seat,
                    player_id: p.id.clone(),
                    amount,
                });
            }
        }
    }

    (pots, awards)
}
