//! Общие утилиты интеграционных тестов: детерминированные дилер и ранжировщик.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use poker_table::domain::card::{parse_cards, Card};
use poker_table::domain::chips::Chips;
use poker_table::domain::deck::Deck;
use poker_table::domain::player::Player;
use poker_table::domain::table::{LimitType, Stakes, TableOptions, Variant};
use poker_table::domain::SeatIndex;
use poker_table::engine::{Dealer, HandRanker, Table, TableManager};
use poker_table::eval::BestHandRanker;
use poker_table::infra::{DeterministicRng, ShuffledDealer};

/// Дилер с заранее заданными колодами: по одной на раздачу, карты идут
/// в порядке списка. Когда список кончился: неперемешанная колода.
#[derive(Debug, Default)]
pub struct ScriptedDealer {
    decks: VecDeque<Vec<Card>>,
}

impl ScriptedDealer {
    pub fn new(decks: Vec<Vec<Card>>) -> Self {
        Self {
            decks: decks.into(),
        }
    }
}

impl Dealer for ScriptedDealer {
    type Deck = Deck;

    fn deck(&mut self) -> Deck {
        match self.decks.pop_front() {
            Some(order) => Deck::stacked(order),
            None => Deck::standard_52(),
        }
    }
}

/// Ранжировщик "по карте": сила руки: максимум весов её карт.
/// Карты без веса (борд) силу не добавляют.
#[derive(Debug, Default)]
pub struct FixedRanker {
    weights: HashMap<Card, u32>,
}

impl FixedRanker {
    pub fn new(weights: &[(&str, u32)]) -> Self {
        let weights = weights
            .iter()
            .flat_map(|(s, w)| cards(s).into_iter().map(move |c| (c, *w)))
            .collect();
        Self { weights }
    }
}

impl HandRanker for FixedRanker {
    type Strength = u32;

    fn strength(&self, cards: &[Card]) -> u32 {
        cards
            .iter()
            .filter_map(|c| self.weights.get(c))
            .copied()
            .max()
            .unwrap_or(0)
    }
}

pub type ScriptedTable = Table<ScriptedDealer, FixedRanker>;
pub type SeededTable = Table<ShuffledDealer<DeterministicRng>, BestHandRanker>;
pub type SeededManager = TableManager<ShuffledDealer<DeterministicRng>, BestHandRanker>;

/// Утилита: карты из строки вида "As Kd 2c".
pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("корректная запись карт")
}

/// Утилита: колода из кусков (карманные по местам, потом борд).
pub fn deck_of(parts: &[&str]) -> Vec<Card> {
    parts.iter().flat_map(|p| cards(p)).collect()
}

/// 1/2 безлимит, бай-ин 100.
pub fn options() -> TableOptions {
    TableOptions::default()
}

pub fn options_with(limit: LimitType, small: u64, big: u64, ante: u64, buy_in: u64) -> TableOptions {
    TableOptions {
        buy_in: Chips(buy_in),
        variant: Variant::TexasHoldem,
        stakes: Stakes::new(Chips(small), Chips(big), Chips(ante)),
        limit,
    }
}

/// Стол a/b/c на трёх местах с RNG от seed.
pub fn seeded_table(seed: u64) -> SeededTable {
    Table::new(
        ShuffledDealer::new(DeterministicRng::from_seed(seed)),
        BestHandRanker,
        options(),
        3,
        &["a", "b", "c"],
    )
    .expect("стол создаётся")
}

/// Стол со своими стеками и сценарием колод.
pub fn scripted_table(
    options: TableOptions,
    seat_count: usize,
    stacks: &[(&str, u64)],
    decks: Vec<Vec<Card>>,
    ranker: FixedRanker,
) -> ScriptedTable {
    let players = stacks
        .iter()
        .enumerate()
        .map(|(i, (id, chips))| (i as SeatIndex, Player::new(*id, Chips(*chips))));
    Table::with_players(ScriptedDealer::new(decks), ranker, options, seat_count, players)
        .expect("стол создаётся")
}

/// Фишки всех мест по порядку (пустое место: None).
pub fn stacks<D: Dealer, H: HandRanker>(table: &Table<D, H>) -> Vec<Option<u64>> {
    table
        .seats()
        .iter()
        .map(|s| s.as_ref().map(|p| p.chips.0))
        .collect()
}

/// Все фишки стола: стеки + вклады + мёртвые фишки ушедших.
pub fn money_on_table<D: Dealer, H: HandRanker>(table: &Table<D, H>) -> Chips {
    table.state().chips_on_table() + table.dead_chips()
}
