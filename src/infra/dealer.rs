use crate::domain::deck::Deck;
use crate::engine::{Dealer, RandomSource};

/// Дилер по умолчанию: на каждую раздачу новая колода из 52 карт,
/// перемешанная своим RNG.
#[derive(Clone, Debug)]
pub struct ShuffledDealer<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> ShuffledDealer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> Dealer for ShuffledDealer<R> {
    type Deck = Deck;

    fn deck(&mut self) -> Deck {
        let mut deck = Deck::standard_52();
        self.rng.shuffle(&mut deck.cards);
        deck
    }
}
