use tracing::{debug, info, warn};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::{Round, Status, TableOptions, MAX_SEATS};
use crate::domain::SeatIndex;
use crate::engine::actions::{Action, ActionKind};
use crate::engine::betting::clamp_bet;
use crate::engine::errors::EngineError;
use crate::engine::positions::{next_seat_where, next_to_act};
use crate::engine::showdown::{self, Settlement};
use crate::engine::side_pots::{compute_side_pots, total_in_pots};
use crate::engine::validation::{legal_actions, validate_action};
use crate::engine::{CardSource, Dealer, HandRanker};
use crate::state::TableState;

/// Сколько раздач подряд может пройти без единого решения игроков
/// (все в all-in с блайндов), прежде чем стол встанет в `Waiting`.
pub const MAX_UNATTENDED_HANDS: u32 = 32;

/// Стол: места, колода, борд, очередь хода и автомат улиц.
///
/// Все изменения идут через `&mut self`, поэтому одновременно обрабатывается
/// не больше одного действия. Для нескольких потоков стол кладут под мьютекс
/// (см. `TableManager`).
pub struct Table<D: Dealer, H: HandRanker> {
    options: TableOptions,
    seats: Vec<Option<Player>>,
    dealer: D,
    ranker: H,
    /// Колода текущей раздачи. Заменяется на каждом префлопе.
    deck: Option<D::Deck>,
    /// Борд: 0 карт на префлопе, 5 на ривере.
    cards: Vec<Card>,
    active: Option<SeatIndex>,
    status: Status,
    round: Round,
    button: SeatIndex,
    /// Максимальный суммарный вклад за раздачу: столько "стоит" остаться в руке.
    cost: Chips,
    hand_number: u64,
    /// Вклады игроков, которые сфолдили и ушли из-за стола посреди раздачи.
    dead_chips: Vec<Chips>,
    last_settlement: Option<Settlement>,
}

impl<D: Dealer, H: HandRanker> Table<D, H> {
    /// Создать стол на `seat_count` мест и посадить `player_ids` по порядку
    /// на места 0, 1, 2… с бай-ином из опций.
    ///
    /// Если игроков двое или больше: сразу раздаётся первая рука.
    pub fn new<S: AsRef<str>>(
        dealer: D,
        ranker: H,
        options: TableOptions,
        seat_count: usize,
        player_ids: &[S],
    ) -> Result<Self, EngineError> {
        if player_ids.len() > seat_count {
            return Err(EngineError::TooManyPlayers);
        }
        let players = player_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (i as SeatIndex, Player::new(id.as_ref(), options.buy_in)));
        Self::with_players(dealer, ranker, options, seat_count, players)
    }

    /// Создать стол с заранее рассаженными игроками и их стеками
    /// (например, при восстановлении стола). Первая раздача: как в `new`.
    pub fn with_players(
        dealer: D,
        ranker: H,
        options: TableOptions,
        seat_count: usize,
        players: impl IntoIterator<Item = (SeatIndex, Player)>,
    ) -> Result<Self, EngineError> {
        options.validate()?;
        if seat_count == 0 || seat_count > MAX_SEATS {
            return Err(EngineError::InvalidSeatCount(seat_count));
        }

        let mut seats: Vec<Option<Player>> = vec![None; seat_count];
        for (seat, mut player) in players {
            let slot = seats
                .get_mut(seat as usize)
                .ok_or(EngineError::InvalidSeat(seat))?;
            if slot.is_some() {
                return Err(EngineError::SeatTaken(seat));
            }
            player.seat = seat;
            player.reset_for_hand();
            *slot = Some(player);
        }

        let mut table = Self {
            options,
            seats,
            dealer,
            ranker,
            deck: None,
            cards: Vec::new(),
            active: None,
            status: Status::Waiting,
            round: Round::PreFlop,
            button: 0,
            cost: Chips::ZERO,
            hand_number: 0,
            dead_chips: Vec::new(),
            last_settlement: None,
        };

        table.try_start();
        Ok(table)
    }

    //
    // ====================== РАССАДКА ======================
    //

    /// Посадить игрока на место `seat`.
    ///
    /// Во время раздачи новый игрок пропускает её и вступает со следующей.
    /// Если стол ждал игроков и их стало достаточно: начинается раздача.
    pub fn sit(&mut self, mut player: Player, seat: SeatIndex) -> Result<(), EngineError> {
        let slot = self
            .seats
            .get_mut(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))?;
        if slot.is_some() {
            return Err(EngineError::SeatTaken(seat));
        }

        player.seat = seat;
        if self.status == Status::Dealing {
            player.sit_out();
        }
        info!(seat, player = %player.id, chips = %player.chips, "игрок сел за стол");
        *slot = Some(player);

        self.try_start();
        Ok(())
    }

    /// Встать из-за стола. Возвращает игрока с его стеком.
    ///
    /// Во время раздачи можно уйти только сфолдив; уже внесённые фишки
    /// остаются в банке.
    pub fn stand(&mut self, seat: SeatIndex) -> Result<Player, EngineError> {
        self.ensure_not_in_hand(seat)?;

        let mut player = self.seats[seat as usize]
            .take()
            .ok_or(EngineError::SeatEmpty(seat))?;
        if !player.chips_in_pot.is_zero() {
            self.dead_chips.push(player.chips_in_pot);
            player.chips_in_pot = Chips::ZERO;
        }
        player.cards.clear();

        info!(seat, player = %player.id, chips = %player.chips, "игрок встал из-за стола");
        Ok(player)
    }

    /// Докупить фишки. Нельзя, пока игрок участвует в раздаче.
    pub fn top_up(&mut self, seat: SeatIndex, chips: Chips) -> Result<(), EngineError> {
        self.ensure_not_in_hand(seat)?;

        if let Some(player) = self.seats[seat as usize].as_mut() {
            player.chips += chips;
            info!(seat, player = %player.id, added = %chips, "докупка фишек");
        }

        self.try_start();
        Ok(())
    }

    fn ensure_not_in_hand(&self, seat: SeatIndex) -> Result<(), EngineError> {
        let player = self
            .seats
            .get(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))?
            .as_ref()
            .ok_or(EngineError::SeatEmpty(seat))?;

        if self.status == Status::Dealing && !player.folded {
            return Err(EngineError::PlayerInHand(seat));
        }
        Ok(())
    }

    //
    // ====================== ДЕЙСТВИЯ ======================
    //

    pub fn fold(&mut self) -> Result<(), EngineError> {
        self.act(Action::Fold)
    }

    pub fn check(&mut self) -> Result<(), EngineError> {
        self.act(Action::Check)
    }

    pub fn call(&mut self) -> Result<(), EngineError> {
        self.act(Action::Call)
    }

    pub fn bet(&mut self, chips: Chips) -> Result<(), EngineError> {
        self.act(Action::Bet(chips))
    }

    pub fn raise(&mut self, chips: Chips) -> Result<(), EngineError> {
        self.act(Action::Raise(chips))
    }

    pub fn all_in(&mut self) -> Result<(), EngineError> {
        self.act(Action::AllIn)
    }

    /// Действие от имени конкретного игрока: сначала проверяем, что сейчас его ход.
    pub fn act_as(&mut self, player_id: &str, action: Action) -> Result<(), EngineError> {
        let active = self.active().ok_or(EngineError::NoActivePlayer)?;
        if active.id != player_id {
            warn!(player = player_id, active = %active.id, "действие не в свою очередь");
            return Err(EngineError::NotPlayersTurn(player_id.to_string()));
        }
        self.act(action)
    }

    /// Применить действие активного игрока.
    ///
    /// Сначала валидация (стол не меняется при ошибке), потом движение фишек,
    /// потом передача хода / смена улицы / расчёт раздачи.
    pub fn act(&mut self, action: Action) -> Result<(), EngineError> {
        let seat = self.active.ok_or(EngineError::NoActivePlayer)?;
        let owed = self.owed();
        let chips = self.active().map(|p| p.chips).ok_or(EngineError::NoActivePlayer)?;

        if let Err(e) = validate_action(owed, chips, &action) {
            warn!(hand = self.hand_number, seat, %action, %owed, "отклонено недопустимое действие");
            return Err(e);
        }

        let bet_size = match action {
            Action::Bet(requested) | Action::Raise(requested) => clamp_bet(
                requested,
                self.options.limit,
                self.options.stakes.big_blind,
                self.round,
                self.pot_total(),
            ),
            _ => Chips::ZERO,
        };

        let Some(player) = self.seats[seat as usize].as_mut() else {
            return Err(EngineError::NoActivePlayer);
        };

        match action {
            Action::Fold => player.folded = true,
            Action::Check => {}
            Action::Call => {
                player.contribute(owed);
            }
            Action::Bet(_) | Action::Raise(_) => {
                player.contribute(owed);
                player.contribute(bet_size);
            }
            Action::AllIn => {
                player.contribute(owed);
                let rest = player.chips;
                player.contribute(rest);
            }
        }

        if action.is_aggressive() {
            self.reset_acted();
        }

        if let Some(player) = self.seats[seat as usize].as_mut() {
            player.acted = true;
            self.cost = self.cost.max(player.chips_in_pot);
            debug!(
                hand = self.hand_number,
                round = ?self.round,
                seat,
                player = %player.id,
                %action,
                %owed,
                in_pot = %player.chips_in_pot,
                cost = %self.cost,
                "действие принято"
            );
        }

        self.update(seat);
        Ok(())
    }

    //
    // ====================== ЧТЕНИЕ ======================
    //

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn seats(&self) -> &[Option<Player>] {
        &self.seats
    }

    pub fn active(&self) -> Option<&Player> {
        self.active.and_then(|s| self.seats[s as usize].as_ref())
    }

    pub fn active_seat(&self) -> Option<SeatIndex> {
        self.active
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn button(&self) -> SeatIndex {
        self.button
    }

    pub fn cost(&self) -> Chips {
        self.cost
    }

    pub fn board(&self) -> &[Card] {
        &self.cards
    }

    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    pub fn dead_chips(&self) -> Chips {
        self.dead_chips.iter().sum()
    }

    /// Итог последней рассчитанной раздачи.
    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }

    /// Сколько должен доплатить активный игрок (0, если никто не ходит).
    pub fn owed(&self) -> Chips {
        self.active()
            .map(|p| self.cost.saturating_sub(p.chips_in_pot))
            .unwrap_or(Chips::ZERO)
    }

    /// Допустимые действия активного игрока.
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        match self.active() {
            Some(p) => legal_actions(self.owed(), p.chips),
            None => Vec::new(),
        }
    }

    /// Все фишки в банке, посчитанные через разбиение на поты.
    pub fn pot_total(&self) -> Chips {
        let contesting: Vec<(SeatIndex, Chips)> = self
            .seats
            .iter()
            .flatten()
            .filter(|p| p.is_contesting())
            .map(|p| (p.seat, p.chips_in_pot))
            .collect();
        let contributions: Vec<Chips> = self
            .seats
            .iter()
            .flatten()
            .map(|p| p.chips_in_pot)
            .chain(self.dead_chips.iter().copied())
            .collect();
        total_in_pots(&compute_side_pots(&contesting, &contributions))
    }

    /// Снимок стола для сессионного слоя.
    pub fn state(&self) -> TableState {
        TableState {
            options: self.options,
            seats: self.seats.clone(),
            cards: self.cards.clone(),
            active: self.active,
            status: self.status,
            round: self.round,
            button: self.button,
            cost: self.cost,
            pot: self.seats.iter().flatten().map(|p| p.chips_in_pot).sum::<Chips>() + self.dead_chips(),
            hand_number: self.hand_number,
        }
    }

    //
    // ====================== АВТОМАТ УЛИЦ ======================
    //

    /// После принятого действия: передать ход или закрыть раунд ставок.
    /// Остался один претендент: раздача кончается сразу, без его хода.
    fn update(&mut self, from: SeatIndex) {
        if self.contesting_count() <= 1 {
            self.close_round();
            return;
        }
        if let Some(next) = next_to_act(&self.seats, from) {
            self.active = Some(next);
            return;
        }
        self.close_round();
    }

    /// Раунд ставок закрыт: следующая улица или расчёт и новая раздача.
    ///
    /// Если на новой улице ставить некому (все, кроме одного, в all-in),
    /// борд докручивается без ставок до шоудауна.
    fn close_round(&mut self) {
        let mut unattended = 0u32;

        loop {
            if self.contesting_count() <= 1 || self.round == Round::River {
                self.settle();
                self.round = Round::PreFlop;
                if unattended >= MAX_UNATTENDED_HANDS {
                    warn!(
                        hands = unattended,
                        "слишком много раздач без решений игроков, стол остановлен"
                    );
                    self.park();
                    return;
                }
            } else {
                self.round = self.round.next();
            }

            self.setup_round();

            if self.status == Status::Waiting || self.betting_open() {
                return;
            }
            if self.round == Round::PreFlop {
                unattended += 1;
            }
            debug!(hand = self.hand_number, round = ?self.round, "ставить некому, докручиваем борд");
        }
    }

    /// Подготовка улицы: сброс `acted`, раздача карт, первый ходящий.
    fn setup_round(&mut self) {
        self.reset_acted();

        match self.round {
            Round::PreFlop => self.start_hand(),
            Round::Flop | Round::Turn | Round::River => {
                let n = self.round.board_cards_dealt();
                if let Some(deck) = self.deck.as_mut() {
                    self.cards.extend(deck.pop_multi(n));
                }
                self.active = next_seat_where(&self.seats, self.button, Player::can_act);
                debug!(
                    hand = self.hand_number,
                    round = ?self.round,
                    board = %format_cards(&self.cards),
                    "открыт борд"
                );
            }
        }
    }

    /// Префлоп: кнопка, новая колода, карманные карты, анте и блайнды.
    fn start_hand(&mut self) {
        self.cards.clear();
        self.dead_chips.clear();

        for p in self.seats.iter_mut().flatten() {
            p.reset_for_hand();
            if p.chips.is_zero() {
                p.sit_out();
            }
        }

        let funded = self.seats.iter().flatten().filter(|p| !p.sitting_out).count();
        if funded < 2 {
            info!(funded, "недостаточно игроков с фишками, стол ждёт");
            self.park();
            return;
        }

        let in_hand = |p: &Player| !p.sitting_out;
        let Some(button) = next_seat_where(&self.seats, self.button, in_hand) else {
            self.park();
            return;
        };
        self.button = button;

        let (sb, bb) = if funded == 2 {
            (button, next_seat_where(&self.seats, button, in_hand).unwrap_or(button))
        } else {
            let sb = next_seat_where(&self.seats, button, in_hand).unwrap_or(button);
            (sb, next_seat_where(&self.seats, sb, in_hand).unwrap_or(sb))
        };

        let mut deck = self.dealer.deck();
        let stakes = self.options.stakes;
        for p in self.seats.iter_mut().flatten().filter(|p| !p.sitting_out) {
            p.cards = deck.pop_multi(2);
            p.contribute(stakes.ante);
        }
        self.deck = Some(deck);

        let sb_paid = self.seats[sb as usize]
            .as_mut()
            .map(|p| p.contribute(stakes.small_blind))
            .unwrap_or(Chips::ZERO);
        let bb_paid = self.seats[bb as usize]
            .as_mut()
            .map(|p| p.contribute(stakes.big_blind))
            .unwrap_or(Chips::ZERO);

        self.hand_number += 1;
        self.status = Status::Dealing;
        self.cost = stakes.ante + stakes.big_blind;
        self.active = next_seat_where(&self.seats, bb, Player::can_act);

        info!(
            hand = self.hand_number,
            button,
            small_blind = sb,
            big_blind = bb,
            %sb_paid,
            %bb_paid,
            players = funded,
            "новая раздача"
        );
    }

    /// Расчёт раздачи: поты, победители, выплаты.
    fn settle(&mut self) {
        let (pots, awards) = showdown::settle(
            &mut self.seats,
            &self.cards,
            self.button,
            &self.dead_chips,
            &self.ranker,
        );
        self.dead_chips.clear();

        for award in &awards {
            info!(
                hand = self.hand_number,
                pot = award.pot,
                seat = award.seat,
                player = %award.player_id,
                amount = %award.amount,
                "выплата банка"
            );
        }

        self.last_settlement = Some(Settlement {
            hand_number: self.hand_number,
            board: self.cards.clone(),
            pots,
            awards,
        });
    }

    /// Если стол ждал игроков и их уже хватает: начать раздачу.
    fn try_start(&mut self) {
        if self.status != Status::Waiting {
            return;
        }
        let funded = self.seats.iter().flatten().filter(|p| !p.chips.is_zero()).count();
        if funded < 2 {
            return;
        }

        self.round = Round::PreFlop;
        self.setup_round();
        if self.status == Status::Dealing && !self.betting_open() {
            self.close_round();
        }
    }

    /// Остановить стол: никто не в раздаче, ход ни у кого.
    fn park(&mut self) {
        for p in self.seats.iter_mut().flatten() {
            p.reset_for_hand();
        }
        self.cards.clear();
        self.deck = None;
        self.active = None;
        self.cost = Chips::ZERO;
        self.round = Round::PreFlop;
        self.status = Status::Waiting;
    }

    /// Возможны ли ещё ставки: хотя бы двое могут действовать,
    /// или один может и ему ещё есть что доплатить.
    fn betting_open(&self) -> bool {
        let actionable: Vec<&Player> = self.seats.iter().flatten().filter(|p| p.can_act()).collect();
        match actionable.as_slice() {
            [] => false,
            [only] => only.chips_in_pot < self.cost,
            _ => true,
        }
    }

    fn contesting_count(&self) -> usize {
        self.seats.iter().flatten().filter(|p| p.is_contesting()).count()
    }

    fn reset_acted(&mut self) {
        for p in self.seats.iter_mut().flatten() {
            p.acted = false;
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
