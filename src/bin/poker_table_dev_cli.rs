// src/bin/poker_table_dev_cli.rs
//
// Использование:
//   poker_table_dev_cli [options.json|-] [seed] [hands]
//
// Логи через RUST_LOG, например RUST_LOG=poker_table=debug.

use std::env;
use std::process;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use poker_table::domain::chips::Chips;
use poker_table::domain::table::{Status, TableOptions};
use poker_table::engine::{Action, ActionKind};
use poker_table::eval::BestHandRanker;
use poker_table::infra::{load_options, DeterministicRng, ShuffledDealer};
use poker_table::StandardTable;

const PLAYERS: [&str; 4] = ["alice", "bob", "carol", "dave"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let options = match args.first().map(String::as_str) {
        None | Some("-") => TableOptions::default(),
        Some(path) => match load_options(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("[CLI] {e}");
                process::exit(2);
            }
        },
    };
    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let hands: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);

    println!("poker_table_dev_cli: seed={seed}, раздач={hands}, опции={options:?}");

    let dealer = ShuffledDealer::new(DeterministicRng::from_seed(seed));
    let mut table: StandardTable<DeterministicRng> =
        match StandardTable::new(dealer, BestHandRanker, options, PLAYERS.len(), &PLAYERS) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("[CLI] не удалось создать стол: {e}");
                process::exit(2);
            }
        };

    let mut chooser = StdRng::seed_from_u64(seed ^ 0x5eed);
    let expected_total = table.state().chips_on_table();
    let mut last_reported = 0;

    while table.status() == Status::Dealing && table.hand_number() <= hands {
        let legal = table.legal_actions();
        if legal.is_empty() {
            break;
        }
        let kind = legal[chooser.gen_range(0..legal.len())];
        let action = random_action(kind, &mut chooser, options.stakes.big_blind);

        if let Err(e) = table.act(action) {
            eprintln!("[CLI] действие {action} отклонено: {e}");
            process::exit(1);
        }

        let total = table.state().chips_on_table() + table.dead_chips();
        if total != expected_total {
            eprintln!("[CLI] нарушен баланс фишек: было {expected_total}, стало {total}");
            process::exit(1);
        }

        if let Some(settlement) = table.last_settlement() {
            if settlement.hand_number != last_reported {
                last_reported = settlement.hand_number;
                print_settlement(&table);
            }
        }
    }

    println!();
    println!("================ ИТОГ =================");
    for p in table.seats().iter().flatten() {
        println!("  seat {} {:>6}: {}", p.seat, p.id, p.total_chips());
    }
    println!("[CLI] статус стола: {:?}, сыграно раздач: {}", table.status(), last_reported);
}

fn random_action(kind: ActionKind, rng: &mut StdRng, big_blind: Chips) -> Action {
    let size = Chips(big_blind.0 * rng.gen_range(1..=4));
    match kind {
        ActionKind::Fold => Action::Fold,
        ActionKind::Check => Action::Check,
        ActionKind::Call => Action::Call,
        ActionKind::Bet => Action::Bet(size),
        ActionKind::Raise => Action::Raise(size),
        ActionKind::AllIn => Action::AllIn,
    }
}

fn print_settlement(table: &StandardTable<DeterministicRng>) {
    let Some(s) = table.last_settlement() else {
        return;
    };
    let board: Vec<String> = s.board.iter().map(|c| c.to_string()).collect();
    println!();
    println!("---- раздача #{} | борд [{}] ----", s.hand_number, board.join(" "));
    for (i, pot) in s.pots.iter().enumerate() {
        println!("  пот {i}: {} (претенденты {:?})", pot.amount, pot.eligible_seats);
    }
    for a in &s.awards {
        println!("  -> seat {} ({}) получает {}", a.seat, a.player_id, a.amount);
    }
}
