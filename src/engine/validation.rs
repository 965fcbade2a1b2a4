use crate::domain::chips::Chips;
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;

/// Допустимые действия игрока, который должен доплатить `owed` при стеке `chips`.
///
/// - нечего доплачивать → fold / check / bet / all-in;
/// - не хватает на полный колл → fold / call (колл будет all-in на остаток);
/// - иначе → fold / call / raise / all-in.
pub fn legal_actions(owed: Chips, chips: Chips) -> Vec<ActionKind> {
    if owed.is_zero() {
        vec![ActionKind::Fold, ActionKind::Check, ActionKind::Bet, ActionKind::AllIn]
    } else if owed > chips {
        vec![ActionKind::Fold, ActionKind::Call]
    } else {
        vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise, ActionKind::AllIn]
    }
}

/// Проверка, может ли игрок выполнить это действие. Ничего не меняет.
pub fn validate_action(owed: Chips, chips: Chips, action: &Action) -> Result<(), EngineError> {
    let kind = action.kind();
    if legal_actions(owed, chips).contains(&kind) {
        Ok(())
    } else {
        Err(EngineError::IllegalAction(kind))
    }
}
