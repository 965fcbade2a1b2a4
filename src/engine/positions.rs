use crate::domain::player::Player;
use crate::domain::SeatIndex;

/// Сколько мест занято.
pub fn occupied_count(seats: &[Option<Player>]) -> usize {
    seats.iter().filter(|s| s.is_some()).count()
}

/// Следующее занятое место по кругу, начиная сразу после `from`.
/// `from` само может быть найдено только после полного круга.
pub fn next_seat(seats: &[Option<Player>], from: SeatIndex) -> Option<SeatIndex> {
    next_seat_where(seats, from, |_| true)
}

/// Следующее по кругу занятое место, игрок которого удовлетворяет `pred`.
pub fn next_seat_where<F>(seats: &[Option<Player>], from: SeatIndex, pred: F) -> Option<SeatIndex>
where
    F: Fn(&Player) -> bool,
{
    let max = seats.len();
    if max == 0 {
        return None;
    }

    let mut idx = from as usize % max;
    for _ in 0..max {
        idx = (idx + 1) % max;
        if let Some(p) = seats[idx].as_ref() {
            if pred(p) {
                return Some(idx as SeatIndex);
            }
        }
    }

    None
}

/// Кто ходит следующим после `from`: первый по кругу игрок, который
/// ещё не действовал в этом раунде, не в all-in и не сфолдил.
///
/// Проверяется не больше `occupied - 1` мест (сам `from` не рассматривается).
/// `None`: раунд ставок закрыт.
pub fn next_to_act(seats: &[Option<Player>], from: SeatIndex) -> Option<SeatIndex> {
    let hops = occupied_count(seats).saturating_sub(1);
    let mut seat = from;

    for _ in 0..hops {
        seat = next_seat(seats, seat)?;
        if let Some(p) = seats[seat as usize].as_ref() {
            if !p.acted && p.can_act() {
                return Some(seat);
            }
        }
    }

    None
}

/// Расстояние (в занятых местах) от кнопки до `seat`.
/// Сама кнопка: дальше всех: полный круг.
pub fn distance_from_button(seats: &[Option<Player>], button: SeatIndex, seat: SeatIndex) -> usize {
    let occupied = occupied_count(seats);
    let mut current = button;

    for dist in 1..=occupied {
        match next_seat(seats, current) {
            Some(next) if next == seat => return dist,
            Some(next) => current = next,
            None => break,
        }
    }

    occupied
}
