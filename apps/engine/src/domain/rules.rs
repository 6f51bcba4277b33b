/// Number of tricks in a round, from the lives of the participants at round start.
///
/// A unique leader in lives does not set the pace: the count is the highest
/// value once one occurrence of the maximum is dropped. When the maximum is
/// shared, that is the maximum itself. Dead participants (0 lives) are ignored.
pub fn turns_for_round<I>(lives: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    let mut alive: Vec<u8> = lives.into_iter().filter(|&l| l > 0).collect();
    alive.sort_unstable_by(|a, b| b.cmp(a));
    match alive.as_slice() {
        [] => 0,
        [only] => *only,
        [_, second, ..] => *second,
    }
}

/// The "pé" rule: the last bidder may not make the bid total equal the trick count.
pub fn is_forbidden_pe_bid(existing_total: u32, bid: u8, turns: u8) -> bool {
    existing_total + bid as u32 == turns as u32
}
