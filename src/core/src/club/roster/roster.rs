use crate::club::{Player, PlayerOrdering};
use log::debug;
use std::ops::Index;
use std::rc::Rc;

/// Ordered list of shared players.
///
/// The same `Rc<Player>` may sit in several rosters at once; membership is by
/// identity, never by field equality.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    players: Vec<Rc<Player>>,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            players: Vec::new(),
        }
    }

    /// No size limit; capping a squad is left to the caller.
    pub fn add(&mut self, player: Rc<Player>) {
        self.players.push(player);
    }

    /// Out-of-range indices leave the roster untouched and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Rc<Player>> {
        if index < self.players.len() {
            Some(self.players.remove(index))
        } else {
            debug!(
                "remove_at ignored: index {} out of range for {} players",
                index,
                self.players.len()
            );
            None
        }
    }

    pub fn contains(&self, player: &Rc<Player>) -> bool {
        self.players.iter().any(|p| Rc::ptr_eq(p, player))
    }

    pub fn sort_by(&mut self, ordering: &PlayerOrdering) {
        self.players.sort_by(|a, b| ordering.compare(a, b));
    }

    pub fn list_indexed(&self) -> impl Iterator<Item = (usize, String)> + '_ {
        self.players
            .iter()
            .enumerate()
            .map(|(idx, player)| (idx, player.to_string()))
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Player>> {
        self.players.get(index)
    }

    pub fn players(&self) -> impl Iterator<Item = &Rc<Player>> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Index<usize> for Roster {
    type Output = Player;

    fn index(&self, index: usize) -> &Self::Output {
        &self.players[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerPositionType, PlayerSkills};
    use crate::shared::CurrencyValue;

    fn player(name: &str, value: f64, skills: PlayerSkills) -> Rc<Player> {
        Rc::new(
            Player::builder()
                .name(name)
                .position(PlayerPositionType::Striker)
                .market_value(CurrencyValue::eur(value))
                .skills(skills)
                .build()
                .unwrap(),
        )
    }

    fn seeded() -> Roster {
        let mut roster = Roster::new();
        roster.add(player("Salah", 90.0, PlayerSkills::new(93, 85, 88, 90)));
        roster.add(player("Mbappe", 180.0, PlayerSkills::new(98, 85, 90, 92)));
        roster.add(player("Courtois", 45.0, PlayerSkills::new(60, 90, 70, 65)));
        roster.add(player("Haaland", 170.0, PlayerSkills::new(90, 88, 85, 96)));
        roster
    }

    fn names(roster: &Roster) -> Vec<String> {
        roster.players().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut roster = seeded();
        roster.add(player("Messi", 50.0, PlayerSkills::new(78, 80, 98, 85)));

        assert_eq!(roster.len(), 5);
        assert_eq!(roster[4].name(), "Messi");
    }

    #[test]
    fn test_add_has_no_size_limit() {
        let mut roster = Roster::new();
        for i in 0..11 {
            roster.add(player(&format!("Player {}", i), i as f64, PlayerSkills::default()));
        }

        assert_eq!(roster.len(), 11);
    }

    #[test]
    fn test_remove_at_shifts_following_entries() {
        let mut roster = seeded();
        let removed = roster.remove_at(1);

        assert_eq!(removed.map(|p| p.name().to_string()).as_deref(), Some("Mbappe"));
        assert_eq!(names(&roster), vec!["Salah", "Courtois", "Haaland"]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut roster = seeded();
        let before: Vec<Rc<Player>> = roster.players().cloned().collect();

        assert!(roster.remove_at(roster.len()).is_none());
        assert!(roster.remove_at(usize::MAX).is_none());

        assert_eq!(roster.len(), before.len());
        assert!(roster.players().zip(before.iter()).all(|(a, b)| Rc::ptr_eq(a, b)));
    }

    #[test]
    fn test_remove_at_on_empty_roster() {
        let mut roster = Roster::new();
        assert!(roster.remove_at(0).is_none());
        assert!(roster.is_empty());
    }

    #[test]
    fn test_contains_is_by_identity() {
        let mut roster = Roster::new();
        let original = player("Salah", 90.0, PlayerSkills::new(93, 85, 88, 90));
        let twin = player("Salah", 90.0, PlayerSkills::new(93, 85, 88, 90));

        roster.add(Rc::clone(&original));

        assert!(roster.contains(&original));
        assert!(!roster.contains(&twin));
    }

    #[test]
    fn test_shared_player_survives_removal_from_other_roster() {
        let mut catalog = seeded();
        let mut squad = Roster::new();

        let selected = Rc::clone(catalog.get(0).unwrap());
        squad.add(Rc::clone(&selected));
        catalog.remove_at(0);

        assert!(!catalog.contains(&selected));
        assert!(squad.contains(&selected));
    }

    #[test]
    fn test_sort_by_value_ascending_then_descending_reverses() {
        let mut roster = seeded();

        roster.sort_by(&PlayerOrdering::by_value(true));
        let ascending = names(&roster);
        assert_eq!(ascending, vec!["Courtois", "Salah", "Haaland", "Mbappe"]);

        roster.sort_by(&PlayerOrdering::by_value(false));
        let mut descending = names(&roster);
        descending.reverse();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn test_sort_by_score_puts_highest_first() {
        let mut roster = seeded();
        roster.sort_by(&PlayerOrdering::by_score());

        assert_eq!(roster[0].name(), "Mbappe");
        assert!(roster
            .players()
            .collect::<Vec<_>>()
            .windows(2)
            .all(|w| w[0].score() >= w[1].score()));
    }

    #[test]
    fn test_sort_by_name_is_non_decreasing() {
        let mut roster = seeded();
        roster.add(player("De Bruyne", 90.0, PlayerSkills::new(75, 90, 95, 88)));
        roster.sort_by(&PlayerOrdering::by_name());

        assert_eq!(
            names(&roster),
            vec!["Courtois", "De Bruyne", "Haaland", "Mbappe", "Salah"]
        );
    }

    #[test]
    fn test_mbappe_haaland_scenario() {
        let mut roster = Roster::new();
        roster.add(player("Haaland", 170.0, PlayerSkills::new(90, 88, 85, 96)));
        roster.add(player("Mbappe", 180.0, PlayerSkills::new(98, 85, 90, 92)));

        roster.sort_by(&PlayerOrdering::by_value(false));
        assert_eq!(names(&roster), vec!["Mbappe", "Haaland"]);

        roster.sort_by(&PlayerOrdering::by_value(true));
        roster.sort_by(&PlayerOrdering::by_score());
        assert_eq!(names(&roster), vec!["Mbappe", "Haaland"]);
    }

    #[test]
    fn test_list_indexed_is_restartable_and_ordered() {
        let roster = seeded();

        let first: Vec<(usize, String)> = roster.list_indexed().collect();
        let second: Vec<(usize, String)> = roster.list_indexed().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert_eq!(first[1].0, 1);
        assert_eq!(first[1].1, roster[1].to_string());
        assert!(first[1].1.starts_with("Mbappe "));
    }

    #[test]
    fn test_list_indexed_empty() {
        assert_eq!(Roster::new().list_indexed().count(), 0);
    }

    fn amounts(roster: &Roster) -> Vec<f64> {
        roster.players().map(|p| p.market_value().amount).collect()
    }

    fn non_finite_roster() -> Roster {
        let mut roster = Roster::new();
        for i in 0..30 {
            let value = match i % 10 {
                4 => f64::INFINITY,
                7 => f64::NEG_INFINITY,
                _ if i % 3 == 0 => f64::NAN,
                _ => ((i * 37) % 23) as f64,
            };
            roster.add(player(&format!("Player {}", i), value, PlayerSkills::default()));
        }
        roster
    }

    #[test]
    fn test_sort_by_value_ascending_puts_nan_first() {
        let mut roster = non_finite_roster();
        let nan_count = amounts(&roster).iter().filter(|v| v.is_nan()).count();

        roster.sort_by(&PlayerOrdering::by_value(true));
        let sorted = amounts(&roster);

        assert_eq!(sorted.len(), 30);
        assert!(sorted[..nan_count].iter().all(|v| v.is_nan()));
        assert_eq!(sorted[nan_count], f64::NEG_INFINITY);
        assert!(sorted[nan_count..].windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorted[29], f64::INFINITY);
    }

    #[test]
    fn test_sort_by_value_descending_puts_nan_last() {
        let mut roster = non_finite_roster();
        let nan_count = amounts(&roster).iter().filter(|v| v.is_nan()).count();

        roster.sort_by(&PlayerOrdering::by_value(false));
        let sorted = amounts(&roster);
        let finite_end = sorted.len() - nan_count;

        assert_eq!(sorted[0], f64::INFINITY);
        assert!(sorted[..finite_end].windows(2).all(|w| w[0] >= w[1]));
        assert!(sorted[finite_end..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_sort_by_value_with_nan_keeps_other_entries_ordered() {
        let mut roster = Roster::new();
        for value in [180.0, 170.0, 90.0, 50.0, 90.0, 80.0, 45.0, f64::NAN] {
            roster.add(player("Player", value, PlayerSkills::default()));
        }

        roster.sort_by(&PlayerOrdering::by_value(true));
        let sorted = amounts(&roster);

        assert!(sorted[0].is_nan());
        assert_eq!(sorted[1..], [45.0, 50.0, 80.0, 90.0, 90.0, 170.0, 180.0]);
    }
}
