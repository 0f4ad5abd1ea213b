use std::collections::HashMap;

use crate::model::Fixture;

/// Handle for an in-flight refresh of one league.
///
/// Any token handed out by a later [`ScheduleStore::begin_refresh`] for the
/// same league makes this one stale; a stale commit is discarded, so when two
/// fetches for a league overlap, the one begun last wins regardless of which
/// response lands first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    league: String,
    generation: u64,
}

impl RefreshToken {
    pub fn league(&self) -> &str {
        &self.league
    }
}

/// In-memory schedule data for every league loaded so far.
///
/// Leagues iterate in the order they first received data. A successful
/// refresh replaces a league's list wholesale; failed or stale refreshes
/// leave the previous list untouched. The store is plain owned state: callers
/// decide where it lives and how it is shared.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    entries: Vec<(String, Vec<Fixture>)>,
    generations: HashMap<String, u64>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh for `league`, invalidating any earlier token for it.
    pub fn begin_refresh(&mut self, league: &str) -> RefreshToken {
        let generation = self.generations.entry(league.to_owned()).or_insert(0);
        *generation += 1;
        RefreshToken {
            league: league.to_owned(),
            generation: *generation,
        }
    }

    /// Store `fixtures` for the token's league unless a newer refresh has
    /// begun since the token was issued. Returns whether the data was
    /// applied.
    pub fn commit(&mut self, token: RefreshToken, fixtures: Vec<Fixture>) -> bool {
        if self.generations.get(&token.league) != Some(&token.generation) {
            return false;
        }
        self.replace(token.league, fixtures);
        true
    }

    /// Replace `league`'s fixtures unconditionally.
    pub fn set(&mut self, league: &str, fixtures: Vec<Fixture>) {
        let token = self.begin_refresh(league);
        self.commit(token, fixtures);
    }

    fn replace(&mut self, league: String, fixtures: Vec<Fixture>) {
        match self.entries.iter().position(|(name, _)| *name == league) {
            Some(i) => self.entries[i].1 = fixtures,
            None => self.entries.push((league, fixtures)),
        }
    }

    /// Fixtures for one league, if it has been loaded.
    pub fn get(&self, league: &str) -> Option<&[Fixture]> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == league)
            .map(|(_, fixtures)| fixtures.as_slice())
    }

    /// League identifiers in first-loaded order.
    pub fn leagues(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(league, fixtures)` pairs in first-loaded order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Fixture])> {
        self.entries
            .iter()
            .map(|(name, fixtures)| (name.as_str(), fixtures.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use itertools::Itertools;

    use super::*;

    fn fixture(home: &str) -> Fixture {
        Fixture {
            home: home.to_string(),
            away: "Opponent".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
            time: "18:00:00".parse().unwrap(),
        }
    }

    #[test]
    fn set_replaces_a_league_wholesale() {
        let mut store = ScheduleStore::new();
        store.set("Premier", vec![fixture("Team A"), fixture("Team B")]);
        store.set("Premier", vec![fixture("Team C")]);

        let fixtures = store.get("Premier").unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].home, "Team C");
    }

    #[test]
    fn leagues_keep_first_loaded_order_across_reloads() {
        let mut store = ScheduleStore::new();
        store.set("Premier", vec![fixture("Team A")]);
        store.set("Segunda", vec![fixture("Team B")]);
        store.set("Premier", vec![fixture("Team C")]);

        assert_eq!(store.leagues().collect_vec(), ["Premier", "Segunda"]);
    }

    #[test]
    fn replacing_one_league_leaves_the_others_alone() {
        let mut store = ScheduleStore::new();
        store.set("Premier", vec![fixture("Team A")]);
        store.set("Segunda", vec![fixture("Team B")]);
        store.set("Premier", vec![]);

        assert_eq!(store.get("Segunda").unwrap()[0].home, "Team B");
    }

    #[test]
    fn stale_commit_is_discarded() {
        let mut store = ScheduleStore::new();
        let first = store.begin_refresh("Premier");
        let second = store.begin_refresh("Premier");

        assert!(store.commit(second, vec![fixture("Fresh")]));
        assert!(!store.commit(first, vec![fixture("Stale")]));
        assert_eq!(store.get("Premier").unwrap()[0].home, "Fresh");
    }

    #[test]
    fn begin_without_commit_creates_no_entry() {
        let mut store = ScheduleStore::new();
        let _token = store.begin_refresh("Premier");

        assert!(store.is_empty());
        assert!(store.get("Premier").is_none());
    }

    #[test]
    fn token_reports_its_league() {
        let mut store = ScheduleStore::new();
        assert_eq!(store.begin_refresh("Premier").league(), "Premier");
    }
}
