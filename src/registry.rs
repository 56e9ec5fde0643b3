//! Process-wide match registry.
//!
//! Matches live in a sharded map from ID to an individually locked match.
//! A request clones the match handle out of the map, releases the shard, and
//! then locks only that match: operations on one match are serialized while
//! different matches never wait on each other.

use broadside_rules::{
    Coordinate, FireOutcome, Match, MatchError, MatchId, MatchRules, MatchSummary, MatchView,
    PlayerId, Ship,
};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

type MatchHandle = Arc<Mutex<Match>>;

/// Owns every match for the lifetime of the process.
///
/// Cloning is cheap; clones share the same matches.
#[derive(Debug, Clone)]
pub struct MatchRegistry {
    matches: Arc<DashMap<MatchId, MatchHandle>>,
    rules: MatchRules,
}

fn lock(handle: &MatchHandle) -> MutexGuard<'_, Match> {
    // Transitions validate before mutating, so a poisoned match is still consistent.
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MatchRegistry {
    /// Creates an empty registry whose matches use `rules`.
    #[instrument(skip(rules))]
    pub fn new(rules: MatchRules) -> Self {
        info!(?rules, "Creating match registry");
        Self {
            matches: Arc::new(DashMap::new()),
            rules,
        }
    }

    /// Rules applied to newly created matches.
    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True if no match has been created.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Allocates a new empty match and returns its ID.
    #[instrument(skip(self))]
    pub fn create_match(&self) -> MatchId {
        loop {
            let id = MatchId::random();
            match self.matches.entry(id) {
                Entry::Occupied(_) => {
                    warn!(match_id = %id, "Match ID collision, retrying");
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(Mutex::new(Match::new(id, self.rules.clone()))));
                    info!(match_id = %id, total = self.matches.len(), "Created match");
                    return id;
                }
            }
        }
    }

    fn handle(&self, id: MatchId) -> Result<MatchHandle, MatchError> {
        self.matches
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                debug!(match_id = %id, "Match not found");
                MatchError::MatchNotFound(id)
            })
    }

    /// Runs `f` with shared access to one match.
    pub fn with_match<R>(&self, id: MatchId, f: impl FnOnce(&Match) -> R) -> Result<R, MatchError> {
        let handle = self.handle(id)?;
        let game = lock(&handle);
        Ok(f(&*game))
    }

    /// Runs `f` with exclusive access to one match.
    pub fn with_match_mut<R>(
        &self,
        id: MatchId,
        f: impl FnOnce(&mut Match) -> Result<R, MatchError>,
    ) -> Result<R, MatchError> {
        let handle = self.handle(id)?;
        let mut game = lock(&handle);
        f(&mut *game)
    }

    /// Snapshot of a match, including both fleets unredacted.
    #[instrument(skip(self))]
    pub fn get_match(&self, id: MatchId) -> Result<Match, MatchError> {
        self.with_match(id, Match::clone)
    }

    /// Summaries of every match, ordered by ID.
    #[instrument(skip(self))]
    pub fn list_matches(&self) -> Vec<MatchSummary> {
        let handles: Vec<MatchHandle> = self
            .matches
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        let mut summaries: Vec<MatchSummary> =
            handles.iter().map(|handle| lock(handle).summary()).collect();
        summaries.sort_by_key(|s| s.id);
        info!(count = summaries.len(), "Listed matches");
        summaries
    }

    /// Adds a player to a match.
    #[instrument(skip(self))]
    pub fn join(&self, id: MatchId, player_name: &str) -> Result<PlayerId, MatchError> {
        self.with_match_mut(id, |game| game.join(player_name))
    }

    /// Replaces a player's fleet.
    #[instrument(skip(self, ships), fields(ships = ships.len()))]
    pub fn place_fleet(
        &self,
        id: MatchId,
        player_id: PlayerId,
        ships: Vec<Ship>,
    ) -> Result<(), MatchError> {
        self.with_match_mut(id, |game| game.place_fleet(player_id, ships))
    }

    /// Fires one shot on behalf of `player_id`.
    #[instrument(skip(self))]
    pub fn fire(
        &self,
        id: MatchId,
        player_id: PlayerId,
        target: Coordinate,
    ) -> Result<FireOutcome, MatchError> {
        self.with_match_mut(id, |game| game.fire(player_id, target))
    }

    /// Projection of a match for `viewer`, or for a spectator.
    #[instrument(skip(self))]
    pub fn view(&self, id: MatchId, viewer: Option<PlayerId>) -> Result<MatchView, MatchError> {
        self.with_match(id, |game| game.view(viewer))?
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new(MatchRules::default())
    }
}
