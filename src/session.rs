//! Pairing session: the single owner of tournament state.
//!
//! A presentation layer holds one [`PairingSession`] and routes every user
//! intent to one of its methods. Commands validate before they mutate, so
//! a failed command leaves the session exactly as it was.
//!
//! # Example
//!
//! ```
//! use golf_pairings::session::PairingSession;
//!
//! let mut session = PairingSession::with_seed(42);
//! session.add_player("Smith, John", "10.5").unwrap();
//! session.add_player("Doe, Jane", "5").unwrap();
//! session.add_player("Lee, Kim", "20").unwrap();
//! session.add_player("Ng, Pat", "+2").unwrap();
//!
//! session.group_players().unwrap();
//! let team = session.select_random_team().unwrap();
//! session.assign_team_to_hole(team.id, 3).unwrap();
//! assert_eq!(session.tee_sheet().len(), 1);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PairingError, PairingResult};
use crate::formation::{pick_all_random_teams, pick_random_team, DraftPick, DraftState};
use crate::grouping::partition;
use crate::import::{parse_roster, ImportReport};
use crate::models::{Groups, HoleAssignments, PairingState, Player, Settings, Team, TeamId};
use crate::scheduler::{assign_in_order, assign_shuffled, tee_sheet, PairingKpi, TeeTimeRow};
use crate::store::StateStore;

/// Owns the pairing state, the optional draft and the random source.
#[derive(Debug)]
pub struct PairingSession<R: Rng = StdRng> {
    state: PairingState,
    draft: Option<DraftState>,
    rng: R,
}

impl PairingSession<StdRng> {
    /// Creates an empty session seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an empty session with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for PairingSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PairingSession<R> {
    /// Creates an empty session with the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: PairingState::new(),
            draft: None,
            rng,
        }
    }

    /// Creates a session over existing state.
    pub fn from_state(state: PairingState, rng: R) -> Self {
        Self {
            state,
            draft: None,
            rng,
        }
    }

    /// Full state snapshot.
    pub fn state(&self) -> &PairingState {
        &self.state
    }

    /// Registered players.
    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    /// Live groups.
    pub fn groups(&self) -> &Groups {
        &self.state.groups
    }

    /// Complete teams.
    pub fn teams(&self) -> &[Team] {
        &self.state.teams
    }

    /// Looks up a team.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.state.teams.iter().find(|t| t.id == id)
    }

    /// Starting-hole assignments.
    pub fn hole_assignments(&self) -> &HoleAssignments {
        &self.state.hole_assignments
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// In-progress draft, if any.
    pub fn draft(&self) -> Option<&DraftState> {
        self.draft.as_ref()
    }

    /// Whether one more team can be formed from the live groups.
    pub fn can_form_team(&self) -> bool {
        self.state.groups.can_form_team()
    }

    /// Teams without a starting hole, in registry order.
    pub fn unassigned_teams(&self) -> Vec<TeamId> {
        self.state
            .teams
            .iter()
            .map(|t| t.id)
            .filter(|&id| !self.state.hole_assignments.is_assigned(id))
            .collect()
    }

    /// Tee sheet for the current assignments and settings.
    pub fn tee_sheet(&self) -> Vec<TeeTimeRow> {
        tee_sheet(&self.state.hole_assignments, &self.state.settings)
    }

    /// Balance and course-usage metrics.
    pub fn kpi(&self) -> PairingKpi {
        PairingKpi::calculate(
            &self.state.teams,
            &self.state.hole_assignments,
            &self.state.settings,
        )
    }

    /// Validates and registers a player.
    pub fn add_player(&mut self, name: &str, handicap_text: &str) -> PairingResult<Player> {
        let player = Player::parse(self.state.next_player_id(), name, handicap_text)?;
        log::info!("added {} ({})", player.name, player.handicap_display());
        self.state.players.push(player.clone());
        Ok(player)
    }

    /// Removes the player at `index`. Out-of-range indices are ignored.
    ///
    /// The player also leaves any live group, and any draft is discarded.
    pub fn remove_player(&mut self, index: usize) -> Option<Player> {
        if index >= self.state.players.len() {
            return None;
        }
        let player = self.state.players.remove(index);
        self.state.groups.remove_anywhere(player.id);
        self.discard_draft("player removed");
        log::info!("removed {}", player.name);
        Some(player)
    }

    /// Imports `Last,First,Handicap` lines. Valid lines are registered even
    /// when others fail.
    pub fn import_csv(&mut self, text: &str) -> ImportReport {
        let report = parse_roster(text, self.state.next_player_id());
        self.state.players.extend(report.players.iter().cloned());
        log::info!(
            "imported {} player(s), {} line(s) rejected",
            report.players.len(),
            report.errors.len()
        );
        report
    }

    /// Sorts the registry into quartile groups A..D.
    ///
    /// Existing teams, hole assignments and any draft are cleared.
    pub fn group_players(&mut self) -> PairingResult<&Groups> {
        let groups = partition(&self.state.players)?;

        self.state.groups = groups;
        self.state.teams.clear();
        self.state.hole_assignments.clear();
        self.discard_draft("players regrouped");
        log::info!("grouped {} players", self.state.players.len());
        Ok(&self.state.groups)
    }

    /// Forms one team with a random player from each group.
    pub fn select_random_team(&mut self) -> PairingResult<Team> {
        let team = pick_random_team(&mut self.state.groups, &self.state.teams, &mut self.rng)?;
        self.state.teams.push(team.clone());
        self.discard_draft("groups changed by random selection");
        log::info!("{} formed (total {:.1})", team.id, team.total_handicap);
        Ok(team)
    }

    /// Forms random teams until some group is empty. Returns the count.
    pub fn auto_select_all(&mut self) -> PairingResult<usize> {
        let formed =
            pick_all_random_teams(&mut self.state.groups, &mut self.state.teams, &mut self.rng)?;
        self.discard_draft("groups changed by auto selection");
        log::info!("auto-selected {formed} team(s)");
        Ok(formed)
    }

    /// Starts an interactive draft, replacing any draft in progress.
    pub fn start_draft(&mut self) -> PairingResult<&DraftState> {
        let draft = DraftState::start(
            &self.state.groups,
            &self.state.players,
            &self.state.teams,
            &self.state.settings,
        )?;
        Ok(self.draft.insert(draft))
    }

    /// Places the next drafted player.
    pub fn make_draft_pick(&mut self) -> PairingResult<DraftPick> {
        let draft = self
            .draft
            .as_mut()
            .ok_or_else(|| PairingError::state("No draft is in progress"))?;
        draft.make_pick(&mut self.rng)
    }

    /// Commits a completed draft to the team list.
    pub fn finalize_draft(&mut self) -> PairingResult<Vec<Team>> {
        let draft = self
            .draft
            .as_ref()
            .ok_or_else(|| PairingError::state("No draft is in progress"))?;

        let teams = draft.finalize(&mut self.state.groups, &self.state.teams)?;
        self.state.teams.extend(teams.iter().cloned());
        self.draft = None;
        Ok(teams)
    }

    /// Abandons the draft in progress. Returns whether one existed.
    pub fn cancel_draft(&mut self) -> bool {
        let existed = self.draft.take().is_some();
        if existed {
            log::info!("draft cancelled");
        }
        existed
    }

    /// Puts a team on a starting hole.
    pub fn assign_team_to_hole(&mut self, team_id: TeamId, hole: u8) -> PairingResult<()> {
        if self.team(team_id).is_none() {
            return Err(PairingError::not_found(format!("{team_id} does not exist")));
        }
        self.state.hole_assignments.assign(team_id, hole)?;
        log::info!("{team_id} assigned to hole {hole}");
        Ok(())
    }

    /// Takes a team off a starting hole.
    pub fn remove_team_from_hole(&mut self, team_id: TeamId, hole: u8) -> PairingResult<()> {
        self.state.hole_assignments.remove(team_id, hole)?;
        log::info!("{team_id} removed from hole {hole}");
        Ok(())
    }

    /// Reassigns all teams to holes in registry order. Returns the count placed.
    pub fn auto_assign_teams(&mut self) -> usize {
        let order = self.state.team_ids();
        let placed = assign_in_order(&mut self.state.hole_assignments, &order);
        log::info!("auto-assigned {placed} team(s)");
        placed
    }

    /// Reassigns all teams to holes in random order. Returns the count placed.
    pub fn randomize_team_assignments(&mut self) -> usize {
        let order = self.state.team_ids();
        let placed = assign_shuffled(&mut self.state.hole_assignments, &order, &mut self.rng);
        log::info!("randomly assigned {placed} team(s)");
        placed
    }

    /// Removes every hole assignment.
    pub fn clear_assignments(&mut self) {
        self.state.hole_assignments.clear();
    }

    /// Replaces the settings after validating them.
    pub fn update_settings(&mut self, settings: Settings) -> PairingResult<()> {
        settings.validate()?;
        self.state.settings = settings;
        Ok(())
    }

    /// Saves the whole state.
    pub fn save_to<S: StateStore + ?Sized>(&self, store: &mut S) -> PairingResult<()> {
        store.save(&self.state)?;
        log::info!(
            "saved {} players, {} teams",
            self.state.players.len(),
            self.state.teams.len()
        );
        Ok(())
    }

    /// Replaces the state with a saved one. On error nothing changes.
    pub fn load_from<S: StateStore + ?Sized>(&mut self, store: &S) -> PairingResult<()> {
        let state = store.load()?;
        self.state = state;
        self.discard_draft("state loaded");
        log::info!(
            "loaded {} players, {} teams",
            self.state.players.len(),
            self.state.teams.len()
        );
        Ok(())
    }

    /// Clears players, groups, teams and assignments; keeps settings.
    pub fn reset(&mut self) {
        let settings = std::mem::take(&mut self.state.settings);
        self.state = PairingState {
            settings,
            ..PairingState::default()
        };
        self.discard_draft("session reset");
    }

    fn discard_draft(&mut self, reason: &str) {
        if self.draft.take().is_some() {
            log::warn!("in-progress draft discarded: {reason}");
        }
    }
}
