use shared::{TournamentDto, TournamentStatus};

/// Snapshot held across an optimistic mutation: commit on server success,
/// revert to the exact pre-change value on failure.
#[derive(Debug, Clone)]
pub struct Tentative<T: Clone> {
    snapshot: T,
}

impl<T: Clone> Tentative<T> {
    pub fn capture(value: &T) -> Self {
        Self {
            snapshot: value.clone(),
        }
    }

    /// Server confirmed; the snapshot is no longer needed.
    pub fn commit(self) {}

    /// Server rejected; hand back the pre-change value.
    pub fn revert(self) -> T {
        self.snapshot
    }
}

/// Pure rewrite for the tournament status toggle: the target flips to the
/// opposite of its current status, and when that new status is Active every
/// other tournament is marked Inactive, mirroring the backend's
/// one-active-at-a-time convention. Returns `None` when the id is not in the
/// list (callers no-op).
pub fn apply_status_toggle(
    tournaments: &[TournamentDto],
    id: &str,
) -> Option<(Vec<TournamentDto>, TournamentStatus)> {
    let target = tournaments.iter().find(|t| t.id == id)?;
    let new_status = target.status.opposite();

    let updated = tournaments
        .iter()
        .map(|t| {
            let mut t = t.clone();
            if t.id == id {
                t.status = new_status;
            } else if new_status.is_active() {
                t.status = TournamentStatus::Inactive;
            }
            t
        })
        .collect();

    Some((updated, new_status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tournament(id: &str, status: TournamentStatus) -> TournamentDto {
        TournamentDto {
            id: id.to_string(),
            name: format!("Tournament {}", id),
            description: None,
            status,
            games: vec![],
            teams: vec![],
            team_count: 0,
            player_count: 0,
        }
    }

    #[test]
    fn test_activation_leaves_exactly_one_active() {
        let list = vec![
            tournament("a", TournamentStatus::Active),
            tournament("b", TournamentStatus::Inactive),
            tournament("c", TournamentStatus::Inactive),
        ];

        let (updated, new_status) = apply_status_toggle(&list, "b").unwrap();

        assert_eq!(new_status, TournamentStatus::Active);
        let active: Vec<&str> = updated
            .iter()
            .filter(|t| t.status.is_active())
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(active, vec!["b"]);
    }

    #[test]
    fn test_deactivation_leaves_others_untouched() {
        let list = vec![
            tournament("a", TournamentStatus::Active),
            tournament("b", TournamentStatus::Inactive),
        ];

        let (updated, new_status) = apply_status_toggle(&list, "a").unwrap();

        assert_eq!(new_status, TournamentStatus::Inactive);
        assert!(updated.iter().all(|t| !t.status.is_active()));
        assert_eq!(updated[1], list[1]);
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let list = vec![tournament("a", TournamentStatus::Inactive)];
        assert!(apply_status_toggle(&list, "missing").is_none());
    }

    #[test]
    fn test_rollback_restores_pre_toggle_list_exactly() {
        let list = vec![
            tournament("a", TournamentStatus::Active),
            tournament("b", TournamentStatus::Inactive),
        ];

        let tentative = Tentative::capture(&list);
        let (optimistic, _) = apply_status_toggle(&list, "b").unwrap();
        assert_ne!(optimistic, list);

        // Request failed: the restored list matches the original in content.
        let restored = tentative.revert();
        assert_eq!(restored, list);
    }

    #[test]
    fn test_commit_consumes_snapshot() {
        let list = vec![tournament("a", TournamentStatus::Inactive)];
        let tentative = Tentative::capture(&list);
        tentative.commit();
    }
}
