//! Scoring resolver: visibility to point transfers.
//!
//! Every watched Runner gives up exactly 1.0 per turn, split evenly among
//! the opposing Hunters that can see it. Each Hunter collects
//! `1 / |watchers(R)|` from every Runner `R` in its sight. Squad-mates never
//! score against each other.

use tracing::trace;

use crate::agent::{AgentId, PointGain, Role};
use crate::field::Field;
use crate::roster::Roster;
use crate::visibility::{watched_runners, watching_hunters};

use super::Resolver;

/// Totals for one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreSummary {
    /// Runners seen by at least one opposing Hunter.
    pub watched_runners: usize,
    /// Hunters that saw at least one opposing Runner.
    pub scoring_hunters: usize,
    /// Total points moved from Runners to Hunters.
    pub transferred: f64,
}

/// Transfers points from watched Runners to the Hunters watching them.
///
/// # Example
///
/// ```
/// use sightline_core::agent::Role;
/// use sightline_core::config::{AgentConfig, SquadConfig};
/// use sightline_core::field::Field;
/// use sightline_core::resolver::{Resolver, ScoringResolver};
/// use sightline_core::roster::Roster;
///
/// let mut roster = Roster::from_squads(&[
///     SquadConfig::new("a").with_agent(AgentConfig::new("h", Role::Hunter)),
///     SquadConfig::new("b").with_agent(AgentConfig::new("r", Role::Runner)),
/// ]);
///
/// let summary = ScoringResolver.resolve(&mut roster, &Field::default());
///
/// assert_eq!(summary.transferred, 1.0);
/// assert_eq!(roster.agents()[0].point(), 1.0);
/// assert_eq!(roster.agents()[1].point(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringResolver;

impl Resolver for ScoringResolver {
    type Report = ScoreSummary;

    fn resolve(&self, roster: &mut Roster, field: &Field) -> ScoreSummary {
        let count = roster.len();

        // Hunters: captured Runners. Runners: watching Hunters.
        let sight: Vec<Vec<AgentId>> = roster
            .agents()
            .iter()
            .map(|agent| match agent.role() {
                Role::Hunter => watched_runners(roster, field, agent.id()),
                Role::Runner => watching_hunters(roster, field, agent.id()),
            })
            .collect();

        let mut deltas = vec![0.0; count];
        let mut ledgers: Vec<Vec<PointGain>> = vec![Vec::new(); count];
        let mut summary = ScoreSummary::default();

        for (idx, agent) in roster.agents().iter().enumerate() {
            let seen = &sight[idx];
            if seen.is_empty() {
                continue;
            }

            match agent.role() {
                Role::Hunter => {
                    summary.scoring_hunters += 1;
                    for &runner in seen {
                        let watchers = sight.get(runner.index()).map_or(0, Vec::len);
                        if watchers == 0 {
                            continue;
                        }
                        #[allow(clippy::cast_precision_loss)]
                        let gain = 1.0 / watchers as f64;
                        deltas[idx] += gain;
                        ledgers[idx].push(PointGain::new(runner, gain));
                        trace!(hunter = %agent.id(), %runner, gain, "point transfer");
                    }
                }
                Role::Runner => {
                    summary.watched_runners += 1;
                    summary.transferred += 1.0;
                    deltas[idx] = -1.0;
                    #[allow(clippy::cast_precision_loss)]
                    let each = -1.0 / seen.len() as f64;
                    ledgers[idx].extend(seen.iter().map(|&hunter| PointGain::new(hunter, each)));
                }
            }
        }

        roster.apply_scores(&deltas, ledgers);
        summary
    }
}
