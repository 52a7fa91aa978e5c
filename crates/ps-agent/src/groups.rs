//! Friend groups: an immutable partition of the population.
//!
//! Groups live in an arena indexed by [`GroupId`]; agents refer to their
//! group by id.  Each group's member list includes the agent itself, so
//! "strangers" are simply neighbors outside the member list.
//!
//! Membership never changes after construction.  Removed agents stay listed
//! in their group; consumers check liveness against the space.

use ps_core::{AgentId, GroupId, SimRng};

use crate::{AgentError, AgentResult};

/// Arena of friend groups plus the reverse `AgentId → GroupId` map.
#[derive(Clone, Debug, Default)]
pub struct FriendGroups {
    groups:     Vec<Vec<AgentId>>,
    membership: Vec<GroupId>,
}

impl FriendGroups {
    /// Randomly partition `agents` into groups.
    ///
    /// Repeats until the pool is empty: draw a size uniformly from
    /// `min_size..=max_size`, clamp it to what is left, sample that many
    /// agents without replacement.  Only the last group can fall below
    /// `min_size`.  Bounds are assumed valid (`1 <= min_size <= max_size`).
    pub fn partition(
        agents:   &[AgentId],
        min_size: usize,
        max_size: usize,
        rng:      &mut SimRng,
    ) -> Self {
        let mut pool: Vec<AgentId> = agents.to_vec();
        let mut groups = Vec::new();

        while !pool.is_empty() {
            let size = rng.gen_range(min_size..=max_size).min(pool.len());
            let picked = rng.sample_indices(pool.len(), size);

            let mut taken = vec![false; pool.len()];
            let group: Vec<AgentId> = picked
                .into_iter()
                .map(|i| {
                    taken[i] = true;
                    pool[i]
                })
                .collect();

            let mut i = 0;
            pool.retain(|_| {
                let keep = !taken[i];
                i += 1;
                keep
            });
            groups.push(group);
        }

        Self::index(groups)
    }

    /// Build from explicit member lists, e.g. for hand-made scenarios.
    ///
    /// Every agent in `0..population` must appear in exactly one group.
    pub fn from_groups(groups: Vec<Vec<AgentId>>, population: usize) -> AgentResult<Self> {
        let mut seen = vec![false; population];
        for &agent in groups.iter().flatten() {
            let slot = seen
                .get_mut(agent.index())
                .ok_or(AgentError::UnknownAgent(agent))?;
            if *slot {
                return Err(AgentError::DuplicateMember(agent));
            }
            *slot = true;
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(AgentError::Unassigned(AgentId(missing as u32)));
        }
        Ok(Self::index(groups))
    }

    fn index(groups: Vec<Vec<AgentId>>) -> Self {
        let population = groups
            .iter()
            .flatten()
            .map(|a| a.index() + 1)
            .max()
            .unwrap_or(0);
        let mut membership = vec![GroupId::INVALID; population];
        for (g, members) in groups.iter().enumerate() {
            for &agent in members {
                membership[agent.index()] = GroupId(g as u32);
            }
        }
        Self { groups, membership }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Members of `group`, in the order they were drawn.
    pub fn members(&self, group: GroupId) -> &[AgentId] {
        self.groups.get(group.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Group of `agent`, or `GroupId::INVALID` if it was never assigned.
    pub fn group_of(&self, agent: AgentId) -> GroupId {
        self.membership.get(agent.index()).copied().unwrap_or(GroupId::INVALID)
    }

    /// Members of the group `agent` belongs to (including `agent`).
    pub fn friends_of(&self, agent: AgentId) -> &[AgentId] {
        self.members(self.group_of(agent))
    }

    /// `true` if both agents share a group.
    pub fn are_friends(&self, a: AgentId, b: AgentId) -> bool {
        let ga = self.group_of(a);
        ga != GroupId::INVALID && ga == self.group_of(b)
    }

    /// Iterator over `(GroupId, members)` in group order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &[AgentId])> + '_ {
        self.groups
            .iter()
            .enumerate()
            .map(|(g, m)| (GroupId(g as u32), m.as_slice()))
    }
}
