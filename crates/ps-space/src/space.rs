//! Continuous position store and radius queries.
//!
//! # Data layout
//!
//! Positions are held twice:
//!
//! - `positions[agent]` — the canonical `Option<Vec2>`, `None` once the
//!   agent has been removed (or was never placed).
//! - an R-tree (via `rstar`) of `[x, y]` points keyed by `AgentId`, used to
//!   answer `neighbors_within` without scanning every agent.
//!
//! Both are updated together by `place`, `move_agent` and `remove`, which
//! are the only mutating operations.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use ps_core::{AgentId, Vec2};

use crate::{SpaceError, SpaceResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: a point plus the owning agent.
#[derive(Clone, Debug, PartialEq)]
struct AgentEntry {
    point: [f64; 2],
    id:    AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── ContinuousSpace ───────────────────────────────────────────────────────────

/// A rectangular arena holding the position of every live agent.
pub struct ContinuousSpace {
    width:     f64,
    height:    f64,
    torus:     bool,
    positions: Vec<Option<Vec2>>,
    index:     RTree<AgentEntry>,
}

impl ContinuousSpace {
    /// Create an empty `width × height` arena.
    ///
    /// `capacity` pre-sizes the position table; ids beyond it still work.
    /// Dimensions are assumed to have been validated by the caller
    /// (`ModelParams::validate`).
    pub fn new(width: f64, height: f64, torus: bool, capacity: usize) -> Self {
        Self {
            width,
            height,
            torus,
            positions: Vec::with_capacity(capacity),
            index:     RTree::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_torus(&self) -> bool {
        self.torus
    }

    /// Number of agents currently in the space.
    pub fn len(&self) -> usize {
        self.index.size()
    }

    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }

    /// Pin `pos` into `[0, width] × [0, height]` component-wise.
    #[inline]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x.max(0.0).min(self.width), pos.y.max(0.0).min(self.height))
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Current position of `agent`, or `None` if it is not in the space.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<Vec2> {
        self.positions.get(agent.index()).copied().flatten()
    }

    /// `true` if `agent` is currently placed.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.position(agent).is_some()
    }

    /// Every placed agent whose distance to `pos` is at most `radius`,
    /// sorted by id.
    ///
    /// An agent sitting exactly at `pos` is included; callers that query
    /// around an agent's own position must filter it out themselves.
    pub fn neighbors_within(&self, pos: Vec2, radius: f64) -> Vec<AgentId> {
        if radius < 0.0 || !radius.is_finite() {
            return Vec::new();
        }
        let r2 = radius * radius;

        let mut found: Vec<AgentId> = if self.torus {
            self.wrapped_images(pos, radius)
                .flat_map(|center| {
                    self.index
                        .locate_within_distance(center.as_array(), r2)
                        .map(|e| e.id)
                })
                .collect()
        } else {
            self.index
                .locate_within_distance(pos.as_array(), r2)
                .map(|e| e.id)
                .collect()
        };

        found.sort_unstable();
        found.dedup();
        found
    }

    /// Query centers for a wraparound search: `pos` shifted by every
    /// combination of `{-w, 0, +w} × {-h, 0, +h}` whose disc still touches
    /// the arena.
    fn wrapped_images(&self, pos: Vec2, radius: f64) -> impl Iterator<Item = Vec2> + '_ {
        let (w, h) = (self.width, self.height);
        [-w, 0.0, w]
            .into_iter()
            .flat_map(move |dx| [-h, 0.0, h].into_iter().map(move |dy| pos + Vec2::new(dx, dy)))
            .filter(move |c| {
                c.x >= -radius && c.x <= w + radius && c.y >= -radius && c.y <= h + radius
            })
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Put `agent` into the space at `pos` (clamped into the arena).
    ///
    /// Placing an agent that is already present relocates it.
    pub fn place(&mut self, agent: AgentId, pos: Vec2) -> SpaceResult<Vec2> {
        check_finite(agent, pos)?;
        if agent.index() >= self.positions.len() {
            self.positions.resize(agent.index() + 1, None);
        }
        self.detach(agent);
        let pos = self.clamp(pos);
        self.attach(agent, pos);
        Ok(pos)
    }

    /// Move `agent` to `pos`, clamped component-wise into the arena.
    ///
    /// Returns the stored position.  Out-of-range targets are pinned to the
    /// nearest wall, never wrapped.
    pub fn move_agent(&mut self, agent: AgentId, pos: Vec2) -> SpaceResult<Vec2> {
        check_finite(agent, pos)?;
        if !self.detach(agent) {
            return Err(SpaceError::NotPlaced(agent));
        }
        let pos = self.clamp(pos);
        self.attach(agent, pos);
        Ok(pos)
    }

    /// Take `agent` out of the space.  Returns `false` if it was not present.
    pub fn remove(&mut self, agent: AgentId) -> bool {
        self.detach(agent)
    }

    fn attach(&mut self, agent: AgentId, pos: Vec2) {
        self.positions[agent.index()] = Some(pos);
        self.index.insert(AgentEntry { point: pos.as_array(), id: agent });
    }

    fn detach(&mut self, agent: AgentId) -> bool {
        let Some(slot) = self.positions.get_mut(agent.index()) else {
            return false;
        };
        let Some(old) = slot.take() else {
            return false;
        };
        let removed = self.index.remove(&AgentEntry { point: old.as_array(), id: agent });
        debug_assert!(removed.is_some(), "index out of sync for {agent}");
        true
    }
}

fn check_finite(agent: AgentId, pos: Vec2) -> SpaceResult<()> {
    if pos.x.is_finite() && pos.y.is_finite() {
        Ok(())
    } else {
        Err(SpaceError::NonFinite { agent, x: pos.x, y: pos.y })
    }
}
