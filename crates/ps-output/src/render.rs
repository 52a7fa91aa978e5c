//! Drawable discs for a live view of the arena.
//!
//! Every live agent becomes a filled circle scaled up from its personal-space
//! radius and coloured by its panic latch.  Drawing itself is left to the
//! front end.

use ps_sim::{AgentView, SimView};

/// Display radius per unit of agent radius.
pub const RADIUS_SCALE: f64 = 5.0;

/// Colour class of a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanicClass {
    Calm,
    Panicked,
}

impl PanicClass {
    pub fn color(self) -> &'static str {
        match self {
            PanicClass::Calm     => "skyblue",
            PanicClass::Panicked => "red",
        }
    }
}

impl From<bool> for PanicClass {
    fn from(panic: bool) -> Self {
        if panic { PanicClass::Panicked } else { PanicClass::Calm }
    }
}

/// One agent, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentDisc {
    pub x:      f64,
    pub y:      f64,
    pub radius: f64,
    pub class:  PanicClass,
}

impl AgentDisc {
    pub fn color(&self) -> &'static str {
        self.class.color()
    }
}

impl From<&AgentView> for AgentDisc {
    fn from(a: &AgentView) -> Self {
        Self {
            x:      a.position.x,
            y:      a.position.y,
            radius: a.radius * RADIUS_SCALE,
            class:  a.panic.into(),
        }
    }
}

/// Discs for every live agent, in id order.
pub fn discs(view: &SimView<'_>) -> Vec<AgentDisc> {
    view.live_agents().map(|a| AgentDisc::from(&a)).collect()
}
