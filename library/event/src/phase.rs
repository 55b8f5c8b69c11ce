use core::fmt;

/// The dispatch phase an event is currently in, as reported by `Event.eventPhase`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Phase {
    /// The event is not being dispatched
    None = 0,
    /// Walking from the root towards the target, running capturing listeners
    Capturing = 1,
    /// Running listeners registered on the target itself
    AtTarget = 2,
    /// Walking from the target back up to the root
    Bubbling = 3,
}
impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::None,
        Phase::Capturing,
        Phase::AtTarget,
        Phase::Bubbling,
    ];

    #[inline]
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns true if the host is currently dispatching the event
    #[inline]
    pub fn is_dispatching(self) -> bool {
        self != Phase::None
    }
}
impl TryFrom<u16> for Phase {
    type Error = UnrecognizedPhase;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Phase::None),
            1 => Ok(Phase::Capturing),
            2 => Ok(Phase::AtTarget),
            3 => Ok(Phase::Bubbling),
            other => Err(UnrecognizedPhase(other)),
        }
    }
}
impl From<Phase> for u16 {
    #[inline]
    fn from(phase: Phase) -> Self {
        phase.as_u16()
    }
}
impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Phase::None => "NONE",
            Phase::Capturing => "CAPTURING_PHASE",
            Phase::AtTarget => "AT_TARGET",
            Phase::Bubbling => "BUBBLING_PHASE",
        };
        f.write_str(name)
    }
}

/// The host reported an `eventPhase` outside of the four phases it defines
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("unrecognized event phase {0}, expected 0 through 3")]
pub struct UnrecognizedPhase(pub u16);
