use super::prelude::*;

/// what one transmitter cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    // no zone enabled, nothing went out
    Idle,
    // start code plus this many slots went out
    Sent { slots: DmxAddress },
}
