//! Headless interactive session: key commands, the recording state machine and the player loop
//! tying them to the timeline.

pub mod input;
pub mod player;
pub mod recorder;
