//! Line-oriented command scripts for the headless runner.
//!
//! Each line is one of:
//!
//! - a command name (`moveLeft`, `rotateCw`, `hardDrop`, `pause`, ...)
//! - `tick <ms>` to advance gravity
//! - a `#` comment or a blank line (ignored)

use anyhow::{anyhow, bail, Context, Result};

use crate::engine::GameEngine;
use crate::types::GameCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Command(GameCommand),
    Tick(u32),
}

impl ScriptStep {
    /// Run the step against an engine; returns whether anything changed.
    pub fn apply(self, engine: &mut GameEngine) -> bool {
        match self {
            ScriptStep::Command(command) => engine.apply(command),
            ScriptStep::Tick(ms) => engine.tick(ms),
        }
    }
}

/// Parse one script line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptStep>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();

    let step = if head.eq_ignore_ascii_case("tick") {
        let ms = words.next().ok_or_else(|| anyhow!("tick needs a duration in ms"))?;
        let ms = ms
            .parse::<u32>()
            .with_context(|| format!("invalid tick duration {ms:?}"))?;
        ScriptStep::Tick(ms)
    } else {
        let command =
            GameCommand::from_str(head).ok_or_else(|| anyhow!("unknown command {head:?}"))?;
        ScriptStep::Command(command)
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument {extra:?}");
    }
    Ok(Some(step))
}
