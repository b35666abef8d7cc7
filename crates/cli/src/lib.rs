//! Block counting client
//!
//! Activates a level component, creates an empty level, appends blocks and
//! reports the resulting block count. Failures propagate untouched to the
//! caller; the summary line is written only after every call succeeded.

pub mod report;

use anyhow::Context;
use pgefile_client::{Block, ComponentFactory};
use pgefile_config::ClientConfig;
use pgefile_core::{FileLibError, PropertyValue};
use pgefile_levels::LevelBlock;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, info};

/// A `MEMBER=VALUE` block property assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub member: String,
    pub value: String,
}

impl Assignment {
    /// Parse the value for the member's kind and write it to `block`
    pub fn apply(&self, block: &Block) -> pgefile_core::Result<()> {
        let kind = LevelBlock::member_kind(&self.member)
            .ok_or_else(|| FileLibError::UnknownMember(self.member.clone()))?;
        let value = PropertyValue::parse_as(kind, &self.value, &self.member)?;
        block.set(&self.member, value)
    }
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (member, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected MEMBER=VALUE, got '{}'", s))?;
        let member = member.trim();
        if member.is_empty() {
            return Err(format!("missing member name in '{}'", s));
        }
        Ok(Self {
            member: member.to_string(),
            value: value.to_string(),
        })
    }
}

/// What one run of the client does
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Component identifier to activate
    pub component: String,
    /// Number of blocks to append
    pub blocks: usize,
    /// Assignments applied to every appended block
    pub assignments: Vec<Assignment>,
}

impl RunOptions {
    /// Merge command-line values over the loaded config
    ///
    /// A flag that was given wins; otherwise the config value applies.
    pub fn resolve(
        config: &ClientConfig,
        component: Option<String>,
        blocks: Option<usize>,
        assignments: Vec<Assignment>,
    ) -> Self {
        Self {
            component: component.unwrap_or_else(|| config.component.clone()),
            blocks: blocks.unwrap_or(config.blocks),
            assignments,
        }
    }
}

/// Run the client and return the reported count
///
/// The component handle and document are released on every exit path.
pub fn run<W: Write>(
    factory: &ComponentFactory,
    options: &RunOptions,
    out: &mut W,
) -> anyhow::Result<usize> {
    let handle = factory
        .create(&options.component)
        .with_context(|| format!("failed to activate '{}'", options.component))?;
    let level = handle.create_new_level_data()?;
    let blocks = level.blocks();

    for _ in 0..options.blocks {
        let block = blocks.add()?;
        for assignment in &options.assignments {
            assignment.apply(&block).with_context(|| {
                format!("failed to set {} on block {}", assignment.member, block.index())
            })?;
        }
        debug!("Appended block {}", block.index());
    }

    let count = blocks.count()?;
    info!("{} holds {} blocks", level.id(), count);
    report::write_count(out, count)?;
    Ok(count)
}
