//! Parser configuration.
//!
//! The defaults reproduce the reference behaviour: anything left over after
//! a complete expression is ignored.

use clap::ValueEnum;

/// Deepest tree the parser will build before giving up with `NestingTooDeep`.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What to do with tokens left over once the top level expression ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TrailingPolicy {
    #[default]
    Ignore,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub trailing: TrailingPolicy,
    /// Limit on both the parser's recursion and the height of the tree.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            trailing: TrailingPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
