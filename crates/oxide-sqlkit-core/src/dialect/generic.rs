//! Generic SQL dialect.

use super::SqlDialect;

/// A generic SQL dialect using ANSI SQL conventions and `?` placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}
