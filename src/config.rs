use crate::MAX_DEPTH;

/// What the converter does with JSON `null`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum NullPolicy {
    /// `null` becomes an empty compound. NBT has no null tag, so this is a
    /// placeholder that reads back as `{}`.
    #[default]
    EmptyCompound,
    /// `null` produces no tag: it is dropped from arrays and objects, and a
    /// `null` root fails with [`Error::Unconvertible`](crate::Error::Unconvertible).
    Skip,
}

/// Options for [`Converter`](crate::Converter).
///
/// # Example
///
/// ```
/// use json_nbt::{ConvertConfig, Converter, NullPolicy};
///
/// let converter = Converter::new(
///     ConvertConfig::default()
///         .with_null_policy(NullPolicy::Skip)
///         .with_max_depth(64),
/// );
/// assert_eq!(converter.config().max_depth, 64);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ConvertConfig {
    pub null_policy: NullPolicy,
    /// Deepest array/object nesting accepted. The root container sits at
    /// depth one.
    pub max_depth: usize,
}

impl Default for ConvertConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertConfig {
    /// The default configuration: `null` becomes `{}`, depth capped at 512.
    #[inline]
    pub const fn new() -> Self {
        Self {
            null_policy: NullPolicy::EmptyCompound,
            max_depth: MAX_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_null_policy(mut self, null_policy: NullPolicy) -> Self {
        self.null_policy = null_policy;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
