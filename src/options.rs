//! Deck configuration options.

use crate::ranks::{DEFAULT_RANKS, RankTable};

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardstack::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_jokers(true)
///     .with_num_jokers(2)
///     .with_rebuild(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Whether builds include jokers.
    pub jokers: bool,
    /// Number of jokers added per build.
    pub num_jokers: usize,
    /// Whether dealing rebuilds the deck when it runs out.
    pub rebuild: bool,
    /// Whether a rebuild is followed by a shuffle.
    pub re_shuffle: bool,
    /// Whether the deck is built on creation.
    pub build: bool,
    /// Rank table used by sorting and searching.
    pub ranks: RankTable,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            jokers: false,
            num_jokers: 0,
            rebuild: false,
            re_shuffle: false,
            build: true,
            ranks: DEFAULT_RANKS,
        }
    }
}

impl DeckOptions {
    /// Sets whether builds include jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(true);
    /// assert!(options.jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the number of jokers added per build.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_num_jokers(2);
    /// assert_eq!(options.num_jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_num_jokers(mut self, num_jokers: usize) -> Self {
        self.num_jokers = num_jokers;
        self
    }

    /// Sets whether dealing rebuilds the deck when it runs out.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_rebuild(true);
    /// assert!(options.rebuild);
    /// ```
    #[must_use]
    pub const fn with_rebuild(mut self, rebuild: bool) -> Self {
        self.rebuild = rebuild;
        self
    }

    /// Sets whether a rebuild is followed by a shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_re_shuffle(true);
    /// assert!(options.re_shuffle);
    /// ```
    #[must_use]
    pub const fn with_re_shuffle(mut self, re_shuffle: bool) -> Self {
        self.re_shuffle = re_shuffle;
        self
    }

    /// Sets whether the deck is built on creation.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_build(false);
    /// assert!(!options.build);
    /// ```
    #[must_use]
    pub const fn with_build(mut self, build: bool) -> Self {
        self.build = build;
        self
    }

    /// Sets the rank table.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    /// use cardstack::ranks::BIG2_RANKS;
    ///
    /// let options = DeckOptions::default().with_ranks(BIG2_RANKS);
    /// assert_eq!(options.ranks, BIG2_RANKS);
    /// ```
    #[must_use]
    pub const fn with_ranks(mut self, ranks: RankTable) -> Self {
        self.ranks = ranks;
        self
    }
}
