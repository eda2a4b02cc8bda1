//! Table configuration options.

/// Configuration options for a tracked table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcount::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(8)
///     .with_starting_balance(500)
///     .with_dealer_hits_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Bankroll at load and after a full reset.
    pub starting_balance: i64,
    /// Penetration, in percent, at which the end-of-shoe advisory is raised.
    pub penetration_warning: f64,
    /// Whether the dealer hits soft 17.
    pub dealer_hits_soft_17: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_balance: 1000,
            penetration_warning: 70.0,
            dealer_hits_soft_17: true,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the penetration warning threshold in percent.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::TableOptions;
    ///
    /// let options = TableOptions::default().with_penetration_warning(75.0);
    /// assert_eq!(options.penetration_warning, 75.0);
    /// ```
    #[must_use]
    pub const fn with_penetration_warning(mut self, percent: f64) -> Self {
        self.penetration_warning = percent;
        self
    }

    /// Sets whether the dealer hits soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_hits_soft_17(false);
    /// assert_eq!(options.dealer_hits_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }
}
