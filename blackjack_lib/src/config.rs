use crate::error::BlackjackGameError;

/// Struct for configuring a `Table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub starting_bank: i64,
    pub ante: i64,
    pub seed: Option<u64>,
    pub player_name: Option<String>,
}

impl TableConfig {
    /// Associated method for returning a new `TableConfigBuilder`. Anything left unset
    /// falls back to the standard table: a bank of 100 and an ante of 10.
    pub fn new() -> TableConfigBuilder {
        TableConfigBuilder::default()
    }

    /// Checks the values a table cannot be opened with.
    pub fn validate(&self) -> Result<(), BlackjackGameError> {
        if self.ante <= 0 {
            return Err(BlackjackGameError::config(format!(
                "ante must be positive, got {}",
                self.ante
            )));
        }
        if self.starting_bank < 0 {
            return Err(BlackjackGameError::config(format!(
                "starting bank cannot be negative, got {}",
                self.starting_bank
            )));
        }
        if let Some(name) = &self.player_name {
            if name.trim().is_empty() {
                return Err(BlackjackGameError::config("player name cannot be empty"));
            }
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig::new().build()
    }
}

/// Struct to implement the builder pattern for `TableConfig`.
#[derive(Debug, Clone, Default)]
pub struct TableConfigBuilder {
    starting_bank: Option<i64>,
    ante: Option<i64>,
    seed: Option<u64>,
    player_name: Option<String>,
}

impl TableConfigBuilder {
    /// Bank both the player and the dealer start with.
    pub fn starting_bank(&mut self, bank: i64) -> &mut Self {
        self.starting_bank = Some(bank);
        self
    }

    /// Stake each participant puts in the pot at the start of every round.
    pub fn ante(&mut self, ante: i64) -> &mut Self {
        self.ante = Some(ante);
        self
    }

    /// Makes every shuffle of the session reproducible.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Seats the player under this name instead of asking for one.
    pub fn player_name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.player_name = Some(name.into());
        self
    }

    pub fn build(&mut self) -> TableConfig {
        TableConfig {
            starting_bank: self.starting_bank.unwrap_or(100),
            ante: self.ante.unwrap_or(10),
            seed: self.seed,
            player_name: self.player_name.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_table() {
        let config = TableConfig::default();
        assert_eq!(config.starting_bank, 100);
        assert_eq!(config.ante, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = TableConfig::new()
            .starting_bank(250)
            .ante(25)
            .seed(9)
            .player_name("Ada")
            .build();
        assert_eq!(config.starting_bank, 250);
        assert_eq!(config.ante, 25);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.player_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn rejects_non_positive_ante() {
        let config = TableConfig::new().ante(0).build();
        assert!(matches!(
            config.validate(),
            Err(BlackjackGameError::Config { .. })
        ));
    }

    #[test]
    fn rejects_negative_bank_and_blank_name() {
        assert!(TableConfig::new().starting_bank(-1).build().validate().is_err());
        assert!(TableConfig::new().player_name("  ").build().validate().is_err());
    }
}
