use crate::error::{GameError, GameResult};

/// Current and maximum hit points, `0 <= current <= maximum` at all times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Health {
    current: i32,
    maximum: i32,
}

impl Health {
    pub fn new(maximum: i32) -> GameResult<Self> {
        if maximum <= 0 {
            return Err(GameError::argument(format!("maximum health must be positive, got {maximum}")));
        }
        Ok(Self { current: maximum, maximum })
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.maximum
    }

    /// Returns the damage actually absorbed, which is less than `amount`
    /// when the hit overkills.
    pub fn take_damage(&mut self, amount: i32) -> GameResult<i32> {
        if amount < 0 {
            return Err(GameError::argument(format!("damage must not be negative, got {amount}")));
        }
        let absorbed = amount.min(self.current);
        self.current -= absorbed;
        Ok(absorbed)
    }

    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: i32) -> GameResult<i32> {
        if amount < 0 {
            return Err(GameError::argument(format!("heal must not be negative, got {amount}")));
        }
        let restored = amount.min(self.maximum - self.current);
        self.current += restored;
        Ok(restored)
    }

    pub fn full_heal(&mut self) {
        self.current = self.maximum;
    }

    /// Raises the cap and grants the same amount of current health.
    pub fn increase_maximum(&mut self, amount: i32) -> GameResult<()> {
        if amount < 0 {
            return Err(GameError::argument(format!(
                "maximum increase must not be negative, got {amount}"
            )));
        }
        self.maximum += amount;
        self.current += amount;
        Ok(())
    }

    pub fn percent(&self) -> f64 {
        f64::from(self.current) / f64::from(self.maximum)
    }
}
