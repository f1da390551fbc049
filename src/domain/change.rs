use crate::error::{Result, VendingError};
use std::fmt;

/// US coins the machine pays change in.
///
/// Variants are declared largest first; `Denomination::ALL` preserves that
/// order, which the greedy decomposition in [`CoinBreakdown::from_pennies`]
/// depends on.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Denomination {
    Quarter,
    Dime,
    Nickel,
    Penny,
}

impl Denomination {
    pub const ALL: [Denomination; 4] = [
        Denomination::Quarter,
        Denomination::Dime,
        Denomination::Nickel,
        Denomination::Penny,
    ];

    /// Value in pennies.
    pub const fn value(self) -> i64 {
        match self {
            Denomination::Quarter => 25,
            Denomination::Dime => 10,
            Denomination::Nickel => 5,
            Denomination::Penny => 1,
        }
    }

    // The penny singular stays "pennie": existing consumers match on it.
    pub const fn singular(self) -> &'static str {
        match self {
            Denomination::Quarter => "quarter",
            Denomination::Dime => "dime",
            Denomination::Nickel => "nickel",
            Denomination::Penny => "pennie",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            Denomination::Quarter => "quarters",
            Denomination::Dime => "dimes",
            Denomination::Nickel => "nickels",
            Denomination::Penny => "pennies",
        }
    }

    /// Renders `count` coins of this kind, e.g. `"1 dime"` or `"3 dimes"`.
    pub fn describe(self, count: u64) -> String {
        let noun = if count == 1 {
            self.singular()
        } else {
            self.plural()
        };
        format!("{count} {noun}")
    }
}

/// Coin counts making up an amount of change.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CoinBreakdown {
    pub quarters: u64,
    pub dimes: u64,
    pub nickels: u64,
    pub pennies: u64,
}

impl CoinBreakdown {
    /// Greedily decomposes `amount` pennies, taking the largest coin that
    /// fits at each step.
    ///
    /// Minimal for the 25/10/5/1 set only; other coin systems would need a
    /// different algorithm.
    pub fn from_pennies(amount: i64) -> Result<Self> {
        if amount < 0 {
            return Err(VendingError::InvalidArgument(format!(
                "change amount must not be negative, got {amount}"
            )));
        }

        let mut remaining = amount;
        let mut breakdown = Self::default();
        for denomination in Denomination::ALL {
            let count = remaining / denomination.value();
            remaining -= count * denomination.value();
            *breakdown.count_mut(denomination) = count as u64;
        }

        Ok(breakdown)
    }

    pub fn count(&self, denomination: Denomination) -> u64 {
        match denomination {
            Denomination::Quarter => self.quarters,
            Denomination::Dime => self.dimes,
            Denomination::Nickel => self.nickels,
            Denomination::Penny => self.pennies,
        }
    }

    fn count_mut(&mut self, denomination: Denomination) -> &mut u64 {
        match denomination {
            Denomination::Quarter => &mut self.quarters,
            Denomination::Dime => &mut self.dimes,
            Denomination::Nickel => &mut self.nickels,
            Denomination::Penny => &mut self.pennies,
        }
    }

    /// Total value in pennies.
    pub fn total(&self) -> i64 {
        Denomination::ALL
            .iter()
            .map(|d| self.count(*d) as i64 * d.value())
            .sum()
    }

    pub fn coin_count(&self) -> u64 {
        self.quarters + self.dimes + self.nickels + self.pennies
    }
}

impl fmt::Display for CoinBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Denomination::ALL
            .iter()
            .map(|d| d.describe(self.count(*d)))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lists_every_coin() {
        let breakdown = CoinBreakdown::from_pennies(0).unwrap();
        assert_eq!(
            breakdown.to_string(),
            "0 quarters, 0 dimes, 0 nickels, 0 pennies"
        );
    }

    #[test]
    fn test_singular_forms() {
        let breakdown = CoinBreakdown::from_pennies(41).unwrap();
        // "pennie" is the established singular; consumers compare on it.
        assert_eq!(breakdown.to_string(), "1 quarter, 1 dime, 1 nickel, 1 pennie");
    }

    #[test]
    fn test_greedy_takes_largest_first() {
        let breakdown = CoinBreakdown::from_pennies(99).unwrap();
        assert_eq!(
            breakdown,
            CoinBreakdown {
                quarters: 3,
                dimes: 2,
                nickels: 0,
                pennies: 4,
            }
        );
        assert_eq!(
            breakdown.to_string(),
            "3 quarters, 2 dimes, 0 nickels, 4 pennies"
        );
    }

    #[test]
    fn test_negative_amount() {
        assert!(matches!(
            CoinBreakdown::from_pennies(-5),
            Err(VendingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_total_reconstructs_amount() {
        for amount in 0..=500 {
            let breakdown = CoinBreakdown::from_pennies(amount).unwrap();
            assert_eq!(breakdown.total(), amount);
        }
    }

    #[test]
    fn test_at_most_one_nickel_and_few_dimes() {
        // Canonical-system property: greedy never leaves a combination that
        // a larger coin could replace.
        for amount in 0..=500 {
            let b = CoinBreakdown::from_pennies(amount).unwrap();
            assert!(b.pennies < 5);
            assert!(b.nickels <= 1);
            assert!(b.dimes * 10 + b.nickels * 5 < 25);
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(Denomination::Dime.describe(1), "1 dime");
        assert_eq!(Denomination::Dime.describe(0), "0 dimes");
        assert_eq!(Denomination::Penny.describe(2), "2 pennies");
    }
}
