//! [`Catalog`] definitions.

use std::collections::HashMap;

use common::Money;

use crate::domain::{
    tool::{Brand, Category, Charging, Code},
    Tool,
};

/// Immutable lookup of [`Tool`]s by their [`Code`].
///
/// A [`Catalog`] is populated once, before any checkout, and never
/// mutated afterwards, so concurrent reads require no synchronization.
pub trait Catalog {
    /// Looks up a [`Tool`] by the provided [`Code`].
    ///
    /// [`None`] is returned if no such [`Tool`] exists.
    fn lookup(&self, code: &Code) -> Option<Tool>;
}

/// In-memory [`Catalog`] of [`Tool`]s.
#[derive(Clone, Debug, Default)]
pub struct InMemory(HashMap<Code, Tool>);

impl InMemory {
    /// Creates a new [`InMemory`] [`Catalog`] of the provided [`Tool`]s.
    #[must_use]
    pub fn new(tools: impl IntoIterator<Item = Tool>) -> Self {
        Self(tools.into_iter().map(|t| (t.code.clone(), t)).collect())
    }

    /// Creates the stock 4-entry [`Catalog`] of rentable [`Tool`]s.
    #[must_use]
    pub fn stock() -> Self {
        let weekday_only = Charging {
            weekday: true,
            weekend: false,
            holiday: false,
        };

        Self::new([
            tool(
                "LADW",
                "Ladder",
                "Werner",
                199,
                Charging {
                    weekday: true,
                    weekend: true,
                    holiday: false,
                },
            ),
            tool(
                "CHNS",
                "Chainsaw",
                "Stihl",
                149,
                Charging {
                    weekday: true,
                    weekend: false,
                    holiday: true,
                },
            ),
            tool("JAKD", "Jackhammer", "DeWalt", 299, weekday_only),
            tool("JAKR", "Jackhammer", "Ridgid", 299, weekday_only),
        ])
    }
}

impl Catalog for InMemory {
    fn lookup(&self, code: &Code) -> Option<Tool> {
        self.0.get(code).cloned()
    }
}

/// Constructs a [`Tool`] from the provided known-valid parts.
fn tool(
    code: &str,
    category: &str,
    brand: &str,
    daily_cents: u32,
    charging: Charging,
) -> Tool {
    Tool {
        code: Code::new(code).expect("infallible"),
        category: Category::new(category).expect("infallible"),
        brand: Brand::new(brand).expect("infallible"),
        daily_charge: Money::from_cents(daily_cents),
        charging,
    }
}

#[cfg(test)]
mod spec {
    use super::{Catalog as _, Code, InMemory, Money};

    #[test]
    fn stock_holds_the_four_tools() {
        let catalog = InMemory::stock();

        for code in ["LADW", "CHNS", "JAKD", "JAKR"] {
            assert!(
                catalog.lookup(&Code::new(code).unwrap()).is_some(),
                "`{code}` is missing from the stock catalog",
            );
        }

        let ladder = catalog.lookup(&Code::new("LADW").unwrap()).unwrap();
        assert_eq!(ladder.daily_charge, Money::from_cents(199));
        assert!(ladder.charging.weekend);
        assert!(!ladder.charging.holiday);
    }

    #[test]
    fn lookup_misses_unknown_codes() {
        let catalog = InMemory::stock();

        assert!(catalog.lookup(&Code::new("NOPE").unwrap()).is_none());
        assert!(InMemory::default()
            .lookup(&Code::new("LADW").unwrap())
            .is_none());
    }
}
