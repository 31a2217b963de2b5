//! Importes monetarios exactos en paise (1/100 de rupia).
//!
//! El almacenamiento serializa como número de rupias con dos decimales para
//! mantener el formato de los documentos guardados; internamente todo es i64.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Redondeo estándar a dos decimales (half away from zero).
    pub fn from_rupees_f64(rupees: f64) -> Self {
        Money((rupees * 100.0).round() as i64)
    }

    pub const fn paise(&self) -> i64 {
        self.0
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn rupees(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn times(&self, qty: u32) -> Money {
        Money(self.0 * qty as i64)
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rupees())
    }
}

// Serde manual: número JSON en rupias, igual que los blobs originales.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.rupees())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        Ok(Money::from_rupees_f64(rupees))
    }
}
