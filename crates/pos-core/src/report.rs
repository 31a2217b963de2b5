//! Agregación de ingresos por ventana de calendario.
//!
//! Proyección de sólo lectura sobre el ledger de RevenueFacts: misma entrada
//! (period, today) ⇒ mismo resultado. Las fechas se comparan como fechas de
//! calendario, sin hora.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use pos_domain::{DomainError, Money, RevenueFact};

/// Selector de ventana: `all | today | yesterday | week | month | year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    Today,
    Yesterday,
    Week,
    Month,
    Year,
}

impl Period {
    /// Ventana inclusiva `[start, end]`; `None` significa sin filtro.
    /// La semana arranca el lunes: con `num_days_from_monday` el domingo
    /// cuenta como día 7 de la semana anterior.
    pub fn window(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Period::All => None,
            Period::Today => Some((today, today)),
            Period::Yesterday => {
                let y = today - Duration::days(1);
                Some((y, y))
            }
            Period::Week => {
                let start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                Some((start, today))
            }
            Period::Month => Some((today.with_day(1).unwrap_or(today), today)),
            Period::Year => Some((today.with_ordinal(1).unwrap_or(today), today)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Today => "today",
            Period::Yesterday => "yesterday",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Period::All),
            "today" => Ok(Period::Today),
            "yesterday" => Ok(Period::Yesterday),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(DomainError::validation(format!("unknown period '{other}'"))),
        }
    }
}

/// Una fila del desglose diario.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub orders: u32,
    pub amount: Money,
}

/// Resultado del agregador para un (period, today) dados.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub period: Period,
    pub total_revenue: Money,
    pub total_orders: u32,
    /// Desglose por fecha, ordenado descendente.
    pub daily: Vec<DailyRevenue>,
}

impl RevenueSummary {
    /// Promedio por pedido en rupias; 0 cuando no hay pedidos en la ventana.
    pub fn avg_order(&self) -> f64 {
        if self.total_orders == 0 {
            0.0
        } else {
            self.total_revenue.rupees() / f64::from(self.total_orders)
        }
    }
}

/// Filtra por ventana, agrupa por fecha y totaliza.
pub fn summarize(facts: &[RevenueFact], period: Period, today: NaiveDate) -> RevenueSummary {
    let window = period.window(today);
    let mut per_day: BTreeMap<NaiveDate, (u32, Money)> = BTreeMap::new();
    let mut total_revenue = Money::ZERO;
    let mut total_orders = 0u32;

    for fact in facts {
        if let Some((start, end)) = window {
            if fact.revenue_date() < start || fact.revenue_date() > end {
                continue;
            }
        }
        let entry = per_day.entry(fact.revenue_date()).or_insert((0, Money::ZERO));
        entry.0 += 1;
        entry.1 = entry.1 + fact.amount();
        total_revenue = total_revenue + fact.amount();
        total_orders += 1;
    }

    let daily = per_day
        .into_iter()
        .rev()
        .map(|(date, (orders, amount))| DailyRevenue { date, orders, amount })
        .collect();

    RevenueSummary { period, total_revenue, total_orders, daily }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn ventana_week_arranca_lunes() {
        // miércoles 2024-05-15 → lunes 2024-05-13
        let (start, end) = Period::Week.window(d(2024, 5, 15)).unwrap();
        assert_eq!(start, d(2024, 5, 13));
        assert_eq!(end, d(2024, 5, 15));
    }

    #[test]
    fn ventana_week_domingo_pertenece_a_la_semana_anterior() {
        // domingo 2024-05-19 → lunes 2024-05-13
        let (start, _) = Period::Week.window(d(2024, 5, 19)).unwrap();
        assert_eq!(start, d(2024, 5, 13));
    }

    #[test]
    fn ventanas_month_y_year() {
        let today = d(2024, 5, 15);
        assert_eq!(Period::Month.window(today).unwrap(), (d(2024, 5, 1), today));
        assert_eq!(Period::Year.window(today).unwrap(), (d(2024, 1, 1), today));
        assert_eq!(Period::All.window(today), None);
    }

    #[test]
    fn today_filtra_solo_hoy() {
        // escenario del sistema original: 40 hoy, 60 ayer
        let today = d(2024, 5, 15);
        let facts = vec![
            RevenueFact::new(1, Money::from_rupees(40), today),
            RevenueFact::new(2, Money::from_rupees(60), d(2024, 5, 14)),
        ];
        let s = summarize(&facts, Period::Today, today);
        assert_eq!(s.total_revenue, Money::from_rupees(40));
        assert_eq!(s.total_orders, 1);
        assert_eq!(s.avg_order(), 40.0);
    }

    #[test]
    fn agrupa_por_fecha_descendente() {
        let today = d(2024, 5, 15);
        let facts = vec![
            RevenueFact::new(1, Money::from_rupees(30), d(2024, 5, 13)),
            RevenueFact::new(2, Money::from_rupees(20), today),
            RevenueFact::new(3, Money::from_rupees(50), d(2024, 5, 13)),
        ];
        let s = summarize(&facts, Period::All, today);
        assert_eq!(s.total_orders, 3);
        assert_eq!(s.total_revenue, Money::from_rupees(100));
        assert_eq!(s.daily.len(), 2);
        assert_eq!(s.daily[0].date, today, "primero la fecha más reciente");
        assert_eq!(s.daily[1].orders, 2);
        assert_eq!(s.daily[1].amount, Money::from_rupees(80));
    }

    #[test]
    fn promedio_cero_sin_pedidos() {
        let s = summarize(&[], Period::Month, d(2024, 5, 15));
        assert_eq!(s.total_orders, 0);
        assert_eq!(s.avg_order(), 0.0);
        assert!(s.daily.is_empty());
    }

    #[test]
    fn period_from_str() {
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert!("quarter".parse::<Period>().is_err());
    }
}
