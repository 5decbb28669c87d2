/// ============================================================
///  GreenCell panel lifespan estimator
///
///  Age is counted in calendar years (purchase year to the
///  evaluation year). Lifespan scales a 25-year baseline by a
///  per-technology multiplier; efficiency loses 0.7 % a year
///  and never reads below 60 %.
/// ============================================================

use chrono::{Datelike, NaiveDate};

use crate::errors::ValidationError;
use crate::models::panel::{PanelInput, PanelResult, RecommendedAction, Technology, WarrantyStatus};

const BASE_LIFESPAN_YEARS: f64 = 25.0;
const WARRANTY_YEARS: i32 = 25;
const EFFICIENCY_LOSS_PER_YEAR: f64 = 0.7;
const EFFICIENCY_FLOOR: f64 = 60.0;
const CO2_KG_PER_KW_YEAR: f64 = 0.5;
const KWH_PER_KW_DAY: f64 = 1.2;
const REPLACEMENT_COST_PER_KW: f64 = 1500.0;

impl Technology {
    pub fn lifespan_multiplier(self) -> f64 {
        match self {
            Technology::Monocrystalline => 1.0,
            Technology::Polycrystalline => 0.9,
            Technology::ThinFilm => 0.8,
            Technology::Perc => 1.1,
            Technology::Bifacial => 1.15,
            Technology::Unrecognized => 1.0,
        }
    }

    /// Advertised yearly degradation (%).
    pub fn degradation_rate(self) -> f64 {
        match self {
            Technology::Perc | Technology::Bifacial => 0.5,
            _ => 0.7,
        }
    }
}

/// Estimate panel health as of `today`.
///
/// `manufacturer` must be present but does not influence any figure.
pub fn estimate(input: &PanelInput, today: NaiveDate) -> Result<PanelResult, ValidationError> {
    let raw_date = match input.purchase_date.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ValidationError::MissingField("purchaseDate")),
    };
    let purchase_date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidDate {
            field: "purchaseDate",
            value: raw_date.to_string(),
        }
    })?;
    if purchase_date > today {
        return Err(ValidationError::PurchaseDateInFuture(raw_date.to_string()));
    }

    let capacity = match input.capacity {
        None => return Err(ValidationError::MissingField("capacity")),
        Some(v) if v > 0.0 => v,
        Some(_) => return Err(ValidationError::NonPositive("capacity")),
    };
    let technology = input.technology.ok_or(ValidationError::MissingField("technology"))?;
    if input.manufacturer.as_deref().is_none_or(|m| m.trim().is_empty()) {
        return Err(ValidationError::MissingField("manufacturer"));
    }

    let age = today.year() - purchase_date.year();
    let expected_lifespan = (BASE_LIFESPAN_YEARS * technology.lifespan_multiplier()).round() as i32;
    let remaining_years = (expected_lifespan - age).max(0);
    let current_efficiency = (100.0 - age as f64 * EFFICIENCY_LOSS_PER_YEAR).max(EFFICIENCY_FLOOR);

    let warranty_status = if age < WARRANTY_YEARS {
        WarrantyStatus::Active
    } else {
        WarrantyStatus::Expired
    };

    let recommended_action = if remaining_years > 10 {
        RecommendedAction::Maintain
    } else if remaining_years > 5 {
        RecommendedAction::Monitor
    } else {
        RecommendedAction::Replace
    };

    Ok(PanelResult {
        age,
        expected_lifespan,
        remaining_years,
        current_efficiency,
        degradation_rate: technology.degradation_rate(),
        warranty_status,
        recommended_action,
        carbon_offset: capacity * CO2_KG_PER_KW_YEAR * (expected_lifespan - age) as f64,
        energy_generated: capacity * KWH_PER_KW_DAY * age as f64 * 365.0,
        replacement_cost: capacity * REPLACEMENT_COST_PER_KW,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn panel(date: &str, capacity: f64, technology: Technology) -> PanelInput {
        PanelInput {
            purchase_date: Some(date.to_string()),
            capacity: Some(capacity),
            technology: Some(technology),
            manufacturer: Some("SunPower".to_string()),
        }
    }

    #[test]
    fn test_ten_year_old_monocrystalline() {
        let r = estimate(&panel("2016-03-01", 5.0, Technology::Monocrystalline), today()).unwrap();
        assert_eq!(r.age, 10);
        assert_eq!(r.expected_lifespan, 25);
        assert_eq!(r.remaining_years, 15);
        assert!((r.current_efficiency - 93.0).abs() < 1e-9, "efficiency {}", r.current_efficiency);
        assert_eq!(r.degradation_rate, 0.7);
        assert_eq!(r.warranty_status, WarrantyStatus::Active);
        assert_eq!(r.recommended_action, RecommendedAction::Maintain);
        assert_eq!(r.carbon_offset, 5.0 * 0.5 * 15.0);
        assert_eq!(r.energy_generated, 5.0 * 1.2 * 10.0 * 365.0);
        assert_eq!(r.replacement_cost, 7500.0);
    }

    #[test]
    fn test_lifespan_by_technology() {
        let cases = [
            (Technology::Monocrystalline, 25, 0.7),
            (Technology::Polycrystalline, 23, 0.7),
            (Technology::ThinFilm, 20, 0.7),
            (Technology::Perc, 28, 0.5),
            (Technology::Bifacial, 29, 0.5),
            (Technology::Unrecognized, 25, 0.7),
        ];
        for (tech, lifespan, degradation) in cases {
            let r = estimate(&panel("2026-01-01", 1.0, tech), today()).unwrap();
            assert_eq!(r.expected_lifespan, lifespan, "{:?}", tech);
            assert_eq!(r.degradation_rate, degradation, "{:?}", tech);
        }
    }

    #[test]
    fn test_older_panels_degrade_monotonically() {
        let mut prev: Option<PanelResult> = None;
        for year in (1980..=2026).rev() {
            let r = estimate(&panel(&format!("{}-06-15", year), 3.0, Technology::Perc), today()).unwrap();
            if let Some(p) = &prev {
                assert!(r.age > p.age);
                if p.current_efficiency > 60.0 {
                    assert!(r.current_efficiency < p.current_efficiency);
                } else {
                    assert_eq!(r.current_efficiency, 60.0);
                }
                if p.remaining_years > 0 {
                    assert!(r.remaining_years < p.remaining_years);
                } else {
                    assert_eq!(r.remaining_years, 0);
                }
            }
            assert!(r.current_efficiency >= 60.0);
            assert!(r.remaining_years >= 0);
            prev = Some(r);
        }
    }

    #[test]
    fn test_action_and_warranty_thresholds() {
        // monocrystalline: lifespan 25
        let monitor = estimate(&panel("2008-01-01", 1.0, Technology::Monocrystalline), today()).unwrap();
        assert_eq!(monitor.remaining_years, 7);
        assert_eq!(monitor.recommended_action, RecommendedAction::Monitor);

        let replace = estimate(&panel("2001-01-01", 1.0, Technology::Monocrystalline), today()).unwrap();
        assert_eq!(replace.age, 25);
        assert_eq!(replace.remaining_years, 0);
        assert_eq!(replace.recommended_action, RecommendedAction::Replace);
        assert_eq!(replace.warranty_status, WarrantyStatus::Expired);
    }

    #[test]
    fn test_manufacturer_does_not_change_figures() {
        let mut a = panel("2019-05-05", 4.2, Technology::Bifacial);
        let mut b = a.clone();
        a.manufacturer = Some("LG".to_string());
        b.manufacturer = Some("Canadian Solar".to_string());
        assert_eq!(estimate(&a, today()), estimate(&b, today()));
    }

    #[test]
    fn test_idempotent() {
        let p = panel("2014-08-30", 6.4, Technology::ThinFilm);
        assert_eq!(estimate(&p, today()), estimate(&p, today()));
    }

    #[test]
    fn test_validation() {
        let future = panel("2027-01-01", 1.0, Technology::Perc);
        assert_eq!(
            estimate(&future, today()),
            Err(ValidationError::PurchaseDateInFuture("2027-01-01".to_string()))
        );

        let garbage = panel("last spring", 1.0, Technology::Perc);
        assert!(matches!(estimate(&garbage, today()), Err(ValidationError::InvalidDate { .. })));

        let mut no_capacity = panel("2020-01-01", 1.0, Technology::Perc);
        no_capacity.capacity = Some(0.0);
        assert_eq!(estimate(&no_capacity, today()), Err(ValidationError::NonPositive("capacity")));

        let mut blank_maker = panel("2020-01-01", 1.0, Technology::Perc);
        blank_maker.manufacturer = Some("   ".to_string());
        assert_eq!(estimate(&blank_maker, today()), Err(ValidationError::MissingField("manufacturer")));

        let mut no_tech = panel("2020-01-01", 1.0, Technology::Perc);
        no_tech.technology = None;
        assert_eq!(estimate(&no_tech, today()), Err(ValidationError::MissingField("technology")));

        assert_eq!(
            estimate(&PanelInput::default(), today()),
            Err(ValidationError::MissingField("purchaseDate"))
        );
    }

    #[test]
    fn test_unknown_technology_deserializes() {
        let input: PanelInput = serde_json::from_str(
            r#"{"purchaseDate":"2020-01-01","capacity":2,"technology":"perovskite","manufacturer":"X"}"#,
        )
        .unwrap();
        assert_eq!(input.technology, Some(Technology::Unrecognized));
        let thin: PanelInput = serde_json::from_str(r#"{"technology":"thin-film"}"#).unwrap();
        assert_eq!(thin.technology, Some(Technology::ThinFilm));
    }
}
