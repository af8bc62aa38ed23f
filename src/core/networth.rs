//! Net worth calculation and validation.

use crate::core::input::{is_blank, parse_amount};
use crate::models::{AssetAmounts, HealthTier, LiabilityAmounts, NetWorthForm, NetWorthResults};

/// Sum a group of raw currency fields.
pub fn sum_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> f64 {
    fields.into_iter().map(parse_amount).sum()
}

/// Net worth: total assets minus total liabilities.
pub fn net_worth(total_assets: f64, total_liabilities: f64) -> f64 {
    total_assets - total_liabilities
}

/// Health tier from the liabilities-to-assets ratio.
///
/// With no assets, any liabilities need attention; with nothing entered at
/// all the position is merely neutral.
pub fn health(total_assets: f64, total_liabilities: f64) -> HealthTier {
    if total_assets <= 0.0 {
        return if total_liabilities > 0.0 {
            HealthTier::Attention
        } else {
            HealthTier::Fair
        };
    }

    let ratio = total_liabilities / total_assets;
    if ratio <= 0.3 {
        HealthTier::Excellent
    } else if ratio <= 0.6 {
        HealthTier::Good
    } else if ratio < 1.0 {
        HealthTier::Fair
    } else {
        HealthTier::Attention
    }
}

/// User-facing description of the health tier.
pub fn health_message(tier: HealthTier) -> &'static str {
    match tier {
        HealthTier::Excellent => "Excellent - your assets comfortably outweigh your debts.",
        HealthTier::Good => "Good - a healthy balance of assets and liabilities.",
        HealthTier::Fair => "Fair - keep building assets and paying down debt.",
        HealthTier::Attention => "Needs attention - liabilities exceed your assets.",
    }
}

/// Compute totals and health from the raw form.
pub fn compute(form: &NetWorthForm) -> NetWorthResults {
    let total_assets = sum_fields(form.assets.values().iter().copied());
    let total_liabilities = sum_fields(form.liabilities.values().iter().copied());

    NetWorthResults {
        total_assets,
        total_liabilities,
        net_worth: net_worth(total_assets, total_liabilities),
        health: health(total_assets, total_liabilities),
    }
}

/// Parsed asset amounts for the profile snapshot.
pub fn asset_amounts(form: &NetWorthForm) -> AssetAmounts {
    let assets = &form.assets;
    AssetAmounts {
        cash_checking: parse_amount(&assets.cash_checking),
        high_interest_savings: parse_amount(&assets.high_interest_savings),
        tfsa: parse_amount(&assets.tfsa),
        rrsp: parse_amount(&assets.rrsp),
        fhsa: parse_amount(&assets.fhsa),
        investments: parse_amount(&assets.investments),
        other_assets: parse_amount(&assets.other_assets),
    }
}

/// Parsed liability amounts for the profile snapshot.
pub fn liability_amounts(form: &NetWorthForm) -> LiabilityAmounts {
    let liabilities = &form.liabilities;
    LiabilityAmounts {
        credit_cards: parse_amount(&liabilities.credit_cards),
        lines_of_credit: parse_amount(&liabilities.lines_of_credit),
        car_loans: parse_amount(&liabilities.car_loans),
        student_loans: parse_amount(&liabilities.student_loans),
        other_debts: parse_amount(&liabilities.other_debts),
    }
}

/// Validate the form, returning human-readable messages.
pub fn validate(form: &NetWorthForm) -> Vec<String> {
    let any_entered = form
        .assets
        .values()
        .iter()
        .chain(form.liabilities.values().iter())
        .any(|field| !is_blank(field));

    if any_entered {
        Vec::new()
    } else {
        vec!["Please enter at least one asset or liability value".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetFields, LiabilityFields};

    fn filled_form() -> NetWorthForm {
        NetWorthForm {
            assets: AssetFields {
                cash_checking: "5000".to_string(),
                high_interest_savings: "15000".to_string(),
                tfsa: "25000".to_string(),
                rrsp: "50000".to_string(),
                fhsa: "8000".to_string(),
                investments: "30000".to_string(),
                other_assets: "10000".to_string(),
            },
            liabilities: LiabilityFields {
                credit_cards: "2500".to_string(),
                lines_of_credit: "15000".to_string(),
                car_loans: "18000".to_string(),
                student_loans: "25000".to_string(),
                other_debts: "5000".to_string(),
            },
            results: None,
        }
    }

    #[test]
    fn test_totals() {
        let results = compute(&filled_form());
        assert_eq!(results.total_assets, 143_000.0);
        assert_eq!(results.total_liabilities, 65_500.0);
        assert_eq!(results.net_worth, 77_500.0);
    }

    #[test]
    fn test_empty_fields_count_as_zero() {
        let mut form = filled_form();
        form.assets.other_assets = String::new();
        let results = compute(&form);
        assert_eq!(results.total_assets, 133_000.0);
    }

    #[test]
    fn test_net_worth_may_be_negative() {
        assert_eq!(net_worth(10_000.0, 25_000.0), -15_000.0);
    }

    #[test]
    fn test_health_tiers() {
        assert_eq!(health(100_000.0, 20_000.0), HealthTier::Excellent);
        assert_eq!(health(100_000.0, 50_000.0), HealthTier::Good);
        assert_eq!(health(100_000.0, 90_000.0), HealthTier::Fair);
        assert_eq!(health(100_000.0, 120_000.0), HealthTier::Attention);
        assert_eq!(health(0.0, 5_000.0), HealthTier::Attention);
        assert_eq!(health(0.0, 0.0), HealthTier::Fair);
    }

    #[test]
    fn test_validation_requires_any_value() {
        let errors = validate(&NetWorthForm::default());
        assert_eq!(
            errors,
            vec!["Please enter at least one asset or liability value".to_string()]
        );

        let mut form = NetWorthForm::default();
        form.liabilities.credit_cards = "100".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_snapshot_amounts_match_totals() {
        let form = filled_form();
        assert_eq!(asset_amounts(&form).total(), 143_000.0);
        assert_eq!(liability_amounts(&form).total(), 65_500.0);
    }
}
