use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sip_core::projection::{
    compute_summary, compute_yearly_breakdown, project, InvestmentInput,
};
use sip_core::SipError;

fn input(monthly: Decimal, rate: Decimal, years: Decimal) -> InvestmentInput {
    InvestmentInput {
        monthly_contribution: monthly,
        annual_rate_percent: rate,
        years,
    }
}

// ---------------------------------------------------------------------------
// Summary tests
// ---------------------------------------------------------------------------

#[test]
fn test_summary_one_year_scenario() {
    // 1000/month at 12% for 1 year: monthly_rate 0.01, 12 months.
    let result = compute_summary(&input(dec!(1000), dec!(12), dec!(1))).unwrap();
    assert_eq!(result.total_invested, dec!(12000));
    assert!(
        (result.total_value - dec!(12809.3280)).abs() < dec!(0.01),
        "Expected ~12809.33, got {}",
        result.total_value
    );
    assert!((result.estimated_returns - dec!(809.33)).abs() < dec!(0.01));
}

#[test]
fn test_summary_ten_year_scenario() {
    // 5000/month at 10% for 10 years: 120 months at monthly_rate ~0.008333.
    let result = compute_summary(&input(dec!(5000), dec!(10), dec!(10))).unwrap();
    assert_eq!(result.total_invested, dec!(600000));
    assert!(
        (result.total_value - dec!(1032760.10)).abs() < dec!(0.50),
        "Expected ~1032760.10, got {}",
        result.total_value
    );
}

#[test]
fn test_summary_fractional_horizon() {
    // 2.5 years uses the full 30 months, not a truncated 24.
    let result = compute_summary(&input(dec!(1000), dec!(12), dec!(2.5))).unwrap();
    assert_eq!(result.total_invested, dec!(30000));
    assert!(
        (result.total_value - dec!(35132.74)).abs() < dec!(0.01),
        "Expected ~35132.74, got {}",
        result.total_value
    );
}

#[test]
fn test_summary_fractional_months() {
    // 2.52 years is 30.24 months; the value must sit strictly between the
    // 30- and 31-month horizons.
    let result = compute_summary(&input(dec!(1000), dec!(12), dec!(2.52))).unwrap();
    assert_eq!(result.total_invested, dec!(30240));
    let lo = compute_summary(&input(dec!(1000), dec!(12), dec!(2.5))).unwrap();
    let hi = compute_summary(&input(dec!(1000), dec!(12), Decimal::from(31) / dec!(12))).unwrap();
    assert!(result.total_value > lo.total_value);
    assert!(result.total_value < hi.total_value);
}

#[test]
fn test_summary_identity_holds_exactly() {
    let result = compute_summary(&input(dec!(2500), dec!(7.5), dec!(18))).unwrap();
    assert_eq!(
        result.estimated_returns,
        result.total_value - result.total_invested
    );
}

#[test]
fn test_invested_equals_contribution_times_months() {
    let result = compute_summary(&input(dec!(750), dec!(9), dec!(6.5))).unwrap();
    assert_eq!(result.total_invested, dec!(750) * dec!(6.5) * dec!(12));
}

#[test]
fn test_summary_is_pure() {
    let i = input(dec!(1000), dec!(12), dec!(25));
    let a = compute_summary(&i).unwrap();
    let b = compute_summary(&i).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Validation tests
// ---------------------------------------------------------------------------

#[test]
fn test_negative_contribution_rejected() {
    let err = compute_summary(&input(dec!(-100), dec!(10), dec!(5))).unwrap_err();
    match err {
        SipError::InvalidInput { field, .. } => assert_eq!(field, "monthly_contribution"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_zero_rate_rejected() {
    // The formula divides by the monthly rate; zero is invalid, not a
    // degenerate no-growth case.
    let err = compute_summary(&input(dec!(1000), dec!(0), dec!(5))).unwrap_err();
    match err {
        SipError::InvalidInput { field, .. } => assert_eq!(field, "annual_rate_percent"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_zero_years_rejected() {
    assert!(compute_summary(&input(dec!(1000), dec!(12), dec!(0))).is_err());
}

#[test]
fn test_breakdown_validates_like_summary() {
    assert!(compute_yearly_breakdown(&input(dec!(0), dec!(12), dec!(5))).is_err());
}

#[test]
fn test_constructor_rejects_non_positive() {
    assert!(InvestmentInput::new(dec!(1000), dec!(-1), dec!(5)).is_err());
    assert!(InvestmentInput::new(dec!(1000), dec!(12), dec!(5)).is_ok());
}

#[test]
fn test_parse_valid_text() {
    let i = InvestmentInput::parse("1000", "12", "2.5").unwrap();
    assert_eq!(i.monthly_contribution, dec!(1000));
    assert_eq!(i.annual_rate_percent, dec!(12));
    assert_eq!(i.years, dec!(2.5));
}

#[test]
fn test_parse_trims_whitespace() {
    let i = InvestmentInput::parse(" 1000 ", "12\n", "\t5").unwrap();
    assert_eq!(i.monthly_contribution, dec!(1000));
}

#[test]
fn test_parse_rejects_non_numeric() {
    let err = InvestmentInput::parse("1000", "twelve", "5").unwrap_err();
    match err {
        SipError::InvalidInput { field, .. } => assert_eq!(field, "annual_rate_percent"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_blank() {
    assert!(InvestmentInput::parse("", "12", "5").is_err());
    assert!(InvestmentInput::parse("1000", "  ", "5").is_err());
}

#[test]
fn test_parse_rejects_negative_text() {
    assert!(InvestmentInput::parse("-100", "10", "5").is_err());
}

#[test]
fn test_extreme_rate_overflows_to_error() {
    // 200%/year over 50 years exceeds Decimal's range; the engine must
    // return an error rather than panic mid-computation.
    let err = compute_summary(&input(dec!(1000), dec!(200), dec!(50))).unwrap_err();
    match err {
        SipError::Overflow { .. } => {}
        other => panic!("Expected Overflow, got {other:?}"),
    }
    // Same guard on the fractional-month path and the breakdown.
    assert!(compute_summary(&input(dec!(1000), dec!(200), dec!(50.5))).is_err());
    assert!(compute_yearly_breakdown(&input(dec!(1000), dec!(200), dec!(50))).is_err());
}

// ---------------------------------------------------------------------------
// Breakdown tests
// ---------------------------------------------------------------------------

#[test]
fn test_breakdown_row_count_is_floor_of_years() {
    let rows = compute_yearly_breakdown(&input(dec!(1000), dec!(12), dec!(2.5))).unwrap();
    assert_eq!(rows.len(), 2);

    let rows = compute_yearly_breakdown(&input(dec!(1000), dec!(12), dec!(10))).unwrap();
    assert_eq!(rows.len(), 10);
}

#[test]
fn test_breakdown_empty_below_one_year() {
    let rows = compute_yearly_breakdown(&input(dec!(1000), dec!(12), dec!(0.75))).unwrap();
    assert!(rows.is_empty());

    // The summary still covers the fractional horizon.
    let summary = compute_summary(&input(dec!(1000), dec!(12), dec!(0.75))).unwrap();
    assert_eq!(summary.total_invested, dec!(9000));
    assert!(summary.total_value > summary.total_invested);
}

#[test]
fn test_breakdown_rows_ascending_and_cumulative() {
    let rows = compute_yearly_breakdown(&input(dec!(1000), dec!(12), dec!(5))).unwrap();
    for (idx, row) in rows.iter().enumerate() {
        assert_eq!(row.year, idx as u32 + 1);
        assert_eq!(row.returns_to_date, row.value_to_date - row.invested_to_date);
        assert_eq!(
            row.invested_to_date,
            dec!(1000) * dec!(12) * Decimal::from(row.year)
        );
    }
    // Each year strictly grows on the last.
    for pair in rows.windows(2) {
        assert!(pair[1].value_to_date > pair[0].value_to_date);
    }
}

#[test]
fn test_breakdown_rows_match_sub_horizon_summaries() {
    // Row y must equal a summary over an independent y-year horizon.
    let rows = compute_yearly_breakdown(&input(dec!(1000), dec!(12), dec!(3))).unwrap();
    for row in &rows {
        let sub = compute_summary(&input(dec!(1000), dec!(12), Decimal::from(row.year))).unwrap();
        assert_eq!(row.value_to_date, sub.total_value);
        assert_eq!(row.invested_to_date, sub.total_invested);
    }
}

#[test]
fn test_last_row_matches_summary_for_whole_years() {
    let i = input(dec!(2000), dec!(8), dec!(25));
    let summary = compute_summary(&i).unwrap();
    let rows = compute_yearly_breakdown(&i).unwrap();
    let last = rows.last().unwrap();

    let relative = ((last.value_to_date - summary.total_value) / summary.total_value).abs();
    assert!(
        relative < dec!(0.000000001),
        "Expected last row ~ summary, relative diff {}",
        relative
    );
    // ~1.91m after 25 years of 2000/month at 8%.
    assert!((summary.total_value - dec!(1914733.14)).abs() < dec!(1));
}

#[test]
fn test_breakdown_is_pure() {
    let i = input(dec!(1000), dec!(12), dec!(4));
    assert_eq!(
        compute_yearly_breakdown(&i).unwrap(),
        compute_yearly_breakdown(&i).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Envelope tests
// ---------------------------------------------------------------------------

#[test]
fn test_project_wraps_summary_and_breakdown() {
    let i = input(dec!(1000), dec!(12), dec!(2.5));
    let output = project(&i).unwrap();
    assert_eq!(output.result.yearly_breakdown.len(), 2);
    assert_eq!(output.result.summary.total_invested, dec!(30000));
    assert!(output.warnings.is_empty());
    assert!(!output.methodology.is_empty());
}

#[test]
fn test_project_warns_on_unrealistic_horizon() {
    let output = project(&input(dec!(100), dec!(5), dec!(150))).unwrap();
    assert_eq!(output.warnings.len(), 1);
    assert!(output.warnings[0].contains("150"));
}

#[test]
fn test_project_propagates_invalid_input() {
    assert!(project(&input(dec!(1000), dec!(-12), dec!(5))).is_err());
}

#[test]
fn test_project_round_trips_through_json() {
    let output = project(&input(dec!(1000), dec!(12), dec!(3))).unwrap();
    let value = serde_json::to_value(&output).unwrap();
    assert!(value.get("result").is_some());
    assert!(value["result"].get("summary").is_some());
    assert_eq!(
        value["result"]["yearly_breakdown"].as_array().unwrap().len(),
        3
    );
}
