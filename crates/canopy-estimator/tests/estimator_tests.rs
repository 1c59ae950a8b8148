//! Integration tests for the sequestration estimator.
//!
//! Covers:
//! - annual and cumulative series values
//! - zero-quantity and empty selection sets
//! - logistic shape (monotonicity, symmetry around the midpoint)
//! - closed-form totals and aggregates
//! - validation errors
//! - quantity limits and unrepresentable estimates
//! - chart derivations (bars, palette, survival bands)

use canopy_catalog::Catalog;
use canopy_estimator::{
    bar_data, color_for, compute_time_series, compute_totals, survival_bars, GrowthModel,
    PALETTE,
};
use canopy_types::{
    ErrorCode, Selection, SurvivalBand, ViewMode, DEFAULT_HORIZON_YEARS, MAX_QUANTITY,
};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn neem() -> Selection {
    Selection::new("Neem", 3, 0.92)
}

/// Three species with survival given as percentages.
fn mixed_selection() -> Vec<Selection> {
    vec![
        Selection::with_survival_percent("Banyan", 5, 85.0),
        Selection::with_survival_percent("Gulmohar", 7, 78.0),
        Selection::with_survival_percent("Neem", 3, 92.0),
    ]
}

fn planted(name: &str, quantity: i64) -> Selection {
    Selection {
        name: name.to_string(),
        quantity,
        survival_rate: 1.0,
    }
}

fn column(series: &[canopy_estimator::YearlyDataPoint], name: &str) -> Vec<i64> {
    series.iter().map(|p| p.values[name]).collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// Time series
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn annual_series_for_neem() {
    let series = compute_time_series(&[neem()], 20, ViewMode::Annual).unwrap();
    assert_eq!(
        column(&series, "Neem"),
        vec![
            48, 63, 83, 108, 139, 176, 220, 269, 323, 380, 436, 490, 540, 584, 621, 652, 677,
            697, 712, 724
        ]
    );
}

#[test]
fn annual_value_at_midpoint() {
    let series = compute_time_series(&[neem()], 20, ViewMode::Annual).unwrap();
    let year10 = &series[9];
    assert_eq!(year10.year, 10);
    assert_eq!(year10.values["Neem"], 380);
}

#[test]
fn cumulative_series_applies_damped_proxy() {
    let series = compute_time_series(&[neem()], 20, ViewMode::Cumulative).unwrap();
    let values = column(&series, "Neem");
    assert_eq!(values[0], 38);
    assert_eq!(values[9], 3039);
    assert_eq!(values[19], 11579);
}

#[test]
fn series_length_matches_horizon() {
    for horizon in [1, 5, 20, 50] {
        let series =
            compute_time_series(&mixed_selection(), horizon, ViewMode::Annual).unwrap();
        assert_eq!(series.len(), horizon as usize);
        assert_eq!(series.first().unwrap().year, 1);
        assert_eq!(series.last().unwrap().year, horizon);
    }
}

#[test]
fn shorter_horizon_is_a_prefix() {
    let full = compute_time_series(&mixed_selection(), 20, ViewMode::Cumulative).unwrap();
    let short = compute_time_series(&mixed_selection(), 8, ViewMode::Cumulative).unwrap();
    assert_eq!(&full[..8], &short[..]);
}

#[test]
fn every_year_has_every_species() {
    let series = compute_time_series(&mixed_selection(), 20, ViewMode::Annual).unwrap();
    for point in &series {
        let names: Vec<_> = point.values.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Banyan", "Gulmohar", "Neem"]);
    }
}

#[test]
fn empty_selection_yields_empty_records() {
    let series = compute_time_series(&[], DEFAULT_HORIZON_YEARS, ViewMode::Cumulative).unwrap();
    assert_eq!(series.len(), 20);
    assert!(series.iter().all(|p| p.values.is_empty()));
}

#[test]
fn zero_quantity_contributes_no_entry() {
    let selections = vec![neem(), Selection::new("Teak", 0, 0.7)];
    let series = compute_time_series(&selections, 20, ViewMode::Annual).unwrap();
    assert!(series.iter().all(|p| !p.values.contains_key("Teak")));
    assert!(series.iter().all(|p| p.values.contains_key("Neem")));
}

#[test]
fn time_series_is_idempotent() {
    let selections = mixed_selection();
    for mode in [ViewMode::Annual, ViewMode::Cumulative] {
        let first = compute_time_series(&selections, 20, mode).unwrap();
        let second = compute_time_series(&selections, 20, mode).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn series_json_shape() {
    let series = compute_time_series(&[neem()], 2, ViewMode::Annual).unwrap();
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json[0]["year"], 1);
    assert_eq!(json[0]["values"]["Neem"], 48);
    assert_eq!(json[1]["values"]["Neem"], 63);
}

// ══════════════════════════════════════════════════════════════════════════════
// Logistic shape
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn annual_rate_non_decreasing_up_to_midpoint() {
    let model = GrowthModel::default();
    let s = neem();
    for year in 1..10 {
        assert!(model.annual_rate(&s, year) <= model.annual_rate(&s, year + 1));
    }
}

#[test]
fn annual_rate_symmetric_around_midpoint() {
    let model = GrowthModel::default();
    let s = neem();
    let saturated = model.saturated_rate(&s);
    for d in 1..=9 {
        let sum = model.annual_rate(&s, 10 - d) + model.annual_rate(&s, 10 + d);
        assert!((sum - saturated).abs() < 1e-9, "offset {d}: {sum} vs {saturated}");
    }

    let series = compute_time_series(&[s], 19, ViewMode::Annual).unwrap();
    let rounded = column(&series, "Neem");
    let target = saturated.round() as i64;
    for d in 1..=9usize {
        let sum = rounded[9 - d] + rounded[9 + d];
        assert!((sum - target).abs() <= 1, "offset {d}: {sum} vs {target}");
    }
}

#[test]
fn custom_model_changes_values() {
    let model = GrowthModel {
        biomass_per_tree: 300.0,
        ..GrowthModel::default()
    };
    let doubled = model.time_series(&[neem()], 20, ViewMode::Annual).unwrap();
    let base = compute_time_series(&[neem()], 20, ViewMode::Annual).unwrap();
    assert_eq!(doubled[9].values["Neem"], 760);
    assert!(doubled[0].values["Neem"] > base[0].values["Neem"]);
}

// ══════════════════════════════════════════════════════════════════════════════
// Totals
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn totals_for_neem() {
    let totals = compute_totals(&[neem()], 20).unwrap();
    assert_eq!(totals.per_species["Neem"], 15194);
    assert_eq!(totals.total_co2, 15194);
    assert_eq!(totals.total_trees, 3);
    assert_eq!(totals.species_count, 1);
    assert!((totals.avg_survival_rate - 0.92).abs() < 1e-12);
}

#[test]
fn totals_aggregate_mixed_selection() {
    let totals = compute_totals(&mixed_selection(), 20).unwrap();
    assert_eq!(totals.per_species["Banyan"], 23396);
    assert_eq!(totals.per_species["Gulmohar"], 30057);
    assert_eq!(totals.per_species["Neem"], 15194);
    assert_eq!(totals.total_co2, 23396 + 30057 + 15194);
    assert_eq!(totals.total_trees, 15);
    let mean = (0.85 + 0.78 + 0.92) / 3.0;
    assert!((totals.avg_survival_rate - mean).abs() < 1e-12);
}

#[test]
fn average_survival_is_not_quantity_weighted() {
    let selections = vec![
        Selection::new("Neem", 1000, 0.9),
        Selection::new("Teak", 1, 0.5),
    ];
    let totals = compute_totals(&selections, 20).unwrap();
    assert!((totals.avg_survival_rate - 0.7).abs() < 1e-12);
}

#[test]
fn totals_differ_from_series_endpoint() {
    let totals = compute_totals(&[neem()], 20).unwrap();
    let series = compute_time_series(&[neem()], 20, ViewMode::Cumulative).unwrap();
    assert_ne!(totals.per_species["Neem"], series[19].values["Neem"]);
}

#[test]
fn totals_scale_with_horizon() {
    let selections = vec![Selection::new("Neem", 3, 0.85)];
    let twenty = compute_totals(&selections, 20).unwrap();
    let ten = compute_totals(&selections, 10).unwrap();
    assert_eq!(twenty.per_species["Neem"], 14038);
    assert_eq!(ten.per_species["Neem"], 7019);
    assert_eq!(ten.horizon_years, 10);
}

#[test]
fn empty_totals_are_zero() {
    let totals = compute_totals(&[], 20).unwrap();
    assert!(totals.per_species.is_empty());
    assert_eq!(totals.total_trees, 0);
    assert_eq!(totals.total_co2, 0);
    assert_eq!(totals.species_count, 0);
    assert_eq!(totals.avg_survival_rate, 0.0);
}

#[test]
fn zero_quantity_excluded_from_totals() {
    let selections = vec![neem(), Selection::new("Banyan", 0, 0.1)];
    let totals = compute_totals(&selections, 20).unwrap();
    assert!(!totals.per_species.contains_key("Banyan"));
    assert_eq!(totals.species_count, 1);
    assert!((totals.avg_survival_rate - 0.92).abs() < 1e-12);
}

#[test]
fn totals_with_catalog_rates() {
    let catalog = Catalog::builtin();
    let selections = vec![
        catalog.selection("Neem", 1).unwrap(),
        catalog.selection("Sal", 1).unwrap(),
    ];
    let totals = compute_totals(&selections, 20).unwrap();
    assert_eq!(totals.per_species["Neem"], 4679);
    assert_eq!(totals.per_species["Sal"], 3578);
}

// ══════════════════════════════════════════════════════════════════════════════
// Validation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn zero_horizon_rejected() {
    let err = compute_time_series(&[neem()], 0, ViewMode::Annual).unwrap_err();
    assert_eq!(err.code, ErrorCode::NON_POSITIVE_HORIZON);
    let err = compute_totals(&[neem()], 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::NON_POSITIVE_HORIZON);
}

#[test]
fn negative_quantity_rejected() {
    let bad = Selection {
        name: "Neem".into(),
        quantity: -2,
        survival_rate: 0.8,
    };
    let err = compute_totals(&[bad.clone()], 20).unwrap_err();
    assert_eq!(err.code, ErrorCode::NEGATIVE_QUANTITY);
    let err = compute_time_series(&[bad], 20, ViewMode::Cumulative).unwrap_err();
    assert_eq!(err.code, ErrorCode::NEGATIVE_QUANTITY);
}

#[test]
fn survival_out_of_range_rejected() {
    let err = compute_totals(&[Selection::new("Neem", 1, 92.0)], 20).unwrap_err();
    assert_eq!(err.code, ErrorCode::SURVIVAL_OUT_OF_RANGE);
    assert!(err.is_validation());
}

#[test]
fn duplicate_species_rejected() {
    let err = compute_totals(&[neem(), neem()], 20).unwrap_err();
    assert_eq!(err.code, ErrorCode::DUPLICATE_SPECIES);
}

#[test]
fn invalid_model_rejected_before_computing() {
    let model = GrowthModel {
        carbon_fraction: f64::INFINITY,
        ..GrowthModel::default()
    };
    let err = model.totals(&[neem()], 20).unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_MODEL_PARAMETER);
}

// ══════════════════════════════════════════════════════════════════════════════
// Quantity limits
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn quantity_above_cap_rejected_everywhere() {
    let selections = vec![planted("Neem", MAX_QUANTITY + 1)];
    let err = compute_totals(&selections, 20).unwrap_err();
    assert_eq!(err.code, ErrorCode::QUANTITY_TOO_LARGE);
    assert_eq!(err.subject.as_deref(), Some("Neem"));
    assert_eq!(
        compute_time_series(&selections, 20, ViewMode::Annual).unwrap_err().code,
        ErrorCode::QUANTITY_TOO_LARGE
    );
    assert_eq!(
        bar_data(&selections, 20).unwrap_err().code,
        ErrorCode::QUANTITY_TOO_LARGE
    );
}

#[test]
fn two_max_int_species_rejected_without_overflow() {
    let selections = vec![planted("Neem", i64::MAX), planted("Teak", i64::MAX)];
    let err = compute_totals(&selections, 20).unwrap_err();
    assert_eq!(err.code, ErrorCode::QUANTITY_TOO_LARGE);
}

#[test]
fn totals_exact_at_quantity_cap() {
    let selections = vec![planted("Neem", MAX_QUANTITY), planted("Teak", MAX_QUANTITY)];
    let totals = compute_totals(&selections, 20).unwrap();
    assert_eq!(totals.per_species["Neem"], 5_505_000_000_000);
    assert_eq!(totals.per_species["Teak"], 5_505_000_000_000);
    assert_eq!(totals.total_co2, 11_010_000_000_000);
    assert_eq!(totals.total_trees, 2_000_000_000);
}

#[test]
fn series_and_bars_exact_at_quantity_cap() {
    let selections = vec![planted("Neem", MAX_QUANTITY)];
    let annual = compute_time_series(&selections, 20, ViewMode::Annual).unwrap();
    assert_eq!(annual[9].values["Neem"], 137_625_000_000);
    let cumulative = compute_time_series(&selections, 20, ViewMode::Cumulative).unwrap();
    assert_eq!(cumulative[9].values["Neem"], 1_101_000_000_000);
    let bars = bar_data(&selections, 20).unwrap();
    assert_eq!(bars[0].total, 5_505_000_000_000);
}

#[test]
fn huge_horizon_is_out_of_range_not_capped() {
    let selections = vec![planted("Neem", MAX_QUANTITY)];
    let err = compute_totals(&selections, u32::MAX).unwrap_err();
    assert_eq!(err.code, ErrorCode::ESTIMATE_OUT_OF_RANGE);
    assert_eq!(err.subject.as_deref(), Some("Neem"));
    assert_eq!(
        bar_data(&selections, u32::MAX).unwrap_err().code,
        ErrorCode::ESTIMATE_OUT_OF_RANGE
    );
}

#[test]
fn oversized_model_is_out_of_range_in_series() {
    let model = GrowthModel {
        biomass_per_tree: 1e12,
        ..GrowthModel::default()
    };
    let err = model
        .time_series(&[planted("Neem", MAX_QUANTITY)], 20, ViewMode::Annual)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ESTIMATE_OUT_OF_RANGE);
}

#[test]
fn aggregate_overflow_is_reported() {
    // Each species fits on its own (about 4.8e18 kg); the sum does not.
    let model = GrowthModel {
        biomass_per_tree: 1.3e8,
        ..GrowthModel::default()
    };
    let selections = vec![planted("Neem", MAX_QUANTITY), planted("Teak", MAX_QUANTITY)];
    let err = model.totals(&selections, 20).unwrap_err();
    assert_eq!(err.code, ErrorCode::ESTIMATE_OUT_OF_RANGE);
    assert_eq!(err.subject.as_deref(), Some("total_co2"));
}

// ══════════════════════════════════════════════════════════════════════════════
// Chart derivations
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn bar_data_matches_totals_and_palette() {
    let bars = bar_data(&mixed_selection(), 20).unwrap();
    let totals = compute_totals(&mixed_selection(), 20).unwrap();
    assert_eq!(bars.len(), 3);
    for (i, bar) in bars.iter().enumerate() {
        assert_eq!(bar.total, totals.per_species[&bar.name]);
        assert_eq!(bar.fill, PALETTE[i]);
    }
    assert_eq!(bars[0].name, "Banyan");
}

#[test]
fn palette_wraps_after_ten() {
    assert_eq!(color_for(0), "#1f77b4");
    assert_eq!(color_for(10), "#1f77b4");
    assert_eq!(color_for(13), PALETTE[3]);
}

#[test]
fn bar_data_skips_zero_quantity_without_gaps_in_palette() {
    let selections = vec![Selection::new("Teak", 0, 0.7), neem()];
    let bars = bar_data(&selections, 20).unwrap();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].fill, PALETTE[0]);
}

#[test]
fn survival_bars_classify_bands() {
    let selections = vec![
        Selection::new("Neem", 1, 0.85),
        Selection::new("Sal", 1, 0.65),
        Selection::new("Oak", 1, 0.5),
    ];
    let bars = survival_bars(&selections).unwrap();
    let bands: Vec<_> = bars.iter().map(|b| b.band).collect();
    assert_eq!(
        bands,
        vec![SurvivalBand::High, SurvivalBand::Medium, SurvivalBand::Low]
    );
    assert!((bars[0].percent - 85.0).abs() < 1e-9);
    assert_eq!(bars[2].color, "#d62728");
}
