//! End-to-end validation tests.
//!
//! These drive statistics + selection through the resolver, the rule
//! battery and report aggregation, and through the CLI `validate` command.

use pretty_assertions::assert_eq;
use wearcheck_cli::commands::validate::{evaluate, exit_status, ValidateArgs};
use wearcheck_lint::{run_validation, RuleCategory, Severity};
use wearcheck_spec::{Slot, UserSelection, HELMET_HEAD_HIDE_SET};
use wearcheck_tests::StatsFixture;

fn severity_of(report: &wearcheck_lint::ValidationReport, id: &str) -> Severity {
    report
        .result(id)
        .unwrap_or_else(|| panic!("missing result for {}", id))
        .result
}

// ============================================================================
// Triangle Budget Tests
// ============================================================================

#[test]
fn test_triangles_at_budget_pass() {
    let selection = UserSelection::new(Slot::UpperBody).hide(Slot::LowerBody);
    let stats = StatsFixture::new().triangles(3000).build();

    let report = run_validation(&stats, &selection, "jacket.glb");

    assert_eq!(report.applied_triangle_budget, 3000);
    assert_eq!(severity_of(&report, "triangles"), Severity::Pass);
    assert!(report.result("triangles").unwrap().tip.is_none());
}

#[test]
fn test_triangles_over_budget_fail_with_tip() {
    let selection = UserSelection::new(Slot::UpperBody).hide(Slot::LowerBody);
    let stats = StatsFixture::new().triangles(3001).build();

    let report = run_validation(&stats, &selection, "jacket.glb");

    let triangles = report.result("triangles").unwrap();
    assert_eq!(triangles.result, Severity::Fail);
    assert_eq!(triangles.category, RuleCategory::Geometry);
    assert!(triangles.tip.is_some());
    assert_eq!(report.overall, Severity::Fail);
}

#[test]
fn test_helmet_hiding_head_set_gets_override_budget() {
    let selection = UserSelection::new(Slot::Helmet).hide_all(HELMET_HEAD_HIDE_SET);
    let stats = StatsFixture::new().triangles(4000).build();

    let report = run_validation(&stats, &selection, "helmet.glb");

    assert_eq!(report.applied_triangle_budget, 4000);
    assert_eq!(report.overall, Severity::Pass);
    assert_eq!(report.notes.len(), 1);
    assert!(report.notes[0].contains("4000"));
}

#[test]
fn test_hands_replacing_base_note() {
    let selection = UserSelection::new(Slot::Hands).hand_hides_base(true);
    let stats = StatsFixture::new().triangles(1400).build();

    let report = run_validation(&stats, &selection, "gloves.glb");

    assert_eq!(report.applied_triangle_budget, 1500);
    assert_eq!(severity_of(&report, "triangles"), Severity::Pass);
    assert_eq!(
        report.notes,
        vec!["Hands replace the base hands, so the budget is raised to 1500 triangles.".to_string()]
    );
}

#[test]
fn test_skin_budget_and_texture_limit() {
    let selection = UserSelection::new(Slot::Skin);
    let stats = StatsFixture::new()
        .triangles(5000)
        .used_textures(5)
        .build();

    let report = run_validation(&stats, &selection, "skin.glb");

    assert_eq!(report.applied_triangle_budget, 5000);
    assert_eq!(report.max_textures, 5);
    assert_eq!(severity_of(&report, "textures"), Severity::Pass);
}

// ============================================================================
// Skin Weight Tests
// ============================================================================

#[test]
fn test_skin_weight_thresholds() {
    let selection = UserSelection::new(Slot::UpperBody);
    let cases = [
        (5, Severity::Pass),
        (10, Severity::Warn),
        (50, Severity::Fail),
    ];

    for (bad, expected) in cases {
        let stats = StatsFixture::new().skinning(1000, bad).build();
        let report = run_validation(&stats, &selection, "shirt.glb");
        assert_eq!(severity_of(&report, "skin-weights"), expected, "bad = {}", bad);
        assert_eq!(report.overall, expected, "bad = {}", bad);
    }
}

#[test]
fn test_skin_weights_skipped_without_skinning() {
    let stats = StatsFixture::new().build();
    let report = run_validation(&stats, &UserSelection::new(Slot::Hat), "hat.glb");
    assert!(report.result("skin-weights").is_none());
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn test_clean_model_passes_everything() {
    let stats = StatsFixture::new().build();
    let report = run_validation(&stats, &UserSelection::new(Slot::Hat), "hat.glb");

    assert_eq!(report.overall, Severity::Pass);
    assert!(report.results.iter().all(|r| r.is_pass()));
    assert!(report.notes.is_empty());
    assert_eq!(report.file_name, "hat.glb");
}

#[test]
fn test_warning_only_model_is_warn() {
    let stats = StatsFixture::new()
        .texture("strap", 256, 128)
        .used_textures(2)
        .normal_maps()
        .build();
    let report = run_validation(&stats, &UserSelection::new(Slot::Hat), "hat.glb");

    assert_eq!(severity_of(&report, "texture-square"), Severity::Warn);
    assert_eq!(severity_of(&report, "normal-maps"), Severity::Warn);
    assert_eq!(report.overall, Severity::Warn);
    assert!(!report.has_failures());
}

#[test]
fn test_fail_dominates_warn() {
    let stats = StatsFixture::new()
        .normal_maps()
        .bbox(3.0, 1.0, 1.0)
        .build();
    let report = run_validation(&stats, &UserSelection::new(Slot::Hat), "hat.glb");

    assert_eq!(severity_of(&report, "dimensions"), Severity::Fail);
    assert_eq!(report.overall, Severity::Fail);
    let counts = report.counts();
    assert_eq!(counts.fail, 1);
    assert_eq!(counts.warn, 1);
}

#[test]
fn test_empty_model_fails_integrity() {
    let stats = StatsFixture::new().triangles(0).materials(0).build();
    let report = run_validation(&stats, &UserSelection::new(Slot::Hat), "empty.glb");
    assert_eq!(severity_of(&report, "file-integrity"), Severity::Fail);
}

#[test]
fn test_file_size_thresholds() {
    let selection = UserSelection::new(Slot::Hat);
    let cases = [
        (1_048_576, Severity::Pass),
        (2_000_000, Severity::Warn),
        (4_000_000, Severity::Fail),
    ];
    for (bytes, expected) in cases {
        let stats = StatsFixture::new().file_size(bytes).build();
        let report = run_validation(&stats, &selection, "hat.glb");
        assert_eq!(severity_of(&report, "file-size"), expected, "bytes = {}", bytes);
    }
}

// ============================================================================
// CLI Command Tests
// ============================================================================

#[test]
fn test_cli_validate_reads_stats_file() {
    let (_dir, path) = StatsFixture::new().triangles(1600).write("boots.json");
    let args = ValidateArgs {
        stats: path.display().to_string(),
        target: "feet".to_string(),
        ..Default::default()
    };

    let report = evaluate(&args).unwrap();

    assert_eq!(report.target_slot, Slot::Feet);
    assert_eq!(report.applied_triangle_budget, 1500);
    assert_eq!(report.file_name, "boots.json");
    assert_eq!(report.overall, Severity::Fail);
    assert_eq!(exit_status(report.overall, false), 1);
}

#[test]
fn test_cli_validate_disable_rule() {
    let (_dir, path) = StatsFixture::new().triangles(1600).write("boots.json");
    let args = ValidateArgs {
        stats: path.display().to_string(),
        target: "feet".to_string(),
        disable: vec!["triangles".to_string()],
        ..Default::default()
    };

    let report = evaluate(&args).unwrap();

    assert!(report.result("triangles").is_none());
    assert_eq!(report.overall, Severity::Pass);
}

#[test]
fn test_cli_validate_rejects_head_target() {
    let (_dir, path) = StatsFixture::new().write("head.json");
    let args = ValidateArgs {
        stats: path.display().to_string(),
        target: "head".to_string(),
        ..Default::default()
    };
    assert!(evaluate(&args).is_err());
}

#[test]
fn test_cli_validate_missing_stats_file() {
    let args = ValidateArgs {
        stats: "/nonexistent/wearcheck/stats.json".to_string(),
        target: "hat".to_string(),
        ..Default::default()
    };
    assert!(evaluate(&args).is_err());
}
