//! End-to-end tests for the embedded ECTb profile

use tagloss_core::{get_profile, GlossaryBuilder};

fn ectb_builder() -> GlossaryBuilder {
    let profile = get_profile("ectb").expect("ectb profile should exist");
    GlossaryBuilder::from_profile(profile).expect("ectb profile should build")
}

/// Tag list shaped like a real ECTb report export, including record
/// fields no group claims
const REPORT_TAGS: &[&str] = &[
    "PatientName",
    "PatientAge",
    "TotScore",
    "RestTotScore",
    "LADSevScore",
    "LCXSevScore",
    "RCASevScore",
    "TotSevScore",
    "LADExtentTotal",
    "RCAExtentTotal",
    "TIDindex",
    "StressLVEjectionFraction",
    "RestLVEjectionFraction",
    "UngMyoTotalMass",
    "UngMyoLADMass",
];

#[test]
fn test_full_report_glossary() {
    let entries = ectb_builder().build(REPORT_TAGS);

    let lines: Vec<(&str, &str, &str)> = entries
        .iter()
        .map(|e| {
            (
                e.group.as_str(),
                e.identifier.as_str(),
                e.sentence.as_str(),
            )
        })
        .collect();

    assert_eq!(
        lines,
        vec![
            (
                "summed-scores",
                "TotScore",
                "Stress total in standard deviation units"
            ),
            (
                "summed-scores",
                "RestTotScore",
                "Rest total in standard deviation units"
            ),
            (
                "severity-scores",
                "LADSevScore",
                "LAD territory severity score"
            ),
            (
                "severity-scores",
                "LCXSevScore",
                "LCX territory severity score"
            ),
            (
                "severity-scores",
                "RCASevScore",
                "RCA territory severity score"
            ),
            ("severity-scores", "TotSevScore", "Total severity score"),
            (
                "extent-totals",
                "LADExtentTotal",
                "LAD territory defect extent as percent of total myocardium"
            ),
            (
                "extent-totals",
                "RCAExtentTotal",
                "RCA territory defect extent as percent of total myocardium"
            ),
            (
                "ventricular-function",
                "TIDindex",
                "Transient ischemic dilation index"
            ),
            (
                "ventricular-function",
                "StressLVEjectionFraction",
                "Stress left ventricular ejection fraction"
            ),
            (
                "ventricular-function",
                "RestLVEjectionFraction",
                "Rest left ventricular ejection fraction"
            ),
            (
                "myocardial-mass",
                "UngMyoTotalMass",
                "Ungated mass in g, myocardium total"
            ),
            (
                "myocardial-mass",
                "UngMyoLADMass",
                "Ungated mass in g, myocardium LAD territory"
            ),
        ]
    );
}

#[test]
fn test_record_fields_are_not_glossed() {
    let entries = ectb_builder().build(REPORT_TAGS);
    assert!(entries.iter().all(|e| e.identifier != "PatientName"));
    assert!(entries.iter().all(|e| e.identifier != "PatientAge"));
}

#[test]
fn test_bare_summed_score_gets_stress_label() {
    let entries = ectb_builder().build(&["TotScore"]);
    assert_eq!(
        entries[0].sentence,
        "Stress total in standard deviation units"
    );

    // An explicit rest marker suppresses the label
    let entries = ectb_builder().build(&["RestTotScore"]);
    assert_eq!(entries[0].sentence, "Rest total in standard deviation units");
}

#[test]
fn test_vessel_codes_survive_segmentation_whole() {
    let entries = ectb_builder().build(&["StressLADSevScore"]);
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].sentence,
        "Stress LAD territory severity score"
    );
}

#[test]
fn test_mixed_case_acronym_prefix() {
    // TIDindex starts with an acronym glued to a lowercase word
    let entries = ectb_builder().build(&["TIDindex"]);
    assert_eq!(entries[0].group, "ventricular-function");
    assert_eq!(entries[0].sentence, "Transient ischemic dilation index");
}

#[test]
fn test_mass_suffix_is_silent() {
    let entries = ectb_builder().build(&["UngMyoTotalMass"]);
    assert_eq!(
        entries[0].sentence,
        "Ungated mass in g, myocardium total"
    );
    assert!(!entries[0].sentence.contains("Mass"));
}

#[test]
fn test_classify_partitions_report_tags() {
    let builder = ectb_builder();
    let classified = builder.classify(REPORT_TAGS);

    assert_eq!(classified.len(), 5);
    assert_eq!(classified[0].0, "summed-scores");
    assert_eq!(classified[0].1, vec!["TotScore", "RestTotScore"]);
    assert_eq!(
        classified[1].1,
        vec!["LADSevScore", "LCXSevScore", "RCASevScore", "TotSevScore"]
    );
    assert_eq!(classified[4].0, "myocardial-mass");
    assert_eq!(classified[4].1, vec!["UngMyoTotalMass", "UngMyoLADMass"]);
}

#[test]
fn test_glossary_is_deterministic() {
    let builder = ectb_builder();
    assert_eq!(builder.build(REPORT_TAGS), builder.build(REPORT_TAGS));
}
