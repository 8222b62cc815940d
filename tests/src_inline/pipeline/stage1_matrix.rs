use super::*;
use crate::error::AlterationError;
use crate::test_support::{MockProfileSource, SCENARIO_CNA, SCENARIO_MUT, genes};

#[test]
fn test_scenario_matrix() {
    let source = MockProfileSource::scenario();
    let out = run_stage1(&source, &genes(&["TP53"])).unwrap();

    assert_eq!(out.case_matrix.n_cases(), 2);
    let m = &out.case_matrix;
    assert_eq!(m.value("CASE_A", "TP53", GeneticProfileKind::CopyNumber), Some("2"));
    assert_eq!(m.value("CASE_A", "TP53", GeneticProfileKind::Mutation), Some("MUT1"));
    assert_eq!(m.value("CASE_B", "TP53", GeneticProfileKind::CopyNumber), Some("NaN"));
    assert_eq!(m.value("CASE_B", "TP53", GeneticProfileKind::Mutation), Some("NaN"));

    let tp53 = &out.gene_metadata["TP53"];
    assert_eq!(tp53.common_name.as_deref(), Some("TP53"));
    assert_eq!(tp53.gene_id.as_deref(), Some("7157"));
}

#[test]
fn test_merge_order_is_commutative() {
    let mut forward = CaseMatrixBuilder::new(ProfileSchema::default());
    forward
        .add_profile_text(GeneticProfileKind::CopyNumber, SCENARIO_CNA)
        .unwrap();
    forward
        .add_profile_text(GeneticProfileKind::Mutation, SCENARIO_MUT)
        .unwrap();

    let mut reverse = CaseMatrixBuilder::new(ProfileSchema::default());
    reverse
        .add_profile_text(GeneticProfileKind::Mutation, SCENARIO_MUT)
        .unwrap();
    reverse
        .add_profile_text(GeneticProfileKind::CopyNumber, SCENARIO_CNA)
        .unwrap();

    assert_eq!(forward.finish(), reverse.finish());
}

#[test]
fn test_sparse_profiles_union_cases() {
    let cna = "COMMON\tGENE_ID\tA\nEGFR\t1956\t2\n";
    let mutation = "COMMON\tGENE_ID\tB\nTP53\t7157\tR273H\n";
    let mut builder = CaseMatrixBuilder::new(ProfileSchema::default());
    builder
        .add_profile_text(GeneticProfileKind::CopyNumber, cna)
        .unwrap();
    builder
        .add_profile_text(GeneticProfileKind::Mutation, mutation)
        .unwrap();
    let out = builder.finish();

    assert_eq!(out.case_matrix.n_cases(), 2);
    assert_eq!(out.gene_metadata.len(), 2);
    assert!(out.case_matrix.case("A").unwrap().gene("TP53").is_none());
    assert_eq!(
        out.case_matrix.value("B", "TP53", GeneticProfileKind::Mutation),
        Some("R273H")
    );
}

#[test]
fn test_retrieval_failure_propagates() {
    let source = MockProfileSource::new().with(GeneticProfileKind::CopyNumber, SCENARIO_CNA);
    let err = run_stage1(&source, &genes(&["TP53"])).unwrap_err();
    assert!(matches!(
        err,
        AlterationError::Retrieval {
            kind: GeneticProfileKind::Mutation,
            ..
        }
    ));
}

#[test]
fn test_malformed_profile_aborts_build() {
    let source = MockProfileSource::new()
        .with(GeneticProfileKind::CopyNumber, "COMMON\tGENE_ID\tA\nTP53\t7157\n")
        .with(GeneticProfileKind::Mutation, SCENARIO_MUT);
    let err = run_stage1(&source, &genes(&["TP53"])).unwrap_err();
    assert!(matches!(err, AlterationError::MalformedProfileData(_)));
}
