use itertools::Itertools;
use rstest::{
    fixture,
    rstest,
};

use super::*;
use crate::data_structs::record::RawPositionRecord;
use crate::data_structs::Strand;
use crate::tools::normalize::StandardContigs;

fn rec(
    label: &str,
    contig: &str,
    start: PosType,
    end: PosType,
) -> PositionRecord {
    PositionRecord::new(label, contig, start, end, Strand::Forward)
}

fn iv(
    contig: &str,
    start: PosType,
    end: PosType,
    label: &str,
) -> MergedInterval {
    MergedInterval::new(contig, start, end, label)
}

#[fixture]
fn mixed_records() -> Vec<PositionRecord> {
    vec![
        rec("GENE10", "10", 500, 900),
        rec("GENEX", "X", 100, 200),
        rec("GENE2B", "chr2", 3000, 2000),
        rec("ALT", "chr19_GL000209v2_alt", 10, 20),
        rec("GENE1", "1", 10, 20),
        rec("FIX", "chr1_KN196472v1_fix", 10, 20),
        rec("GENE2A", "2", 50, 60),
        rec("GENE1", "chr1", 5, 15),
    ]
}

#[test]
fn test_end_to_end_scenario() {
    let records = vec![rec("A", "17", 100, 50), rec("A", "chr17", 30, 80)];
    let result = build_intervals(records, 0, true, true).unwrap();
    assert_eq!(result, vec![iv("chr17", 30, 100, "A")]);
}

#[test]
fn test_merge_union() {
    let records = vec![rec("G", "chr1", 10, 50), rec("G", "chr1", 5, 40)];
    let result = build_intervals(records, 0, false, false).unwrap();
    assert_eq!(result, vec![iv("chr1", 5, 50, "G")]);
}

#[test]
fn test_merge_keeps_labels_case_sensitive() {
    let records = vec![rec("tp53", "chr17", 10, 50), rec("TP53", "chr17", 5, 40)];
    let result = build_intervals(records, 0, false, false).unwrap();
    assert_eq!(result.len(), 2);
}

#[rstest]
#[case(iv("chr1", 5, 50, "A"), 10, (0, 60))]
#[case(iv("chr1", 100, 200, "A"), 10, (90, 210))]
#[case(iv("chr1", 10, 20, "A"), 10, (0, 30))]
#[case(iv("chr1", 10, 20, "A"), 0, (10, 20))]
fn test_extension(
    #[case] input: MergedInterval,
    #[case] extend_bp: PosType,
    #[case] expected: (PosType, PosType),
) {
    let result = build_intervals(vec![input], extend_bp, true, true).unwrap();
    assert_eq!((result[0].start(), result[0].end()), expected);
}

#[test]
fn test_extension_clamps_per_interval() {
    let records = vec![rec("NEAR", "chr1", 5, 50), rec("FAR", "chr1", 100, 200)];
    let result = build_intervals(records, 10, true, true).unwrap();
    assert_eq!(result, vec![
        iv("chr1", 0, 60, "NEAR"),
        iv("chr1", 90, 210, "FAR"),
    ]);
}

#[rstest]
fn test_sort_order(mixed_records: Vec<PositionRecord>) {
    let result = build_intervals(mixed_records, 0, true, true).unwrap();
    assert_eq!(result, vec![
        iv("chr1", 5, 20, "GENE1"),
        iv("chr2", 50, 60, "GENE2A"),
        iv("chr2", 2000, 3000, "GENE2B"),
        iv("chr10", 500, 900, "GENE10"),
        iv("chrX", 100, 200, "GENEX"),
    ]);
}

#[rstest]
fn test_filter_flags_are_independent(mixed_records: Vec<PositionRecord>) {
    let labels = |remove_alt, remove_fix| {
        build_intervals(mixed_records.clone(), 0, remove_alt, remove_fix)
            .unwrap()
            .into_iter()
            .map(|i| i.label().to_owned())
            .collect_vec()
    };

    let no_alt = labels(true, false);
    assert!(no_alt.contains(&"FIX".to_string()));
    assert!(!no_alt.contains(&"ALT".to_string()));

    let no_fix = labels(false, true);
    assert!(no_fix.contains(&"ALT".to_string()));
    assert!(!no_fix.contains(&"FIX".to_string()));

    let all = labels(false, false);
    assert_eq!(all.len(), 7);
    // chr1_KN196472v1_fix sorts right after chr1, chr19_..._alt after chr10
    assert_eq!(all, vec![
        "GENE1", "FIX", "GENE2A", "GENE2B", "GENE10", "ALT", "GENEX"
    ]);
}

#[rstest]
#[case(true, true)]
#[case(false, false)]
fn test_alt_contig_filtering(
    #[case] remove_alt: bool,
    #[case] expect_removed: bool,
) {
    let records = vec![
        rec("KEEP", "chr19", 1, 2),
        rec("ALT", "chr19_GL000209v2_alt", 1, 2),
    ];
    let result = build_intervals(records, 0, remove_alt, false).unwrap();
    let has_alt = result.iter().any(|i| i.label() == "ALT");
    assert_eq!(has_alt, !expect_removed);
}

#[test]
fn test_filter_is_substring_and_case_sensitive() {
    let engine = IntervalEngine::default();
    assert!(engine.is_excluded("chr1_alt_scaffold"));
    assert!(engine.is_excluded("chrHG1_fixed"));
    assert!(!engine.is_excluded("chr1_ALT"));
    assert!(!engine.is_excluded("chr1"));

    let permissive = IntervalEngine::new(
        ContigNormalizer::default(),
        MergeConfig::default()
            .with_remove_alt(false)
            .with_remove_fix(false),
    );
    assert!(!permissive.is_excluded("chr1_alt_scaffold"));
}

#[test]
fn test_empty_input() {
    let err = build_intervals(Vec::<PositionRecord>::new(), 0, true, true).unwrap_err();
    assert_eq!(err, IntervalError::EmptyInput {
        cause: EmptyCause::NoRecords,
    });
    assert!(err.is_empty_input());
}

#[test]
fn test_everything_filtered() {
    let records = vec![
        rec("A", "chr1_KI270762v1_alt", 1, 2),
        rec("B", "chr3_KV766192v1_fix", 1, 2),
    ];
    let err = build_intervals(records, 0, true, true).unwrap_err();
    assert_eq!(err, IntervalError::EmptyInput {
        cause: EmptyCause::AllFiltered { dropped: 2 },
    });
}

#[test]
fn test_missing_field_aborts_batch() {
    let records = vec![
        RawPositionRecord::new(Some("A"), Some("1"), Some(1), Some(2)),
        RawPositionRecord::new(Some("B"), Some("1"), None, Some(2)),
    ];
    let err = build_intervals(records, 0, true, true).unwrap_err();
    assert_eq!(err, IntervalError::InputShape {
        index: 1,
        field: "start",
    });
}

#[test]
fn test_raw_records_are_accepted() {
    let records = vec![
        RawPositionRecord::new(Some("A"), Some("17"), Some(100), Some(50)),
        RawPositionRecord::new(Some("A"), Some("chr17"), Some(30), Some(80)),
    ];
    let result = build_intervals(&records, 0, true, true).unwrap();
    assert_eq!(result, vec![iv("chr17", 30, 100, "A")]);
}

#[test]
fn test_cross_contig_first_wins() {
    let records = vec![rec("A", "chr5", 100, 200), rec("A", "chr1", 10, 20)];
    let result = build_intervals(records, 0, true, true).unwrap();
    assert_eq!(result, vec![iv("chr5", 10, 200, "A")]);
}

#[test]
fn test_cross_contig_fail() {
    let engine = IntervalEngine::new(
        ContigNormalizer::default(),
        MergeConfig::default().with_cross_contig(CrossContigPolicy::Fail),
    );
    let records = vec![rec("A", "5", 100, 200), rec("A", "chr1", 10, 20)];
    let err = engine.build(records).unwrap_err();
    assert_eq!(err, IntervalError::CrossContig {
        label: "A".into(),
        first: "chr5".into(),
        other: "chr1".into(),
    });

    // Bare and prefixed spellings of one chromosome are not a conflict
    let records = vec![rec("A", "5", 100, 200), rec("A", "chr5", 10, 20)];
    assert!(engine.build(records).is_ok());
}

#[rstest]
fn test_pipeline_fixed_point(mixed_records: Vec<PositionRecord>) {
    let first = build_intervals(mixed_records, 25, false, false).unwrap();
    let second = build_intervals(&first, 0, false, false).unwrap();
    assert_eq!(first, second);
    let third = build_intervals(second.clone(), 0, false, false).unwrap();
    assert_eq!(second, third);
}

#[test]
fn test_ties_keep_first_appearance() {
    let records = vec![
        rec("B", "chr1", 10, 30),
        rec("A", "chr1", 10, 20),
        rec("C", "chr1", 10, 40),
    ];
    let result = build_intervals(records, 0, true, true).unwrap();
    assert_eq!(
        result.iter().map(|i| i.label()).collect_vec(),
        vec!["B", "A", "C"]
    );
}

#[test]
fn test_engine_with_custom_standard_set() {
    let engine = IntervalEngine::new(
        ContigNormalizer::new(StandardContigs::from_iter(["2L", "2R", "3L"])),
        MergeConfig::default().with_extend_bp(5),
    );
    assert!(engine.normalizer().is_standard("chr2L"));
    assert_eq!(engine.config().extend_bp, 5);

    let records = vec![rec("b", "3L", 100, 110), rec("a", "2R", 1, 2)];
    let result = engine.build(records).unwrap();
    assert_eq!(result, vec![iv("chr2R", 0, 7, "a"), iv("chr3L", 95, 115, "b")]);
}

#[test]
fn test_sort_intervals_standalone() {
    let mut intervals = vec![
        iv("chrY", 1, 2, "y"),
        iv("chr10", 5, 6, "b"),
        iv("chr10", 1, 2, "a"),
        iv("chr9", 100, 200, "c"),
    ];
    sort_intervals(&mut intervals);
    assert_eq!(
        intervals.iter().map(|i| i.label()).collect_vec(),
        vec!["c", "a", "b", "y"]
    );
}

#[test]
fn test_merge_config_json() {
    let config: MergeConfig =
        serde_json::from_str(r#"{"extend_bp": 1000, "cross_contig": "fail"}"#).unwrap();
    assert_eq!(config.extend_bp, 1000);
    assert!(config.remove_alt);
    assert!(config.remove_fix);
    assert_eq!(config.cross_contig, CrossContigPolicy::Fail);
    assert_eq!(config.cross_contig.to_string(), "fail");
}
