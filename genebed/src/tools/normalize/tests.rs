use std::io::Cursor;

use rstest::{
    fixture,
    rstest,
};

use super::*;
use crate::data_structs::Strand;

#[fixture]
fn normalizer() -> ContigNormalizer {
    ContigNormalizer::default()
}

fn record(
    contig: &str,
    start: u64,
    end: u64,
) -> PositionRecord {
    PositionRecord::new("GENE", contig, start, end, Strand::Forward)
}

#[rstest]
#[case("17", "chr17")]
#[case("chr17", "chr17")]
#[case("X", "chrX")]
#[case("MT", "chrMT")]
#[case("KI270728.1", "chrKI270728.1")]
#[case("Chr1", "chrChr1")]
fn test_canonical_contig(
    #[case] input: &str,
    #[case] expected: &str,
) {
    assert_eq!(canonical_contig(input), expected);
    assert_eq!(canonical_contig(&canonical_contig(input)), expected);
}

#[rstest]
fn test_normalize_prefix_and_order(normalizer: ContigNormalizer) {
    let input = PositionRecord::new("A", "17", 100, 50, Strand::Reverse);
    let normalized = normalizer.normalize(input);

    assert_eq!(normalized.contig(), "chr17");
    assert_eq!((normalized.start(), normalized.end()), (50, 100));
    assert_eq!(normalized.strand(), Strand::Reverse);
    assert!(normalized.is_standard());
}

#[rstest]
#[case(record("17", 100, 50))]
#[case(record("chr17", 30, 80))]
#[case(record("CHR_HSCHR19KIR_FH05_B_HAP_CTG3_1", 10, 10))]
#[case(record("chr19_GL000209v2_alt", 90, 0))]
#[case(record("", 0, 0))]
fn test_normalize_idempotent(
    normalizer: ContigNormalizer,
    #[case] input: PositionRecord,
) {
    let once = normalizer.normalize(input);
    let twice = normalizer.normalize(once.clone());
    assert_eq!(once, twice);
    assert!(once.is_ordered());
    assert!(once.contig().starts_with("chr"));
}

#[rstest]
#[case("chr1", true)]
#[case("chr22", true)]
#[case("chrX", true)]
#[case("chrY", true)]
#[case("chr23", false)]
#[case("chrM", false)]
#[case("chrx", false)]
#[case("chr1_KI270706v1_random", false)]
#[case("chr19_GL000209v2_alt", false)]
fn test_standard_classification(
    normalizer: ContigNormalizer,
    #[case] contig: &str,
    #[case] expected: bool,
) {
    assert_eq!(normalizer.normalize(record(contig, 1, 2)).is_standard(), expected);
}

#[test]
fn test_standard_contigs_human() {
    let standard = StandardContigs::human();
    assert_eq!(standard.len(), 24);
    assert_eq!(standard.names().first(), Some(&"chr1"));
    assert_eq!(standard.names()[21], "chr22");
    assert_eq!(standard.names().last(), Some(&"chrY"));
}

#[test]
fn test_injected_standard_set() {
    let normalizer = ContigNormalizer::new(StandardContigs::from_iter(["2L", "chr2R", "X"]));
    assert!(normalizer.normalize(record("2L", 1, 2)).is_standard());
    assert!(normalizer.normalize(record("chr2R", 1, 2)).is_standard());
    assert!(!normalizer.normalize(record("chr1", 1, 2)).is_standard());
}

#[test]
fn test_standard_contigs_from_fai() {
    let fai = "1\t248956422\t52\t60\t61\n\
               2\t242193529\t253404903\t60\t61\n\
               MT\t16569\t3099750718\t70\t71\n";
    let standard = StandardContigs::from_fai(Cursor::new(fai)).unwrap();
    assert_eq!(standard.names(), vec!["chr1", "chr2", "chrMT"]);
    assert!(StandardContigs::from_fai(Cursor::new("")).is_err());
}

#[rstest]
fn test_normalize_batch_keeps_order(normalizer: ContigNormalizer) {
    let records = (0..500)
        .map(|i| PositionRecord::new(format!("G{}", i), (i % 25).to_string(), i + 10, i, Strand::Forward))
        .collect::<Vec<_>>();
    let expected = records
        .iter()
        .cloned()
        .map(|r| normalizer.normalize(r))
        .collect::<Vec<_>>();

    assert_eq!(normalizer.normalize_batch(records), expected);
}

#[rstest]
fn test_partition_standard(normalizer: ContigNormalizer) {
    let records = vec![
        PositionRecord::new("A", "1", 1, 2, Strand::Forward),
        PositionRecord::new("B", "HSCHR6_MHC_COX_CTG1", 1, 2, Strand::Forward),
        PositionRecord::new("C", "X", 1, 2, Strand::Reverse),
        PositionRecord::new("D", "chr7_KI270803v1_alt", 1, 2, Strand::Forward),
    ];
    let (standard, other) = normalizer.partition_standard(records);
    assert_eq!(
        standard.iter().map(|r| r.label()).collect::<Vec<_>>(),
        vec!["A", "C"]
    );
    assert_eq!(
        other.iter().map(|r| r.label()).collect::<Vec<_>>(),
        vec!["B", "D"]
    );
    assert_eq!(other[0].contig(), "chrHSCHR6_MHC_COX_CTG1");
}
