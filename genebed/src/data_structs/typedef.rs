/// Coordinate type for record and interval positions.
pub type PosType = u64;

/// Prefix every canonical contig name carries.
pub const CONTIG_PREFIX: &str = "chr";

/// Substring marking alternate locus contigs.
pub const ALT_MARKER: &str = "alt";
/// Substring marking patch (fix) contigs.
pub const FIX_MARKER: &str = "fix";
