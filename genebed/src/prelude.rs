pub use crate::data_structs::record::{
    IntoPositionRecord,
    MergedInterval,
    PositionRecord,
    RawPositionRecord,
};
pub use crate::data_structs::typedef::PosType;
pub use crate::data_structs::Strand;
pub use crate::error::{
    EmptyCause,
    IntervalError,
};
pub use crate::io::bed::BedWriter;
pub use crate::io::records::{
    read_records,
    RecordFormat,
};
pub use crate::tools::merge::{
    build_intervals,
    CrossContigPolicy,
    IntervalEngine,
    MergeConfig,
};
pub use crate::tools::natural::{
    natural_cmp,
    NaturalKey,
};
pub use crate::tools::normalize::{
    ContigNormalizer,
    StandardContigs,
};
