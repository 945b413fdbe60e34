//! Record types flowing through the engine.
//!
//! - [`RawPositionRecord`]: what a record source hands over, every field
//!   optional. Validated into a [`PositionRecord`].
//! - [`PositionRecord`]: a single, complete gene position observation.
//! - [`MergedInterval`]: one BED output row, unique per label.
//!
//! Anything the engine can consume implements [`IntoPositionRecord`].

mod interval;
mod position;
mod raw;

pub use interval::MergedInterval;
pub use position::PositionRecord;
pub use raw::RawPositionRecord;

use crate::error::IntervalError;

/// Conversion into a complete [`PositionRecord`].
///
/// `index` is the position of the item in its batch and is only used to
/// report which record failed validation.
pub trait IntoPositionRecord {
    fn into_position_record(
        self,
        index: usize,
    ) -> Result<PositionRecord, IntervalError>;
}

impl IntoPositionRecord for PositionRecord {
    fn into_position_record(
        self,
        _index: usize,
    ) -> Result<PositionRecord, IntervalError> {
        Ok(self)
    }
}

impl IntoPositionRecord for &PositionRecord {
    fn into_position_record(
        self,
        _index: usize,
    ) -> Result<PositionRecord, IntervalError> {
        Ok(self.clone())
    }
}

impl IntoPositionRecord for RawPositionRecord {
    fn into_position_record(
        self,
        index: usize,
    ) -> Result<PositionRecord, IntervalError> {
        self.validate(index)
    }
}

impl IntoPositionRecord for &RawPositionRecord {
    fn into_position_record(
        self,
        index: usize,
    ) -> Result<PositionRecord, IntervalError> {
        self.clone().validate(index)
    }
}

impl IntoPositionRecord for MergedInterval {
    fn into_position_record(
        self,
        _index: usize,
    ) -> Result<PositionRecord, IntervalError> {
        Ok(self.into())
    }
}

impl IntoPositionRecord for &MergedInterval {
    fn into_position_record(
        self,
        _index: usize,
    ) -> Result<PositionRecord, IntervalError> {
        Ok(self.clone().into())
    }
}
