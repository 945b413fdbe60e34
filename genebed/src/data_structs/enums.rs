use std::fmt::Display;
use std::str::FromStr;

use serde::de::{
    self,
    Visitor,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Orientation of a gene on its contig.
///
/// Annotation sources encode it as `1` / `-1`; `+` / `-` are accepted as
/// well when parsing.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Default)]
pub enum Strand {
    /// Forward strand.
    #[default]
    Forward,
    /// Reverse strand.
    Reverse,
}

impl Strand {
    /// Numeric encoding, `1` or `-1`.
    pub fn as_i8(&self) -> i8 {
        match self {
            Strand::Forward => 1,
            Strand::Reverse => -1,
        }
    }
}

impl TryFrom<i64> for Strand {
    type Error = anyhow::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Strand::Forward),
            -1 => Ok(Strand::Reverse),
            other => anyhow::bail!("Invalid strand value: {}", other),
        }
    }
}

impl From<Strand> for i8 {
    fn from(value: Strand) -> i8 {
        value.as_i8()
    }
}

impl From<Strand> for char {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl FromStr for Strand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "1" | "+1" => Ok(Strand::Forward),
            "-" | "-1" => Ok(Strand::Reverse),
            other => anyhow::bail!("Invalid strand value: {:?}", other),
        }
    }
}

impl Display for Strand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Serialize for Strand {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_i8(self.as_i8())
    }
}

struct StrandVisitor;

impl<'de> Visitor<'de> for StrandVisitor {
    type Value = Strand;

    fn expecting(
        &self,
        formatter: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        formatter.write_str("1, -1, \"+\" or \"-\"")
    }

    fn visit_i64<E: de::Error>(
        self,
        v: i64,
    ) -> Result<Strand, E> {
        Strand::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(
        self,
        v: u64,
    ) -> Result<Strand, E> {
        i64::try_from(v)
            .map_err(E::custom)
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_str<E: de::Error>(
        self,
        v: &str,
    ) -> Result<Strand, E> {
        Strand::from_str(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Strand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        deserializer.deserialize_any(StrandVisitor)
    }
}
