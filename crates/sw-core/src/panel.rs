//! Compare-panel identifiers.
//!
//! The workbench has exactly four panel slots. `PanelId` is the closed set of
//! slot names and `PanelSet` is an unordered set of them, iterated in the
//! natural order A, B, C, D.

use core::fmt;
use core::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// One of the four fixed compare-panel slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelId {
    A,
    B,
    C,
    D,
}

impl PanelId {
    /// All slots in natural order.
    pub const ALL: [PanelId; 4] = [PanelId::A, PanelId::B, PanelId::C, PanelId::D];

    /// 0-based slot index (A = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn letter(self) -> char {
        match self {
            PanelId::A => 'A',
            PanelId::B => 'B',
            PanelId::C => 'C',
            PanelId::D => 'D',
        }
    }

    /// Header text shown above the panel, e.g. "Panel A".
    pub fn label(self) -> String {
        format!("Panel {}", self.letter())
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for PanelId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "A" | "a" => Ok(PanelId::A),
            "B" | "b" => Ok(PanelId::B),
            "C" | "c" => Ok(PanelId::C),
            "D" | "d" => Ok(PanelId::D),
            other => Err(CoreError::InvalidPanelId {
                value: other.to_string(),
            }),
        }
    }
}

/// Unordered set of panel slots.
///
/// Membership is a bit mask, so two sets built in different insertion
/// orders compare equal and iterate identically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PanelSet(u8);

impl PanelSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn single(panel: PanelId) -> Self {
        Self(panel.bit())
    }

    pub fn all() -> Self {
        PanelId::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, panel: PanelId) {
        self.0 |= panel.bit();
    }

    pub fn with(mut self, panel: PanelId) -> Self {
        self.insert(panel);
        self
    }

    pub fn contains(self, panel: PanelId) -> bool {
        self.0 & panel.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Lowest member in natural order.
    pub fn first(self) -> Option<PanelId> {
        self.iter().next()
    }

    /// Members in natural order A, B, C, D.
    pub fn iter(self) -> impl Iterator<Item = PanelId> {
        PanelId::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl FromIterator<PanelId> for PanelSet {
    fn from_iter<I: IntoIterator<Item = PanelId>>(iter: I) -> Self {
        let mut set = PanelSet::empty();
        for panel in iter {
            set.insert(panel);
        }
        set
    }
}

impl fmt::Debug for PanelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for PanelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for panel in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{panel}")?;
            first = false;
        }
        Ok(())
    }
}

/// Parses comma-separated ids such as `"A,C"`. Duplicates collapse.
impl FromStr for PanelSet {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(PanelId::from_str)
            .collect()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{PanelId, PanelSet};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for PanelId {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for PanelId {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for PanelSet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de> Deserialize<'de> for PanelSet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let ids = Vec::<PanelId>::deserialize(deserializer)?;
            Ok(ids.into_iter().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_panel_ids() {
        assert_eq!("A".parse::<PanelId>().unwrap(), PanelId::A);
        assert_eq!(" d ".parse::<PanelId>().unwrap(), PanelId::D);
        assert!(matches!(
            "E".parse::<PanelId>(),
            Err(CoreError::InvalidPanelId { .. })
        ));
    }

    #[test]
    fn index_matches_natural_order() {
        for (i, panel) in PanelId::ALL.into_iter().enumerate() {
            assert_eq!(panel.index(), i);
            assert_eq!(PanelId::from_index(i), Some(panel));
        }
        assert_eq!(PanelId::from_index(4), None);
        assert_eq!(PanelId::C.label(), "Panel C");
    }

    #[test]
    fn set_iterates_in_natural_order() {
        let set: PanelSet = [PanelId::D, PanelId::A, PanelId::C].into_iter().collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![PanelId::A, PanelId::C, PanelId::D]);
        assert_eq!(set.first(), Some(PanelId::A));
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "A,C,D");
    }

    #[test]
    fn set_insert_is_idempotent() {
        let mut set = PanelSet::single(PanelId::B);
        set.insert(PanelId::B);
        assert_eq!(set.len(), 1);
        assert!(PanelSet::empty().is_empty());
        assert_eq!(PanelSet::empty().first(), None);
        assert_eq!(PanelSet::all().len(), 4);
    }

    #[test]
    fn parse_set() {
        let set: PanelSet = "C, A,C".parse().unwrap();
        assert_eq!(set, PanelSet::single(PanelId::A).with(PanelId::C));
        assert!("A,X".parse::<PanelSet>().is_err());
    }
}
