//! Static catalogs of 7-dimensional nilpotent Lie algebras.
//!
//! - [`NILPOTENT_LIE_ALGEBRAS_7`]: the nilpotent Lie algebras of dimension 7 in the
//!   classification of M.P. Gong (1998), including the one-parameter families;
//! - [`NONNICE_NILPOTENT_LIE_ALGEBRAS_7`]: the 7-dimensional nilpotent Lie algebras which admit
//!   no nice basis (D. Conti, F. Rossi, J. Algebra 525 (2019), Table 2).
//!
//! Entries are addressed by 1-based position or by name; unnamed entries are named after their
//! position.
use crate::lie::error::{LieError, LieResult};
use crate::lie::lie_algebra::LieAlgebra;
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationEntry {
    pub structure_constants: &'static str,
    pub parameters: &'static [&'static str],
    pub name: String,
}

impl ClassificationEntry {
    pub fn lie_algebra(&self) -> LieResult<LieAlgebra> {
        LieAlgebra::with_parameters(self.structure_constants, self.parameters)
    }
}

/// An immutable list of Lie algebras
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    entries: Vec<ClassificationEntry>,
}

type TableRow = (&'static str, &'static [&'static str], Option<&'static str>);

impl Classification {
    fn from_table(table: &[TableRow]) -> Self {
        let entries = table
            .iter()
            .enumerate()
            .map(|(k, &(structure_constants, parameters, name))| ClassificationEntry {
                structure_constants,
                parameters,
                name: name.map_or_else(|| (k + 1).to_string(), str::to_string),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// entry at a 1-based position
    pub fn entry(&self, index: usize) -> LieResult<&ClassificationEntry> {
        if index == 0 || index > self.entries.len() {
            return Err(LieError::NoSuchEntry {
                index,
                size: self.entries.len(),
            });
        }
        Ok(&self.entries[index - 1])
    }

    /// name of the entry at a 1-based position
    pub fn name(&self, index: usize) -> LieResult<&str> {
        Ok(&self.entry(index)?.name)
    }

    /// 1-based position and entry with the given name
    pub fn find(&self, name: &str) -> Option<(usize, &ClassificationEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.name == name)
            .map(|(k, e)| (k + 1, e))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassificationEntry> {
        self.entries.iter()
    }
}

/// Available catalogs, selectable by name in the driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum Catalog {
    Nilpotent7,
    NonNiceNilpotent7,
}

impl Catalog {
    pub fn classification(&self) -> &'static Classification {
        match self {
            Catalog::Nilpotent7 => &NILPOTENT_LIE_ALGEBRAS_7,
            Catalog::NonNiceNilpotent7 => &NONNICE_NILPOTENT_LIE_ALGEBRAS_7,
        }
    }
}

pub static NILPOTENT_LIE_ALGEBRAS_7: LazyLock<Classification> =
    LazyLock::new(|| Classification::from_table(GONG_7));

pub static NONNICE_NILPOTENT_LIE_ALGEBRAS_7: LazyLock<Classification> =
    LazyLock::new(|| Classification::from_table(NONNICE_7));

#[rustfmt::skip]
const GONG_7: &[TableRow] = &[
    // decomposable, 3+4
    ("0, 0, 0, 0, 12, 34, 36", &[], None),
    // decomposable, 6+1
    ("0, 0, 12, 13, 23, 14, 0", &[], None),
    ("0, 0, 12, 13, 23, 14 + 25, 0", &[], None),
    ("0, 0, 12, 13,23, 14 - 25, 0", &[], None),
    ("0,0,12,13,14+23,24+15, 0", &[], None),
    ("0, 0, 0, 12, 14, 15 + 23, 0", &[], None),
    ("0, 0, 0, 12, 14 - 23, 15 + 34, 0", &[], None),
    ("0, 0, 0, 12, 14, 15, 0", &[], None),
    ("0, 0, 0, 12, 23, 14 + 35, 0", &[], None),
    ("0, 0, 0, 12, 23, 14 - 35, 0", &[], None),
    ("0, 0, 0, 12, 13, 14 + 35, 0", &[], None),
    ("0, 0, 0, 12, 13, 14 + 23, 0", &[], None),
    ("0, 0, 0, 12, 13, 24, 0", &[], None),
    ("0, 0, 0, 12, 13, 23, 0", &[], None),
    ("0, 0, 0, 12, 14, 15 + 24, 0", &[], None),
    ("0, 0, 0, 12, 14, 15+ 23+ 24, 0", &[], None),
    ("0, 0, 0, 0, 12, 14 + 25, 0", &[], None),
    ("0, 0, 0, 0, 12, 15 + 34, 0", &[], None),
    ("0, 0, 0, 0, 13 + 42, 14 + 23, 0", &[], None),
    ("0, 0, 0, 0, 12, 14 + 23, 0", &[], None),
    ("0, 0, 0, 0, 12, 13, 0", &[], None),
    ("0, 0, 0, 0, 12, 34, 0", &[], None),
    ("0, 0, 0, 0, 0, 12 + 34, 0", &[], None),
    ("0, 0, 0, 0, 0, 12, 0", &[], None),
    ("0,0,12,13,14+23,34+52, 0", &[], None),
    ("0, 0, 12, 13, 14, 34 + 52, 0", &[], None),
    ("0, 0, 12, 13, 14, 15,0", &[], None),
    ("0,0,12,13,14,23+15,0", &[], None),
    ("0,0,0,12,14,24,0", &[], None),
    ("0,0,0,12,13+42,14+23,0", &[], None),
    ("0,0,0,12,14,13+42,0", &[], None),
    ("0,0,0,12,13+14,24,0", &[], None),
    ("0,0,0,12,13,14,0", &[], None),
    ("0,0,0,0,12,15,0", &[], None),
    // indecomposable, step 2
    ("0,0,0,0,12,23,24", &[], None),
    ("0,0,0,0,12,23,34", &[], None),
    ("0,0,0,0,12+34,23,24", &[], None),
    ("0,0,0,0,12+34,13,24", &[], None),
    ("0,0,0,0,0,12,14+35", &[], None),
    ("0,0,0,0,0,12+34,15+23", &[], None),
    ("0,0,0,0,0,0,12+34+56", &[], None),
    ("0,0,0,0,12-34,13+24,14", &[], None),
    ("0,0,0,0,12-34,13+24,14-23", &[], None),
    // indecomposable, step 3
    ("0,0,12,0,13,24,14", &[], None),
    ("0,0,12,0,13,23,14", &[], None),
    ("0,0,12,0,13+24,23,14", &[], None),
    ("0,0,12,0,0,13+24,15", &[], None),
    ("0,0,12,0,0,13,14+25", &[], None),
    ("0,0,12,0,0,13+24,25", &[], None),
    ("0,0,12,0,0,13+24,14+25", &[], None),
    ("0,0,12,0,0,13+45,24", &[], None),
    ("0,0,12,0,0,13+45,15+24", &[], None),
    ("0,0,12,0,0,13+24,45", &[], None),
    ("0,0,12,0,0,13+14,15+23", &[], None),
    ("0,0,12,0,0,13+24,15+23", &[], None),
    ("0,0,12,0,0,13,23+45", &[], None),
    ("0,0,12,0,0,13+24,23+45", &[], None),
    ("0,0,0,12,13,14,15", &[], None),
    ("0,0,0,12,13,14,35", &[], None),
    ("0,0,0,12,13,14+35,15", &[], None),
    ("0,0,0,12,13,14,25+34", &[], None),
    ("0,0,0,12,13,14+15,25+34", &[], None),
    ("0,0,0,12,13,24+35,25+34", &[], None),
    ("0,0,0,12,13,14+15+24+35,25+34", &[], None),
    ("0,0,0,12,13,14+24+35,25+34", &[], None),
    ("0,0,0,12,13,25+34,35", &[], None),
    ("0,0,0,12,13,15+35,25+34", &[], None),
    ("0,0,0,12,13,14+35,25+34", &[], None),
    ("0,0,0,12,13,14+23,15", &[], None),
    ("0,0,0,12,13,14+23,35", &[], None),
    ("0,0,0,12,13,15+24,23", &[], None),
    ("0,0,0,12,13,14+35,15+23", &[], None),
    ("0,0,0,12,13,23,25+34", &[], None),
    ("0,0,0,12,13,14+23,25+34", &[], None),
    ("0,0,0,12,13,14+15+23,25+34", &[], None),
    ("0,0,12,0,0,0,13+24+56", &[], None),
    ("0,0,0,12,13,0,16+25+34", &[], None),
    ("0,0,0,12,13,0,14+26+35", &[], None),
    ("0,0,0,12,23,-13,15+26+16-2*34", &[], None),
    ("0,0,0,0,12,34,15+36", &[], None),
    ("0,0,0,0,12,34,15+24+36", &[], None),
    ("0,0,0,0,12,14+23,16-35", &[], None),
    ("0,0,0,0,12,14+23,16+24-35", &[], None),
    ("0,0,12,0,0,13+14+25,15+23", &[], None),
    ("0,0,0,12,13,14,24+35", &[], None),
    ("0,0,0,12,13,24-35,25+34", &[], None),
    ("0,0,0,12,13,14+24-35,25+34", &[], None),
    ("0,0,0,12,13,23,24+35", &[], None),
    ("0,0,0,12,13,14+23,24+35", &[], None),
    ("0,0,0,12,13,0,16+24+35", &[], None),
    ("0,0,0,0,13+24,14-23,15+26", &[], Some("137A1")),
    ("0,0,0,0,13+24,14-23,15+26+24", &[], Some("137B1")),
    // indecomposable, step 4
    ("0,0,12,13,0,14,15", &[], None),
    ("0,0,12,13,0,25,14", &[], None),
    ("0,0,12,13,0,14+25,15", &[], None),
    ("0,0,12,13,0,14+23+25,15", &[], None),
    ("0,0,12,13,0,23+25,14", &[], None),
    ("0,0,12,13,0,14+23,15", &[], None),
    ("0,0,12,13,0,15+23,14", &[], None),
    ("0,0,12,13,0,23,14+25", &[], None),
    ("0,0,12,13,0,14+23,25", &[], None),
    ("0,0,12,13,0,14+23,23+25", &[], None),
    ("0,0,12,13,0,15+23,14+25", &[], None),
    ("0,0,12,13,23,14+25,15+24", &[], None),
    ("0,0,12,13,23,24+15,14", &[], None),
    ("0,0,0,12,14+23,13,15-34", &[], None),
    ("0,0,0,12,14+23,24,15-34", &[], None),
    ("0,0,0,12,14+23,13+24,15-34", &[], None),
    ("0,0,12,13,0,0,14+56", &[], None),
    ("0,0,12,13,0,0,23+14+56", &[], None),
    ("0,0,0,12,14+23,0,15+26-34", &[], None),
    ("0,0,0,12,14+23,0,15+36-34", &[], None),
    ("0,0,0,12,14+23,0,15+24+36-34", &[], None),
    ("0,0,12,0,23,24,16+25+34", &[], None),
    ("0,0,12,0,23,24,25+46", &[], None),
    ("0,0,12,0,23,24,13+25-46", &[], None),
    ("0,0,12,0,23,14,16+25", &[], None),
    ("0,0,12,0,23,14,16+25+26-34", &[], None),
    ("0,0,12,0,23,14,25+46", &[], None),
    ("0,0,12,0,23,14,13+25+46", &[], None),
    ("0,0,12,0,13+24,14,15+23+1/2*(26+34)", &[], None),
    ("0,0,12,0,13+24,23,16+25", &[], None),
    ("0,0,12,0,13+24,23,15+26+34", &[], None),
    ("0,0,12,0,13,23+24,15+26", &[], None),
    ("0,0,12,0,13,23+24,16+25+34", &[], None),
    ("0,0,12,13,23,14-25,15+24", &[], None),
    ("0,0,0,12,14+23,13-24,15-34", &[], None),
    ("0,0,12,0,23,24,13+25+46", &[], Some("137F1")),
    ("0,0,12,0,13+24,23,15+34-26", &[], Some("137P1")),
    ("0,0,12,0,13,23+24,15-26", &[], Some("1357Q1")),
    // indecomposable, step 5
    ("0,0,12,13,14,15,23", &[], None),
    ("0,0,12,13,14,25-34,23", &[], None),
    ("0,0,12,13,14,15,25-34", &[], None),
    ("0,0,12,13,14,15+23,25-34", &[], None),
    ("0,0,12,13,14+23,15+24,23", &[], None),
    ("0,0,12,13,14+23,25-34,23", &[], None),
    ("0,0,12,13,14+23,15+24,25-34", &[], None),
    ("0,0,12,13,14,0,15+26", &[], None),
    ("0,0,12,13,14,0,15+23+26", &[], None),
    ("0,0,12,13,14,0,16+25-34", &[], None),
    ("0,0,12,13,14+23,0,15+24+26", &[], None),
    ("0,0,12,13,14+23,0,16+25-34", &[], None),
    ("0,0,12,13,14,23,15+26", &[], None),
    ("0,0,12,13,14,23,16+24+25-34", &[], None),
    ("0,0,12,13,14,23,15+25+26-34", &[], None),
    ("0,0,12,13,0,14+25,16+35", &[], None),
    ("0,0,12,13,0,14+25,16+25+35", &[], None),
    ("0,0,12,13,0,14+25,26-34", &[], None),
    ("0,0,12,13,0,14+25,15+26-34", &[], None),
    ("0,0,12,13,0,14+23+25,16+24+35", &[], None),
    ("0,0,12,13,0,14+23+25,26-34", &[], None),
    ("0,0,12,13,0,14+23+25,15+26-34", &[], None),
    ("0,0,12,13,23,15+24,16+34", &[], None),
    ("0,0,12,13,23,15+24,16+25+34", &[], None),
    ("0,0,12,13,23,15+24,16+14+25+34", &[], None),
    ("0,0,12,13,23,15+24,16+14+34", &[], None),
    ("0,0,12,13,23,15+24,16+26+34-35", &[], None),
    ("0,0,0,12,14+23,15-34,16-35", &[], None),
    ("0,0,0,12,14+23,15-34,16+23-35", &[], None),
    ("0,0,0,12,14+23,15-34,16+24-35", &[], None),
    ("0,0,12,13,23,24+15,16+14-25+34", &[], Some("12457J1")),
    ("0,0,12,13,23,-14-25,16-35", &[], Some("12457L1")),
    ("0,0,12,13,23,-14-25,16-35+25", &[], Some("12457N1")),
    ("0,0,0,12,14+23,15-34,16-23-35", &[], Some("12357B1")),
    ("0,0,12,0,0,23+45,24", &[], None),
    ("0,0,12,13,14,15,16", &[], None),
    ("0,0,12,13,14,15,16+23", &[], None),
    ("0,0,12,13,14,15,16+25-34", &[], None),
    ("0,0,12,13,14,15+23,16+24", &[], None),
    ("0,0,12,13,14,15+23,16+23+24", &[], None),
    ("0,0,12,13,14,15+23,16+24+25-34", &[], None),
    ("0,0,12,13,14+23,15+24,16+23+25", &[], None),
    ("0,0,12,13,14+23,15+24,-16+23-25", &[], Some("123457H1")),
    // one-parameter families
    ("0,0,0,12,23,-13,[lambda]*26-15-[lambda-1]*34", &["lambda"], None),
    ("0,0,12,0,24+13,14,[1-lambda]*34 +15+[lambda]*26", &["lambda"], None),
    ("0,0,12,0,13+24,14,46+34+15+[lambda]*23", &["lambda"], None),
    ("0,0,12,0,13,24+23,25+34+16+15+[lambda]*26", &["lambda"], None),
    ("0,0,12,13,23,24+15,[lambda]*25+26+34-35+16+14", &["lambda"], None),
    ("0,0,12,13,14+23,24+15,[lambda]*25-[lambda-1]*34+16", &["lambda"], None),
    ("0,0,0,12,23,-13,2*26-2*34-[lambda]*16+[lambda]*25", &["lambda"], None),
    ("0,0,12,0,13+24,14-23,[lambda]*26+15-[lambda-1]*34", &["lambda"], None),
    ("0,0,12,13,23,-14-25,15-35+16+24+[lambda]*25", &["lambda"], None),];

#[rustfmt::skip]
const NONNICE_7: &[TableRow] = &[
    // decomposable
    ("0,0,12,13,0,14+23+25,0", &[], None),
    ("0,0,12,13,14,15+23,16+23+24", &[], None),
    ("0,0,12,13,14,15+23,16+24+25-34", &[], None),
    ("0,0,12,13,14+23,15+24,16+23+25", &[], None),
    ("0,0,12,13,14+23,15+24,-16+23-25", &[], Some("123457H1")),
    ("0,0,12,13,14+23,15+24,23", &[], None),
    ("0,0,12,13,14+23,25-34,23", &[], None),
    ("0,0,12,13,14,23,16+25+24-34", &[], None),
    ("0,0,12,13,14,23,15+25+26-34", &[], None),
    ("0,0,12,13,23,15+24,14+16+25+34", &[], None),
    ("0,0,12,13,23,15+24,14+16-25+34", &[], None),
    ("0,0,12,13,23,15+24,14+16+34", &[], None),
    ("0,0,12,13,23,15+24,14+16+[lambda]*25+26+34-35", &["lambda"], None),
    ("0,0,12,13,23,-14-25,16+25-35", &[], None),
    ("0,0,12,13,23,-14-25,15+16+24+[lambda]*25-35", &["lambda"], None),
    ("0,0,12,13,14,0,15+23+26", &[], None),
    ("0,0,12,13,14+23,0,15+24+26", &[], None),
    ("0,0,12,13,0,14+25,25+35+16", &[], None),
    ("0,0,12,13,0,14+23+25,16+24+35", &[], None),
    ("0,0,12,13,0,14+23+25,26-34", &[], None),
    ("0,0,12,13,0,14+23+25,15+26-34", &[], None),
    ("0,0,0,12,14+23,15-34,16+23-35", &[], None),
    ("0,0,12,13,0,25+23,14", &[], None),
    ("0,0,12,13,0,14+23,23+25", &[], None),
    ("0,0,12,0,13,23+24,15+16+25+[lambda]*26+34", &["lambda"], None),
    ("0,0,12,13,0,14+23+25,0", &[], None),
    ("0,0,12,13,0,14+25+23,15", &[], None),
    ("0,0,0,12,14+23,23,15-34", &[], None),
    ("0,0,12,0,23,14,16+26+25-34", &[], None),
    ("0,0,12,0,24+13,14,15+23+1/2*26+1/2*34", &[], None),
    ("0,0,12,0,24+13,14,15+[lambda]*23+34+46", &["lambda"], None),
    ("0,0,0,12,13,14+24-35,25+34", &[], None),
    ("0,0,0,12,13,15+35,25+34", &[], None),
    ("0,0,0,12,23,-13,15+16+26-2*34", &[], None),
    ("0,0,0,12,23,-13,[-lambda]*16+[lambda]*25+2*26-2*34", &["lambda"], None),
    ("0,0,0,12,14+23,0,15-34+36", &[], None),
    ("0,0,0,12,14+23,0,15-34+24+36", &[], None),
    ("0,0,12,0,0,13+14,15+23", &[], None),
    ("0,0,12,0,0,13+14+25,15+23", &[], None),];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_sizes_and_names() {
        assert_eq!(NILPOTENT_LIE_ALGEBRAS_7.len(), 182);
        assert_eq!(NONNICE_NILPOTENT_LIE_ALGEBRAS_7.len(), 39);
        assert_eq!(NILPOTENT_LIE_ALGEBRAS_7.name(1).unwrap(), "1");
        let (index, entry) = NONNICE_NILPOTENT_LIE_ALGEBRAS_7.find("123457H1").unwrap();
        assert_eq!(index, 5);
        assert_eq!(entry.structure_constants, "0,0,12,13,14+23,15+24,-16+23-25");
        assert!(NILPOTENT_LIE_ALGEBRAS_7.entry(0).is_err());
        assert!(NILPOTENT_LIE_ALGEBRAS_7.entry(183).is_err());
    }

    #[test]
    fn test_every_entry_parses() {
        for catalog in Catalog::iter() {
            for entry in catalog.classification().iter() {
                let g = entry.lie_algebra().unwrap();
                assert_eq!(g.dimension(), 7, "{}", entry.name);
                assert_eq!(g.has_parameters(), !entry.parameters.is_empty());
            }
        }
    }

    #[test]
    fn test_catalog_names() {
        assert_eq!(Catalog::from_str("NonNiceNilpotent7").unwrap(), Catalog::NonNiceNilpotent7);
        assert_eq!(Catalog::Nilpotent7.to_string(), "Nilpotent7");
        assert!(Catalog::from_str("Solvable7").is_err());
    }
}
