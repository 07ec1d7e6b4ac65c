/*
Genetics, a toy model of DNA strand manipulation.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use super::{ErrStrand, Nucleotide, RestrictionEnzyme};
use std::str::FromStr;

mod double;
pub use double::*;
mod formating;

/// A single stranded DNA molecule, read in a fixed direction (5' -> 3' by convention).
///
/// Empty bases are allowed, they are used as positional placeholders in front of an overhang.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SingleStrand {
    bases: Vec<Nucleotide>,
}

impl SingleStrand {
    /// Read a strand from a text made of `A`, `C`, `T`, `G` (any case) and blanks.
    pub fn from_text(text: &str) -> Result<Self, ErrStrand> {
        let bases = text
            .chars()
            .enumerate()
            .map(|(position, c)| {
                Nucleotide::from_char(c)
                    .map_err(|_| ErrStrand::InvalidSequence { position, found: c })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bases })
    }

    pub fn from_bases(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    pub fn into_bases(self) -> Vec<Nucleotide> {
        self.bases
    }

    /// The number of bases, empty ones included
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// The text representation of the strand, empty bases are blanks.
    pub fn to_text(&self) -> String {
        self.bases.iter().map(|b| b.to_char()).collect()
    }

    /// Reverse the strand, e.g. to read a 3' -> 5' strand in the 5' -> 3' direction.
    pub fn reverse(&self) -> Self {
        Self {
            bases: self.bases.iter().rev().cloned().collect(),
        }
    }

    /// Replace every base by its complement, without changing the reading direction.
    pub fn complement(&self) -> Self {
        Self {
            bases: self.bases.iter().map(|b| b.complement()).collect(),
        }
    }

    pub fn reverse_complement(&self) -> Self {
        Self {
            bases: self.bases.iter().rev().map(|b| b.complement()).collect(),
        }
    }

    /// Do all the bases pair with the bases of `other` when both strands are placed
    /// antiparallel?
    ///
    /// Both strands are read 5' -> 3', so `self[i]` is compared with `other[len - 1 - i]`. Two
    /// empty strands are complementary, strands of different lengths are not.
    pub fn is_complementary(&self, other: &SingleStrand) -> bool {
        self.len() == other.len()
            && self
                .bases
                .iter()
                .zip(other.bases.iter().rev())
                .all(|(a, b)| a.is_complementary(*b))
    }

    /// Is the sequence its own reverse complement?
    pub fn is_palindromic(&self) -> bool {
        let (strand53, strand35) = DoubleStrand::from_single(self).anneal();
        strand53 == strand35
    }

    /// Return the strand obtained by removing the empty bases
    pub fn remove_empties(&self) -> Self {
        Self {
            bases: self.bases.iter().filter(|b| !b.is_empty()).cloned().collect(),
        }
    }

    /// Split the strand before `index`. `0 <= index <= self.len()`
    pub fn split(&self, index: usize) -> Result<(Self, Self), ErrStrand> {
        if index > self.len() {
            return Err(ErrStrand::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        let (left, right) = self.bases.split_at(index);
        Ok((Self::from_bases(left.to_vec()), Self::from_bases(right.to_vec())))
    }

    /// Append `other` to the 3' end of self, getting rid of the empty bases of both strands.
    pub fn ligate(&self, other: &SingleStrand) -> Self {
        let mut bases = self.remove_empties().bases;
        bases.extend(other.bases.iter().filter(|b| !b.is_empty()));
        Self { bases }
    }

    /// Cut the strand at every recognition site of `enzyme`.
    ///
    /// The leftmost site is cut first and the scan resumes from the start of the 3' fragment, so
    /// a site overlapping the previous one is found as long as it lies after the cut. A cut
    /// before the first base of the remaining strand is skipped. A cut after its last base
    /// yields an empty final fragment.
    pub fn restrict(&self, enzyme: &RestrictionEnzyme) -> Vec<Self> {
        let mut fragments = Vec::new();
        let mut rest: &[Nucleotide] = &self.bases;
        let mut from = 0;
        while let Some(site) = enzyme.find_site(rest, from) {
            let cut = site + enzyme.cut_offset();
            if cut == 0 {
                from = site + 1;
                continue;
            }
            log::debug!("cutting single strand at {} with {}", cut, enzyme);
            let (left, right) = rest.split_at(cut);
            fragments.push(Self::from_bases(left.to_vec()));
            rest = right;
            from = 0;
        }
        fragments.push(Self::from_bases(rest.to_vec()));
        fragments
    }
}

impl FromStr for SingleStrand {
    type Err = ErrStrand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl From<Vec<Nucleotide>> for SingleStrand {
    fn from(bases: Vec<Nucleotide>) -> Self {
        Self::from_bases(bases)
    }
}

impl From<SingleStrand> for String {
    fn from(strand: SingleStrand) -> Self {
        strand.to_text()
    }
}

impl TryFrom<String> for SingleStrand {
    type Error = ErrStrand;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_text(&text)
    }
}
