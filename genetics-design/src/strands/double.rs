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
use super::super::{ErrStrand, Nucleotide, RestrictionEnzyme};
use super::SingleStrand;
use rand::Rng;
use strum::{Display, EnumIter};

/// Two facing bases of a double strand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BasePair {
    /// The base on the strand read 5' -> 3' from left to right
    pub leading: Nucleotide,
    /// The base on the strand read 3' -> 5' from left to right
    pub lagging: Nucleotide,
}

impl BasePair {
    pub fn new(leading: Nucleotide, lagging: Nucleotide) -> Self {
        Self { leading, lagging }
    }

    /// True iff none of the two bases is empty.
    pub fn is_paired(&self) -> bool {
        !self.leading.is_empty() && !self.lagging.is_empty()
    }
}

/// A double stranded DNA molecule.
///
/// Pairs are stored from left to right: the leading strand is read 5' -> 3' and the lagging
/// strand is read 3' -> 5'. A pair with an empty base belongs to an overhang.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "DoubleStrandDescriptor", try_from = "DoubleStrandDescriptor")]
pub struct DoubleStrand {
    pairs: Vec<BasePair>,
}

/// The serialized form of a `DoubleStrand`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoubleStrandDescriptor {
    pub leading: SingleStrand,
    /// The lagging strand, 3' -> 5', aligned with the leading strand.
    pub lagging: SingleStrand,
}

/// The relative orientation of two double strands that are ligated together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum LigationOrientation {
    /// Append the other strand to the 3' end of self
    #[strum(serialize = "direct")]
    Direct,
    /// Flip the other strand before appending it
    #[strum(serialize = "rotate other")]
    RotateOther,
    /// Flip self before appending the other strand
    #[strum(serialize = "rotate self")]
    RotateSelf,
    #[strum(serialize = "rotate both")]
    RotateBoth,
}

impl DoubleStrand {
    /// Build a double strand whose lagging strand is the complement of `strand`.
    pub fn from_single(strand: &SingleStrand) -> Self {
        let pairs = strand
            .bases()
            .iter()
            .map(|b| BasePair::new(*b, b.pair()))
            .collect();
        Self { pairs }
    }

    pub fn from_text(text: &str) -> Result<Self, ErrStrand> {
        Ok(Self::from_single(&SingleStrand::from_text(text)?))
    }

    /// Build a double strand from its two strands.
    ///
    /// `lagging` is given 3' -> 5', aligned base by base with `leading`. Every pair of non empty
    /// facing bases must be complementary.
    pub fn from_strands(leading: &SingleStrand, lagging: &SingleStrand) -> Result<Self, ErrStrand> {
        if !leading.is_complementary(&lagging.reverse()) {
            return Err(ErrStrand::NonComplementaryStrands {
                leading: leading.to_text(),
                lagging: lagging.to_text(),
            });
        }
        let pairs = leading
            .bases()
            .iter()
            .zip(lagging.bases())
            .map(|(l, r)| BasePair::new(*l, *r))
            .collect();
        Ok(Self { pairs })
    }

    pub fn from_text_pair(leading: &str, lagging: &str) -> Result<Self, ErrStrand> {
        Self::from_strands(
            &SingleStrand::from_text(leading)?,
            &SingleStrand::from_text(lagging)?,
        )
    }

    /// Build a double strand from pairs that are already known to be valid.
    pub fn from_pairs(pairs: Vec<BasePair>) -> Self {
        Self { pairs }
    }

    /// Generate `n` random base pairs. There are no empty bases, both ends are blunt.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let bases: Vec<Nucleotide> = (0..n).map(|_| rng.gen()).collect();
        Self::from_single(&SingleStrand::from_bases(bases))
    }

    pub fn pairs(&self) -> &[BasePair] {
        &self.pairs
    }

    /// The number of base pairs, overhangs included
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The leading strand, 5' -> 3'
    pub fn strand53(&self) -> SingleStrand {
        SingleStrand::from_bases(self.pairs.iter().map(|p| p.leading).collect())
    }

    /// The lagging strand, reversed so that it is read in the 5' -> 3' direction
    pub fn strand35(&self) -> SingleStrand {
        SingleStrand::from_bases(self.pairs.iter().rev().map(|p| p.lagging).collect())
    }

    /// Separate the two strands, both returned in the 5' -> 3' direction.
    pub fn anneal(&self) -> (SingleStrand, SingleStrand) {
        (self.strand53(), self.strand35())
    }

    /// Split the double strand before `index` with blunt ends. `0 <= index <= self.len()`
    pub fn split(&self, index: usize) -> Result<(Self, Self), ErrStrand> {
        if index > self.len() {
            return Err(ErrStrand::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        let (left, right) = self.pairs.split_at(index);
        Ok((Self::from_pairs(left.to_vec()), Self::from_pairs(right.to_vec())))
    }

    /// Rotate the double strand by 180°, the lagging strand becomes the leading one.
    pub fn rotate(&self) -> Self {
        let pairs = self
            .pairs
            .iter()
            .rev()
            .map(|p| BasePair::new(p.lagging, p.leading))
            .collect();
        Self { pairs }
    }

    fn first_paired(&self) -> Option<usize> {
        self.pairs.iter().position(BasePair::is_paired)
    }

    fn last_paired(&self) -> Option<usize> {
        self.pairs.iter().rposition(BasePair::is_paired)
    }

    /// Split the overhang at the 5' end of the leading strand from the rest of the molecule.
    ///
    /// If no position is fully paired, the whole molecule is the overhang.
    pub fn overhang5(&self) -> (Self, Self) {
        let index = self.first_paired().unwrap_or(self.len());
        let (head, body) = self.pairs.split_at(index);
        (Self::from_pairs(head.to_vec()), Self::from_pairs(body.to_vec()))
    }

    /// Split the overhang at the 3' end of the leading strand from the rest of the molecule.
    ///
    /// If no position is fully paired, the whole molecule is the overhang.
    pub fn overhang3(&self) -> (Self, Self) {
        let index = self.last_paired().map(|i| i + 1).unwrap_or(0);
        let (body, tail) = self.pairs.split_at(index);
        (Self::from_pairs(body.to_vec()), Self::from_pairs(tail.to_vec()))
    }

    /// Join the 5' end of `other` to the 3' end of self.
    ///
    /// The overhangs facing each other are merged and must form a fully paired region, otherwise
    /// `ErrStrand::IncompatibleOverhang` is returned.
    pub fn ligate(&self, other: &DoubleStrand) -> Result<Self, ErrStrand> {
        let (body, tail) = self.overhang3();
        let (other_tail, other_body) = other.overhang5();
        let (tail53, tail35) = tail.anneal();
        let (other_tail53, other_tail35) = other_tail.anneal();

        let overlap53 = tail53.ligate(&other_tail53);
        // Read 5' -> 3', the lagging strand goes from right to left.
        let overlap35 = other_tail35.ligate(&tail35);
        if !overlap53.is_complementary(&overlap35) {
            log::debug!(
                "cannot ligate {} and {}: overhangs {} / {}",
                self,
                other,
                overlap53,
                overlap35
            );
            return Err(ErrStrand::IncompatibleOverhang);
        }
        let overlap = Self::from_strands(&overlap53, &overlap35.reverse())?;

        let mut pairs = body.pairs;
        pairs.extend(overlap.pairs);
        pairs.extend(other_body.pairs);
        Ok(Self { pairs })
    }

    /// Ligate `other` to self after rotating one or both molecules.
    pub fn ligate_oriented(
        &self,
        other: &DoubleStrand,
        orientation: LigationOrientation,
    ) -> Result<Self, ErrStrand> {
        match orientation {
            LigationOrientation::Direct => self.ligate(other),
            LigationOrientation::RotateOther => self.ligate(&other.rotate()),
            LigationOrientation::RotateSelf => self.rotate().ligate(other),
            LigationOrientation::RotateBoth => self.rotate().ligate(&other.rotate()),
        }
    }

    /// Cut the molecule at every recognition site of `enzyme` found on the leading strand.
    ///
    /// For a site starting at `i`, the leading strand is cut at `i + cut_offset` and the lagging
    /// strand at `i + enzyme.len() - cut_offset`, which leaves sticky ends on the fragments
    /// unless the enzyme cuts in the middle of its site. Sites are cut from left to right and the
    /// scan resumes at the rightmost of the two previous cuts, so a site overlapping the previous
    /// one is cut when it starts after both cuts. Blunt enzymes cut the leading strand exactly
    /// like `SingleStrand::restrict`.
    pub fn restrict(&self, enzyme: &RestrictionEnzyme) -> Vec<Self> {
        let mut fragments = Vec::new();
        let mut rest = self.pairs.clone();
        let mut from = 0;
        loop {
            let leading: Vec<Nucleotide> = rest.iter().map(|p| p.leading).collect();
            let site = match enzyme.find_site(&leading, from) {
                Some(site) => site,
                None => break,
            };
            let cut53 = site + enzyme.cut_offset();
            let cut35 = site + enzyme.lagging_cut_offset();
            let (low, high) = (cut53.min(cut35), cut53.max(cut35));
            log::debug!(
                "cutting double strand at {}/{} with {}",
                cut53,
                cut35,
                enzyme
            );

            let left = rest[..high]
                .iter()
                .enumerate()
                .map(|(pos, p)| BasePair {
                    leading: if pos < cut53 { p.leading } else { Nucleotide::Empty },
                    lagging: if pos < cut35 { p.lagging } else { Nucleotide::Empty },
                })
                .collect();
            let right = rest[low..]
                .iter()
                .enumerate()
                .map(|(k, p)| {
                    let pos = low + k;
                    BasePair {
                        leading: if pos >= cut53 { p.leading } else { Nucleotide::Empty },
                        lagging: if pos >= cut35 { p.lagging } else { Nucleotide::Empty },
                    }
                })
                .collect();
            fragments.push(Self::from_pairs(left));
            // Later cuts must not fall before the previous ones on either strand.
            from = high - low;
            rest = right;
        }
        fragments.push(Self::from_pairs(rest));
        fragments
    }
}

impl From<DoubleStrand> for DoubleStrandDescriptor {
    fn from(strand: DoubleStrand) -> Self {
        Self {
            leading: strand.strand53(),
            lagging: strand.strand35().reverse(),
        }
    }
}

impl TryFrom<DoubleStrandDescriptor> for DoubleStrand {
    type Error = ErrStrand;

    fn try_from(descriptor: DoubleStrandDescriptor) -> Result<Self, Self::Error> {
        Self::from_strands(&descriptor.leading, &descriptor.lagging)
    }
}
