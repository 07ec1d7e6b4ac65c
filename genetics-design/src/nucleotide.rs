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
use super::ErrStrand;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::str::FromStr;

/// A single base of a DNA strand.
///
/// `Empty` is a placeholder, it represents the absence of a base in front of an overhang and
/// pairs with every base.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Nucleotide {
    A,
    C,
    T,
    G,
    Empty,
}

impl Nucleotide {
    /// The four actual bases
    pub const BASES: [Nucleotide; 4] = [Self::A, Self::C, Self::T, Self::G];

    /// Read a base from a character. Letters are case insensitive and a blank is the empty base.
    pub fn from_char(c: char) -> Result<Self, ErrStrand> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'C' => Ok(Self::C),
            'T' => Ok(Self::T),
            'G' => Ok(Self::G),
            ' ' => Ok(Self::Empty),
            _ => Err(ErrStrand::InvalidBase(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::T => 'T',
            Self::G => 'G',
            Self::Empty => ' ',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// The Watson-Crick partner of self. The empty base is its own complement.
    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::Empty => Self::Empty,
        }
    }

    /// Return the base that pairs with self
    pub fn pair(self) -> Self {
        self.complement()
    }

    /// Does the given base pair with this base?
    pub fn is_complementary(self, other: Self) -> bool {
        self.is_empty() || other.is_empty() || self.complement() == other
    }
}

impl FromStr for Nucleotide {
    type Err = ErrStrand;

    /// Both `""` and `" "` are read as the empty base.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::Empty),
            (Some(c), None) => Self::from_char(c),
            (Some(_), Some(extra)) => Err(ErrStrand::InvalidBase(extra)),
        }
    }
}

/// Sample one of the four actual bases, never the empty one
impl Distribution<Nucleotide> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Nucleotide {
        Nucleotide::BASES[rng.gen_range(0..Nucleotide::BASES.len())]
    }
}
