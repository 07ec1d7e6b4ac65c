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
//! Errors returned by the constructors and operations on DNA molecules.

use std::fmt;

/// An error that occured when trying to build a molecule or to apply an operation to it.
///
/// Since molecules are never mutated, an error never leaves a value in an inconsistent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrStrand {
    /// A character that is not one of `A`, `C`, `T`, `G` or a blank.
    InvalidBase(char),
    /// A sequence containing an invalid element.
    InvalidSequence { position: usize, found: char },
    /// The two strands given to build a double strand do not pair.
    NonComplementaryStrands { leading: String, lagging: String },
    /// A split index outside of `[0, length]`.
    IndexOutOfRange { index: usize, length: usize },
    /// The overhangs at the ligated ends are not complementary.
    IncompatibleOverhang,
    /// The recognition site or cut offset of an enzyme is not valid.
    InvalidEnzyme(String),
}

impl fmt::Display for ErrStrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase(c) => write!(
                f,
                "Invalid base {:?}. Must be one of A, C, T, G, or \" \"",
                c
            ),
            Self::InvalidSequence { position, found } => {
                write!(f, "Invalid base {:?} at position {}", found, position)
            }
            Self::NonComplementaryStrands { leading, lagging } => write!(
                f,
                "Input strands are not complementary: {} / {}",
                leading, lagging
            ),
            Self::IndexOutOfRange { index, length } => write!(
                f,
                "Index {} is out of range for a molecule of length {}",
                index, length
            ),
            Self::IncompatibleOverhang => write!(f, "Overhangs are not complementary"),
            Self::InvalidEnzyme(reason) => write!(f, "Invalid restriction enzyme: {}", reason),
        }
    }
}

impl std::error::Error for ErrStrand {}
