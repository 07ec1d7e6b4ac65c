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
//! This module defines the data model of the genetics toy.
//!
//! Molecules are immutable values: every operation on a `SingleStrand` or a `DoubleStrand`
//! returns fresh values and never modifies its receiver. Double strands are stored as a sequence
//! of `BasePair`, the leading strand read 5' -> 3' and the lagging strand read 3' -> 5' from left
//! to right.

#[macro_use]
extern crate serde_derive;
extern crate serde;

mod errors;
pub use errors::*;

mod nucleotide;
pub use nucleotide::*;

mod strands;
pub use strands::*;

mod enzyme;
pub use enzyme::*;

pub mod catalogue;
pub use catalogue::{CatalogueError, EnzymeCatalogue};

#[cfg(test)]
mod tests;
