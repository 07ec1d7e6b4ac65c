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
use super::super::{Nucleotide, RestrictionEnzyme};
use super::*;

use std::fmt;
use std::fmt::Write;

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for SingleStrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_text())
    }
}

impl fmt::Debug for SingleStrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for BasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.leading, self.lagging)
    }
}

impl fmt::Display for DoubleStrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.pairs().iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", pairs.join(" "))
    }
}

impl fmt::Debug for DoubleStrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The recognition site with a `|` where the leading strand is cut, e.g. `<G|AATTC>`.
impl fmt::Display for RestrictionEnzyme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.recognition().to_text();
        let (left, right) = text.split_at(self.cut_offset());
        write!(f, "<{}|{}>", left, right)
    }
}

impl DoubleStrand {
    /// Draw the molecule as an ASCII ladder, one rung per base pair. The rail of a strand is
    /// interrupted in front of its empty bases.
    pub fn ladder(&self) -> String {
        let mut ret = String::new();
        let mut rails = ("", "");
        for pair in self.pairs() {
            let (rung_left, rail_left) = if pair.leading.is_empty() {
                (String::from("   "), " ")
            } else {
                (format!("{}--", pair.leading), "|")
            };
            let (rung_right, rail_right) = if pair.lagging.is_empty() {
                (String::from("   "), " ")
            } else {
                (format!("--{}", pair.lagging), "|")
            };
            writeln!(&mut ret, "\t{}    {}", rail_left, rail_right).unwrap_or_default();
            writeln!(&mut ret, "\t{}{}", rung_left, rung_right).unwrap_or_default();
            rails = (rail_left, rail_right);
        }
        if !self.is_empty() {
            writeln!(&mut ret, "\t{}    {}", rails.0, rails.1).unwrap_or_default();
        }
        ret
    }
}
