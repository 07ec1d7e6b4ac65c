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
use super::{ErrStrand, Nucleotide, SingleStrand};

/// An enzyme that cuts DNA molecules at a given recognition site.
///
/// The cut falls `cut_offset` bases after the 5' end of the site on the leading strand.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(into = "EnzymeDescriptor", try_from = "EnzymeDescriptor")]
pub struct RestrictionEnzyme {
    recognition: SingleStrand,
    cut_offset: usize,
}

/// The serialized form of a `RestrictionEnzyme`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnzymeDescriptor {
    pub site: String,
    pub cut: usize,
}

impl RestrictionEnzyme {
    /// The recognition site must be non empty, must not contain empty bases and the cut offset
    /// must lie inside of it (both ends included).
    pub fn new(recognition: SingleStrand, cut_offset: usize) -> Result<Self, ErrStrand> {
        if recognition.is_empty() {
            return Err(ErrStrand::InvalidEnzyme(String::from(
                "empty recognition site",
            )));
        }
        if recognition.bases().iter().any(|b| b.is_empty()) {
            return Err(ErrStrand::InvalidEnzyme(format!(
                "recognition site {:?} contains an empty base",
                recognition.to_text()
            )));
        }
        if cut_offset > recognition.len() {
            return Err(ErrStrand::InvalidEnzyme(format!(
                "cut offset {} is larger than the recognition site {}",
                cut_offset,
                recognition.to_text()
            )));
        }
        Ok(Self {
            recognition,
            cut_offset,
        })
    }

    pub fn from_text(site: &str, cut_offset: usize) -> Result<Self, ErrStrand> {
        Self::new(SingleStrand::from_text(site)?, cut_offset)
    }

    pub fn recognition(&self) -> &SingleStrand {
        &self.recognition
    }

    pub fn cut_offset(&self) -> usize {
        self.cut_offset
    }

    /// The position of the cut on the lagging strand, counted from the 5' end of the leading
    /// strand's site.
    pub fn lagging_cut_offset(&self) -> usize {
        self.len() - self.cut_offset
    }

    pub fn len(&self) -> usize {
        self.recognition.len()
    }

    /// True iff both strands are cut at the same position.
    pub fn is_blunt(&self) -> bool {
        self.cut_offset == self.lagging_cut_offset()
    }

    pub fn is_palindromic(&self) -> bool {
        self.recognition.is_palindromic()
    }

    /// Return the index of the first occurrence of the recognition site in `bases` that starts at
    /// or after `from`.
    pub fn find_site(&self, bases: &[Nucleotide], from: usize) -> Option<usize> {
        let site = self.recognition.bases();
        let ret = bases
            .get(from..)?
            .windows(site.len())
            .position(|w| w == site)
            .map(|i| i + from);
        log::trace!("site of {} from {}: {:?}", self, from, ret);
        ret
    }
}

impl From<RestrictionEnzyme> for EnzymeDescriptor {
    fn from(enzyme: RestrictionEnzyme) -> Self {
        Self {
            site: enzyme.recognition.to_text(),
            cut: enzyme.cut_offset,
        }
    }
}

impl TryFrom<EnzymeDescriptor> for RestrictionEnzyme {
    type Error = ErrStrand;

    fn try_from(descriptor: EnzymeDescriptor) -> Result<Self, Self::Error> {
        Self::from_text(&descriptor.site, descriptor.cut)
    }
}
