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
use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NB_RANDOM_SAMPLES: usize = 200;

fn ss(text: &str) -> SingleStrand {
    SingleStrand::from_text(text).expect("invalid single strand")
}

fn ds(text: &str) -> DoubleStrand {
    DoubleStrand::from_text(text).expect("invalid double strand")
}

fn ds_pair(leading: &str, lagging: &str) -> DoubleStrand {
    DoubleStrand::from_text_pair(leading, lagging).expect("invalid double strand")
}

fn enzyme(site: &str, cut: usize) -> RestrictionEnzyme {
    RestrictionEnzyme::from_text(site, cut).expect("invalid enzyme")
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// A strand of at most 20 bases that may contain empty bases
fn random_strand(rng: &mut StdRng) -> SingleStrand {
    let len = rng.gen_range(0..20);
    let bases = (0..len)
        .map(|_| {
            if rng.gen_bool(0.2) {
                Nucleotide::Empty
            } else {
                rng.gen()
            }
        })
        .collect();
    SingleStrand::from_bases(bases)
}

/// A double strand with random overhangs at both ends
fn random_double_strand(rng: &mut StdRng) -> DoubleStrand {
    let len = rng.gen_range(0..20);
    let body = DoubleStrand::random(len, rng);
    let pairs = body
        .pairs()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i < 3 && rng.gen_bool(0.5) {
                BasePair::new(Nucleotide::Empty, p.lagging)
            } else if i + 3 >= len && rng.gen_bool(0.5) {
                BasePair::new(p.leading, Nucleotide::Empty)
            } else {
                *p
            }
        })
        .collect();
    DoubleStrand::from_pairs(pairs)
}

#[test]
fn nucleotide_from_char() {
    assert_eq!(Nucleotide::from_char('a'), Ok(Nucleotide::A));
    assert_eq!(Nucleotide::from_char('G'), Ok(Nucleotide::G));
    assert_eq!(Nucleotide::from_char(' '), Ok(Nucleotide::Empty));
    assert_eq!(Nucleotide::from_char('u'), Err(ErrStrand::InvalidBase('u')));
    assert_eq!("".parse::<Nucleotide>(), Ok(Nucleotide::Empty));
    assert_eq!("t".parse::<Nucleotide>(), Ok(Nucleotide::T));
    assert!("at".parse::<Nucleotide>().is_err());
}

#[test]
fn complement_is_an_involution() {
    let all = [
        Nucleotide::A,
        Nucleotide::C,
        Nucleotide::T,
        Nucleotide::G,
        Nucleotide::Empty,
    ];
    for b in all.iter() {
        assert_eq!(b.complement().complement(), *b);
    }
    assert_eq!(Nucleotide::C.pair(), Nucleotide::G);
}

#[test]
fn nucleotide_complementarity() {
    let a: Nucleotide = "A".parse().unwrap();
    let t: Nucleotide = "T".parse().unwrap();
    let empty: Nucleotide = "".parse().unwrap();
    assert!(a.is_complementary(t));
    assert!(empty.is_complementary(t));
    assert!(t.is_complementary(empty));
    assert!(!a.is_complementary(Nucleotide::G));
    assert!(!a.is_complementary(a));
}

#[test]
fn invalid_single_strand() {
    assert_eq!(
        SingleStrand::from_text("acxg"),
        Err(ErrStrand::InvalidSequence {
            position: 2,
            found: 'x'
        })
    );
}

#[test]
fn reverse_strand() {
    assert_eq!(ss("actg").reverse(), ss("gtca"));
    assert_eq!(ss("").reverse(), ss(""));
}

#[test]
fn reverse_is_an_involution() {
    let mut rng = rng();
    for _ in 0..NB_RANDOM_SAMPLES {
        let s = random_strand(&mut rng);
        assert_eq!(s.reverse().reverse(), s);
    }
}

#[test]
fn strand_pairs_with_its_reverse_complement() {
    let mut rng = rng();
    for _ in 0..NB_RANDOM_SAMPLES {
        let s = random_strand(&mut rng);
        assert!(s.is_complementary(&s.reverse().complement()));
        assert_eq!(s.reverse().complement(), s.reverse_complement());
    }
}

#[test]
fn single_strand_complementarity() {
    assert!(ss("").is_complementary(&ss("")));
    assert!(ss("actg").is_complementary(&ss("cagt")));
    assert!(ss("a tg").is_complementary(&ss("ca t")));
    assert!(!ss("actg").is_complementary(&ss("actg")));
    assert!(!ss("act").is_complementary(&ss("agtt")));
}

#[test]
fn remove_empties() {
    assert_eq!(ss(" a c  t").remove_empties(), ss("act"));
    let mut rng = rng();
    for _ in 0..NB_RANDOM_SAMPLES {
        let s = random_strand(&mut rng);
        let clean = s.remove_empties();
        assert!(clean.bases().iter().all(|b| !b.is_empty()));
        assert_eq!(clean.remove_empties(), clean);
    }
}

#[test]
fn split_single_strand() {
    assert_eq!(ss("actg").split(1), Ok((ss("a"), ss("ctg"))));
    assert_eq!(ss("actg").split(0), Ok((ss(""), ss("actg"))));
    assert_eq!(ss("actg").split(4), Ok((ss("actg"), ss(""))));
    assert_eq!(
        ss("actg").split(5),
        Err(ErrStrand::IndexOutOfRange {
            index: 5,
            length: 4
        })
    );
}

#[test]
fn ligate_single_strands() {
    assert_eq!(ss("actg").ligate(&ss("ac")), ss("actgac"));
    assert_eq!(ss("a ct ").ligate(&ss("  g")), ss("actg"));
}

#[test]
fn single_strand_ligation_is_associative() {
    let mut rng = rng();
    for _ in 0..NB_RANDOM_SAMPLES {
        let a = random_strand(&mut rng).remove_empties();
        let b = random_strand(&mut rng).remove_empties();
        let c = random_strand(&mut rng).remove_empties();
        assert_eq!(a.ligate(&b).ligate(&c), a.ligate(&b.ligate(&c)));
    }
}

#[test]
fn palindromes() {
    assert!(ss("aatt").is_palindromic());
    assert!(ss("gaattc").is_palindromic());
    assert!(!ss("aat").is_palindromic());
    assert!(enzyme("GGATCC", 1).is_palindromic());
}

#[test]
fn restrict_single_strand() {
    assert_eq!(ss("cat").restrict(&enzyme("at", 1)), vec![ss("ca"), ss("t")]);
    assert_eq!(ss("ccc").restrict(&enzyme("at", 1)), vec![ss("ccc")]);
}

#[test]
fn restrict_single_strand_several_sites() {
    let fragments = ss("gaattcaagaattc").restrict(&enzyme("gaattc", 1));
    assert_eq!(fragments, vec![ss("g"), ss("aattcaag"), ss("aattc")]);
}

#[test]
fn restrict_single_strand_at_the_ends() {
    // A cut before the first base is skipped, a cut after the last one leaves an empty fragment
    assert_eq!(ss("gaga").restrict(&enzyme("ga", 0)), vec![ss("ga"), ss("ga")]);
    assert_eq!(
        ss("ttga").restrict(&enzyme("ga", 2)),
        vec![ss("ttga"), ss("")]
    );
    assert_eq!(
        ss("gaga").restrict(&enzyme("ga", 2)),
        vec![ss("ga"), ss("ga"), ss("")]
    );
}

#[test]
fn restrict_single_strand_overlapping_sites() {
    assert_eq!(
        ss("aaa").restrict(&enzyme("aa", 1)),
        vec![ss("a"), ss("a"), ss("a")]
    );
    assert_eq!(
        ss("aaaaa").restrict(&enzyme("aaa", 1)),
        vec![ss("a"), ss("a"), ss("a"), ss("aa")]
    );
}

#[test]
fn restricted_fragments_ligate_back() {
    let mut rng = rng();
    let enzyme = enzyme("ac", 1);
    for _ in 0..NB_RANDOM_SAMPLES {
        let s = random_strand(&mut rng).remove_empties();
        let fragments = s.restrict(&enzyme);
        let ligated = fragments
            .iter()
            .fold(SingleStrand::default(), |acc, f| acc.ligate(f));
        assert_eq!(ligated, s);
    }
}

#[test]
fn enzyme_validation() {
    assert!(RestrictionEnzyme::from_text("", 0).is_err());
    assert!(RestrictionEnzyme::from_text("ga tc", 1).is_err());
    assert!(RestrictionEnzyme::from_text("gatc", 5).is_err());
    assert!(RestrictionEnzyme::from_text("gatc", 4).is_ok());
    assert_eq!(enzyme("GAATTC", 1), enzyme("gaattc", 1));
    assert_ne!(enzyme("GAATTC", 1), enzyme("GAATTC", 2));
}

#[test]
fn enzyme_display() {
    assert_eq!(enzyme("gaattc", 1).to_string(), "<G|AATTC>");
    assert_eq!(enzyme("gatc", 4).to_string(), "<GATC|>");
    assert!(enzyme("cccggg", 3).is_blunt());
    assert_eq!(enzyme("ctgcag", 5).lagging_cut_offset(), 1);
}

#[test]
fn double_strand_from_single() {
    let d = ds("actg");
    assert_eq!(d.len(), 4);
    assert_eq!(d.strand53(), ss("actg"));
    assert_eq!(d.strand35(), ss("cagt"));
    assert_eq!(d, ds_pair("actg", "tgac"));
}

#[test]
fn non_complementary_strands() {
    assert_eq!(
        DoubleStrand::from_text_pair("ac", "gg"),
        Err(ErrStrand::NonComplementaryStrands {
            leading: String::from("AC"),
            lagging: String::from("GG")
        })
    );
    assert!(DoubleStrand::from_text_pair("ac", "tgc").is_err());
    assert!(DoubleStrand::from_text_pair("ca", "  ").is_ok());
}

#[test]
fn anneal_round_trip() {
    let mut rng = rng();
    for _ in 0..NB_RANDOM_SAMPLES {
        let d = random_double_strand(&mut rng);
        let (strand53, strand35) = d.anneal();
        assert_eq!(
            DoubleStrand::from_strands(&strand53, &strand35.reverse()),
            Ok(d)
        );
    }
}

#[test]
fn rotation() {
    assert_eq!(ds("aac").rotate(), ds("gtt"));
    assert_eq!(ds_pair("ca", "  ").rotate(), ds_pair("  ", "ac"));
    let mut rng = rng();
    for _ in 0..NB_RANDOM_SAMPLES {
        let d = random_double_strand(&mut rng);
        assert_eq!(d.rotate().rotate(), d);
        let (strand53, strand35) = d.anneal();
        assert_eq!(
            DoubleStrand::from_strands(&strand35, &strand53.reverse()),
            Ok(d.rotate())
        );
    }
}

#[test]
fn split_double_strand() {
    assert_eq!(ds("actg").split(2), Ok((ds("ac"), ds("tg"))));
    assert!(ds("actg").split(5).is_err());
}

#[test]
fn overhangs() {
    let d = ds_pair("  ac", "tgtg");
    assert_eq!(d.overhang5(), (ds_pair("  ", "tg"), ds("ac")));
    assert_eq!(d.overhang3(), (d.clone(), DoubleStrand::default()));

    let d = ds_pair("acgt", "tg  ");
    assert_eq!(d.overhang5(), (DoubleStrand::default(), d.clone()));
    assert_eq!(d.overhang3(), (ds("ac"), ds_pair("gt", "  ")));

    let only_overhang = ds_pair("ca", "  ");
    assert_eq!(
        only_overhang.overhang5(),
        (only_overhang.clone(), DoubleStrand::default())
    );
    assert_eq!(
        only_overhang.overhang3(),
        (DoubleStrand::default(), only_overhang.clone())
    );
}

#[test]
fn ligate_blunt_ends() {
    assert_eq!(ds("actg").ligate(&ds("ca")), Ok(ds("actgca")));
}

#[test]
fn ligate_incompatible_overhang() {
    assert_eq!(
        ds("actg").ligate(&ds_pair("ca", "  ")),
        Err(ErrStrand::IncompatibleOverhang)
    );
}

#[test]
fn ligate_sticky_ends() {
    let left = ds_pair("acgaa", "tgc  ");
    let right = ds_pair("  ct", "ttga");
    assert_eq!(left.ligate(&right), Ok(ds("acgaact")));
    // The overhangs are too short once put together
    let right = ds_pair(" ct", "tga");
    assert!(left.ligate(&right).is_err());
}

#[test]
fn ligate_oriented() {
    let left = ds("ac");
    let right = ds("gg");
    assert_eq!(
        left.ligate_oriented(&right, LigationOrientation::RotateOther),
        Ok(ds("accc"))
    );
    assert_eq!(
        left.ligate_oriented(&right, LigationOrientation::RotateSelf),
        Ok(ds("gtgg"))
    );
    assert_eq!(
        left.ligate_oriented(&right, LigationOrientation::RotateBoth),
        Ok(ds("gtcc"))
    );
    assert_eq!(LigationOrientation::RotateOther.to_string(), "rotate other");
}

#[test]
fn restrict_double_strand_sticky() {
    let eco_r1 = enzyme("gaattc", 1);
    let d = ds("ttgaattcaa");
    let fragments = d.restrict(&eco_r1);
    assert_eq!(
        fragments,
        vec![ds_pair("ttg    ", "aacttaa"), ds_pair("aattcaa", "    gtt")]
    );
    assert_eq!(fragments[0].ligate(&fragments[1]), Ok(d));
}

#[test]
fn restrict_double_strand_3prime_overhang() {
    let pst1 = enzyme("ctgcag", 5);
    let d = ds("actgcaga");
    let fragments = d.restrict(&pst1);
    assert_eq!(
        fragments,
        vec![ds_pair("actgca", "tg    "), ds_pair("    ga", "acgtct")]
    );
    assert_eq!(fragments[0].ligate(&fragments[1]), Ok(d));
}

#[test]
fn restrict_double_strand_blunt() {
    let sma1 = enzyme("cccggg", 3);
    let fragments = ds("aacccgggtt").restrict(&sma1);
    assert_eq!(fragments, vec![ds("aaccc"), ds("gggtt")]);
}

#[test]
fn restrict_double_strand_at_the_end_of_the_site() {
    let d = ds("cccggg");
    let fragments = d.restrict(&enzyme("cccggg", 6));
    assert_eq!(
        fragments,
        vec![ds_pair("cccggg", "      "), ds_pair("      ", "gggccc")]
    );
    assert_eq!(fragments[0].ligate(&fragments[1]), Ok(d));
}

#[test]
fn restrict_double_strand_several_sites() {
    let eco_r1 = enzyme("gaattc", 1);
    let d = ds("gaattcgaattcac");
    let fragments = d.restrict(&eco_r1);
    assert_eq!(fragments.len(), 3);
    let ligated = fragments[1..]
        .iter()
        .try_fold(fragments[0].clone(), |acc, f| acc.ligate(f));
    assert_eq!(ligated, Ok(d));
}

#[test]
fn restrict_double_strand_overlapping_blunt_sites() {
    let cases = [("aaa", enzyme("aa", 1)), ("acgcgcgt", enzyme("cgcg", 2))];
    for (text, enzyme) in cases.iter() {
        assert!(enzyme.is_blunt());
        let fragments = ds(text).restrict(enzyme);
        let leading: Vec<SingleStrand> = fragments.iter().map(|f| f.strand53()).collect();
        assert_eq!(leading, ss(text).restrict(enzyme));
    }
    assert_eq!(
        ds("aaa").restrict(&enzyme("aa", 1)),
        vec![ds("a"), ds("a"), ds("a")]
    );
}

#[test]
fn restrict_double_strand_overlapping_sticky_sites() {
    let d = ds("aaaaa");
    let fragments = d.restrict(&enzyme("aaa", 1));
    assert_eq!(
        fragments,
        vec![
            ds_pair("a ", "tt"),
            ds_pair("aa ", " tt"),
            ds_pair("aa", " t")
        ]
    );
    let ligated = fragments[1..]
        .iter()
        .try_fold(fragments[0].clone(), |acc, f| acc.ligate(f));
    assert_eq!(ligated, Ok(d));
}

#[test]
fn restricted_random_molecules_ligate_back() {
    let mut rng = rng();
    let bam_h1 = enzyme("ggatcc", 1);
    for _ in 0..NB_RANDOM_SAMPLES {
        let len = rng.gen_range(0..30);
        let mut d = DoubleStrand::random(len, &mut rng);
        if rng.gen_bool(0.5) {
            let position = rng.gen_range(0..=d.len());
            let (left, right) = d.split(position).unwrap();
            d = left
                .ligate(&ds("ggatcc"))
                .and_then(|l| l.ligate(&right))
                .unwrap();
        }
        let fragments = d.restrict(&bam_h1);
        let ligated = fragments[1..]
            .iter()
            .try_fold(fragments[0].clone(), |acc, f| acc.ligate(f));
        assert_eq!(ligated, Ok(d));
    }
}

#[test]
fn restricted_fragments_do_not_ligate_with_other_enzyme() {
    let eco_r1 = ds("ttgaattcaa").restrict(&enzyme("gaattc", 1));
    let bam_h1 = ds("ttggatccaa").restrict(&enzyme("ggatcc", 1));
    assert!(eco_r1[0].ligate(&bam_h1[1]).is_err());
    assert!(bam_h1[0].ligate(&eco_r1[1]).is_err());
}

#[test]
fn random_double_strand_is_blunt() {
    let mut rng = rng();
    let d = DoubleStrand::random(50, &mut rng);
    assert_eq!(d.len(), 50);
    assert!(d.pairs().iter().all(|p| p.is_paired()));
    assert!(d.overhang5().0.is_empty());
    assert!(d.overhang3().1.is_empty());
}

#[test]
fn formating() {
    assert_eq!(ss("act ").to_string(), "[ACT ]");
    assert_eq!(ds("ac").to_string(), "[AT CG]");
    assert_eq!(DoubleStrand::default().to_string(), "[]");
    let ladder = ds_pair("a ", "tc").ladder();
    assert_eq!(
        ladder,
        "\t|    |\n\tA----T\n\t     |\n\t   --C\n\t     |\n"
    );
    assert!(DoubleStrand::default().ladder().is_empty());
}

#[test]
fn serialization() {
    let s = ss("ac t");
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, "\"AC T\"");
    assert_eq!(serde_json::from_str::<SingleStrand>(&json).unwrap(), s);
    assert!(serde_json::from_str::<SingleStrand>("\"acu\"").is_err());

    let d = ds_pair("ca", " t");
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#"{"leading":"CA","lagging":" T"}"#);
    assert_eq!(serde_json::from_str::<DoubleStrand>(&json).unwrap(), d);
    assert!(
        serde_json::from_str::<DoubleStrand>(r#"{"leading":"CA","lagging":"GG"}"#).is_err()
    );

    let e = enzyme("gaattc", 1);
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(json, r#"{"site":"GAATTC","cut":1}"#);
    assert_eq!(serde_json::from_str::<RestrictionEnzyme>(&json).unwrap(), e);
}

#[test]
fn default_catalogue() {
    let catalogue = EnzymeCatalogue::default();
    assert!(!catalogue.is_empty());
    assert_eq!(catalogue.get("ecori"), Some(&enzyme("gaattc", 1)));
    assert_eq!(catalogue.get("EcoRV"), Some(&enzyme("gatatc", 3)));
    assert!(catalogue.get("Foo").is_none());
    assert!(matches!(
        catalogue.require("Foo"),
        Err(CatalogueError::UnknownEnzyme(_))
    ));
    assert!(catalogue.iter().all(|(_, e)| e.is_palindromic()));
}

#[test]
fn catalogue_from_json() {
    let json = r#"{"enzymes": [
        {"name": "EcoRI", "site": "GAATTC", "cut": 1},
        {"name": "Toy", "site": "at", "cut": 1}
    ]}"#;
    let catalogue = EnzymeCatalogue::from_json_str(json).unwrap();
    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.get("toy"), Some(&enzyme("at", 1)));
    let names: Vec<&str> = catalogue.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["EcoRI", "Toy"]);

    let written = catalogue.to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        value["enzymes"][0],
        serde_json::json!({"name": "EcoRI", "site": "GAATTC", "cut": 1})
    );
    let again = EnzymeCatalogue::from_json_str(&written).unwrap();
    assert_eq!(again.get("ecori"), catalogue.get("ecori"));
}

#[test]
fn invalid_catalogue() {
    let json = r#"{"enzymes": [{"name": "Bad", "site": "GAATTC", "cut": 7}]}"#;
    assert!(matches!(
        EnzymeCatalogue::from_json_str(json),
        Err(CatalogueError::Enzyme { .. })
    ));
    assert!(matches!(
        EnzymeCatalogue::from_json_str("{"),
        Err(CatalogueError::JsonError(_))
    ));
    assert!(matches!(
        EnzymeCatalogue::from_path("/this/file/does/not/exist.json"),
        Err(CatalogueError::IOError(_))
    ));
}
