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
//! Command line front-end to the genetics toy.
//!
//! ```text
//! genetics digest <SEQUENCE> <ENZYME> [CATALOGUE.json]
//! genetics ligate <LEADING>[:<LAGGING>] <LEADING>[:<LAGGING>]
//! genetics random <N>
//! genetics enzymes [CATALOGUE.json]
//! ```
//! The lagging strand of a molecule is written 3' -> 5', aligned with the leading strand, and
//! blanks stand for empty bases.

use genetics_design::{
    CatalogueError, DoubleStrand, EnzymeCatalogue, ErrStrand, LigationOrientation,
};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;
use strum::IntoEnumIterator;


const USAGE: &str = "Usage:
    genetics digest <SEQUENCE> <ENZYME> [CATALOGUE.json]
    genetics ligate <LEADING>[:<LAGGING>] <LEADING>[:<LAGGING>]
    genetics random <N>
    genetics enzymes [CATALOGUE.json]";

/// A request read from the command line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Digest {
        sequence: String,
        enzyme: String,
        catalogue: Option<PathBuf>,
    },
    Ligate {
        left: String,
        right: String,
    },
    Random {
        length: usize,
    },
    Enzymes {
        catalogue: Option<PathBuf>,
    },
}

#[derive(Debug)]
enum ErrCommand {
    Usage(String),
    Strand(ErrStrand),
    Catalogue(CatalogueError),
}

impl From<ErrStrand> for ErrCommand {
    fn from(e: ErrStrand) -> Self {
        Self::Strand(e)
    }
}

impl From<CatalogueError> for ErrCommand {
    fn from(e: CatalogueError) -> Self {
        Self::Catalogue(e)
    }
}

impl fmt::Display for ErrCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{}\n{}", msg, USAGE),
            Self::Strand(e) => write!(f, "{}", e),
            Self::Catalogue(e) => write!(f, "{}", e),
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command, ErrCommand> {
    let usage = |msg: &str| ErrCommand::Usage(msg.to_string());
    let (name, args) = args
        .split_first()
        .ok_or_else(|| usage("Missing command"))?;
    match (name.as_str(), args) {
        ("digest", [sequence, enzyme]) | ("digest", [sequence, enzyme, _]) => {
            Ok(Command::Digest {
                sequence: sequence.clone(),
                enzyme: enzyme.clone(),
                catalogue: args.get(2).map(PathBuf::from),
            })
        }
        ("ligate", [left, right]) => Ok(Command::Ligate {
            left: left.clone(),
            right: right.clone(),
        }),
        ("random", [length]) => length
            .parse()
            .map(|length| Command::Random { length })
            .map_err(|_| usage(&format!("Invalid length {}", length))),
        ("enzymes", []) | ("enzymes", [_]) => Ok(Command::Enzymes {
            catalogue: args.get(0).map(PathBuf::from),
        }),
        ("digest", _) | ("ligate", _) | ("random", _) | ("enzymes", _) => {
            Err(usage(&format!("Wrong number of arguments for {}", name)))
        }
        _ => Err(usage(&format!("Unknown command {}", name))),
    }
}

/// Read a molecule written as `LEADING` or `LEADING:LAGGING`
fn parse_double_strand(text: &str) -> Result<DoubleStrand, ErrStrand> {
    match text.split_once(':') {
        Some((leading, lagging)) => DoubleStrand::from_text_pair(leading, lagging),
        None => DoubleStrand::from_text(text),
    }
}

fn load_catalogue(path: Option<&PathBuf>) -> Result<EnzymeCatalogue, CatalogueError> {
    match path {
        Some(path) => EnzymeCatalogue::from_path(path),
        None => Ok(EnzymeCatalogue::default()),
    }
}

fn print_molecule(name: &str, molecule: &DoubleStrand) {
    println!("{} ({} bp): {}", name, molecule.len(), molecule);
    print!("{}", molecule.ladder());
}

fn run(command: Command) -> Result<(), ErrCommand> {
    match command {
        Command::Digest {
            sequence,
            enzyme,
            catalogue,
        } => {
            let catalogue = load_catalogue(catalogue.as_ref())?;
            let enzyme = catalogue.require(&enzyme)?;
            let molecule = parse_double_strand(&sequence)?;
            let fragments = molecule.restrict(enzyme);
            log::info!("{} fragments", fragments.len());
            for (i, fragment) in fragments.iter().enumerate() {
                print_molecule(&format!("Fragment {}", i), fragment);
            }
        }
        Command::Ligate { left, right } => {
            let left = parse_double_strand(&left)?;
            let right = parse_double_strand(&right)?;
            for orientation in LigationOrientation::iter() {
                match left.ligate_oriented(&right, orientation) {
                    Ok(molecule) => print_molecule(&orientation.to_string(), &molecule),
                    Err(e) => println!("{}: {}", orientation, e),
                }
            }
        }
        Command::Random { length } => {
            let molecule = DoubleStrand::random(length, &mut rand::thread_rng());
            print_molecule("Random", &molecule);
        }
        Command::Enzymes { catalogue } => {
            let catalogue = load_catalogue(catalogue.as_ref())?;
            for (name, enzyme) in catalogue.iter() {
                let ends = if enzyme.is_blunt() { "blunt" } else { "sticky" };
                println!("{:<10} {} {}", name, enzyme, ends);
            }
        }
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = parse_args(&args).and_then(run) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
