//! Code dispatch for identifier text such as `gb|M73307|AGMA13GT`.
//!
//! Each recognised code maps to the total number of `|`-separated parts it
//! occupies (code included) and a constructor for its [`Identifier`] variant.
//! The header parser uses the same table to decide how many parts an
//! identifier consumes.

use crate::core::identifier::{codes, Identifier, PART_SEPARATOR};
use crate::error::{FastaError, Result};

/// One row of the dispatch table
pub(crate) struct CodeSpec {
    pub code: &'static str,
    /// Number of parts including the code itself
    pub arity: usize,
    /// Builds the identifier from exactly `arity` parts, code first
    build: fn(&[&str]) -> Result<Identifier>,
}

impl CodeSpec {
    /// Build the identifier after checking the part count.
    pub(crate) fn build(&self, parts: &[&str]) -> Result<Identifier> {
        if parts.len() != self.arity {
            return Err(FastaError::InvalidArgument(format!(
                "The number of identifier parts supplied does not match what is needed for the \
                 provided identifier code \"{}\" (expected {}, got {}).",
                self.code,
                self.arity,
                parts.len()
            )));
        }
        (self.build)(parts)
    }
}

fn parse_int(text: &str) -> Result<i32> {
    text.parse().map_err(|source| FastaError::InvalidInteger {
        value: text.to_string(),
        source,
    })
}

static CODE_TABLE: &[CodeSpec] = &[
    CodeSpec {
        code: codes::BACKBONE_MOL_TYPE,
        arity: 2,
        build: |p| Ok(Identifier::backbone_mol_type(parse_int(p[1])?)),
    },
    CodeSpec {
        code: codes::BACKBONE_SEQ_ID,
        arity: 2,
        build: |p| Ok(Identifier::backbone_seq_id(parse_int(p[1])?)),
    },
    CodeSpec {
        code: codes::INTEGRATED_DATABASE,
        arity: 2,
        build: |p| Ok(Identifier::integrated_database(parse_int(p[1])?)),
    },
    CodeSpec {
        code: codes::IMPORT_ID,
        arity: 2,
        build: |p| Ok(Identifier::import_id(parse_int(p[1])?)),
    },
    CodeSpec {
        code: codes::LOCAL,
        arity: 2,
        build: |p| Identifier::local(p[1]),
    },
    CodeSpec {
        code: codes::GENBANK,
        arity: 3,
        build: |p| Identifier::gen_bank(p[1], p[2]),
    },
    CodeSpec {
        code: codes::EMBL,
        arity: 3,
        build: |p| Identifier::embl(p[1], p[2]),
    },
    CodeSpec {
        code: codes::DDBJ,
        arity: 3,
        build: |p| Identifier::ddbj(p[1], p[2]),
    },
    CodeSpec {
        code: codes::PIR,
        arity: 3,
        build: |p| Identifier::pir(p[1], p[2]),
    },
    CodeSpec {
        code: codes::PRF,
        arity: 3,
        build: |p| Identifier::prf(p[1], p[2]),
    },
    CodeSpec {
        code: codes::REFSEQ,
        arity: 3,
        build: |p| Identifier::ref_seq(p[1], p[2]),
    },
    CodeSpec {
        code: codes::SWISSPROT,
        arity: 3,
        build: |p| Identifier::swiss_prot(p[1], p[2]),
    },
    CodeSpec {
        code: codes::THIRD_PARTY_DDBJ,
        arity: 3,
        build: |p| Identifier::third_party_ddbj(p[1], p[2]),
    },
    CodeSpec {
        code: codes::THIRD_PARTY_EMBL,
        arity: 3,
        build: |p| Identifier::third_party_embl(p[1], p[2]),
    },
    CodeSpec {
        code: codes::THIRD_PARTY_GENBANK,
        arity: 3,
        build: |p| Identifier::third_party_gen_bank(p[1], p[2]),
    },
    CodeSpec {
        code: codes::TREMBL,
        arity: 3,
        build: |p| Identifier::tr_embl(p[1], p[2]),
    },
    CodeSpec {
        code: codes::PDB,
        arity: 3,
        build: |p| Identifier::pdb(p[1], p[2]),
    },
    CodeSpec {
        code: codes::GENERAL_DATABASE_REFERENCE,
        arity: 3,
        build: |p| Identifier::general_database_reference(p[1], p[2]),
    },
    CodeSpec {
        code: codes::PATENT,
        arity: 4,
        build: |p| Identifier::patent(p[1], p[2], p[3]),
    },
    CodeSpec {
        code: codes::PRE_GRANT_PATENT,
        arity: 4,
        build: |p| Identifier::pre_grant_patent(p[1], p[2], p[3]),
    },
];

/// Find the table row for a code (exact, case-sensitive match)
pub(crate) fn lookup(code: &str) -> Option<&'static CodeSpec> {
    CODE_TABLE.iter().find(|spec| spec.code == code)
}

/// Split on `|` and trim every part
pub(crate) fn split_parts(text: &str) -> Vec<&str> {
    text.split(PART_SEPARATOR).map(str::trim).collect()
}

impl Identifier {
    /// Total part count (code included) for a recognised code
    #[must_use]
    pub fn lookup_code(code: &str) -> Option<usize> {
        lookup(code).map(|spec| spec.arity)
    }

    /// Parse `code|field|...` text into an identifier.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if the text is empty or all
    /// whitespace. Any other failure (unrecognised code, wrong part count,
    /// blank field, bad integer) is returned as `FastaError::Format` wrapping
    /// the underlying cause.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(FastaError::InvalidArgument(
                "The identifier string to parse cannot be empty or all whitespace.".to_string(),
            ));
        }

        let parts = split_parts(text);
        parse_parts(&parts).map_err(|e| {
            FastaError::wrap(
                "The supplied string could not be parsed as a valid FASTA identifier.",
                e,
            )
        })
    }
}

fn parse_parts(parts: &[&str]) -> Result<Identifier> {
    let code = parts.first().copied().unwrap_or_default();
    let spec = lookup(code).ok_or_else(|| FastaError::UnsupportedCode(code.to_string()))?;
    spec.build(parts)
}

impl std::str::FromStr for Identifier {
    type Err = FastaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_identifiers() -> Vec<Identifier> {
        vec![
            Identifier::backbone_mol_type(1),
            Identifier::backbone_seq_id(2),
            Identifier::integrated_database(3),
            Identifier::import_id(4),
            Identifier::local("ABC_123").unwrap(),
            Identifier::gen_bank("M73307", "AGMA13GT").unwrap(),
            Identifier::embl("CAM43271.1", "loc").unwrap(),
            Identifier::ddbj("BAC85684.1", "loc").unwrap(),
            Identifier::pir("S16356", "name").unwrap(),
            Identifier::prf("0806162C", "name").unwrap(),
            Identifier::ref_seq("NP_013331", "name").unwrap(),
            Identifier::swiss_prot("P01013", "OVAX_CHICK").unwrap(),
            Identifier::third_party_ddbj("BAA1", "name").unwrap(),
            Identifier::third_party_embl("CAA1", "name").unwrap(),
            Identifier::third_party_gen_bank("AAA1", "name").unwrap(),
            Identifier::tr_embl("Q90JG8", "Q90JG8_9INFA").unwrap(),
            Identifier::pdb("1I4L", "D").unwrap(),
            Identifier::general_database_reference("taxon", "9606").unwrap(),
            Identifier::patent("US", "RE33188", "1").unwrap(),
            Identifier::pre_grant_patent("US", "20050000001", "2").unwrap(),
        ]
    }

    #[test]
    fn test_table_covers_every_variant() {
        assert_eq!(CODE_TABLE.len(), 20);
        for id in all_identifiers() {
            let spec = lookup(id.code()).unwrap();
            assert_eq!(spec.arity, id.fields().len() + 1, "arity of {}", id.code());
        }
    }

    #[test]
    fn test_round_trip_every_variant() {
        for id in all_identifiers() {
            let parsed = Identifier::parse(&id.to_string()).unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_round_trip_whitespace_edged_inputs() {
        for value in [" padded ", "padded ", "\tpadded", "pad ded"] {
            match Identifier::local(value) {
                Ok(id) => assert_eq!(Identifier::parse(&id.to_string()).unwrap(), id),
                Err(err) => assert!(matches!(err, FastaError::InvalidArgument(_))),
            }
        }
        let inner_space = Identifier::general_database_reference("taxon", "Homo sapiens").unwrap();
        assert_eq!(
            Identifier::parse(&inner_space.to_string()).unwrap(),
            inner_space
        );
    }

    #[test]
    fn test_parse_trims_parts() {
        let id = Identifier::parse(" gb | M73307 |AGMA13GT ").unwrap();
        assert_eq!(id, Identifier::gen_bank("M73307", "AGMA13GT").unwrap());
    }

    #[test]
    fn test_parse_blank_is_invalid_argument() {
        assert!(matches!(
            Identifier::parse(""),
            Err(FastaError::InvalidArgument(_))
        ));
        assert!(matches!(
            Identifier::parse("  \t"),
            Err(FastaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_arity_mismatch_is_wrapped() {
        let err = Identifier::parse("gb|123").unwrap_err();
        assert!(err.is_format());
        let cause = err.root_cause();
        assert!(matches!(cause, FastaError::InvalidArgument(_)));
        let message = cause.to_string();
        assert!(message.contains("\"gb\""));
        assert!(message.contains("expected 3, got 2"));

        assert!(Identifier::parse("lcl|1|2").unwrap_err().is_format());
        assert!(Identifier::parse("pat|US|1").unwrap_err().is_format());
    }

    #[test]
    fn test_unsupported_code_is_wrapped() {
        let err = Identifier::parse("xyz|123").unwrap_err();
        assert!(err.is_format());
        assert!(matches!(
            err.root_cause(),
            FastaError::UnsupportedCode(code) if code == "xyz"
        ));
        // Codes are case-sensitive
        assert!(Identifier::parse("GB|A|B").is_err());
    }

    #[test]
    fn test_bad_integer_is_wrapped() {
        let err = Identifier::parse("gi|abc").unwrap_err();
        assert!(err.is_format());
        assert!(matches!(
            err.root_cause(),
            FastaError::InvalidInteger { value, .. } if value == "abc"
        ));
        assert!(Identifier::parse("bbm|").is_err());
        assert_eq!(
            Identifier::parse("gi|-12").unwrap(),
            Identifier::integrated_database(-12)
        );
    }

    #[test]
    fn test_blank_field_is_wrapped() {
        let err = Identifier::parse("pdb|1I4L| ").unwrap_err();
        assert!(err.is_format());
        assert!(matches!(err.root_cause(), FastaError::InvalidArgument(_)));
    }

    #[test]
    fn test_lookup_code() {
        assert_eq!(Identifier::lookup_code("bbs"), Some(2));
        assert_eq!(Identifier::lookup_code("sp"), Some(3));
        assert_eq!(Identifier::lookup_code("pgp"), Some(4));
        assert_eq!(Identifier::lookup_code("chr1"), None);
    }

    #[test]
    fn test_from_str() {
        let id: Identifier = "sp|P01013|OVAX_CHICK".parse().unwrap();
        assert_eq!(id.code(), "sp");
    }
}
