use std::fmt;

use serde::Serialize;

use crate::error::{FastaError, Result};

/// Separator between the parts of an identifier and between header items
pub const PART_SEPARATOR: char = '|';

/// Characters that would split a rendered header across lines
pub(crate) const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Identifier codes as they appear in FASTA header lines
pub mod codes {
    pub const BACKBONE_MOL_TYPE: &str = "bbm";
    pub const BACKBONE_SEQ_ID: &str = "bbs";
    pub const INTEGRATED_DATABASE: &str = "gi";
    pub const IMPORT_ID: &str = "gim";
    pub const LOCAL: &str = "lcl";
    pub const GENBANK: &str = "gb";
    pub const EMBL: &str = "emb";
    pub const DDBJ: &str = "dbj";
    pub const PIR: &str = "pir";
    pub const PRF: &str = "prf";
    pub const REFSEQ: &str = "ref";
    pub const SWISSPROT: &str = "sp";
    pub const THIRD_PARTY_DDBJ: &str = "tpd";
    pub const THIRD_PARTY_EMBL: &str = "tpe";
    pub const THIRD_PARTY_GENBANK: &str = "tpg";
    pub const TREMBL: &str = "tr";
    pub const PDB: &str = "pdb";
    pub const GENERAL_DATABASE_REFERENCE: &str = "gnl";
    pub const PATENT: &str = "pat";
    pub const PRE_GRANT_PATENT: &str = "pgp";
}

/// A required text field of an identifier.
///
/// Never empty or all whitespace, never padded with surrounding whitespace, and
/// free of the `|` separator and line breaks, so the identifier always renders
/// back to a single header line that parses to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Field(String);

impl Field {
    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if `value` is empty, all whitespace,
    /// has leading or trailing whitespace, or contains `|` or a line break.
    pub fn new(name: &str, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(FastaError::InvalidArgument(format!(
                "The {name} cannot be empty or all whitespace."
            )));
        }
        if value.contains(PART_SEPARATOR) {
            return Err(FastaError::InvalidArgument(format!(
                "The {name} cannot contain the \"{PART_SEPARATOR}\" character."
            )));
        }
        if value.contains(LINE_BREAKS) {
            return Err(FastaError::InvalidArgument(format!(
                "The {name} cannot contain a line break."
            )));
        }
        if value.trim() != value {
            return Err(FastaError::InvalidArgument(format!(
                "The {name} cannot start or end with whitespace."
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A structured FASTA header identifier, one variant per database convention.
///
/// Construct through the validating constructors ([`Identifier::gen_bank`],
/// [`Identifier::local`], ...) or by parsing `code|field|...` text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "code")]
pub enum Identifier {
    /// GenInfo backbone moltype
    #[serde(rename = "bbm")]
    BackboneMolType { value: i32 },
    /// GenInfo backbone seqid
    #[serde(rename = "bbs")]
    BackboneSeqId { value: i32 },
    /// GenInfo integrated database
    #[serde(rename = "gi")]
    IntegratedDatabase { value: i32 },
    /// GenInfo import ID
    #[serde(rename = "gim")]
    ImportId { value: i32 },
    #[serde(rename = "lcl")]
    Local { value: Field },
    #[serde(rename = "gb")]
    GenBank { accession: Field, locus: Field },
    #[serde(rename = "emb")]
    Embl { accession: Field, locus: Field },
    #[serde(rename = "dbj")]
    Ddbj { accession: Field, locus: Field },
    #[serde(rename = "pir")]
    Pir { accession: Field, name: Field },
    #[serde(rename = "prf")]
    Prf { accession: Field, name: Field },
    #[serde(rename = "ref")]
    RefSeq { accession: Field, name: Field },
    #[serde(rename = "sp")]
    SwissProt { accession: Field, name: Field },
    #[serde(rename = "tpd")]
    ThirdPartyDdbj { accession: Field, name: Field },
    #[serde(rename = "tpe")]
    ThirdPartyEmbl { accession: Field, name: Field },
    #[serde(rename = "tpg")]
    ThirdPartyGenBank { accession: Field, name: Field },
    #[serde(rename = "tr")]
    TrEmbl { accession: Field, name: Field },
    #[serde(rename = "pdb")]
    Pdb { entry: Field, chain: Field },
    #[serde(rename = "gnl")]
    GeneralDatabaseReference { database: Field, value: Field },
    #[serde(rename = "pat")]
    Patent {
        country: Field,
        patent: Field,
        sequence_number: Field,
    },
    #[serde(rename = "pgp")]
    PreGrantPatent {
        country: Field,
        application_number: Field,
        sequence_number: Field,
    },
}

/// Accession plus a second text field, shared by most two-field conventions
fn pair(first: (&str, String), second: (&str, String)) -> Result<(Field, Field)> {
    Ok((Field::new(first.0, first.1)?, Field::new(second.0, second.1)?))
}

impl Identifier {
    #[must_use]
    pub fn backbone_mol_type(value: i32) -> Self {
        Self::BackboneMolType { value }
    }

    #[must_use]
    pub fn backbone_seq_id(value: i32) -> Self {
        Self::BackboneSeqId { value }
    }

    #[must_use]
    pub fn integrated_database(value: i32) -> Self {
        Self::IntegratedDatabase { value }
    }

    #[must_use]
    pub fn import_id(value: i32) -> Self {
        Self::ImportId { value }
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if `value` is blank or contains `|`.
    pub fn local(value: impl Into<String>) -> Result<Self> {
        Ok(Self::Local {
            value: Field::new("value", value)?,
        })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn gen_bank(accession: impl Into<String>, locus: impl Into<String>) -> Result<Self> {
        let (accession, locus) = pair(("accession", accession.into()), ("locus", locus.into()))?;
        Ok(Self::GenBank { accession, locus })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn embl(accession: impl Into<String>, locus: impl Into<String>) -> Result<Self> {
        let (accession, locus) = pair(("accession", accession.into()), ("locus", locus.into()))?;
        Ok(Self::Embl { accession, locus })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn ddbj(accession: impl Into<String>, locus: impl Into<String>) -> Result<Self> {
        let (accession, locus) = pair(("accession", accession.into()), ("locus", locus.into()))?;
        Ok(Self::Ddbj { accession, locus })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn pir(accession: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (accession, name) = pair(("accession", accession.into()), ("name", name.into()))?;
        Ok(Self::Pir { accession, name })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn prf(accession: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (accession, name) = pair(("accession", accession.into()), ("name", name.into()))?;
        Ok(Self::Prf { accession, name })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn ref_seq(accession: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (accession, name) = pair(("accession", accession.into()), ("name", name.into()))?;
        Ok(Self::RefSeq { accession, name })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn swiss_prot(accession: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (accession, name) = pair(("accession", accession.into()), ("name", name.into()))?;
        Ok(Self::SwissProt { accession, name })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn third_party_ddbj(accession: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (accession, name) = pair(("accession", accession.into()), ("name", name.into()))?;
        Ok(Self::ThirdPartyDdbj { accession, name })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn third_party_embl(accession: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (accession, name) = pair(("accession", accession.into()), ("name", name.into()))?;
        Ok(Self::ThirdPartyEmbl { accession, name })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn third_party_gen_bank(
        accession: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        let (accession, name) = pair(("accession", accession.into()), ("name", name.into()))?;
        Ok(Self::ThirdPartyGenBank { accession, name })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn tr_embl(accession: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (accession, name) = pair(("accession", accession.into()), ("name", name.into()))?;
        Ok(Self::TrEmbl { accession, name })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn pdb(entry: impl Into<String>, chain: impl Into<String>) -> Result<Self> {
        let (entry, chain) = pair(("entry", entry.into()), ("chain", chain.into()))?;
        Ok(Self::Pdb { entry, chain })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn general_database_reference(
        database: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let (database, value) = pair(("database", database.into()), ("value", value.into()))?;
        Ok(Self::GeneralDatabaseReference { database, value })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn patent(
        country: impl Into<String>,
        patent: impl Into<String>,
        sequence_number: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::Patent {
            country: Field::new("country", country)?,
            patent: Field::new("patent", patent)?,
            sequence_number: Field::new("sequence number", sequence_number)?,
        })
    }

    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if a field is blank or contains `|`.
    pub fn pre_grant_patent(
        country: impl Into<String>,
        application_number: impl Into<String>,
        sequence_number: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::PreGrantPatent {
            country: Field::new("country", country)?,
            application_number: Field::new("application number", application_number)?,
            sequence_number: Field::new("sequence number", sequence_number)?,
        })
    }

    /// The code that introduces this identifier in a header line
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::BackboneMolType { .. } => codes::BACKBONE_MOL_TYPE,
            Self::BackboneSeqId { .. } => codes::BACKBONE_SEQ_ID,
            Self::IntegratedDatabase { .. } => codes::INTEGRATED_DATABASE,
            Self::ImportId { .. } => codes::IMPORT_ID,
            Self::Local { .. } => codes::LOCAL,
            Self::GenBank { .. } => codes::GENBANK,
            Self::Embl { .. } => codes::EMBL,
            Self::Ddbj { .. } => codes::DDBJ,
            Self::Pir { .. } => codes::PIR,
            Self::Prf { .. } => codes::PRF,
            Self::RefSeq { .. } => codes::REFSEQ,
            Self::SwissProt { .. } => codes::SWISSPROT,
            Self::ThirdPartyDdbj { .. } => codes::THIRD_PARTY_DDBJ,
            Self::ThirdPartyEmbl { .. } => codes::THIRD_PARTY_EMBL,
            Self::ThirdPartyGenBank { .. } => codes::THIRD_PARTY_GENBANK,
            Self::TrEmbl { .. } => codes::TREMBL,
            Self::Pdb { .. } => codes::PDB,
            Self::GeneralDatabaseReference { .. } => codes::GENERAL_DATABASE_REFERENCE,
            Self::Patent { .. } => codes::PATENT,
            Self::PreGrantPatent { .. } => codes::PRE_GRANT_PATENT,
        }
    }

    /// Field values in header order, without the code
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        match self {
            Self::BackboneMolType { value }
            | Self::BackboneSeqId { value }
            | Self::IntegratedDatabase { value }
            | Self::ImportId { value } => vec![value.to_string()],
            Self::Local { value } => vec![value.to_string()],
            Self::GenBank { accession, locus }
            | Self::Embl { accession, locus }
            | Self::Ddbj { accession, locus } => vec![accession.to_string(), locus.to_string()],
            Self::Pir { accession, name }
            | Self::Prf { accession, name }
            | Self::RefSeq { accession, name }
            | Self::SwissProt { accession, name }
            | Self::ThirdPartyDdbj { accession, name }
            | Self::ThirdPartyEmbl { accession, name }
            | Self::ThirdPartyGenBank { accession, name }
            | Self::TrEmbl { accession, name } => vec![accession.to_string(), name.to_string()],
            Self::Pdb { entry, chain } => vec![entry.to_string(), chain.to_string()],
            Self::GeneralDatabaseReference { database, value } => {
                vec![database.to_string(), value.to_string()]
            }
            Self::Patent {
                country,
                patent,
                sequence_number,
            } => vec![
                country.to_string(),
                patent.to_string(),
                sequence_number.to_string(),
            ],
            Self::PreGrantPatent {
                country,
                application_number,
                sequence_number,
            } => vec![
                country.to_string(),
                application_number.to_string(),
                sequence_number.to_string(),
            ],
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())?;
        for field in self.fields() {
            write!(f, "{PART_SEPARATOR}{field}")?;
        }
        Ok(())
    }
}
