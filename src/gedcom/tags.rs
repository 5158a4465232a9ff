//! GEDCOM tag and header constants

/// Header record
pub const HEAD: &str = "HEAD";
/// Character-set declaration
pub const CHAR: &str = "CHAR";
/// GEDCOM metadata block
pub const GEDC: &str = "GEDC";
/// GEDCOM version
pub const VERS: &str = "VERS";
/// GEDCOM form
pub const FORM: &str = "FORM";
/// Submitter record and header reference
pub const SUBM: &str = "SUBM";
/// Name record
pub const NAME: &str = "NAME";
/// Name prefix (title)
pub const NPFX: &str = "NPFX";
/// Given name
pub const GIVN: &str = "GIVN";
/// Surname
pub const SURN: &str = "SURN";
/// Name suffix
pub const NSFX: &str = "NSFX";
/// Sex record
pub const SEX: &str = "SEX";
/// Birth event
pub const BIRT: &str = "BIRT";
/// Death event
pub const DEAT: &str = "DEAT";
/// Place sub-record of an event
pub const PLAC: &str = "PLAC";
/// Date sub-record of an event
pub const DATE: &str = "DATE";
/// Family-as-spouse pointer
pub const FAMS: &str = "FAMS";
/// Family-as-child pointer
pub const FAMC: &str = "FAMC";
/// Individual record
pub const INDI: &str = "INDI";
/// Family record
pub const FAM: &str = "FAM";
/// Husband pointer in a family record
pub const HUSB: &str = "HUSB";
/// Wife pointer in a family record
pub const WIFE: &str = "WIFE";
/// Child pointer in a family record
pub const CHIL: &str = "CHIL";
/// Marriage event
pub const MARR: &str = "MARR";
/// Divorce event
pub const DIV: &str = "DIV";
/// Trailer record
pub const TRLR: &str = "TRLR";

/// Character set emitted in the header
pub const CHARSET_UTF8: &str = "UTF-8";
/// GEDCOM version emitted in the header
pub const GEDCOM_VERSION: &str = "5.5";
/// GEDCOM form emitted in the header
pub const GEDCOM_FORM: &str = "Lineage-Linked";
/// Fixed pointer of the submitter record
pub const SUBMITTER_POINTER: &str = "@SUBMITTER@";
