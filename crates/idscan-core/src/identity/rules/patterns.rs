//! Compiled patterns for identity document fields.
//!
//! Ordered most specific to most general per field. All matching is
//! case-insensitive. The `regex` crate has no look-around, so shapes the
//! form "value immediately before keyword" consume the keyword after the
//! capturing group instead of asserting it with a lookahead; only group 1
//! is ever read, so behavior is the same.

use lazy_static::lazy_static;
use regex::Regex;

/// Terminator for free-text name captures: the next field label, a line
/// break, or end of input. Keeps a greedy name grab from swallowing the
/// label that follows it on the same line.
const NAME_BREAK: &str =
    r"(?:\s+(?:dob|date of birth|birth|born|sex|gender|id|license|no)\b|\n|$)";

lazy_static! {
    // Name patterns ("Name: John Doe", "Nome: Joao", "Mr. John Doe")
    pub static ref NAME_LABELED: Regex = Regex::new(&format!(
        r"(?i)\b(?:full name|name|nome)[\s:]+([A-Za-z][A-Za-z\s.\-]*?){NAME_BREAK}"
    )).unwrap();

    pub static ref NAME_HONORIFIC: Regex = Regex::new(&format!(
        r"(?i)\b(?:mr\.|mrs\.|ms\.|miss)\s+([A-Za-z][A-Za-z\s.\-]*?){NAME_BREAK}"
    )).unwrap();

    // Split name layouts ("LN SMITH FN JOHN", "first name John last name Smith").
    // Which label leads in the span decides which capture is the last name.
    pub static ref NAME_LN_FIRST: Regex = Regex::new(&format!(
        r"(?i)\b(?:ln|last name)\s+([A-Za-z][A-Za-z\s.\-]*?)\s+(?:fn|first name)\s+([A-Za-z][A-Za-z\s.\-]*?){NAME_BREAK}"
    )).unwrap();

    pub static ref NAME_FN_FIRST: Regex = Regex::new(&format!(
        r"(?i)\b(?:fn|first name)\s+([A-Za-z][A-Za-z\s.\-]*?)\s+(?:ln|last name)\s+([A-Za-z][A-Za-z\s.\-]*?){NAME_BREAK}"
    )).unwrap();

    // Date of birth patterns, delimiters ./- accepted, no validation
    pub static ref DOB_LABELED: Regex = Regex::new(
        r"(?i)\b(?:dob|date of birth|birth date|born|nacimento)[\s:]+(\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4})"
    ).unwrap();

    pub static ref DOB_BEFORE_KEYWORD: Regex = Regex::new(
        r"(?i)(\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4})\s*(?:dob|birth|born)\b"
    ).unwrap();

    pub static ref DOB_ISO: Regex = Regex::new(
        r"(\d{4}[-/.]\d{1,2}[-/.]\d{1,2})"
    ).unwrap();

    // Terse layout: "DOB 10/07/1997"
    pub static ref DOB_TERSE: Regex = Regex::new(
        r"(?i)\bdob\s+(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Gender patterns, English and Portuguese spellings
    pub static ref GENDER_LABELED: Regex = Regex::new(
        r"(?i)\b(?:gender|sexo|sex)[\s:]+(Male|Female|Masculino|Feminino|M|F)\b"
    ).unwrap();

    pub static ref GENDER_BEFORE_KEYWORD: Regex = Regex::new(
        r"(?i)\b(Male|Female|Masculino|Feminino|M|F)\b\s*(?:gender|sex)\b"
    ).unwrap();

    // Terse layout: "SEX M"
    pub static ref GENDER_TERSE: Regex = Regex::new(
        r"(?i)\bsex\s+([MF])\b"
    ).unwrap();

    // ID number patterns, alphanumeric with hyphens
    pub static ref ID_LABELED: Regex = Regex::new(
        r"(?i)\b(?:id number|identidade|id|license|number|no|documento)[\s:#]+([A-Za-z0-9\-]+)"
    ).unwrap();

    pub static ref ID_BOUNDED: Regex = Regex::new(
        r"(?i)\b(?:id number|id|license|number|no)[\s:#]+([A-Za-z0-9\-]{6,12})\b"
    ).unwrap();

    // Driver's-license prefix: "DL. W9802660"
    pub static ref ID_LICENSE: Regex = Regex::new(
        r"(?i)\bdl\.\s+([A-Za-z0-9]+)"
    ).unwrap();
}
