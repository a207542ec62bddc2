//! Conventional time-zone abbreviations mapped to canonical IANA identifiers.
//!
//! Abbreviations are ambiguous by nature (several zones share "CST"); this
//! table pins each key to one canonical zone, the same convention the common
//! platform abbreviation dictionaries use.

pub(crate) const ABBREVIATION_TABLE: &[(&str, &str)] = &[
    ("ADT", "America/Halifax"),
    ("AKDT", "America/Juneau"),
    ("AKST", "America/Juneau"),
    ("ART", "America/Argentina/Buenos_Aires"),
    ("AST", "America/Halifax"),
    ("BDT", "Asia/Dhaka"),
    ("BRST", "America/Sao_Paulo"),
    ("BRT", "America/Sao_Paulo"),
    ("BST", "Europe/London"),
    ("CAT", "Africa/Harare"),
    ("CDT", "America/Chicago"),
    ("CEST", "Europe/Paris"),
    ("CET", "Europe/Paris"),
    ("CLST", "America/Santiago"),
    ("CLT", "America/Santiago"),
    ("COT", "America/Bogota"),
    ("CST", "America/Chicago"),
    ("EAT", "Africa/Addis_Ababa"),
    ("EDT", "America/New_York"),
    ("EEST", "Europe/Athens"),
    ("EET", "Europe/Athens"),
    ("EST", "America/New_York"),
    ("GMT", "Etc/GMT"),
    ("GST", "Asia/Dubai"),
    ("HKT", "Asia/Hong_Kong"),
    ("HST", "Pacific/Honolulu"),
    ("ICT", "Asia/Bangkok"),
    ("IRST", "Asia/Tehran"),
    ("IST", "Asia/Kolkata"),
    ("JST", "Asia/Tokyo"),
    ("KST", "Asia/Seoul"),
    ("MDT", "America/Denver"),
    ("MSD", "Europe/Moscow"),
    ("MSK", "Europe/Moscow"),
    ("MST", "America/Phoenix"),
    ("NZDT", "Pacific/Auckland"),
    ("NZST", "Pacific/Auckland"),
    ("PDT", "America/Los_Angeles"),
    ("PET", "America/Lima"),
    ("PHT", "Asia/Manila"),
    ("PKT", "Asia/Karachi"),
    ("PST", "America/Los_Angeles"),
    ("SGT", "Asia/Singapore"),
    ("TRT", "Europe/Istanbul"),
    ("UTC", "UTC"),
    ("WAT", "Africa/Lagos"),
    ("WEST", "Europe/Lisbon"),
    ("WET", "Europe/Lisbon"),
    ("WIT", "Asia/Jakarta"),
];

pub(crate) fn identifier_for(key: &str) -> Option<&'static str> {
    ABBREVIATION_TABLE
        .iter()
        .find(|(abbrev, _)| *abbrev == key)
        .map(|(_, identifier)| *identifier)
}
