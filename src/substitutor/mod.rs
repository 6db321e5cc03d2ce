// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::table::SymbolTable;

mod render;

pub use render::render_literal;

/// `var.` followed by one or more ASCII word characters.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"var\.([A-Za-z0-9_]+)").expect("placeholder pattern is valid")
});

/// What a substitution pass did to one text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionReport {
    /// Placeholders replaced with a literal
    pub resolved: usize,
    /// Names with no definition, first-seen order, no duplicates
    pub unresolved: Vec<String>,
}

impl SubstitutionReport {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Replace every `var.<name>` in `text` with the literal for `name`.
///
/// Unknown names are left exactly as written. Text outside the replaced
/// spans is returned byte for byte.
///
/// # Examples
/// ```
/// use tfvars_subst::{substitute, SymbolTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = SymbolTable::from_str("region = \"eu-west-1\"\nreplicas = 3")?;
/// let out = substitute("region = var.region\ncount = var.replicas\nzone = var.zone", &table);
/// assert_eq!(out, "region = \"eu-west-1\"\ncount = 3\nzone = var.zone");
/// # Ok(())
/// # }
/// ```
pub fn substitute(text: &str, table: &SymbolTable) -> String {
    substitute_with_report(text, table).0
}

/// [`substitute`], also reporting how many placeholders resolved and which did not.
pub fn substitute_with_report(text: &str, table: &SymbolTable) -> (String, SubstitutionReport) {
    let mut report = SubstitutionReport::default();

    let output = PLACEHOLDER.replace_all(text, |caps: &Captures| {
        let name = &caps[1];
        match table.get(name) {
            Some(value) => {
                report.resolved += 1;
                render_literal(value)
            }
            None => {
                if !report.unresolved.iter().any(|seen| seen == name) {
                    report.unresolved.push(name.to_string());
                }
                caps[0].to_string()
            }
        }
    });

    (output.into_owned(), report)
}

/// Names referenced by placeholders in `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
