//! List command implementation

use std::io::{self, Write};

use anyhow::Result;
use inflekt_core::{Ruleset, Transform};

use super::ListCommands;

/// Print the requested listing for the default ruleset
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    let rs = inflekt_core::snapshot();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(subcommand, &rs, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write one entry per line
pub fn write_list<W: Write>(subcommand: &ListCommands, rs: &Ruleset, out: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Transforms => {
            for transform in Transform::ALL {
                writeln!(out, "{transform}")?;
            }
        }
        ListCommands::Acronyms => {
            let mut acronyms: Vec<&str> = rs.acronyms().collect();
            acronyms.sort_unstable();
            for acronym in acronyms {
                writeln!(out, "{acronym}")?;
            }
        }
        ListCommands::Uncountables => {
            let mut words: Vec<&String> = rs.uncountables().iter().collect();
            words.sort_unstable();
            for word in words {
                writeln!(out, "{word}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(subcommand: ListCommands, rs: &Ruleset) -> Vec<String> {
        let mut buf = Vec::new();
        write_list(&subcommand, rs, &mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_list_transforms() {
        let lines = listing(ListCommands::Transforms, &Ruleset::new());
        assert_eq!(lines.len(), Transform::ALL.len());
        assert_eq!(lines[0], "pluralize");
        assert!(lines.contains(&"camelize-down-first".to_string()));
    }

    #[test]
    fn test_list_acronyms_sorted() {
        let mut rs = Ruleset::new();
        rs.add_acronym("URL");
        rs.add_acronym("API");
        assert_eq!(listing(ListCommands::Acronyms, &rs), vec!["API", "URL"]);
    }

    #[test]
    fn test_list_uncountables_sorted() {
        let mut rs = Ruleset::new();
        rs.add_uncountable("sheep");
        rs.add_uncountable("fish");
        assert_eq!(
            listing(ListCommands::Uncountables, &rs),
            vec!["fish", "sheep"]
        );
    }
}
