//! Password strength checks against a loaded table set
//!
//! A password is weak when it is shorter than the policy minimum, is itself
//! a dictionary word, or is a dictionary word followed only by digits.
//! Every lookup goes to every instance so their comparison counts can be
//! compared for the same work.

use crate::config::PolicyConfig;
use crate::error::CheckError;
use crate::tables::TableSet;
use std::fmt;

/// Outcome of a strength check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Shorter than the minimum length; no lookups were made
    TooShort { min_length: usize },

    /// The whole password is a dictionary word
    DictionaryWord,

    /// A dictionary word followed by one or more digits
    WordWithDigits { word: String, digits: String },

    /// None of the above
    Strong,
}

impl Verdict {
    pub fn is_strong(&self) -> bool {
        matches!(self, Verdict::Strong)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::TooShort { min_length } => write!(
                f,
                "Password is not strong: Less than {} characters.",
                min_length
            ),
            Verdict::DictionaryWord => {
                write!(f, "Password is not strong: It is a common dictionary word.")
            }
            Verdict::WordWithDigits { .. } => write!(
                f,
                "Password is not strong: It is a common dictionary word followed by a digit."
            ),
            Verdict::Strong => write!(f, "Password is strong."),
        }
    }
}

/// Lookups and comparisons one instance performed during a check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceCount {
    pub label: String,
    pub lookups: usize,
    pub comparisons: usize,
}

/// Per-instance totals for a whole check, in table set order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    pub instances: Vec<InstanceCount>,
}

impl ComparisonReport {
    fn for_set(tables: &TableSet) -> Self {
        ComparisonReport {
            instances: tables
                .instances()
                .iter()
                .map(|instance| InstanceCount {
                    label: instance.label.clone(),
                    lookups: 0,
                    comparisons: 0,
                })
                .collect(),
        }
    }

    /// Sum of comparisons across every instance
    pub fn total_comparisons(&self) -> usize {
        self.instances.iter().map(|count| count.comparisons).sum()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in &self.instances {
            writeln!(
                f,
                "{} comparisons: {} ({} lookups)",
                count.label, count.comparisons, count.lookups
            )?;
        }
        Ok(())
    }
}

/// Verdict plus the comparison work it took
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assessment {
    pub verdict: Verdict,
    pub report: ComparisonReport,
}

/// Runs strength checks against a populated table set
pub struct StrengthChecker<'a> {
    tables: &'a TableSet,
    min_length: usize,
}

impl<'a> StrengthChecker<'a> {
    pub fn new(tables: &'a TableSet, policy: &PolicyConfig) -> Self {
        StrengthChecker {
            tables,
            min_length: policy.min_length,
        }
    }

    /// Classify `password`
    pub fn check(&self, password: &str) -> Result<Assessment, CheckError> {
        let mut report = ComparisonReport::for_set(self.tables);

        if password.chars().count() < self.min_length {
            return Ok(Assessment {
                verdict: Verdict::TooShort {
                    min_length: self.min_length,
                },
                report,
            });
        }

        if self.lookup(password, &mut report)? {
            return Ok(Assessment {
                verdict: Verdict::DictionaryWord,
                report,
            });
        }

        // Every prefix is looked up, the empty one included; a hit only
        // counts when a non-empty word is followed by nothing but digits
        for (split, _) in password.char_indices() {
            let (word, digits) = password.split_at(split);
            let found = self.lookup(word, &mut report)?;

            if found && !word.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(Assessment {
                    verdict: Verdict::WordWithDigits {
                        word: word.to_string(),
                        digits: digits.to_string(),
                    },
                    report,
                });
            }
        }

        Ok(Assessment {
            verdict: Verdict::Strong,
            report,
        })
    }

    /// Query every instance, true if any holds `key`
    fn lookup(&self, key: &str, report: &mut ComparisonReport) -> Result<bool, CheckError> {
        let mut found = false;

        for (instance, count) in self.tables.instances().iter().zip(&mut report.instances) {
            let lookup = instance.contains(key)?;
            count.lookups += 1;
            count.comparisons += lookup.comparisons;
            found |= lookup.found;
        }

        tracing::trace!(key, found, "dictionary lookup");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InstanceSpec, TableSetConfig};
    use wordtab_core::{HashVariant, Strategy};

    fn loaded(words: &[&str]) -> TableSet {
        let config = TableSetConfig {
            chaining_capacity: 10,
            probing_capacity: 64,
            ..TableSetConfig::default()
        };
        let mut tables = TableSet::new(&config).unwrap();
        tables.populate(words.iter().copied()).unwrap();
        tables
    }

    fn policy() -> PolicyConfig {
        PolicyConfig { min_length: 8 }
    }

    #[test]
    fn test_too_short_skips_lookups() {
        let tables = loaded(&["password"]);
        let checker = StrengthChecker::new(&tables, &policy());

        let assessment = checker.check("pass1").unwrap();
        assert_eq!(assessment.verdict, Verdict::TooShort { min_length: 8 });
        assert_eq!(assessment.report.instances.len(), 4);
        assert!(assessment.report.instances.iter().all(|c| c.lookups == 0));
    }

    #[test]
    fn test_length_counts_chars() {
        let tables = loaded(&["password"]);
        let checker = StrengthChecker::new(&tables, &policy());

        // 7 chars, 14 bytes
        let assessment = checker.check("ééééééé").unwrap();
        assert!(matches!(assessment.verdict, Verdict::TooShort { .. }));
    }

    #[test]
    fn test_dictionary_word() {
        let tables = loaded(&["password", "sunshine", "princess"]);
        let checker = StrengthChecker::new(&tables, &policy());

        let assessment = checker.check("sunshine").unwrap();
        assert_eq!(assessment.verdict, Verdict::DictionaryWord);
        for count in &assessment.report.instances {
            assert_eq!(count.lookups, 1);
            assert!(count.comparisons >= 1);
        }
    }

    #[test]
    fn test_word_with_digits() {
        let tables = loaded(&["password", "dragon"]);
        let checker = StrengthChecker::new(&tables, &policy());

        let assessment = checker.check("dragon2024").unwrap();
        assert_eq!(
            assessment.verdict,
            Verdict::WordWithDigits {
                word: "dragon".to_string(),
                digits: "2024".to_string(),
            }
        );
        assert!(!assessment.verdict.is_strong());

        // Whole password, then prefixes "" through "dragon"
        for count in &assessment.report.instances {
            assert_eq!(count.lookups, 8);
        }
    }

    #[test]
    fn test_mixed_suffix_is_not_a_digit_suffix() {
        let tables = loaded(&["dragon"]);
        let checker = StrengthChecker::new(&tables, &policy());

        let assessment = checker.check("dragonx2024").unwrap();
        assert_eq!(assessment.verdict, Verdict::Strong);
    }

    #[test]
    fn test_strong_password_report() {
        let tables = loaded(&["password", "dragon"]);
        let checker = StrengthChecker::new(&tables, &policy());

        // Whole password, then one lookup per split: 11 chars, 11 prefixes
        let assessment = checker.check("Tr0ub4dor&3").unwrap();
        assert_eq!(assessment.verdict, Verdict::Strong);
        for count in &assessment.report.instances {
            assert_eq!(count.lookups, 12);
        }
    }

    #[test]
    fn test_prefix_hits_without_digit_suffix_still_cost_lookups() {
        let tables = loaded(&["abcdefgh", "abcdefg"]);
        let checker = StrengthChecker::new(&tables, &policy());

        // "abcdefg" and "abcdefgh" are found but followed by letters
        let assessment = checker.check("abcdefghxy").unwrap();
        assert_eq!(assessment.verdict, Verdict::Strong);
        for count in &assessment.report.instances {
            assert_eq!(count.lookups, 11);
        }
    }

    #[test]
    fn test_empty_word_is_not_a_word_with_digits() {
        // A blank line in the word list stores the empty string
        let tables = loaded(&["", "password"]);
        let checker = StrengthChecker::new(&tables, &policy());

        let assessment = checker.check("12345678").unwrap();
        assert_eq!(assessment.verdict, Verdict::Strong);
    }

    #[test]
    fn test_report_counts_match_direct_lookups() {
        let words = ["cat", "dog", "hello"];
        let config = TableSetConfig {
            chaining_capacity: 10,
            probing_capacity: 64,
            instances: vec![InstanceSpec {
                strategy: Strategy::Chaining,
                variant: HashVariant::Dense,
            }],
        };
        let mut tables = TableSet::new(&config).unwrap();
        tables.populate(words).unwrap();

        let checker = StrengthChecker::new(&tables, &policy());
        let assessment = checker.check("hellohello").unwrap();

        // Whole password, then every prefix from "" to "hellohell"
        let instance = &tables.instances()[0];
        let mut direct = instance.contains("hellohello").unwrap().comparisons;
        for split in 0..10 {
            direct += instance.contains(&"hellohello"[..split]).unwrap().comparisons;
        }

        assert_eq!(assessment.verdict, Verdict::Strong);
        assert_eq!(assessment.report.instances[0].lookups, 11);
        assert_eq!(assessment.report.instances[0].comparisons, direct);
        assert_eq!(assessment.report.total_comparisons(), direct);
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::Strong.to_string(), "Password is strong.");
        assert_eq!(
            Verdict::TooShort { min_length: 8 }.to_string(),
            "Password is not strong: Less than 8 characters."
        );
    }
}
