//! Verification Report Assembler

use crate::error::ProvenanceError;
use crate::matcher::MatchResult;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use verbatim_domain::Quote;

/// One quote and the outcome of matching it
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct QuoteVerification {
    /// The quote as extracted from the draft
    pub quote: Quote,

    /// Result of matching it against the corpus
    pub result: MatchResult,
}

/// Summary counts; `verified + unverified == total` always holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ReportSummary {
    /// Number of quotes checked
    pub total: usize,
    /// Quotes found in the corpus
    pub verified: usize,
    /// Quotes not found
    pub unverified: usize,
}

/// Per-quote results in draft order
///
/// The verified and unverified partitions are derived from the entries on
/// demand, so they cannot drift from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    entries: Vec<QuoteVerification>,
}

impl VerificationReport {
    /// Pair quotes with their match results
    ///
    /// The two sequences must be parallel. No matching happens here; the
    /// verification status of each result is taken as given.
    pub fn assemble(quotes: Vec<Quote>, matches: Vec<MatchResult>) -> Result<Self, ProvenanceError> {
        if quotes.len() != matches.len() {
            return Err(ProvenanceError::LengthMismatch {
                quotes: quotes.len(),
                matches: matches.len(),
            });
        }

        let entries = quotes
            .into_iter()
            .zip(matches)
            .map(|(quote, result)| QuoteVerification { quote, result })
            .collect();

        Ok(Self { entries })
    }

    /// Every quote in draft order
    pub fn entries(&self) -> &[QuoteVerification] {
        &self.entries
    }

    /// Verified quotes in draft order
    pub fn verified(&self) -> impl Iterator<Item = &QuoteVerification> {
        self.entries.iter().filter(|e| e.result.is_verified())
    }

    /// Unverified quotes in draft order
    pub fn unverified(&self) -> impl Iterator<Item = &QuoteVerification> {
        self.entries.iter().filter(|e| !e.result.is_verified())
    }

    /// Number of quotes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the draft had no quotes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary counts
    pub fn summary(&self) -> ReportSummary {
        let verified = self.verified().count();
        ReportSummary {
            total: self.entries.len(),
            verified,
            unverified: self.entries.len() - verified,
        }
    }
}

impl Serialize for VerificationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VerificationReport", 2)?;
        state.serialize_field("summary", &self.summary())?;
        state.serialize_field("quotes", &self.entries)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchMethod;
    use verbatim_domain::SourceRef;

    fn found() -> MatchResult {
        MatchResult::verified(SourceRef::Transcript, Some("ctx".into()), None, MatchMethod::Local)
    }

    fn missing() -> MatchResult {
        MatchResult::not_found(MatchMethod::Local)
    }

    #[test]
    fn test_partitions_preserve_order() {
        let quotes = vec![
            Quote::new("first quotation", 0),
            Quote::new("second quotation", 20),
            Quote::new("third quotation", 40),
        ];
        let report =
            VerificationReport::assemble(quotes, vec![found(), missing(), found()]).unwrap();

        let verified: Vec<_> = report.verified().map(|e| e.quote.text.as_str()).collect();
        assert_eq!(verified, vec!["first quotation", "third quotation"]);

        let unverified: Vec<_> = report.unverified().map(|e| e.quote.text.as_str()).collect();
        assert_eq!(unverified, vec!["second quotation"]);

        assert_eq!(
            report.summary(),
            ReportSummary {
                total: 3,
                verified: 2,
                unverified: 1
            }
        );
    }

    #[test]
    fn test_length_mismatch() {
        let result = VerificationReport::assemble(vec![Quote::new("only quotation", 0)], vec![]);
        assert!(matches!(
            result,
            Err(ProvenanceError::LengthMismatch {
                quotes: 1,
                matches: 0
            })
        ));
    }

    #[test]
    fn test_empty_report() {
        let report = VerificationReport::assemble(vec![], vec![]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.summary().total, 0);
    }

    #[test]
    fn test_serialization_shape() {
        let report = VerificationReport::assemble(
            vec![Quote::new("first quotation", 0), Quote::new("second quotation", 20)],
            vec![found(), missing()],
        )
        .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["verified"], 1);
        assert_eq!(json["quotes"][0]["result"]["matched_source"]["kind"], "transcript");
        assert!(json["quotes"][1]["result"].get("snippet").is_none());
    }
}
