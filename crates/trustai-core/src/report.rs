//! Credibility report domain models.
//!
//! These types mirror the JSON object the analysis service is constrained to
//! produce. Enum wire strings are the human-readable labels the model emits
//! (e.g. "Mostly Credible"), so serde renames are applied per variant.

use serde::{Deserialize, Serialize};

/// Overall credibility verdict for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredibilityStatus {
    Credible,
    #[serde(rename = "Mostly Credible")]
    MostlyCredible,
    Uncertain,
    #[serde(rename = "Potentially Misleading")]
    PotentiallyMisleading,
    #[serde(rename = "Not Credible")]
    NotCredible,
}

impl CredibilityStatus {
    /// The wire/display label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credible => "Credible",
            Self::MostlyCredible => "Mostly Credible",
            Self::Uncertain => "Uncertain",
            Self::PotentiallyMisleading => "Potentially Misleading",
            Self::NotCredible => "Not Credible",
        }
    }
}

impl std::fmt::Display for CredibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected tone of the analyzed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentTone {
    Neutral,
    Positive,
    Negative,
    Objective,
    Biased,
    #[serde(rename = "Emotionally Charged")]
    EmotionallyCharged,
    Sensationalist,
}

impl SentimentTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Objective => "Objective",
            Self::Biased => "Biased",
            Self::EmotionallyCharged => "Emotionally Charged",
            Self::Sensationalist => "Sensationalist",
        }
    }
}

impl std::fmt::Display for SentimentTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for a single fact-checked claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactCheckFinding {
    True,
    #[serde(rename = "Mostly True")]
    MostlyTrue,
    Mixture,
    #[serde(rename = "Mostly False")]
    MostlyFalse,
    False,
    Unproven,
    Misleading,
}

impl FactCheckFinding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "True",
            Self::MostlyTrue => "Mostly True",
            Self::Mixture => "Mixture",
            Self::MostlyFalse => "Mostly False",
            Self::False => "False",
            Self::Unproven => "Unproven",
            Self::Misleading => "Misleading",
        }
    }
}

impl std::fmt::Display for FactCheckFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of source the analyzed content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    Domain,
    Image,
    Text,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Image => "Image",
            Self::Text => "Text",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reputation assessment for the content's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceReputation {
    High,
    Medium,
    Low,
    Unknown,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl SourceReputation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
            Self::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for SourceReputation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verification status of a source consulted during analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceStatus {
    Verified,
    Unverified,
    #[serde(rename = "Potentially Biased")]
    PotentiallyBiased,
}

impl ReferenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Unverified => "Unverified",
            Self::PotentiallyBiased => "Potentially Biased",
        }
    }
}

impl std::fmt::Display for ReferenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The score/status block of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credibility {
    /// Credibility score from 0 to 100.
    pub score: u8,
    /// How confident the model is in its score, from 0 to 100.
    pub confidence: u8,
    pub status: CredibilityStatus,
}

/// The narrative block of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// One-paragraph overview of the analysis.
    pub overview: String,
    /// Detailed reasoning behind the score and flags.
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub tone: SentimentTone,
    /// Free text, e.g. "Left-leaning" or "No significant bias detected".
    pub bias: String,
}

/// One verifiable claim and its fact-check result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheck {
    pub claim: String,
    pub finding: FactCheckFinding,
    /// Name of the fact-checking source, e.g. "Reuters".
    pub source: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAnalysis {
    #[serde(rename = "type")]
    pub kind: SourceType,
    pub reputation: SourceReputation,
    /// Free-form observations, e.g. "Domain registered recently".
    pub details: Vec<String>,
}

/// One source the model consulted to ground its assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencedSource {
    pub name: String,
    pub url: String,
    pub status: ReferenceStatus,
    /// Trustworthiness of this specific source, from 0 to 100.
    pub trust_score: u8,
    /// Last-updated date of the source (YYYY-MM-DD), when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// The validated output of a single analysis. Immutable once produced.
///
/// `fact_checks` and `referenced_sources` default to empty lists so that a
/// response omitting them still deserializes; `rewritten_text` is `None`
/// when the model had nothing to rewrite (the validator maps an empty
/// string to `None` as well).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub credibility: Credibility,
    pub summary: ReportSummary,
    pub sentiment_analysis: SentimentAnalysis,
    #[serde(default)]
    pub fact_checks: Vec<FactCheck>,
    #[serde(default)]
    pub rewritten_text: Option<String>,
    pub source_analysis: SourceAnalysis,
    #[serde(default)]
    pub referenced_sources: Vec<ReferencedSource>,
}
