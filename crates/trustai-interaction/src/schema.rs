//! Response schemas sent with structured-output requests.
//!
//! The per-field descriptions steer the model, so they are part of the
//! contract and not just documentation. Integer fields are declared as
//! INTEGER so scores parse cleanly into u8.

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Schema for the credibility report returned by analysis requests.
pub static REPORT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "credibility": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "INTEGER", "description": "A credibility score from 0 to 100." },
                    "confidence": { "type": "INTEGER", "description": "The AI's confidence in its score, from 0 to 100." },
                    "status": { "type": "STRING", "enum": ["Credible", "Mostly Credible", "Uncertain", "Potentially Misleading", "Not Credible"] }
                },
                "required": ["score", "confidence", "status"]
            },
            "summary": {
                "type": "OBJECT",
                "properties": {
                    "overview": { "type": "STRING", "description": "A concise, one-paragraph overview of the analysis." },
                    "explanation": { "type": "STRING", "description": "A detailed explanation of why the content was flagged, citing specific examples like unverified sources, exaggerated claims, or emotional tone." }
                },
                "required": ["overview", "explanation"]
            },
            "sentiment_analysis": {
                "type": "OBJECT",
                "properties": {
                    "tone": { "type": "STRING", "enum": ["Neutral", "Positive", "Negative", "Objective", "Biased", "Emotionally Charged", "Sensationalist"] },
                    "bias": { "type": "STRING", "description": "Describe any detected political, corporate, or other bias. E.g., 'Left-leaning', 'No significant bias detected'." }
                },
                "required": ["tone", "bias"]
            },
            "fact_checks": {
                "type": "ARRAY",
                "description": "A list of verifiable claims from the text and their fact-check results. Simulate this using general knowledge if external tools aren't available.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "claim": { "type": "STRING", "description": "The specific claim being checked." },
                        "finding": { "type": "STRING", "enum": ["True", "Mostly True", "Mixture", "Mostly False", "False", "Unproven", "Misleading"] },
                        "source": { "type": "STRING", "description": "The reputable source for the fact-check (e.g., 'Reuters', 'Associated Press')." },
                        "url": { "type": "STRING", "description": "A URL to the fact-check article." }
                    },
                    "required": ["claim", "finding", "source", "url"]
                }
            },
            "rewritten_text": {
                "type": "STRING",
                "description": "If the original text is biased or misleading, provide a rewritten, neutral, and fact-based version. If not applicable, return null."
            },
            "source_analysis": {
                "type": "OBJECT",
                "properties": {
                    "type": { "type": "STRING", "enum": ["Domain", "Image", "Text"] },
                    "reputation": { "type": "STRING", "enum": ["High", "Medium", "Low", "Unknown", "N/A"] },
                    "details": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "For URLs, list details like domain reputation, age, and past reliability. For images, mention reverse search results or signs of manipulation. For text, simply state 'User-provided text'."
                    }
                },
                "required": ["type", "reputation", "details"]
            },
            "referenced_sources": {
                "type": "ARRAY",
                "description": "A list of key sources consulted to make this credibility assessment, with a trust score and status for each.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "The name of the source website or organization." },
                        "url": { "type": "STRING", "description": "The direct URL to the source." },
                        "status": { "type": "STRING", "enum": ["Verified", "Unverified", "Potentially Biased"], "description": "The verification status of this source." },
                        "trust_score": { "type": "INTEGER", "description": "A score from 0-100 representing the trustworthiness of this specific source." },
                        "last_updated": { "type": "STRING", "description": "The last updated date of the source, if available (YYYY-MM-DD). Null otherwise." }
                    },
                    "required": ["name", "url", "status", "trust_score"]
                }
            }
        },
        "required": ["credibility", "summary", "sentiment_analysis", "fact_checks", "rewritten_text", "source_analysis", "referenced_sources"]
    })
});

/// Schema for interpreted navigation commands.
pub static NAV_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "action": { "type": "STRING", "enum": ["navigate", "toggle_theme", "set_input_type", "answer", "unknown"] },
            "value": {
                "type": "OBJECT",
                "properties": {
                    "target": { "type": "STRING", "description": "For 'navigate', one of ['analyzer', 'learn', 'transparency', 'history']. For 'set_input_type', one of ['text', 'url', 'image', 'file']. Otherwise, null." },
                    "response": { "type": "STRING", "description": "For 'answer', the generated text response to the user's question. Otherwise, null." }
                }
            }
        },
        "required": ["action", "value"]
    })
});
