//! Intent classification and goal decomposition.
//!
//! A query maps to exactly one of five closed categories via keyword
//! containment on the lowercased text. Keyword sets are checked in a fixed
//! priority order, so a query holding both "compare" and "risk" classifies
//! as comparison. Goal plans are a fixed lookup per intent — no model call,
//! no randomness.

use serde::{Deserialize, Serialize};

/// The closed set of competitive-question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Comparison,
    Strengths,
    Weaknesses,
    Market,
    /// Default when no keyword set matches.
    Overview,
}

// Keyword sets, in classification priority order. Matching is substring
// containment, so "strengths" matches "strength" and "products" matches
// "pro" — same reach as the ranking the corpus was tuned against.
const COMPARISON_KEYWORDS: &[&str] = &["compare", "vs", "versus"];
const STRENGTHS_KEYWORDS: &[&str] = &["strength", "advantage", "pro", "benefit"];
const WEAKNESSES_KEYWORDS: &[&str] = &["weakness", "con", "risk", "gap"];
const MARKET_KEYWORDS: &[&str] = &["market", "pricing", "position", "segment"];

impl Intent {
    /// Classify a query. First matching keyword set wins; [`Intent::Overview`]
    /// when nothing matches.
    pub fn classify(query: &str) -> Self {
        let q = query.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| q.contains(k));

        if matches(COMPARISON_KEYWORDS) {
            Self::Comparison
        } else if matches(STRENGTHS_KEYWORDS) {
            Self::Strengths
        } else if matches(WEAKNESSES_KEYWORDS) {
            Self::Weaknesses
        } else if matches(MARKET_KEYWORDS) {
            Self::Market
        } else {
            Self::Overview
        }
    }

    /// The fixed 3-step goal plan for this intent, independent of the query.
    pub fn goal_plan(self) -> [&'static str; 3] {
        match self {
            Self::Comparison => [
                "retrieve relevant data for both competitors",
                "analyze differences",
                "summarize actionable insights",
            ],
            Self::Strengths => [
                "retrieve relevant data",
                "extract strengths",
                "summarize with evidence",
            ],
            Self::Weaknesses => [
                "retrieve relevant data",
                "extract weaknesses",
                "summarize with mitigation ideas",
            ],
            Self::Market => [
                "retrieve relevant data",
                "identify market stance/pricing cues",
                "summarize implications",
            ],
            Self::Overview => [
                "retrieve relevant data",
                "summarize key points",
                "list next steps",
            ],
        }
    }

    /// Lowercase label as it appears in prompts and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Comparison => "comparison",
            Self::Strengths => "strengths",
            Self::Weaknesses => "weaknesses",
            Self::Market => "market",
            Self::Overview => "overview",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_keywords() {
        assert_eq!(Intent::classify("Compare Acme and Globex"), Intent::Comparison);
        assert_eq!(Intent::classify("acme vs globex"), Intent::Comparison);
        assert_eq!(Intent::classify("Acme versus Globex?"), Intent::Comparison);
    }

    #[test]
    fn strengths_keywords() {
        assert_eq!(Intent::classify("What are Acme's strengths?"), Intent::Strengths);
        assert_eq!(Intent::classify("main advantage of Globex"), Intent::Strengths);
        assert_eq!(Intent::classify("any benefit to their approach"), Intent::Strengths);
    }

    #[test]
    fn weaknesses_keywords() {
        assert_eq!(Intent::classify("biggest weakness of Acme"), Intent::Weaknesses);
        assert_eq!(Intent::classify("where are the gaps"), Intent::Weaknesses);
        assert_eq!(Intent::classify("what risk do they carry"), Intent::Weaknesses);
    }

    #[test]
    fn market_keywords() {
        assert_eq!(Intent::classify("how is their pricing set"), Intent::Market);
        assert_eq!(Intent::classify("which segment do they serve"), Intent::Market);
    }

    #[test]
    fn overview_is_default() {
        assert_eq!(Intent::classify("tell me about Acme"), Intent::Overview);
        assert_eq!(Intent::classify(""), Intent::Overview);
    }

    #[test]
    fn priority_order_holds_when_multiple_sets_match() {
        // "compare" and "risk" both present: comparison wins.
        assert_eq!(Intent::classify("compare the risk profiles"), Intent::Comparison);
        // "strength" and "gap" both present: strengths wins.
        assert_eq!(Intent::classify("strength and gap analysis"), Intent::Strengths);
        // "con" and "market" both present: weaknesses wins.
        assert_eq!(Intent::classify("cons in this market"), Intent::Weaknesses);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(Intent::classify("COMPARE THEM"), Intent::Comparison);
    }

    #[test]
    fn goal_plans_are_fixed_per_intent() {
        assert_eq!(
            Intent::Comparison.goal_plan(),
            [
                "retrieve relevant data for both competitors",
                "analyze differences",
                "summarize actionable insights",
            ]
        );
        assert_eq!(
            Intent::Strengths.goal_plan(),
            ["retrieve relevant data", "extract strengths", "summarize with evidence"]
        );
        assert_eq!(
            Intent::Weaknesses.goal_plan(),
            [
                "retrieve relevant data",
                "extract weaknesses",
                "summarize with mitigation ideas",
            ]
        );
        assert_eq!(
            Intent::Market.goal_plan(),
            [
                "retrieve relevant data",
                "identify market stance/pricing cues",
                "summarize implications",
            ]
        );
        assert_eq!(
            Intent::Overview.goal_plan(),
            ["retrieve relevant data", "summarize key points", "list next steps"]
        );
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Intent::Comparison.to_string(), "comparison");
        assert_eq!(Intent::Overview.to_string(), "overview");
    }
}
