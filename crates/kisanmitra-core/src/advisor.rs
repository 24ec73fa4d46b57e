//! Scripted farming advisor.
//!
//! Keyword lookup against a fixed knowledge table. Each topic carries its
//! keyword variants in English, Hindi and Punjabi; the first topic whose
//! keyword appears in the question wins, otherwise the fallback answer is
//! returned. No model, no network, fully deterministic.

/// One topic the advisor can answer
struct KnowledgeEntry {
    topic: &'static str,
    keywords: &'static [&'static str],
    response: &'static str,
}

const KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        topic: "wheat",
        keywords: &["wheat", "गेहूं", "ਕਣਕ"],
        response: "Wheat is a major crop in India. The current market price ranges from \
                   ₹1,800 to ₹2,200 per quintal depending on the quality and location. The MSP \
                   (Minimum Support Price) for wheat is ₹2,015 per quintal for the 2024-25 season.",
    },
    KnowledgeEntry {
        topic: "rice",
        keywords: &["rice", "paddy", "चावल", "ਚਾਵਲ"],
        response: "Rice cultivation requires good irrigation. The current market price for \
                   common rice varieties ranges from ₹1,600 to ₹2,400 per quintal. For premium \
                   varieties like Basmati, prices can go up to ₹4,000 per quintal. The MSP for \
                   common paddy is ₹2,183 per quintal.",
    },
    KnowledgeEntry {
        topic: "fertilizer",
        keywords: &["fertilizer", "fertiliser", "खाद", "ਖਾਦ"],
        response: "For balanced soil nutrition, use a combination of organic and chemical \
                   fertilizers. NPK (Nitrogen, Phosphorus, Potassium) ratios should be based on \
                   soil tests. Consider using biofertilizers like Rhizobium, Azotobacter, and PSB \
                   for sustainable farming.",
    },
    KnowledgeEntry {
        topic: "weather",
        keywords: &["weather", "monsoon", "rain", "मौसम", "ਮੌਸਮ"],
        response: "Based on the latest forecasts, the monsoon is expected to be normal this \
                   year with well-distributed rainfall. June-September rainfall is predicted to be \
                   103% of the long-period average. Prepare your fields accordingly and consider \
                   crop varieties suitable for the expected conditions.",
    },
    KnowledgeEntry {
        topic: "scheme",
        keywords: &["scheme", "subsidy", "योजना", "ਯੋਜਨਾ"],
        response: "Several government schemes are available for farmers including PM-KISAN \
                   (₹6,000 annual direct benefit transfer), Soil Health Card Scheme (free soil \
                   testing), and PMFBY (crop insurance). Visit your local agriculture office or \
                   check the official websites for application details.",
    },
];

const FALLBACK: &str = "I'm your KisanMitra farming assistant. I can help you with information \
                        about crops, weather forecasts, market prices, soil health, and government \
                        schemes. What specific information are you looking for today?";

/// The advisor itself. Cheap to construct, no state between questions.
pub struct Advisor {
    entries: &'static [KnowledgeEntry],
}

impl Advisor {
    pub fn new() -> Self {
        Self {
            entries: KNOWLEDGE_BASE,
        }
    }

    /// Answer a question. Matching is case-insensitive substring, first
    /// topic in table order wins.
    pub fn reply(&self, question: &str) -> &'static str {
        let question = question.to_lowercase();

        self.entries
            .iter()
            .find(|entry| {
                entry
                    .keywords
                    .iter()
                    .any(|keyword| question.contains(&keyword.to_lowercase()))
            })
            .map(|entry| entry.response)
            .unwrap_or(FALLBACK)
    }

    /// Topics the advisor knows about, for the help text
    pub fn topics(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.topic).collect()
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_is_case_insensitive() {
        let advisor = Advisor::new();
        let reply = advisor.reply("What is the WHEAT price today?");
        assert!(reply.contains("₹2,015"));
    }

    #[test]
    fn hindi_keyword_matches() {
        let advisor = Advisor::new();
        let reply = advisor.reply("गेहूं का भाव क्या है");
        assert!(reply.contains("Wheat"));
    }

    #[test]
    fn punjabi_keyword_matches() {
        let advisor = Advisor::new();
        let reply = advisor.reply("ਮੌਸਮ ਕਿਵੇਂ ਰਹੇਗਾ");
        assert!(reply.contains("monsoon"));
    }

    #[test]
    fn first_topic_in_table_order_wins() {
        let advisor = Advisor::new();
        // Mentions both wheat and weather; wheat is declared first.
        let reply = advisor.reply("wheat in this weather");
        assert!(reply.contains("MSP"));
        assert!(reply.contains("wheat") || reply.contains("Wheat"));
    }

    #[test]
    fn unknown_question_gets_the_fallback() {
        let advisor = Advisor::new();
        let reply = advisor.reply("tell me about tractors");
        assert!(reply.contains("KisanMitra farming assistant"));
    }

    #[test]
    fn topics_lists_every_entry() {
        let advisor = Advisor::new();
        assert_eq!(
            advisor.topics(),
            vec!["wheat", "rice", "fertilizer", "weather", "scheme"]
        );
    }
}
