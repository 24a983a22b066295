use crate::models::ObjectionCategory;

pub const PHRASE_WEIGHT: u32 = 3;
pub const KEYWORD_WEIGHT: u32 = 1;

/// Minimum classifier confidence required to report a category.
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;

pub struct CategoryPatterns {
    pub category: ObjectionCategory,
    pub phrases: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

/// Detection vocabulary per category, in tie-break priority order.
/// Phrases weigh 3, keywords weigh 1; all entries are lowercase because the
/// classifier matches against lowercased input.
pub const CATEGORY_PATTERNS: &[CategoryPatterns] = &[
    CategoryPatterns {
        category: ObjectionCategory::Price,
        phrases: &[
            "too expensive",
            "out of budget",
            "can't afford",
            "cannot afford",
            "costs too much",
            "price is too high",
            "not worth the price",
            "cheaper option",
        ],
        keywords: &[
            "price", "cost", "expensive", "budget", "afford", "pricing", "discount", "cheaper",
        ],
    },
    CategoryPatterns {
        category: ObjectionCategory::Time,
        phrases: &[
            "not a good time",
            "too busy",
            "call me later",
            "next quarter",
            "circle back",
            "check back",
            "not right now",
            "bad timing",
        ],
        keywords: &["busy", "later", "timing", "schedule", "swamped", "quarter"],
    },
    CategoryPatterns {
        category: ObjectionCategory::Authority,
        phrases: &[
            "need to check with",
            "talk to my boss",
            "not my decision",
            "run it by",
            "ask my manager",
            "need approval",
            "decision maker",
            "above my pay grade",
        ],
        keywords: &["boss", "manager", "approval", "committee", "director", "team"],
    },
    CategoryPatterns {
        category: ObjectionCategory::Trust,
        phrases: &[
            "never heard of",
            "how do i know",
            "sounds too good",
            "too good to be true",
            "not sure about you",
            "prove it",
            "track record",
            "is this legit",
        ],
        keywords: &["trust", "proof", "guarantee", "skeptical", "scam", "references"],
    },
    CategoryPatterns {
        category: ObjectionCategory::BrushOff,
        phrases: &[
            "not interested",
            "just looking",
            "send me an email",
            "send me some information",
            "we're all set",
            "happy with what we have",
            "no thanks",
            "don't need",
        ],
        keywords: &["fine", "maybe", "whatever", "email", "someday"],
    },
];

// Feature extractor vocabularies. Multi-word entries are matched as
// substrings; single-word lists marked word-boundary are matched per word.

pub const EMPATHY_PHRASES: &[&str] = &[
    "i understand",
    "i hear you",
    "i appreciate",
    "that's a valid",
    "great question",
    "i can see why",
    "makes sense",
    "your concern",
    "thank you for sharing",
    "i get that",
    "completely fair",
];

pub const SPECIFICITY_INDICATORS: &[&str] = &[
    "for example",
    "for instance",
    "specifically",
    "in particular",
    "such as",
    "percent",
    "%",
    "case study",
    "on average",
    "typically",
    "our data",
    "research shows",
    "per month",
    "last year",
];

pub const VALUE_LANGUAGE: &[&str] = &[
    "value",
    "roi",
    "return on investment",
    "save",
    "savings",
    "benefit",
    "results",
    "outcome",
    "growth",
    "revenue",
    "efficiency",
    "pays for itself",
];

pub const UNCERTAIN_PHRASES: &[&str] = &[
    "i think",
    "maybe",
    "possibly",
    "not sure",
    "i guess",
    "probably",
    "kind of",
    "sort of",
    "hopefully",
    "i suppose",
];

pub const CONFIDENT_PHRASES: &[&str] = &[
    "definitely",
    "absolutely",
    "certainly",
    "i'm confident",
    "guarantee",
    "proven",
    "without a doubt",
    "rest assured",
    "every time",
    "i know",
];

// Word-boundary lists.
pub const CASUAL_WORDS: &[&str] = &[
    "yeah", "nah", "gonna", "wanna", "kinda", "stuff", "dude", "cool", "um", "uh",
];

pub const PROFESSIONAL_WORDS: &[&str] = &[
    "certainly",
    "specifically",
    "furthermore",
    "additionally",
    "solution",
    "investment",
    "partnership",
    "objective",
    "strategic",
    "implementation",
];

pub const OPEN_ENDED_WORDS: &[&str] = &["what", "how", "why"];
pub const HYPOTHETICAL_WORDS: &[&str] = &["would", "could", "might"];
pub const DISCOVERY_PHRASES: &[&str] = &["have you", "do you", "are you"];

pub const TRANSITION_PATTERN: &str = r"\b(first|second|third|finally|additionally|furthermore|however|therefore|moreover|also|next|then|beyond that|on top of that)\b";

pub struct ResponsePool {
    pub category: ObjectionCategory,
    pub acknowledge: &'static [&'static str],
    pub reframe: &'static [&'static str],
    pub engage: &'static [&'static str],
}

/// Acknowledge-Reframe-Engage phrase pools for the general industry bank.
pub const GENERAL_BANK: &[ResponsePool] = &[
    ResponsePool {
        category: ObjectionCategory::Price,
        acknowledge: &[
            "I completely understand that budget is a real consideration.",
            "That's fair, price matters in a decision like this.",
            "I hear you, nobody wants to overspend.",
        ],
        reframe: &[
            "Most teams we work with found the investment paid for itself within the first quarter.",
            "It can help to weigh the cost against what the problem costs you today.",
            "When you break it down per seat, the picture usually changes.",
        ],
        engage: &[
            "What would make the investment feel justified on your side?",
            "If budget weren't a factor, would this solve the problem for you?",
            "What does working around this cost your team each month?",
        ],
    },
    ResponsePool {
        category: ObjectionCategory::Time,
        acknowledge: &[
            "Totally fair, timing matters as much as fit.",
            "I get it, your plate sounds full right now.",
            "That makes sense, nobody needs another project mid-quarter.",
        ],
        reframe: &[
            "Teams that started small found the rollout took less time than the problem was costing them.",
            "A short pilot now often makes the bigger rollout later much easier.",
            "The busiest quarters are usually the ones where this saves the most hours.",
        ],
        engage: &[
            "What would need to come off your plate for this to be worth fifteen minutes?",
            "When does the timing usually open up for projects like this?",
            "If we handled the setup, would timing still be the blocker?",
        ],
    },
    ResponsePool {
        category: ObjectionCategory::Authority,
        acknowledge: &[
            "Of course, a decision like this should involve the right people.",
            "That makes sense, I'd want my manager's input too.",
            "Completely fair, buying alone is rarely the right move.",
        ],
        reframe: &[
            "What I can do is arm you with the numbers your boss will ask about.",
            "Decision makers usually want to see the business case before the demo.",
            "The teams that move fastest bring their manager in early with a one-pager.",
        ],
        engage: &[
            "What questions will your manager ask first?",
            "Would it help if we walked through the business case together before you present it?",
            "Who else weighs in on a decision like this?",
        ],
    },
    ResponsePool {
        category: ObjectionCategory::Trust,
        acknowledge: &[
            "That's a healthy dose of skepticism, honestly.",
            "Fair point, you should expect proof before taking anyone's word.",
            "I understand, trust has to be earned.",
        ],
        reframe: &[
            "That's exactly why we lead with references rather than promises.",
            "The track record matters more than the pitch, so let's look at real numbers.",
            "Customers in your position asked the same thing and stayed for the results.",
        ],
        engage: &[
            "Would talking to a current customer in your industry help?",
            "What would you need to see to feel confident in us?",
            "Have you been burned by a vendor before? I'd like to know what went wrong.",
        ],
    },
    ResponsePool {
        category: ObjectionCategory::BrushOff,
        acknowledge: &[
            "No problem, I appreciate the straight answer.",
            "Fair enough, you weren't expecting this conversation.",
            "I get it, you have plenty coming at you already.",
        ],
        reframe: &[
            "Most people who said that were picturing a sales pitch rather than a quick comparison.",
            "If what you have is working, this is just a benchmark to confirm it.",
            "An email tends to bury it, a two-minute answer here usually settles it.",
        ],
        engage: &[
            "Before I go, what would have to change for this to become a priority?",
            "Out of curiosity, what are you using to handle this today?",
            "If I send one thing, what would actually be worth reading?",
        ],
    },
];

pub const NEUTRAL_ACKNOWLEDGE: &str = "Thanks for sharing that.";
pub const NEUTRAL_REFRAME: &str = "Let's make sure we focus on what matters most to you.";
pub const NEUTRAL_ENGAGE: &str = "What would be most useful to cover next?";

pub struct IdealResponseEntry {
    pub text: &'static str,
    pub explanation: &'static str,
    pub key_techniques: &'static [&'static str],
}

pub const IDEAL_PRICE: IdealResponseEntry = IdealResponseEntry {
    text: "I completely understand that budget is a real concern. Many of our customers felt the same way until they saw that the platform paid for itself in about three months. For example, a team your size typically saves twenty hours a week on coaching alone. What would the investment need to return for it to make sense on your side?",
    explanation: "Acknowledges the concern, reframes cost as a measurable return with a concrete example, and closes with a forward-moving question.",
    key_techniques: &[
        "Acknowledge-Reframe-Engage",
        "Concrete ROI example",
        "Forward-moving question",
    ],
};

pub const IDEAL_TRUST: IdealResponseEntry = IdealResponseEntry {
    text: "That's a fair concern, and honestly I'd want proof too. Rather than take my word for it, I can connect you with two customers in your industry who asked the same question last year. They can tell you exactly what the first ninety days looked like. Would a short reference call help you feel confident either way?",
    explanation: "Validates the skepticism, offers third-party evidence instead of claims, and engages with a low-pressure next step.",
    key_techniques: &[
        "Acknowledge-Reframe-Engage",
        "Third-party proof",
        "Low-pressure close",
    ],
};

pub const IDEAL_GENERIC: IdealResponseEntry = IdealResponseEntry {
    text: "I hear you, and that's a completely valid concern. Here's another way to look at it: the teams who raised the same point found the underlying problem was costing them more than the fix. What part of this would be most useful to dig into together?",
    explanation: "A general Acknowledge-Reframe-Engage response: validate the concern, reposition it as addressable, then ask a question that moves the conversation forward.",
    key_techniques: &["Acknowledge-Reframe-Engage"],
};

pub const TIP_FRAMEWORK: &str =
    "Use the Acknowledge-Reframe-Engage framework: validate the concern, reposition it, then ask a question.";
pub const TIP_START_WITH_EMPATHY: &str =
    "Start your next response with empathy before you answer the objection itself.";
pub const TIP_RETURN_TO_WORKED: &str =
    "Your earlier responses were stronger. Go back to what worked: more detail, more empathy, a closing question.";

pub const LONG_TERM_TIPS: [&str; 2] = [
    "Build a personal library of customer stories and numbers you can reach for under pressure.",
    "Practice ending every objection response with a question that moves the conversation forward.",
];
