use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use regex::Regex;

/// Response buckets, tested in this order; first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Greeting,
    LegalServices,
    Contact,
    Default,
}

lazy_static! {
    static ref GREETING_RE: Regex = Regex::new(r"hi|hello|hey|greetings").unwrap();
    static ref LEGAL_RE: Regex = Regex::new(r"legal|lawyer|attorney|service|help").unwrap();
    static ref CONTACT_RE: Regex = Regex::new(r"contact|reach|phone|email|address").unwrap();
}

pub fn classify(message: &str) -> Category {
    let lower = message.to_lowercase();
    if GREETING_RE.is_match(&lower) {
        Category::Greeting
    } else if LEGAL_RE.is_match(&lower) {
        Category::LegalServices
    } else if CONTACT_RE.is_match(&lower) {
        Category::Contact
    } else {
        Category::Default
    }
}

/// Shown once when a session opens, before the visitor has said anything.
pub const SESSION_GREETINGS: &[&str] = &[
    "Hello! I'm Aryawn, your legal assistant. I'm here to help you with any legal questions or concerns you might have. How can I assist you today?",
    "Welcome to Aryawn Legal Services! I'm your AI assistant, and I can help you learn more about our legal services, schedule consultations, or answer general legal questions. What would you like to know?",
    "Hi there! I'm Aryawn, and I'm here to guide you through our legal services. Whether you need information about our practice areas, want to schedule a consultation, or have general legal questions, I'm here to help. What can I do for you?",
];

const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm Aryawn, your legal assistant. How can I help you today?",
    "Hi there! I'm here to assist you with any legal questions you might have.",
    "Welcome! I'm Aryawn, and I'm here to help you with legal matters.",
];

const LEGAL_REPLIES: &[&str] = &[
    "We offer a wide range of legal services including corporate law, litigation, and regulatory compliance. What specific area are you interested in?",
    "Our firm specializes in various legal areas. Could you tell me more about what you're looking for?",
    "I can help you understand our legal services. What type of legal assistance do you need?",
];

const CONTACT_REPLIES: &[&str] = &[
    "You can reach us through our contact form or call us directly. Would you like me to provide our contact information?",
    "I can help you get in touch with our team. Would you like our office locations or contact details?",
    "We have multiple ways to contact us. What's the most convenient method for you?",
];

const DEFAULT_REPLIES: &[&str] = &[
    "I understand you're interested in legal assistance. Could you please provide more details about your needs?",
    "I'm here to help with legal matters. Could you elaborate on what you're looking for?",
    "Let me know more about your legal requirements, and I'll guide you to the right resources.",
];

pub fn reply_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Greeting => GREETING_REPLIES,
        Category::LegalServices => LEGAL_REPLIES,
        Category::Contact => CONTACT_REPLIES,
        Category::Default => DEFAULT_REPLIES,
    }
}

/// One reply from the matched category's pool, chosen uniformly at random.
pub fn pick_reply(category: Category) -> &'static str {
    reply_pool(category)
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEFAULT_REPLIES[0])
}

pub fn pick_session_greeting() -> &'static str {
    SESSION_GREETINGS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SESSION_GREETINGS[0])
}
