//! Static UI string tables.

/// Language whose table is consulted when a key is missing.
pub const DEFAULT_LANGUAGE: &str = "en";

const EN: &[(&str, &str)] = &[
    ("placeholder", "Type your message…"),
    ("send", "Send"),
    ("offerCheckin", "Offer check-in (consent)"),
    ("resources", "Resources"),
    ("about", "About"),
    ("apiStatus", "API Status"),
    ("selectLanguage", "Language"),
    ("noResources", "No resources yet."),
    ("networkError", "Network error. Please try again."),
    (
        "crisisAlert",
        "High risk detected. Please seek immediate professional help if needed.",
    ),
    ("health", "Health"),
    ("ready", "Ready"),
    ("getResources", "Get resources"),
    ("suggestions", "Suggestions"),
    ("languageChanged", "Language set to"),
    ("resetDone", "Conversation memory cleared on the server."),
    ("resetFailed", "Could not reset the conversation."),
    ("thinking", "Thinking..."),
    ("goodbye", "Take care. Goodbye!"),
];

const HI: &[(&str, &str)] = &[
    ("placeholder", "अपना संदेश लिखें…"),
    ("send", "भेजें"),
    ("offerCheckin", "चेक-इन का प्रस्ताव (सहमति)"),
    ("resources", "संसाधन"),
    ("about", "जानकारी"),
    ("apiStatus", "API स्थिति"),
    ("selectLanguage", "भाषा"),
    ("noResources", "अभी तक कोई संसाधन नहीं।"),
    ("networkError", "नेटवर्क त्रुटि। कृपया पुनः प्रयास करें।"),
    (
        "crisisAlert",
        "उच्च जोखिम का पता चला। यदि आवश्यक हो तो कृपया तुरंत पेशेवर सहायता लें।",
    ),
    ("health", "स्वास्थ्य"),
    ("ready", "तैयार"),
    ("getResources", "संसाधन प्राप्त करें"),
    ("suggestions", "सुझाव"),
    ("languageChanged", "भाषा बदली गई:"),
    ("resetDone", "सर्वर पर बातचीत की स्मृति साफ़ कर दी गई।"),
    ("resetFailed", "बातचीत रीसेट नहीं हो सकी।"),
    ("thinking", "सोच रहे हैं..."),
    ("goodbye", "अपना ख्याल रखें। अलविदा!"),
];

// Display languages without translations yet.
const EMPTY: &[(&str, &str)] = &[];

fn table(language: &str) -> &'static [(&'static str, &'static str)] {
    match language {
        "en" => EN,
        "hi" => HI,
        // bn, te, ta, mr, gu, kn, ml, pa, or, as, ur and unknown tags
        _ => EMPTY,
    }
}

fn lookup(language: &str, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Resolves a UI string for `language`.
///
/// Falls back to the default language table, then to `key` itself. Never fails.
pub fn resolve(language: &str, key: &str) -> String {
    lookup(language, key)
        .or_else(|| lookup(DEFAULT_LANGUAGE, key))
        .map_or_else(|| key.to_string(), str::to_string)
}
