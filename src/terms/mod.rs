//! Terms & Conditions deck shown by `--terms`.

use colored::Color;
use colored::Colorize;

/// One card of the deck. `summary` is the short front text,
/// `detail` the longer back text.
#[derive(Debug, Clone, Copy)]
pub struct TermCard {
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

const ACCENTS: [Color; 6] = [
    Color::Cyan,
    Color::Red,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::BrightRed,
];

pub fn deck() -> &'static [TermCard] {
    TERMS_DECK
}

/// Renders the full deck, numbered and zero-padded, cycling the
/// accent color per card.
pub fn render_deck(cards: &[TermCard]) -> String {
    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        let accent = ACCENTS[index % ACCENTS.len()];
        let number = format!("{:02}", index + 1);
        out.push_str(&format!(
            "{} {}\n",
            number.color(accent).bold(),
            card.title.bold()
        ));
        out.push_str(&format!("   {}\n", card.summary));
        out.push_str(&format!("   {}\n\n", card.detail.dimmed()));
    }
    out
}

static TERMS_DECK: &[TermCard] = &[
    TermCard {
        title: "Acceptance of Terms",
        summary: "By accessing or using this website, you agree to be bound by these Terms & Conditions.",
        detail: "If you do not agree, strictly discontinue use. Continued use implies full acceptance.",
    },
    TermCard {
        title: "Website Purpose",
        summary: "This platform provides informational and utility-based tools related to social media.",
        detail: "Tools assist in understanding online presence. We do not guarantee specific outcomes.",
    },
    TermCard {
        title: "Eligibility",
        summary: "Users must be at least 13 years of age to use this website.",
        detail: "You confirm you meet the age requirement. Parents are responsible for minors.",
    },
    TermCard {
        title: "User Responsibilities",
        summary: "Users agree to use the website only for lawful purposes.",
        detail: "Misuse, abuse, or disrupting services is prohibited. You are responsible for your actions.",
    },
    TermCard {
        title: "No Professional Advice",
        summary: "Content provided on this website is for informational purposes only.",
        detail: "Not considered professional, legal, or financial advice. Make independent decisions.",
    },
    TermCard {
        title: "Accuracy of Information",
        summary: "We strive to keep all information accurate and up to date.",
        detail: "We do not guarantee completeness. Content may be updated without notice.",
    },
    TermCard {
        title: "Tool Usage Disclaimer",
        summary: "Tools are provided \u{201c}as-is\u{201d} and \u{201c}as-available.\u{201d}",
        detail: "No guarantee of error-free functionality. Results may vary based on input.",
    },
    TermCard {
        title: "User-Submitted Data",
        summary: "Any data submitted by users is provided voluntarily.",
        detail: "You are responsible for your content. We do not validate user-submitted info.",
    },
    TermCard {
        title: "Data Storage & Processing",
        summary: "Submitted data may be temporarily stored for processing or functionality.",
        detail: "We do not sell data. Data handling follows reasonable security practices.",
    },
    TermCard {
        title: "Intellectual Property",
        summary: "All website content, design, branding, and layout are owned by GI28.",
        detail: "Unauthorized copying is prohibited. No commercial use without permission.",
    },
    TermCard {
        title: "Third-Party Services",
        summary: "The website may integrate third-party tools or services.",
        detail: "We are not responsible for third-party content. You interact at your own risk.",
    },
    TermCard {
        title: "External Links",
        summary: "This website may contain links to external websites.",
        detail: "We do not endorse external content. Visiting links is at your discretion.",
    },
    TermCard {
        title: "Availability of Services",
        summary: "Website features may be modified, suspended, or discontinued at any time.",
        detail: "Not liable for interruptions. Maintenance or updates may cause downtime.",
    },
    TermCard {
        title: "Limitation of Liability",
        summary: "We are not liable for any direct or indirect damages arising from website use.",
        detail: "Includes data loss or service interruptions. Use is entirely at your own risk.",
    },
    TermCard {
        title: "Prohibited Activities",
        summary: "Users must not attempt to hack, exploit, or reverse-engineer the platform.",
        detail: "Automated abuse or scraping is forbidden. Violations result in access restriction.",
    },
    TermCard {
        title: "Changes to Terms",
        summary: "These Terms & Conditions may be updated periodically.",
        detail: "Continued use implies acceptance. Please review this page regularly.",
    },
    TermCard {
        title: "Fair Usage Policy",
        summary: "Users must use the platform fairly and within reasonable limits.",
        detail: "Excessive requests or abuse leads to bans. We monitor usage for stability.",
    },
    TermCard {
        title: "Account & Tool Access",
        summary: "Some features may require user input or interaction to function properly.",
        detail: "No account required unless stated. Access is non-transferable and for personal use.",
    },
    TermCard {
        title: "Automated Systems",
        summary: "Certain features may use automated or algorithm-based processes.",
        detail: "Systems use predefined logic/public data. No guarantee of error-free automation.",
    },
    TermCard {
        title: "No Affiliation",
        summary: "This website operates independently and is not connected to any social media company.",
        detail: "Brand names are for identification only. No partnership or endorsement implied.",
    },
    TermCard {
        title: "User-Generated Input",
        summary: "Any information submitted by users is provided voluntarily.",
        detail: "You ensure accuracy. We are not liable for misleading user inputs.",
    },
    TermCard {
        title: "Security Measures",
        summary: "We implement reasonable security practices to protect platform integrity.",
        detail: "No system is 100% secure. Maintain safe browsing practices.",
    },
    TermCard {
        title: "Abuse Handling",
        summary: "Any attempt to exploit system vulnerabilities is strictly prohibited.",
        detail: "Violations lead to termination. Serious issues may be reported to authorities.",
    },
    TermCard {
        title: "Service Modifications",
        summary: "Features and tools may be updated, improved, or removed over time.",
        detail: "We aim to enhance experience. Continued use implies acceptance of changes.",
    },
    TermCard {
        title: "Performance Disclaimer",
        summary: "Website performance may vary based on device, network, or browser.",
        detail: "Not responsible for delays by third-parties. Outages may occur for maintenance.",
    },
    TermCard {
        title: "Content Availability",
        summary: "Some content may be updated, replaced, or removed periodically.",
        detail: "No guarantee of permanent availability. Outdated content may remain visible.",
    },
    TermCard {
        title: "Advertising",
        summary: "This website may display advertisements to support platform maintenance.",
        detail: "Ads provided by third-parties (e.g., AdSense). We do not control ad content.",
    },
    TermCard {
        title: "Policy Compliance",
        summary: "Users agree to comply with all applicable laws and regulations.",
        detail: "Must not violate third-party terms. Non-compliance results in restricted access.",
    },
    TermCard {
        title: "Disclaimer of Warranties",
        summary: "All services are provided without warranties of any kind.",
        detail: "We disclaim implied warranties. Access is at your own discretion.",
    },
    TermCard {
        title: "Indemnification",
        summary: "Users agree to indemnify and hold harmless GI28 from any claims.",
        detail: "Includes misuse or unlawful activity. Responsibility lies solely with the user.",
    },
    TermCard {
        title: "Termination of Access",
        summary: "We reserve the right to terminate or suspend access at any time.",
        detail: "Due to violations or security. No prior notice required in severe cases.",
    },
    TermCard {
        title: "Severability",
        summary: "If any part of these terms is found unenforceable, remaining sections remain valid.",
        detail: "Invalid clauses shall not affect overall agreement enforceability.",
    },
    TermCard {
        title: "Entire Agreement",
        summary: "These Terms constitute the entire agreement between users and GI28.",
        detail: "No external agreements override these conditions unless explicitly stated.",
    },
    TermCard {
        title: "Updates & Revisions",
        summary: "Terms may be revised to reflect legal or operational changes.",
        detail: "You are responsible for reviewing updates. The latest version always applies.",
    },
    TermCard {
        title: "Contact & Support",
        summary: "Questions or concerns may be addressed via the Contact page.",
        detail: "We strive to respond professionally. Feedback is welcomed to improve quality.",
    },
];
