use serde::Serialize;

/// Placeholder substring replaced by the sanitized username during generation.
pub const PLACEHOLDER: &str = "%s";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Social,
    Video,
    Dev,
    Business,
    Blogging,
    Gaming,
    Music,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Video => "video",
            Category::Dev => "dev",
            Category::Business => "business",
            Category::Blogging => "blogging",
            Category::Gaming => "gaming",
            Category::Music => "music",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "social" => Some(Category::Social),
            "video" => Some(Category::Video),
            "dev" => Some(Category::Dev),
            "business" => Some(Category::Business),
            "blogging" => Some(Category::Blogging),
            "gaming" => Some(Category::Gaming),
            "music" => Some(Category::Music),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Social,
            Category::Video,
            Category::Dev,
            Category::Business,
            Category::Blogging,
            Category::Gaming,
            Category::Music,
        ]
    }
}

/// Category selector: a specific tag or the `all` wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    One(Category),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::parse(trimmed).map(CategoryFilter::One)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::One(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::One(c) => c.as_str(),
        }
    }
}

/// One row of the static platform table. Defined at load time, never mutated.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PlatformTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: &'static str,
    pub category: Category,
    pub description: &'static str,
}

pub fn find(id: &str) -> Option<&'static PlatformTemplate> {
    all().iter().find(|p| p.id == id)
}

/// The full platform table, in display order. Some patterns are known to
/// resolve only for numeric profile IDs (Stack Overflow, Upwork, Goodreads);
/// they are kept as-is rather than guessed at.
pub fn all() -> &'static [PlatformTemplate] {
    PLATFORM_TABLE
}

static PLATFORM_TABLE: &[PlatformTemplate] = &[
    // social media
    PlatformTemplate {
        id: "instagram",
        name: "Instagram",
        pattern: "https://instagram.com/%s",
        category: Category::Social,
        description: "Photo and video sharing social networking service.",
    },
    PlatformTemplate {
        id: "twitter",
        name: "X (Twitter)",
        pattern: "https://twitter.com/%s",
        category: Category::Social,
        description: "Microblogging and social networking service.",
    },
    PlatformTemplate {
        id: "facebook",
        name: "Facebook",
        pattern: "https://facebook.com/%s",
        category: Category::Social,
        description: "Online social media and social networking service.",
    },
    PlatformTemplate {
        id: "tiktok",
        name: "TikTok",
        pattern: "https://tiktok.com/@%s",
        category: Category::Social,
        description: "Short-form video hosting service.",
    },
    PlatformTemplate {
        id: "pinterest",
        name: "Pinterest",
        pattern: "https://pinterest.com/%s",
        category: Category::Social,
        description: "Image sharing and social media service.",
    },
    PlatformTemplate {
        id: "snapchat",
        name: "Snapchat",
        pattern: "https://snapchat.com/add/%s",
        category: Category::Social,
        description: "Multimedia instant messaging app.",
    },
    PlatformTemplate {
        id: "tumblr",
        name: "Tumblr",
        pattern: "https://%s.tumblr.com",
        category: Category::Social,
        description: "Microblogging and social networking website.",
    },
    PlatformTemplate {
        id: "flickr",
        name: "Flickr",
        pattern: "https://flickr.com/people/%s",
        category: Category::Social,
        description: "Image hosting and video hosting service.",
    },
    PlatformTemplate {
        id: "mastodon",
        name: "Mastodon (Social)",
        pattern: "https://mastodon.social/@%s",
        category: Category::Social,
        description: "Self-hosted social networking service.",
    },
    PlatformTemplate {
        id: "threads",
        name: "Threads",
        pattern: "https://www.threads.net/@%s",
        category: Category::Social,
        description: "Text-based conversation app by Instagram.",
    },
    // video & streaming
    PlatformTemplate {
        id: "youtube",
        name: "YouTube",
        pattern: "https://youtube.com/@%s",
        category: Category::Video,
        description: "Online video sharing and social media platform.",
    },
    PlatformTemplate {
        id: "twitch",
        name: "Twitch",
        pattern: "https://twitch.tv/%s",
        category: Category::Video,
        description: "Video live streaming service.",
    },
    PlatformTemplate {
        id: "vimeo",
        name: "Vimeo",
        pattern: "https://vimeo.com/%s",
        category: Category::Video,
        description: "Video hosting, sharing, and services platform.",
    },
    PlatformTemplate {
        id: "dailymotion",
        name: "Dailymotion",
        pattern: "https://dailymotion.com/%s",
        category: Category::Video,
        description: "French video-sharing technology platform.",
    },
    // developer & tech
    PlatformTemplate {
        id: "github",
        name: "GitHub",
        pattern: "https://github.com/%s",
        category: Category::Dev,
        description: "Platform for software development and version control.",
    },
    PlatformTemplate {
        id: "gitlab",
        name: "GitLab",
        pattern: "https://gitlab.com/%s",
        category: Category::Dev,
        description: "DevOps software package.",
    },
    PlatformTemplate {
        id: "bitbucket",
        name: "Bitbucket",
        pattern: "https://bitbucket.org/%s",
        category: Category::Dev,
        description: "Git-based source code repository hosting.",
    },
    PlatformTemplate {
        id: "stackoverflow",
        name: "Stack Overflow",
        pattern: "https://stackoverflow.com/users/%s",
        category: Category::Dev,
        description: "Question and answer website for professional programmers.",
    },
    PlatformTemplate {
        id: "devto",
        name: "Dev.to",
        pattern: "https://dev.to/%s",
        category: Category::Dev,
        description: "Online community for software developers.",
    },
    PlatformTemplate {
        id: "codepen",
        name: "CodePen",
        pattern: "https://codepen.io/%s",
        category: Category::Dev,
        description: "Social development environment for front-end designers.",
    },
    PlatformTemplate {
        id: "replit",
        name: "Replit",
        pattern: "https://replit.com/@%s",
        category: Category::Dev,
        description: "Online integrated development environment.",
    },
    PlatformTemplate {
        id: "npm",
        name: "npm",
        pattern: "https://www.npmjs.com/~%s",
        category: Category::Dev,
        description: "Package manager for the JavaScript programming language.",
    },
    PlatformTemplate {
        id: "codesandbox",
        name: "CodeSandbox",
        pattern: "https://codesandbox.io/u/%s",
        category: Category::Dev,
        description: "Online code editor and prototyping tool.",
    },
    PlatformTemplate {
        id: "producthunt",
        name: "Product Hunt",
        pattern: "https://www.producthunt.com/@%s",
        category: Category::Dev,
        description: "Website to share and discover new products.",
    },
    // professional & creative
    PlatformTemplate {
        id: "linkedin",
        name: "LinkedIn",
        pattern: "https://linkedin.com/in/%s",
        category: Category::Business,
        description: "Business and employment-focused social media platform.",
    },
    PlatformTemplate {
        id: "dribbble",
        name: "Dribbble",
        pattern: "https://dribbble.com/%s",
        category: Category::Business,
        description: "Self-promotion and social networking platform for digital designers.",
    },
    PlatformTemplate {
        id: "behance",
        name: "Behance",
        pattern: "https://behance.net/%s",
        category: Category::Business,
        description: "Social media platform to showcase and discover creative work.",
    },
    PlatformTemplate {
        id: "medium",
        name: "Medium",
        pattern: "https://medium.com/@%s",
        category: Category::Blogging,
        description: "Online publishing platform.",
    },
    PlatformTemplate {
        id: "fiverr",
        name: "Fiverr",
        pattern: "https://www.fiverr.com/%s",
        category: Category::Business,
        description: "Freelance services marketplace.",
    },
    PlatformTemplate {
        id: "upwork",
        name: "Upwork",
        pattern: "https://www.upwork.com/freelancers/~%s",
        category: Category::Business,
        description: "Freelancing platform.",
    },
    PlatformTemplate {
        id: "about_me",
        name: "About.me",
        pattern: "https://about.me/%s",
        category: Category::Business,
        description: "Personal web hosting service.",
    },
    PlatformTemplate {
        id: "linktree",
        name: "Linktree",
        pattern: "https://linktr.ee/%s",
        category: Category::Business,
        description: "Freemium social media reference landing page.",
    },
    PlatformTemplate {
        id: "carrd",
        name: "Carrd",
        pattern: "https://%s.carrd.co",
        category: Category::Business,
        description: "Simple, free, fully responsive one-page sites.",
    },
    PlatformTemplate {
        id: "gumroad",
        name: "Gumroad",
        pattern: "https://gumroad.com/%s",
        category: Category::Business,
        description: "Self-publishing digital marketplace.",
    },
    // gaming
    PlatformTemplate {
        id: "steam",
        name: "Steam",
        pattern: "https://steamcommunity.com/id/%s",
        category: Category::Gaming,
        description: "Video game digital distribution service.",
    },
    PlatformTemplate {
        id: "roblox",
        name: "Roblox",
        pattern: "https://www.roblox.com/user.aspx?username=%s",
        category: Category::Gaming,
        description: "Online game platform and game creation system.",
    },
    PlatformTemplate {
        id: "itchio",
        name: "Itch.io",
        pattern: "https://%s.itch.io",
        category: Category::Gaming,
        description: "Website for users to host, sell and download indie video games.",
    },
    PlatformTemplate {
        id: "minecraft",
        name: "Minecraft (NameMC)",
        pattern: "https://namemc.com/profile/%s",
        category: Category::Gaming,
        description: "Minecraft username lookup.",
    },
    // music & audio
    PlatformTemplate {
        id: "soundcloud",
        name: "SoundCloud",
        pattern: "https://soundcloud.com/%s",
        category: Category::Music,
        description: "Online audio distribution platform.",
    },
    PlatformTemplate {
        id: "spotify",
        name: "Spotify (User)",
        pattern: "https://open.spotify.com/user/%s",
        category: Category::Music,
        description: "Audio streaming and media services provider.",
    },
    PlatformTemplate {
        id: "bandcamp",
        name: "Bandcamp",
        pattern: "https://bandcamp.com/%s",
        category: Category::Music,
        description: "Online record store and music community.",
    },
    PlatformTemplate {
        id: "lastfm",
        name: "Last.fm",
        pattern: "https://www.last.fm/user/%s",
        category: Category::Music,
        description: "Music website.",
    },
    PlatformTemplate {
        id: "mixcloud",
        name: "Mixcloud",
        pattern: "https://www.mixcloud.com/%s",
        category: Category::Music,
        description: "British online music streaming service.",
    },
    // community & forums
    PlatformTemplate {
        id: "reddit",
        name: "Reddit",
        pattern: "https://www.reddit.com/user/%s",
        category: Category::Social,
        description: "Social news aggregation, content rating, and discussion website.",
    },
    PlatformTemplate {
        id: "quora",
        name: "Quora",
        pattern: "https://www.quora.com/profile/%s",
        category: Category::Social,
        description: "Question-and-answer website.",
    },
    PlatformTemplate {
        id: "wikipedia",
        name: "Wikipedia",
        pattern: "https://en.wikipedia.org/wiki/User:%s",
        category: Category::Blogging,
        description: "Free online encyclopedia.",
    },
    PlatformTemplate {
        id: "hackernews",
        name: "Hacker News",
        pattern: "https://news.ycombinator.com/user?id=%s",
        category: Category::Dev,
        description: "Social news website focusing on computer science and entrepreneurship.",
    },
    PlatformTemplate {
        id: "wattpad",
        name: "Wattpad",
        pattern: "https://www.wattpad.com/user/%s",
        category: Category::Blogging,
        description: "Website and app for writers to publish new user-generated stories.",
    },
    PlatformTemplate {
        id: "goodreads",
        name: "Goodreads",
        pattern: "https://www.goodreads.com/user/show/%s",
        category: Category::Blogging,
        description: "Social cataloging website for books.",
    },
    PlatformTemplate {
        id: "deviantart",
        name: "DeviantArt",
        pattern: "https://www.deviantart.com/%s",
        category: Category::Business,
        description: "Online art community.",
    },
    PlatformTemplate {
        id: "artstation",
        name: "ArtStation",
        pattern: "https://www.artstation.com/%s",
        category: Category::Business,
        description: "Showcase platform for game, film, media & entertainment artists.",
    },
    PlatformTemplate {
        id: "unsplash",
        name: "Unsplash",
        pattern: "https://unsplash.com/@%s",
        category: Category::Business,
        description: "Stock photography website.",
    },
    PlatformTemplate {
        id: "9gag",
        name: "9GAG",
        pattern: "https://9gag.com/u/%s",
        category: Category::Social,
        description: "Online platform and social media website.",
    },
    PlatformTemplate {
        id: "giphy",
        name: "GIPHY",
        pattern: "https://giphy.com/channel/%s",
        category: Category::Social,
        description: "Online database and search engine that allows users to search for GIFs.",
    },
    PlatformTemplate {
        id: "gravatar",
        name: "Gravatar",
        pattern: "https://en.gravatar.com/%s",
        category: Category::Dev,
        description: "Globally Recognized Avatar.",
    },
    PlatformTemplate {
        id: "keybase",
        name: "Keybase",
        pattern: "https://keybase.io/%s",
        category: Category::Dev,
        description: "Secure messaging and file-sharing.",
    },
    PlatformTemplate {
        id: "patreon",
        name: "Patreon",
        pattern: "https://www.patreon.com/%s",
        category: Category::Business,
        description: "Membership platform for content creators.",
    },
    PlatformTemplate {
        id: "ko-fi",
        name: "Ko-fi",
        pattern: "https://ko-fi.com/%s",
        category: Category::Business,
        description: "Platform for creators to receive donations.",
    },
    PlatformTemplate {
        id: "buymeacoffee",
        name: "Buy Me a Coffee",
        pattern: "https://www.buymeacoffee.com/%s",
        category: Category::Business,
        description: "Service for content creators to accept donations.",
    },
    PlatformTemplate {
        id: "substack",
        name: "Substack",
        pattern: "https://%s.substack.com",
        category: Category::Blogging,
        description: "Online platform that provides publishing, payment, analytics, and design infrastructure.",
    },
    PlatformTemplate {
        id: "telegram",
        name: "Telegram",
        pattern: "https://t.me/%s",
        category: Category::Social,
        description: "Cloud-based instant messaging service.",
    },
    PlatformTemplate {
        id: "paypal",
        name: "PayPal",
        pattern: "https://paypal.me/%s",
        category: Category::Business,
        description: "Online payments system.",
    },
    PlatformTemplate {
        id: "cashapp",
        name: "Cash App",
        pattern: "https://cash.app/$%s",
        category: Category::Business,
        description: "Mobile payment service.",
    },
];
