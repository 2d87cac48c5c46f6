use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "linkforge",
    version,
    about = "username-to-profile-link generator",
    long_about = "Linkforge expands a username into profile URLs across social, video, dev, business, blogging, gaming, and music platforms.\n\nExamples:\n  linkforge -u john_doe\n  linkforge -u john_doe -F dev -q git\n  linkforge -u john_doe -o links.json\n  linkforge -u john_doe --config ~/.linkforge/config.yml\n\nTip: Use --config to persist defaults and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'u',
        long = "user",
        visible_alias = "username",
        value_name = "NAME",
        help_heading = "Input",
        help = "Username to expand into profile links."
    )]
    pub user: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.linkforge/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'F',
        long = "cat",
        visible_alias = "category",
        value_name = "TAG",
        help_heading = "Filters",
        help = "Keep only one platform category (social, video, dev, business, blogging, gaming, music; 'all' for no filter)."
    )]
    pub category: Option<String>,

    #[arg(
        short = 'q',
        long = "qs",
        visible_alias = "search",
        value_name = "TEXT",
        help_heading = "Filters",
        help = "Keep only platforms whose name or category matches this text (case-insensitive)."
    )]
    pub search: Option<String>,

    #[arg(
        short = 'P',
        long = "pf",
        visible_alias = "platforms",
        value_name = "IDS",
        help_heading = "Filters",
        help = "Restrict to specific platform ids (comma-separated, e.g. github,twitter)."
    )]
    pub platforms: Option<String>,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Export results to a file."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Export format (text or json); inferred from --out extension when omitted."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'i',
        long = "it",
        visible_alias = "interactive",
        help_heading = "Session",
        help = "Interactive mode: read search updates from stdin with debounced re-rendering."
    )]
    pub interactive: bool,

    #[arg(
        short = 'd',
        long = "db",
        visible_alias = "debounce",
        value_name = "MS",
        help_heading = "Session",
        help = "Debounce window for interactive search updates, in milliseconds."
    )]
    pub debounce_ms: Option<u64>,

    #[arg(
        short = 'L',
        long = "lp",
        visible_alias = "list-platforms",
        help_heading = "Listing",
        help = "List the supported platforms and exit."
    )]
    pub list_platforms: bool,

    #[arg(
        short = 'T',
        long = "tc",
        visible_alias = "terms",
        help_heading = "Listing",
        help = "Show the Terms & Conditions deck and exit."
    )]
    pub terms: bool,

    #[arg(
        short = 's',
        long = "ns",
        visible_alias = "no-save",
        help_heading = "Session",
        help = "Do not persist the username for future runs."
    )]
    pub no_save: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,
}
