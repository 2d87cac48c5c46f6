use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use colored::{Color, Colorize};
use itertools::Itertools;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::generator::{self, GeneratedLink};
use crate::output;
use crate::platforms::{self, Category, CategoryFilter};
use crate::state::debounce::Debouncer;
use crate::state::{Action, AppState, Store};
use crate::storage;
use crate::terms;
use crate::utils;

fn print_banner(no_color: bool) {
    let _ = no_color;
    const BANNER: &str = r#"
    ___       __   ____
   / (_)___  / /__/ __/___  _________ ____
  / / / __ \/ //_/ /_/ __ \/ ___/ __ `/ _ \
 / / / / / / ,< / __/ /_/ / /  / /_/ /  __/
/_/_/_/ /_/_/|_/_/  \____/_/   \__, /\___/
                              /____/
       v0.4.1 - username-to-profile-link generator
    "#;
    print!("{}", BANNER);
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Social => Color::Cyan,
        Category::Video => Color::Red,
        Category::Dev => Color::Green,
        Category::Business => Color::Blue,
        Category::Blogging => Color::Yellow,
        Category::Gaming => Color::Magenta,
        Category::Music => Color::BrightRed,
    }
}

fn render_links(links: &[GeneratedLink], verbose: u8) -> String {
    let mut out = String::new();
    for link in links.iter() {
        let tag = format!("[{}]", link.category.as_str().to_uppercase());
        out.push_str(&format!(
            "{} {}\n",
            tag.color(category_color(link.category)).bold(),
            link.name.bold()
        ));
        out.push_str(&format!("    {}\n", link.generated_url));
        if verbose >= 1 {
            out.push_str(&format!("    {}\n", link.description.dimmed()));
        }
        if verbose >= 2 {
            out.push_str(&format!("    {}\n", format!("pattern={}", link.pattern).dimmed()));
        }
    }
    out
}

fn list_platforms() {
    for category in Category::all() {
        format_kv_line("Category", category.as_str());
        for platform in platforms::all().iter().filter(|p| p.category == *category) {
            println!("   {:<16} {:<22} {}", platform.id, platform.name, platform.pattern);
        }
        println!();
    }
    format_kv_line("Total", &platforms::all().len().to_string());
}

#[derive(Clone, Debug)]
struct RunConfig {
    username: Option<String>,
    filter: CategoryFilter,
    search: String,
    selected: BTreeSet<String>,
    output: Option<String>,
    output_format: Option<String>,
    interactive: bool,
    debounce_ms: u64,
    list_platforms: bool,
    terms: bool,
    no_save: bool,
    no_color: bool,
    verbose: u8,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let category_raw = args.category.or(cfg.category).unwrap_or_default();
    let filter = CategoryFilter::parse(&category_raw).ok_or_else(|| {
        format!(
            "invalid category '{category_raw}', expected all, social, video, dev, business, blogging, gaming, or music"
        )
    })?;

    let search = args
        .search
        .or(cfg.search)
        .unwrap_or_default()
        .trim()
        .to_string();

    let platforms_raw = args.platforms.or(cfg.platforms).unwrap_or_default();
    let selected = if platforms_raw.trim().is_empty() {
        BTreeSet::new()
    } else {
        let ids = utils::parse_id_set_csv(&platforms_raw)
            .map_err(|e| format!("invalid platform list '{platforms_raw}': {e}"))?;
        for id in &ids {
            if platforms::find(id).is_none() {
                return Err(format!("unknown platform id '{id}'"));
            }
        }
        ids
    };

    let output = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    let output_format = args.output_format.or(cfg.output_format);
    if let Some(raw) = output_format.as_deref() {
        if output::OutputFormat::parse(raw).is_none() {
            return Err(format!("invalid output format '{raw}', expected text or json"));
        }
    }

    let debounce_ms = args.debounce_ms.or(cfg.debounce_ms).unwrap_or(300);
    if debounce_ms > 60_000 {
        return Err("invalid debounce, expected at most 60000 ms".to_string());
    }

    let no_save = args.no_save || cfg.no_save.unwrap_or(false);

    let username = args.user.or(cfg.username).and_then(|u| {
        let trimmed = u.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    });

    Ok(RunConfig {
        username,
        filter,
        search,
        selected,
        output: output.filter(|p| !p.trim().is_empty()),
        output_format,
        interactive: args.interactive,
        debounce_ms,
        list_platforms: args.list_platforms,
        terms: args.terms,
        no_save,
        no_color,
        verbose: args.verbose,
    })
}

fn build_store(run: &RunConfig) -> Result<Store, String> {
    let store_path = if run.no_save {
        None
    } else {
        storage::default_store_path()
    };
    build_store_at(run, store_path)
}

fn build_store_at(run: &RunConfig, store_path: Option<PathBuf>) -> Result<Store, String> {
    let username = match run.username.clone() {
        Some(username) => Some(username),
        None => store_path
            .as_deref()
            .and_then(storage::load_last_username),
    };
    let username = username.ok_or_else(|| {
        "username is required (pass --user, set it in the config file, or run once with --user to remember it)"
            .to_string()
    })?;

    let mut store = Store::new(AppState::default()).with_store_path(store_path);
    if let Err(e) = store.dispatch_persistent(Action::SetUsername(username)) {
        eprintln!(":: Warning   : could not persist username: {e}");
    }
    if store.state().username.is_empty() {
        return Err(
            "username is empty after sanitization (allowed: ASCII letters, digits, '.', '_', '-')"
                .to_string(),
        );
    }

    store.dispatch(Action::SetFilter(run.filter));
    if !run.search.is_empty() {
        store.dispatch(Action::SetSearch(run.search.clone()));
    }
    for id in run.selected.iter() {
        store.dispatch(Action::TogglePlatform(id.clone()));
    }
    Ok(store)
}

fn current_view(state: &AppState) -> Vec<GeneratedLink> {
    let links = generator::generate_all(&state.username, platforms::all());
    let links = generator::filter_links(&links, state.filter, &state.search);
    generator::select_links(&links, &state.selected)
}

/// Export always serializes the full generated list for the username;
/// filters, search, and selection only shape the console view.
fn export_payload(state: &AppState) -> Vec<GeneratedLink> {
    generator::generate_all(&state.username, platforms::all())
}

async fn export_links(
    run: &RunConfig,
    links: &[GeneratedLink],
    username: &str,
) -> Result<(), String> {
    if run.output.is_none() && run.output_format.is_none() {
        return Ok(());
    }

    let format = run
        .output_format
        .as_deref()
        .and_then(output::OutputFormat::parse)
        .or_else(|| {
            run.output
                .as_deref()
                .and_then(output::infer_format_from_path)
        })
        .unwrap_or(output::OutputFormat::Text);

    let path = run
        .output
        .clone()
        .unwrap_or_else(|| output::default_filename(username, format));

    let date = utils::today_stamp();
    let rendered = match format {
        output::OutputFormat::Text => output::render_text(links, username, &date),
        output::OutputFormat::Json => output::render_json(links, username, &date),
    }
    .map_err(|e| e.to_string())?;

    tokio::fs::write(&path, rendered)
        .await
        .map_err(|e| format!("failed to write output file '{path}': {e}"))?;
    format_kv_line("Export", &format!("{} ({} links)", path, links.len()));
    Ok(())
}

async fn run_interactive(run: RunConfig, mut store: Store) -> Result<(), String> {
    let verbose = run.verbose;
    store.subscribe(move |state| {
        let links = current_view(state);
        println!();
        format_kv_line(
            "Search",
            if state.search.is_empty() {
                "(none)"
            } else {
                state.search.as_str()
            },
        );
        format_kv_line("Results", &links.len().to_string());
        print!("{}", render_links(&links, verbose));
    });

    // initial render through the listener
    let initial_search = store.state().search.clone();
    store.dispatch(Action::SetSearch(initial_search));

    format_kv_line(
        "Interactive",
        &format!(
            "type to search (debounce {}ms), 'quit' to exit",
            run.debounce_ms
        ),
    );

    let store = Arc::new(Mutex::new(store));
    let mut debouncer = Debouncer::new(Duration::from_millis(run.debounce_ms));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim().to_string();
        if line == "quit" || line == "exit" {
            break;
        }
        let store_for_update = store.clone();
        debouncer.call(move || {
            if let Ok(mut guard) = store_for_update.lock() {
                guard.dispatch(Action::SetSearch(line));
            }
        });
    }
    debouncer.flush().await;

    let (links, username) = match store.lock() {
        Ok(guard) => (
            export_payload(guard.state()),
            guard.state().username.clone(),
        ),
        Err(_) => return Err("session state poisoned".to_string()),
    };
    export_links(&run, &links, &username).await?;
    Ok(())
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    print_banner(run.no_color);

    if run.terms {
        print!("{}", terms::render_deck(terms::deck()));
        return Ok(());
    }
    if run.list_platforms {
        list_platforms();
        return Ok(());
    }

    let store = build_store(&run)?;

    format_kv_line("Target", &store.state().username);
    format_kv_line(
        "Filter",
        &format!(
            "category={} search={} platforms={}",
            run.filter.label(),
            if run.search.is_empty() {
                "none"
            } else {
                run.search.as_str()
            },
            if run.selected.is_empty() {
                "all".to_string()
            } else {
                run.selected.iter().join(",")
            }
        ),
    );
    println!();

    if run.interactive {
        return run_interactive(run, store).await;
    }

    let links = current_view(store.state());
    print!("{}", render_links(&links, run.verbose));
    format_kv_line("Results", &links.len().to_string());

    let export = export_payload(store.state());
    export_links(&run, &export, &store.state().username).await?;
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = CliArgs::parse();

    let cfg = match args.config.clone() {
        Some(path) => config::load_config(&config::expand_tilde(&path), false)?,
        None => match config::default_config_path() {
            Some(path) => {
                let _ = config::ensure_default_config_file(&path);
                config::load_config(&path, true)?
            }
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;
    rt.block_on(run_async(run))?;
    Ok(())
}
