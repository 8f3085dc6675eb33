//! Showcase CLI — terminal front-end for the product catalog table.
//!
//! This binary is the rendering collaborator: it owns all visual
//! marshaling (column layout, icons, colour-coding by sex) and dispatches
//! user commands into the core reducer.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use showcase_core::dataset;
use showcase_core::loader;
use showcase_core::model::{CatalogTables, EnrichedProduct, FilterState, Sex, SortField};
use showcase_core::reducer::{reduce, Action};
use showcase_core::view::{build_view, write_view, SortIndicator, TableView};

#[derive(Parser)]
#[command(
    name = "showcase",
    about = "Showcase - Browse the product catalog as a filterable, sortable table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the catalog table once with the given filters
    Show {
        /// Path to a catalog JSON file (the built-in dataset if omitted)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Category id to select; repeat the flag to select several
        #[arg(short, long)]
        category: Vec<u32>,

        /// Owning-user id to filter by (0 = all users)
        #[arg(short, long, default_value = "0")]
        user: u32,

        /// Search text matched against product names
        #[arg(short, long)]
        search: Option<String>,

        /// Sort column: ID, Product, Category or User
        #[arg(long)]
        sort: Option<String>,

        /// Reverse the order
        #[arg(long)]
        desc: bool,

        /// Print the view model as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Also write the view model to a JSON file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Browse interactively: filter and sort with stdin commands
    Browse {
        /// Path to a catalog JSON file (the built-in dataset if omitted)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            data,
            category,
            user,
            search,
            sort,
            desc,
            json,
            output,
        } => {
            let sort_field = sort.as_deref().map(|s| match parse_sort_field(s) {
                Some(field) => field,
                None => {
                    eprintln!("Unknown sort column: {s} (expected ID, Product, Category or User)");
                    std::process::exit(2);
                }
            });

            let tables = load_tables(data);
            let catalog = load_catalog(&tables);

            let state = FilterState {
                selected_category_ids: category,
                selected_user_id: user,
                search: search.unwrap_or_default(),
                sort_field,
                sort_reversed: desc,
            };

            let view = build_view(&tables, &catalog, &state);
            if json {
                match serde_json::to_string_pretty(&view) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Error serialising view: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                render(&view);
            }

            if let Some(path) = output {
                if let Err(e) = write_view(&view, &path) {
                    eprintln!("Error writing view: {e}");
                    std::process::exit(1);
                }
                println!("\n  {} {}", style("View written to:").green(), path);
            }
        }
        Commands::Browse { data } => {
            let tables = load_tables(data);
            let catalog = load_catalog(&tables);
            run_browse(&tables, &catalog);
        }
    }
}

fn load_tables(data: Option<PathBuf>) -> CatalogTables {
    match data {
        Some(path) => match loader::read_tables(&path) {
            Ok(tables) => tables,
            Err(e) => {
                eprintln!("Failed to load catalog: {e}");
                std::process::exit(1);
            }
        },
        None => dataset::builtin(),
    }
}

/// Join the tables, or die: a dangling foreign key means no UI at all.
fn load_catalog(tables: &CatalogTables) -> Vec<EnrichedProduct> {
    match loader::build_catalog(tables) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Catalog integrity error: {e}");
            std::process::exit(1);
        }
    }
}

/// Case-insensitive column lookup for flags and browse commands.
fn parse_sort_field(s: &str) -> Option<SortField> {
    SortField::ALL
        .into_iter()
        .find(|f| f.as_str().eq_ignore_ascii_case(s))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn indicator_glyph(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Unsorted => " ",
        SortIndicator::Ascending => "▲",
        SortIndicator::Descending => "▼",
    }
}

fn render_controls(view: &TableView) {
    let mut users = Vec::with_capacity(view.users.len() + 1);
    users.push(if view.all_users_active {
        style("All").bold().underlined().to_string()
    } else {
        "All".to_string()
    });
    for user in &view.users {
        users.push(if user.active {
            style(&user.name).bold().underlined().to_string()
        } else {
            user.name.clone()
        });
    }
    println!("  Users:      {}", users.join("  "));

    let categories: Vec<String> = view
        .categories
        .iter()
        .map(|c| {
            if c.active {
                style(&c.title).bold().underlined().to_string()
            } else {
                c.title.clone()
            }
        })
        .collect();
    println!("  Categories: {}", categories.join("  "));
}

fn render(view: &TableView) {
    println!();
    render_controls(view);
    println!();

    if let Some(message) = &view.empty_message {
        println!("  {}", style(message).yellow());
        return;
    }

    let name_width = view
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain([SortField::Product.as_str().len()])
        .max()
        .unwrap_or(0);
    let category_width = view
        .rows
        .iter()
        .map(|r| r.category_label.chars().count())
        .chain([SortField::Category.as_str().len()])
        .max()
        .unwrap_or(0);

    let header: Vec<(String, usize)> = view
        .columns
        .iter()
        .map(|c| {
            let width = match c.field {
                SortField::Id => 4,
                SortField::Product => name_width,
                SortField::Category => category_width,
                SortField::User => c.field.as_str().len(),
            };
            (
                format!("{} {}", c.field.as_str(), indicator_glyph(c.indicator)),
                width,
            )
        })
        .collect();
    let header_line = header
        .iter()
        .map(|(label, width)| format!("{label:<w$}", w = width + 2))
        .collect::<Vec<_>>()
        .join("");
    println!("  {}", style(header_line.trim_end()).bold());

    for row in &view.rows {
        let id_cell = style(format!("{:<6}", row.id)).bold();
        let user_cell = match row.user_sex {
            Sex::Male => style(row.user_name.clone()).blue(),
            Sex::Female => style(row.user_name.clone()).red(),
        };
        println!(
            "  {id_cell}{:<nw$}  {:<cw$}  {user_cell}",
            row.name,
            row.category_label,
            nw = name_width,
            cw = category_width,
        );
    }

    println!(
        "\n  {} of {} products",
        style(view.visible).bold(),
        view.total
    );
}

// ---------------------------------------------------------------------------
// Interactive browsing
// ---------------------------------------------------------------------------

fn print_help() {
    println!("  Commands:");
    println!("    cat <id>        toggle a category");
    println!("    cats            select all categories");
    println!("    user <id>       filter by owning user (0 = all)");
    println!("    search <text>   filter product names");
    println!("    clear           clear the search text");
    println!("    sort <column>   cycle sorting on ID, Product, Category or User");
    println!("    reset           reset all filters");
    println!("    quit            exit");
}

fn parse_command(line: &str) -> Option<Action> {
    let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match cmd {
        "cat" => rest.parse().ok().map(Action::ToggleCategory),
        "cats" => Some(Action::ClearCategories),
        "user" => rest.parse().ok().map(Action::SelectUser),
        "search" => Some(Action::SetSearch(rest.to_string())),
        "clear" => Some(Action::ClearSearch),
        "sort" => parse_sort_field(rest).map(Action::SortClicked),
        "reset" => Some(Action::Reset),
        _ => None,
    }
}

/// Run-to-completion event loop: each command is reduced into the next
/// filter state, then the pipeline re-runs fully and the table re-renders.
fn run_browse(tables: &CatalogTables, catalog: &[EnrichedProduct]) {
    let mut state = FilterState::default();
    render(&build_view(tables, catalog, &state));
    println!();
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            break;
        }

        match parse_command(line) {
            Some(action) => {
                state = reduce(&state, &action);
                render(&build_view(tables, catalog, &state));
            }
            None => print_help(),
        }
    }
}
