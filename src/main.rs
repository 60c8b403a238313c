use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use folder_locator::{duplicate_ids, io, state, tsv, Locator, Route};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "locator", version, about = "Find files and folders by id in JSON folder trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Breadcrumb trail from a root to the node
    Path(PathCmd),
    /// Print a folder as JSON
    Folder(FolderCmd),
    /// Print the id of the containing folder
    Parent(ParentCmd),
    /// List every node as TSV
    Tree(TreeCmd),
    /// Report ids used by more than one node
    Check(CheckCmd),
    /// Navigation history
    #[command(subcommand)]
    History(HistoryCmd),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum PathFormat { Tsv, Json, Text }

#[derive(Args, Debug)]
struct PathCmd {
    id: String,
    #[arg(required = true)]
    trees: Vec<PathBuf>,
    #[arg(long, value_enum, default_value = "tsv")]
    format: PathFormat,
    #[arg(long, help = "Reject trees with repeated ids")]
    strict: bool,
}

#[derive(Args, Debug)]
struct FolderCmd {
    id: String,
    #[arg(required = true)]
    trees: Vec<PathBuf>,
    #[arg(long, help = "Reject trees with repeated ids")]
    strict: bool,
}

#[derive(Args, Debug)]
struct ParentCmd { id: String, #[arg(required = true)] trees: Vec<PathBuf> }

#[derive(Args, Debug)]
struct TreeCmd {
    #[arg(required = true)]
    trees: Vec<PathBuf>,
    #[arg(long)]
    filter: Option<String>,
}

#[derive(Args, Debug)]
struct CheckCmd { #[arg(required = true)] trees: Vec<PathBuf> }

#[derive(Args, Debug)]
struct StateArgs {
    #[arg(long)]
    state: Option<PathBuf>,
    #[arg(long, help = "Maximum number of routes kept")]
    capacity: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum HistoryCmd {
    Push { path: String, #[arg(long)] kind: Option<String>, #[command(flatten)] state: StateArgs },
    Previous { kind: String, #[command(flatten)] state: StateArgs },
    List { #[command(flatten)] state: StateArgs },
    Clear { #[command(flatten)] state: StateArgs },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Path(cmd) => {
            let forest = io::load_forest(&cmd.trees, cmd.strict)?;
            let Some(path) = Locator::new(&forest.roots).path_to(&cmd.id) else { std::process::exit(1) };
            match cmd.format {
                PathFormat::Tsv => { for l in tsv::path_to_tsv(&path) { println!("{}", l); } }
                PathFormat::Json => println!("{}", serde_json::to_string_pretty(&path)?),
                PathFormat::Text => println!("{}", tsv::path_to_text(&path)),
            }
        }
        Commands::Folder(cmd) => {
            let forest = io::load_forest(&cmd.trees, cmd.strict)?;
            let Some(folder) = Locator::new(&forest.roots).folder(&cmd.id) else { std::process::exit(1) };
            println!("{}", serde_json::to_string_pretty(folder)?);
        }
        Commands::Parent(cmd) => {
            let forest = io::load_forest(&cmd.trees, false)?;
            match Locator::new(&forest.roots).parent_of(&cmd.id) {
                Some(pid) => println!("{}", pid),
                None => std::process::exit(1),
            }
        }
        Commands::Tree(cmd) => {
            let forest = io::load_forest(&cmd.trees, false)?;
            for l in tsv::flatten_to_tsv(&forest.roots, cmd.filter.as_deref())? { println!("{}", l); }
        }
        Commands::Check(cmd) => {
            let forest = io::load_forest(&cmd.trees, false)?;
            let dups = duplicate_ids(&forest.roots);
            for id in &dups { println!("{}", id); }
            if !dups.is_empty() { std::process::exit(1); }
        }
        Commands::History(cmd) => run_history(cmd)?,
    }
    Ok(())
}

fn run_history(cmd: HistoryCmd) -> Result<()> {
    let args = match &cmd {
        HistoryCmd::Push { state: s, .. } | HistoryCmd::Previous { state: s, .. } | HistoryCmd::List { state: s } | HistoryCmd::Clear { state: s } => s,
    };
    let path = args.state.clone().unwrap_or_else(state::default_state_path);
    let mut history = state::load_history_or_default(Some(&path));
    if let Some(cap) = args.capacity { history.set_capacity(cap); }

    match cmd {
        HistoryCmd::Push { path: route_path, kind, .. } => {
            let route = match kind { Some(k) => Route::new(k, route_path), None => Route::from_path(&route_path) };
            history.push(route);
            state::save_history(&path, &history)?;
        }
        HistoryCmd::Previous { kind, .. } => {
            match history.previous_of_kind(&kind) {
                Some(r) => println!("{}", r.path),
                None => std::process::exit(1),
            }
        }
        HistoryCmd::List { .. } => {
            for r in history.iter() { println!("{}\t{}", r.kind, r.path); }
        }
        HistoryCmd::Clear { .. } => {
            history.clear();
            state::save_history(&path, &history)?;
        }
    }
    Ok(())
}
