mod render;
mod reporter;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ttask_core::{
    default_data_dir, FileStateRepository, ListKind, LoadStatus, PriorityScheme, ReportContent,
    Reporter, Selection, Severity, TaskService,
};

use render::print_task_table;
use reporter::ConsoleReporter;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Parser)]
#[command(name = "ttask")]
#[command(about = "A priority-aware to-do list manager", long_about = None)]
struct Cli {
    /// Directory holding data.json and config.json (defaults to ~/.ttask)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one or more tasks to the to-do list
    Add {
        #[arg(required = true)]
        names: Vec<String>,
        /// Priority level from the configured scheme (defaults to the scheme default)
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Remove one or more tasks from the to-do list
    Remove {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Mark one or more to-do tasks as done
    Done {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Show the current task lists
    List {
        #[arg(long, value_enum, default_value = "both")]
        which: Which,
    },
    /// Empty the selected list(s)
    Clear {
        #[arg(long, value_enum, default_value = "both")]
        which: Which,
    },
    /// Write the dated report of today's added and completed tasks
    Report {
        /// Directory to write the report into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        #[arg(long, value_enum, default_value = "all")]
        which: ReportWhich,
    },
    /// Print the active priority scheme
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum Which {
    Todo,
    Done,
    Both,
}

impl From<Which> for Selection {
    fn from(which: Which) -> Selection {
        match which {
            Which::Todo => Selection::Todo,
            Which::Done => Selection::Done,
            Which::Both => Selection::Both,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportWhich {
    Todo,
    Done,
    All,
}

impl From<ReportWhich> for ReportContent {
    fn from(which: ReportWhich) -> ReportContent {
        match which {
            ReportWhich::Todo => ReportContent::Todo,
            ReportWhich::Done => ReportContent::Done,
            ReportWhich::All => ReportContent::All,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let reporter = ConsoleReporter;

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let repo = FileStateRepository::new(&data_dir)?;
    let scheme = match PriorityScheme::load(&data_dir.join(CONFIG_FILE_NAME)) {
        Ok(scheme) => scheme,
        Err(e) => {
            reporter.emit(
                Severity::Error,
                &format!("Invalid priority configuration: {:#}. Using the default scheme.", e),
            );
            PriorityScheme::default()
        }
    };

    let (mut service, status) = TaskService::load(repo, scheme)?;
    if let LoadStatus::FreshStart(reason) = &status {
        reporter.emit(Severity::Info, reason);
    }

    match cli.command {
        Commands::Add { names, priority } => {
            let priority = priority.map(|p| service.store().scheme().parse_priority(&p));
            for name in &names {
                let outcome = service.add(name, priority.clone());
                reporter.emit(outcome.severity(), &outcome.to_string());
            }
            service.save()?;
        }
        Commands::Remove { names } => {
            for name in &names {
                let outcome = service.remove(name);
                reporter.emit(outcome.severity(), &outcome.to_string());
            }
            service.save()?;
        }
        Commands::Done { names } => {
            for name in &names {
                let outcome = service.complete(name);
                reporter.emit(outcome.severity(), &outcome.to_string());
            }
            service.save()?;
        }
        Commands::List { which } => {
            let which = Selection::from(which);
            if matches!(which, Selection::Todo | Selection::Both) {
                print_task_table("To-do", &service.entries(ListKind::Todo));
            }
            if matches!(which, Selection::Done | Selection::Both) {
                print_task_table("Done", &service.entries(ListKind::Done));
            }
        }
        Commands::Clear { which } => {
            let outcome = service.clear(which.into());
            reporter.emit(outcome.severity(), &outcome.to_string());
            service.save()?;
        }
        Commands::Report { dir, which } => match service.write_report(&dir, which.into())? {
            Some(path) => reporter.emit(
                Severity::Success,
                &format!("Report successfully generated and saved as \"{}\".", path.display()),
            ),
            None => reporter.emit(
                Severity::Info,
                "Both daily lists are empty. Nothing to report.",
            ),
        },
        Commands::Config => {
            let scheme = service.store().scheme();
            println!("Priority levels: {}", scheme.describe_levels());
            println!("Default priority: {}", scheme.default_priority());
            println!("Sort order: {}", scheme.order());
        }
    }

    Ok(())
}
