use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use growth_core::VERSION;

/// Growth - a daily journal with goals, study topics, and must-do checklists
#[derive(Parser)]
#[command(name = "growth")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory that holds the journal collection
    #[arg(short, long, global = true, env = "GROWTH_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where entries will be stored
    #[arg(value_name = "DIR")]
    pub path: Option<String>,

    /// IANA timezone used to decide what "today" is
    #[arg(long)]
    pub timezone: Option<String>,

    /// Editor command for composing entries
    #[arg(long)]
    pub editor: Option<String>,

    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}

/// Entry fields shared by `write` and `edit`
#[derive(Args, Default)]
pub struct EntryFieldArgs {
    /// Entry date (YYYY-MM-DD, "today", or "yesterday")
    #[arg(long)]
    pub date: Option<String>,

    /// Entry title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Entry body (overrides stdin/editor)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Daily goal (repeat up to four times)
    #[arg(long = "goal", value_name = "TEXT")]
    pub goals: Vec<String>,

    /// Topic to study today (repeat up to four times)
    #[arg(long = "study", value_name = "TEXT")]
    pub study: Vec<String>,

    /// Must-do item (repeat up to four times)
    #[arg(long = "must", value_name = "TEXT")]
    pub must: Vec<String>,

    /// Motivational quote for the day
    #[arg(long)]
    pub quote: Option<String>,
}

impl EntryFieldArgs {
    /// True when no field flag was passed.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.title.is_none()
            && self.body.is_none()
            && self.goals.is_empty()
            && self.study.is_empty()
            && self.must.is_empty()
            && self.quote.is_none()
    }
}

/// Arguments for the `write` command
#[derive(Args)]
pub struct WriteArgs {
    #[command(flatten)]
    pub fields: EntryFieldArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub fields: EntryFieldArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `tick` command
#[derive(Args)]
pub struct TickArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Checklist: daily, study, or must
    #[arg(value_name = "SECTION")]
    pub section: String,

    /// Item number, starting at 1
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Clear the check mark instead of setting it
    #[arg(long)]
    pub uncheck: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only entries on or after this date
    #[arg(long)]
    pub since: Option<String>,

    /// Only entries on or before this date
    #[arg(long)]
    pub until: Option<String>,

    /// Maximum number of entries to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,

    /// Output format: table or plain
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID", required_unless_present = "date")]
    pub id: Option<String>,

    /// Show the entry written for this date instead
    #[arg(long, conflicts_with = "id")]
    pub date: Option<String>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Export file to read, or "-" for stdin
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Replace the current collection without asking
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a config file and check that the data directory is writable
    Init(InitArgs),

    /// Write a new journal entry
    Write(WriteArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Check or uncheck a checklist item
    Tick(TickArgs),

    /// List entries, newest date first
    List(ListArgs),

    /// Show a single entry
    Show(ShowArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Export every entry as a JSON array
    Export(ExportArgs),

    /// Replace every entry with the contents of an export
    Import(ImportArgs),

    /// Verify that the stored collection parses
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
