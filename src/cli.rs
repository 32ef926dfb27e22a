use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: extract the battery telemetry and push a report page to Notion.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),

    /// Extract the battery telemetry and render it locally, no credentials needed.
    #[clap(name = "show")]
    Show,

    /// Create or update the report columns on the Notion database.
    #[clap(name = "ensure-schema")]
    EnsureSchema(Box<EnsureSchemaArgs>),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Render the report locally instead of pushing it to Notion (dry run).
    #[clap(long)]
    pub dry_run: bool,

    #[clap(flatten)]
    pub notion: NotionArgs,
}

#[derive(Parser)]
pub struct EnsureSchemaArgs {
    #[clap(flatten)]
    pub notion: NotionArgs,
}

#[derive(Parser)]
pub struct NotionArgs {
    /// Notion integration token.
    #[clap(long = "notion-api-key", env = "NOTION_API_KEY")]
    pub api_key: String,

    /// Identifier of the target Notion database.
    #[clap(long = "notion-database-id", env = "NOTION_DATABASE_ID")]
    pub database_id: String,
}
