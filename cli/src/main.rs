mod notifier;
mod render;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use panel::config::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_PUBLISH_PLATFORM, PanelConfig};
use panel::net::types::{AccountId, DraftId, TrendId};
use panel::net::{ApiError, HttpApi, PanelApi};
use panel::pages::analytics::AnalyticsData;
use panel::pages::dashboard::DashboardData;
use panel::pages::optimization::sample_rules;
use panel::panels::{DistributorPanel, DraftPanel, Notifier, Outcome, PublishedPanel, TrendPanel};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use notifier::TerminalNotifier;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{action} ended as {outcome:?}")]
    Workflow { action: &'static str, outcome: Outcome },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "social-cli", about = "Control panel for the social automation backend")]
struct Cli {
    #[arg(long, env = "SOCIAL_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SOCIAL_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    #[arg(long, env = "SOCIAL_PUBLISH_PLATFORM", default_value = DEFAULT_PUBLISH_PLATFORM)]
    platform: String,

    #[arg(short, long, global = true, help = "Answer yes to every confirmation")]
    yes: bool,

    #[arg(long, global = true, help = "Print lists as JSON instead of tables")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Trends(TrendsCommand),
    Drafts(DraftsCommand),
    Accounts(AccountsCommand),
    Published(PublishedCommand),
    /// Static overview numbers
    Dashboard,
    /// Static diagnostic reports and platform share
    Analytics,
    /// Static optimization rule list
    Rules,
}

#[derive(Args, Debug)]
struct TrendsCommand {
    #[command(subcommand)]
    command: TrendsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TrendsSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Scrape,
    Generate {
        trend_id: TrendId,
        #[arg(long, default_value_t = 1, help = "Page the trend is listed on")]
        page: u32,
    },
}

#[derive(Args, Debug)]
struct DraftsCommand {
    #[command(subcommand)]
    command: DraftsSubcommand,
}

#[derive(Subcommand, Debug)]
enum DraftsSubcommand {
    List,
    Edit {
        draft_id: DraftId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    Publish {
        draft_id: DraftId,
    },
}

#[derive(Args, Debug)]
struct AccountsCommand {
    #[command(subcommand)]
    command: AccountsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AccountsSubcommand {
    List,
    Bind {
        #[arg(default_value = DEFAULT_PUBLISH_PLATFORM)]
        platform: String,
    },
    Unbind {
        account_id: AccountId,
    },
}

#[derive(Args, Debug)]
struct PublishedCommand {
    #[command(subcommand)]
    command: PublishedSubcommand,
}

#[derive(Subcommand, Debug)]
enum PublishedSubcommand {
    List,
}

struct CliContext {
    config: PanelConfig,
    api: Arc<dyn PanelApi>,
    notifier: Arc<dyn Notifier>,
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PanelConfig::new(cli.base_url, cli.page_size, cli.platform);
    let api = HttpApi::new(&config.base_url)?;
    tracing::debug!(base_url = %api.base_url(), page_size = config.page_size, "panel configured");

    let ctx = CliContext {
        config,
        api: Arc::new(api),
        notifier: Arc::new(TerminalNotifier::new(cli.yes)),
        json: cli.json,
    };

    match cli.command {
        Command::Trends(trends) => run_trends(&ctx, trends).await,
        Command::Drafts(drafts) => run_drafts(&ctx, drafts).await,
        Command::Accounts(accounts) => run_accounts(&ctx, accounts).await,
        Command::Published(published) => run_published(&ctx, published).await,
        Command::Dashboard => {
            let data = DashboardData::sample();
            emit(&ctx, &data, || render::dashboard(&data))
        }
        Command::Analytics => {
            let data = AnalyticsData::sample();
            emit(&ctx, &data, || render::analytics(&data))
        }
        Command::Rules => {
            let rules = sample_rules();
            emit(&ctx, &rules, || render::rules(&rules))
        }
    }
}

// =============================================================================
// TRENDS
// =============================================================================

async fn run_trends(ctx: &CliContext, trends: TrendsCommand) -> Result<(), CliError> {
    let mut panel = TrendPanel::new(ctx.api.clone(), ctx.notifier.clone(), ctx.config.page_size);
    match trends.command {
        TrendsSubcommand::List { page } => {
            finish("load trends", panel.fetch(page).await)?;
        }
        TrendsSubcommand::Scrape => {
            finish("scrape", panel.scrape().await)?;
        }
        TrendsSubcommand::Generate { trend_id, page } => {
            finish("load trends", panel.fetch(page).await)?;
            finish("generate", panel.generate(trend_id).await)?;
        }
    }

    let state = panel.state();
    let listing = serde_json::json!({
        "items": state.items,
        "page": state.pager.page,
        "total": state.pager.total,
    });
    emit(ctx, &listing, || render::trends(state))
}

// =============================================================================
// DRAFTS
// =============================================================================

async fn run_drafts(ctx: &CliContext, drafts: DraftsCommand) -> Result<(), CliError> {
    let mut panel = DraftPanel::new(ctx.api.clone(), ctx.notifier.clone(), ctx.config.publish_platform.clone());
    match drafts.command {
        DraftsSubcommand::List => {
            finish("load drafts", panel.fetch_drafts().await)?;
        }
        DraftsSubcommand::Edit { draft_id, title, content } => {
            finish("load drafts", panel.fetch_drafts().await)?;
            finish("edit", panel.open_editor(draft_id))?;
            if let Some(title) = title {
                panel.edit_title(title);
            }
            if let Some(content) = content {
                panel.edit_content(content);
            }
            finish("save", panel.save().await)?;
        }
        DraftsSubcommand::Publish { draft_id } => {
            finish("load drafts", panel.mount().await)?;
            finish("publish", panel.publish(draft_id).await)?;
        }
    }

    let state = panel.state();
    emit(ctx, &state.drafts, || render::drafts(state))
}

// =============================================================================
// ACCOUNTS
// =============================================================================

async fn run_accounts(ctx: &CliContext, accounts: AccountsCommand) -> Result<(), CliError> {
    let mut panel = DistributorPanel::new(ctx.api.clone(), ctx.notifier.clone());
    match accounts.command {
        AccountsSubcommand::List => {
            finish("load accounts", panel.fetch().await)?;
        }
        AccountsSubcommand::Bind { platform } => {
            finish("bind", panel.bind(&platform).await)?;
        }
        AccountsSubcommand::Unbind { account_id } => {
            finish("load accounts", panel.fetch().await)?;
            finish("unbind", panel.unbind(account_id).await)?;
        }
    }

    let state = panel.state();
    emit(ctx, &state.accounts, || render::accounts(state))
}

// =============================================================================
// PUBLISHED
// =============================================================================

async fn run_published(ctx: &CliContext, published: PublishedCommand) -> Result<(), CliError> {
    let mut panel = PublishedPanel::new(ctx.api.clone(), ctx.notifier.clone());
    match published.command {
        PublishedSubcommand::List => {
            finish("load published items", panel.refresh().await)?;
        }
    }

    let state = panel.state();
    emit(ctx, &state.items, || render::published(state))
}

// =============================================================================
// OUTPUT
// =============================================================================

/// A declined confirmation is a normal exit; anything short of `Done` otherwise fails the run.
fn finish(action: &'static str, outcome: Outcome) -> Result<(), CliError> {
    tracing::info!(action, ?outcome, "workflow finished");
    match outcome {
        Outcome::Done => Ok(()),
        Outcome::Declined => {
            eprintln!("{action} cancelled");
            Ok(())
        }
        Outcome::Disabled | Outcome::Rejected | Outcome::Failed => Err(CliError::Workflow { action, outcome }),
    }
}

fn emit<T: Serialize>(ctx: &CliContext, value: &T, table: impl FnOnce() -> String) -> Result<(), CliError> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", table());
    }
    Ok(())
}
