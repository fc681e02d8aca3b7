use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::handle(ctx, flags).await,
        Commands::Report(args) => commands::report::handle(&args, ctx, flags).await,
        Commands::List => commands::list::handle(ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Seed => commands::seed::handle(ctx, flags).await,
        Commands::Upload(args) => commands::upload::handle(&args, ctx, flags).await,
    }
}
