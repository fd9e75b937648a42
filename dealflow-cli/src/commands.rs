//! Subcommands

use clap::Args;
use clap::Subcommand;
use dealflow_lib::CrmClient;
use dealflow_lib::column::Callback;
use dealflow_lib::column::ColumnSet;
use dealflow_lib::column::FavoriteMap;
use dealflow_lib::columns;
use dealflow_lib::model::EntityKind;
use dealflow_lib::model::OrderStatus;
use dealflow_lib::model::Plan;
use dealflow_lib::model::Resource;
use dealflow_lib::model::UserStatus;
use dealflow_lib::render::TextTable;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a collection as a table
    List(ListArgs),
    /// Reveal a family office contact's email and phone
    Reveal { id: String },
    /// Toggle a family office favorite
    Favorite { id: String },
    /// Move a user to another plan
    Plan { user_id: String, plan: Plan },
    /// Change a user's account status
    UserStatus { user_id: String, status: UserStatus },
    /// Change an order's payment status
    OrderStatus { id: String, status: OrderStatus },
    /// Delete a row
    Delete { entity: EntityKind, id: String },
    /// Show the signed-in user
    Whoami,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// investors, family-offices, family-office-contacts, users, orders,
    /// deals, companies, people or integrations
    pub entity: EntityKind,

    /// Print at most this many rows
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Runs a command and returns what to print.
pub async fn run(client: &CrmClient, command: Command) -> Result<String, CliError> {
    match command {
        Command::List(args) => list(client, &args).await,
        Command::Reveal { id } => {
            let contact = client.reveal_contact(&id).await?;
            let columns = columns::family_office_contact_columns(inert("reveal"));
            Ok(TextTable::new(&columns).render(&[contact]))
        }
        Command::Favorite { id } => {
            let favorite = client.toggle_favorite(&id).await?;
            Ok(if favorite {
                format!("★ {} added to favorites\n", id)
            } else {
                format!("☆ {} removed from favorites\n", id)
            })
        }
        Command::Plan { user_id, plan } => {
            client.change_user_plan(&user_id, plan).await?;
            Ok(format!("{} moved to plan {}\n", user_id, plan))
        }
        Command::UserStatus { user_id, status } => {
            client.change_user_status(&user_id, status).await?;
            Ok(format!("{} is now {}\n", user_id, status))
        }
        Command::OrderStatus { id, status } => {
            client.change_order_status(&id, status).await?;
            Ok(format!("order {} is now {}\n", id, status))
        }
        Command::Delete { entity, id } => {
            client.delete_kind(entity, &id).await?;
            Ok(format!("deleted {} {}\n", entity.label(), id))
        }
        Command::Whoami => {
            let me = client.whoami().await?;
            Ok(format!(
                "{} ({})\nrole: {}\n",
                me.display_name.as_deref().unwrap_or(&me.id),
                me.email.as_deref().unwrap_or("--"),
                me.role.as_deref().unwrap_or("--"),
            ))
        }
    }
}

async fn list(client: &CrmClient, args: &ListArgs) -> Result<String, CliError> {
    match args.entity {
        EntityKind::Investor => list_rows(client, columns::investor_columns(), args).await,
        EntityKind::FamilyOffice => {
            let columns = columns::family_office_columns(FavoriteMap::new(), inert("favorite"));
            list_rows(client, columns, args).await
        }
        EntityKind::FamilyOfficeContact => {
            let columns = columns::family_office_contact_columns(inert("reveal"));
            list_rows(client, columns, args).await
        }
        EntityKind::User => {
            let columns =
                columns::user_columns(inert_change("plan"), inert_change("status"), inert("delete"));
            list_rows(client, columns, args).await
        }
        EntityKind::Order => {
            let columns = columns::order_columns(inert_change("status"), inert("delete"));
            list_rows(client, columns, args).await
        }
        EntityKind::Deal => list_rows(client, columns::deal_columns(), args).await,
        EntityKind::Company => list_rows(client, columns::company_columns(), args).await,
        EntityKind::Person => list_rows(client, columns::person_columns(), args).await,
        EntityKind::Integration => {
            let columns = columns::integration_columns(inert("delete"));
            list_rows(client, columns, args).await
        }
    }
}

async fn list_rows<T: Resource + Serialize>(
    client: &CrmClient,
    columns: ColumnSet<T>,
    args: &ListArgs,
) -> Result<String, CliError> {
    let rows = client.fetch::<T>().await?;
    format_rows(rows, &columns, args)
}

fn format_rows<T: Serialize>(
    mut rows: Vec<T>,
    columns: &ColumnSet<T>,
    args: &ListArgs,
) -> Result<String, CliError> {
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    if args.json {
        let mut out = serde_json::to_string_pretty(&rows)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(TextTable::new(columns).render(&rows))
}

/// Printed tables are not interactive; their cell actions only log.
fn inert(action: &'static str) -> Callback<String> {
    Callback::new(move |id: String| {
        log::debug!("Ignoring {} for {} in printed table", action, id)
    })
}

fn inert_change(action: &'static str) -> Callback<(String, String)> {
    Callback::new(move |(id, value): (String, String)| {
        log::debug!("Ignoring {} change to {} for {} in printed table", action, value, id)
    })
}
