use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;

use crate::core::date_parse::parse_date;
use crate::core::locator::find_row_index;
use crate::core::serial::{from_serial, to_serial, SpreadsheetSerial};
use crate::entry::DataEntry;
use crate::error::{DaybookError, DaybookResult};
use crate::graph::{EnvToken, GraphClient, StaticToken, TokenProvider};
use crate::roster::Roster;
use crate::types::Employee;

/// Environment variable consulted when `--token` is not given.
pub const TOKEN_ENV_VAR: &str = "DAYBOOK_GRAPH_TOKEN";

fn token_provider(token: Option<String>) -> Arc<dyn TokenProvider> {
    match token {
        Some(t) => Arc::new(StaticToken::new(t)),
        None => Arc::new(EnvToken::new(TOKEN_ENV_VAR)),
    }
}

/// Execute the employees command: list the roster.
pub fn employees(roster_path: PathBuf) -> DaybookResult<()> {
    let roster = Roster::load(&roster_path)?;

    println!("{}", "📒 Daybook roster".bold().green());
    println!("   File: {}\n", roster_path.display());

    for employee in &roster.employees {
        println!(
            "   {}  table: {}",
            employee.display_name.bright_blue().bold(),
            employee.table.cyan()
        );
    }
    println!("\n   {} employees", roster.employees.len());
    Ok(())
}

/// Execute the whoami command: show the Graph profile and its roster match.
pub async fn whoami(roster_path: PathBuf, token: Option<String>) -> DaybookResult<()> {
    let roster = Roster::load(&roster_path)?;
    let client = GraphClient::new(roster.workbook.clone(), token_provider(token));

    let user = client.current_user().await?;
    println!("{}", "👤 Signed-in user".bold().green());
    println!("   Name:      {}", user.display_name.bright_blue());
    println!("   Principal: {}", user.user_principal_name);

    match roster.match_user(&user) {
        Some(employee) => {
            println!(
                "   Roster:    {} (table {})",
                employee.display_name.bright_blue().bold(),
                employee.table.cyan()
            );
        }
        None => {
            println!("   Roster:    {}", "no matching employee".yellow());
        }
    }
    Ok(())
}

/// Execute the export command: fetch the row for a date and emit it as YAML.
pub async fn export(
    roster_path: PathBuf,
    employee: Option<String>,
    date: String,
    output: Option<PathBuf>,
    token: Option<String>,
) -> DaybookResult<()> {
    let roster = Roster::load(&roster_path)?;
    let client = GraphClient::new(roster.workbook.clone(), token_provider(token));

    let target = parse_date(&date)?;
    let employee = resolve_employee(&roster, &client, employee.as_deref()).await?;

    println!("{}", "📤 Daybook - Exporting entry".bold().green());
    println!(
        "   Employee: {} (table {})",
        employee.display_name.bright_blue().bold(),
        employee.table.cyan()
    );
    println!("   Date: {date}\n");

    let rows = client.table_rows(&employee.table).await?;
    let index =
        find_row_index(&target, &rows).ok_or_else(|| DaybookError::DateNotFound(date.clone()))?;

    let cells = client.row_values(&employee.table, index).await?;
    let entry = DataEntry::from_row_values(&cells, &employee.display_name, &date);
    let yaml = serde_yaml::to_string(&entry)?;

    match output {
        Some(path) => {
            std::fs::write(&path, yaml)?;
            println!(
                "{} {}",
                "✅ Entry written to".green(),
                path.display().to_string().bold()
            );
        }
        None => print!("{yaml}"),
    }
    Ok(())
}

/// Execute the submit command: locate the row for the entry's date and
/// rewrite it.
pub async fn submit(
    roster_path: PathBuf,
    file: PathBuf,
    employee: Option<String>,
    dry_run: bool,
    token: Option<String>,
) -> DaybookResult<()> {
    let roster = Roster::load(&roster_path)?;
    let client = GraphClient::new(roster.workbook.clone(), token_provider(token));

    let entry = DataEntry::load(&file)?;
    let target = entry.calendar_date()?;

    // --employee wins over the entry file, which wins over identity matching
    let named = employee.as_deref().or(if entry.employee.is_empty() {
        None
    } else {
        Some(entry.employee.as_str())
    });
    let employee = resolve_employee(&roster, &client, named).await?;

    println!("{}", "📝 Daybook - Submitting entry".bold().green());
    println!("   File: {}", file.display());
    println!(
        "   Employee: {} (table {})",
        employee.display_name.bright_blue().bold(),
        employee.table.cyan()
    );
    println!("   Date: {} (serial {})\n", entry.date, to_serial(&target));

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No changes will be written\n".yellow()
        );
    }

    let rows = client.table_rows(&employee.table).await?;
    let index = find_row_index(&target, &rows)
        .ok_or_else(|| DaybookError::DateNotFound(entry.date.clone()))?;

    if dry_run {
        println!(
            "{} row {} of table {}",
            "📋 Dry run complete - would update".yellow(),
            index,
            employee.table.cyan()
        );
        return Ok(());
    }

    client.update_row(&employee.table, index, &entry).await?;
    println!(
        "{} row {} of table {}",
        "✅ Updated".bold().green(),
        index,
        employee.table.cyan()
    );
    Ok(())
}

/// Execute the fetch command: download a drive file's text content by name.
pub async fn fetch(
    roster_path: PathBuf,
    name: String,
    output: Option<PathBuf>,
    token: Option<String>,
) -> DaybookResult<()> {
    let roster = Roster::load(&roster_path)?;
    let client = GraphClient::new(roster.workbook.clone(), token_provider(token));

    let content = client.file_content(&name).await?;

    match output {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!(
                "{} {} {}",
                "✅ Saved".bold().green(),
                name.cyan(),
                format!("to {}", path.display()).bold()
            );
        }
        None => print!("{content}"),
    }
    Ok(())
}

/// Execute the serial command: convert between dates and 1900-system serials.
pub fn serial(date: Option<String>, from: Option<i64>) -> DaybookResult<()> {
    match (date, from) {
        (Some(date), None) => {
            let parsed = parse_date(&date)?;
            println!("{}", to_serial(&parsed));
            Ok(())
        }
        (None, Some(value)) => {
            let date = from_serial(SpreadsheetSerial(value))?;
            println!("{date}");
            Ok(())
        }
        _ => Err(DaybookError::Format(
            "expected a date or --from <serial>".to_string(),
        )),
    }
}

/// Pick the employee to act as: an explicit name if given, otherwise the
/// roster member matching the signed-in Graph user.
async fn resolve_employee<'a>(
    roster: &'a Roster,
    client: &GraphClient,
    name: Option<&str>,
) -> DaybookResult<&'a Employee> {
    match name {
        Some(name) => roster.find(name),
        None => {
            let user = client.current_user().await?;
            roster.match_user(&user).ok_or_else(|| {
                DaybookError::UnknownEmployee(format!(
                    "signed-in user '{}' is not on the roster",
                    user.display_name
                ))
            })
        }
    }
}
