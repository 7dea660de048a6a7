use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_desk::cli::{self, Command, ReportKind, USAGE};
use library_desk::config::Config;
use library_desk::domain::ClientError;
use library_desk::services::{
    Desk, Listing, auth_service, maintenance_service, report_service, transaction_service,
};
use library_desk::views::export::export_csv;

/// Output of a command: a message line or a rendered listing
enum Output {
    Message(String),
    Listing(Listing),
}

async fn run(desk: &Desk, command: Command) -> Result<Output, ClientError> {
    use Output::{Listing as L, Message as M};

    Ok(match command {
        Command::Help => M(USAGE.trim_end().to_string()),
        Command::Login { username, password } => {
            M(auth_service::login(desk, &username, &password).await?)
        }
        Command::Logout => M(auth_service::logout(desk)?),
        Command::Whoami => M(auth_service::whoami(desk)?),
        Command::Home => L(auth_service::dashboard(desk).await?),
        Command::Status => M(auth_service::status(desk).await?),
        Command::AddBook(form) => M(maintenance_service::add_book(desk, &form).await?),
        Command::UpdateBook(form) => M(maintenance_service::update_book(desk, &form).await?),
        Command::AddMembership(form) => {
            M(maintenance_service::add_membership(desk, &form).await?)
        }
        Command::UpdateMembership(form) => {
            M(maintenance_service::update_membership(desk, &form).await?)
        }
        Command::ListMemberships => L(maintenance_service::load_memberships(desk).await?),
        Command::ManageUser(form) => M(maintenance_service::manage_user(desk, &form).await?),
        Command::Search(form) => {
            L(transaction_service::search_available_books(desk, &form).await?)
        }
        Command::Issue(form) => M(transaction_service::issue_book(desk, &form).await?),
        Command::Return(form) => M(transaction_service::return_book(desk, &form).await?),
        Command::PayFine(form) => M(transaction_service::pay_fine(desk, &form).await?),
        Command::Active => L(transaction_service::load_active_issues(desk).await?),
        Command::Overdue => L(transaction_service::load_overdue_returns(desk).await?),
        Command::Report { kind, csv } => {
            let listing = match kind {
                ReportKind::Issued => report_service::load_issued_report(desk).await?,
                ReportKind::Returned => report_service::load_returned_report(desk).await?,
                ReportKind::Fines => report_service::load_fine_report(desk).await?,
                ReportKind::Overdue => report_service::load_overdue_report(desk).await?,
                ReportKind::User(user_id) => {
                    report_service::load_user_transactions(desk, &user_id).await?
                }
            };
            if let (Some(target), Some(table)) = (csv.as_ref(), listing.as_table()) {
                export_csv(table, target)?;
                if target.as_os_str() == "-" {
                    return Ok(M(String::new()));
                }
                return Ok(M(format!(
                    "Exported {} rows to {}",
                    table.len(),
                    target.display()
                )));
            }
            L(listing)
        }
        Command::Overview => M(report_service::load_overview(desk)
            .await?
            .to_string()
            .trim_end()
            .to_string()),
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries tables and CSV
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_desk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let invocation = match cli::parse(std::env::args().skip(1)) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let config = match invocation.profile {
        Some(profile) => Config::for_profile(profile),
        None => Config::from_env(),
    };
    let desk = match config.and_then(|c| Desk::from_config(&c)) {
        Ok(desk) => desk,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&desk, invocation.command).await {
        Ok(Output::Message(msg)) => {
            if !msg.is_empty() {
                println!("{}", msg);
            }
            ExitCode::SUCCESS
        }
        Ok(Output::Listing(listing)) => {
            print!("{}", listing);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if matches!(e, ClientError::Transport(_) | ClientError::Decode(_)) {
                tracing::error!("{:?}", e);
            }
            eprintln!("{}", e);
            if let Some(hint) = e.hint() {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
