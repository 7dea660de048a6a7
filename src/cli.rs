//! Command-line parsing for the `library-desk` binary.
//!
//! Flags map onto the page forms one to one; parsing only shapes the raw
//! input, the forms do the checking.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::ClientError;
use crate::forms::{
    BookForm, BookUpdateForm, FineForm, IssueForm, MembershipForm, MembershipUpdateForm,
    ReturnForm, SearchForm, UserForm,
};
use crate::models::{MediaType, MembershipAction, MembershipDuration, Role, UserMode};

pub const USAGE: &str = "\
Usage: library-desk [--profile <name>] <command> [options]

Session:
  login <username> <password>
  logout
  whoami
  home                                  Dashboard modules for your role
  status                                Backend health

Maintenance:
  book add --title T --author A --serial S [--category C] [--type book|movie]
  book update --id N --title T --author A --serial S [--category C] [--type book|movie] [--unavailable]
  membership add --name N [--months 6|12|24]
  membership update --number M [--cancel] [--months 6|12|24]
  membership list
  user manage --name N --username U [--password P] [--existing] [--role admin|user] [--membership M]

Transactions:
  search [--title T] [--type book|movie]
  issue --book ID --user ID [--issue-date YYYY-MM-DD] [--return-date YYYY-MM-DD] [--remarks R]
  return --txn ID --serial S [--date YYYY-MM-DD]
  pay-fine [--paid] [--remarks R]
  active
  overdue

Reports:
  report issued|returned|fines|overdue [--csv <path|->]
  report user <user-id> [--csv <path|->]
  overview
";

/// Flags that never take a value
const SWITCHES: &[&str] = &["unavailable", "cancel", "existing", "paid", "help"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    Issued,
    Returned,
    Fines,
    Overdue,
    User(String),
}

#[derive(Debug, Clone)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    Whoami,
    Home,
    Status,
    AddBook(BookForm),
    UpdateBook(BookUpdateForm),
    AddMembership(MembershipForm),
    UpdateMembership(MembershipUpdateForm),
    ListMemberships,
    ManageUser(UserForm),
    Search(SearchForm),
    Issue(IssueForm),
    Return(ReturnForm),
    PayFine(FineForm),
    Active,
    Overdue,
    Report {
        kind: ReportKind,
        csv: Option<PathBuf>,
    },
    Overview,
    Help,
}

#[derive(Debug, Clone)]
pub struct Invocation {
    pub profile: Option<String>,
    pub command: Command,
}

#[derive(Debug, Default)]
struct ParsedArgs {
    positionals: Vec<String>,
    flags: HashMap<String, Option<String>>,
}

impl ParsedArgs {
    fn from_args(args: Vec<String>) -> Result<Self, ClientError> {
        let mut parsed = ParsedArgs::default();
        let mut iter = args.into_iter().peekable();

        while let Some(arg) = iter.next() {
            let Some(name) = arg.strip_prefix("--") else {
                parsed.positionals.push(arg);
                continue;
            };
            if name.is_empty() {
                return Err(usage_error("Empty flag '--'"));
            }
            if SWITCHES.contains(&name) {
                parsed.flags.insert(name.to_string(), None);
                continue;
            }
            match iter.next_if(|next| !next.starts_with("--")) {
                Some(value) => {
                    parsed.flags.insert(name.to_string(), Some(value));
                }
                None => return Err(usage_error(&format!("Flag --{} needs a value", name))),
            }
        }
        Ok(parsed)
    }

    fn value(&self, name: &str) -> Option<String> {
        self.flags.get(name).cloned().flatten()
    }

    fn text(&self, name: &str) -> String {
        self.value(name).unwrap_or_default()
    }

    fn switch(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    fn media_type(&self) -> Result<Option<MediaType>, ClientError> {
        self.value("type")
            .map(|raw| raw.parse::<MediaType>().map_err(ClientError::Validation))
            .transpose()
    }

    fn months(&self) -> Result<Option<MembershipDuration>, ClientError> {
        self.value("months")
            .map(|raw| {
                raw.trim()
                    .parse::<u8>()
                    .map_err(|_| {
                        ClientError::validation("Membership duration must be 6, 12 or 24 months.")
                    })
                    .and_then(|m| MembershipDuration::try_from(m).map_err(ClientError::Validation))
            })
            .transpose()
    }

    fn role(&self) -> Result<Option<Role>, ClientError> {
        match self.value("role").as_deref().map(str::trim) {
            None => Ok(None),
            Some(r) if r.eq_ignore_ascii_case("admin") => Ok(Some(Role::Admin)),
            Some(r) if r.eq_ignore_ascii_case("user") => Ok(Some(Role::User)),
            Some(other) => Err(ClientError::validation(format!(
                "Unknown role '{}' (expected admin or user)",
                other
            ))),
        }
    }
}

fn usage_error(msg: &str) -> ClientError {
    ClientError::Validation(format!("{}\n\n{}", msg, USAGE))
}

/// Parse the arguments after the program name
pub fn parse<I>(args: I) -> Result<Invocation, ClientError>
where
    I: IntoIterator<Item = String>,
{
    let parsed = ParsedArgs::from_args(args.into_iter().collect())?;
    let profile = parsed.value("profile");

    if parsed.switch("help") {
        return Ok(Invocation {
            profile,
            command: Command::Help,
        });
    }

    let command = match (parsed.positional(0), parsed.positional(1)) {
        (None, _) | (Some("help"), _) => Command::Help,
        (Some("login"), _) => {
            let (Some(username), Some(password)) = (parsed.positional(1), parsed.positional(2))
            else {
                return Err(usage_error("login needs <username> <password>"));
            };
            Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            }
        }
        (Some("logout"), _) => Command::Logout,
        (Some("whoami"), _) => Command::Whoami,
        (Some("home"), _) => Command::Home,
        (Some("status"), _) => Command::Status,
        (Some("book"), Some("add")) => Command::AddBook(BookForm {
            media_type: parsed.media_type()?,
            title: parsed.text("title"),
            author: parsed.text("author"),
            serial_no: parsed.text("serial"),
            category: parsed.text("category"),
        }),
        (Some("book"), Some("update")) => Command::UpdateBook(BookUpdateForm {
            book_id: parsed.text("id"),
            media_type: parsed.media_type()?,
            title: parsed.text("title"),
            author: parsed.text("author"),
            serial_no: parsed.text("serial"),
            category: parsed.text("category"),
            available: !parsed.switch("unavailable"),
        }),
        (Some("membership"), Some("add")) => Command::AddMembership(MembershipForm {
            name: parsed.text("name"),
            duration: parsed.months()?,
        }),
        (Some("membership"), Some("update")) => {
            Command::UpdateMembership(MembershipUpdateForm {
                membership_number: parsed.text("number"),
                action: Some(if parsed.switch("cancel") {
                    MembershipAction::Cancel
                } else {
                    MembershipAction::Extend
                }),
                extension: parsed.months()?,
            })
        }
        (Some("membership"), Some("list")) => Command::ListMemberships,
        (Some("user"), Some("manage")) => Command::ManageUser(UserForm {
            mode: Some(if parsed.switch("existing") {
                UserMode::Existing
            } else {
                UserMode::New
            }),
            name: parsed.text("name"),
            username: parsed.text("username"),
            password: parsed.text("password"),
            role: parsed.role()?,
            membership_number: parsed.value("membership"),
        }),
        (Some("search"), _) => Command::Search(SearchForm {
            title: parsed.value("title"),
            media_type: parsed.media_type()?,
        }),
        (Some("issue"), _) => Command::Issue(IssueForm {
            book_id: parsed.value("book"),
            user_id: parsed.text("user"),
            issue_date: parsed.value("issue-date"),
            return_date: parsed.value("return-date"),
            remarks: parsed.text("remarks"),
        }),
        (Some("return"), _) => Command::Return(ReturnForm {
            transaction_id: parsed.text("txn"),
            serial_no: parsed.text("serial"),
            return_date: parsed.value("date"),
        }),
        (Some("pay-fine"), _) => Command::PayFine(FineForm {
            fine_paid: parsed.switch("paid"),
            remarks: parsed.text("remarks"),
        }),
        (Some("active"), _) => Command::Active,
        (Some("overdue"), _) => Command::Overdue,
        (Some("report"), Some(kind)) => {
            let kind = match kind {
                "issued" => ReportKind::Issued,
                "returned" => ReportKind::Returned,
                "fines" => ReportKind::Fines,
                "overdue" => ReportKind::Overdue,
                "user" => ReportKind::User(
                    parsed
                        .positional(2)
                        .ok_or_else(|| usage_error("report user needs <user-id>"))?
                        .to_string(),
                ),
                other => return Err(usage_error(&format!("Unknown report '{}'", other))),
            };
            Command::Report {
                kind,
                csv: parsed.value("csv").map(PathBuf::from),
            }
        }
        (Some("overview"), _) => Command::Overview,
        (Some(cmd), sub) => {
            let full = match sub {
                Some(sub) => format!("{} {}", cmd, sub),
                None => cmd.to_string(),
            };
            return Err(usage_error(&format!("Unknown command '{}'", full)));
        }
    };

    Ok(Invocation { profile, command })
}
