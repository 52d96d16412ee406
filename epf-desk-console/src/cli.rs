use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use epf_desk_http::config::{API_TIMEOUT_ENV, API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use epf_desk_http::{ClientConfig, HttpRepositories};
use epf_desk_store::repository::CustomerRepository;
use tracing::warn;

use crate::forms::confirmation::{FieldChange, FormAction, FormField};
use crate::prompt::{LinePrompt, PasswordPrompt};
use crate::render;
use crate::views::notice::ActionOutcome;
use crate::views::{CompletedView, PendingView};

/// epf-desk - EPF customer request tracker
#[derive(Parser, Debug)]
#[command(name = "epf-desk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend origin
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = API_TIMEOUT_ENV, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    // === Views ===
    /// List pending and updated requests
    Pending {
        /// Filter by name, UAN number or aadhar-card name
        #[arg(short, long)]
        search: Option<String>,

        /// Print the rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// List completed requests
    Completed {
        /// Filter by name, UAN number or aadhar-card name
        #[arg(short, long)]
        search: Option<String>,

        /// Print the rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the work notes of a pending request
    Notes {
        /// Customer id
        id: i64,
    },

    // === Confirmation form ===
    /// Show the confirmation form for a pending request
    Form {
        /// Customer id
        id: i64,

        /// Show the customer password in clear
        #[arg(long)]
        reveal_password: bool,
    },

    /// Save edits and mark the request "In Progress"
    Update {
        /// Customer id
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Save edits and mark the request completed
    Confirm {
        /// Customer id
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    // === Completed actions ===
    /// Move a completed request back to pending (asks for the admin password)
    Reopen {
        /// Customer id
        id: i64,
    },

    /// Delete a completed request (asks for the admin password)
    Delete {
        /// Customer id
        id: i64,
    },

    /// Add a new customer in the pending state
    Add {
        /// Customer name, stored uppercased
        #[arg(long)]
        name: String,

        /// Customer password; asked for when omitted
        #[arg(long)]
        password: Option<String>,
    },
}

/// Field edits applied to the confirmation form before submitting.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub aadhar_card_name: Option<String>,
    /// Date of birth as YYYY-MM-DD
    #[arg(long)]
    pub dob: Option<String>,
    #[arg(long)]
    pub aadhar_number: Option<String>,
    #[arg(long)]
    pub aadhar_mobile: Option<String>,
    #[arg(long)]
    pub uan_number: Option<String>,
    #[arg(long)]
    pub uan_password: Option<String>,
    #[arg(long)]
    pub bank_account_number: Option<String>,
    #[arg(long)]
    pub ifsc_code: Option<String>,
    #[arg(long)]
    pub commission_amount: Option<String>,
    #[arg(long)]
    pub paid_amount: Option<String>,
    /// Free-text work notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl FieldArgs {
    /// The flags that were given, paired with the field they edit.
    pub fn entries(&self) -> Vec<(FormField, &str)> {
        [
            (FormField::AadharCardName, &self.aadhar_card_name),
            (FormField::Dob, &self.dob),
            (FormField::AadharNumber, &self.aadhar_number),
            (FormField::AadharMobile, &self.aadhar_mobile),
            (FormField::UanNumber, &self.uan_number),
            (FormField::UanPassword, &self.uan_password),
            (FormField::BankAccountNumber, &self.bank_account_number),
            (FormField::IfscCode, &self.ifsc_code),
            (FormField::CommissionAmount, &self.commission_amount),
            (FormField::PaidAmount, &self.paid_amount),
            (FormField::UpdatedStatus, &self.notes),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// Builds the HTTP repository from the global options and runs the command
/// against the terminal.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let config = ClientConfig::new(&cli.api_url, Duration::from_secs(cli.timeout_secs))
        .context("invalid backend settings")?;
    let repo = HttpRepositories::new(config)?.create_customer_repository();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut prompt = LinePrompt::terminal();

    let succeeded = execute(cli.command, repo, &mut out, &mut prompt).await?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Runs one command. `Ok(false)` means the action finished but reported a
/// failure to the operator.
pub async fn execute<R, W, P>(command: Command, repo: Arc<R>, out: &mut W, prompt: &mut P) -> Result<bool>
where
    R: CustomerRepository,
    W: Write,
    P: PasswordPrompt,
{
    match command {
        Command::Pending { search, json } => {
            let mut view = PendingView::new(repo);
            let fetched = view.refresh().await.is_ok();
            view.set_search(search.unwrap_or_default());
            if json {
                render::records_json(out, &view.visible())?;
            } else {
                render::pending_table(out, &view.visible())?;
            }
            Ok(fetched)
        }

        Command::Completed { search, json } => {
            let mut view = CompletedView::new(repo);
            let fetched = view.refresh().await.is_ok();
            view.set_search(search.unwrap_or_default());
            if json {
                render::records_json(out, &view.visible())?;
            } else {
                render::completed_table(out, &view.visible())?;
            }
            Ok(fetched)
        }

        Command::Notes { id } => {
            let mut view = PendingView::new(repo);
            view.refresh().await.context("could not load customer records")?;
            writeln!(out, "{}", view.view_notes(id)?)?;
            Ok(true)
        }

        Command::Form { id, reveal_password } => {
            let mut view = PendingView::new(repo);
            view.refresh().await.context("could not load customer records")?;
            let form = view.open_confirmation(id)?;
            if reveal_password {
                form.toggle_password_visibility();
            }
            render::confirmation_form(out, form)?;
            Ok(true)
        }

        Command::Update { id, fields } => submit_form(repo, id, &fields, FormAction::Update, out).await,

        Command::Confirm { id, fields } => submit_form(repo, id, &fields, FormAction::Confirm, out).await,

        Command::Reopen { id } => {
            let mut view = CompletedView::new(repo);
            view.refresh().await.context("could not load customer records")?;
            let outcome = view.reopen(id, prompt).await?;
            report(out, outcome)
        }

        Command::Delete { id } => {
            let mut view = CompletedView::new(repo);
            view.refresh().await.context("could not load customer records")?;
            let outcome = view.delete(id, prompt).await?;
            report(out, outcome)
        }

        Command::Add { name, password } => {
            let password = match password {
                Some(password) => password,
                None => prompt.ask("Password").unwrap_or_default(),
            };

            let mut view = CompletedView::new(repo);
            let form = view.open_creation();
            form.set_name(&name);
            form.set_password(&password);

            let notice = view.submit_creation().await?;
            render::notice(out, &notice)?;
            Ok(!notice.is_error())
        }
    }
}

async fn submit_form<R, W>(repo: Arc<R>, id: i64, fields: &FieldArgs, action: FormAction, out: &mut W) -> Result<bool>
where
    R: CustomerRepository,
    W: Write,
{
    let mut view = PendingView::new(repo);
    view.refresh().await.context("could not load customer records")?;

    let form = view.open_confirmation(id)?;
    for (field, raw) in fields.entries() {
        if form.enter(field, raw) == FieldChange::Discarded {
            warn!(field = field.label(), input = raw, "input did not fit the field and was dropped in part or whole");
        }
    }

    let notice = view
        .submit_confirmation(action)
        .await
        .with_context(|| format!("could not submit customer {id}"))?;
    render::notice(out, &notice)?;
    Ok(true)
}

fn report<W: Write>(out: &mut W, outcome: ActionOutcome) -> Result<bool> {
    match outcome {
        ActionOutcome::Cancelled => {
            writeln!(out, "Cancelled")?;
            Ok(true)
        }
        ActionOutcome::Notified(notice) => {
            render::notice(out, &notice)?;
            Ok(!notice.is_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epf_desk_api::domain::work_status::WorkStatus;
    use epf_desk_store::models::customer::CustomerModel;
    use epf_desk_store::repository::in_memory::{InMemoryCustomerRepository, RecordedCall};
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn record(id: i64, name: &str, status: WorkStatus) -> CustomerModel {
        let mut record = CustomerModel::empty(id);
        record.name = Some(name.to_string());
        record.work_status = Some(status);
        record.password = Some("secret".to_string());
        record
    }

    fn repo() -> Arc<InMemoryCustomerRepository> {
        Arc::new(InMemoryCustomerRepository::new("admin123").with_records(vec![
            record(1, "RAVI", WorkStatus::Pending),
            record(2, "MEERA", WorkStatus::Completed),
        ]))
    }

    async fn run_args(
        repo: &Arc<InMemoryCustomerRepository>,
        args: &[&str],
        stdin: &str,
    ) -> Result<(bool, String)> {
        let cli = Cli::try_parse_from(std::iter::once("epf-desk").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        let mut prompt = LinePrompt::new(Cursor::new(stdin.to_string()), Vec::new());
        let ok = execute(cli.command, repo.clone(), &mut out, &mut prompt).await?;
        Ok((ok, String::from_utf8(out)?))
    }

    #[test]
    fn test_parses_field_flags() {
        let cli = Cli::try_parse_from([
            "epf-desk",
            "update",
            "1",
            "--ifsc-code",
            "sbin0001234",
            "--notes",
            "called",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.timeout_secs, 5);
        match cli.command {
            Command::Update { id, fields } => {
                assert_eq!(id, 1);
                assert_eq!(
                    fields.entries(),
                    vec![(FormField::IfscCode, "sbin0001234"), (FormField::UpdatedStatus, "called")]
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_pending_lists_queue() -> Result<()> {
        let repo = repo();
        let (ok, output) = run_args(&repo, &["pending"], "").await?;
        assert!(ok);
        assert!(output.contains("RAVI"));
        assert!(!output.contains("MEERA"));

        let (_, output) = run_args(&repo, &["pending", "--search", "zzz"], "").await?;
        assert_eq!(output, "No Pending Customers Found\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_fetch_renders_empty_view_and_fails() -> Result<()> {
        let repo = repo();
        repo.fail_next(epf_desk_api::ApiError::TransportError("down".to_string()));
        let (ok, output) = run_args(&repo, &["completed"], "").await?;
        assert!(!ok);
        assert_eq!(output, "No Completed Records Found\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_confirm_with_paid_amount() -> Result<()> {
        let repo = repo();
        let (ok, output) = run_args(&repo, &["confirm", "1", "--paid-amount", "750"], "").await?;
        assert!(ok);
        assert!(output.contains("Confirmed Successfully"));

        let stored = &repo.records()[0];
        assert_eq!(stored.work_status, Some(WorkStatus::Completed));
        assert_eq!(stored.paid_amount, Some(Decimal::from(750)));
        Ok(())
    }

    #[tokio::test]
    async fn test_confirm_without_paid_amount_is_refused() {
        let repo = repo();
        let result = run_args(&repo, &["confirm", "1"], "").await;
        assert!(result.is_err());
        assert_eq!(repo.calls(), vec![RecordedCall::LoadAll]);
    }

    #[tokio::test]
    async fn test_update_truncates_digit_flags() -> Result<()> {
        let repo = repo();
        run_args(&repo, &["update", "1", "--uan-number", "1002003004009999"], "").await?;

        let stored = &repo.records()[0];
        assert_eq!(stored.uan_number.as_deref(), Some("100200300400"));
        assert_eq!(stored.work_status, Some(WorkStatus::InProgress));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_reads_password_from_prompt() -> Result<()> {
        let repo = repo();
        let (ok, output) = run_args(&repo, &["delete", "2"], "admin123\n").await?;
        assert!(ok);
        assert!(output.starts_with("✅ Deleted!"));
        assert_eq!(repo.records().len(), 1);

        // gone from the completed view, so there is nothing left to reopen
        assert!(run_args(&repo, &["reopen", "2"], "admin123\n").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_cancelled_prompt() -> Result<()> {
        let repo = repo();
        let (ok, output) = run_args(&repo, &["reopen", "2"], "\n").await?;
        assert!(ok);
        assert_eq!(output, "Cancelled\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_add_uppercases_and_prompts_for_password() -> Result<()> {
        let repo = repo();
        let (ok, output) = run_args(&repo, &["add", "--name", "john"], "x\n").await?;
        assert!(ok);
        assert!(output.contains("Customer added successfully"));
        assert!(repo.calls().contains(&RecordedCall::Create(
            epf_desk_store::models::requests::CreateCustomerRequest {
                name: "JOHN".to_string(),
                password: "x".to_string(),
            }
        )));

        let (ok, output) = run_args(&repo, &["add", "--name", "jane"], "").await?;
        assert!(!ok);
        assert!(output.contains("Please fill both fields"));
        Ok(())
    }
}
