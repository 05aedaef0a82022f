use std::io::Cursor;

use bankdesk::app::{App, Command};
use bankdesk::config::Config;
use bankdesk::shell::{parse_line, run_shell, LineOutcome};

async fn session(input: &str) -> String {
    let mut app = App::new(&Config::default()).unwrap();
    let mut output = Vec::new();
    run_shell(&mut app, Cursor::new(input.to_string()), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn parse_line_handles_quoting_and_quit() {
    assert_eq!(parse_line("   "), LineOutcome::Empty);
    assert_eq!(parse_line("quit"), LineOutcome::Quit);
    assert_eq!(parse_line("exit"), LineOutcome::Quit);
    assert_eq!(
        parse_line(r#"add-account --name "Holiday Fund" --type Savings"#),
        LineOutcome::Run(Command::AddAccount {
            name: "Holiday Fund".to_string(),
            kind: "Savings".to_string(),
            currency: String::new(),
        })
    );
    assert_eq!(
        parse_line("account 'oops"),
        LineOutcome::Invalid("Unbalanced quotes".to_string())
    );
    assert!(matches!(parse_line("teleport 3"), LineOutcome::Invalid(_)));
}

#[tokio::test]
async fn changes_persist_for_the_whole_session() {
    let output = session(
        "add-account --name Travel --type Savings --currency EUR\n\
         accounts\n\
         delete-account 4\n\
         delete-account 4\n",
    )
    .await;

    assert!(output.contains("Account added successfully (#4)"), "{}", output);
    assert!(output.contains("#4  Travel (Savings)  0 EUR  [0000000004]"), "{}", output);
    assert!(output.contains("Account deleted successfully (Travel)"), "{}", output);
    assert!(output.contains("Account not found"), "{}", output);
    assert_eq!(output.matches("* store updated:").count(), 2, "{}", output);
    assert!(output.contains("* store updated: 4 accounts, 2 deposits, 1 transfers"));
}

#[tokio::test]
async fn transfer_updates_balances_and_reports_form_errors() {
    let output = session(
        "transfer --from 1 --to 2 --amount 5000\n\
         transfer --from 1 --to 2 --amount 200\n\
         account 2\n",
    )
    .await;

    assert!(output.contains("Please fix the errors in the form."), "{}", output);
    assert!(output.contains("  ! Insufficient funds in the source account."), "{}", output);
    assert!(output.contains("Transfer successful!"), "{}", output);
    assert!(output.contains("Balance: 5200 USD"), "{}", output);
    assert!(output.contains("* store updated: 3 accounts, 2 deposits, 2 transfers"));
}

#[tokio::test]
async fn more_expands_the_last_list() {
    let output = session("more\nmovements 1\nmore\n").await;

    assert!(output.contains("Nothing to expand"), "{}", output);
    assert!(output.contains("[Show More]"), "{}", output);
    assert!(output.contains("Restaurant"), "{}", output);
    assert!(output.contains("[Show Less]"), "{}", output);
}

#[tokio::test]
async fn quit_stops_reading_input() {
    let output = session("deposits\nquit\naccount 1\n").await;

    assert!(output.contains("Fixed Term Deposit"), "{}", output);
    assert!(!output.contains("Recent Transactions"), "{}", output);
}

#[tokio::test]
async fn invalid_deposit_lists_every_problem() {
    let output = session("add-deposit --amount=-3 --interest-rate=-1 --maturity-date 2024-13-01\n").await;

    assert!(output.contains("Please fix the errors in the form."), "{}", output);
    assert!(output.contains("Amount must be a positive number"), "{}", output);
    assert!(output.contains("Interest rate cannot be negative"), "{}", output);
    assert!(output.contains("Duration is required"), "{}", output);
    assert!(
        output.contains("Maturity date must be a valid date (YYYY-MM-DD)"),
        "{}",
        output
    );
    assert!(!output.contains("* store updated"), "{}", output);
}
