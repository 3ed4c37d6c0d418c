//! Interactive bank account menu on top of the ledger

use bank_ledger::utils::MemoryStorage;
use bank_ledger::Ledger;
use bigdecimal::BigDecimal;
use std::str::FromStr;
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut ledger = Ledger::new(MemoryStorage::new());
    let mut input = BufReader::new(stdin()).lines();
    // Account the menu operates on: the most recently created one
    let mut selected: Option<String> = None;

    loop {
        println!("\nBank Account Management System");
        println!("1. Create Savings Account");
        println!("2. Create Current Account");
        println!("3. Deposit Money");
        println!("4. Withdraw Money");
        println!("5. Transfer Money");
        println!("6. Check Balance");
        println!("7. View Transaction History");
        println!("8. Exit");
        println!("9. Apply Interest");

        let Some(choice) = prompt(&mut input, "Enter your choice: ").await? else {
            break;
        };

        match choice.as_str() {
            "1" | "2" => {
                let Some(name) = prompt(&mut input, "Enter account holder name: ").await? else {
                    break;
                };
                let Some(amount) = prompt_amount(&mut input, "Enter initial deposit: ").await?
                else {
                    continue;
                };
                let opened = if choice == "1" {
                    ledger.open_savings_account(name, Some(amount)).await
                } else {
                    ledger.open_current_account(name, Some(amount)).await
                };
                match opened {
                    Ok(account) => selected = Some(account.id),
                    Err(err) => println!("{}", err),
                }
            }
            "3" | "4" | "6" | "7" | "9" => {
                let Some(account_id) = &selected else {
                    println!("Create an account first.");
                    continue;
                };
                let output = match choice.as_str() {
                    "3" | "4" => {
                        let label = if choice == "3" {
                            "Enter amount to deposit: "
                        } else {
                            "Enter amount to withdraw: "
                        };
                        let Some(amount) = prompt_amount(&mut input, label).await? else {
                            continue;
                        };
                        let outcome = if choice == "3" {
                            ledger.deposit(account_id, amount).await?
                        } else {
                            ledger.withdraw(account_id, amount).await?
                        };
                        outcome.message()
                    }
                    "6" => ledger.check_balance(account_id).await?,
                    "7" => ledger.get_transaction_history(account_id).await?,
                    _ => ledger.apply_interest(account_id).await?.message(),
                };
                println!("{}", output);
            }
            "5" => {
                let Some(account_id) = &selected else {
                    println!("Create an account first.");
                    continue;
                };
                let Some(recipient_name) = prompt(&mut input, "Enter recipient's name: ").await?
                else {
                    break;
                };
                let Some(amount) = prompt_amount(&mut input, "Enter amount to transfer: ").await?
                else {
                    continue;
                };
                match ledger.find_by_holder_name(&recipient_name).await? {
                    Some(recipient) => {
                        let outcome = ledger.transfer(account_id, &recipient.id, amount).await?;
                        println!("{}", outcome);
                    }
                    None => println!("Recipient account not found."),
                }
            }
            "8" => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    println!("{}", ledger.total_accounts_summary());
    Ok(())
}

/// Print `label` and read one trimmed line; `None` on end of input
async fn prompt(input: &mut Input, label: &str) -> std::io::Result<Option<String>> {
    print!("{}", label);
    std::io::Write::flush(&mut std::io::stdout())?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

/// Read a decimal amount; unparseable input is reported and yields `None`
async fn prompt_amount(input: &mut Input, label: &str) -> std::io::Result<Option<BigDecimal>> {
    let Some(raw) = prompt(input, label).await? else {
        return Ok(None);
    };
    match BigDecimal::from_str(&raw) {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            println!("Invalid amount: {}", raw);
            Ok(None)
        }
    }
}
