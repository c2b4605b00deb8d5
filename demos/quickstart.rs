/// Quickstart example: minimal end-to-end e-Boekhouden flow.
///
/// Demonstrates: construct the client from environment credentials, list
/// ledger accounts and open items, fetch a balance, close the session.
use eboekhouden_sdk::{
    BalanceFilter, ClientOptions, EboekhoudenClient, LedgerAccountFilter, OpenItemKind,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("EBOEKHOUDEN_USERNAME")?;
    let code1 = std::env::var("EBOEKHOUDEN_CODE1")?;
    let code2 = std::env::var("EBOEKHOUDEN_CODE2")?;

    let client = EboekhoudenClient::new(ClientOptions::new(username, code1, code2));

    // 1. Acquire a session eagerly to surface credential problems early
    client.init().await?;

    // 2. List ledger accounts
    let accounts = client.ledger_accounts(LedgerAccountFilter::default()).await?;
    println!("Ledger accounts:");
    for account in &accounts {
        println!("  {} {} ({:?})", account.code, account.description, account.category);
    }

    // 3. List outstanding debtor invoices
    let open = client.open_items(OpenItemKind::Debtors).await?;
    println!("\nOpen debtor items: {}", open.len());
    for item in &open {
        println!("  {} {} outstanding {:.2}", item.relation_code, item.invoice_number, item.outstanding);
    }

    // 4. Fetch a single balance
    if let Some(account) = accounts.first() {
        let balance = client
            .balance(BalanceFilter {
                ledger_account_code: account.code.clone(),
                cost_center_id: 0,
                ..Default::default()
            })
            .await?;
        println!("\nBalance of {}: {balance:.2}", account.code);
    }

    // 5. Best-effort logout
    client.close_session().await;
    Ok(())
}
