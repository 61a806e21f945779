use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::errors::AppError;
use crate::models::SessionIdentity;
use crate::services::conversation::Session;
use crate::state::AppState;

const BANNER: &str = "~~~~~~~~ Welcome to the Bank Assistant ~~~~~~";

/// Line-oriented front end: asks who the customer is, then feeds every line
/// to the session until it says goodbye or input runs out.
pub async fn run<R, W>(app: Arc<AppState>, reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    write_line(&mut writer, BANNER).await?;

    let Some(name) = prompt(&mut writer, &mut lines, "Enter your name: ").await? else {
        return Ok(());
    };
    let Some(account_id) = prompt(&mut writer, &mut lines, "Enter your account ID: ").await?
    else {
        return Ok(());
    };

    let customer_name = if name.is_empty() {
        "Customer".to_string()
    } else {
        name
    };
    let mut session = Session::new(
        app,
        SessionIdentity {
            customer_name,
            account_id,
        },
    );

    loop {
        let Some(query) = prompt(&mut writer, &mut lines, "Enter your query: ").await? else {
            tracing::debug!(session = %session.id(), "input closed");
            session.end();
            break;
        };

        let outcome = session.handle_turn(&query).await;
        write_line(&mut writer, outcome.text()).await?;

        if outcome.ends_session() {
            break;
        }
    }

    Ok(())
}

async fn prompt<R, W>(
    writer: &mut W,
    lines: &mut Lines<R>,
    label: &str,
) -> Result<Option<String>, AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(label.as_bytes()).await?;
    writer.flush().await?;
    Ok(lines.next_line().await?.map(|l| l.trim().to_string()))
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<(), AppError> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn app() -> Arc<AppState> {
        Arc::new(AppState {
            config: AppConfig::default(),
            llm: None,
        })
    }

    async fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        run(app(), input.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_full_session() {
        let out = transcript("Ada\nACC-9\nbalance\nquit\nnever read\n").await;
        assert!(out.starts_with(BANNER));
        assert!(out.contains("the balance of account ACC-9 is $1000 (simulated)."));
        assert!(out.contains("Goodbye, Ada!"));
        assert!(!out.contains("never read"));
    }

    #[tokio::test]
    async fn test_rejection_is_printed() {
        let out = transcript("Ada\nACC-9\n   \nquit\n").await;
        assert!(out.contains("Invalid input: Input cannot be empty"));
    }

    #[tokio::test]
    async fn test_eof_ends_quietly() {
        let out = transcript("Ada\n").await;
        assert!(out.contains("Enter your account ID: "));
        assert!(!out.contains("Goodbye"));
    }
}
