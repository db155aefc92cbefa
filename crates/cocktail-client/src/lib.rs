//! Console client for the cocktail QA server
//!
//! [`AskClient`] posts one question to `/ask`; [`run_repl`] wraps it in a
//! read-eval-print loop. Every failure is turned into a printable line, so
//! the loop only stops on `exit` or end of input.

use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Endpoint used when none is given
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000/ask";

/// Local models can take a while to answer
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("connection failed: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response body is not valid JSON")]
    InvalidJson,

    #[error("response has no 'response' key")]
    MissingResponse,
}

/// User-facing line for a failed request.
pub fn describe_error(err: &ClientError) -> String {
    match err {
        ClientError::Connection(e) => format!("Błąd połączenia z serwerem: {}", e),
        ClientError::Status { status, body } => format!("Błąd HTTP: {} - {}", status, body),
        ClientError::InvalidJson => {
            "Błąd: Nie udało się odczytać odpowiedzi serwera (niepoprawny JSON).".to_string()
        }
        ClientError::MissingResponse => {
            "Błąd: Nie znaleziono klucza 'response' w odpowiedzi.".to_string()
        }
    }
}

#[derive(Serialize)]
struct AskPayload<'a> {
    text: &'a str,
}

/// HTTP client for the `/ask` endpoint.
pub struct AskClient {
    http: reqwest::Client,
    url: String,
}

impl AskClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one question and return the server's answer.
    pub async fn ask(&self, text: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.url)
            .json(&AskPayload { text })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| ClientError::InvalidJson)?;

        match value.get("response") {
            Some(serde_json::Value::String(answer)) => Ok(answer.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(ClientError::MissingResponse),
        }
    }

    /// [`ask`](Self::ask) with failures rendered by [`describe_error`].
    pub async fn ask_or_describe(&self, text: &str) -> String {
        match self.ask(text).await {
            Ok(answer) => answer,
            Err(e) => describe_error(&e),
        }
    }
}

/// Interactive loop without colors.
pub async fn run_repl<R, W>(client: &AskClient, input: R, output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    run_repl_styled(client, input, output, false).await
}

/// Interactive loop; ends on `exit` (any case) or end of input.
pub async fn run_repl_styled<R, W>(
    client: &AskClient,
    mut input: R,
    mut output: W,
    colored: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if colored {
        writeln!(output, "{}", "🍹 Klient Koktajlowego Bota".bright_magenta().bold())?;
        writeln!(output, "{}", "Napisz 'exit', aby zakończyć.".dimmed())?;
    } else {
        writeln!(output, "🍹 Klient Koktajlowego Bota")?;
        writeln!(output, "Napisz 'exit', aby zakończyć.")?;
    }
    writeln!(output, "{}", "-".repeat(40))?;

    loop {
        if colored {
            write!(output, "{}", "Ty: ".cyan().bold())?;
        } else {
            write!(output, "Ty: ")?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let line = strip_line_ending(&line);

        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        let answer = client.ask_or_describe(line).await;
        if colored {
            writeln!(output, "{}{}", "Bot: ".green().bold(), answer)?;
        } else {
            writeln!(output, "Bot: {}", answer)?;
        }
    }

    writeln!(output, "Do zobaczenia!")?;
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_status() {
        let err = ClientError::Status {
            status: 500,
            body: r#"{"error":"boom"}"#.to_string(),
        };
        assert_eq!(describe_error(&err), r#"Błąd HTTP: 500 - {"error":"boom"}"#);
    }

    #[test]
    fn test_describe_fixed_messages() {
        assert_eq!(
            describe_error(&ClientError::InvalidJson),
            "Błąd: Nie udało się odczytać odpowiedzi serwera (niepoprawny JSON)."
        );
        assert_eq!(
            describe_error(&ClientError::MissingResponse),
            "Błąd: Nie znaleziono klucza 'response' w odpowiedzi."
        );
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("exit\n"), "exit");
        assert_eq!(strip_line_ending("exit\r\n"), "exit");
        assert_eq!(strip_line_ending(" exit "), " exit ");
        assert_eq!(strip_line_ending(""), "");
    }
}
