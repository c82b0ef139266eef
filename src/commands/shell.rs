use crate::commands::{news, pipeline_from_env, sec};
use crate::services::Pipeline;
use crate::terminal::TerminalPresenter;
use ratatui::style::Color;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    News(String),
    Sec(String),
    Help,
    Exit,
    Empty,
    /// A known command given without its ticker; holds the command name
    MissingTicker(&'static str),
    Unknown,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return ShellCommand::Empty;
        };
        let ticker = parts.next().map(str::to_uppercase);

        match command.to_lowercase().as_str() {
            "/exit" => ShellCommand::Exit,
            "/help" => ShellCommand::Help,
            "/news" => ticker.map_or(ShellCommand::MissingTicker("/news"), ShellCommand::News),
            "/sec" => ticker.map_or(ShellCommand::MissingTicker("/sec"), ShellCommand::Sec),
            _ => ShellCommand::Unknown,
        }
    }
}

/// Read commands from `input` until `/exit` or end of input
pub async fn run_shell<R: AsyncBufRead + Unpin, W: Write>(
    pipeline: &Pipeline,
    mut input: R,
    presenter: &mut TerminalPresenter<W>,
) -> io::Result<()> {
    presenter.welcome()?;

    let mut line = String::new();
    loop {
        presenter.prompt("Enter command")?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            presenter.message("\nGoodbye! 👋", Color::Yellow)?;
            return Ok(());
        }

        match ShellCommand::parse(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Exit => {
                presenter.message("Goodbye! 👋", Color::Yellow)?;
                return Ok(());
            }
            ShellCommand::Help => presenter.welcome()?,
            ShellCommand::MissingTicker(command) => presenter.message(
                &format!("Please provide a ticker symbol. Example: {} AAPL", command),
                Color::Red,
            )?,
            ShellCommand::News(ticker) => {
                presenter.message(&format!("Fetching news for {}...", ticker), Color::Green)?;
                news::present(pipeline, &ticker, presenter).await?;
            }
            ShellCommand::Sec(ticker) => {
                presenter.message(&format!("Fetching SEC filings for {}...", ticker), Color::Green)?;
                sec::present(pipeline, &ticker, presenter).await?;
            }
            ShellCommand::Unknown => {
                presenter.message("Unknown command. Type /help for available commands.", Color::Red)?
            }
        }
    }
}

pub async fn run() {
    let pipeline = pipeline_from_env();
    let mut presenter = TerminalPresenter::stdout();
    let stdin = BufReader::new(tokio::io::stdin());

    if let Err(e) = run_shell(&pipeline, stdin, &mut presenter).await {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::fetcher::tests::FakeTransport;
    use crate::services::Fetcher;
    use crate::terminal::table::Painter;
    use std::sync::Arc;

    const FILINGS_CSV: &str = "Filing Date,Form,Description,Filing\n\
                               03/01/2024,10-K,Annual,https://f/2\n";

    fn pipeline(transport: Arc<FakeTransport>) -> Pipeline {
        let config = AppConfig {
            api_token: Some("tok".to_string()),
            ..AppConfig::default()
        };
        Pipeline::new(Fetcher::new(transport, Arc::new(config)))
    }

    async fn run_script(transport: Arc<FakeTransport>, script: &str) -> String {
        let mut presenter = TerminalPresenter::new(Vec::new(), Painter::plain());
        run_shell(&pipeline(transport), script.as_bytes(), &mut presenter)
            .await
            .unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("/news aapl"), ShellCommand::News("AAPL".to_string()));
        assert_eq!(ShellCommand::parse("  /SEC msft  extra"), ShellCommand::Sec("MSFT".to_string()));
        assert_eq!(ShellCommand::parse("/news"), ShellCommand::MissingTicker("/news"));
        assert_eq!(ShellCommand::parse("/sec "), ShellCommand::MissingTicker("/sec"));
        assert_eq!(ShellCommand::parse("/help"), ShellCommand::Help);
        assert_eq!(ShellCommand::parse("/exit"), ShellCommand::Exit);
        assert_eq!(ShellCommand::parse("   "), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("news aapl"), ShellCommand::Unknown);
    }

    #[tokio::test]
    async fn test_sec_command_upper_cases_ticker() {
        let transport = Arc::new(FakeTransport::ok(FILINGS_CSV));

        let output = run_script(transport.clone(), "/sec aapl\n/exit\n").await;

        assert!(output.contains("SEC Filings for AAPL"));
        assert!(output.contains("Goodbye!"));
        let (_, params) = transport.last_request.lock().unwrap().clone().unwrap();
        assert!(params.contains(&("t", "AAPL".to_string())));
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_the_loop() {
        let transport = Arc::new(FakeTransport::failing("connection refused"));

        let output = run_script(transport.clone(), "/news\nbogus\n/news aapl\n/sec aapl\n/exit\n").await;

        assert!(output.contains("Please provide a ticker symbol. Example: /news AAPL"));
        assert!(output.contains("Unknown command. Type /help for available commands."));
        assert!(output.contains("Error fetching news for AAPL"));
        assert!(output.contains("Failed to fetch SEC filings: connection refused"));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let transport = Arc::new(FakeTransport::ok(FILINGS_CSV));

        let output = run_script(transport.clone(), "\n/help\n").await;

        assert!(output.contains("Goodbye!"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_reads_input_without_blocking_the_runtime() {
        let transport = Arc::new(FakeTransport::ok(FILINGS_CSV));
        let (reader, mut writer) = tokio::io::duplex(64);

        // On the single-threaded test runtime the writer only runs if the
        // shell yields while waiting for a line.
        let feeder = tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;
            writer.write_all(b"/sec aapl\n").await.unwrap();
            tokio::task::yield_now().await;
            writer.write_all(b"/exit\n").await.unwrap();
        });

        let mut presenter = TerminalPresenter::new(Vec::new(), Painter::plain());
        run_shell(&pipeline(transport.clone()), BufReader::new(reader), &mut presenter)
            .await
            .unwrap();
        feeder.await.unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains("SEC Filings for AAPL"));
        assert!(output.contains("Goodbye!"));
        assert_eq!(transport.call_count(), 1);
    }
}
