use std::io::{self, Write};

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};

use hcac_core::config::Config;
use hcac_core::{CategorizationRecord, HcacError, Pacing, Result, Session};

const FAILURE_MESSAGE: &str = "Failed to categorize product. Please try again.";

/// Run the interactive categorization loop until EOF or an empty name
pub fn run(config: &Config, pacing: Pacing) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_loop(config, pacing))
}

async fn run_loop(config: &Config, pacing: Pacing) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut session = Session::new(pacing);
    let mut stdout = io::stdout();

    println!();
    println!("{}", "HCAC Services".bold());
    println!("Product categorization. Leave the name empty or press Ctrl-D to quit.");
    println!("Press Ctrl-C while processing to cancel a submission.");

    loop {
        println!();
        let Some(name) = prompt(&mut lines, "Product Name").await? else {
            break;
        };
        if name.trim().is_empty() {
            break;
        }
        let Some(description) = prompt(&mut lines, "Product Description").await? else {
            break;
        };

        println!("{}", "Processing...".dimmed());
        let cancel = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
        };

        let submitted = session
            .submit_with_cancel(&name, &description, cancel)
            .await
            .cloned();
        match submitted {
            Ok(record) => {
                debug!(history_len = session.history().len(), "submission recorded");
                render_result(&mut stdout, &record)?;
                render_history(
                    &mut stdout,
                    session.history().recent(config.shell.history_limit),
                    config.display.description_width,
                )?;
            }
            Err(e) if e.is_validation() => {
                println!("{} {}", "[ERROR]".red().bold(), e);
            }
            Err(HcacError::SubmissionCancelled) => {
                println!("{}", "Cancelled.".yellow());
            }
            Err(e) => {
                warn!("submission failed: {e}");
                println!("{} {}", "[ERROR]".red().bold(), FAILURE_MESSAGE);
            }
        }
    }

    Ok(())
}

/// Read one line, `None` on EOF or Ctrl-C
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    print!("{}: ", label.cyan());
    io::stdout().flush()?;

    tokio::select! {
        line = lines.next_line() => Ok(line?),
        _ = tokio::signal::ctrl_c() => {
            println!();
            Ok(None)
        }
    }
}

pub fn render_result(out: &mut impl Write, record: &CategorizationRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        "Predicted Category:".bold(),
        record.category().label().cyan().bold()
    )
}

pub fn render_history(
    out: &mut impl Write,
    records: &[CategorizationRecord],
    description_width: usize,
) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", "Recent Categorizations".bold())?;
    for record in records {
        writeln!(
            out,
            "  {} {} {}",
            record.name(),
            "->".dimmed(),
            record.category().label().cyan()
        )?;
        let preview = record.description_preview(description_width);
        if !preview.is_empty() {
            writeln!(out, "    {}", preview.dimmed())?;
        }
    }
    Ok(())
}
