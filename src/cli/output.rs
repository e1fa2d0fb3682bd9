//! Printing of command results in the configured format.
use std::fmt::Display;
use std::io::Write;

use anyhow::Context;
use config::OutputFormat;
use serde::Serialize;

/// Writes `reports` to stdout: one line each for text, a single array for JSON.
pub(super) fn emit<T>(format: OutputFormat, reports: &[T]) -> anyhow::Result<()>
where
    T: Serialize + Display,
{
    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, format, reports).context("could not write results to stdout")
}

fn render<W, T>(out: &mut W, format: OutputFormat, reports: &[T]) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize + Display,
{
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{report}")?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Serialize)]
    struct Line {
        token: &'static str,
    }

    impl fmt::Display for Line {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "token {}", self.token)
        }
    }

    fn rendered(format: OutputFormat) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        render(&mut buf, format, &[Line { token: "net45" }, Line { token: "sl5" }])?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn text_and_json() -> anyhow::Result<()> {
        insta::assert_snapshot!(rendered(OutputFormat::Text)?, @r"
        token net45
        token sl5
        ");
        insta::assert_snapshot!(rendered(OutputFormat::Json)?, @r#"
        [
          {
            "token": "net45"
          },
          {
            "token": "sl5"
          }
        ]
        "#);
        Ok(())
    }
}
