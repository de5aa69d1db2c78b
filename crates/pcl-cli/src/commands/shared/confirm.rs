use std::io::{BufRead, IsTerminal, Write};

/// Ask a yes/no question on stderr. `assume_yes` skips the prompt.
///
/// Refuses to guess when stdin is not a terminal.
pub fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        anyhow::bail!("{prompt} (stdin is not a terminal; pass --yes to confirm)");
    }

    let mut stderr = std::io::stderr();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(parse_answer(&answer))
}

fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::{confirm, parse_answer};

    #[test]
    fn only_yes_confirms() {
        assert!(parse_answer("y\n"));
        assert!(parse_answer(" YES "));
        assert!(!parse_answer(""));
        assert!(!parse_answer("no"));
        assert!(!parse_answer("yep"));
    }

    #[test]
    fn assume_yes_skips_prompt() {
        assert!(confirm("Delete everything?", true).expect("no prompt"));
    }
}
