use color_eyre::Result;

use crate::analyzer::Output;

pub fn call(output: &Output) -> Result<()> {
    for line in render(output)? {
        println!("{}", line);
    }
    Ok(())
}

/// An array for sorted words, one object per line for completions.
pub fn render(output: &Output) -> Result<Vec<String>> {
    let lines = match output {
        Output::Sorted(words) => vec![serde_json::to_string(words)?],
        Output::Completed(completions) => completions
            .iter()
            .map(serde_json::to_string)
            .collect::<serde_json::Result<Vec<String>>>()?,
    };
    Ok(lines)
}
