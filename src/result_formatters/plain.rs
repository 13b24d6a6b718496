use color_eyre::Result;

use crate::analyzer::Output;
use crate::completion::Completions;

pub fn call(output: &Output) -> Result<()> {
    for line in render(output) {
        println!("{}", line);
    }
    Ok(())
}

pub fn render(output: &Output) -> Vec<String> {
    match output {
        Output::Sorted(words) => words.clone(),
        Output::Completed(completions) => completions.iter().flat_map(match_lines).collect(),
    }
}

fn match_lines(completions: &Completions) -> Vec<String> {
    completions
        .matches
        .iter()
        .map(|m| format!("{weight:>14.1}  {term}", weight = m.weight, term = m.term))
        .collect()
}
