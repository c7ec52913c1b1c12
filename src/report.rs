use std::io::Write;

use tracing::{debug, instrument};

use crate::average::average;
use crate::prelude::*;
use crate::sample::Sample;

pub const CONDITION_MET: &str = "x is greater than 10 and y is less than 10";
pub const CONDITION_NOT_MET: &str = "Condition not met";

/// Writes the whole report for the sample.
#[instrument(level = "debug", skip_all, fields(count = sample.count()))]
pub fn render(sample: &Sample, output: &mut impl Write) -> Result {
    write_name(sample, output)?;
    write_scalars(sample, output)?;
    write_condition(sample, output)?;
    write_scores(&sample.scores, output)?;

    let average = average(&sample.scores)?;
    debug!(average);
    writeln!(output, "Average Score: {:.2}", average)?;
    Ok(())
}

fn write_name(sample: &Sample, output: &mut impl Write) -> Result {
    writeln!(output, "Name: {}", sample.name)?;
    Ok(())
}

fn write_scalars(sample: &Sample, output: &mut impl Write) -> Result {
    writeln!(output, "Char: {}, Float: {:.2}, Int: {}", sample.c, sample.y, sample.x)?;
    Ok(())
}

fn write_condition(sample: &Sample, output: &mut impl Write) -> Result {
    let message = if sample.is_condition_met() {
        CONDITION_MET
    } else {
        CONDITION_NOT_MET
    };
    writeln!(output, "{}", message)?;
    Ok(())
}

/// One line per score, numbered from 1.
fn write_scores(scores: &[i32], output: &mut impl Write) -> Result {
    for (i, score) in scores.iter().enumerate() {
        writeln!(output, "Score {}: {}", i + 1, score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "\
Name: Osama
Char: A, Float: 3.14, Int: 42
x is greater than 10 and y is less than 10
Score 1: 90
Score 2: 85
Score 3: 78
Score 4: 92
Score 5: 88
Average Score: 86.60
";

    fn render_to_string(sample: &Sample) -> Result<String> {
        let mut output = Vec::new();
        render(sample, &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn render_default_ok() -> crate::Result {
        assert_eq!(render_to_string(&Sample::default())?, EXPECTED);
        Ok(())
    }

    #[test]
    fn condition_not_met_ok() -> crate::Result {
        for sample in [
            Sample { x: 5, ..Default::default() },
            Sample { y: 15.0, ..Default::default() },
        ] {
            let report = render_to_string(&sample)?;
            assert_eq!(report.lines().nth(2), Some(CONDITION_NOT_MET));
        }
        Ok(())
    }

    #[test]
    fn scores_ok() -> crate::Result {
        let mut output = Vec::new();
        write_scores(&[7, -3, 0], &mut output)?;
        assert_eq!(String::from_utf8(output)?, "Score 1: 7\nScore 2: -3\nScore 3: 0\n");
        Ok(())
    }

    #[test]
    fn score_lines_match_count_ok() -> crate::Result {
        let sample = Sample::default();
        let report = render_to_string(&sample)?;
        let n_score_lines = report.lines().filter(|line| line.starts_with("Score ")).count();
        assert_eq!(n_score_lines, sample.count());
        Ok(())
    }

    #[test]
    fn scalars_rounded_ok() -> crate::Result {
        let sample = Sample {
            y: 9.876,
            ..Default::default()
        };
        let mut output = Vec::new();
        write_scalars(&sample, &mut output)?;
        assert_eq!(String::from_utf8(output)?, "Char: A, Float: 9.88, Int: 42\n");
        Ok(())
    }
}
