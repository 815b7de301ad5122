use std::{
    fs::File,
    io::{BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
};

use clap::Parser;

use crate::{HuffmanAnalysis, report};

#[derive(Parser)]
#[command(
    version,
    author,
    about = "Compute a static Huffman code for a text and report its compression statistics"
)]
pub struct Cli {
    /// Input text from command line argument instead of standard input
    data: Option<String>,

    #[arg(short, long)]
    /// Input from file instead of standard input or command line argument
    input_file: Option<PathBuf>,

    #[arg(short, long)]
    /// Write the per-symbol code table report to this CSV file
    code_report: Option<PathBuf>,

    #[arg(short, long)]
    /// Write the summary report to this CSV file
    summary_report: Option<PathBuf>,

    #[arg(short = 'j', long, default_value = "false")]
    /// Output the code table as JSON instead of the console summary
    codes_json: bool,

    #[arg(short, long, default_value = "false")]
    /// Whether to output the code table in pretty JSON
    pretty_json: bool,
}

fn write_csv_report(
    path: &PathBuf,
    write: impl FnOnce(BufWriter<File>) -> csv::Result<()>,
) -> Result<(), String> {
    let f = File::create(path).map_err(|e| format!("create file {:?} failed: {}", path, e))?;
    write(BufWriter::new(f)).map_err(|e| format!("write report {:?} failed: {}", path, e))
}

pub fn run(cli: Cli) -> Result<(), String> {
    let text = if let Some(input_fpath) = &cli.input_file {
        std::fs::read_to_string(input_fpath)
            .map_err(|e| format!("read file {:?} failed: {}", input_fpath, e))?
    } else if let Some(data) = &cli.data {
        data.clone()
    } else {
        let mut s = String::new();
        stdin()
            .read_to_string(&mut s)
            .map_err(|e| format!("read STDIN failed: {}", e))?;
        s
    };

    let analysis = HuffmanAnalysis::of_text(&text).map_err(|e| e.to_string())?;

    if let Some(path) = &cli.code_report {
        write_csv_report(path, |w| report::write_code_report(&analysis, w))?;
    }

    if let Some(path) = &cli.summary_report {
        write_csv_report(path, |w| report::write_summary_report(&analysis, w))?;
    }

    let mut output = stdout();
    if cli.codes_json {
        if cli.pretty_json {
            serde_json::to_writer_pretty(&mut output, analysis.codes())
                .map_err(|e| format!("write code table to output failed: {}", e))?;
        } else {
            serde_json::to_writer(&mut output, analysis.codes())
                .map_err(|e| format!("write code table to output failed: {}", e))?;
        }
        write!(&mut output, "\n").map_err(|e| format!("write newline to output failed: {}", e))?;
    } else {
        report::print_summary(&analysis, &mut output)
            .map_err(|e| format!("write summary to output failed: {}", e))?;
    }

    Ok(())
}
