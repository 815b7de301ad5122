use std::io::{self, Write};

use crate::analysis::HuffmanAnalysis;

/// Writes the per-symbol report: one row per symbol in canonical order, with
/// the probability to six decimal places.
pub fn write_code_report(analysis: &HuffmanAnalysis, writer: impl Write) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "Character",
        "Frequency",
        "Probability",
        "HuffmanCode",
        "CodeLength",
    ])?;

    for (symbol, code) in analysis.codes().iter() {
        wtr.write_record([
            symbol.to_string(),
            analysis.frequencies().count(symbol).to_string(),
            format!("{:.6}", analysis.probabilities().probability(symbol)),
            code.to_string(),
            code.len().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the summary report as label/value rows.
pub fn write_summary_report(analysis: &HuffmanAnalysis, writer: impl Write) -> csv::Result<()> {
    let stats = analysis.statistics();
    let mut wtr = csv::Writer::from_writer(writer);

    let total = stats.total_characters.to_string();
    let entropy = format!("{:.5}", stats.entropy);
    let average = format!("{:.5}", stats.average_bits);
    let ascii = stats.bits_ascii.to_string();
    let huffman = stats.bits_huffman.to_string();
    let percentage = format!("{:.2}", stats.compression_percentage);

    for [label, value] in [
        ["Total Characters", total.as_str()],
        ["Entropy (bits/character)", entropy.as_str()],
        ["Average (bits/character)", average.as_str()],
        ["Number Of Bits For ASCII", ascii.as_str()],
        ["Number Of Bits For Huffman", huffman.as_str()],
        ["Percentage Of Compression (%)", percentage.as_str()],
    ] {
        wtr.write_record([label, value])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Prints the summary in the console layout.
pub fn print_summary(analysis: &HuffmanAnalysis, mut writer: impl Write) -> io::Result<()> {
    let stats = analysis.statistics();

    writeln!(writer, "Total Characters:  {}", stats.total_characters)?;
    writeln!(writer, "Entropy:          {:.5} bits/character", stats.entropy)?;
    writeln!(
        writer,
        "Average:          {:.5} bits/character",
        stats.average_bits
    )?;
    writeln!(writer, "Number Of Bits For ASCII:   {}", stats.bits_ascii)?;
    writeln!(writer, "Number Of Bits For Huffman: {}", stats.bits_huffman)?;
    writeln!(
        writer,
        "Percentage Of Compression:  {:.2}%",
        stats.compression_percentage
    )?;

    Ok(())
}
