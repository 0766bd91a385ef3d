use crate::constants::{REPORT_BALANCED_HEADER, REPORT_GAP_LEFT_HEADER, REPORT_GAP_RIGHT_HEADER};
use crate::dimension::Dimension;
use crate::error::{BalanceError, Result};
use crate::evaluate::Evaluation;
use chrono::Local;
use csv::WriterBuilder;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Write one CSV line per evaluation: clamped values, balance flag and gap bounds.
pub fn write_report<W: Write>(writer: W, results: &[Evaluation]) -> Result<()> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }
    let mut wtr = builder.from_writer(writer);

    let mut header: Vec<String> = Dimension::all().map(|d| d.to_string()).collect();
    header.extend(
        [
            REPORT_BALANCED_HEADER,
            REPORT_GAP_LEFT_HEADER,
            REPORT_GAP_RIGHT_HEADER,
        ]
        .map(String::from),
    );
    wtr.write_record(&header)?;

    for eval in results {
        let mut record: Vec<String> = eval.values.iter().map(|(_, v)| v.to_string()).collect();
        record.push(eval.balanced.to_string());
        record.push(format!("{:.2}", eval.gap.left));
        record.push(format!("{:.2}", eval.gap.right));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export to `balance_<timestamp>.csv` under `output_dir` (or the working directory).
pub fn export_report(results: &[Evaluation], output_dir: Option<&Path>) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("balance_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| BalanceError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| BalanceError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    write_report(BufWriter::new(file), results)?;
    Ok(file_path)
}
