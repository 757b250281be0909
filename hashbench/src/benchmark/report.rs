//! Serialization of experiment results as comma-separated values.
use crate::benchmark::experiment::ExperimentResult;
use hashbench_core::HashBenchError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header line of the results file.
pub const CSV_HEADER: &str =
    "QtdDados,TamanhoTabela,FuncaoHash,TempoInsercao_ms,Colisoes,TempoBusca_ms,Comparacoes_Busca";

/// Formats one result as a CSV line without the line terminator.
///
/// Times are written in whole milliseconds.
pub fn render_row(result: &ExperimentResult) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        result.experiment.dataset_size,
        result.experiment.capacity,
        result.experiment.strategy,
        result.insert_time.as_millis(),
        result.collisions,
        result.search_time.as_millis(),
        result.comparisons,
    )
}

/// Writes the header and one line per result to `writer`.
pub fn write_csv<W: Write>(writer: &mut W, results: &[ExperimentResult]) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for result in results {
        writeln!(writer, "{}", render_row(result))?;
    }
    writer.flush()
}

/// Writes `results` as CSV to the file at `path`, replacing its contents.
///
/// # Errors
///
/// - [`HashBenchError::Output`] if the file can not be created or written.
pub fn write_results(path: &Path, results: &[ExperimentResult]) -> Result<(), HashBenchError> {
    let to_error = |source| HashBenchError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, results).map_err(to_error)?;

    let file = writer.into_inner().map_err(|e| to_error(e.into_error()))?;
    file.sync_all().map_err(to_error)
}
