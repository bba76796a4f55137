use super::cli::OutputFormat;
use super::error::CliError;
use chemxplore::{Calculator, DisplayState, Entry, Presentation};
use prettytable::*;
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_presentation(
    mut writer: Box<dyn Write>,
    calculator: Calculator,
    presentation: &Presentation,
    format: &OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, calculator, presentation)?,
        OutputFormat::Plain => writeln!(writer, "{}", presentation)?,
        OutputFormat::Json => write_json(&mut writer, calculator, presentation)?,
    }
    writer.flush()?;
    Ok(())
}

pub fn write_catalog(mut writer: Box<dyn Write>, format: &OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => {
            let mut table = Table::new();
            table.set_format(box_format());
            table.set_titles(row![bc->"Calculator", bc->"Title", bc->"Fields"]);
            for calculator in Calculator::ALL {
                let fields = calculator.fields().join(", ");
                table.add_row(row![l->calculator.name(), l->calculator.title(), l->fields]);
            }
            table.print(&mut writer)?;
        }
        OutputFormat::Plain => {
            for calculator in Calculator::ALL {
                writeln!(
                    writer,
                    "{}: {}",
                    calculator.name(),
                    calculator.fields().join(", ")
                )?;
            }
        }
        OutputFormat::Json => {
            let catalog: Vec<CatalogEntry> = Calculator::ALL
                .into_iter()
                .map(|calculator| CatalogEntry {
                    name: calculator.name(),
                    title: calculator.title(),
                    fields: calculator.fields(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut writer, &catalog)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct CatalogEntry {
    name: &'static str,
    title: &'static str,
    fields: &'static [&'static str],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    calculator: &'static str,
    state: DisplayState,
    entries: &'a [Entry],
    text: String,
}

fn write_json(
    writer: &mut dyn Write,
    calculator: Calculator,
    presentation: &Presentation,
) -> Result<(), CliError> {
    let report = JsonReport {
        calculator: calculator.name(),
        state: presentation.state,
        entries: &presentation.entries,
        text: presentation.to_string(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

fn box_format() -> format::TableFormat {
    format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build()
}

fn write_pretty_table(
    writer: &mut dyn Write,
    calculator: Calculator,
    presentation: &Presentation,
) -> Result<(), CliError> {
    let title = match presentation.state {
        DisplayState::Success => calculator.title().to_string(),
        DisplayState::Error => format!("{} (invalid input)", calculator.title()),
    };

    let mut title_table = Table::new();
    title_table.set_format(box_format());
    title_table.add_row(row![bc->title]);
    title_table.print(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format());
    for entry in &presentation.entries {
        data_table.add_row(row![b->entry.label, l->entry.value]);
    }
    data_table.print(writer)?;

    Ok(())
}
