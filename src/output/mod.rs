mod csv_log;
pub(crate) mod format;
mod plot;

pub(crate) use csv_log::CsvLog;
pub(crate) use plot::LivePlot;
