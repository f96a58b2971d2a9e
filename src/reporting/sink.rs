use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::constants::messages;
use crate::core::types::ExtractionReport;
use crate::reporting::counter::RunCounter;
use crate::reporting::logging;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Append `line` plus a newline to `path`, creating the file if needed.
///
/// The file is opened and closed for every line.
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{line}")
}

/// Sender side used by extraction tasks.
#[derive(Debug, Clone)]
pub struct SinkHandle {
    tx: mpsc::UnboundedSender<ExtractionReport>,
}

impl SinkHandle {
    /// Queue a report for the writer. Returns `false` if the writer is gone.
    pub fn submit(&self, report: ExtractionReport) -> bool {
        self.tx.send(report).is_ok()
    }
}

/// Single owner of console reporting and the output file.
///
/// Reports arrive over a channel and are written one at a time, so lines of
/// different scripts never interleave.
#[derive(Debug)]
pub struct OutputSink {
    silent: bool,
    output_file: Option<PathBuf>,
    counter: Arc<RunCounter>,
}

impl OutputSink {
    pub fn new(silent: bool, output_file: Option<PathBuf>, counter: Arc<RunCounter>) -> Self {
        Self {
            silent,
            output_file,
            counter,
        }
    }

    /// Start the writer on a blocking thread.
    ///
    /// The writer stops once every [`SinkHandle`] has been dropped and the
    /// queue is drained; the join handle yields the number of reports written.
    pub fn spawn(self) -> (SinkHandle, JoinHandle<usize>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<ExtractionReport>();

        let writer = tokio::task::spawn_blocking(move || {
            let mut written = 0;
            while let Some(report) = rx.blocking_recv() {
                let stdout = io::stdout();
                let mut console = stdout.lock();
                self.write_report(&report, &mut console);
                written += 1;
            }
            written
        });

        (SinkHandle { tx }, writer)
    }

    /// Stamp `report` with the next ordinal and write it out.
    pub fn write_report<W: Write>(&self, report: &ExtractionReport, console: &mut W) -> usize {
        let ordinal = self.counter.next();
        let lines = report.lines(ordinal);

        if !self.silent {
            let result = lines
                .iter()
                .try_for_each(|line| writeln!(console, "{line}"))
                .and_then(|_| console.flush());
            if let Err(e) = result {
                logging::log_error("Could not write report to console", Some(&e));
            }
        }

        if let Some(ref path) = self.output_file {
            for line in &lines {
                if let Err(e) = append_line(path, line) {
                    println!("{} {}", messages::OUTPUT_WRITE_FAILED, e);
                    logging::log_error(
                        &format!("Could not append to '{}'", path.display()),
                        Some(&e),
                    );
                    break;
                }
            }
        }

        ordinal
    }
}
