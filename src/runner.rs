//! Run coordination
//!
//! Dispatches one extraction task per URL, joins them all (optionally under
//! a deadline) and shuts the output writer down once every report is queued.

use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::{RunMode, RunSummary};
use crate::extraction::{Extractor, FetchContent, HttpFetcher};
use crate::reporting::logging;
use crate::reporting::{OutputSink, RunCounter};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// Read the batch URL list, trimming lines and skipping blank ones.
pub fn read_url_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let mut urls = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let url = line.trim();
        if !url.is_empty() {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

pub struct Runner {
    config: Config,
    fetcher: Arc<dyn FetchContent>,
    counter: Arc<RunCounter>,
}

impl Runner {
    /// Build a runner fetching over HTTP with the configured timeout and identity.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::from_config(&config)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn FetchContent>) -> Self {
        Self {
            config,
            fetcher,
            counter: Arc::new(RunCounter::new()),
        }
    }

    /// Ordinals handed out so far; shared by every run of this runner.
    pub fn counter(&self) -> &RunCounter {
        &self.counter
    }

    pub async fn run(&self, mode: &RunMode) -> Result<RunSummary> {
        logging::log_run_start(mode);

        // Fail before the writer starts if the list is unreadable.
        let urls = match mode {
            RunMode::Batch(path) => {
                let urls = read_url_list(path)?;
                logging::log_batch_loaded(path, urls.len());
                Some(urls)
            }
            RunMode::Single(_) => None,
        };

        let sink = OutputSink::new(
            self.config.silent(),
            self.config.output_path(),
            self.counter.clone(),
        );
        let (handle, writer) = sink.spawn();
        let extractor = Extractor::new(self.fetcher.clone(), self.config.pattern_file(), handle);

        let summary = match (mode, urls) {
            (RunMode::Single(url), _) => {
                let reported = extractor.extract(url).await;
                drop(extractor);
                RunSummary {
                    dispatched: 1,
                    reported: usize::from(reported),
                    cancelled: 0,
                }
            }
            (RunMode::Batch(_), urls) => {
                self.run_batch(urls.unwrap_or_default(), Arc::new(extractor))
                    .await
            }
        };

        if let Err(e) = writer.await {
            logging::log_error("Output writer stopped unexpectedly", Some(&e));
        }

        Ok(summary)
    }

    /// Spawn one task per URL and wait for all of them.
    async fn run_batch(&self, urls: Vec<String>, extractor: Arc<Extractor>) -> RunSummary {
        let limiter = self
            .config
            .concurrency
            .map(|permits| Arc::new(Semaphore::new(permits)));

        let mut summary = RunSummary {
            dispatched: urls.len(),
            ..Default::default()
        };
        let mut tasks = JoinSet::new();

        for url in urls {
            let extractor = extractor.clone();
            let limiter = limiter.clone();
            tasks.spawn(async move {
                let _permit = match limiter {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };
                extractor.extract(&url).await
            });
        }
        drop(extractor);

        match self.config.deadline_duration() {
            Some(deadline) => {
                let joined =
                    tokio::time::timeout(deadline, Self::join_all(&mut tasks, &mut summary)).await;
                if joined.is_err() {
                    tasks.abort_all();
                    Self::join_all(&mut tasks, &mut summary).await;
                    logging::log_warning(&format!(
                        "Deadline of {}s reached, cancelled {} extraction(s)",
                        deadline.as_secs(),
                        summary.cancelled
                    ));
                }
            }
            None => Self::join_all(&mut tasks, &mut summary).await,
        }

        summary
    }

    async fn join_all(tasks: &mut JoinSet<bool>, summary: &mut RunSummary) {
        while let Some(joined) = tasks.join_next().await {
            Self::record(joined, summary);
        }
    }

    fn record(joined: std::result::Result<bool, JoinError>, summary: &mut RunSummary) {
        match joined {
            Ok(true) => summary.reported += 1,
            Ok(false) => {}
            Err(e) if e.is_cancelled() => summary.cancelled += 1,
            Err(e) => logging::log_error("Extraction task panicked", Some(&e)),
        }
    }
}
